//! Rank-grouped extensible menu.
//!
//! # Responsibility
//! - Merge independently contributed item groups into one stable order.
//! - Re-derive the flat visible item list, with separators between regions,
//!   after every mutation.
//!
//! # Invariants
//! - Groups are sorted by ascending rank; equal ranks keep insertion order.
//! - Items within a group keep their relative order; a group is never split.
//! - The flat list is always: fixed prefix, then each non-empty group in
//!   rank order, with a separator before every group that has rendered
//!   content before it.
//! - Empty groups keep their rank slot but render nothing.

use crate::menu::item::MenuItem;
use log::debug;

/// Rank applied when a contributor omits one.
pub const DEFAULT_RANK: i64 = 100;

/// One contributor's atomic, ordered batch of menu items.
///
/// Retained for the lifetime of the menu so later insertions can compute
/// their position; never mutated after creation.
#[derive(Debug, Clone)]
pub struct RankGroup {
    items: Vec<MenuItem>,
    rank: i64,
}

impl RankGroup {
    pub fn rank(&self) -> i64 {
        self.rank
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Menu container with rank-based group insertion.
#[derive(Debug)]
pub struct RankedMenu {
    title: String,
    fixed: Vec<MenuItem>,
    groups: Vec<RankGroup>,
    items: Vec<MenuItem>,
}

impl RankedMenu {
    /// Creates an empty menu with a display title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fixed: Vec::new(),
            groups: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the derived flat item sequence, separators included.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Count of menu-specific items preceding the group region.
    pub fn start_index(&self) -> usize {
        self.fixed.len()
    }

    /// Number of recorded rank groups, empty groups included.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the recorded groups in rank order.
    pub fn groups(&self) -> &[RankGroup] {
        &self.groups
    }

    /// Appends one menu-specific item ahead of the group region.
    ///
    /// Seeded items always render before every contributed group, no matter
    /// when they are added relative to `add_group` calls.
    pub fn seed_item(&mut self, item: MenuItem) {
        self.fixed.push(item);
        self.rebuild();
    }

    /// Appends several menu-specific items ahead of the group region.
    pub fn seed_items(&mut self, items: impl IntoIterator<Item = MenuItem>) {
        self.fixed.extend(items);
        self.rebuild();
    }

    /// Merges one contributed group into the menu at the given rank.
    ///
    /// # Contract
    /// - `rank = None` applies [`DEFAULT_RANK`].
    /// - Insertion position is the non-strict upper bound on rank, so groups
    ///   with equal rank keep first-in-first-out order.
    /// - `items` may be empty; the group is still recorded but contributes
    ///   nothing visible.
    pub fn add_group(&mut self, items: Vec<MenuItem>, rank: Option<i64>) {
        let rank = rank.unwrap_or(DEFAULT_RANK);
        let group = RankGroup { items, rank };

        // First position whose existing rank is strictly greater.
        let group_index = self.groups.partition_point(|existing| existing.rank <= rank);
        debug!(
            "event=menu_group_added module=mainmenu status=ok menu={} rank={} size={} position={}",
            self.title,
            rank,
            group.len(),
            group_index
        );
        self.groups.insert(group_index, group);
        self.rebuild();
    }

    /// Re-derives the flat item list from the fixed prefix and group list.
    fn rebuild(&mut self) {
        self.items.clear();
        self.items.extend(self.fixed.iter().cloned());
        for group in &self.groups {
            if group.is_empty() {
                continue;
            }
            if !self.items.is_empty() {
                self.items.push(MenuItem::Separator);
            }
            self.items.extend(group.items.iter().cloned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RankedMenu, DEFAULT_RANK};
    use crate::menu::item::MenuItem;

    fn shape(menu: &RankedMenu) -> Vec<String> {
        menu.items()
            .iter()
            .map(|item| match item {
                MenuItem::Command(command_id) => command_id.clone(),
                MenuItem::Separator => "|".to_string(),
                MenuItem::Submenu(_) => "[submenu]".to_string(),
            })
            .collect()
    }

    fn commands(ids: &[&str]) -> Vec<MenuItem> {
        ids.iter().map(|id| MenuItem::command(*id)).collect()
    }

    #[test]
    fn first_group_renders_without_leading_separator() {
        let mut menu = RankedMenu::new("Edit");
        menu.add_group(commands(&["edit:undo", "edit:redo"]), None);

        assert_eq!(shape(&menu), vec!["edit:undo", "edit:redo"]);
        assert_eq!(menu.start_index(), 0);
    }

    #[test]
    fn omitted_rank_defaults_to_one_hundred() {
        let mut menu = RankedMenu::new("Edit");
        menu.add_group(commands(&["edit:undo"]), None);
        menu.add_group(commands(&["edit:find"]), Some(DEFAULT_RANK + 1));
        menu.add_group(commands(&["edit:cut"]), Some(DEFAULT_RANK - 1));

        assert_eq!(
            shape(&menu),
            vec!["edit:cut", "|", "edit:undo", "|", "edit:find"]
        );
    }

    #[test]
    fn lower_rank_group_moves_ahead_of_existing_content() {
        let mut menu = RankedMenu::new("View");
        menu.add_group(commands(&["view:zoom-in", "view:zoom-out"]), Some(50));
        menu.add_group(commands(&["view:line-numbers"]), Some(10));

        assert_eq!(
            shape(&menu),
            vec!["view:line-numbers", "|", "view:zoom-in", "view:zoom-out"]
        );
    }

    #[test]
    fn equal_rank_groups_keep_insertion_order() {
        let mut menu = RankedMenu::new("Run");
        menu.add_group(commands(&["run:run-cell"]), Some(10));
        menu.add_group(commands(&["run:run-all"]), Some(10));

        assert_eq!(shape(&menu), vec!["run:run-cell", "|", "run:run-all"]);
    }

    #[test]
    fn empty_group_is_recorded_but_invisible() {
        let mut menu = RankedMenu::new("Help");
        menu.add_group(commands(&["help:about"]), Some(20));
        menu.add_group(Vec::new(), Some(10));
        menu.add_group(commands(&["help:docs"]), Some(30));

        assert_eq!(menu.group_count(), 3);
        assert_eq!(shape(&menu), vec!["help:about", "|", "help:docs"]);
    }

    #[test]
    fn seeded_items_stay_ahead_of_groups_with_separator() {
        let mut menu = RankedMenu::new("File");
        menu.seed_items(commands(&["docmanager:save", "docmanager:close"]));
        menu.add_group(commands(&["filebrowser:open-path"]), Some(5));

        assert_eq!(menu.start_index(), 2);
        assert_eq!(
            shape(&menu),
            vec![
                "docmanager:save",
                "docmanager:close",
                "|",
                "filebrowser:open-path"
            ]
        );
    }

    #[test]
    fn seeding_after_group_insertion_keeps_fixed_prefix_first() {
        let mut menu = RankedMenu::new("File");
        menu.add_group(commands(&["filebrowser:open-path"]), None);
        menu.seed_item(MenuItem::command("docmanager:save"));

        assert_eq!(
            shape(&menu),
            vec!["docmanager:save", "|", "filebrowser:open-path"]
        );
    }
}
