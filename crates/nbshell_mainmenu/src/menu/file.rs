//! File menu construction.
//!
//! # Responsibility
//! - Seed the fixed document-management block and the settings action.
//! - Hand out the shared "New" submenu so other components can populate it.
//!
//! # Invariants
//! - Seeded items only wire symbolic command identifiers; the actions
//!   themselves live in the host command layer.
//! - Contributed groups always render after the seeded block.

use crate::command::ids;
use crate::menu::item::{MenuItem, SubmenuRef};
use crate::menu::ranked::RankedMenu;
use std::sync::{Arc, Mutex};

/// The File menu: fixed document actions plus the generic group mechanism.
#[derive(Debug)]
pub struct FileMenu {
    menu: RankedMenu,
    new_menu: SubmenuRef,
}

impl FileMenu {
    /// Builds the File menu with its seeded item block.
    pub fn new() -> Self {
        let new_menu: SubmenuRef = Arc::new(Mutex::new(RankedMenu::new("New")));

        let mut menu = RankedMenu::new("File");
        menu.seed_item(MenuItem::Submenu(new_menu.clone()));
        menu.seed_items([
            MenuItem::command(ids::SAVE),
            MenuItem::command(ids::SAVE_AS),
            MenuItem::command(ids::RENAME),
            MenuItem::command(ids::RESTORE_CHECKPOINT),
            MenuItem::command(ids::CLONE),
            MenuItem::command(ids::CLOSE),
            MenuItem::command(ids::CLOSE_ALL),
            MenuItem::separator(),
            MenuItem::command(ids::OPEN_SETTINGS),
        ]);

        Self { menu, new_menu }
    }

    /// Shared handle to the initially empty "New" submenu.
    pub fn new_menu(&self) -> SubmenuRef {
        self.new_menu.clone()
    }

    pub fn menu(&self) -> &RankedMenu {
        &self.menu
    }

    /// Merges a contributed group after the seeded block.
    pub fn add_group(&mut self, items: Vec<MenuItem>, rank: Option<i64>) {
        self.menu.add_group(items, rank);
    }
}

impl Default for FileMenu {
    fn default() -> Self {
        Self::new()
    }
}
