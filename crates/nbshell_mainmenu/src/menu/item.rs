//! Menu item descriptors.
//!
//! # Responsibility
//! - Define the opaque item shape contributors hand to menus.
//! - Keep the core limited to type discrimination: command reference,
//!   separator marker, or nested submenu reference.
//!
//! # Invariants
//! - Descriptors are stored by value and never reinterpreted by the menu.
//! - A submenu reference is shared; every clone points at the same menu.

use crate::menu::ranked::RankedMenu;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared handle to a nested menu.
///
/// The File menu's "New" submenu is handed out through this handle so other
/// components can populate it after construction.
pub type SubmenuRef = Arc<Mutex<RankedMenu>>;

/// One selectable menu entry.
#[derive(Debug, Clone)]
pub enum MenuItem {
    /// Reference to a named action by symbolic command identifier.
    Command(String),
    /// Visual divider between item regions.
    Separator,
    /// Nested menu reference.
    Submenu(SubmenuRef),
}

impl MenuItem {
    /// Creates a command reference item.
    pub fn command(command_id: impl Into<String>) -> Self {
        Self::Command(command_id.into())
    }

    /// Creates a separator marker.
    pub fn separator() -> Self {
        Self::Separator
    }

    /// Creates a submenu item owning a fresh shared handle.
    pub fn submenu(menu: RankedMenu) -> Self {
        Self::Submenu(Arc::new(Mutex::new(menu)))
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }

    /// Returns the command identifier for command items.
    pub fn command_id(&self) -> Option<&str> {
        match self {
            Self::Command(command_id) => Some(command_id),
            _ => None,
        }
    }

    /// Returns the shared submenu handle for submenu items.
    pub fn as_submenu(&self) -> Option<&SubmenuRef> {
        match self {
            Self::Submenu(handle) => Some(handle),
            _ => None,
        }
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Command(left), Self::Command(right)) => left == right,
            (Self::Separator, Self::Separator) => true,
            // Submenu items compare by handle identity, not content.
            (Self::Submenu(left), Self::Submenu(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

/// Runs one closure against the menu behind a shared submenu handle.
///
/// Lock poisoning can only follow a panic in another accessor; the menu
/// state itself stays structurally valid, so the poisoned guard is reused.
pub fn with_submenu<R>(handle: &SubmenuRef, f: impl FnOnce(&mut RankedMenu) -> R) -> R {
    let mut menu = handle.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut menu)
}

#[cfg(test)]
mod tests {
    use super::{with_submenu, MenuItem};
    use crate::menu::ranked::RankedMenu;

    #[test]
    fn discriminates_item_kinds() {
        let command = MenuItem::command("docmanager:save");
        assert_eq!(command.command_id(), Some("docmanager:save"));
        assert!(!command.is_separator());
        assert!(command.as_submenu().is_none());

        assert!(MenuItem::separator().is_separator());

        let submenu = MenuItem::submenu(RankedMenu::new("New"));
        assert!(submenu.as_submenu().is_some());
        assert!(submenu.command_id().is_none());
    }

    #[test]
    fn submenu_handles_compare_by_identity() {
        let first = MenuItem::submenu(RankedMenu::new("New"));
        let alias = first.clone();
        let second = MenuItem::submenu(RankedMenu::new("New"));

        assert_eq!(first, alias);
        assert_ne!(first, second);
    }

    #[test]
    fn with_submenu_exposes_shared_menu_state() {
        let item = MenuItem::submenu(RankedMenu::new("New"));
        let handle = item.as_submenu().expect("submenu handle").clone();

        with_submenu(&handle, |menu| {
            menu.add_group(vec![MenuItem::command("notebook:create-new")], None);
        });

        let observed = with_submenu(&handle, |menu| menu.items().len());
        assert_eq!(observed, 1);
    }
}
