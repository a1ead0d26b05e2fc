//! Title-only built-in menus.
//!
//! Edit, View, Run and Help carry no seeded items and no extra state; their
//! content comes entirely from contributed rank groups.

use crate::menu::ranked::RankedMenu;

/// Builds the Edit menu.
pub fn edit_menu() -> RankedMenu {
    RankedMenu::new("Edit")
}

/// Builds the View menu.
pub fn view_menu() -> RankedMenu {
    RankedMenu::new("View")
}

/// Builds the Run menu.
pub fn run_menu() -> RankedMenu {
    RankedMenu::new("Run")
}

/// Builds the Help menu.
pub fn help_menu() -> RankedMenu {
    RankedMenu::new("Help")
}
