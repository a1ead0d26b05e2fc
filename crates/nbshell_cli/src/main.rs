//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nbshell_mainmenu` linkage.
//! - Print the seeded menu-bar outline deterministically, without any GUI
//!   toolkit.

use nbshell_mainmenu::{with_submenu, MainMenu, MenuItem, RankedMenu};

fn main() {
    println!("nbshell_mainmenu version={}", nbshell_mainmenu::core_version());

    let main_menu = MainMenu::new();
    for menu in main_menu.menus() {
        print_menu(menu, 0);
    }
}

fn print_menu(menu: &RankedMenu, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{indent}{}", menu.title());
    for item in menu.items() {
        match item {
            MenuItem::Command(command_id) => println!("{indent}  {command_id}"),
            MenuItem::Separator => println!("{indent}  ---"),
            MenuItem::Submenu(handle) => {
                with_submenu(handle, |submenu| print_menu(submenu, depth + 1));
            }
        }
    }
}
