//! Extensible main-menu core for the nbshell notebook front-end.
//! This crate is the single source of truth for menu-ordering invariants.

pub mod command;
pub mod logging;
pub mod menu;
pub mod shell;

pub use command::{
    ids, Command, CommandRegistry, CommandRegistryError, DispatchError, DispatchResult,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use menu::file::FileMenu;
pub use menu::item::{with_submenu, MenuItem, SubmenuRef};
pub use menu::kernel::{
    KernelAction, KernelDelegate, KernelDelegates, KernelMenu, KernelUser, KernelUserRegistry,
};
pub use menu::main::MainMenu;
pub use menu::named::{edit_menu, help_menu, run_menu, view_menu};
pub use menu::ranked::{RankGroup, RankedMenu, DEFAULT_RANK};
pub use shell::{FocusTracker, WidgetId, WidgetRef, WidgetTracker};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
