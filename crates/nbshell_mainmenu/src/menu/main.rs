//! Application menu bar.
//!
//! # Responsibility
//! - Own the six built-in menus in fixed display order.
//! - Perform all command registration as one explicit initialization pass.

use crate::command::{CommandRegistry, CommandRegistryError};
use crate::menu::file::FileMenu;
use crate::menu::kernel::KernelMenu;
use crate::menu::named::{edit_menu, help_menu, run_menu, view_menu};
use crate::menu::ranked::RankedMenu;
use crate::shell::FocusTracker;
use std::sync::Arc;

/// The application-level menu bar: File, Edit, View, Run, Kernel, Help.
pub struct MainMenu {
    file: FileMenu,
    edit: RankedMenu,
    view: RankedMenu,
    run: RankedMenu,
    kernel: KernelMenu,
    help: RankedMenu,
}

impl MainMenu {
    /// Builds the bar with every built-in menu seeded.
    ///
    /// Construction is side-effect free; call [`MainMenu::register_commands`]
    /// to wire generated actions into a command registry.
    pub fn new() -> Self {
        Self {
            file: FileMenu::new(),
            edit: edit_menu(),
            view: view_menu(),
            run: run_menu(),
            kernel: KernelMenu::new(),
            help: help_menu(),
        }
    }

    pub fn file(&self) -> &FileMenu {
        &self.file
    }

    pub fn file_mut(&mut self) -> &mut FileMenu {
        &mut self.file
    }

    pub fn edit(&self) -> &RankedMenu {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut RankedMenu {
        &mut self.edit
    }

    pub fn view(&self) -> &RankedMenu {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut RankedMenu {
        &mut self.view
    }

    pub fn run(&self) -> &RankedMenu {
        &self.run
    }

    pub fn run_mut(&mut self) -> &mut RankedMenu {
        &mut self.run
    }

    pub fn kernel(&self) -> &KernelMenu {
        &self.kernel
    }

    pub fn kernel_mut(&mut self) -> &mut KernelMenu {
        &mut self.kernel
    }

    pub fn help(&self) -> &RankedMenu {
        &self.help
    }

    pub fn help_mut(&mut self) -> &mut RankedMenu {
        &mut self.help
    }

    /// Returns the menus in display order.
    pub fn menus(&self) -> [&RankedMenu; 6] {
        [
            self.file.menu(),
            &self.edit,
            &self.view,
            &self.run,
            self.kernel.menu(),
            &self.help,
        ]
    }

    /// Registers every generated action against an injected registry.
    pub fn register_commands(
        &self,
        registry: &mut CommandRegistry,
        shell: Arc<dyn FocusTracker>,
    ) -> Result<(), CommandRegistryError> {
        self.kernel.register_commands(registry, shell)
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}
