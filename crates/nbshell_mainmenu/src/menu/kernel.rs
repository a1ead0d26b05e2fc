//! Kernel menu and kernel-action delegation.
//!
//! # Responsibility
//! - Seed the three generated kernel actions in fixed order.
//! - Route interrupt/restart/change to whichever registered document type
//!   claims the currently focused widget.
//!
//! # Invariants
//! - The user registry is ordered; lookup always returns the first tracker
//!   that claims the widget, never a later one.
//! - An action is enabled iff that first match supplies the corresponding
//!   delegate.
//! - Dispatch without a match is a logged no-op, never a panic.

use crate::command::{ids, Command, CommandRegistry, CommandRegistryError, DispatchResult};
use crate::menu::item::MenuItem;
use crate::menu::ranked::RankedMenu;
use crate::shell::{FocusTracker, WidgetRef, WidgetTracker};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex, PoisonError};

/// Generic kernel action a document type may opt into handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelAction {
    Interrupt,
    Restart,
    Change,
}

impl KernelAction {
    /// Stable string id used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interrupt => "interrupt",
            Self::Restart => "restart",
            Self::Change => "change",
        }
    }

    /// Symbolic command identifier this action registers under.
    pub fn command_id(self) -> &'static str {
        match self {
            Self::Interrupt => ids::INTERRUPT_KERNEL,
            Self::Restart => ids::RESTART_KERNEL,
            Self::Change => ids::CHANGE_KERNEL,
        }
    }

    /// User-facing menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Interrupt => "Interrupt Kernel",
            Self::Restart => "Restart Kernel...",
            Self::Change => "Change Kernel...",
        }
    }
}

/// Handler a kernel user supplies for one action.
pub type KernelDelegate = Arc<dyn Fn(&WidgetRef) -> DispatchResult + Send + Sync>;

/// Explicit set of optional delegate slots.
///
/// Absence is a typed, checkable state: a missing slot disables the matching
/// action for widgets this user claims.
#[derive(Clone, Default)]
pub struct KernelDelegates {
    pub interrupt: Option<KernelDelegate>,
    pub restart: Option<KernelDelegate>,
    pub change: Option<KernelDelegate>,
}

impl KernelDelegates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interrupt(
        mut self,
        delegate: impl Fn(&WidgetRef) -> DispatchResult + Send + Sync + 'static,
    ) -> Self {
        self.interrupt = Some(Arc::new(delegate));
        self
    }

    pub fn with_restart(
        mut self,
        delegate: impl Fn(&WidgetRef) -> DispatchResult + Send + Sync + 'static,
    ) -> Self {
        self.restart = Some(Arc::new(delegate));
        self
    }

    pub fn with_change(
        mut self,
        delegate: impl Fn(&WidgetRef) -> DispatchResult + Send + Sync + 'static,
    ) -> Self {
        self.change = Some(Arc::new(delegate));
        self
    }

    /// Returns the delegate slot for one action.
    pub fn get(&self, action: KernelAction) -> Option<&KernelDelegate> {
        match action {
            KernelAction::Interrupt => self.interrupt.as_ref(),
            KernelAction::Restart => self.restart.as_ref(),
            KernelAction::Change => self.change.as_ref(),
        }
    }
}

impl Debug for KernelDelegates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KernelDelegates")
            .field("interrupt", &self.interrupt.is_some())
            .field("restart", &self.restart.is_some())
            .field("change", &self.change.is_some())
            .finish()
    }
}

/// One document type's opt-in to kernel actions.
#[derive(Clone)]
pub struct KernelUser {
    tracker: Arc<dyn WidgetTracker>,
    delegates: KernelDelegates,
}

impl KernelUser {
    pub fn new(tracker: Arc<dyn WidgetTracker>, delegates: KernelDelegates) -> Self {
        Self { tracker, delegates }
    }

    pub fn owns(&self, widget: &WidgetRef) -> bool {
        self.tracker.owns(widget)
    }

    pub fn delegates(&self) -> &KernelDelegates {
        &self.delegates
    }
}

/// Ordered, first-match kernel user registry.
///
/// Clonable shared handle: command closures hold a clone and observe users
/// registered after command wiring. No de-duplication is performed.
#[derive(Clone, Default)]
pub struct KernelUserRegistry {
    users: Arc<Mutex<Vec<KernelUser>>>,
}

impl KernelUserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one user; registration order decides lookup priority.
    pub fn register(&self, user: KernelUser) {
        let mut users = self.lock_users();
        users.push(user);
        debug!(
            "event=kernel_user_registered module=mainmenu status=ok total={}",
            users.len()
        );
    }

    pub fn len(&self) -> usize {
        self.lock_users().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_users().is_empty()
    }

    /// Returns the first registered user whose tracker claims the widget.
    pub fn find_owner(&self, widget: &WidgetRef) -> Option<KernelUser> {
        self.lock_users()
            .iter()
            .find(|user| user.owns(widget))
            .cloned()
    }

    /// Whether the first matching user supplies the delegate for `action`.
    pub fn action_enabled(&self, action: KernelAction, widget: &WidgetRef) -> bool {
        self.find_owner(widget)
            .is_some_and(|user| user.delegates.get(action).is_some())
    }

    /// Invokes the first matching delegate with the widget.
    ///
    /// A correct host only calls this for enabled actions; without a match
    /// this is a logged no-op rather than a failure.
    pub fn invoke(&self, action: KernelAction, widget: &WidgetRef) -> DispatchResult {
        let Some(user) = self.find_owner(widget) else {
            warn!(
                "event=kernel_action_skipped module=mainmenu status=no_owner action={} widget_kind={}",
                action.as_str(),
                widget.kind
            );
            return Ok(());
        };
        let Some(delegate) = user.delegates.get(action) else {
            warn!(
                "event=kernel_action_skipped module=mainmenu status=no_delegate action={} widget_kind={}",
                action.as_str(),
                widget.kind
            );
            return Ok(());
        };
        delegate(widget)
    }

    fn lock_users(&self) -> std::sync::MutexGuard<'_, Vec<KernelUser>> {
        // Poisoning can only follow a panic in a registrant; the list itself
        // stays structurally valid.
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The Kernel menu: seeded kernel actions plus the delegation registry.
pub struct KernelMenu {
    menu: RankedMenu,
    users: KernelUserRegistry,
}

impl KernelMenu {
    /// Builds the Kernel menu with the three generated actions seeded in
    /// fixed order: interrupt, restart, change.
    pub fn new() -> Self {
        let mut menu = RankedMenu::new("Kernel");
        menu.seed_items([
            MenuItem::command(ids::INTERRUPT_KERNEL),
            MenuItem::command(ids::RESTART_KERNEL),
            MenuItem::command(ids::CHANGE_KERNEL),
        ]);

        Self {
            menu,
            users: KernelUserRegistry::new(),
        }
    }

    pub fn menu(&self) -> &RankedMenu {
        &self.menu
    }

    /// Merges a contributed group after the seeded kernel actions.
    pub fn add_group(&mut self, items: Vec<MenuItem>, rank: Option<i64>) {
        self.menu.add_group(items, rank);
    }

    pub fn users(&self) -> &KernelUserRegistry {
        &self.users
    }

    /// Registers one kernel user; no uniqueness constraint applies.
    pub fn register_user(&self, user: KernelUser) {
        self.users.register(user);
    }

    /// Wires the three kernel actions into an injected command registry.
    ///
    /// Explicit initialization step: construction itself has no registry
    /// side effects. The registered closures query `shell` for the focused
    /// widget on every enablement check and execution.
    pub fn register_commands(
        &self,
        registry: &mut CommandRegistry,
        shell: Arc<dyn FocusTracker>,
    ) -> Result<(), CommandRegistryError> {
        for action in [
            KernelAction::Interrupt,
            KernelAction::Restart,
            KernelAction::Change,
        ] {
            let users = self.users.clone();
            let enabled_shell = shell.clone();
            let execute_users = self.users.clone();
            let execute_shell = shell.clone();

            registry.register(
                action.command_id(),
                Command::new(
                    action.label(),
                    move || {
                        enabled_shell
                            .active_widget()
                            .is_some_and(|widget| users.action_enabled(action, &widget))
                    },
                    move || match execute_shell.active_widget() {
                        Some(widget) => execute_users.invoke(action, &widget),
                        None => {
                            warn!(
                                "event=kernel_action_skipped module=mainmenu status=no_focus action={}",
                                action.as_str()
                            );
                            Ok(())
                        }
                    },
                ),
            )?;
        }
        Ok(())
    }
}

impl Default for KernelMenu {
    fn default() -> Self {
        Self::new()
    }
}
