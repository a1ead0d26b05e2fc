//! In-memory command registry and dispatch envelope.
//!
//! # Responsibility
//! - Hold named actions (label + enablement predicate + execution closure)
//!   under validated symbolic identifiers.
//! - Provide the synchronous dispatch surface the host menu layer calls when
//!   a user selects a menu entry.
//!
//! # Invariants
//! - Command identifiers are lowercase `namespace:action` style strings.
//! - Execution does not re-check enablement; a correct host never invokes a
//!   disabled command, and defensive handling lives inside the closures.
//! - Delegate failures propagate unchanged as the dispatch error.

use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Symbolic command identifiers wired by the built-in menus.
pub mod ids {
    /// Save the focused document.
    pub const SAVE: &str = "docmanager:save";
    /// Save the focused document under a new name.
    pub const SAVE_AS: &str = "docmanager:save-as";
    /// Rename the focused document.
    pub const RENAME: &str = "docmanager:rename";
    /// Roll the focused document back to its last checkpoint.
    pub const RESTORE_CHECKPOINT: &str = "docmanager:restore-checkpoint";
    /// Duplicate the focused document view.
    pub const CLONE: &str = "docmanager:clone";
    /// Close the focused document.
    pub const CLOSE: &str = "docmanager:close";
    /// Close every open document.
    pub const CLOSE_ALL: &str = "docmanager:close-all-files";
    /// Open the settings editor.
    pub const OPEN_SETTINGS: &str = "settingeditor:open";
    /// Interrupt the kernel backing the focused widget.
    pub const INTERRUPT_KERNEL: &str = "kernel:interrupt";
    /// Restart the kernel backing the focused widget.
    pub const RESTART_KERNEL: &str = "kernel:restart";
    /// Change the kernel backing the focused widget.
    pub const CHANGE_KERNEL: &str = "kernel:change";
}

/// Failure envelope produced by command execution and kernel delegates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchError {
    /// Identifier of the failing command or delegate owner.
    pub source_id: String,
    /// Stable machine-readable failure code.
    pub code: String,
    /// Human-readable failure summary.
    pub message: String,
}

impl DispatchError {
    pub fn new(
        source_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "command dispatch failed: source={} code={} message={}",
            self.source_id, self.code, self.message
        )
    }
}

impl Error for DispatchError {}

/// Result alias for command execution and delegate invocation.
pub type DispatchResult = Result<(), DispatchError>;

/// Command registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRegistryError {
    InvalidCommandId(String),
    DuplicateCommandId(String),
}

impl Display for CommandRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommandId(value) => write!(f, "command id is invalid: {value}"),
            Self::DuplicateCommandId(value) => {
                write!(f, "command id already registered: {value}")
            }
        }
    }
}

impl Error for CommandRegistryError {}

/// Enablement predicate evaluated on demand by the host.
pub type EnabledFn = Box<dyn Fn() -> bool + Send + Sync>;
/// Execution closure invoked when the user selects the command.
pub type ExecuteFn = Box<dyn Fn() -> DispatchResult + Send + Sync>;

/// One registered named action.
pub struct Command {
    label: String,
    enabled: EnabledFn,
    execute: ExecuteFn,
}

impl Command {
    /// Creates a command with an explicit enablement predicate.
    pub fn new(
        label: impl Into<String>,
        enabled: impl Fn() -> bool + Send + Sync + 'static,
        execute: impl Fn() -> DispatchResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            enabled: Box::new(enabled),
            execute: Box::new(execute),
        }
    }

    /// Creates an unconditionally enabled command.
    pub fn always_enabled(
        label: impl Into<String>,
        execute: impl Fn() -> DispatchResult + Send + Sync + 'static,
    ) -> Self {
        Self::new(label, || true, execute)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Runtime command registry keyed by validated identifier.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one command under a symbolic identifier.
    pub fn register(
        &mut self,
        command_id: &str,
        command: Command,
    ) -> Result<(), CommandRegistryError> {
        let command_id = command_id.trim().to_string();
        if !is_valid_command_id(&command_id) {
            return Err(CommandRegistryError::InvalidCommandId(command_id));
        }
        if self.commands.contains_key(command_id.as_str()) {
            return Err(CommandRegistryError::DuplicateCommandId(command_id));
        }

        debug!(
            "event=command_registered module=mainmenu status=ok command_id={} label={}",
            command_id,
            command.label()
        );
        self.commands.insert(command_id, command);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn contains(&self, command_id: &str) -> bool {
        self.commands.contains_key(command_id.trim())
    }

    /// Returns sorted registered command ids.
    pub fn command_ids(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// Returns the display label for one command.
    pub fn label(&self, command_id: &str) -> Option<&str> {
        self.commands
            .get(command_id.trim())
            .map(|command| command.label())
    }

    /// Evaluates the enablement predicate for one command.
    ///
    /// Unknown commands are reported as disabled rather than as an error, so
    /// hosts can render menu entries for commands that are not wired yet.
    pub fn is_enabled(&self, command_id: &str) -> bool {
        match self.commands.get(command_id.trim()) {
            Some(command) => (command.enabled)(),
            None => false,
        }
    }

    /// Executes one command, propagating whatever result it produces.
    pub fn execute(&self, command_id: &str) -> DispatchResult {
        let normalized = command_id.trim();
        match self.commands.get(normalized) {
            Some(command) => (command.execute)(),
            None => Err(DispatchError::new(
                normalized,
                "command_not_found",
                "No command registered under this identifier.",
            )),
        }
    }
}

fn is_valid_command_id(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ':' || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandRegistry, CommandRegistryError, DispatchError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn registers_and_executes_command() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut registry = CommandRegistry::new();
        registry
            .register(
                "notebook:run-all",
                Command::always_enabled("Run All Cells", move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }),
            )
            .expect("command should register");

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("notebook:run-all"));
        assert_eq!(registry.label("notebook:run-all"), Some("Run All Cells"));
        assert!(registry.is_enabled("notebook:run-all"));

        registry
            .execute("notebook:run-all")
            .expect("execution should succeed");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rejects_invalid_or_duplicate_command_id() {
        let mut registry = CommandRegistry::new();

        let invalid = registry.register(
            "Run All",
            Command::always_enabled("Run All", || Ok(())),
        );
        assert!(matches!(
            invalid,
            Err(CommandRegistryError::InvalidCommandId(_))
        ));
        let blank = registry.register("   ", Command::always_enabled("Blank", || Ok(())));
        assert!(matches!(
            blank,
            Err(CommandRegistryError::InvalidCommandId(_))
        ));

        registry
            .register(
                "notebook:run-all",
                Command::always_enabled("Run All Cells", || Ok(())),
            )
            .expect("first registration should succeed");
        let duplicate = registry.register(
            "notebook:run-all",
            Command::always_enabled("Run All Cells", || Ok(())),
        );
        assert!(matches!(
            duplicate,
            Err(CommandRegistryError::DuplicateCommandId(_))
        ));
    }

    #[test]
    fn unknown_command_is_disabled_and_fails_dispatch() {
        let registry = CommandRegistry::new();

        assert!(!registry.is_enabled("kernel:interrupt"));
        let err = registry
            .execute("kernel:interrupt")
            .expect_err("unknown command dispatch should fail");
        assert_eq!(err.code, "command_not_found");
        assert_eq!(err.source_id, "kernel:interrupt");
    }

    #[test]
    fn enablement_predicate_is_reevaluated_per_query() {
        let gate = Arc::new(AtomicUsize::new(0));
        let observed = gate.clone();

        let mut registry = CommandRegistry::new();
        registry
            .register(
                "notebook:trust",
                Command::new(
                    "Trust Notebook",
                    move || observed.load(Ordering::SeqCst) > 0,
                    || Ok(()),
                ),
            )
            .expect("command should register");

        assert!(!registry.is_enabled("notebook:trust"));
        gate.store(1, Ordering::SeqCst);
        assert!(registry.is_enabled("notebook:trust"));
    }

    #[test]
    fn execute_propagates_closure_failure() {
        let mut registry = CommandRegistry::new();
        registry
            .register(
                "notebook:export",
                Command::always_enabled("Export Notebook", || {
                    Err(DispatchError::new(
                        "notebook:export",
                        "export_failed",
                        "Exporter backend is unavailable.",
                    ))
                }),
            )
            .expect("command should register");

        let err = registry
            .execute("notebook:export")
            .expect_err("failure should propagate");
        assert_eq!(err.code, "export_failed");
    }
}
