//! Shell collaborator seams.
//!
//! # Responsibility
//! - Define the host-facing contracts the menu core queries at dispatch time.
//! - Keep the core decoupled from any concrete widget or windowing toolkit.
//!
//! # Invariants
//! - `WidgetRef.id` is stable for the lifetime of the referenced widget.
//! - Trait implementations live in the host; the core only calls them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a host widget.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type WidgetId = Uuid;

/// Lightweight reference to one host widget (a document or activity).
///
/// The core never inspects widget internals; it only passes references
/// through to trackers and delegates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetRef {
    /// Stable global ID used for ownership checks and auditing.
    pub id: WidgetId,
    /// Host-defined widget kind, e.g. `notebook` or `console`.
    pub kind: String,
}

impl WidgetRef {
    /// Creates a widget reference with a generated stable ID.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), kind)
    }

    /// Creates a widget reference with a caller-provided stable ID.
    ///
    /// Used by hosts where widget identity already exists externally.
    pub fn with_id(id: WidgetId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Capability query over one widget kind.
///
/// A tracker answers whether it currently owns/manages a given widget.
/// Registered kernel users supply one tracker each; delegation resolves to
/// the first registered tracker that claims the focused widget.
pub trait WidgetTracker: Send + Sync {
    fn owns(&self, widget: &WidgetRef) -> bool;
}

/// Focus query over the application shell.
///
/// Queried synchronously by enablement predicates and execution closures.
pub trait FocusTracker: Send + Sync {
    /// Returns the currently focused widget, or `None` when nothing has focus.
    fn active_widget(&self) -> Option<WidgetRef>;
}

#[cfg(test)]
mod tests {
    use super::WidgetRef;
    use uuid::Uuid;

    #[test]
    fn new_generates_stable_non_nil_id() {
        let widget = WidgetRef::new("notebook");
        assert!(!widget.id.is_nil());
        assert_eq!(widget.kind, "notebook");
    }

    #[test]
    fn serialization_uses_expected_wire_fields() {
        let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555")
            .expect("literal uuid should parse");
        let widget = WidgetRef::with_id(id, "console");

        let json = serde_json::to_value(&widget).expect("widget should serialize");
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["kind"], "console");

        let decoded: WidgetRef =
            serde_json::from_value(json).expect("widget should deserialize");
        assert_eq!(decoded, widget);
    }
}
