//! Kanban board vocabulary: task status columns and priorities.
//!
//! Both enums serialize as their lowercase wire names (`"in_progress"`,
//! `"high"`, ...) and expose the same small API through
//! `define_board_enum!`.

use serde::{Deserialize, Serialize};

use crate::coercion::TextValue;
use crate::error::CoreError;

macro_rules! define_board_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default = $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every variant, in board order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Wire name used in JSON bodies and the dataset file.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            /// Parse from the wire name. Matching is exact (case-sensitive).
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_board_enum! {
    /// Board column a task sits in. Any status can move to any other.
    TaskStatus (default = Backlog) {
        Backlog => "backlog",
        InProgress => "in_progress",
        Done => "done",
    }
}

define_board_enum! {
    /// Task priority.
    TaskPriority (default = Medium) {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

/// Trim a required text field and reject it if nothing is left.
///
/// `message` is returned verbatim as the validation error, e.g.
/// `"Name is required"`.
pub fn require_text(value: Option<TextValue>, message: &str) -> Result<String, CoreError> {
    match value {
        Some(text) if !text.as_str().trim().is_empty() => Ok(text.as_str().trim().to_string()),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names() {
        assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
        assert_eq!(TaskStatus::from_name("done"), Some(TaskStatus::Done));
        assert_eq!(TaskStatus::from_name("blocked"), None);
        assert_eq!(TaskStatus::from_name("Done"), None);
    }

    #[test]
    fn defaults() {
        assert_eq!(TaskStatus::default(), TaskStatus::Backlog);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let parsed: TaskPriority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, TaskPriority::High);
    }

    #[test]
    fn all_lists_every_variant_in_order() {
        assert_eq!(
            TaskStatus::ALL,
            &[TaskStatus::Backlog, TaskStatus::InProgress, TaskStatus::Done]
        );
        assert_eq!(TaskPriority::ALL.len(), 3);
    }

    #[test]
    fn require_text_trims() {
        let value = Some(TextValue::from("  Launch  "));
        assert_eq!(require_text(value, "Name is required").unwrap(), "Launch");
    }

    #[test]
    fn require_text_rejects_blank_and_missing() {
        let err = require_text(Some(TextValue::from("   ")), "Name is required").unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg == "Name is required"));
        assert!(require_text(None, "Title is required").is_err());
    }
}
