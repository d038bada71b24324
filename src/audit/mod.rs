//! Validation-based audit of authored transition tables.
//!
//! The engine trusts its table: it never re-checks that the trap row is
//! absorbing or that targets are in range. This module is where those
//! properties are established, once, before a table is handed out.
//!
//! Audits use Stillwater's `Validation` type so that an author fixing a
//! hand-written table sees every defect in one pass instead of one per
//! rebuild.
//!
//! # Example
//!
//! ```rust
//! use stately::audit::{audit_table, AuditRules, TableDraft};
//! use stately::core::{Dimensions, StateId, Symbol, Transition};
//!
//! let mut draft = TableDraft::new(Dimensions::new(3, 2));
//! draft.transitions.push(Transition::new(StateId::new(1), Symbol::new(1), StateId::new(2)));
//!
//! let rules = AuditRules::new()
//!     .require_pred(|d| d.transitions.len() >= 2, "expected at least two transitions");
//!
//! assert!(AuditRules::new().audit(&draft).is_success());
//! assert!(rules.audit(&draft).is_failure());
//! ```

pub mod draft;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use draft::TableDraft;
pub use rules::{audit_table, AuditCheck, AuditResult, AuditRules};
pub use violations::TableViolation;
