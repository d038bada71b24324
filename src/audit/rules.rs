//! Audit rules for authored tables using Validation.

use crate::audit::draft::TableDraft;
use crate::audit::violations::TableViolation;
use crate::core::{StateId, Symbol, Transition, TransitionTable};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of auditing a draft: success, or every violation found.
pub type AuditResult = Validation<(), NonEmptyVec<TableViolation>>;

/// Type alias for custom audit check functions
pub type AuditCheck = Box<dyn Fn(&TableDraft) -> AuditResult + Send + Sync>;

/// Audit rules for transition tables.
///
/// The structural checks always run: every authored cell must be in range,
/// no cell may be authored twice with different targets, and the trap row
/// may only lead back to trap. Extra checks can be layered on with
/// [`AuditRules::require`]. All violations are accumulated rather than
/// stopping at the first one.
///
/// # Example
///
/// ```rust
/// use stately::audit::{AuditRules, TableDraft};
/// use stately::core::{Dimensions, StateId, Symbol, Transition};
///
/// let mut draft = TableDraft::new(Dimensions::new(2, 1));
/// draft.transitions.push(Transition::new(StateId::TRAP, Symbol::new(1), StateId::new(1)));
/// draft.transitions.push(Transition::new(StateId::new(1), Symbol::new(4), StateId::new(1)));
///
/// let result = AuditRules::new().audit(&draft);
/// assert!(result.is_failure());
/// ```
pub struct AuditRules {
    pub(crate) required_checks: Vec<AuditCheck>,
}

impl AuditRules {
    /// Structural checks only.
    pub fn new() -> Self {
        Self {
            required_checks: Vec::new(),
        }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&TableDraft) -> AuditResult + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&TableDraft) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        let check = move |draft: &TableDraft| {
            if predicate(draft) {
                Validation::success(())
            } else {
                Validation::fail(TableViolation::CustomCheckFailed {
                    message: message.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Audit a draft, accumulating ALL violations.
    pub fn audit(&self, draft: &TableDraft) -> AuditResult {
        let mut checks: Vec<AuditResult> = Vec::new();
        let mut authored: HashMap<(StateId, Symbol), StateId> = HashMap::new();

        for transition in &draft.transitions {
            let in_range = check_bounds(draft, transition);
            let bounded = in_range.is_success();
            checks.push(in_range);
            if !bounded {
                continue;
            }

            match authored.get(&(transition.from, transition.symbol)) {
                Some(&first) if first != transition.to => {
                    checks.push(Validation::fail(TableViolation::ConflictingTransition {
                        from: transition.from,
                        symbol: transition.symbol,
                        first,
                        second: transition.to,
                    }));
                }
                Some(_) => {}
                None => {
                    authored.insert((transition.from, transition.symbol), transition.to);
                }
            }

            if transition.from.is_trap() && !transition.to.is_trap() {
                checks.push(Validation::fail(TableViolation::TrapEscapes {
                    symbol: transition.symbol,
                    to: transition.to,
                }));
            }
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(draft));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl Default for AuditRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-check the structural rules against a built table.
pub fn audit_table(table: &TransitionTable) -> AuditResult {
    AuditRules::new().audit(&TableDraft::from_table(table))
}

fn check_bounds(draft: &TableDraft, transition: &Transition) -> AuditResult {
    let dims = draft.dimensions;
    let mut violations: Vec<AuditResult> = Vec::new();

    if !dims.contains_state(transition.from) {
        violations.push(Validation::fail(TableViolation::SourceOutOfRange {
            from: transition.from,
            symbol: transition.symbol,
            num_states: dims.num_states,
        }));
    }
    if !dims.contains_symbol(transition.symbol) {
        violations.push(Validation::fail(TableViolation::SymbolOutOfRange {
            from: transition.from,
            symbol: transition.symbol,
            symbol_count: dims.symbol_count(),
        }));
    }
    if !dims.contains_state(transition.to) {
        violations.push(Validation::fail(TableViolation::TargetOutOfRange {
            from: transition.from,
            symbol: transition.symbol,
            to: transition.to,
            num_states: dims.num_states,
        }));
    }

    Validation::all_vec(violations).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimensions;

    fn t(from: usize, symbol: usize, to: usize) -> Transition {
        Transition::new(StateId::new(from), Symbol::new(symbol), StateId::new(to))
    }

    fn draft(dimensions: Dimensions, transitions: &[Transition]) -> TableDraft {
        TableDraft {
            dimensions,
            transitions: transitions.to_vec(),
        }
    }

    fn violations(result: AuditResult) -> Vec<TableViolation> {
        match result {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn well_formed_draft_passes() {
        let draft = draft(
            Dimensions::new(3, 2),
            &[t(0, 1, 0), t(1, 1, 2), t(2, 2, 1), t(2, 2, 1)],
        );

        assert!(AuditRules::new().audit(&draft).is_success());
    }

    #[test]
    fn audit_accumulates_all_violations() {
        let draft = draft(
            Dimensions::new(2, 1),
            &[t(5, 1, 1), t(1, 3, 1), t(1, 1, 9), t(0, 1, 1)],
        );

        let found = violations(AuditRules::new().audit(&draft));
        assert_eq!(found.len(), 4);
        assert!(found
            .iter()
            .any(|v| matches!(v, TableViolation::SourceOutOfRange { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, TableViolation::SymbolOutOfRange { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, TableViolation::TargetOutOfRange { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, TableViolation::TrapEscapes { .. })));
    }

    #[test]
    fn one_cell_can_break_several_bounds() {
        let draft = draft(Dimensions::new(2, 1), &[t(7, 7, 7)]);

        let found = violations(AuditRules::new().audit(&draft));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn conflicting_authoring_is_reported() {
        let draft = draft(Dimensions::new(3, 1), &[t(1, 1, 2), t(1, 1, 1)]);

        let found = violations(AuditRules::new().audit(&draft));
        assert_eq!(
            found,
            vec![TableViolation::ConflictingTransition {
                from: StateId::new(1),
                symbol: Symbol::new(1),
                first: StateId::new(2),
                second: StateId::new(1),
            }]
        );
    }

    #[test]
    fn custom_predicate_check_runs() {
        let rules = AuditRules::new().require_pred(
            |draft| !draft.transitions.is_empty(),
            "table has no transitions",
        );

        let empty = draft(Dimensions::new(2, 1), &[]);
        let found = violations(rules.audit(&empty));
        assert_eq!(
            found,
            vec![TableViolation::CustomCheckFailed {
                message: "table has no transitions".to_string(),
            }]
        );

        let filled = draft(Dimensions::new(2, 1), &[t(1, 1, 1)]);
        assert!(rules.audit(&filled).is_success());
    }

    #[test]
    fn custom_validation_check_runs() {
        let rules = AuditRules::new().require(|draft: &TableDraft| {
            if draft.dimensions.num_states > 1 {
                Validation::success(())
            } else {
                Validation::fail(TableViolation::CustomCheckFailed {
                    message: "need a state besides trap".to_string(),
                })
            }
        });

        assert!(rules
            .audit(&draft(Dimensions::new(1, 1), &[]))
            .is_failure());
        assert!(rules
            .audit(&draft(Dimensions::new(2, 1), &[]))
            .is_success());
    }

    #[test]
    fn built_tables_pass_the_structural_audit() {
        let mut table = TransitionTable::new(Dimensions::new(2, 2));
        table.set(t(1, 2, 1)).unwrap();

        assert!(audit_table(&table).is_success());
    }
}
