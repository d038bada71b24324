//! Builder for constructing transition tables.

use crate::audit::{AuditRules, TableDraft};
use crate::builder::error::BuildError;
use crate::core::{Dimensions, Label, StateId, Symbol, Transition, TransitionTable};
use stillwater::validation::Validation;

/// Builder for transition tables with a fluent API.
///
/// Only the cells that lead somewhere other than trap need to be written;
/// `build` starts from an all-trap table and overlays the authored cells
/// after auditing them.
///
/// # Example
///
/// ```rust
/// use stately::builder::TableBuilder;
/// use stately::{states, symbols};
///
/// states! {
///     enum Door { Trap, Closed, Open }
/// }
///
/// symbols! {
///     enum Action { Invalid, Push, Pull }
/// }
///
/// let table = TableBuilder::for_labels::<Door, Action>()
///     .on(Door::Closed, Action::Push, Door::Open)
///     .on(Door::Open, Action::Pull, Door::Closed)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.num_states(), 3);
/// assert_eq!(table.alphabet_size(), 2);
/// ```
pub struct TableBuilder {
    draft: TableDraft,
    rules: AuditRules,
}

impl TableBuilder {
    /// Create a builder for a table of the given shape.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            draft: TableDraft::new(dimensions),
            rules: AuditRules::new(),
        }
    }

    /// Create a builder whose shape is spanned by two label enums.
    pub fn for_labels<S: Label, Y: Label>() -> Self {
        Self::new(Dimensions::of::<S, Y>())
    }

    /// Author one cell.
    pub fn on(
        mut self,
        from: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        to: impl Into<StateId>,
    ) -> Self {
        self.draft.transitions.push(Transition::new(from, symbol, to));
        self
    }

    /// Author the same target for several symbols out of one state.
    pub fn on_each<I, Y>(
        mut self,
        from: impl Into<StateId>,
        symbols: I,
        to: impl Into<StateId>,
    ) -> Self
    where
        I: IntoIterator<Item = Y>,
        Y: Into<Symbol>,
    {
        let from = from.into();
        let to = to.into();
        self.draft.transitions.extend(
            symbols
                .into_iter()
                .map(|symbol| Transition::new(from, symbol, to)),
        );
        self
    }

    /// Add pre-built transitions.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.draft.transitions.extend(transitions);
        self
    }

    /// Replace the audit rules (structural checks always apply).
    pub fn rules(mut self, rules: AuditRules) -> Self {
        self.rules = rules;
        self
    }

    /// Audit the authored cells and build the table.
    /// Returns an error listing every violation if the audit fails.
    pub fn build(self) -> Result<TransitionTable, BuildError> {
        let dimensions = self.draft.dimensions;
        if dimensions.num_states == 0 {
            return Err(BuildError::EmptyStateSpace);
        }

        let mut table = match TransitionTable::try_new(dimensions) {
            Some(table) => table,
            None => {
                tracing::warn!(
                    "Rejected transition table ({} states, alphabet of {}): too large",
                    dimensions.num_states,
                    dimensions.alphabet_size
                );
                return Err(BuildError::TooLarge { dimensions });
            }
        };

        if let Validation::Failure(errors) = self.rules.audit(&self.draft) {
            let violations: Vec<_> = errors.iter().cloned().collect();
            tracing::warn!(
                "Rejected transition table ({} states, {} symbols): {} violation(s)",
                dimensions.num_states,
                dimensions.symbol_count(),
                violations.len()
            );
            return Err(BuildError::InvalidTable { violations });
        }

        for transition in &self.draft.transitions {
            table.set(*transition)?;
        }

        tracing::debug!(
            "Built transition table: {} states, {} symbols, {} authored cells",
            dimensions.num_states,
            dimensions.symbol_count(),
            self.draft.transitions.len()
        );

        Ok(table)
    }
}
