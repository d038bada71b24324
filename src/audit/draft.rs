//! Authored transitions awaiting an audit.

use crate::core::{Dimensions, Transition, TransitionTable};

/// What an author has written so far: a shape and a list of cells.
///
/// Cells are kept in authoring order so that conflicts can name which
/// entry came first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDraft {
    pub dimensions: Dimensions,
    pub transitions: Vec<Transition>,
}

impl TableDraft {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            transitions: Vec::new(),
        }
    }

    /// The non-trap cells of an existing table.
    pub fn from_table(table: &TransitionTable) -> Self {
        Self {
            dimensions: table.dimensions(),
            transitions: table.authored().collect(),
        }
    }
}
