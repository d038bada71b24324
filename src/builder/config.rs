//! Serializable table definitions.
//!
//! A [`TableDefinition`] is the configuration form of a transition table:
//! its shape plus the authored cells. Omitted cells default to trap, the
//! same as with [`crate::builder::TableBuilder`].
//!
//! ```json
//! {
//!   "num_states": 2,
//!   "alphabet_size": 2,
//!   "transitions": [
//!     { "from": 1, "symbol": 1, "to": 0 },
//!     { "from": 1, "symbol": 2, "to": 1 }
//!   ]
//! }
//! ```

use crate::builder::error::BuildError;
use crate::builder::table::TableBuilder;
use crate::core::{Dimensions, Transition, TransitionTable};
use serde::{Deserialize, Serialize};

/// Shape and authored cells of a transition table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub num_states: usize,
    pub alphabet_size: usize,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl TableDefinition {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.num_states, self.alphabet_size)
    }

    /// Parse a definition from JSON without building it.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Audit and build the table.
    pub fn build(self) -> Result<TransitionTable, BuildError> {
        TableBuilder::new(self.dimensions())
            .transitions(self.transitions)
            .build()
    }
}

impl TryFrom<TableDefinition> for TransitionTable {
    type Error = BuildError;

    fn try_from(definition: TableDefinition) -> Result<Self, Self::Error> {
        definition.build()
    }
}

impl From<TransitionTable> for TableDefinition {
    fn from(table: TransitionTable) -> Self {
        let dimensions = table.dimensions();
        Self {
            num_states: dimensions.num_states,
            alphabet_size: dimensions.alphabet_size,
            transitions: table.authored().collect(),
        }
    }
}

/// Load and build a table from its JSON definition.
pub fn load_table(json: &str) -> Result<TransitionTable, BuildError> {
    TableDefinition::from_json(json)?.build()
}
