//! Symbols and the mapper capability that produces them.
//!
//! A [`SymbolMapper`] is the only place where raw input meets the engine.
//! The raw input type is whatever the embedding validator consumes: a
//! `char`, a record, a string slice. The engine never inspects it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an alphabet element.
///
/// Id `0` is reserved for input the mapper did not recognize. A table with
/// alphabet size `k` accepts the symbols `0..=k`.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Symbol(usize);

impl Symbol {
    /// Unrecognized input.
    pub const INVALID: Symbol = Symbol(0);

    pub const fn new(index: usize) -> Self {
        Symbol(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn is_invalid(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for Symbol {
    fn from(index: usize) -> Self {
        Symbol(index)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Translates one raw input token into a [`Symbol`].
///
/// Implementations must be total (every input, including malformed ones,
/// maps to some symbol), deterministic, and free of side effects. Input the
/// mapper does not recognize maps to [`Symbol::INVALID`]; it is never an
/// error.
///
/// Any `Fn(&I) -> Symbol` is a mapper, so plain functions and closures can be
/// injected directly.
///
/// # Example
///
/// ```rust
/// use stately::core::{Symbol, SymbolMapper};
///
/// fn bit(c: &char) -> Symbol {
///     match c {
///         '0' => Symbol::new(1),
///         '1' => Symbol::new(2),
///         _ => Symbol::INVALID,
///     }
/// }
///
/// assert_eq!(bit.map(&'1'), Symbol::new(2));
/// assert_eq!(bit.map(&'x'), Symbol::INVALID);
/// ```
pub trait SymbolMapper<I: ?Sized> {
    fn map(&self, input: &I) -> Symbol;
}

impl<I, F> SymbolMapper<I> for F
where
    I: ?Sized,
    F: Fn(&I) -> Symbol,
{
    fn map(&self, input: &I) -> Symbol {
        self(input)
    }
}
