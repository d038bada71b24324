//! Macros for declaring typed state and symbol labels.

#[doc(hidden)]
#[macro_export]
macro_rules! __label_enum {
    (
        $id:ty,
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[repr(usize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Label for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn index(&self) -> usize {
                *self as usize
            }
        }

        impl From<$name> for $id {
            fn from(label: $name) -> Self {
                <$id>::new(label as usize)
            }
        }

        impl TryFrom<$id> for $name {
            type Error = $id;

            fn try_from(id: $id) -> Result<Self, Self::Error> {
                <Self as $crate::core::Label>::from_index(id.index()).ok_or(id)
            }
        }
    };
}

/// Declare the states of a table as an enum.
///
/// Variants are numbered from zero in declaration order. The first variant
/// is id `0`, the trap state. The generated enum implements
/// [`Label`](crate::core::Label), converts into
/// [`StateId`](crate::core::StateId), and converts back with `TryFrom`.
///
/// # Example
///
/// ```
/// use stately::core::{Label, StateId};
/// use stately::states;
///
/// states! {
///     pub enum Parity {
///         Trap,
///         Even,
///         Odd,
///     }
/// }
///
/// assert_eq!(StateId::from(Parity::Odd), StateId::new(2));
/// assert_eq!(Parity::try_from(StateId::new(1)), Ok(Parity::Even));
/// assert_eq!(Parity::Even.name(), "Even");
/// ```
#[macro_export]
macro_rules! states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($body:tt)* }
    ) => {
        $crate::__label_enum! {
            $crate::core::StateId,
            $(#[$meta])*
            $vis enum $name { $($body)* }
        }
    };
}

/// Declare the alphabet of a table as an enum.
///
/// Variants are numbered from zero in declaration order. The first variant
/// is id `0`, the reserved invalid symbol, so an enum with `k + 1` variants
/// describes an alphabet of size `k`.
///
/// # Example
///
/// ```
/// use stately::core::Symbol;
/// use stately::symbols;
///
/// symbols! {
///     pub enum Bit {
///         Invalid,
///         Zero,
///         One,
///     }
/// }
///
/// assert_eq!(Symbol::from(Bit::Invalid), Symbol::INVALID);
/// assert_eq!(Symbol::from(Bit::One), Symbol::new(2));
/// ```
#[macro_export]
macro_rules! symbols {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($body:tt)* }
    ) => {
        $crate::__label_enum! {
            $crate::core::Symbol,
            $(#[$meta])*
            $vis enum $name { $($body)* }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Dimensions, Label, StateId, Symbol};

    states! {
        enum TestState {
            Trap,
            Start,
            Done,
        }
    }

    symbols! {
        enum TestSymbol {
            Invalid,
            Letter,
            Digit,
            Space,
        }
    }

    #[test]
    fn states_macro_numbers_variants_in_order() {
        assert_eq!(StateId::from(TestState::Trap), StateId::TRAP);
        assert_eq!(StateId::from(TestState::Start), StateId::new(1));
        assert_eq!(StateId::from(TestState::Done), StateId::new(2));
        assert_eq!(TestState::ALL.len(), 3);
    }

    #[test]
    fn symbols_macro_reserves_invalid() {
        assert_eq!(Symbol::from(TestSymbol::Invalid), Symbol::INVALID);
        assert_eq!(Symbol::from(TestSymbol::Space), Symbol::new(3));
        assert_eq!(
            Dimensions::of::<TestState, TestSymbol>(),
            Dimensions::new(3, 3)
        );
    }

    #[test]
    fn labels_convert_back_from_ids() {
        assert_eq!(TestState::try_from(StateId::new(2)), Ok(TestState::Done));
        assert_eq!(TestState::try_from(StateId::new(3)), Err(StateId::new(3)));
        assert_eq!(TestSymbol::try_from(Symbol::new(1)), Ok(TestSymbol::Letter));
    }

    #[test]
    fn label_names_match_variants() {
        assert_eq!(TestState::Start.name(), "Start");
        assert_eq!(TestSymbol::Digit.name(), "Digit");
    }

    #[test]
    fn macros_support_visibility_and_attributes() {
        states! {
            /// Public states
            pub enum PublicState {
                Trap,
                #[allow(dead_code)]
                Only,
            }
        }

        assert_eq!(PublicState::Trap.index(), 0);
    }
}
