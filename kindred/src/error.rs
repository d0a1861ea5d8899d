use thiserror::Error;

use crate::dynamic::Arity;

/// Raised by the dynamic engine when a function can not take the arguments it was offered.
///
/// Arguments are rendered with `Debug` so the message names exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("{function} is variadic and can not be partially applied by [{args}]")]
    Variadic { function: String, args: String },

    #[error("{function} with arity of 0 can not be partially applied by [{args}]")]
    Nullary { function: String, args: String },

    #[error("{function} with arity of {arity} can not be partially applied by [{args}]")]
    TooManyArguments {
        function: String,
        arity: usize,
        args: String,
    },

    #[error("{function} can not be partially applied by an empty argument list")]
    EmptyPrefix { function: String },

    #[error("{function} with arity of {arity} can not be curried")]
    NotCurryable { function: String, arity: Arity },

    #[error("{function} expects {expected} arguments, got {actual}")]
    WrongArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },
}

/// Raised when unwrapping a value that has no inner value to hand out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecayError {
    #[error("are you sure {value} is decayable? it holds no value to unwrap")]
    NotDecayable { value: String },
}

pub(crate) fn render_args<T: std::fmt::Debug>(args: &[T]) -> String {
    args.iter()
        .map(|arg| format!("{arg:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}
