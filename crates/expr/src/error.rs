use shunt_data_structures::DequeError;
use std::{io, num::ParseIntError, path::PathBuf};

/// Result type with [`Error`] as the default error.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Any error produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Expr(#[from] ExprError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// An error that occurred while converting or evaluating an expression.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    /// An operator lacked operands, or the expression did not reduce to exactly one value.
    #[error("invalid postfix expression")]
    InvalidExpression,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operator `{0}`")]
    UnknownOperator(char),
    #[error("unknown variable `{0}`, expected one of `a` through `f`")]
    UnknownVariable(char),
    /// A `)` had no matching `(` on the operator stack.
    #[error("unmatched `)` at offset {position}")]
    UnmatchedParen { position: usize },
    #[error(transparent)]
    Deque(#[from] DequeError),
}

/// An error that occurred while loading variable values.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("couldn't open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("couldn't read variable values: {0}")]
    Read(#[source] io::Error),
    #[error("source does not contain enough values: expected {expected}, found {found}")]
    TooFewValues { expected: usize, found: usize },
    #[error("invalid variable value `{token}`: {source}")]
    InvalidValue {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl LoadError {
    /// Returns `true` if the source itself could not be accessed.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Read(_))
    }

    /// Returns `true` if the source was readable but did not hold six integers.
    pub fn is_format(&self) -> bool {
        !self.is_io()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shunt_data_structures::deque::End;

    #[test]
    fn messages() {
        assert_eq!(ExprError::InvalidExpression.to_string(), "invalid postfix expression");
        assert_eq!(ExprError::UnknownOperator('(').to_string(), "unknown operator `(`");
        assert_eq!(ExprError::UnmatchedParen { position: 3 }.to_string(), "unmatched `)` at offset 3");
        let deque = ExprError::from(DequeError::PeekEmpty(End::Back));
        assert_eq!(deque.to_string(), "attempted to peek at the back of an empty deque");

        let err = LoadError::TooFewValues { expected: 6, found: 3 };
        assert!(err.is_format());
        assert_eq!(err.to_string(), "source does not contain enough values: expected 6, found 3");
        let err = LoadError::Open {
            path: "missing.txt".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.is_io());
        assert!(err.to_string().starts_with("couldn't open missing.txt: "));
    }
}
