//! Binary operators.

use crate::ExprError;
use std::fmt;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<char> for BinOp {
    type Error = ExprError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(ExprError::UnknownOperator(c))
    }
}

impl BinOp {
    /// All operators.
    pub const ALL: [Self; 4] = [Self::Plus, Self::Minus, Self::Star, Self::Slash];

    /// Returns the operator spelled by `c`.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            _ => None,
        }
    }

    /// Returns the character spelling the operator.
    pub const fn to_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
        }
    }

    /// Returns the string representation of the operator.
    pub const fn to_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
        }
    }

    /// Returns the binding strength of the operator. Higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Star | Self::Slash => 2,
        }
    }

    /// Computes `lhs op rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ExprError> {
        Ok(match self {
            Self::Plus => lhs + rhs,
            Self::Minus => lhs - rhs,
            Self::Star => lhs * rhs,
            Self::Slash if rhs == 0.0 => return Err(ExprError::DivisionByZero),
            Self::Slash => lhs / rhs,
        })
    }
}

/// Returns the precedence of the operator spelled by `c`, or 0 for any other character.
#[inline]
pub const fn precedence(c: char) -> u8 {
    match BinOp::from_char(c) {
        Some(op) => op.precedence(),
        None => 0,
    }
}
