//! The variable table and the sources it is loaded from.

use crate::{ExprError, LoadError};
use itertools::Itertools;
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// The number of variables, `a` through `f`.
pub const VARIABLE_COUNT: usize = 6;

/// An ordered provider of integers that variable values are loaded from.
pub trait ValueSource {
    /// Returns the next integer, or `None` if the source is exhausted.
    fn next_value(&mut self) -> Result<Option<i32>, LoadError>;
}

impl<I: Iterator<Item = i32>> ValueSource for I {
    #[inline]
    fn next_value(&mut self) -> Result<Option<i32>, LoadError> {
        Ok(self.next())
    }
}

/// Reads whitespace-separated integers from a reader, one token at a time.
///
/// Only the bytes of the tokens actually requested are consumed from the reader.
#[derive(Debug)]
pub struct WhitespaceInts<R> {
    reader: R,
}

impl<R: BufRead> WhitespaceInts<R> {
    /// Creates a new integer reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the underlying reader, positioned right after the last token read.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut token = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(b);
                }
                used += 1;
            }
            self.reader.consume(used);
            if done {
                break;
            }
        }
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}

impl<R: BufRead> ValueSource for WhitespaceInts<R> {
    fn next_value(&mut self) -> Result<Option<i32>, LoadError> {
        let Some(token) = self.next_token().map_err(LoadError::Read)? else {
            return Ok(None);
        };
        match token.parse() {
            Ok(value) => Ok(Some(value)),
            Err(source) => Err(LoadError::InvalidValue { token, source }),
        }
    }
}

/// The values of the variables `a` through `f`, all zero by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VariableTable {
    values: [i32; VARIABLE_COUNT],
}

impl fmt::Display for VariableTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable values: {}", self.values.iter().format(" "))
    }
}

impl VariableTable {
    /// Creates a new table from the values of `a` through `f`.
    pub const fn new(values: [i32; VARIABLE_COUNT]) -> Self {
        Self { values }
    }

    /// Returns the slot of variable `name`, if it is one of `a` through `f`.
    pub const fn index_of(name: char) -> Option<usize> {
        match name {
            'a'..='f' => Some(name as usize - 'a' as usize),
            _ => None,
        }
    }

    /// Returns the variable names, in slot order.
    pub fn names() -> impl Iterator<Item = char> {
        ('a'..).take(VARIABLE_COUNT)
    }

    /// Returns the value of variable `name`.
    pub fn get(&self, name: char) -> Option<i32> {
        Self::index_of(name).map(|i| self.values[i])
    }

    /// Sets the value of variable `name`.
    pub fn set(&mut self, name: char, value: i32) -> Result<(), ExprError> {
        let i = Self::index_of(name).ok_or(ExprError::UnknownVariable(name))?;
        self.values[i] = value;
        Ok(())
    }

    /// Returns all values, in slot order.
    pub fn values(&self) -> &[i32; VARIABLE_COUNT] {
        &self.values
    }

    /// Returns `(name, value)` pairs, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (char, i32)> + '_ {
        Self::names().zip(self.values.iter().copied())
    }

    /// Resets every value to zero.
    pub fn clear(&mut self) {
        self.values = [0; VARIABLE_COUNT];
    }

    /// Renders the values as a human-readable line.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Assigns the next [`VARIABLE_COUNT`] values of `source` to `a` through `f`.
    ///
    /// Exactly that many values are requested; the rest of the source is left unconsumed.
    /// The table is only updated if all of them were read successfully.
    pub fn load_from<S: ValueSource + ?Sized>(&mut self, source: &mut S) -> Result<(), LoadError> {
        let mut values = [0; VARIABLE_COUNT];
        for (found, slot) in values.iter_mut().enumerate() {
            *slot = source
                .next_value()?
                .ok_or(LoadError::TooFewValues { expected: VARIABLE_COUNT, found })?;
        }
        self.values = values;
        debug!(values = %self, "loaded variables");
        Ok(())
    }

    /// Loads the values of `a` through `f` from a file of whitespace-separated integers.
    ///
    /// See [`load_from`](Self::load_from).
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
        trace!(path = %path.display(), "reading variables");
        self.load_from(&mut WhitespaceInts::new(BufReader::new(file)))
    }
}
