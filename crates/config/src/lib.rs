//! Configuration shared by the shunt crates and its command-line interface.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use std::{collections::BTreeSet, path::PathBuf};

#[macro_use]
mod macros;

mod opts;
pub use opts::Opts;

str_enum! {
    /// What to print for every evaluated expression.
    #[strum(serialize_all = "kebab-case")]
    pub enum EmitKind {
        /// The postfix form of the expression.
        Postfix,
        /// The numeric result.
        Result,
        /// The variable table the expression was evaluated against.
        Values,
    }
}

impl EmitKind {
    /// The kinds emitted when none are requested explicitly.
    pub const DEFAULT: &'static [Self] = &[Self::Postfix, Self::Result];
}

str_enum! {
    /// How results, errors and other messages are produced.
    #[derive(Default)]
    #[strum(serialize_all = "kebab-case")]
    pub enum ErrorFormat {
        /// Human-readable output.
        #[default]
        Human,
        /// One JSON object per line.
        Json,
    }
}

/// A file of whitespace-separated integers, assigned in order to the variables `a` to `f`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarsFile(pub PathBuf);

impl std::str::FromStr for VarsFile {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() { Err("empty path") } else { Ok(Self(s.into())) }
    }
}

/// Deduplicates the requested emit kinds, falling back to [`EmitKind::DEFAULT`].
///
/// Returns the first kind that was requested twice as an error.
pub fn emit_set(kinds: &[EmitKind]) -> Result<BTreeSet<EmitKind>, EmitKind> {
    if kinds.is_empty() {
        return Ok(EmitKind::DEFAULT.iter().copied().collect());
    }
    let mut set = BTreeSet::new();
    for &kind in kinds {
        if !set.insert(kind) {
            return Err(kind);
        }
    }
    Ok(set)
}
