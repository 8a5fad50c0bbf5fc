//! shunt CLI arguments.

use crate::{EmitKind, ErrorFormat, VarsFile};

#[cfg(feature = "clap")]
use clap::{ColorChoice, Parser, ValueHint};

/// Converts infix expressions over the variables `a` to `f` to postfix and evaluates them.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "clap", derive(Parser))]
#[cfg_attr(feature = "clap", command(name = "shunt", version))]
#[allow(clippy::manual_non_exhaustive)]
pub struct Opts {
    /// Infix expressions to convert and evaluate, e.g. `(a+b)*c`.
    ///
    /// If none are given, expressions are read line by line from standard input.
    pub expressions: Vec<String>,
    /// File of six whitespace-separated integers to assign to `a` through `f`.
    ///
    /// All variables are zero if no file is given.
    #[cfg_attr(
        feature = "clap",
        arg(help_heading = "Input options", long, short = 'f', value_hint = ValueHint::FilePath)
    )]
    pub vars: Option<VarsFile>,
    /// Read expressions from standard input until `quit`, even if some were given as arguments.
    #[cfg_attr(feature = "clap", arg(help_heading = "Input options", long, short))]
    pub interactive: bool,

    /// Comma separated list of what to print for each expression.
    ///
    /// Defaults to `postfix,result`.
    #[cfg_attr(feature = "clap", arg(long, value_delimiter = ','))]
    pub emit: Vec<EmitKind>,

    /// Coloring.
    #[cfg(feature = "clap")]
    #[cfg_attr(
        feature = "clap",
        arg(help_heading = "Display options", long, value_enum, default_value = "auto")
    )]
    pub color: ColorChoice,
    /// Use verbose output.
    #[cfg_attr(feature = "clap", arg(help_heading = "Display options", long, short))]
    pub verbose: bool,
    /// How results, errors and other messages are produced.
    #[cfg_attr(
        feature = "clap",
        arg(help_heading = "Display options", long, value_enum, default_value_t)
    )]
    pub error_format: ErrorFormat,
    /// Pretty-print JSON output.
    #[cfg_attr(feature = "clap", arg(help_heading = "Display options", long))]
    pub pretty_json: bool,

    // Allows `Opts { x: y, ..Default::default() }`.
    #[doc(hidden)]
    #[cfg_attr(feature = "clap", arg(skip))]
    pub _non_exhaustive: (),
}

impl Opts {
    /// Returns `true` if expressions should be read from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.interactive || self.expressions.is_empty()
    }
}
