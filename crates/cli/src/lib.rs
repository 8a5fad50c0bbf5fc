//! shunt CLI definitions, utils, and driver.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

use clap::Parser as _;
use shunt_config::{EmitKind, ErrorFormat, Opts, emit_set};
use shunt_expr::{Evaluator, ExprError, LoadError};
use std::{
    collections::BTreeSet,
    io::{self, BufRead, IsTerminal},
};

pub mod emitter;
use emitter::{DynEmitter, Evaluation, HumanEmitter, JsonEmitter};

pub mod utils;

/// An error that aborts a [`Session`], or is reported at its end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("cannot specify `--emit {0}` twice")]
    DuplicateEmit(EmitKind),
    #[error("aborting due to {count} failed expression(s)")]
    Failed { count: usize },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Returns a short, stable name for the kind of error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Load(e) if e.is_io() => "io",
            Self::Load(_) => "format",
            Self::DuplicateEmit(_) => "usage",
            Self::Failed { .. } => "failed",
            Self::Io(_) => "io",
        }
    }
}

/// Parses command-line arguments into [`Opts`].
pub fn parse_args<I, T>(itr: I) -> Result<Opts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Opts::try_parse_from(itr)
}

/// Runs a session on the standard streams.
pub fn run(opts: Opts) -> Result<(), CliError> {
    let emitter = stdio_emitter(&opts);
    let mut session = Session::new(opts, emitter);
    session.run()
}

fn stdio_emitter(opts: &Opts) -> Box<DynEmitter> {
    match opts.error_format {
        ErrorFormat::Human => {
            let color = match opts.color {
                clap::ColorChoice::Always => anstream::ColorChoice::Always,
                clap::ColorChoice::Auto => anstream::ColorChoice::Auto,
                clap::ColorChoice::Never => anstream::ColorChoice::Never,
            };
            Box::new(HumanEmitter::stdio(color).verbose(opts.verbose))
        }
        ErrorFormat::Json => {
            let writer = Box::new(io::BufWriter::new(io::stdout()));
            Box::new(JsonEmitter::new(writer).pretty(opts.pretty_json))
        }
    }
}

/// Converts and evaluates expressions from the command line and from an input stream, emitting
/// the outcome of each.
pub struct Session {
    pub opts: Opts,
    pub evaluator: Evaluator,
    emitter: Box<DynEmitter>,
    emit: BTreeSet<EmitKind>,
    failed: usize,
}

impl Session {
    /// Creates a new session. Nothing is run until [`run`](Self::run) is called.
    pub fn new(opts: Opts, emitter: Box<DynEmitter>) -> Self {
        Self { opts, evaluator: Evaluator::new(), emitter, emit: BTreeSet::new(), failed: 0 }
    }

    /// Returns the number of expressions that failed so far.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Runs the session, reading standard input if [`Opts::reads_stdin`].
    pub fn run(&mut self) -> Result<(), CliError> {
        let stdin = io::stdin().lock();
        let prompt = stdin.is_terminal();
        self.run_with(stdin, prompt)
    }

    /// Runs the session with `input` in place of standard input.
    ///
    /// The error, if any, has already been emitted.
    pub fn run_with(&mut self, input: impl BufRead, prompt: bool) -> Result<(), CliError> {
        let result = self.run_inner(input, prompt);
        if let Err(e) = &result
            && let Err(emit_err) = self.emitter.emit_error(e)
        {
            debug!(%emit_err, "failed to emit error");
        }
        result
    }

    fn run_inner(&mut self, input: impl BufRead, prompt: bool) -> Result<(), CliError> {
        self.emit = emit_set(&self.opts.emit).map_err(CliError::DuplicateEmit)?;
        if let Some(vars) = &self.opts.vars {
            self.evaluator.load_variables(&vars.0)?;
        }

        let expressions = std::mem::take(&mut self.opts.expressions);
        for infix in &expressions {
            self.eval(infix)?;
        }
        self.opts.expressions = expressions;

        if self.opts.reads_stdin() {
            self.eval_lines(input, prompt)?;
        }

        debug!(failed = self.failed, "finished");
        match self.failed {
            0 => Ok(()),
            count => Err(CliError::Failed { count }),
        }
    }

    /// Evaluates every line of `input` until it is exhausted or a line reads `quit`.
    ///
    /// Blank lines are skipped. Failed expressions are emitted and counted, but do not stop the
    /// loop.
    pub fn eval_lines(&mut self, mut input: impl BufRead, prompt: bool) -> Result<(), CliError> {
        let mut line = String::new();
        loop {
            if prompt {
                self.emitter.prompt()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let infix = line.trim();
            trace!(infix, "read line");
            if infix == "quit" {
                break;
            }
            if infix.is_empty() {
                continue;
            }
            self.eval(infix)?;
        }
        Ok(())
    }

    /// Converts and evaluates a single expression, and emits the outcome.
    ///
    /// Returns the result, which is also counted if it is an error. Only errors writing the
    /// outcome are returned as `Err`.
    pub fn eval(&mut self, infix: &str) -> Result<Result<f64, ExprError>, CliError> {
        let converted = self.evaluator.convert(infix);
        let postfix = converted.is_ok().then(|| self.evaluator.postfix_expression());
        let result = converted.and_then(|()| self.evaluator.evaluate());
        if result.is_err() {
            self.failed += 1;
        }

        let evaluation = Evaluation {
            infix,
            postfix: postfix.as_deref().filter(|_| self.emit.contains(&EmitKind::Postfix)),
            result: result.as_ref().ok().copied().filter(|_| self.emit.contains(&EmitKind::Result)),
            error: result.as_ref().err(),
            variables: self
                .emit
                .contains(&EmitKind::Values)
                .then_some(self.evaluator.variables()),
        };
        self.emitter.emit_evaluation(&evaluation)?;
        Ok(result)
    }
}
