//! Emitters for evaluation results and errors.

use crate::CliError;
use anstream::{AutoStream, ColorChoice};
use anstyle::{AnsiColor, Style};
use serde::Serialize;
use shunt_expr::{ExprError, VariableTable};
use std::{
    collections::BTreeMap,
    fmt,
    io::{self, Write},
};

/// Dynamic emitter. See [`Emitter`].
pub type DynEmitter = dyn Emitter;

/// What to emit for a single converted and evaluated expression.
///
/// Every optional part is `None` if it was not requested, or is not available.
#[derive(Clone, Copy, Debug)]
pub struct Evaluation<'a> {
    /// The expression as it was given.
    pub infix: &'a str,
    /// The postfix form. Not available if the conversion failed.
    pub postfix: Option<&'a str>,
    /// The result. Not available if the conversion or evaluation failed.
    pub result: Option<f64>,
    /// Why the conversion or evaluation failed. Always emitted.
    pub error: Option<&'a ExprError>,
    /// The variables the expression was evaluated against.
    pub variables: Option<&'a VariableTable>,
}

/// Output emitter.
pub trait Emitter {
    /// Emits the outcome of a single expression.
    fn emit_evaluation(&mut self, evaluation: &Evaluation<'_>) -> io::Result<()>;

    /// Emits an error that is not tied to a single expression.
    fn emit_error(&mut self, error: &CliError) -> io::Result<()>;

    /// Asks for the next interactive expression.
    #[inline]
    fn prompt(&mut self) -> io::Result<()> {
        Ok(())
    }
}

type Writer = AutoStream<Box<dyn Write>>;

/// Emitter that writes results to one writer and errors to another, in human-readable format.
pub struct HumanEmitter {
    out: Writer,
    err: Writer,
    verbose: bool,
}

impl Emitter for HumanEmitter {
    fn emit_evaluation(&mut self, evaluation: &Evaluation<'_>) -> io::Result<()> {
        let &Evaluation { infix, postfix, result, error, variables } = evaluation;
        if self.verbose {
            writeln!(self.out, "Infix Expression: {infix}")?;
        }
        if let Some(postfix) = postfix {
            writeln!(self.out, "Postfix Expression: {postfix}")?;
        }
        if let Some(result) = result {
            writeln!(self.out, "Evaluation Result: {result}")?;
        }
        if let Some(error) = error {
            self.out.flush()?;
            self.error(error, Some(infix))?;
        }
        if let Some(variables) = variables {
            writeln!(self.out, "{variables}")?;
        }
        self.out.flush()
    }

    fn emit_error(&mut self, error: &CliError) -> io::Result<()> {
        self.out.flush()?;
        self.error(error, None)
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Enter an infix expression (or 'quit' to exit): ")?;
        self.out.flush()
    }
}

impl HumanEmitter {
    /// Creates a new `HumanEmitter` that writes results to `out` and errors to `err`.
    ///
    /// Note that a color choice of `Auto` will be treated as `Never` because the writers are
    /// opaque at this point. Use [`stdio`](Self::stdio) for the standard streams.
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>, color: ColorChoice) -> Self {
        Self { out: AutoStream::new(out, color), err: AutoStream::new(err, color), verbose: false }
    }

    /// Creates a new `HumanEmitter` that writes results to stdout and errors to stderr.
    pub fn stdio(color: ColorChoice) -> Self {
        let (out_color, err_color) = if color == ColorChoice::Auto {
            (AutoStream::choice(&io::stdout()), AutoStream::choice(&io::stderr()))
        } else {
            (color, color)
        };
        Self {
            out: AutoStream::new(Box::new(io::stdout()), out_color),
            err: AutoStream::new(Box::new(io::stderr()), err_color),
            verbose: false,
        }
    }

    /// Sets whether to echo every expression before its results.
    pub fn verbose(mut self, yes: bool) -> Self {
        self.verbose = yes;
        self
    }

    fn error(&mut self, msg: &dyn fmt::Display, infix: Option<&str>) -> io::Result<()> {
        let level = Style::new().bold().fg_color(Some(AnsiColor::Red.into()));
        let bold = Style::new().bold();
        let note = Style::new().bold().fg_color(Some(AnsiColor::Blue.into()));
        writeln!(self.err, "{level}error{level:#}{bold}: {msg}{bold:#}")?;
        if let Some(infix) = infix {
            writeln!(self.err, "  {note}= note{note:#}: in expression `{infix}`")?;
        }
        self.err.flush()
    }
}

/// Emitter that writes one JSON object per line.
pub struct JsonEmitter {
    writer: Box<dyn Write>,
    pretty: bool,
}

impl Emitter for JsonEmitter {
    fn emit_evaluation(&mut self, evaluation: &Evaluation<'_>) -> io::Result<()> {
        let record = EvaluationRecord {
            infix: evaluation.infix,
            postfix: evaluation.postfix,
            result: evaluation.result,
            values: evaluation.variables.map(|vars| vars.iter().collect()),
            error: evaluation
                .error
                .map(|e| ErrorRecord { kind: expr_error_kind(e), message: e.to_string() }),
        };
        self.emit(&record)
    }

    fn emit_error(&mut self, error: &CliError) -> io::Result<()> {
        let error = ErrorRecord { kind: error.kind(), message: error.to_string() };
        self.emit(&ErrorLine { error })
    }
}

impl JsonEmitter {
    /// Creates a new `JsonEmitter` that writes to given writer.
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer, pretty: false }
    }

    /// Sets whether to pretty print the JSON.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn emit<T: ?Sized + Serialize>(&mut self, value: &T) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *self.writer, value)
        } else {
            serde_json::to_writer(&mut *self.writer, value)
        }?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

#[derive(Serialize)]
struct EvaluationRecord<'a> {
    infix: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    postfix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<BTreeMap<char, i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRecord>,
}

#[derive(Serialize)]
struct ErrorLine {
    error: ErrorRecord,
}

#[derive(Serialize)]
struct ErrorRecord {
    kind: &'static str,
    message: String,
}

fn expr_error_kind(error: &ExprError) -> &'static str {
    match error {
        ExprError::InvalidExpression => "invalid-expression",
        ExprError::DivisionByZero => "division-by-zero",
        ExprError::UnknownOperator(_) => "unknown-operator",
        ExprError::UnknownVariable(_) => "unknown-variable",
        ExprError::UnmatchedParen { .. } => "unmatched-paren",
        ExprError::Deque(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SharedBuf;

    const VARS: VariableTable = VariableTable::new([5, 10, 15, 20, 25, 30]);

    fn ok<'a>() -> Evaluation<'a> {
        Evaluation {
            infix: "a+b*c",
            postfix: Some("abc*+"),
            result: Some(155.0),
            error: None,
            variables: None,
        }
    }

    #[test]
    fn human() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut emitter =
            HumanEmitter::new(Box::new(out.clone()), Box::new(err.clone()), ColorChoice::Never);

        emitter.emit_evaluation(&ok()).unwrap();
        assert_eq!(out.take(), "Postfix Expression: abc*+\nEvaluation Result: 155\n");

        let error = ExprError::DivisionByZero;
        let evaluation = Evaluation {
            infix: "a/b",
            postfix: Some("ab/"),
            result: None,
            error: Some(&error),
            variables: Some(&VARS),
        };
        emitter.emit_evaluation(&evaluation).unwrap();
        assert_eq!(out.take(), "Postfix Expression: ab/\nVariable values: 5 10 15 20 25 30\n");
        assert_eq!(err.take(), "error: division by zero\n  = note: in expression `a/b`\n");

        let mut emitter = emitter.verbose(true);
        emitter.emit_evaluation(&Evaluation { postfix: None, ..ok() }).unwrap();
        assert_eq!(out.take(), "Infix Expression: a+b*c\nEvaluation Result: 155\n");

        emitter.prompt().unwrap();
        assert_eq!(out.take(), "Enter an infix expression (or 'quit' to exit): ");
    }

    #[test]
    fn human_color() {
        let (out, err) = (SharedBuf::default(), SharedBuf::default());
        let mut emitter =
            HumanEmitter::new(Box::new(out.clone()), Box::new(err.clone()), ColorChoice::Always);
        emitter.emit_error(&CliError::Failed { count: 2 }).unwrap();
        let err = err.take();
        assert!(err.contains("\x1b["), "{err:?}");
        assert!(err.contains("aborting due to 2 failed expression(s)"), "{err:?}");
        assert_eq!(out.take(), "");
    }

    #[test]
    fn json() {
        let out = SharedBuf::default();
        let mut emitter = JsonEmitter::new(Box::new(out.clone()));

        emitter.emit_evaluation(&ok()).unwrap();
        assert_eq!(out.take(), "{\"infix\":\"a+b*c\",\"postfix\":\"abc*+\",\"result\":155.0}\n");

        let error = ExprError::UnmatchedParen { position: 3 };
        let evaluation = Evaluation {
            infix: "a+b)",
            postfix: None,
            result: None,
            error: Some(&error),
            variables: Some(&VARS),
        };
        emitter.emit_evaluation(&evaluation).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out.take()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "infix": "a+b)",
                "values": { "a": 5, "b": 10, "c": 15, "d": 20, "e": 25, "f": 30 },
                "error": { "kind": "unmatched-paren", "message": error.to_string() },
            })
        );

        emitter.emit_error(&CliError::DuplicateEmit(shunt_config::EmitKind::Result)).unwrap();
        assert_eq!(
            out.take(),
            "{\"error\":{\"kind\":\"usage\",\"message\":\"cannot specify `--emit result` twice\"}}\n"
        );

        let mut emitter = emitter.pretty(true);
        emitter.emit_evaluation(&Evaluation { postfix: None, result: None, ..ok() }).unwrap();
        assert_eq!(out.take(), "{\n  \"infix\": \"a+b*c\"\n}\n");
    }
}
