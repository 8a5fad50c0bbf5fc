//! Utility functions used by the shunt CLI.

use std::io;

/// Where log records are written to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogDestination {
    Stdout,
    #[default]
    Stderr,
}

#[cfg(feature = "tracing")]
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogDestination {
    type Writer = Box<dyn io::Write>;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            Self::Stdout => Box::new(io::stdout().lock()),
            Self::Stderr => Box::new(io::stderr().lock()),
        }
    }
}

/// Initialize the tracing logger.
///
/// Records are filtered with `RUST_LOG`. If it is not set, `verbose` enables debug records of the
/// expression crate, and only warnings are logged otherwise.
pub fn init_logger(dst: LogDestination, verbose: bool) {
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (dst, verbose);
        if std::env::var_os("RUST_LOG").is_some() {
            warn_early("`RUST_LOG` is set, but \"tracing\" support was not enabled at compile time");
        }
    }

    #[cfg(feature = "tracing")]
    if let Err(e) = try_init_logger(dst, verbose) {
        warn_early(&format!("failed to initialize the logger: {e}"));
    }
}

#[cfg(feature = "tracing")]
fn try_init_logger(dst: LogDestination, verbose: bool) -> Result<(), String> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("warn,shunt_expr=debug,shunt_cli=debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(dst))
        .try_init()
        .map_err(|e| e.to_string())
}

/// Prints a warning before any emitter exists.
fn warn_early(msg: &str) {
    let style = anstyle::Style::new().bold().fg_color(Some(anstyle::AnsiColor::Yellow.into()));
    anstream::eprintln!("{style}warning{style:#}: {msg}");
}

/// A writer whose contents can be read back after it was boxed.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

#[cfg(test)]
impl SharedBuf {
    pub(crate) fn take(&self) -> String {
        String::from_utf8(std::mem::take(&mut *self.0.borrow_mut())).unwrap()
    }
}

#[cfg(test)]
impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
