//! Infix to postfix conversion and postfix evaluation over the variables `a` to `f`.
//!
//! ```
//! use shunt_expr::{Evaluator, VariableTable};
//!
//! let mut evaluator = Evaluator::with_variables(VariableTable::new([5, 10, 15, 20, 25, 30]));
//! evaluator.convert("(a+b)*c")?;
//! assert_eq!(evaluator.postfix_expression(), "ab+c*");
//! assert_eq!(evaluator.evaluate()?, 225.0);
//! # Ok::<_, shunt_expr::ExprError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod error;
pub use error::{Error, ExprError, LoadError, Result};

mod evaluator;
pub use evaluator::Evaluator;

pub mod op;
pub use op::BinOp;

pub mod vars;
pub use vars::{ValueSource, VariableTable, WhitespaceInts, VARIABLE_COUNT};

pub use shunt_data_structures as data_structures;
