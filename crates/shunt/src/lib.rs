//! Converts infix arithmetic expressions over the variables `a` to `f` to postfix with the
//! shunting-yard algorithm, and evaluates them.
//!
//! This crate re-exports the `shunt-*` crates:
//! - [`data_structures`]: the circular doubly linked [`LinkedDeque`](data_structures::LinkedDeque);
//! - [`expr`]: the [`Evaluator`](expr::Evaluator) and the variable table;
//! - [`config`]: options shared with the command-line interface;
//! - `cli`: the command-line driver, with the `cli` feature.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![allow(unused_crate_dependencies)]

#[doc(inline)]
pub use shunt_config as config;
#[doc(inline)]
pub use shunt_data_structures as data_structures;
#[doc(inline)]
pub use shunt_expr as expr;

#[cfg(feature = "cli")]
#[doc(inline)]
pub use shunt_cli as cli;
