use crate::{LoadError, VariableTable};
use shunt_data_structures::{Deque, LinkedDeque};
use std::path::Path;

mod convert;
mod eval;


/// Converts infix expressions to postfix and evaluates them against a [`VariableTable`].
///
/// The evaluator keeps the postfix queue of the last [`convert`](Self::convert) until it is
/// consumed by [`evaluate`](Self::evaluate), and the variable table until it is changed.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    /// Output queue of the last conversion: operand letters and operator characters.
    postfix: LinkedDeque<char>,
    /// Pending operators and open parentheses, used as a stack during conversion only.
    operators: LinkedDeque<char>,
    variables: VariableTable,
}

impl Evaluator {
    /// Creates a new evaluator with all variables set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new evaluator with the given variables.
    pub fn with_variables(variables: VariableTable) -> Self {
        Self { variables, ..Self::default() }
    }

    /// Returns the variable table.
    #[inline]
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Returns the variable table mutably.
    #[inline]
    pub fn variables_mut(&mut self) -> &mut VariableTable {
        &mut self.variables
    }

    /// Loads the variables from a file. See [`VariableTable::load_file`].
    pub fn load_variables(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        self.variables.load_file(path)
    }

    /// Resets every variable to zero.
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Renders the variable table. See [`VariableTable::render`].
    pub fn render_variables(&self) -> String {
        self.variables.render()
    }

    /// Returns the pending postfix queue.
    #[inline]
    pub fn postfix(&self) -> &LinkedDeque<char> {
        &self.postfix
    }

    /// Renders the pending postfix queue front to back, without consuming it.
    pub fn postfix_expression(&self) -> String {
        let mut queue = self.postfix.clone();
        let mut s = String::with_capacity(queue.len());
        while let Ok(c) = queue.dequeue_front() {
            s.push(c);
        }
        s
    }

    /// Converts `infix` and evaluates it immediately.
    pub fn convert_and_evaluate(&mut self, infix: &str) -> Result<f64, crate::ExprError> {
        self.convert(infix)?;
        self.evaluate()
    }
}
