use super::Evaluator;
use crate::{BinOp, ExprError};
use shunt_data_structures::{Deque, LinkedDeque};

impl Evaluator {
    /// Evaluates the postfix queue produced by the last [`convert`](Self::convert).
    ///
    /// The queue is always fully consumed, so evaluating twice without converting in between
    /// fails with [`ExprError::InvalidExpression`].
    ///
    /// # Errors
    ///
    /// - [`ExprError::InvalidExpression`] if an operator lacks two operands, or the expression
    ///   does not reduce to exactly one value;
    /// - [`ExprError::DivisionByZero`] if a right operand of `/` is zero;
    /// - [`ExprError::UnknownOperator`] for an operator other than `+ - * /`;
    /// - [`ExprError::UnknownVariable`] for an operand other than `a` through `f`.
    #[instrument(level = "debug", skip(self), fields(postfix = %self.postfix_expression()), ret)]
    pub fn evaluate(&mut self) -> Result<f64, ExprError> {
        let result = self.reduce();
        self.postfix.clear();
        result
    }

    fn reduce(&mut self) -> Result<f64, ExprError> {
        let mut stack = LinkedDeque::<f64>::with_capacity(self.postfix.len());
        while !self.postfix.is_empty() {
            let token = self.postfix.dequeue_front()?;
            if token.is_ascii_alphabetic() {
                let value =
                    self.variables.get(token).ok_or(ExprError::UnknownVariable(token))?;
                stack.enqueue_back(f64::from(value));
                continue;
            }

            if stack.len() < 2 {
                return Err(ExprError::InvalidExpression);
            }
            let rhs = stack.dequeue_back()?;
            let lhs = stack.dequeue_back()?;
            let op = BinOp::try_from(token)?;
            let value = op.apply(lhs, rhs)?;
            trace!(%lhs, %op, %rhs, %value);
            stack.enqueue_back(value);
        }

        let result = stack.dequeue_back().map_err(|_| ExprError::InvalidExpression)?;
        if !stack.is_empty() {
            return Err(ExprError::InvalidExpression);
        }
        Ok(result)
    }
}
