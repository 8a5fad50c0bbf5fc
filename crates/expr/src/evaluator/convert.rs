use super::Evaluator;
use crate::{op::precedence, BinOp, ExprError};
use shunt_data_structures::Deque;

impl Evaluator {
    /// Converts an infix expression to postfix with the shunting-yard algorithm, replacing any
    /// previous conversion.
    ///
    /// Letters are operands and are lowercased. `+ - * /` are left-associative operators, with
    /// `*` and `/` binding tighter than `+` and `-`. Parentheses group. Every other character is
    /// ignored. An unclosed `(` is carried through to the postfix queue and rejected by
    /// [`evaluate`](Self::evaluate).
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::UnmatchedParen`] if a `)` has no matching `(`, in which case the
    /// postfix queue is left empty.
    #[instrument(level = "debug", skip(self))]
    pub fn convert(&mut self, infix: &str) -> Result<(), ExprError> {
        self.postfix.clear();
        self.operators.clear();
        let result = self.shunt(infix);
        if result.is_err() {
            self.postfix.clear();
        }
        self.operators.clear();
        debug!(postfix = %self.postfix_expression(), "converted");
        result
    }

    fn shunt(&mut self, infix: &str) -> Result<(), ExprError> {
        for (position, c) in infix.chars().enumerate() {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphabetic() {
                self.postfix.enqueue_back(c);
                continue;
            }
            match c {
                '(' => self.operators.enqueue_back(c),
                ')' => self.close_paren(position)?,
                _ => match BinOp::from_char(c) {
                    Some(op) => self.push_operator(op)?,
                    None => trace!(?c, position, "ignoring character"),
                },
            }
        }
        while !self.operators.is_empty() {
            let top = self.operators.dequeue_back()?;
            self.postfix.enqueue_back(top);
        }
        Ok(())
    }

    /// Pops every operator that binds at least as tightly as `op` into the output, then pushes
    /// `op`.
    fn push_operator(&mut self, op: BinOp) -> Result<(), ExprError> {
        while let Some(&top) = self.operators.back() {
            if top == '(' || op.precedence() > precedence(top) {
                break;
            }
            let top = self.operators.dequeue_back()?;
            self.postfix.enqueue_back(top);
        }
        self.operators.enqueue_back(op.to_char());
        Ok(())
    }

    /// Pops operators into the output up to the nearest `(`, which is discarded.
    fn close_paren(&mut self, position: usize) -> Result<(), ExprError> {
        loop {
            if self.operators.is_empty() {
                return Err(ExprError::UnmatchedParen { position });
            }
            match self.operators.dequeue_back()? {
                '(' => return Ok(()),
                op => self.postfix.enqueue_back(op),
            }
        }
    }
}
