use crate::{cursor::Cursor, error::Failure, parser::Parser, result::Success};

/// The state threaded through a [`sequential`] block.
pub struct Steps<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Steps<'a> {
    /// Runs `p` from the current position, moving past what it matched.
    ///
    /// A failure leaves the position where it was; propagate it with `?` to
    /// end the block.
    pub fn run<T: 'static>(&mut self, p: &Parser<T>) -> Result<T, Failure> {
        let s = p.run(self.cursor)?;
        self.cursor = s.cursor;
        Ok(s.value)
    }

    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }

    /// A failure at the current position, for checks the parsers themselves
    /// cannot express.
    pub fn fail(&self, message: impl Into<String>) -> Failure {
        Failure::new(message, self.cursor.point())
    }
}

/// A parser written as a block of steps, each step seeing the values of the
/// ones before it.
///
/// The first step to fail ends the block and its failure is the result; no
/// later step runs and nothing is consumed. Otherwise the block's value is
/// the result, with the cursor wherever the last step left it.
///
/// ```
/// use plait::prelude::*;
///
/// let name = regex("[a-z]+")?;
/// let assignment = sequential("assignment", move |steps| {
///     let name = steps.run(&name)?;
///     steps.run(&symbol_with("=", hspace().maybe()))?;
///     let value = steps.run(&integer())?;
///     Ok((name, value))
/// });
/// assert_eq!(assignment.parse("x= 42").unwrap().value, ("x".to_string(), 42));
/// # Ok::<(), GrammarError>(())
/// ```
pub fn sequential<T, F>(label: &str, steps: F) -> Parser<T>
where
    T: 'static,
    F: Fn(&mut Steps<'_>) -> Result<T, Failure> + Send + Sync + 'static,
{
    Parser::new(format!("do({label})"), move |cur| {
        let mut state = Steps { cursor: cur };
        let value = steps(&mut state)?;
        Ok(Success::new(value, state.cursor))
    })
}
