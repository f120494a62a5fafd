//! The confirmation capability consumed by the clear-cart flow.

/// Asks the user a yes/no question and blocks until they answer.
///
/// The ledger never talks to a real dialog; whoever owns the page injects this.
/// Any `FnMut(&str) -> bool` closure is a `Confirm`.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A confirmation that always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}
