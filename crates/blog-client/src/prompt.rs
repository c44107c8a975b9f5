//! User interaction port.

/// Blocking user-facing notifications, in the manner of a browser's
/// `alert`/`confirm` pair.
pub trait Prompt {
    /// Show a failure the user must acknowledge.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `false` cancels the pending action.
    fn confirm(&self, question: &str) -> bool;
}

impl<P: Prompt + ?Sized> Prompt for &P {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, question: &str) -> bool {
        (**self).confirm(question)
    }
}
