//! Input port - where interactive answers come from.

use crate::error::SvcgenResult;

/// Line-based question/answer channel.
///
/// Implemented by:
/// - `svcgen_adapters::prompt::ReaderPrompter` (any `BufRead` + `Write` pair,
///   stdin/stdout in production, in-memory buffers in tests)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Show `prompt` and read one line.
    ///
    /// Returns the line without its terminator, or `None` once input is
    /// exhausted.
    fn ask(&mut self, prompt: &str) -> SvcgenResult<Option<String>>;

    /// Show a validation message for the last answer.
    fn warn(&mut self, message: &str) -> SvcgenResult<()>;
}
