//! Prompter adapters.

mod reader;

pub use reader::ReaderPrompter;
