pub mod qa_text;

pub use qa_text::{ParseOptions, ParseReport, QaTextParser, SkipReason, SkippedLine};
