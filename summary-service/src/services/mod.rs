pub mod prompt;
pub mod providers;
pub mod summarizer;

pub use summarizer::Summarizer;
