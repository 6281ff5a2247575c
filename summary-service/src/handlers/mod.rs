pub mod health;
pub mod summarize;

pub use health::health_check;
pub use summarize::summarize;
