pub mod summary;

pub use summary::{SummaryRequest, SummaryResponse};
