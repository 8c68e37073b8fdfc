pub mod aggregate;
pub mod history;

pub use aggregate::{average, SessionSummary};
pub use history::{Sample, SessionHistory};
