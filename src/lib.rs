pub mod cli;
pub mod error;
pub mod report;
pub mod scc;

pub use error::{PatchCollectorError, Result};
