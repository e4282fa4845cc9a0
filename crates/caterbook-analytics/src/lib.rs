pub mod summary;

pub use summary::{summarize, Summary};
