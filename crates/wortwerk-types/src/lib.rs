pub mod types;

pub use types::{CategoryTag, ImportRecord};
