pub mod engine;
pub mod outcome;

pub use engine::{classify, ClassifierConfig};
pub use outcome::{ClassificationResult, PageCategory, PageSample};
