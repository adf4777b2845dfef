pub mod engine;
pub mod extractor;
pub mod locator;
pub mod numeric;
pub mod registry;
pub mod report;
pub mod scoring;

pub use crate::domain::model::{Aspect, AspectScore, ScoreReport};
pub use crate::domain::ports::{ConfigProvider, DocumentTree, PageFetcher};
pub use crate::utils::error::Result;
