use crate::domain::model::Aspect;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A parsed, navigable markup document.
///
/// Lookups return `Ok(None)` when nothing matches; `Err` is reserved for
/// selectors that cannot be parsed.
pub trait DocumentTree {
    fn inner_html(&self, selector: &str) -> Result<Option<String>>;
    fn inner_text(&self, selector: &str) -> Result<Option<String>>;
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn aspects(&self) -> &[Aspect];
    fn name_selector(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
}
