use crate::adapters::html::HtmlDocument;
use crate::core::registry::{AspectRegistry, DEVICE_NAME_SELECTOR};
use crate::core::scoring::score_document;
use crate::domain::model::ScoreReport;
use crate::domain::ports::{ConfigProvider, PageFetcher};
use crate::utils::error::Result;
use crate::utils::validation::validate_url;

pub struct ScoreEngine<F: PageFetcher> {
    fetcher: F,
    registry: AspectRegistry,
    name_selector: String,
}

impl<F: PageFetcher> ScoreEngine<F> {
    pub fn new(fetcher: F, registry: AspectRegistry) -> Self {
        Self {
            fetcher,
            registry,
            name_selector: DEVICE_NAME_SELECTOR.to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider>(fetcher: F, config: &C) -> Result<Self> {
        let registry = AspectRegistry::new(config.aspects().to_vec())?;
        Ok(Self::new(fetcher, registry).with_name_selector(config.name_selector()))
    }

    pub fn with_name_selector(mut self, selector: &str) -> Self {
        self.name_selector = selector.to_string();
        self
    }

    pub fn registry(&self) -> &AspectRegistry {
        &self.registry
    }

    /// Fetch the page, then score it. The page is fully fetched before scoring starts.
    pub async fn run(&self, url: &str) -> Result<ScoreReport> {
        let url = validate_url(url)?;
        tracing::info!("Fetching device page: {}", url);

        let markup = self.fetcher.fetch(url.as_str()).await?;
        tracing::info!("Fetched page ({} bytes), scoring {} aspects", markup.len(), self.registry.len());

        self.score_markup(&markup)
    }

    pub fn score_markup(&self, markup: &str) -> Result<ScoreReport> {
        let document = HtmlDocument::parse(markup);
        let report = score_document(&document, &self.registry, &self.name_selector)?;
        tracing::info!(
            "{} scored {:.0}% (total weight {})",
            report.device,
            report.score * 100.0,
            report.total_weight
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ScoreError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticFetcher {
        body: String,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    fn engine(body: &str) -> ScoreEngine<StaticFetcher> {
        let fetcher = StaticFetcher {
            body: body.to_string(),
            calls: AtomicUsize::new(0),
        };
        ScoreEngine::new(fetcher, AspectRegistry::builtin().unwrap())
    }

    #[test]
    fn test_invalid_url_is_rejected_before_fetching() {
        let engine = engine("");
        let err = tokio_test::block_on(engine.run("not a url")).unwrap_err();

        assert!(matches!(err, ScoreError::InvalidUrl { .. }));
        assert_eq!(engine.fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_non_device_page() {
        let engine = engine("<html><body><h1>Latest news</h1></body></html>");
        let err = tokio_test::block_on(engine.run("https://www.gsmarena.com/news.php3"))
            .unwrap_err();

        assert!(matches!(err, ScoreError::NotADevicePage));
        assert_eq!(engine.fetcher.calls.load(Ordering::SeqCst), 1);
    }
}
