use crate::domain::ports::DocumentTree;
use crate::utils::error::{Result, ScoreError};
use scraper::{ElementRef, Html, Selector};

/// Markup parsed with `scraper`; selectors are CSS.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    fn first(&self, selector: &str) -> Result<Option<ElementRef<'_>>> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).next())
    }
}

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScoreError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

impl DocumentTree for HtmlDocument {
    fn inner_html(&self, selector: &str) -> Result<Option<String>> {
        Ok(self.first(selector)?.map(|el| el.inner_html()))
    }

    fn inner_text(&self, selector: &str) -> Result<Option<String>> {
        Ok(self
            .first(selector)?
            .map(|el| el.text().collect::<String>().trim().to_string()))
    }
}
