use crate::domain::ports::DocumentTree;
use crate::utils::error::{Result, ScoreError};

/// Inner markup of the first node matching `selector`.
pub fn locate<T: DocumentTree + ?Sized>(tree: &T, selector: &str) -> Result<String> {
    tracing::debug!("Locating node: {}", selector);
    tree.inner_html(selector)?.ok_or_else(|| ScoreError::NotFound {
        selector: selector.to_string(),
    })
}

/// Text content of the first node matching `selector`.
pub fn locate_text<T: DocumentTree + ?Sized>(tree: &T, selector: &str) -> Result<String> {
    tree.inner_text(selector)?.ok_or_else(|| ScoreError::NotFound {
        selector: selector.to_string(),
    })
}
