use crate::core::extractor::extract;
use crate::core::locator::{locate, locate_text};
use crate::core::numeric::parse_number;
use crate::core::registry::{AspectRegistry, RegisteredAspect};
use crate::domain::model::{AspectScore, ScoreAccumulator, ScoreReport};
use crate::domain::ports::DocumentTree;
use crate::utils::error::{Result, ScoreError};

/// The device's display name. A page without one is not a device page.
pub fn device_name<T: DocumentTree + ?Sized>(tree: &T, selector: &str) -> Result<String> {
    match locate_text(tree, selector) {
        Ok(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        Ok(_) | Err(ScoreError::NotFound { .. }) => Err(ScoreError::NotADevicePage),
        Err(e) => Err(e),
    }
}

/// Locate → extract → parse for one aspect.
pub fn aspect_value<T: DocumentTree + ?Sized>(tree: &T, entry: &RegisteredAspect) -> Result<f64> {
    let content = locate(tree, &entry.aspect.selector)?;
    let captured = extract(&content, &entry.pattern)?;
    parse_number(captured)
}

/// Scores every aspect in registry order. The first failure aborts the run.
pub fn score_aspects<T: DocumentTree + ?Sized>(
    tree: &T,
    registry: &AspectRegistry,
) -> Result<(Vec<AspectScore>, ScoreAccumulator)> {
    let mut accumulator = ScoreAccumulator::new();
    let mut scores = Vec::with_capacity(registry.len());

    for entry in registry.iter() {
        let aspect = &entry.aspect;
        tracing::debug!("Evaluating {}", aspect.name);

        accumulator.add_weight(aspect.weight);

        let value =
            aspect_value(tree, entry).map_err(|e| ScoreError::aspect(&aspect.name, e))?;

        // 不設上限：超過完美門檻的值會得到大於 1 的原始分數
        let raw_score = value / aspect.perfection;
        tracing::debug!(
            "{}: value {} / perfection {} = raw score {:.4}",
            aspect.name,
            value,
            aspect.perfection,
            raw_score
        );

        accumulator.add_contribution(aspect.weight, raw_score);
        scores.push(AspectScore {
            name: aspect.name.clone(),
            weight: aspect.weight,
            value,
            raw_score,
        });
    }

    Ok((scores, accumulator))
}

pub fn score_document<T: DocumentTree + ?Sized>(
    tree: &T,
    registry: &AspectRegistry,
    name_selector: &str,
) -> Result<ScoreReport> {
    let device = device_name(tree, name_selector)?;
    tracing::info!("Scoring device: {}", device);

    let (aspects, accumulator) = score_aspects(tree, registry)?;
    let (score, total_weight) = accumulator.finish();

    Ok(ScoreReport {
        device,
        aspects,
        total_weight,
        score,
        evaluated_at: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::builtin_aspects;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeTree(HashMap<String, String>);

    impl FakeTree {
        fn with(mut self, selector: &str, content: &str) -> Self {
            self.0.insert(selector.to_string(), content.to_string());
            self
        }
    }

    impl DocumentTree for FakeTree {
        fn inner_html(&self, selector: &str) -> Result<Option<String>> {
            Ok(self.0.get(selector).cloned())
        }

        fn inner_text(&self, selector: &str) -> Result<Option<String>> {
            self.inner_html(selector)
        }
    }

    fn page(screen: &str) -> FakeTree {
        FakeTree::default()
            .with("h1[data-spec='modelname']", "Test Phone X")
            .with("td[data-spec='displaysize']", screen)
            .with("td[data-spec='batdescription1']", "Li-Po 3000 mAh, non-removable")
            .with("td[data-spec='internalmemory']", "128 GB 4 GB RAM")
            .with("td[data-spec='cam2modules']", "10 MP, f/2.0")
    }

    #[test]
    fn test_all_at_perfection_scores_exactly_one() {
        let registry = AspectRegistry::builtin().unwrap();
        let report = score_document(&page("5.5 inches"), &registry, "h1[data-spec='modelname']")
            .unwrap();

        assert_eq!(report.device, "Test Phone X");
        assert!((report.score - 1.0).abs() < 1e-12);
        assert!((report.total_weight - 5.9).abs() < 1e-12);
        for aspect in &report.aspects {
            assert_eq!(aspect.raw_score, 1.0);
        }
    }

    #[test]
    fn test_half_screen_lowers_weighted_score() {
        let registry = AspectRegistry::builtin().unwrap();
        let report = score_document(&page("2.75 inches"), &registry, "h1[data-spec='modelname']")
            .unwrap();

        assert_eq!(report.aspects[0].raw_score, 0.5);
        assert!((report.score - 4.4 / 5.9).abs() < 1e-12);
        assert_eq!(format!("{:.2}", report.score * 100.0), "74.58");
    }

    #[test]
    fn test_raw_score_is_not_clamped() {
        let registry = AspectRegistry::builtin().unwrap();
        let report = score_document(&page("11.0 inches"), &registry, "h1[data-spec='modelname']")
            .unwrap();

        assert_eq!(report.aspects[0].raw_score, 2.0);
        assert!(report.score > 1.0);
    }

    #[test]
    fn test_missing_device_name() {
        let registry = AspectRegistry::builtin().unwrap();
        let tree = FakeTree::default().with("td[data-spec='displaysize']", "5.5 inches");
        let err = score_document(&tree, &registry, "h1[data-spec='modelname']").unwrap_err();
        assert!(matches!(err, ScoreError::NotADevicePage));
    }

    #[test]
    fn test_missing_aspect_aborts_with_not_found() {
        let registry = AspectRegistry::builtin().unwrap();
        let mut tree = page("5.5 inches");
        tree.0.remove("td[data-spec='internalmemory']");

        let err = score_aspects(&tree, &registry).unwrap_err();
        match err {
            ScoreError::Aspect { ref aspect, .. } => assert_eq!(aspect, "Storage size"),
            ref other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(err.kind(), ScoreError::NotFound { .. }));
    }

    #[test]
    fn test_unparsable_capture_aborts_with_format_error() {
        let aspects = vec![builtin_aspects().remove(1)]
            .into_iter()
            .map(|mut a| {
                a.pattern = r"Li-Po (\w+) mAh".to_string();
                a
            })
            .collect();
        let registry = AspectRegistry::new(aspects).unwrap();
        let tree = FakeTree::default().with("td[data-spec='batdescription1']", "Li-Po abc mAh");

        let err = score_aspects(&tree, &registry).unwrap_err();
        assert!(matches!(err.kind(), ScoreError::FormatError { text } if text == "abc"));
    }
}
