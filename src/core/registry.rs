use crate::core::extractor::compile_pattern;
use crate::domain::model::Aspect;
use crate::utils::error::{Result, ScoreError};
use crate::utils::validation::{validate_non_empty_string, validate_perfection, validate_weight};
use regex::Regex;

pub const SCREEN_SIZE_SELECTOR: &str = "td[data-spec='displaysize']";
pub const SCREEN_SIZE_PATTERN: &str = r"(\d+\.\d+) inches";

pub const BATTERY_SIZE_SELECTOR: &str = "td[data-spec='batdescription1']";
pub const BATTERY_SIZE_PATTERN: &str = r"(\d+) mAh";

pub const STORAGE_SIZE_SELECTOR: &str = "td[data-spec='internalmemory']";
// Can read "32 GB, 4 GB RAM"; the first match is the storage size.
pub const STORAGE_SIZE_PATTERN: &str = r"(\d+) GB";

pub const SELFIE_CAMERA_SELECTOR: &str = "td[data-spec='cam2modules']";
pub const SELFIE_CAMERA_PATTERN: &str = r"(\d+(?:\.\d+)?) MP";

pub const DEVICE_NAME_SELECTOR: &str = "h1[data-spec='modelname']";

pub fn builtin_aspects() -> Vec<Aspect> {
    vec![
        Aspect::new("Screen size", 5.5, SCREEN_SIZE_SELECTOR, SCREEN_SIZE_PATTERN).with_weight(3.0),
        Aspect::new("Battery size", 3000.0, BATTERY_SIZE_SELECTOR, BATTERY_SIZE_PATTERN),
        Aspect::new("Storage size", 128.0, STORAGE_SIZE_SELECTOR, STORAGE_SIZE_PATTERN),
        Aspect::new(
            "Selfie camera megapixels",
            10.0,
            SELFIE_CAMERA_SELECTOR,
            SELFIE_CAMERA_PATTERN,
        )
        .with_weight(0.9),
    ]
}

#[derive(Debug, Clone)]
pub struct RegisteredAspect {
    pub aspect: Aspect,
    pub pattern: Regex,
}

/// Ordered, validated set of aspects. Immutable once built.
#[derive(Debug, Clone)]
pub struct AspectRegistry {
    entries: Vec<RegisteredAspect>,
}

impl AspectRegistry {
    pub fn new(aspects: Vec<Aspect>) -> Result<Self> {
        if aspects.is_empty() {
            return Err(ScoreError::config("aspects", "at least one aspect is required"));
        }

        let mut entries = Vec::with_capacity(aspects.len());
        for (index, aspect) in aspects.into_iter().enumerate() {
            let field = |name: &str| format!("aspects[{}].{}", index, name);

            validate_non_empty_string(&field("name"), &aspect.name)?;
            validate_non_empty_string(&field("selector"), &aspect.selector)?;
            validate_weight(&field("weight"), aspect.weight)?;
            validate_perfection(&field("perfection"), aspect.perfection)?;
            let pattern = compile_pattern(&aspect.pattern)?;

            entries.push(RegisteredAspect { aspect, pattern });
        }

        let total_weight: f64 = entries.iter().map(|e| e.aspect.weight).sum();
        if total_weight <= 0.0 {
            return Err(ScoreError::config(
                "aspects",
                "the sum of all weights must be greater than 0",
            ));
        }

        Ok(Self { entries })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(builtin_aspects())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredAspect> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.aspect.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = AspectRegistry::builtin().unwrap();
        let names: Vec<&str> = registry.iter().map(|e| e.aspect.name.as_str()).collect();

        assert_eq!(
            names,
            ["Screen size", "Battery size", "Storage size", "Selfie camera megapixels"]
        );
        assert!((registry.total_weight() - 5.9).abs() < 1e-12);
    }

    #[test]
    fn test_each_aspect_has_its_own_selector() {
        let registry = AspectRegistry::builtin().unwrap();
        let selectors: std::collections::HashSet<&str> =
            registry.iter().map(|e| e.aspect.selector.as_str()).collect();
        assert_eq!(selectors.len(), registry.len());
    }

    #[test]
    fn test_rejects_empty_registry() {
        assert!(AspectRegistry::new(vec![]).is_err());
    }

    #[test]
    fn test_rejects_zero_total_weight() {
        let aspects = vec![Aspect::new("Battery size", 3000.0, "td", r"(\d+) mAh").with_weight(0.0)];
        let err = AspectRegistry::new(aspects).unwrap_err();
        assert!(matches!(err, ScoreError::Config { .. }));
    }

    #[test]
    fn test_rejects_bad_perfection_and_pattern() {
        let zero = vec![Aspect::new("Battery size", 0.0, "td", r"(\d+) mAh")];
        assert!(AspectRegistry::new(zero).is_err());

        let no_group = vec![Aspect::new("Battery size", 3000.0, "td", r"\d+ mAh")];
        let err = AspectRegistry::new(no_group).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidPattern { .. }));
    }
}
