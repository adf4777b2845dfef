use crate::adapters::html::parse_selector;
use crate::adapters::http::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::core::registry::{builtin_aspects, AspectRegistry, DEVICE_NAME_SELECTOR};
use crate::core::ConfigProvider;
use crate::domain::model::Aspect;
use crate::utils::error::{Result, ScoreError};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default = "builtin_aspects")]
    pub aspects: Vec<Aspect>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub name_selector: Option<String>,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            device: DeviceConfig::default(),
            aspects: builtin_aspects(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${USER_AGENT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            ScoreError::InvalidPattern {
                pattern: "env var".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_positive_number("source.timeout_seconds", self.timeout_seconds(), 1)?;
        validate_non_empty_string("source.user_agent", self.user_agent())?;
        parse_selector(self.name_selector())?;

        for aspect in &self.aspects {
            parse_selector(&aspect.selector)?;
        }

        // 權重、門檻與正規表達式由 registry 驗證
        AspectRegistry::new(self.aspects.clone())?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    fn name_selector(&self) -> &str {
        self.device
            .name_selector
            .as_deref()
            .unwrap_or(DEVICE_NAME_SELECTOR)
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn user_agent(&self) -> &str {
        self.source.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
