use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;
use shared::constants::{
    ACTIVITY_BASE, BUNDLE, DEFAULT_INDENT, GENERATED_SUFFIX, MAX_HIERARCHY_DEPTH, VIEW_BASE,
};
use thiserror::Error;

use crate::{
    decl::TypeName,
    source::{is_identifier, is_qualified_name},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("codegen.suffix '{0}' must be non-empty and keep class names valid identifiers")]
    InvalidSuffix(String),
    #[error("codegen.indent {0:?} must be non-empty spaces or tabs")]
    InvalidIndent(String),
    #[error("platform.{key} '{name}' is not a qualified type name")]
    InvalidPlatformType { key: &'static str, name: String },
}

/// How a looked-up view is stored by the generated initializer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStyle {
    /// Assign to the bound field: `title = (TextView) findViewById(1);`
    #[default]
    Field,
    /// Declare a local: `TextView title = (TextView) findViewById(1);`
    Local,
}

/// Whether post-init hooks and click handlers that fail validation still get generated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignaturePolicy {
    #[default]
    Strict,
    Permissive,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformConfig {
    pub activity: TypeName,
    pub view: TypeName,
    pub bundle: TypeName,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            activity: TypeName::new(ACTIVITY_BASE),
            view: TypeName::new(VIEW_BASE),
            bundle: TypeName::new(BUNDLE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    pub suffix: String,
    pub view_style: ViewStyle,
    pub indent: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            suffix: GENERATED_SUFFIX.to_string(),
            view_style: ViewStyle::default(),
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateConfig {
    pub signatures: SignaturePolicy,
    pub max_hierarchy_depth: usize,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            signatures: SignaturePolicy::default(),
            max_hierarchy_depth: MAX_HIERARCHY_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessorConfig {
    pub platform: PlatformConfig,
    pub codegen: CodegenConfig,
    pub validate: ValidateConfig,
}

impl ProcessorConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Rejects values that would make the generated source invalid or
    /// let a generated file replace the class it extends.
    pub fn check(&self) -> Result<(), ConfigError> {
        let suffix = &self.codegen.suffix;
        if suffix.is_empty() || !is_identifier(&format!("A{suffix}")) {
            return Err(ConfigError::InvalidSuffix(suffix.clone()));
        }
        let indent = &self.codegen.indent;
        if indent.is_empty() || !indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::InvalidIndent(indent.clone()));
        }
        let platform = [
            ("activity", &self.platform.activity),
            ("view", &self.platform.view),
            ("bundle", &self.platform.bundle),
        ];
        match platform.into_iter().find(|(_, ty)| !is_qualified_name(ty.as_str())) {
            Some((key, ty)) => Err(ConfigError::InvalidPlatformType {
                key,
                name: ty.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ProcessorConfig::from_toml("").unwrap(), ProcessorConfig::default());
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let config = ProcessorConfig::from_toml(
            r#"
            [platform]
            activity = "androidx.appcompat.app.AppCompatActivity"

            [codegen]
            view_style = "local"

            [validate]
            signatures = "permissive"
            "#,
        )
        .unwrap();
        assert_eq!(config.platform.activity.as_str(), "androidx.appcompat.app.AppCompatActivity");
        assert_eq!(config.platform.view.as_str(), VIEW_BASE);
        assert_eq!(config.codegen.view_style, ViewStyle::Local);
        assert_eq!(config.codegen.suffix, "_");
        assert_eq!(config.validate.signatures, SignaturePolicy::Permissive);
        assert_eq!(config.validate.max_hierarchy_depth, MAX_HIERARCHY_DEPTH);
    }

    #[test]
    fn suffix_must_extend_the_class_name() {
        let suffix =
            |value: &str| ProcessorConfig::from_toml(&format!("[codegen]\nsuffix = {value:?}"));
        assert!(matches!(suffix(""), Err(ConfigError::InvalidSuffix(s)) if s.is_empty()));
        assert!(matches!(suffix("-x"), Err(ConfigError::InvalidSuffix(_))));
        assert!(matches!(suffix("Gen"), Ok(c) if c.codegen.suffix == "Gen"));
        assert!(suffix("$1").is_ok());
    }

    #[test]
    fn indent_and_platform_types_are_checked() {
        assert!(matches!(
            ProcessorConfig::from_toml("[codegen]\nindent = \"\""),
            Err(ConfigError::InvalidIndent(_))
        ));
        assert!(matches!(
            ProcessorConfig::from_toml("[codegen]\nindent = \"--\""),
            Err(ConfigError::InvalidIndent(_))
        ));
        assert!(ProcessorConfig::from_toml("[codegen]\nindent = \"\\t\"").is_ok());
        assert!(matches!(
            ProcessorConfig::from_toml("[platform]\nview = \"android..View\""),
            Err(ConfigError::InvalidPlatformType { key: "view", .. })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            ProcessorConfig::from_toml("[codegen]\nsufix = \"Gen\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
