use serde::Deserialize;

use matchplay_core::course::TeeSet;

/// Config file read from the working directory when present.
pub const CONFIG_FILE: &str = "matchplay.toml";

/// Top-level CLI configuration, loaded from `matchplay.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub output: OutputConfig,
    pub course: CourseConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// How reports are printed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Mark holes where a card receives a stroke.
    pub show_strokes: bool,
    /// Add a net row under each card.
    pub show_net: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_strokes: true,
            show_net: false,
        }
    }
}

/// Defaults for commands that don't read a fixture.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    pub default_tee: TeeSet,
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl CliConfig {
    /// Load config from `matchplay.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let path = std::env::var("MATCHPLAY_CONFIG")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| CONFIG_FILE.to_string());
        let mut config = Self::from_file(std::path::Path::new(&path));
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Read a config file, falling back to defaults if it is missing or invalid.
    pub fn from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<CliConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    cfg
                },
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        "Failed to parse config: {e}, using defaults"
                    );
                    CliConfig::default()
                },
            },
            Err(_) => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                CliConfig::default()
            },
        }
    }

    /// Apply `MATCHPLAY_*` overrides. Unparseable values are ignored with a warning.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(value) = var("MATCHPLAY_OUTPUT_FORMAT")
            && !value.is_empty()
        {
            match value.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(e) => tracing::warn!("Ignoring MATCHPLAY_OUTPUT_FORMAT: {e}"),
            }
        }
        if let Some(value) = var("MATCHPLAY_SHOW_STROKES") {
            match parse_flag(&value) {
                Some(flag) => self.output.show_strokes = flag,
                None => tracing::warn!(value = %value, "Ignoring MATCHPLAY_SHOW_STROKES"),
            }
        }
        if let Some(value) = var("MATCHPLAY_SHOW_NET") {
            match parse_flag(&value) {
                Some(flag) => self.output.show_net = flag,
                None => tracing::warn!(value = %value, "Ignoring MATCHPLAY_SHOW_NET"),
            }
        }
        if let Some(value) = var("MATCHPLAY_DEFAULT_TEE")
            && !value.is_empty()
        {
            match value.parse::<TeeSet>() {
                Ok(tee) => self.course.default_tee = tee,
                Err(e) => tracing::warn!("Ignoring MATCHPLAY_DEFAULT_TEE: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_values() {
        let cfg = CliConfig::default();
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert!(cfg.output.show_strokes);
        assert!(!cfg.output.show_net);
        assert_eq!(cfg.course.default_tee, TeeSet::Men);
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[output]
format = "json"
show_strokes = false
show_net = true

[course]
default_tee = "ladies"
"#;
        let cfg: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(!cfg.output.show_strokes);
        assert!(cfg.output.show_net);
        assert_eq!(cfg.course.default_tee, TeeSet::Ladies);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let cfg: CliConfig = toml::from_str("[output]\nshow_net = true\n").unwrap();
        assert!(cfg.output.show_strokes);
        assert!(cfg.output.show_net);
        assert_eq!(cfg.course.default_tee, TeeSet::Men);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = CliConfig::from_file(std::path::Path::new("/nonexistent/matchplay.toml"));
        assert_eq!(cfg.output.format, OutputFormat::Text);
    }

    #[test]
    fn env_overrides_apply() {
        let mut cfg = CliConfig::default();
        cfg.apply_env(env(&[
            ("MATCHPLAY_OUTPUT_FORMAT", "JSON"),
            ("MATCHPLAY_SHOW_STROKES", "off"),
            ("MATCHPLAY_SHOW_NET", "1"),
            ("MATCHPLAY_DEFAULT_TEE", "ladies"),
        ]));
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(!cfg.output.show_strokes);
        assert!(cfg.output.show_net);
        assert_eq!(cfg.course.default_tee, TeeSet::Ladies);
    }

    #[test]
    fn bad_env_values_are_ignored() {
        let mut cfg = CliConfig::default();
        cfg.apply_env(env(&[
            ("MATCHPLAY_OUTPUT_FORMAT", "yaml"),
            ("MATCHPLAY_SHOW_STROKES", "maybe"),
            ("MATCHPLAY_DEFAULT_TEE", "juniors"),
        ]));
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert!(cfg.output.show_strokes);
        assert_eq!(cfg.course.default_tee, TeeSet::Men);
    }
}
