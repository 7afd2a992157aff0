//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rbtree/rbtree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `RBTREE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::Order;
use crate::errors::{SettingsError, SettingsResult};

/// How `show` renders a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// In-order `(value left right parent color)` listing on one line
    Inline,
    /// Indented tree drawing
    #[default]
    Tree,
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => write!(f, "inline"),
            Self::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for DisplayStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "tree" => Ok(Self::Tree),
            other => Err(format!("unknown display style '{other}', expected inline or tree")),
        }
    }
}

/// Effective settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rendering used by `show`
    pub style: DisplayStyle,
    /// Traversal used by `walk`
    pub order: Order,
    /// Colorize red nodes in terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: DisplayStyle::Tree,
            order: Order::InOrder,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub style: Option<DisplayStyle>,
    pub order: Option<Order>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for rbtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rbtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rbtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> SettingsResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            style: overlay.style.unwrap_or(self.style),
            order: overlay.order.unwrap_or(self.order),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist when given
    pub fn load(config_file: Option<&Path>) -> SettingsResult<Self> {
        let global = global_config_path();
        Self::load_layers(
            global.as_deref(),
            config_file,
            Environment::with_prefix("RBTREE"),
        )
    }

    /// Load from explicit layers. A missing global file is skipped, a missing
    /// explicit file is an error.
    #[instrument(level = "debug", skip(env))]
    pub fn load_layers(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env: Environment,
    ) -> SettingsResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global.filter(|p| p.exists()) {
            debug!("global config: {}", global_path.display());
            current = current.merge_with(&load_raw_settings(global_path)?);
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current, env)
    }

    /// Apply RBTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> SettingsResult<Self> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(env.prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional(config.get_string("style"))? {
            settings.style = val.parse().map_err(SettingsError::Config)?;
        }
        if let Some(val) = optional(config.get_string("order"))? {
            settings.order = val.parse().map_err(SettingsError::Config)?;
        }
        if let Some(val) = optional(config.get_bool("color"))? {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> SettingsResult<String> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize(e.to_string()))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rbtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rbtree/rbtree.toml
#   File:   rbtree --config <path>
#   Env:    RBTREE_* environment variables (RBTREE_STYLE, RBTREE_ORDER, RBTREE_COLOR)

# How `show` renders a tree: "tree" or "inline"
# style = "tree"

# Default traversal for `walk`: "pre", "in", "post" or "breadth"
# order = "in"

# Colorize red nodes in terminal output
# color = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Config(e.to_string())
}

/// An unset key is `None`; any other lookup failure is an error.
fn optional<T>(lookup: Result<T, ConfigError>) -> SettingsResult<Option<T>> {
    match lookup {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("RBTREE").source(Some(map))
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_layers(None, None, env_of(&[])).expect("load defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.order, Order::InOrder);
        assert_eq!(settings.style, DisplayStyle::Tree);
    }

    #[test]
    fn given_env_vars_when_loading_then_they_override() {
        let settings = Settings::load_layers(
            None,
            None,
            env_of(&[("RBTREE_ORDER", "post"), ("RBTREE_STYLE", "inline"), ("RBTREE_COLOR", "false")]),
        )
        .unwrap();
        assert_eq!(settings.order, Order::PostOrder);
        assert_eq!(settings.style, DisplayStyle::Inline);
        assert!(!settings.color);
    }

    #[test]
    fn given_bad_env_order_when_loading_then_reports_config_error() {
        let err = Settings::load_layers(None, None, env_of(&[("RBTREE_ORDER", "zigzag")]))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Config(ref m) if m.contains("zigzag")));
    }

    #[test]
    fn given_bad_env_color_when_loading_then_reports_config_error() {
        let err = Settings::load_layers(None, None, env_of(&[("RBTREE_COLOR", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Config(_)), "got {err:?}");
    }

    #[test]
    fn given_bad_env_style_when_loading_then_reports_config_error() {
        let err = Settings::load_layers(None, None, env_of(&[("RBTREE_STYLE", "fancy")]))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Config(ref m) if m.contains("fancy")));
    }

    #[test]
    fn given_lookups_when_filtering_then_only_missing_keys_are_skipped() {
        assert_eq!(optional(Ok(3)).unwrap(), Some(3));
        let missing: Result<i32, ConfigError> = Err(ConfigError::NotFound("style".into()));
        assert_eq!(optional(missing).unwrap(), None);
        let broken: Result<i32, ConfigError> = Err(ConfigError::Message("bad value".into()));
        assert!(matches!(
            optional(broken),
            Err(SettingsError::Config(ref m)) if m.contains("bad value")
        ));
    }

    #[test]
    fn given_missing_global_file_when_loading_then_skips_it() {
        let settings = Settings::load_layers(
            Some(Path::new("/nonexistent/rbtree.toml")),
            None,
            env_of(&[]),
        )
        .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_missing_explicit_file_when_loading_then_fails() {
        let err = Settings::load_layers(None, Some(Path::new("/nonexistent/rbtree.toml")), env_of(&[]))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn given_settings_when_serializing_then_uses_short_names() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("style = \"tree\""));
        assert!(toml.contains("order = \"in\""));
        assert!(toml.contains("color = true"));
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }

    #[test]
    fn given_style_names_when_parsing_then_accepts_known() {
        assert_eq!("Inline".parse::<DisplayStyle>(), Ok(DisplayStyle::Inline));
        assert!("fancy".parse::<DisplayStyle>().is_err());
    }
}
