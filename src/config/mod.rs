//! Configuration resolution.
//!
//! A catalog is configured once, at construction, from a [`PartialConfig`]:
//! an optional global style applied as the base for every brick, plus
//! optional per-brick theme overrides. [`resolve`] deep-merges the partial
//! into the documented defaults and validates theme keys against the closed
//! [`BrickId`] enumeration, producing one immutable [`Config`] per catalog
//! instance.
//!
//! # Example
//!
//! ```rust
//! use brickwork::config::{resolve, Config, PartialConfig};
//! use brickwork::types::StyleMap;
//!
//! let partial = PartialConfig {
//!     global_style: Some(StyleMap::new().with("font-family", "Inter")),
//!     ..Default::default()
//! };
//!
//! let config = resolve(&Config::default(), &partial).unwrap();
//! assert!(config.global_style.contains("font-family"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::BrickError;
use crate::types::{BrickId, StyleMap};

// =============================================================================
// Config
// =============================================================================

/// The effective configuration of one catalog instance.
///
/// Created once by [`resolve`]; immutable afterward. Theme keys are typed
/// brick identifiers - an unknown key cannot exist here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Style applied as the base for every brick.
    pub global_style: StyleMap,
    /// Per-brick style overrides.
    pub theme: BTreeMap<BrickId, StyleMap>,
}

impl Config {
    /// The theme override for one brick, if configured.
    pub fn brick_theme(&self, brick: BrickId) -> Option<&StyleMap> {
        self.theme.get(&brick)
    }
}

// =============================================================================
// PartialConfig
// =============================================================================

/// User-supplied configuration input.
///
/// Theme keys are strings because this type sits at the external boundary
/// (it deserializes from JSON with camelCase field names); [`resolve`]
/// validates them against the closed [`BrickId`] enumeration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialConfig {
    /// Optional base style for every brick.
    pub global_style: Option<StyleMap>,
    /// Optional per-brick overrides, keyed by brick identity token.
    pub theme: Option<BTreeMap<String, StyleMap>>,
}

// =============================================================================
// resolve
// =============================================================================

/// Deep-merge a partial configuration into defaults.
///
/// For each key present in the partial, the corresponding default
/// sub-object is merged recursively; keys absent from the partial keep the
/// default value. At the property level values are scalars, so the
/// partial's value replaces the default outright - last-writer-wins, with
/// no error on object-vs-scalar shape conflicts.
///
/// Theme keys outside the closed [`BrickId`] enumeration are rejected with
/// [`BrickError::UnknownThemeKey`]. Neither input is mutated.
pub fn resolve(defaults: &Config, partial: &PartialConfig) -> Result<Config, BrickError> {
    let mut resolved = defaults.clone();

    if let Some(global) = &partial.global_style {
        merge_style(&mut resolved.global_style, global);
    }

    if let Some(theme) = &partial.theme {
        for (key, overrides) in theme {
            let brick = BrickId::from_str(key).ok_or_else(|| BrickError::UnknownThemeKey {
                key: key.clone(),
            })?;
            merge_style(resolved.theme.entry(brick).or_default(), overrides);
        }
    }

    tracing::debug!(
        global_properties = resolved.global_style.len(),
        themed_bricks = resolved.theme.len(),
        "configuration resolved"
    );

    Ok(resolved)
}

/// Merge `overrides` into `base`, property by property.
fn merge_style(base: &mut StyleMap, overrides: &StyleMap) {
    for (property, value) in overrides.iter() {
        base.insert(property.clone(), value.clone());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StyleValue;

    fn defaults() -> Config {
        let mut theme = BTreeMap::new();
        theme.insert(
            BrickId::Text,
            StyleMap::new().with("color", "black").with("line-height", 1.5),
        );
        Config {
            global_style: StyleMap::new().with("font-family", "serif"),
            theme,
        }
    }

    #[test]
    fn test_empty_partial_keeps_defaults() {
        let base = defaults();
        let resolved = resolve(&base, &PartialConfig::default()).unwrap();
        assert_eq!(resolved, base);
    }

    #[test]
    fn test_scalar_values_replace_outright() {
        let base = defaults();
        let partial = PartialConfig {
            global_style: Some(StyleMap::new().with("font-family", "Inter")),
            ..Default::default()
        };

        let resolved = resolve(&base, &partial).unwrap();
        assert_eq!(
            resolved.global_style.get("font-family"),
            Some(&StyleValue::from("Inter"))
        );
    }

    #[test]
    fn test_theme_merges_per_property() {
        let base = defaults();
        let mut theme = BTreeMap::new();
        theme.insert(
            "text".to_string(),
            StyleMap::new().with("color", "#ff0000"),
        );
        let partial = PartialConfig {
            theme: Some(theme),
            ..Default::default()
        };

        let resolved = resolve(&base, &partial).unwrap();
        let text = resolved.brick_theme(BrickId::Text).unwrap();
        // Overridden property takes the partial's value...
        assert_eq!(text.get("color"), Some(&StyleValue::from("#ff0000")));
        // ...while untouched default properties survive.
        assert_eq!(text.get("line-height"), Some(&StyleValue::from(1.5)));
    }

    #[test]
    fn test_theme_key_absent_from_defaults_is_added() {
        let mut theme = BTreeMap::new();
        theme.insert(
            "heading".to_string(),
            StyleMap::new().with("color", "navy"),
        );
        let partial = PartialConfig {
            theme: Some(theme),
            ..Default::default()
        };

        let resolved = resolve(&Config::default(), &partial).unwrap();
        assert!(resolved.brick_theme(BrickId::Heading).is_some());
    }

    #[test]
    fn test_unknown_theme_key_rejected() {
        let mut theme = BTreeMap::new();
        theme.insert("banner".to_string(), StyleMap::new().with("color", "red"));
        let partial = PartialConfig {
            theme: Some(theme),
            ..Default::default()
        };

        let err = resolve(&Config::default(), &partial).unwrap_err();
        assert_eq!(
            err,
            BrickError::UnknownThemeKey {
                key: "banner".to_string()
            }
        );
    }

    #[test]
    fn test_inputs_not_mutated() {
        let base = defaults();
        let base_snapshot = base.clone();
        let partial = PartialConfig {
            global_style: Some(StyleMap::new().with("font-family", "Inter")),
            ..Default::default()
        };
        let partial_snapshot = partial.clone();

        resolve(&base, &partial).unwrap();
        assert_eq!(base, base_snapshot);
        assert_eq!(partial, partial_snapshot);
    }

    #[test]
    fn test_partial_config_from_json() {
        let json = r##"{
            "globalStyle": { "font-family": "Inter" },
            "theme": { "text": { "color": "#ff0000" } }
        }"##;
        let partial: PartialConfig = serde_json::from_str(json).unwrap();
        let resolved = resolve(&Config::default(), &partial).unwrap();

        assert_eq!(
            resolved.global_style.get("font-family"),
            Some(&StyleValue::from("Inter"))
        );
        assert_eq!(
            resolved.brick_theme(BrickId::Text).unwrap().get("color"),
            Some(&StyleValue::from("#ff0000"))
        );
    }

    #[test]
    fn test_json_unknown_theme_key_rejected() {
        let json = r#"{ "theme": { "jumbotron": { "color": "red" } } }"#;
        let partial: PartialConfig = serde_json::from_str(json).unwrap();
        assert!(resolve(&Config::default(), &partial).is_err());
    }
}
