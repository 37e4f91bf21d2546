//! Style composition.
//!
//! [`compose`] merges the four styling layers into one final style map.
//! It is a pure function of its arguments; all layers are fully resolved
//! before any output exists, and nothing downstream ever observes a
//! partially-composed style.
//!
//! # Layer precedence
//!
//! Global is the base; then, for each property, the highest-precedence
//! *set* value wins:
//!
//! 1. `intrinsic` - computed by the brick from its own props
//! 2. `theme` - the per-brick override from configuration
//! 3. `custom` - the instance-supplied override
//! 4. `global` - the configured base
//!
//! A value that is not set (absent, empty string, zero, `false`) never
//! overrides a lower layer. In particular, an unset intrinsic property
//! does not clear a value provided by theme or custom. This is a
//! documented contract of the engine, not an accident to be fixed.

use crate::types::StyleMap;

/// Compose the final style map from the four layers.
///
/// The output contains the union of the layers' keys; override layers are
/// applied in the order custom, theme, intrinsic, so intrinsic's set value
/// always wins last.
///
/// # Example
///
/// ```rust
/// use brickwork::style::compose;
/// use brickwork::types::{StyleMap, StyleValue};
///
/// let global = StyleMap::new().with("color", "blue");
/// let theme = StyleMap::new().with("color", "green");
/// let unset = StyleMap::new().with("color", "");
///
/// let out = compose(&global, &theme, &StyleMap::new(), &unset);
/// assert_eq!(out.get("color"), Some(&StyleValue::from("green")));
/// ```
pub fn compose(
    global: &StyleMap,
    theme: &StyleMap,
    custom: &StyleMap,
    intrinsic: &StyleMap,
) -> StyleMap {
    let mut composed = global.clone();

    for layer in [custom, theme, intrinsic] {
        for (property, value) in layer.iter() {
            if value.is_set() {
                composed.insert(property.clone(), value.clone());
            }
        }
    }

    composed
}

// =============================================================================
// Tests
// =============================================================================
