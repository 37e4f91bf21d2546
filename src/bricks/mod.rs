//! The brick catalog.
//!
//! [`Bricks`] is one catalog instance: the resolved immutable
//! configuration plus the injected class resolver and navigator. Each
//! brick method computes its intrinsic style from its own props, runs the
//! shared composition pipeline, and returns a [`RenderNode`] for the
//! external rendering layer.
//!
//! # Example
//!
//! ```rust
//! use brickwork::bricks::{Bricks, TextProps};
//! use brickwork::config::PartialConfig;
//! use brickwork::types::StyleMap;
//!
//! let bricks = Bricks::new(&PartialConfig {
//!     global_style: Some(StyleMap::new().with("font-family", "Inter")),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let node = bricks.text(TextProps {
//!     color: Some("#333333".to_string()),
//!     children: vec!["hello".into()],
//!     ..Default::default()
//! });
//!
//! assert_eq!(node.class_list, "text categoryText alignStretch justifyStart");
//! ```

mod layout;
mod media;
mod text;
mod types;

pub use types::{
    BoldProps, ContainerProps, FixedWrapProps, ImageAdaptiveProps, ImageContainerProps,
    ImageProps, LayoutProps, LinkProps, TextProps, VideoAttrs, VideoEmbedProps, VideoProps,
    DEFAULT_EMBED_ALLOW,
};

use std::rc::Rc;

use crate::classes::{build_class_list, ClassResolver};
use crate::config::{resolve, Config, PartialConfig};
use crate::error::BrickError;
use crate::nav::{Navigator, NullNavigator};
use crate::style::compose;
use crate::types::{BrickId, Position, StyleMap};

/// Pixels per rem; rem-denominated props resolve against a fixed 16px
/// root font size.
pub(crate) const PX_PER_REM: f64 = 16.0;

/// Resolve a rem-denominated prop to pixels.
pub(crate) fn rem_to_px(rem: f64) -> f64 {
    rem * PX_PER_REM
}

// =============================================================================
// Bricks
// =============================================================================

/// One catalog instance.
///
/// The configuration is resolved once at construction and immutable
/// afterward; every composition call reads it through this instance -
/// there is no shared mutable state behind the catalog.
#[derive(Clone)]
pub struct Bricks {
    config: Rc<Config>,
    classes: Rc<ClassResolver>,
    nav: Rc<dyn Navigator>,
}

impl Bricks {
    /// Create a catalog from a partial configuration.
    ///
    /// Defaults: passthrough class resolver, null navigator. Theme keys
    /// outside the closed brick enumeration are rejected here.
    pub fn new(partial: &PartialConfig) -> Result<Self, BrickError> {
        let config = resolve(&Config::default(), partial)?;
        Ok(Self {
            config: Rc::new(config),
            classes: Rc::new(ClassResolver::passthrough()),
            nav: Rc::new(NullNavigator),
        })
    }

    /// Inject a class resolver (hashed tokens from a bundler).
    pub fn with_class_resolver(mut self, classes: ClassResolver) -> Self {
        self.classes = Rc::new(classes);
        self
    }

    /// Inject a navigator for the link brick.
    pub fn with_navigator(mut self, nav: Rc<dyn Navigator>) -> Self {
        self.nav = nav;
        self
    }

    /// The effective configuration of this catalog.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn navigator(&self) -> Rc<dyn Navigator> {
        self.nav.clone()
    }

    pub(crate) fn effective_config(&self) -> Rc<Config> {
        self.config.clone()
    }

    /// Shared pipeline: class list plus four-layer style composition.
    pub(crate) fn process(
        &self,
        brick: BrickId,
        extra: &[String],
        align: Option<Position>,
        justify: Option<Position>,
        custom: &StyleMap,
        intrinsic: &StyleMap,
    ) -> (StyleMap, String) {
        let class_list =
            build_class_list(&self.classes, extra, brick, brick.category(), align, justify);

        let empty = StyleMap::new();
        let theme = self.config.brick_theme(brick).unwrap_or(&empty);
        let style = compose(&self.config.global_style, theme, custom, intrinsic);

        (style, class_list)
    }
}

impl std::fmt::Debug for Bricks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bricks")
            .field("config", &self.config)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
