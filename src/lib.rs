//! # brickwork
//!
//! Themable catalog of declarative UI bricks with a reactive style
//! composition engine.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals)
//! for the one piece of live reactivity: the viewport-breakpoint-driven
//! layout direction.
//!
//! ## Architecture
//!
//! Each brick invocation flows through the composition engine and hands
//! the result, unchanged, to an external rendering layer:
//!
//! ```text
//! instance props → StyleComposer + ClassListBuilder → RenderNode {style, class_list}
//!                         ↑
//!            effective Config (resolved once per catalog)
//! ```
//!
//! Styling merges four layers per property - global base, per-brick
//! theme, instance custom style, brick-intrinsic style - where a value
//! participates only when it is set. The fixed wrapping layout
//! additionally subscribes to the viewport width; a breakpoint crossing
//! re-runs composition with the flipped direction.
//!
//! ## Modules
//!
//! - [`types`] - Core types (`BrickId`, `Category`, `Position`, `StyleMap`)
//! - [`config`] - Configuration resolution into one immutable `Config`
//! - [`style`] - Four-layer style composition
//! - [`classes`] - Class-list assembly and the injected token resolver
//! - [`viewport`] - Viewport-width signal fed by the host
//! - [`breakpoint`] - Threshold controller for the fixed wrapping layout
//! - [`nav`] - Navigation seam for the link brick
//! - [`render`] - Render-node output handed to the rendering layer
//! - [`bricks`] - The catalog itself

pub mod breakpoint;
pub mod bricks;
pub mod classes;
pub mod config;
pub mod error;
pub mod nav;
pub mod render;
pub mod style;
pub mod types;
pub mod viewport;

// Re-export commonly used items
pub use types::*;

pub use breakpoint::{BreakpointController, BreakpointState};

pub use bricks::{
    BoldProps, Bricks, ContainerProps, FixedWrapProps, ImageAdaptiveProps, ImageContainerProps,
    ImageProps, LayoutProps, LinkProps, TextProps, VideoAttrs, VideoEmbedProps, VideoProps,
    DEFAULT_EMBED_ALLOW,
};

pub use classes::{build_class_list, ClassKey, ClassResolver};

pub use config::{resolve, Config, PartialConfig};

pub use error::BrickError;

pub use nav::{follow_link, LinkOutcome, Navigator, NullNavigator, ParsedUrl};

pub use render::{Child, Cleanup, ClickCallback, RenderNode, Tag};

pub use style::compose;

pub use viewport::{
    reset_viewport_state, set_viewport_width, viewport_width, viewport_width_signal,
};
