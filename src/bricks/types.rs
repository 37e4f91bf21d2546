//! Brick props.
//!
//! These types define the per-invocation interface of each brick. Every
//! props struct carries the shared instance fields - optional custom
//! style, extra class tokens, and (where children make sense) the child
//! nodes passed through unchanged - plus the brick-specific fields its
//! intrinsic style is computed from.
//!
//! Structs with a required field provide `new()`; everything else derives
//! `Default` for `..Default::default()` construction.

use bitflags::bitflags;

use crate::render::Child;
use crate::types::{Position, StyleMap};

// =============================================================================
// Text bricks
// =============================================================================

/// Props for the heading, sub-heading, and text bricks.
#[derive(Debug, Default)]
pub struct TextProps {
    /// Text color; feeds the intrinsic style when present.
    pub color: Option<String>,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens, prepended in given order.
    pub class_list: Vec<String>,
    /// Children, passed through unchanged.
    pub children: Vec<Child>,
}

/// Props for the bold brick.
#[derive(Debug, Default)]
pub struct BoldProps {
    /// Text color.
    pub color: Option<String>,
    /// Numeric font weight; `"bolder"` when absent.
    pub weight: Option<u32>,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
    /// Children, passed through unchanged.
    pub children: Vec<Child>,
}

/// Props for the link brick.
#[derive(Debug)]
pub struct LinkProps {
    /// Link target - REQUIRED.
    pub href: String,
    /// Text color; `"#0000ff"` when absent.
    pub color: Option<String>,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
    /// Children, passed through unchanged.
    pub children: Vec<Child>,
}

impl LinkProps {
    /// Create link props with the required target.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            color: None,
            custom_style: StyleMap::new(),
            class_list: Vec::new(),
            children: Vec::new(),
        }
    }
}

// =============================================================================
// Image bricks
// =============================================================================

/// Props for the fixed-size image brick.
///
/// Width and height are rem-denominated and resolve to pixels in the
/// intrinsic style.
#[derive(Debug)]
pub struct ImageProps {
    /// Image source - REQUIRED.
    pub src: String,
    /// Width in rem - REQUIRED.
    pub width: f64,
    /// Height in rem - REQUIRED.
    pub height: f64,
    /// Alternative text.
    pub alt: Option<String>,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
}

impl ImageProps {
    /// Create image props with the required source and dimensions.
    pub fn new(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            src: src.into(),
            width,
            height,
            alt: None,
            custom_style: StyleMap::new(),
            class_list: Vec::new(),
        }
    }
}

/// Props for the adaptive image brick (sizes with its container).
#[derive(Debug)]
pub struct ImageAdaptiveProps {
    /// Image source - REQUIRED.
    pub src: String,
    /// Alternative text.
    pub alt: Option<String>,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
}

impl ImageAdaptiveProps {
    /// Create adaptive image props with the required source.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
            custom_style: StyleMap::new(),
            class_list: Vec::new(),
        }
    }
}

/// Props for the image container brick (background image).
#[derive(Debug)]
pub struct ImageContainerProps {
    /// Image source - REQUIRED.
    pub src: String,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
}

impl ImageContainerProps {
    /// Create image container props with the required source.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            custom_style: StyleMap::new(),
            class_list: Vec::new(),
        }
    }
}

// =============================================================================
// Video bricks
// =============================================================================

bitflags! {
    /// Playback attributes of the video brick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VideoAttrs: u8 {
        /// Show playback controls.
        const CONTROLS = 1 << 0;
        /// Start playback automatically.
        const AUTOPLAY = 1 << 1;
        /// Start muted.
        const MUTED = 1 << 2;
        /// Loop playback.
        const LOOP = 1 << 3;
    }
}

/// Props for the video brick.
#[derive(Debug)]
pub struct VideoProps {
    /// Video source - REQUIRED.
    pub src: String,
    /// Playback attributes.
    pub attrs: VideoAttrs,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
}

impl VideoProps {
    /// Create video props with the required source.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            attrs: VideoAttrs::empty(),
            custom_style: StyleMap::new(),
            class_list: Vec::new(),
        }
    }
}

/// Permissions granted to an embedded player when `allow` is absent.
pub const DEFAULT_EMBED_ALLOW: &str =
    "accelerometer autoplay clipboard-write encrypted-media gyroscope picture-in-picture";

/// Props for the embedded video brick.
#[derive(Debug)]
pub struct VideoEmbedProps {
    /// Embed URL - REQUIRED.
    pub embed: String,
    /// Permissions for the embedded player; [`DEFAULT_EMBED_ALLOW`] when
    /// absent.
    pub allow: Option<String>,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
}

impl VideoEmbedProps {
    /// Create embed props with the required URL.
    pub fn new(embed: impl Into<String>) -> Self {
        Self {
            embed: embed.into(),
            allow: None,
            custom_style: StyleMap::new(),
            class_list: Vec::new(),
        }
    }
}

// =============================================================================
// Layout bricks
// =============================================================================

/// Props shared by the vertical, horizontal, and wrap layouts.
#[derive(Debug, Default)]
pub struct LayoutProps {
    /// Gap between children, in rem.
    pub gap: Option<f64>,
    /// Corner radius, in px.
    pub curve: Option<f64>,
    /// Background color.
    pub background: Option<String>,
    /// Cross-axis alignment; stretch when absent.
    pub align: Option<Position>,
    /// Main-axis justification; start when absent.
    pub justify: Option<Position>,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
    /// Children, passed through unchanged.
    pub children: Vec<Child>,
}

/// Props for the responsive container brick.
///
/// Paddings are viewport-width-denominated (vw) and apply pairwise:
/// vertical to top and bottom, horizontal to left and right.
#[derive(Debug, Default)]
pub struct ContainerProps {
    /// Top and bottom padding, in vw.
    pub vertical_padding: Option<f64>,
    /// Left and right padding, in vw.
    pub horizontal_padding: Option<f64>,
    /// Gap between children, in rem.
    pub gap: Option<f64>,
    /// Corner radius, in px.
    pub curve: Option<f64>,
    /// Background color.
    pub background: Option<String>,
    /// Cross-axis alignment.
    pub align: Option<Position>,
    /// Main-axis justification.
    pub justify: Option<Position>,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
    /// Children, passed through unchanged.
    pub children: Vec<Child>,
}

/// Props for the fixed wrapping layout - the one breakpoint-aware brick.
#[derive(Debug)]
pub struct FixedWrapProps {
    /// Viewport-width threshold in px - REQUIRED. At or below it the
    /// layout stacks into a column; above it, a row.
    pub wrap: u32,
    /// Gap between children, in rem.
    pub gap: Option<f64>,
    /// Corner radius, in px.
    pub curve: Option<f64>,
    /// Background color.
    pub background: Option<String>,
    /// Cross-axis alignment.
    pub align: Option<Position>,
    /// Main-axis justification.
    pub justify: Option<Position>,
    /// Instance-supplied style override.
    pub custom_style: StyleMap,
    /// Extra class tokens.
    pub class_list: Vec<String>,
    /// Children, passed through unchanged.
    pub children: Vec<Child>,
}

impl FixedWrapProps {
    /// Create fixed-wrap props with the required threshold.
    pub fn new(wrap: u32) -> Self {
        Self {
            wrap,
            gap: None,
            curve: None,
            background: None,
            align: None,
            justify: None,
            custom_style: StyleMap::new(),
            class_list: Vec::new(),
            children: Vec::new(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
