//! Core types for brickwork.
//!
//! These types define the foundation that everything builds on: the closed
//! brick and category enumerations, the alignment positions, and the style
//! map that flows through the composition engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// Coarse grouping of bricks that share base styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Block-level text (headings, paragraphs).
    Text,
    /// Inline text children (bold spans, links).
    TextChild,
    /// Containers and flex layouts.
    Layout,
    /// Image variants.
    Image,
    /// Video variants.
    Video,
}

impl Category {
    /// The category's class token, e.g. `"categoryText"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "categoryText",
            Self::TextChild => "categoryTextChild",
            Self::Layout => "categoryLayout",
            Self::Image => "categoryImage",
            Self::Video => "categoryVideo",
        }
    }

    /// Parse from the exact class token.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "categoryText" => Some(Self::Text),
            "categoryTextChild" => Some(Self::TextChild),
            "categoryLayout" => Some(Self::Layout),
            "categoryImage" => Some(Self::Image),
            "categoryVideo" => Some(Self::Video),
            _ => None,
        }
    }

    /// All categories as a slice.
    pub const fn all() -> &'static [Category] {
        &[
            Self::Text,
            Self::TextChild,
            Self::Layout,
            Self::Image,
            Self::Video,
        ]
    }
}

// =============================================================================
// BrickId
// =============================================================================

/// Identity of one catalog entry.
///
/// The enumeration is closed: theme configuration is validated against it,
/// and every brick maps to exactly one [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BrickId {
    Heading,
    SubHeading,
    Text,
    Bold,
    Link,
    Image,
    ImageAdaptive,
    ImageContainer,
    Video,
    VideoEmbed,
    Container,
    VerticalLayout,
    HorizontalLayout,
    WrapLayout,
    FixedWrapLayout,
}

impl BrickId {
    /// The brick's identity token, e.g. `"subHeading"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::SubHeading => "subHeading",
            Self::Text => "text",
            Self::Bold => "bold",
            Self::Link => "link",
            Self::Image => "image",
            Self::ImageAdaptive => "imageAdaptive",
            Self::ImageContainer => "imageContainer",
            Self::Video => "video",
            Self::VideoEmbed => "videoEmbed",
            Self::Container => "container",
            Self::VerticalLayout => "verticalLayout",
            Self::HorizontalLayout => "horizontalLayout",
            Self::WrapLayout => "wrapLayout",
            Self::FixedWrapLayout => "fixedWrapLayout",
        }
    }

    /// Parse from the exact identity token.
    ///
    /// Returns `None` for anything outside the closed enumeration; theme
    /// validation relies on this.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "heading" => Some(Self::Heading),
            "subHeading" => Some(Self::SubHeading),
            "text" => Some(Self::Text),
            "bold" => Some(Self::Bold),
            "link" => Some(Self::Link),
            "image" => Some(Self::Image),
            "imageAdaptive" => Some(Self::ImageAdaptive),
            "imageContainer" => Some(Self::ImageContainer),
            "video" => Some(Self::Video),
            "videoEmbed" => Some(Self::VideoEmbed),
            "container" => Some(Self::Container),
            "verticalLayout" => Some(Self::VerticalLayout),
            "horizontalLayout" => Some(Self::HorizontalLayout),
            "wrapLayout" => Some(Self::WrapLayout),
            "fixedWrapLayout" => Some(Self::FixedWrapLayout),
            _ => None,
        }
    }

    /// The category this brick belongs to.
    pub const fn category(self) -> Category {
        match self {
            Self::Heading | Self::SubHeading | Self::Text => Category::Text,
            Self::Bold | Self::Link => Category::TextChild,
            Self::Image | Self::ImageAdaptive | Self::ImageContainer => Category::Image,
            Self::Video | Self::VideoEmbed => Category::Video,
            Self::Container
            | Self::VerticalLayout
            | Self::HorizontalLayout
            | Self::WrapLayout
            | Self::FixedWrapLayout => Category::Layout,
        }
    }

    /// All bricks as a slice.
    pub const fn all() -> &'static [BrickId] {
        &[
            Self::Heading,
            Self::SubHeading,
            Self::Text,
            Self::Bold,
            Self::Link,
            Self::Image,
            Self::ImageAdaptive,
            Self::ImageContainer,
            Self::Video,
            Self::VideoEmbed,
            Self::Container,
            Self::VerticalLayout,
            Self::HorizontalLayout,
            Self::WrapLayout,
            Self::FixedWrapLayout,
        ]
    }
}

// =============================================================================
// Position
// =============================================================================

/// Alignment/justification choice for layout bricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Start,
    Center,
    End,
    Stretch,
}

/// Alignment used when an instance omits `align`.
pub const DEFAULT_ALIGN: Position = Position::Stretch;

/// Justification used when an instance omits `justify`.
pub const DEFAULT_JUSTIFY: Position = Position::Start;

impl Position {
    /// The position's name, e.g. `"stretch"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Stretch => "stretch",
        }
    }

    /// Parse from the position name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            "stretch" => Some(Self::Stretch),
            _ => None,
        }
    }

    /// All positions as a slice.
    pub const fn all() -> &'static [Position] {
        &[Self::Start, Self::Center, Self::End, Self::Stretch]
    }
}

// =============================================================================
// FlexDirection
// =============================================================================

/// Layout direction toggled by the breakpoint controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    /// The CSS value for this direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

// =============================================================================
// StyleValue
// =============================================================================

/// One style-property value: string, number, or boolean.
///
/// A value participates in composition only when it is "set": a non-empty
/// string, a non-zero number, or `true`. Unset values never override a
/// lower-precedence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    Str(String),
}

impl StyleValue {
    /// Whether this value participates in layer precedence.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// =============================================================================
// StyleMap
// =============================================================================

/// Ordered mapping from style-property name to [`StyleValue`].
///
/// Property names are open-ended strings (`"color"`, `"background-color"`,
/// ...); the map is ordered so composed output is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, StyleValue>);

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing any previous value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.0.insert(property.into(), value.into());
    }

    /// Insert a property only when the value is present.
    ///
    /// Absent instance props contribute nothing to an intrinsic map.
    pub fn insert_opt<V: Into<StyleValue>>(
        &mut self,
        property: impl Into<String>,
        value: Option<V>,
    ) {
        if let Some(value) = value {
            self.insert(property, value);
        }
    }

    /// Builder-style insert for fluent construction.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Get a property's value.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    /// Whether the property is present (set or not).
    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Iterate over properties in order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.0.iter()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// =============================================================================
// Tests
// =============================================================================
