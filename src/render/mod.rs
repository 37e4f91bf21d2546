//! Render output types.
//!
//! A brick invocation produces a [`RenderNode`]: the markup tag, plain
//! attributes, the composed style (as a signal, so breakpoint-driven
//! re-composition flows through it), the class-list string, and children
//! passed through unchanged. The rendering layer consumes these verbatim;
//! the core does no further interpretation.
//!
//! Nodes own their resources: a brick that subscribes to the viewport
//! stores its release function in the node, and [`RenderNode::dispose`]
//! (or dropping the node) runs it exactly once.

use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::error::BrickError;
use crate::nav::LinkOutcome;
use crate::types::StyleMap;

// =============================================================================
// Cleanup and callbacks
// =============================================================================

/// Release function owned by a node.
pub type Cleanup = Box<dyn FnOnce()>;

/// Click callback carried by interactive nodes (the Link brick).
///
/// The rendering layer prevents the host's default navigation, then
/// invokes this; the result reports which navigation path was taken.
pub type ClickCallback = Rc<dyn Fn() -> Result<LinkOutcome, BrickError>>;

// =============================================================================
// Tag
// =============================================================================

/// Markup tag of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    H1,
    H2,
    P,
    Pre,
    Span,
    A,
    Img,
    Div,
    Video,
    Iframe,
}

impl Tag {
    /// The tag name, e.g. `"h1"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::P => "p",
            Self::Pre => "pre",
            Self::Span => "span",
            Self::A => "a",
            Self::Img => "img",
            Self::Div => "div",
            Self::Video => "video",
            Self::Iframe => "iframe",
        }
    }
}

// =============================================================================
// Child
// =============================================================================

/// One child of a rendered node, passed through unchanged.
#[derive(Debug)]
pub enum Child {
    Node(RenderNode),
    Text(String),
}

impl From<RenderNode> for Child {
    fn from(node: RenderNode) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// =============================================================================
// RenderNode
// =============================================================================

/// A renderable node: `{tag, attrs, style, class_list, children}`.
pub struct RenderNode {
    /// Markup tag.
    pub tag: Tag,
    /// Plain attributes in emission order; boolean attributes carry an
    /// empty value.
    pub attrs: Vec<(String, String)>,
    /// Composed style. A signal: the fixed wrapping layout re-composes
    /// into it on breakpoint crossings.
    pub style: Signal<StyleMap>,
    /// Composed class-list string.
    pub class_list: String,
    /// Click callback, present on the Link brick only.
    pub on_click: Option<ClickCallback>,
    /// Children, passed through unchanged.
    pub children: Vec<Child>,
    cleanup: Option<Cleanup>,
}

impl RenderNode {
    /// A bare node with empty style and class list.
    pub fn new(tag: Tag) -> Self {
        Self::styled(tag, StyleMap::new(), String::new())
    }

    /// A node carrying a composed style and class list.
    pub fn styled(tag: Tag, style: StyleMap, class_list: String) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            style: signal(style),
            class_list,
            on_click: None,
            children: Vec::new(),
            cleanup: None,
        }
    }

    /// Append an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a boolean attribute (present, empty value).
    pub fn with_bool_attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.push((name.into(), String::new()));
        self
    }

    /// Attach children.
    pub fn with_children(mut self, children: Vec<Child>) -> Self {
        self.children = children;
        self
    }

    /// Attach a click callback.
    pub fn with_on_click(mut self, callback: ClickCallback) -> Self {
        self.on_click = Some(callback);
        self
    }

    /// Attach a release function, run once at disposal.
    pub fn with_cleanup(mut self, cleanup: Cleanup) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Snapshot of the current composed style.
    pub fn current_style(&self) -> StyleMap {
        self.style.get()
    }

    /// Invoke the click callback, if any.
    pub fn click(&self) -> Option<Result<LinkOutcome, BrickError>> {
        self.on_click.as_ref().map(|callback| callback())
    }

    /// Release this node's resources and its children's, exactly once.
    ///
    /// Idempotent; dropping an undisposed node has the same effect.
    pub fn dispose(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
        for child in &mut self.children {
            if let Child::Node(node) = child {
                node.dispose();
            }
        }
    }
}

impl Drop for RenderNode {
    fn drop(&mut self) {
        // Children release through their own Drop.
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl std::fmt::Debug for RenderNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderNode")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs)
            .field("style", &self.style.get())
            .field("class_list", &self.class_list)
            .field("has_on_click", &self.on_click.is_some())
            .field("children", &self.children.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
