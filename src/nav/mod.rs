//! Navigation interface for the Link brick.
//!
//! The router is an external collaborator; this module specifies it at
//! its seam. [`follow_link`] implements the Link click policy: parse the
//! target, abort on parse failure, then update in place when the target
//! resource matches the current one and redirect otherwise.

use crate::error::BrickError;

// =============================================================================
// Navigator
// =============================================================================

/// Result of parsing a link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// The resource the target resolves to.
    pub resource: String,
    /// Whether parsing failed (the resource is then meaningless).
    pub parse_failed: bool,
}

/// The navigation module the Link brick talks to.
pub trait Navigator {
    /// Parse a link target into its resource.
    fn parse_url(&self, href: &str) -> ParsedUrl;

    /// The resource of the current location, if any.
    fn current_resource(&self) -> Option<String>;

    /// Update the current location in place (same resource).
    fn update(&self, href: &str);

    /// Redirect to a different resource.
    fn redirect(&self, href: &str);
}

/// Navigator for headless catalogs: parses every target verbatim and
/// treats navigation calls as no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn parse_url(&self, href: &str) -> ParsedUrl {
        ParsedUrl {
            resource: href.to_string(),
            parse_failed: false,
        }
    }

    fn current_resource(&self) -> Option<String> {
        None
    }

    fn update(&self, _href: &str) {}

    fn redirect(&self, _href: &str) {}
}

// =============================================================================
// follow_link
// =============================================================================

/// Which navigation path a link click took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The target resource equals the current one; updated in place.
    Updated,
    /// The target is a different resource; redirected.
    Redirected,
}

/// Follow a link target through the navigator.
///
/// A parse failure raises [`BrickError::InvalidLinkTarget`] before any
/// navigation call - no partial history mutation, no fallback redirect.
/// Otherwise exactly one of update/redirect is invoked, exactly once.
pub fn follow_link(nav: &dyn Navigator, href: &str) -> Result<LinkOutcome, BrickError> {
    let parsed = nav.parse_url(href);
    if parsed.parse_failed {
        return Err(BrickError::InvalidLinkTarget {
            href: href.to_string(),
        });
    }

    if nav.current_resource().as_deref() == Some(parsed.resource.as_str()) {
        nav.update(href);
        Ok(LinkOutcome::Updated)
    } else {
        nav.redirect(href);
        Ok(LinkOutcome::Redirected)
    }
}

// =============================================================================
// Tests
// =============================================================================
