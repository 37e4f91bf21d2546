//! Class-list assembly.
//!
//! [`build_class_list`] produces the final class attribute for a brick:
//! instance-supplied extra tokens first, then the brick-identity token, the
//! category token, the alignment token, and the justification token, joined
//! with single spaces. No deduplication is performed.
//!
//! Brick and category tokens come from an injected [`ClassResolver`] - the
//! already-resolved lookup table produced by a CSS-module-style name hasher.
//! Alignment and justification resolve through exhaustive `match` over
//! [`Position`], so a missing case is a compile error rather than a silent
//! empty token.

use std::collections::HashMap;

use crate::types::{BrickId, Category, Position, DEFAULT_ALIGN, DEFAULT_JUSTIFY};

// =============================================================================
// ClassKey
// =============================================================================

/// An identifier the class-name module can map to a stable token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKey {
    Brick(BrickId),
    Category(Category),
    Align(Position),
    Justify(Position),
}

impl ClassKey {
    /// The canonical, un-hashed token for this key.
    pub fn canonical(self) -> String {
        match self {
            Self::Brick(brick) => brick.as_str().to_string(),
            Self::Category(category) => category.as_str().to_string(),
            Self::Align(position) => align_token(position).to_string(),
            Self::Justify(position) => justify_token(position).to_string(),
        }
    }
}

/// Alignment-variant token for a position.
const fn align_token(position: Position) -> &'static str {
    match position {
        Position::Start => "alignStart",
        Position::Center => "alignCenter",
        Position::End => "alignEnd",
        Position::Stretch => "alignStretch",
    }
}

/// Justification-variant token for a position.
const fn justify_token(position: Position) -> &'static str {
    match position {
        Position::Start => "justifyStart",
        Position::Center => "justifyCenter",
        Position::End => "justifyEnd",
        Position::Stretch => "justifyStretch",
    }
}

// =============================================================================
// ClassResolver
// =============================================================================

/// Injected lookup table from [`ClassKey`] to a stable class token.
///
/// [`ClassResolver::passthrough`] maps every key to its canonical name,
/// for headless use and tests. A bundler integration overrides entries
/// with its hashed tokens via [`ClassResolver::with_token`].
#[derive(Debug, Clone, Default)]
pub struct ClassResolver {
    tokens: HashMap<ClassKey, String>,
}

impl ClassResolver {
    /// An empty resolver; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver mapping every key to its canonical un-hashed name.
    pub fn passthrough() -> Self {
        let mut tokens = HashMap::new();
        for brick in BrickId::all() {
            tokens.insert(ClassKey::Brick(*brick), ClassKey::Brick(*brick).canonical());
        }
        for category in Category::all() {
            tokens.insert(
                ClassKey::Category(*category),
                ClassKey::Category(*category).canonical(),
            );
        }
        for position in Position::all() {
            tokens.insert(
                ClassKey::Align(*position),
                ClassKey::Align(*position).canonical(),
            );
            tokens.insert(
                ClassKey::Justify(*position),
                ClassKey::Justify(*position).canonical(),
            );
        }
        Self { tokens }
    }

    /// Override one key's token (builder-style).
    pub fn with_token(mut self, key: ClassKey, token: impl Into<String>) -> Self {
        self.tokens.insert(key, token.into());
        self
    }

    /// Resolve a key to its token, if present.
    pub fn resolve(&self, key: ClassKey) -> Option<&str> {
        self.tokens.get(&key).map(String::as_str)
    }
}

// =============================================================================
// build_class_list
// =============================================================================

/// Assemble the class-list string for one brick instance.
///
/// Token order is fixed: `extra` in given order, brick identity, category,
/// alignment, justification. `align`/`justify` default to stretch/start.
/// An identifier the resolver cannot map degrades to an empty token for
/// that position (omitted from the join) - the render never fails on a
/// missing class token.
pub fn build_class_list(
    resolver: &ClassResolver,
    extra: &[String],
    brick: BrickId,
    category: Category,
    align: Option<Position>,
    justify: Option<Position>,
) -> String {
    let mut tokens: Vec<&str> = Vec::with_capacity(extra.len() + 4);

    for token in extra {
        tokens.push(token.as_str());
    }

    for key in [
        ClassKey::Brick(brick),
        ClassKey::Category(category),
        ClassKey::Align(align.unwrap_or(DEFAULT_ALIGN)),
        ClassKey::Justify(justify.unwrap_or(DEFAULT_JUSTIFY)),
    ] {
        match resolver.resolve(key) {
            Some(token) => tokens.push(token),
            None => {
                tracing::warn!(?key, "no class token for identifier, omitting");
            }
        }
    }

    tokens.retain(|token| !token.is_empty());
    tokens.join(" ")
}

// =============================================================================
// Tests
// =============================================================================
