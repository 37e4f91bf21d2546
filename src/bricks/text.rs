//! Text bricks: heading, sub-heading, text, bold, link.

use std::rc::Rc;

use crate::nav::follow_link;
use crate::render::{ClickCallback, RenderNode, Tag};
use crate::types::{BrickId, StyleMap};

use super::types::{BoldProps, LinkProps, TextProps};
use super::Bricks;

/// Intrinsic style of the plain text bricks: the color prop, when present.
fn text_intrinsic(color: Option<&str>) -> StyleMap {
    let mut intrinsic = StyleMap::new();
    intrinsic.insert_opt("color", color.map(str::to_string));
    intrinsic
}

impl Bricks {
    /// Top-level heading: `h1 > pre`, styled on the inner element.
    pub fn heading(&self, props: TextProps) -> RenderNode {
        let (style, class_list) = self.process(
            BrickId::Heading,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &text_intrinsic(props.color.as_deref()),
        );

        let inner = RenderNode::styled(Tag::Pre, style, class_list).with_children(props.children);
        RenderNode::new(Tag::H1).with_children(vec![inner.into()])
    }

    /// Secondary heading: `h2 > pre`, styled on the inner element.
    pub fn sub_heading(&self, props: TextProps) -> RenderNode {
        let (style, class_list) = self.process(
            BrickId::SubHeading,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &text_intrinsic(props.color.as_deref()),
        );

        let inner = RenderNode::styled(Tag::Pre, style, class_list).with_children(props.children);
        RenderNode::new(Tag::H2).with_children(vec![inner.into()])
    }

    /// Paragraph text.
    pub fn text(&self, props: TextProps) -> RenderNode {
        let (style, class_list) = self.process(
            BrickId::Text,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &text_intrinsic(props.color.as_deref()),
        );

        RenderNode::styled(Tag::P, style, class_list).with_children(props.children)
    }

    /// Bold inline span. The weight prop feeds the intrinsic style as a
    /// number; absent it falls back to `"bolder"`.
    pub fn bold(&self, props: BoldProps) -> RenderNode {
        let mut intrinsic = StyleMap::new();
        intrinsic.insert_opt("color", props.color);
        match props.weight {
            Some(weight) => intrinsic.insert("font-weight", weight),
            None => intrinsic.insert("font-weight", "bolder"),
        }

        let (style, class_list) = self.process(
            BrickId::Bold,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &intrinsic,
        );

        RenderNode::styled(Tag::Span, style, class_list).with_children(props.children)
    }

    /// Inline link. The click callback routes through the navigator:
    /// in-place update when the target resource matches the current one,
    /// redirect otherwise, and an error on an unparseable target.
    pub fn link(&self, props: LinkProps) -> RenderNode {
        let color = props.color.unwrap_or_else(|| "#0000ff".to_string());
        let intrinsic = StyleMap::new().with("color", color);

        let (style, class_list) = self.process(
            BrickId::Link,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &intrinsic,
        );

        let nav = self.navigator();
        let href = props.href.clone();
        let on_click: ClickCallback = Rc::new(move || follow_link(nav.as_ref(), &href));

        RenderNode::styled(Tag::A, style, class_list)
            .with_attr("href", props.href)
            .with_on_click(on_click)
            .with_children(props.children)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartialConfig;
    use crate::error::BrickError;
    use crate::nav::{LinkOutcome, Navigator, ParsedUrl};
    use crate::render::Child;
    use crate::types::StyleValue;
    use std::cell::Cell;

    fn catalog() -> Bricks {
        Bricks::new(&PartialConfig::default()).unwrap()
    }

    #[test]
    fn test_heading_wraps_pre_in_h1() {
        let node = catalog().heading(TextProps {
            color: Some("navy".to_string()),
            children: vec!["Title".into()],
            ..Default::default()
        });

        assert_eq!(node.tag, Tag::H1);
        assert!(node.class_list.is_empty());
        let Child::Node(inner) = &node.children[0] else {
            panic!("expected inner node");
        };
        assert_eq!(inner.tag, Tag::Pre);
        assert_eq!(
            inner.class_list,
            "heading categoryText alignStretch justifyStart"
        );
        assert_eq!(
            inner.current_style().get("color"),
            Some(&StyleValue::from("navy"))
        );
    }

    #[test]
    fn test_text_omitted_color_leaves_theme_value() {
        let mut theme = std::collections::BTreeMap::new();
        theme.insert(
            "text".to_string(),
            crate::types::StyleMap::new().with("color", "#ff0000"),
        );
        let bricks = Bricks::new(&PartialConfig {
            theme: Some(theme),
            ..Default::default()
        })
        .unwrap();

        let node = bricks.text(TextProps::default());
        assert_eq!(
            node.current_style().get("color"),
            Some(&StyleValue::from("#ff0000"))
        );
    }

    #[test]
    fn test_bold_weight_defaults_to_bolder() {
        let node = catalog().bold(BoldProps::default());
        assert_eq!(
            node.current_style().get("font-weight"),
            Some(&StyleValue::from("bolder"))
        );

        let node = catalog().bold(BoldProps {
            weight: Some(700),
            ..Default::default()
        });
        assert_eq!(
            node.current_style().get("font-weight"),
            Some(&StyleValue::from(700))
        );
    }

    #[test]
    fn test_link_default_color_and_href() {
        let node = catalog().link(LinkProps::new("/docs"));
        assert_eq!(node.tag, Tag::A);
        assert_eq!(
            node.current_style().get("color"),
            Some(&StyleValue::from("#0000ff"))
        );
        assert_eq!(node.attrs[0], ("href".to_string(), "/docs".to_string()));
        assert!(node.on_click.is_some());
    }

    /// Navigator fixed at one resource, counting calls.
    struct FixedNavigator {
        updates: Cell<u32>,
        redirects: Cell<u32>,
    }

    impl Navigator for FixedNavigator {
        fn parse_url(&self, href: &str) -> ParsedUrl {
            ParsedUrl {
                resource: href.to_string(),
                parse_failed: href.is_empty(),
            }
        }

        fn current_resource(&self) -> Option<String> {
            Some("/docs".to_string())
        }

        fn update(&self, _href: &str) {
            self.updates.set(self.updates.get() + 1);
        }

        fn redirect(&self, _href: &str) {
            self.redirects.set(self.redirects.get() + 1);
        }
    }

    #[test]
    fn test_link_click_routes_through_navigator() {
        let nav = Rc::new(FixedNavigator {
            updates: Cell::new(0),
            redirects: Cell::new(0),
        });
        let bricks = catalog().with_navigator(nav.clone());

        let same = bricks.link(LinkProps::new("/docs"));
        assert_eq!(same.click().unwrap().unwrap(), LinkOutcome::Updated);
        assert_eq!(nav.updates.get(), 1);
        assert_eq!(nav.redirects.get(), 0);

        let other = bricks.link(LinkProps::new("/pricing"));
        assert_eq!(other.click().unwrap().unwrap(), LinkOutcome::Redirected);
        assert_eq!(nav.updates.get(), 1);
        assert_eq!(nav.redirects.get(), 1);

        let broken = bricks.link(LinkProps::new(""));
        let err = broken.click().unwrap().unwrap_err();
        assert!(matches!(err, BrickError::InvalidLinkTarget { .. }));
        assert_eq!(nav.updates.get(), 1);
        assert_eq!(nav.redirects.get(), 1);
    }
}
