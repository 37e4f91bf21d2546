//! Media bricks: images and video.

use crate::render::{RenderNode, Tag};
use crate::types::{BrickId, StyleMap};

use super::types::{
    ImageAdaptiveProps, ImageContainerProps, ImageProps, VideoAttrs, VideoEmbedProps, VideoProps,
    DEFAULT_EMBED_ALLOW,
};
use super::{rem_to_px, Bricks};

impl Bricks {
    /// Fixed-size image. The rem-denominated dimension props resolve to
    /// pixel values in the intrinsic style.
    pub fn image(&self, props: ImageProps) -> RenderNode {
        let intrinsic = StyleMap::new()
            .with("width", format!("{}px", rem_to_px(props.width)))
            .with("height", format!("{}px", rem_to_px(props.height)));

        let (style, class_list) = self.process(
            BrickId::Image,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &intrinsic,
        );

        let mut node = RenderNode::styled(Tag::Img, style, class_list).with_attr("src", props.src);
        if let Some(alt) = props.alt {
            node = node.with_attr("alt", alt);
        }
        node
    }

    /// Adaptive image: the class list goes on the wrapping div, the
    /// composed style on the inner img.
    pub fn image_adaptive(&self, props: ImageAdaptiveProps) -> RenderNode {
        let (style, class_list) = self.process(
            BrickId::ImageAdaptive,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &StyleMap::new(),
        );

        let mut inner = RenderNode::styled(Tag::Img, style, String::new())
            .with_attr("src", props.src);
        if let Some(alt) = props.alt {
            inner = inner.with_attr("alt", alt);
        }

        RenderNode::styled(Tag::Div, StyleMap::new(), class_list)
            .with_children(vec![inner.into()])
    }

    /// Container with the image as its background.
    pub fn image_container(&self, props: ImageContainerProps) -> RenderNode {
        let intrinsic =
            StyleMap::new().with("background-image", format!("url(\"{}\")", props.src));

        let (style, class_list) = self.process(
            BrickId::ImageContainer,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &intrinsic,
        );

        RenderNode::styled(Tag::Div, style, class_list)
    }

    /// Video element with its playback attributes.
    pub fn video(&self, props: VideoProps) -> RenderNode {
        let (style, class_list) = self.process(
            BrickId::Video,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &StyleMap::new(),
        );

        let mut node =
            RenderNode::styled(Tag::Video, style, class_list).with_attr("src", props.src);
        if props.attrs.contains(VideoAttrs::CONTROLS) {
            node = node.with_bool_attr("controls");
        }
        if props.attrs.contains(VideoAttrs::AUTOPLAY) {
            node = node.with_bool_attr("autoplay");
        }
        if props.attrs.contains(VideoAttrs::MUTED) {
            node = node.with_bool_attr("muted");
        }
        if props.attrs.contains(VideoAttrs::LOOP) {
            node = node.with_bool_attr("loop");
        }
        node
    }

    /// Embedded video player iframe.
    pub fn video_embed(&self, props: VideoEmbedProps) -> RenderNode {
        let (style, class_list) = self.process(
            BrickId::VideoEmbed,
            &props.class_list,
            None,
            None,
            &props.custom_style,
            &StyleMap::new(),
        );

        RenderNode::styled(Tag::Iframe, style, class_list)
            .with_attr("src", props.embed)
            .with_attr("title", "Video player")
            .with_attr(
                "allow",
                props
                    .allow
                    .unwrap_or_else(|| DEFAULT_EMBED_ALLOW.to_string()),
            )
            .with_bool_attr("allowfullscreen")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartialConfig;
    use crate::render::Child;
    use crate::types::StyleValue;

    fn catalog() -> Bricks {
        Bricks::new(&PartialConfig::default()).unwrap()
    }

    fn attr<'a>(node: &'a RenderNode, name: &str) -> Option<&'a str> {
        node.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_image_dimensions_resolve_to_px() {
        let node = catalog().image(ImageProps::new("/a.png", 4.0, 3.0));
        let style = node.current_style();
        assert_eq!(style.get("width"), Some(&StyleValue::from("64px")));
        assert_eq!(style.get("height"), Some(&StyleValue::from("48px")));
        assert_eq!(attr(&node, "src"), Some("/a.png"));
    }

    #[test]
    fn test_image_alt_attr_only_when_present() {
        let node = catalog().image(ImageProps::new("/a.png", 1.0, 1.0));
        assert_eq!(attr(&node, "alt"), None);

        let node = catalog().image(ImageProps {
            alt: Some("logo".to_string()),
            ..ImageProps::new("/a.png", 1.0, 1.0)
        });
        assert_eq!(attr(&node, "alt"), Some("logo"));
    }

    #[test]
    fn test_image_adaptive_splits_class_and_style() {
        let node = catalog().image_adaptive(ImageAdaptiveProps {
            custom_style: StyleMap::new().with("object-fit", "cover"),
            ..ImageAdaptiveProps::new("/a.png")
        });

        assert_eq!(node.tag, Tag::Div);
        assert_eq!(
            node.class_list,
            "imageAdaptive categoryImage alignStretch justifyStart"
        );
        assert!(node.current_style().is_empty());

        let Child::Node(inner) = &node.children[0] else {
            panic!("expected inner img");
        };
        assert_eq!(inner.tag, Tag::Img);
        assert!(inner.class_list.is_empty());
        assert_eq!(
            inner.current_style().get("object-fit"),
            Some(&StyleValue::from("cover"))
        );
    }

    #[test]
    fn test_image_container_background() {
        let node = catalog().image_container(ImageContainerProps::new("/bg.jpg"));
        assert_eq!(
            node.current_style().get("background-image"),
            Some(&StyleValue::from("url(\"/bg.jpg\")"))
        );
    }

    #[test]
    fn test_video_playback_attrs() {
        let node = catalog().video(VideoProps {
            attrs: VideoAttrs::CONTROLS | VideoAttrs::MUTED,
            ..VideoProps::new("/movie.mp4")
        });

        assert_eq!(attr(&node, "src"), Some("/movie.mp4"));
        assert_eq!(attr(&node, "controls"), Some(""));
        assert_eq!(attr(&node, "muted"), Some(""));
        assert_eq!(attr(&node, "autoplay"), None);
        assert_eq!(attr(&node, "loop"), None);
    }

    #[test]
    fn test_video_embed_defaults() {
        let node = catalog().video_embed(VideoEmbedProps::new("https://tube/embed/42"));

        assert_eq!(node.tag, Tag::Iframe);
        assert_eq!(attr(&node, "src"), Some("https://tube/embed/42"));
        assert_eq!(attr(&node, "title"), Some("Video player"));
        assert_eq!(attr(&node, "allow"), Some(DEFAULT_EMBED_ALLOW));
        assert_eq!(attr(&node, "allowfullscreen"), Some(""));
    }

    #[test]
    fn test_video_embed_custom_allow() {
        let node = catalog().video_embed(VideoEmbedProps {
            allow: Some("autoplay".to_string()),
            ..VideoEmbedProps::new("https://tube/embed/42")
        });
        assert_eq!(attr(&node, "allow"), Some("autoplay"));
    }
}
