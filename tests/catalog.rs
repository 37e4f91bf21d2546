//! Catalog integration test: a themed page composed from bricks,
//! exercised end to end - configuration from JSON, nested composition,
//! a breakpoint crossing, and disposal.

use brickwork::bricks::{
    Bricks, ContainerProps, FixedWrapProps, LayoutProps, LinkProps, TextProps, VideoAttrs,
    VideoProps,
};
use brickwork::config::PartialConfig;
use brickwork::render::{Child, RenderNode, Tag};
use brickwork::types::StyleValue;
use brickwork::viewport::{reset_viewport_state, set_viewport_width};

fn demo_catalog() -> Bricks {
    let partial: PartialConfig = serde_json::from_str(
        r##"{
            "globalStyle": { "font-family": "Inter" },
            "theme": { "text": { "color": "#ff0000" } }
        }"##,
    )
    .unwrap();
    Bricks::new(&partial).unwrap()
}

/// The demo page: a container holding a fixed wrapping layout with a
/// text column and a video side by side.
fn demo_page(bricks: &Bricks) -> RenderNode {
    let copy = bricks.text(TextProps {
        children: vec![
            bricks.link(LinkProps::new("/")).into(),
            " ipsum dolor sit amet, consectetur adipiscing elit.".into(),
        ],
        ..Default::default()
    });

    let column = bricks.vertical_layout(LayoutProps {
        gap: Some(1.0),
        children: vec![
            bricks
                .sub_heading(TextProps {
                    children: vec!["WEBSITE HOSTING".into()],
                    ..Default::default()
                })
                .into(),
            bricks
                .heading(TextProps {
                    children: vec!["A home for your website.".into()],
                    ..Default::default()
                })
                .into(),
            copy.into(),
        ],
        ..Default::default()
    });

    let wrap = bricks.fixed_wrap_layout(FixedWrapProps {
        gap: Some(4.0),
        children: vec![
            column.into(),
            bricks
                .video(VideoProps {
                    attrs: VideoAttrs::CONTROLS,
                    ..VideoProps::new("/mov.mp4")
                })
                .into(),
        ],
        ..FixedWrapProps::new(1300)
    });

    bricks.container(ContainerProps {
        gap: Some(1.0),
        horizontal_padding: Some(10.0),
        children: vec![wrap.into()],
        ..Default::default()
    })
}

fn child_node(node: &RenderNode, index: usize) -> &RenderNode {
    match &node.children[index] {
        Child::Node(child) => child,
        Child::Text(_) => panic!("expected node child at {index}"),
    }
}

#[test]
fn test_demo_page_composes_through_all_layers() {
    reset_viewport_state();
    set_viewport_width(1200);

    let bricks = demo_catalog();
    let page = demo_page(&bricks);

    // Container: global base plus intrinsic paddings.
    assert_eq!(page.tag, Tag::Div);
    let container_style = page.current_style();
    assert_eq!(
        container_style.get("font-family"),
        Some(&StyleValue::from("Inter"))
    );
    assert_eq!(
        container_style.get("padding-left"),
        Some(&StyleValue::from("10vw"))
    );
    assert_eq!(
        page.class_list,
        "container categoryLayout alignStretch justifyStart"
    );

    // The wrap layout starts below the threshold: column, gap intact.
    let wrap = child_node(&page, 0);
    let wrap_style = wrap.current_style();
    assert_eq!(
        wrap_style.get("flex-direction"),
        Some(&StyleValue::from("column"))
    );
    assert_eq!(wrap_style.get("gap"), Some(&StyleValue::from("4rem")));

    // The text brick picks up its theme color over the global base.
    let column = child_node(wrap, 0);
    let copy = child_node(column, 2);
    assert_eq!(copy.tag, Tag::P);
    assert_eq!(
        copy.current_style().get("color"),
        Some(&StyleValue::from("#ff0000"))
    );
    assert_eq!(
        copy.current_style().get("font-family"),
        Some(&StyleValue::from("Inter"))
    );

    // The link child passes through unchanged, with its default color.
    let link = child_node(copy, 0);
    assert_eq!(link.tag, Tag::A);
    assert_eq!(
        link.current_style().get("color"),
        Some(&StyleValue::from("#0000ff"))
    );
    assert!(link.on_click.is_some());

    // The video sits beside the column with its playback attribute.
    let video = child_node(wrap, 1);
    assert_eq!(video.tag, Tag::Video);
    assert!(video
        .attrs
        .iter()
        .any(|(name, _)| name == "controls"));

    reset_viewport_state();
}

#[test]
fn test_breakpoint_crossing_flips_wrap_direction_once() {
    reset_viewport_state();
    set_viewport_width(1200);

    let bricks = demo_catalog();
    let page = demo_page(&bricks);
    let wrap = child_node(&page, 0);

    set_viewport_width(1400);
    let style = wrap.current_style();
    assert_eq!(
        style.get("flex-direction"),
        Some(&StyleValue::from("row"))
    );
    // Re-composition preserved the rest of the style.
    assert_eq!(style.get("gap"), Some(&StyleValue::from("4rem")));
    assert_eq!(
        style.get("font-family"),
        Some(&StyleValue::from("Inter"))
    );

    // Back below: column again.
    set_viewport_width(900);
    assert_eq!(
        wrap.current_style().get("flex-direction"),
        Some(&StyleValue::from("column"))
    );

    reset_viewport_state();
}

#[test]
fn test_disposed_page_ignores_viewport_changes() {
    reset_viewport_state();
    set_viewport_width(1200);

    let bricks = demo_catalog();
    let mut page = demo_page(&bricks);
    page.dispose();

    set_viewport_width(1400);
    let wrap = child_node(&page, 0);
    assert_eq!(
        wrap.current_style().get("flex-direction"),
        Some(&StyleValue::from("column"))
    );

    // Disposal is idempotent.
    page.dispose();

    reset_viewport_state();
}

#[test]
fn test_instance_custom_style_yields_to_theme_but_beats_global() {
    reset_viewport_state();

    let bricks = demo_catalog();
    let node = bricks.text(TextProps {
        custom_style: brickwork::types::StyleMap::new()
            .with("color", "#00ff00")
            .with("font-family", "monospace"),
        ..Default::default()
    });

    let style = node.current_style();
    // Theme wins over the instance override for the same property...
    assert_eq!(style.get("color"), Some(&StyleValue::from("#ff0000")));
    // ...while properties untouched by the theme take the instance value.
    assert_eq!(
        style.get("font-family"),
        Some(&StyleValue::from("monospace"))
    );
}
