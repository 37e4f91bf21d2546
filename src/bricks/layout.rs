//! Layout bricks: container, directional layouts, and the breakpoint-aware
//! fixed wrapping layout.

use spark_signals::effect;

use crate::breakpoint::BreakpointController;
use crate::render::{RenderNode, Tag};
use crate::style::compose;
use crate::types::{BrickId, FlexDirection, StyleMap};

use super::types::{ContainerProps, FixedWrapProps, LayoutProps};
use super::Bricks;

/// Intrinsic style shared by the layout bricks: gap in rem, background
/// color, corner radius in px. Absent props contribute nothing.
fn layout_intrinsic(gap: Option<f64>, background: Option<&str>, curve: Option<f64>) -> StyleMap {
    let mut intrinsic = StyleMap::new();
    if let Some(gap) = gap {
        intrinsic.insert("gap", format!("{gap}rem"));
    }
    intrinsic.insert_opt("background-color", background.map(str::to_string));
    if let Some(curve) = curve {
        intrinsic.insert("border-radius", format!("{curve}px"));
    }
    intrinsic
}

impl Bricks {
    fn directional_layout(&self, brick: BrickId, props: LayoutProps) -> RenderNode {
        let intrinsic =
            layout_intrinsic(props.gap, props.background.as_deref(), props.curve);

        let (style, class_list) = self.process(
            brick,
            &props.class_list,
            props.align,
            props.justify,
            &props.custom_style,
            &intrinsic,
        );

        RenderNode::styled(Tag::Div, style, class_list).with_children(props.children)
    }

    /// Responsive page container; paddings are vw-denominated and apply
    /// pairwise to top/bottom and left/right.
    pub fn container(&self, props: ContainerProps) -> RenderNode {
        let mut intrinsic =
            layout_intrinsic(props.gap, props.background.as_deref(), props.curve);
        if let Some(vertical) = props.vertical_padding {
            intrinsic.insert("padding-top", format!("{vertical}vw"));
            intrinsic.insert("padding-bottom", format!("{vertical}vw"));
        }
        if let Some(horizontal) = props.horizontal_padding {
            intrinsic.insert("padding-left", format!("{horizontal}vw"));
            intrinsic.insert("padding-right", format!("{horizontal}vw"));
        }

        let (style, class_list) = self.process(
            BrickId::Container,
            &props.class_list,
            props.align,
            props.justify,
            &props.custom_style,
            &intrinsic,
        );

        RenderNode::styled(Tag::Div, style, class_list).with_children(props.children)
    }

    /// Column layout.
    pub fn vertical_layout(&self, props: LayoutProps) -> RenderNode {
        self.directional_layout(BrickId::VerticalLayout, props)
    }

    /// Row layout.
    pub fn horizontal_layout(&self, props: LayoutProps) -> RenderNode {
        self.directional_layout(BrickId::HorizontalLayout, props)
    }

    /// Free-wrapping row layout.
    pub fn wrap_layout(&self, props: LayoutProps) -> RenderNode {
        self.directional_layout(BrickId::WrapLayout, props)
    }

    /// Fixed wrapping layout - the one breakpoint-aware brick.
    ///
    /// At or below the `wrap` threshold the layout stacks into a column,
    /// above it a row. The direction is an input to composition: a
    /// breakpoint crossing re-runs the composer with the new direction
    /// and writes the result to the node's style signal. The node's
    /// cleanup releases the viewport subscription; a disposed node never
    /// sees another viewport change.
    pub fn fixed_wrap_layout(&self, props: FixedWrapProps) -> RenderNode {
        let controller = BreakpointController::new(props.wrap);

        let base_intrinsic =
            layout_intrinsic(props.gap, props.background.as_deref(), props.curve);
        let mut intrinsic = base_intrinsic.clone();
        intrinsic.insert("flex-direction", controller.direction().as_str());

        let (style, class_list) = self.process(
            BrickId::FixedWrapLayout,
            &props.class_list,
            props.align,
            props.justify,
            &props.custom_style,
            &intrinsic,
        );

        let node = RenderNode::styled(Tag::Div, style, class_list).with_children(props.children);

        // Recomposition effect: direction feeds back into compose; the
        // composed map stays the single source of truth for the style.
        let config = self.effective_config();
        let custom = props.custom_style;
        let below = controller.below_signal();
        let style_out = node.style.clone();
        let stop = effect(move || {
            let direction = if below.get() {
                FlexDirection::Column
            } else {
                FlexDirection::Row
            };
            let mut intrinsic = base_intrinsic.clone();
            intrinsic.insert("flex-direction", direction.as_str());

            let empty = StyleMap::new();
            let theme = config
                .brick_theme(BrickId::FixedWrapLayout)
                .unwrap_or(&empty);
            style_out.set(compose(&config.global_style, theme, &custom, &intrinsic));
        });

        node.with_cleanup(Box::new(move || {
            stop();
            drop(controller);
        }))
    }
}

// =============================================================================
// Tests
// =============================================================================
