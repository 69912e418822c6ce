use egui::Align2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalEdge {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalEdge {
    Left,
    #[default]
    Right,
}

impl HorizontalEdge {
    /// Translation that carries the panel from its home edge to the opposite one.
    ///
    /// Moving away from the left edge is a positive offset, away from the right
    /// edge a negative one.
    pub fn far_edge(self, client_width: f32) -> f32 {
        match self {
            HorizontalEdge::Left => client_width,
            HorizontalEdge::Right => -client_width,
        }
    }
}

/// The screen corner a floating panel lives in.
///
/// The horizontal half decides which way the panel snaps, the vertical half
/// only decides where it is placed before the first drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    #[serde(default)]
    pub vertical: VerticalEdge,
    #[serde(default)]
    pub horizontal: HorizontalEdge,
}

impl Anchor {
    pub const TOP_LEFT: Anchor = Anchor::new(VerticalEdge::Top, HorizontalEdge::Left);
    pub const TOP_RIGHT: Anchor = Anchor::new(VerticalEdge::Top, HorizontalEdge::Right);
    pub const BOTTOM_LEFT: Anchor = Anchor::new(VerticalEdge::Bottom, HorizontalEdge::Left);
    pub const BOTTOM_RIGHT: Anchor = Anchor::new(VerticalEdge::Bottom, HorizontalEdge::Right);

    pub const ALL: [Anchor; 4] = [
        Anchor::TOP_LEFT,
        Anchor::TOP_RIGHT,
        Anchor::BOTTOM_LEFT,
        Anchor::BOTTOM_RIGHT,
    ];

    pub const fn new(vertical: VerticalEdge, horizontal: HorizontalEdge) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Builds an anchor from a pair of corner flags; an unset flag selects the
    /// opposite edge.
    pub fn from_flags(top: bool, left: bool) -> Self {
        let vertical = if top {
            VerticalEdge::Top
        } else {
            VerticalEdge::Bottom
        };
        let horizontal = if left {
            HorizontalEdge::Left
        } else {
            HorizontalEdge::Right
        };
        Self::new(vertical, horizontal)
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        self.horizontal == HorizontalEdge::Left
    }

    #[inline]
    pub fn is_top(&self) -> bool {
        self.vertical == VerticalEdge::Top
    }

    pub fn class_name(&self) -> &'static str {
        match (self.vertical, self.horizontal) {
            (VerticalEdge::Top, HorizontalEdge::Left) => "position-top-left",
            (VerticalEdge::Top, HorizontalEdge::Right) => "position-top-right",
            (VerticalEdge::Bottom, HorizontalEdge::Left) => "position-bottom-left",
            (VerticalEdge::Bottom, HorizontalEdge::Right) => "position-bottom-right",
        }
    }

    pub fn align(&self) -> Align2 {
        match (self.vertical, self.horizontal) {
            (VerticalEdge::Top, HorizontalEdge::Left) => Align2::LEFT_TOP,
            (VerticalEdge::Top, HorizontalEdge::Right) => Align2::RIGHT_TOP,
            (VerticalEdge::Bottom, HorizontalEdge::Left) => Align2::LEFT_BOTTOM,
            (VerticalEdge::Bottom, HorizontalEdge::Right) => Align2::RIGHT_BOTTOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bottom_right() {
        let anchor = Anchor::default();
        assert_eq!(anchor, Anchor::BOTTOM_RIGHT);
        assert_eq!(anchor.class_name(), "position-bottom-right");
        assert_eq!(anchor.align(), Align2::RIGHT_BOTTOM);
    }

    #[test]
    fn from_flags_picks_opposite_edge_when_unset() {
        assert_eq!(Anchor::from_flags(true, true), Anchor::TOP_LEFT);
        assert_eq!(Anchor::from_flags(true, false), Anchor::TOP_RIGHT);
        assert_eq!(Anchor::from_flags(false, true), Anchor::BOTTOM_LEFT);
        assert_eq!(Anchor::from_flags(false, false), Anchor::BOTTOM_RIGHT);
    }

    #[test]
    fn far_edge_direction_follows_home_edge() {
        assert_eq!(HorizontalEdge::Left.far_edge(300.0), 300.0);
        assert_eq!(HorizontalEdge::Right.far_edge(300.0), -300.0);
    }

    #[test]
    fn deserializes_lowercase_with_defaults() {
        let anchor: Anchor = serde_json::from_str(r#"{"horizontal": "left"}"#).unwrap();
        assert_eq!(anchor, Anchor::BOTTOM_LEFT);

        let anchor: Anchor =
            serde_json::from_str(r#"{"vertical": "top", "horizontal": "right"}"#).unwrap();
        assert!(anchor.is_top());
        assert!(!anchor.is_left());
    }
}
