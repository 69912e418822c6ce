//! Drag tracking and the snap decision made when a gesture ends.

use crate::anchor::HorizontalEdge;
use crate::input::InputSource;
use crate::options::FloatOptions;
use crate::transform::Transform;
use egui::{Pos2, Vec2};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        /// Contact position when the gesture began.
        start: Pos2,
        /// Committed translation when the gesture began.
        move_base: Vec2,
        source: InputSource,
    },
}

/// Widths the snap decision is measured against, read when the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub container_width: f32,
    pub panel_width: f32,
}

impl Geometry {
    pub fn new(container_width: f32, panel_width: f32) -> Self {
        Self {
            container_width,
            panel_width,
        }
    }

    /// Horizontal room the panel can travel; never negative.
    pub fn client_width(&self) -> f32 {
        (self.container_width - self.panel_width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snap {
    /// Back against the anchored edge.
    Home,
    /// Across to the opposite edge.
    FarEdge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEnd {
    pub transform: Transform,
    pub clicked: bool,
    pub snap: Snap,
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    state: GestureState,
    translation: Vec2,
    committed: Vec2,
    edge: HorizontalEdge,
    click_threshold: f32,
    settle_duration: f32,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(&FloatOptions::default())
    }
}

impl GestureTracker {
    pub fn new(options: &FloatOptions) -> Self {
        Self {
            state: GestureState::Idle,
            translation: Vec2::ZERO,
            committed: Vec2::ZERO,
            edge: options.anchor.horizontal,
            click_threshold: options.click_threshold,
            settle_duration: options.settle_duration,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// The source that owns the running gesture, if any.
    pub fn active_source(&self) -> Option<InputSource> {
        match self.state {
            GestureState::Dragging { source, .. } => Some(source),
            GestureState::Idle => None,
        }
    }

    /// Translation currently applied to the panel.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Translation persisted by the last finished gesture.
    pub fn committed(&self) -> Vec2 {
        self.committed
    }

    pub fn on_gesture_start(&mut self, point: Pos2, source: InputSource) {
        if self.is_dragging() {
            trace!(?source, "gesture already active, ignoring start");
            return;
        }
        debug!(?point, ?source, base = ?self.committed, "gesture start");
        self.state = GestureState::Dragging {
            start: point,
            move_base: self.committed,
            source,
        };
    }

    pub fn on_gesture_move(&mut self, point: Pos2, source: InputSource) -> Option<Transform> {
        let (start, move_base) = self.session(source)?;
        self.translation = move_base + (point - start);
        trace!(translation = ?self.translation, "gesture move");
        Some(Transform::immediate(self.translation))
    }

    pub fn on_gesture_end(
        &mut self,
        point: Pos2,
        source: InputSource,
        geometry: Geometry,
    ) -> Option<GestureEnd> {
        let (start, move_base) = self.session(source)?;

        let delta = point - start;
        let translate_site_x = move_base.x + delta.x;
        let translate_y = move_base.y + delta.y;

        let client_width = geometry.client_width();
        let half_width = client_width / 2.0;
        // no room to travel means there is no far edge to dock against
        let (translate_x, snap) = if client_width > 0.0 && translate_site_x.abs() >= half_width {
            (self.edge.far_edge(client_width), Snap::FarEdge)
        } else {
            (0.0, Snap::Home)
        };

        let clicked =
            delta.x.abs() <= self.click_threshold && delta.y.abs() <= self.click_threshold;

        let translation = Vec2::new(translate_x, translate_y);
        debug!(?delta, ?translation, ?snap, clicked, "gesture end");
        self.commit(translation);

        Some(GestureEnd {
            transform: Transform::eased(translation, self.settle_duration),
            clicked,
            snap,
        })
    }

    /// Abandons the running gesture without snapping or clicking; the panel
    /// returns to where the gesture found it. `None` cancels any source.
    pub fn on_gesture_cancel(&mut self, source: Option<InputSource>) -> Option<Transform> {
        let owner = self.active_source()?;
        if source.is_some_and(|source| source != owner) {
            return None;
        }
        let baseline = self.committed;
        debug!(?owner, ?baseline, "gesture cancelled");
        self.commit(baseline);
        Some(Transform::eased(baseline, self.settle_duration))
    }

    fn session(&self, source: InputSource) -> Option<(Pos2, Vec2)> {
        match self.state {
            GestureState::Dragging {
                start,
                move_base,
                source: owner,
            } if owner == source => Some((start, move_base)),
            _ => None,
        }
    }

    fn commit(&mut self, translation: Vec2) {
        self.translation = translation;
        self.committed = translation;
        self.state = GestureState::Idle;
    }
}
