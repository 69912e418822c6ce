use crate::anchor::Anchor;
use crate::gesture::{Geometry, GestureTracker, Snap};
use crate::input::{is_in_panel, GestureInput};
use crate::options::FloatOptions;
use crate::transform::Transition;
use egui::{Area, Context, Id, LayerId, Order, Rect, Response, Ui, Vec2};
use std::hash::Hash;

/// Per-instance drag state, kept in egui's temporary memory between frames.
#[derive(Clone, Debug, Default)]
pub struct FloatPanelState {
    pub tracker: GestureTracker,
    pub transition: Transition,
    /// Where the panel was drawn last frame; gestures only start inside it.
    pub panel_rect: Option<Rect>,
}

impl FloatPanelState {
    pub fn new(options: &FloatOptions) -> Self {
        Self {
            tracker: GestureTracker::new(options),
            transition: Transition::default(),
            panel_rect: None,
        }
    }

    pub fn load(ctx: &Context, id: Id) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp::<Self>(id))
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    pub fn remove(ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.remove_temp::<Self>(id));
    }
}

pub struct FloatPanelResponse<R> {
    pub inner: R,
    pub response: Response,
    /// Memory id of this panel's [`FloatPanelState`].
    pub id: Id,
    /// A tap finished this frame.
    pub clicked: bool,
    /// Set on the frame a drag is released.
    pub snap: Option<Snap>,
    pub dragging: bool,
}

/// A panel floating above the rest of the UI that can be dragged around and
/// docks against the left or right screen edge when let go.
///
/// Taps are told apart from drags by how far the contact travelled, see
/// [`FloatOptions::click_threshold`].
pub struct FloatPanel<'a> {
    id: Id,
    options: FloatOptions,
    on_click: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> FloatPanel<'a> {
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id: Id::new(id_salt),
            options: FloatOptions::default(),
            on_click: None,
        }
    }

    #[inline]
    pub fn options(mut self, options: FloatOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.options.anchor = anchor;
        self
    }

    #[inline]
    pub fn on_click(mut self, on_click: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// Memory id of the panel; panels with different anchors never share state.
    pub fn id(&self) -> Id {
        self.id.with(self.options.anchor.class_name())
    }

    pub fn show<R>(
        mut self,
        ctx: &Context,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> FloatPanelResponse<R> {
        let id = self.id();
        let anchor = self.options.anchor;
        let layer_id = LayerId::new(Order::Foreground, id);
        let mut state =
            FloatPanelState::load(ctx, id).unwrap_or_else(|| FloatPanelState::new(&self.options));

        let now = ctx.input(|i| i.time);
        let mut clicked = false;
        let mut snap = None;
        let events = ctx.input(|i| i.events.clone());
        for event in &events {
            let Some(input) = GestureInput::from_event(event) else {
                continue;
            };
            match input {
                GestureInput::Start(pos, source) => {
                    if state
                        .panel_rect
                        .is_some_and(|rect| is_in_panel(ctx, layer_id, pos, rect))
                    {
                        state.tracker.on_gesture_start(pos, source);
                    }
                }
                GestureInput::Move(pos, source) => {
                    if let Some(transform) = state.tracker.on_gesture_move(pos, source) {
                        state.transition.retarget(transform, now);
                    }
                }
                GestureInput::End(pos, source) => {
                    let geometry = Geometry::new(
                        ctx.screen_rect().width(),
                        state.panel_rect.map_or(0.0, |rect| rect.width()),
                    );
                    if let Some(end) = state.tracker.on_gesture_end(pos, source, geometry) {
                        state.transition.retarget(end.transform, now);
                        snap = Some(end.snap);
                        if end.clicked {
                            clicked = true;
                            if let Some(on_click) = self.on_click.as_mut() {
                                on_click();
                            }
                        }
                    }
                }
                GestureInput::Cancel(source) => {
                    if let Some(transform) = state.tracker.on_gesture_cancel(source) {
                        state.transition.retarget(transform, now);
                    }
                }
            }
        }

        let offset = home_offset(anchor, self.options.edge_margin) + state.transition.sample(now);
        let inner = Area::new(layer_id.id)
            .order(layer_id.order)
            .anchor(anchor.align(), offset)
            .show(ctx, add_contents);

        if !state.transition.is_settled(now) {
            ctx.request_repaint();
        }

        let dragging = state.tracker.is_dragging();
        state.panel_rect = Some(inner.response.rect);
        state.store(ctx, id);

        FloatPanelResponse {
            inner: inner.inner,
            response: inner.response,
            id,
            clicked,
            snap,
            dragging,
        }
    }
}

fn home_offset(anchor: Anchor, edge_margin: f32) -> Vec2 {
    if anchor.is_top() {
        Vec2::new(0.0, edge_margin)
    } else {
        Vec2::new(0.0, -edge_margin)
    }
}
