use egui::{Context, Event, LayerId, PointerButton, Pos2, Rect, TouchId, TouchPhase};

/// Which contact owns a gesture. Only events from the owner may move or end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch(TouchId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    Start(Pos2, InputSource),
    Move(Pos2, InputSource),
    End(Pos2, InputSource),
    /// Contact lost without a release point; `None` cancels whatever is active.
    Cancel(Option<InputSource>),
}

impl GestureInput {
    /// Maps one raw egui event onto the gesture vocabulary, dropping everything
    /// that cannot start, move or end a single-contact drag.
    pub fn from_event(event: &Event) -> Option<Self> {
        match *event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => {
                if pressed {
                    Some(GestureInput::Start(pos, InputSource::Mouse))
                } else {
                    Some(GestureInput::End(pos, InputSource::Mouse))
                }
            }
            Event::PointerMoved(pos) => Some(GestureInput::Move(pos, InputSource::Mouse)),
            Event::Touch { id, phase, pos, .. } => {
                let source = InputSource::Touch(id);
                match phase {
                    TouchPhase::Start => Some(GestureInput::Start(pos, source)),
                    TouchPhase::Move => Some(GestureInput::Move(pos, source)),
                    TouchPhase::End => Some(GestureInput::End(pos, source)),
                    TouchPhase::Cancel => Some(GestureInput::Cancel(Some(source))),
                }
            }
            Event::WindowFocused(false) => Some(GestureInput::Cancel(None)),
            _ => None,
        }
    }
}

/// True when `pos` lands on the panel itself rather than on a layer above it.
pub fn is_in_panel(ctx: &Context, layer_id: LayerId, pos: Pos2, rect: Rect) -> bool {
    rect.contains(pos) && ctx.layer_id_at(pos) == Some(layer_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, TouchDeviceId};

    fn touch(id: u64, phase: TouchPhase, pos: Pos2) -> Event {
        Event::Touch {
            device_id: TouchDeviceId(0),
            id: TouchId(id),
            phase,
            pos,
            force: None,
        }
    }

    #[test]
    fn touch_sources_compare_by_contact() {
        let first = InputSource::Touch(TouchId(1));
        assert_eq!(first, InputSource::Touch(TouchId(1)));
        assert_ne!(first, InputSource::Touch(TouchId(2)));
        assert_ne!(first, InputSource::Mouse);
    }

    #[test]
    fn primary_button_starts_and_ends() {
        let pos = Pos2::new(12.0, 34.0);
        let press = Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::NONE,
        };
        let release = Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(
            GestureInput::from_event(&press),
            Some(GestureInput::Start(pos, InputSource::Mouse))
        );
        assert_eq!(
            GestureInput::from_event(&release),
            Some(GestureInput::End(pos, InputSource::Mouse))
        );
    }

    #[test]
    fn secondary_button_is_ignored() {
        let press = Event::PointerButton {
            pos: Pos2::ZERO,
            button: PointerButton::Secondary,
            pressed: true,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(GestureInput::from_event(&press), None);
        assert_eq!(GestureInput::from_event(&Event::PointerGone), None);
    }

    #[test]
    fn touch_phases_carry_their_contact() {
        let pos = Pos2::new(5.0, 6.0);
        let source = InputSource::Touch(TouchId(7));
        assert_eq!(
            GestureInput::from_event(&touch(7, TouchPhase::Start, pos)),
            Some(GestureInput::Start(pos, source))
        );
        assert_eq!(
            GestureInput::from_event(&touch(7, TouchPhase::Move, pos)),
            Some(GestureInput::Move(pos, source))
        );
        assert_eq!(
            GestureInput::from_event(&touch(7, TouchPhase::End, pos)),
            Some(GestureInput::End(pos, source))
        );
        assert_eq!(
            GestureInput::from_event(&touch(7, TouchPhase::Cancel, pos)),
            Some(GestureInput::Cancel(Some(source)))
        );
    }

    #[test]
    fn losing_focus_cancels_any_source() {
        let input = GestureInput::from_event(&Event::WindowFocused(false));
        assert_eq!(input, Some(GestureInput::Cancel(None)));
        assert_eq!(GestureInput::from_event(&Event::WindowFocused(true)), None);
    }
}
