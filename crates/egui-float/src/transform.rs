use egui::Vec2;

/// An offset to place the panel at, and how long the move there should take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    /// Transition length in seconds; zero means jump.
    pub duration: f32,
}

impl Transform {
    pub fn immediate(translation: Vec2) -> Self {
        Self {
            translation,
            duration: 0.0,
        }
    }

    pub fn eased(translation: Vec2, duration: f32) -> Self {
        Self {
            translation,
            duration: duration.max(0.0),
        }
    }
}

/// Linear glide between two offsets, timed against egui's input clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: Vec2,
    to: Vec2,
    started_at: f64,
    duration: f32,
}

impl Default for Transition {
    fn default() -> Self {
        Self::resting(Vec2::ZERO)
    }
}

impl Transition {
    pub fn resting(at: Vec2) -> Self {
        Self {
            from: at,
            to: at,
            started_at: 0.0,
            duration: 0.0,
        }
    }

    /// Starts a transition towards `transform` from wherever the panel is drawn at `now`.
    pub fn retarget(&mut self, transform: Transform, now: f64) {
        let from = self.sample(now);
        *self = Self {
            from,
            to: transform.translation,
            started_at: now,
            duration: transform.duration,
        };
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    pub fn sample(&self, now: f64) -> Vec2 {
        let t = self.progress(now);
        self.from + (self.to - self.from) * t
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = (now - self.started_at).max(0.0) as f32;
        (elapsed / self.duration).min(1.0)
    }
}
