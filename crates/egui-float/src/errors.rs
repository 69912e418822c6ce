#[derive(Debug, thiserror::Error)]
pub enum FloatError {
    #[error("click threshold must be a finite, non-negative number of pixels, got {0}")]
    ClickThreshold(f32),
    #[error("settle duration must be a finite, non-negative number of seconds, got {0}")]
    SettleDuration(f32),
    #[error("edge margin must be a finite, non-negative number of pixels, got {0}")]
    EdgeMargin(f32),
}
