use egui_float::FloatError;

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid panel options: {0}")]
    Float(#[from] FloatError),
}
