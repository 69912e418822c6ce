mod anchor;
mod errors;
mod gesture;
mod input;
mod options;
mod transform;
mod view;

pub use anchor::{Anchor, HorizontalEdge, VerticalEdge};
pub use errors::FloatError;
pub use gesture::{Geometry, GestureEnd, GestureState, GestureTracker, Snap};
pub use input::{GestureInput, InputSource};
pub use options::FloatOptions;
pub use transform::{Transform, Transition};
pub use view::{FloatPanel, FloatPanelResponse, FloatPanelState};
