use crate::transform::Transform2D;
use druid::Data;

/// Application state
#[derive(Clone, Data)]
pub struct AppState {
    /// The shared model transform, rebuilt from its accumulators on
    /// every edit
    pub transform: Transform2D,
    /// Enable debug mode
    pub debug: bool,
}

impl AppState {
    pub fn new(debug: bool) -> Self {
        AppState {
            transform: Transform2D::new(),
            debug,
        }
    }
}
