pub mod actions;
pub mod errors;
pub mod surface;
pub mod types;

pub use actions::{Action, ZoomStep};
pub use errors::{BrowserError, ConfigError, SurfaceError};
pub use surface::TabSurface;
pub use types::{Rect, TabIndex};

pub type Result<T> = std::result::Result<T, BrowserError>;
