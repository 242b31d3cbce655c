pub mod border;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod log;
pub mod platform;
pub mod rect;
pub mod selection;
pub mod session;
pub mod style;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use border::{BorderProfile, FrameMetrics};
pub use enumerate::{Candidate, WindowTitle, list_candidate_windows};
pub use error::ClampError;
pub use platform::{Platform, PlatformError, PlatformResult, SystemMetric, WindowHandle};
pub use rect::Rect;
pub use selection::SelectionError;
pub use session::{ClampSession, ClampSettings, SessionEnd, Tick, run_session};
pub use style::WindowStyle;
