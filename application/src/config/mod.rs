//! Application-level configuration.
//!
//! - [`SessionParams`] — session loop control (round cap, output length)

pub mod session_params;

pub use session_params::SessionParams;
