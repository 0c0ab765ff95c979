//! Application-local prelude: conveniently import types/functions used
//! throughout this application.

/// Abscissa core prelude
pub use abscissa_core::{status_err, status_info, status_ok, status_warn, Application};

/// Application state accessor
pub use crate::application::APP;
