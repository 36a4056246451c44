//! Per-tab session state.
//!
//! Each tab owns its own text buffer and its own last check result; there
//! is no state shared between tabs. The collection of open tabs is an
//! explicit [`SessionManager`] owned by the interactive controller, not a
//! process-wide singleton.

mod id;
mod store;

pub use id::SessionId;
pub use store::{Session, SessionManager};
