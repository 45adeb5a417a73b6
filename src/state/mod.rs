//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `filters`, `options`) so pages
//! depend on small focused models. The session model is the only one
//! provided application-wide via context; filters and options are page
//! local.

pub mod filters;
pub mod options;
pub mod session;
