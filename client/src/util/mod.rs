//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage, route-guard wiring and display formatting. Pages and
//! components call these; nothing here owns state.

pub mod auth;
pub mod format;
pub mod storage;
