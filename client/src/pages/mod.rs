//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, fetches, tickets) and
//! delegates rendering details to `components`.

pub mod login;
pub mod product;
pub mod products;
