//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` provides the `gloo-net` transport and the `WebClient` constructor
//! pages use; request shapes and error mapping live in `medicare-api`.

pub mod api;

pub use api::{GlooTransport, WebClient, web_client};
