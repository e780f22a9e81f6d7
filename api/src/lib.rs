//! Typed client for the MediCare storefront REST backend.
//!
//! This crate owns the wire representation shared by the browser client and
//! the CLI: request/response DTOs, the error taxonomy, the session store, and
//! the two seams (`Transport`, `SessionStorage`) each host plugs its own
//! platform implementation into.
//!
//! ARCHITECTURE
//! ============
//! `ApiClient` issues exactly one request per operation through a `Transport`
//! and reads/writes credentials through a `SessionStore`. Nothing in here
//! touches the browser or the filesystem directly, so the same code runs in
//! WASM and natively.

pub mod client;
pub mod error;
pub mod session;
pub mod storage;
#[cfg(any(test, feature = "testing"))]
pub mod stub;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, StorageError, TransportError};
pub use session::{Session, SessionStore};
pub use storage::{MemoryStorage, SessionStorage};
#[cfg(any(test, feature = "testing"))]
pub use stub::StubTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
