//! # idea-auth
//!
//! Admin authentication for ideabox.
//!
//! A single shared admin password unlocks a server-side [`Session`] identified
//! by an opaque random token. The HTTP layer carries that token in a cookie;
//! this crate only knows about tokens.
//!
//! ```text
//! Anonymous ──login(password ok)──▶ Authenticated
//!     ▲                                  │
//!     └────────── logout / expiry ───────┘
//! ```

pub mod error;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use session::Session;
pub use store::SessionStore;
