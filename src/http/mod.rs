//! HTTP adapter
//!
//! Exposes the single account as the `/account` resource:
//!
//! | Method   | Operation | Body                   |
//! |----------|-----------|------------------------|
//! | `PUT`    | open      | `{"initialAmount": N}` |
//! | `GET`    | balance   |                        |
//! | `POST`   | deposit   | `{"amount": N}`        |
//! | `DELETE` | close     |                        |
//!
//! Every success answers `{"amount": N}`; every failure answers `{"error": "..."}`.

pub mod handlers;
pub mod response;
pub mod router;
pub mod server;

pub use handlers::SharedSlot;
pub use response::ApiError;
pub use router::{router, ACCOUNT_PATH};
pub use server::{serve, ServerConfig};
