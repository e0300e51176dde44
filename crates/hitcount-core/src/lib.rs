//! hitcount core: error surface shared by the server and facade crates.
//!
//! Carries no runtime or transport dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;

/// Shared result type.
pub use error::{ClientCode, HitcountError, Result};
