//! Kinship Core — Fundamental types, errors, and the credential transform
//! shared by the Kinship social graph and its drivers.

pub mod credential;
pub mod error;
pub mod types;

pub use credential::{transform_secret, Credential, CREDENTIAL_SHIFT};
pub use error::NetworkError;
pub use types::{RosterRecord, User};
