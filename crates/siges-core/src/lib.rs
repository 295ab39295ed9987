//! SIGES shared wire contract.
//!
//! `siges-core` holds the JSON types exchanged between the SIGES backends and
//! their clients. The platform's API field names are Spanish
//! (`Nombre_Usuario`, `Contraseña`, ...); Rust identifiers stay idiomatic
//! and serde renames carry the contract, so a change here is a change to the
//! public API of every service that depends on this crate.
//!
//! # Modules
//!
//! - [`role`] — [`SystemRole`] and its short database codes.
//! - [`gender`] — [`Gender`] codes as stored in the `Genero` columns.
//! - [`error`] — [`ErrorCode`], [`ErrorResponse`] and [`AuthBlockedDetails`].
//! - [`login`] — request/response bodies of the role login endpoints.

pub mod error;
pub mod gender;
pub mod login;
pub mod role;

pub use error::{AuthBlockedDetails, ErrorCode, ErrorResponse};
pub use gender::Gender;
pub use login::{LoginData, LoginRequest, LoginSuccess};
pub use role::SystemRole;
