//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing and verification (Argon2id, fixed cost)
//! - Signed identity tokens (HS256 JWT, fixed 24 h lifetime)
//! - `Authorization: Bearer <token>` header parsing
//!
//! Everything here is stateless: a [`token::TokenService`] is built once from
//! the configured secret and is then read-only, so it can be shared across
//! request tasks behind an `Arc`.

pub mod bearer;
pub mod password;
pub mod token;
