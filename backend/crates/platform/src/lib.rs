//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64)
//! - Password digesting (legacy unsalted SHA-256 scheme)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
