//! Middleware and extractors for cross-cutting request concerns.
//!
//! - [`auth`]: bearer-token extractors resolving the calling student
//! - [`staff`]: staff-only gating for administrative routes
//!
//! # Authentication flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] verifies the token signature and expiry, then checks
//!    that its digest is still present in the `auth_tokens` store (logout
//!    removes it)
//! 3. Staff-only routes additionally pass through [`staff::require_staff`]
//! 4. The handler runs with the caller's serial number resolved

pub mod auth;
pub mod staff;
