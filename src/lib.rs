//! # Toegang
//!
//! `toegang` is the password gate in front of the praktijk brochure site.
//! It serves the exported static pages and enforces a single shared-password
//! login: a successful `POST /api/login` issues the `auth=authenticated`
//! session cookie, the gate middleware redirects every unauthenticated page
//! request to `/login`, and the logout endpoints clear the cookie again.
//!
//! The gate is deliberately simple: one secret, one flag cookie, no per-user
//! sessions. When no password is configured the gate is disabled entirely.

pub mod cli;
pub mod toegang;
