//! Read-only, GitHub-API-shaped queries over a directory of git repositories.
//!
//! The `git` module holds the query core (ref resolution, path traversal,
//! contents listing, diffs, blame, author history); `routes` exposes it over
//! HTTP with axum.

pub mod config;
pub mod context;
pub mod encoding;
pub mod error;
pub mod git;
pub mod models;
pub mod routes;
pub mod urls;
