//! API route handlers - maps HTTP endpoints to git queries.
//!
//! Each submodule defines routes for a feature area:
//! - `repos`: repository list and single repository info
//! - `contents`: file content and directory listings at a ref
//! - `raw`: raw blob bytes at a ref
//! - `commits`: a commit with its diff
//! - `blame`: per-line attribution over a line range
//! - `contributors`: authors ranked by commit count
//! - `branches`: single branch lookup
//!
//! Every handler opens its repository for the duration of the request.

pub mod blame;
pub mod branches;
pub mod commits;
pub mod contents;
pub mod contributors;
pub mod raw;
pub mod repos;

use axum::Router;

use crate::context::SharedContext;

pub fn create_router(ctx: SharedContext) -> Router {
    Router::new()
        .merge(repos::routes(ctx.clone()))
        .merge(contents::routes(ctx.clone()))
        .merge(raw::routes(ctx.clone()))
        .merge(commits::routes(ctx.clone()))
        .merge(blame::routes(ctx.clone()))
        .merge(contributors::routes(ctx.clone()))
        .merge(branches::routes(ctx))
}
