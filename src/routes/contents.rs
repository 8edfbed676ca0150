//! Contents endpoint.
//!
//! GET /repos/{repo_key}/contents/{*file_path}?ref=<refspec>
//!
//! A directory yields a name-sorted array of descriptors, a file yields one
//! descriptor with `encoding` and `content`. `ref` defaults to `master`.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::context::SharedContext;
use crate::error::Result;
use crate::git::GitRepository;
use crate::models::Contents;

pub const DEFAULT_REF: &str = "master";

pub fn routes(ctx: SharedContext) -> Router {
    Router::new()
        .route("/repos/{repo_key}/contents", get(get_root_contents))
        .route("/repos/{repo_key}/contents/{*file_path}", get(get_contents))
        .with_state(ctx)
}

#[derive(Debug, Deserialize)]
struct ContentsQuery {
    #[serde(rename = "ref")]
    refspec: Option<String>,
}

async fn get_root_contents(
    State(ctx): State<SharedContext>,
    Path(repo_key): Path<String>,
    Query(query): Query<ContentsQuery>,
) -> Result<Json<Contents>> {
    contents_at(&ctx, &repo_key, query.refspec.as_deref(), "")
}

async fn get_contents(
    State(ctx): State<SharedContext>,
    Path((repo_key, file_path)): Path<(String, String)>,
    Query(query): Query<ContentsQuery>,
) -> Result<Json<Contents>> {
    contents_at(&ctx, &repo_key, query.refspec.as_deref(), &file_path)
}

fn contents_at(ctx: &SharedContext, repo_key: &str, refspec: Option<&str>, path: &str) -> Result<Json<Contents>> {
    let repo = GitRepository::open(&ctx.config, repo_key)?;
    let contents = repo.contents(ctx, refspec.unwrap_or(DEFAULT_REF), path)?;
    Ok(Json(contents))
}
