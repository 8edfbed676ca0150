//! Blame endpoint.
//!
//! GET /repos/{repo_key}/blame/{refspec}/{*file_path}?firstLine=&lastLine=&oldest=
//!
//! Returns per-line attribution for the file at `refspec`, optionally bounded
//! by an oldest refspec and a 1-indexed inclusive line range.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::context::SharedContext;
use crate::error::Result;
use crate::git::GitRepository;
use crate::models::BlameResponse;

pub fn routes(ctx: SharedContext) -> Router {
    Router::new()
        .route("/repos/{repo_key}/blame/{refspec}/{*file_path}", get(get_blame))
        .with_state(ctx)
}

#[derive(Debug, Deserialize)]
struct BlameQuery {
    #[serde(rename = "firstLine")]
    first_line: Option<usize>,
    #[serde(rename = "lastLine")]
    last_line: Option<usize>,
    oldest: Option<String>,
}

async fn get_blame(
    State(ctx): State<SharedContext>,
    Path((repo_key, refspec, file_path)): Path<(String, String, String)>,
    Query(query): Query<BlameQuery>,
) -> Result<Json<BlameResponse>> {
    let repo = GitRepository::open(&ctx.config, &repo_key)?;
    let response = repo.blame(
        &refspec,
        &file_path,
        query.oldest.as_deref(),
        query.first_line,
        query.last_line,
    )?;
    Ok(Json(response))
}
