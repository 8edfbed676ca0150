use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::context::SharedContext;
use crate::error::Result;
use crate::git::GitRepository;
use crate::models::CommitDiff;

pub fn routes(ctx: SharedContext) -> Router {
    Router::new()
        .route("/repos/{repo_key}/commits/{refspec}", get(get_commit))
        .with_state(ctx)
}

async fn get_commit(
    State(ctx): State<SharedContext>,
    Path((repo_key, refspec)): Path<(String, String)>,
) -> Result<Json<CommitDiff>> {
    let repo = GitRepository::open(&ctx.config, &repo_key)?;
    let response = repo.commit_diff(&refspec)?;
    Ok(Json(response))
}
