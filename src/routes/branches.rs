use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::context::SharedContext;
use crate::error::Result;
use crate::git::GitRepository;
use crate::models::BranchInfo;

pub fn routes(ctx: SharedContext) -> Router {
    Router::new()
        .route("/repos/{repo_key}/branches/{branch}", get(get_branch))
        .with_state(ctx)
}

async fn get_branch(
    State(ctx): State<SharedContext>,
    Path((repo_key, branch)): Path<(String, String)>,
) -> Result<Json<BranchInfo>> {
    let repo = GitRepository::open(&ctx.config, &repo_key)?;
    Ok(Json(repo.branch_info(&branch)?))
}
