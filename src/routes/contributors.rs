use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::context::SharedContext;
use crate::error::Result;
use crate::git::GitRepository;
use crate::models::ContributorInfo;

pub fn routes(ctx: SharedContext) -> Router {
    Router::new()
        .route("/repos/{repo_key}/contributors", get(get_contributors))
        .with_state(ctx)
}

async fn get_contributors(
    State(ctx): State<SharedContext>,
    Path(repo_key): Path<String>,
) -> Result<Json<Vec<ContributorInfo>>> {
    let repo = GitRepository::open(&ctx.config, &repo_key)?;
    Ok(Json(repo.contributors()?))
}
