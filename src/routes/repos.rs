use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::context::SharedContext;
use crate::error::Result;
use crate::git::catalog::get_repo_names;
use crate::git::repository::repository_info;
use crate::git::GitRepository;
use crate::models::RepositoryInfo;

pub fn routes(ctx: SharedContext) -> Router {
    Router::new()
        .route("/repos", get(list_repos))
        .route("/repos/{repo_key}", get(get_repo))
        .with_state(ctx)
}

async fn list_repos(State(ctx): State<SharedContext>) -> Result<Json<Vec<RepositoryInfo>>> {
    let repos = get_repo_names(&ctx.config.repo_base_path)?
        .iter()
        .map(|key| repository_info(&ctx, key))
        .collect::<Result<Vec<_>>>()?;
    Ok(Json(repos))
}

async fn get_repo(
    State(ctx): State<SharedContext>,
    Path(repo_key): Path<String>,
) -> Result<Json<RepositoryInfo>> {
    let repo = GitRepository::open(&ctx.config, &repo_key)?;
    Ok(Json(repo.info(&ctx)?))
}
