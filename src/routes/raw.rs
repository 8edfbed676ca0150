use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::context::SharedContext;
use crate::error::Result;
use crate::git::GitRepository;

pub fn routes(ctx: SharedContext) -> Router {
    Router::new()
        .route("/repos/{repo_key}/raw/{refspec}/{*file_path}", get(get_raw))
        .with_state(ctx)
}

async fn get_raw(
    State(ctx): State<SharedContext>,
    Path((repo_key, refspec, file_path)): Path<(String, String, String)>,
) -> Result<impl IntoResponse> {
    let repo = GitRepository::open(&ctx.config, &repo_key)?;
    let content = repo.raw_file_content(&refspec, &file_path)?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], content))
}
