//! restgit - GitHub-style read-only API over a directory of git repositories
//!
//! # Usage
//! ```bash
//! restgit /srv/git                                  # Serve every repo under /srv/git
//! restgit /srv/git --port 8080                      # Different port
//! restgit /srv/git --base-url https://git.example   # Public URL used in links
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use restgit::config::Config;
use restgit::context::AppContext;
use restgit::git::catalog::get_repo_names;
use restgit::routes;

/// Serve git repositories through a GitHub-shaped JSON API
#[derive(Parser)]
#[command(name = "restgit")]
#[command(about = "Read-only GitHub-style API for git repositories", long_about = None)]
struct Cli {
    /// Directory whose immediate children are the repositories to serve
    #[arg(value_name = "REPO_BASE_PATH")]
    repo_base_path: PathBuf,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Public URL prefix for links in responses (defaults to http://HOST:PORT)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if !cli.repo_base_path.is_dir() {
        eprintln!("✗ Not a directory: {}", cli.repo_base_path.display());
        std::process::exit(1);
    }

    let config = Config::new(&cli.repo_base_path, &cli.host, cli.port, cli.base_url);
    let repo_count = get_repo_names(&config.repo_base_path)?.len();
    let addr = config.bind_addr();
    let base_url = config.base_url.clone();
    let ctx = Arc::new(AppContext::new(config));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(ctx)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    println!();
    println!("  Repositories: {} ({} found)", cli.repo_base_path.display(), repo_count);
    println!("  Server:       http://{}", addr);
    println!("  Links:        {}", base_url);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();
    tracing::info!("Serving {} repositories on {}", repo_count, addr);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
