//! psalter-dr (Psalter Data Review) - Read-only manuscript data service
//!
//! Loads the four precomputed JSON resources (word variants, similarity
//! analysis, manuscript metadata, verse translations) once at startup and
//! serves decoded word data plus derived statistics over a JSON API.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use psalter_common::config;
use psalter_dr::{build_router, loader, AppState};

#[derive(Parser, Debug)]
#[command(name = "psalter-dr", about = "Psalter manuscript data review service")]
struct Args {
    /// Data source: HTTP(S) base URL or local directory holding the
    /// JSON resources
    #[arg(long)]
    data_source: Option<String>,

    /// Port to listen on
    #[arg(long, default_value_t = 5730)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything else
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Psalter Data Review (psalter-dr) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let source = config::resolve_data_source(args.data_source.as_deref())?;
    info!("Data source: {}", source);

    // All four resources are required; a single failed load is terminal
    let data = match loader::load(&source).await {
        Ok(data) => {
            info!(
                "✓ Loaded {} sheets, {} manuscripts in similarity matrix, {} verses",
                data.psalter.sheets.len(),
                data.similarity.manuscripts.len(),
                data.verses.len()
            );
            data
        }
        Err(e) => {
            error!("Failed to load data: {:#}", e);
            return Err(e);
        }
    };

    let state = AppState::new(data);
    let app = build_router(state);

    let addr = format!("127.0.0.1:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("psalter-dr listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
