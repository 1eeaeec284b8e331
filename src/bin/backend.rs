use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context};
use clap::Parser;
use learner_views::{app, data::AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
/// Serves learner dashboard fragments: course cards, program details and cohort headers.
struct Args {
    /// Address to listen on
    #[arg(long, env = "BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Directory of `<language>.json` message catalogs. Without one, messages render untranslated.
    #[arg(long, env = "LOCALE_DIR")]
    locale_dir: Option<PathBuf>,

    /// Directory served under /assets
    #[arg(long, env = "ASSETS_DIR", default_value = "assets")]
    assets_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                [
                    "backend=debug",         // code in this file
                    "learner_views=debug",   // code in this crate (but not this file)
                    "tower_http=debug",      // http request/response pairs
                    "axum::rejection=trace", // extractor rejections (i.e. bad json input)
                ]
                .join(",")
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let state = AppState::new(args.locale_dir.as_deref(), args.assets_dir)
        .await
        .context("failed to initialize app state")?;
    let app = app::make_app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| anyhow!("failed to bind listener to {}", args.bind))?;
    info!("listening on http://{}", &args.bind);

    axum::serve(listener, app)
        .await
        .context("error while serving app")?;

    Ok(())
}
