use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use popcorn_picks::{
    app::{self, EffectRunner},
    config::Config,
    logging, oneshot,
    services::{HttpPosterLoader, HttpRecommendationProvider, RecommendationProvider},
    state::AppState,
    terminal::{init_terminal, install_panic_hook, restore_terminal},
};

/// PopcornPicks - discover your next favorite movie
#[derive(Parser, Debug)]
#[command(name = "popcorn-picks")]
#[command(version)]
#[command(about = "Terminal client for a movie recommendation backend")]
struct Args {
    /// Recommendation backend base URL (overrides POPCORN_BACKEND_URL)
    #[arg(long)]
    backend_url: Option<String>,

    /// Log file path (overrides POPCORN_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run a single search, print the results and exit
    #[arg(short, long)]
    query: Option<String>,

    /// Check that the backend is reachable and exit
    #[arg(long)]
    check_backend: bool,

    /// Don't try to load poster images
    #[arg(long)]
    no_posters: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?.with_overrides(args.backend_url, args.log_file, args.no_posters);
    logging::init(&config.log_file)?;

    tracing::info!(
        endpoint = %config.endpoint_url(),
        poster_check = config.poster_check,
        "Starting PopcornPicks"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let provider: Arc<dyn RecommendationProvider> =
        Arc::new(HttpRecommendationProvider::from_config(&config));

    if args.check_backend {
        let ok = runtime.block_on(oneshot::check_backend(provider.as_ref(), &mut io::stdout()))?;
        std::process::exit(if ok { 0 } else { 1 });
    }

    if let Some(query) = args.query {
        let ok = runtime.block_on(oneshot::run(provider.as_ref(), &query, &mut io::stdout()))?;
        std::process::exit(if ok { 0 } else { 1 });
    }

    let (runner, mut rx) = EffectRunner::new(
        runtime.handle().clone(),
        provider,
        Arc::new(HttpPosterLoader::new()),
    );
    let mut state = AppState::new(config.poster_check);

    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut state, &runner, &mut rx);
    restore_terminal(&mut terminal)?;

    tracing::info!("PopcornPicks exiting");
    result
}
