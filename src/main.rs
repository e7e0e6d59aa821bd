use std::io;

use todo_cli::application::todo_service::TodoServiceImpl;
use todo_cli::cli::{app::choose_storage, App};
use todo_cli::config::Config;
use todo_cli::infrastructure::build_cache;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    // stdout belongs to the interactive session, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();
    tracing::info!(file = %config.todo_file().display(), "starting");

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let Some(kind) = choose_storage(&mut input, &mut output)? else { return Ok(()) };

    let service = TodoServiceImpl::new(build_cache(kind, &config));
    App::new(service, input, output).run()?;
    tracing::info!("shutdown");
    Ok(())
}
