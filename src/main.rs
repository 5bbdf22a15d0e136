use anyhow::Result;
use bikeshare::{config::Config, console::Console, session::Session};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging (stderr, so prompts stay clean) ─────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
    info!("startup");

    // ─── 2) city CSVs are read from the working directory ────────────
    let config = Config::default();
    let console = Console::new(io::stdin().lock(), io::stdout());

    // ─── 3) loop until the user declines a restart ───────────────────
    // a load failure surfaces once, as anyhow's `Error: ...` chain on exit
    let mut session = Session::new(config, console);
    let iterations = session.run()?;
    info!(iterations, "all done");
    Ok(())
}
