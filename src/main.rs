mod cli;

use clipsplit::config::{self, CONFIG_ENV};
use clipsplit::session::Session;
use clipsplit::terminal::{Palette, Terminal};
use clipsplit_av::{check_tool_with_arg, Ffmpeg, ToolPaths};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use std::path::PathBuf;

fn main() -> Result<()> {
    Cli::parse();

    // Respect RUST_LOG if set; otherwise keep stderr quiet so the menus stay readable
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "clipsplit=warn,clipsplit_av=warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(io::stderr)
        .init();

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = config::load_config_or_default(config_path.as_deref())?;

    let paths = ToolPaths::discover(
        config.tools.ffmpeg_path.as_deref(),
        config.tools.ffprobe_path.as_deref(),
    )
    .map_err(clipsplit::Error::from)
    .context("ffmpeg and ffprobe are required; install them or set [tools] paths in the config")?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        for path in [&paths.ffmpeg, &paths.ffprobe] {
            let info = check_tool_with_arg(&path.to_string_lossy(), "-version");
            tracing::debug!(
                "{}: available={} version={}",
                info.name,
                info.available,
                info.version.as_deref().unwrap_or("unknown")
            );
        }
    }

    let toolkit = Ffmpeg::new(paths);
    let stdin = io::stdin();
    let terminal = Terminal::new(stdin.lock(), io::stdout(), Palette::from_config(&config.ui));

    let mut session = Session::new(terminal, &toolkit, config.session);
    session.run()?;

    Ok(())
}
