use clap::Parser;

/// Everything else happens in the interactive menu.
#[derive(Parser)]
#[command(name = "clipsplit")]
#[command(
    author,
    version,
    about = "Interactively split a video into equal parts or fixed-length clips with ffmpeg",
    after_help = "Configuration is read from $CLIPSPLIT_CONFIG, ./clipsplit.toml or ~/.config/clipsplit/config.toml.\nSet RUST_LOG (e.g. RUST_LOG=clipsplit=debug) for diagnostics on stderr."
)]
pub struct Cli {}
