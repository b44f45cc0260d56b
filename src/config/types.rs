use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsConfig {
    /// Explicit ffmpeg executable; PATH is searched when unset or missing
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,

    /// Explicit ffprobe executable; PATH is searched when unset or missing
    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Emit ANSI colors in menus and notices
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Answers that confirm a batch (compared case-insensitively)
    #[serde(default = "default_confirm_tokens")]
    pub confirm_tokens: Vec<String>,
}

fn default_confirm_tokens() -> Vec<String> {
    ["y", "yes", "s", "si"].iter().map(|s| s.to_string()).collect()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confirm_tokens: default_confirm_tokens(),
        }
    }
}
