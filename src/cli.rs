//! Command-line configuration for the terminal 2048 binary

use clap::Parser;

use crate::types::{KeyLayout, DEFAULT_AUTO_STEPS};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "tui-2048")]
#[command(about = "Terminal 2048 with a greedy auto-play policy")]
pub struct Cli {
    /// Let the heuristic policy play instead of the keyboard
    #[arg(short, long)]
    pub auto: bool,

    /// Maximum number of automatic moves before stopping
    #[arg(long, default_value_t = DEFAULT_AUTO_STEPS)]
    pub steps: u32,

    /// Random seed for a reproducible game (default: from system time)
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Keyboard layout for direction keys: qwerty (wasd) or azerty (zqsd)
    #[arg(short, long, default_value = "qwerty", value_parser = parse_layout)]
    pub layout: KeyLayout,
}

fn parse_layout(s: &str) -> Result<KeyLayout, String> {
    KeyLayout::from_str(s)
        .ok_or_else(|| format!("unknown layout '{s}' (expected qwerty or azerty)"))
}
