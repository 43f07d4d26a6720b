use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use snake_arcade::audio::AudioPlayer;
use snake_arcade::game::GameConfig;
use snake_arcade::modes::PlayMode;
use snake_arcade::render::Skin;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Grid-based snake arcade game in the terminal")]
struct Cli {
    /// Directory holding the optional sound assets
    #[arg(long, default_value = "resources")]
    resources: PathBuf,

    /// Disable audio output entirely
    #[arg(long)]
    mute: bool,

    /// Draw plain colored blocks instead of unicode glyphs
    #[arg(long)]
    ascii: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let audio = if cli.mute {
        AudioPlayer::disabled()
    } else {
        AudioPlayer::new(&cli.resources)
    };

    let skin = if cli.ascii {
        Skin::blocks()
    } else {
        Skin::glyphs()
    };

    let mut mode = PlayMode::new(GameConfig::default(), audio, skin);
    mode.run().await
}
