use anyhow::{Context, Result};
use tracing::info;

use rogue::tcod_backend::TcodBackend;
use rogue::{Game, Settings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = Settings::default_path();
    let settings = Settings::load(&path)
        .with_context(|| format!("failed to load settings from {}", path.display()))?;

    let mut game = Game::new(&settings).context("failed to set up the game")?;

    info!(title = %settings.title, fps = settings.limit_fps, "opening window");
    let mut backend = TcodBackend::new(&settings);
    game.play_game(&mut backend);
    Ok(())
}
