mod input;
mod renderer;

use std::process::ExitCode;
use std::time::Instant;

use tokio::sync::mpsc::error::TryRecvError;
use tracing_subscriber::EnvFilter;

use lightcycle_game::time::FixedTimestep;
use lightcycle_game::{ArenaEvent, Game, LightcycleConfig};

use input::HostCommand;
use renderer::LogRenderer;

fn main() -> ExitCode {
    let loaded = LightcycleConfig::try_load();
    let filter = loaded.as_ref().map_or("info", |c| c.log_filter.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load config");
            return ExitCode::FAILURE;
        },
    };
    tracing::info!(
        tick_rate_hz = config.tick_rate_hz,
        round_limit = ?config.round_limit,
        "Lightcycle host starting"
    );

    let mut commands = input::spawn_stdin_reader();
    let mut game = Game::new(LogRenderer::default());
    if config.autostart {
        game.start();
    }

    let mut clock = FixedTimestep::from_hz(config.tick_rate_hz);
    let mut stdin_open = true;
    let mut completed_rounds = 0u32;

    'run: loop {
        // Apply all pending input between ticks.
        while stdin_open {
            match commands.try_recv() {
                Ok(HostCommand::Start) => game.start(),
                Ok(HostCommand::Key(key)) => {
                    game.key_pressed(&key);
                },
                Ok(HostCommand::Quit) => break 'run,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    stdin_open = false;
                    // Without input the game can only end through the round limit.
                    if config.round_limit.is_none() || !config.autostart {
                        break 'run;
                    }
                },
            }
        }

        if !clock.poll(Instant::now()) {
            std::thread::yield_now();
            continue;
        }

        for event in game.tick() {
            if let ArenaEvent::RoundReset { round } = event {
                completed_rounds += 1;
                tracing::info!(round, "new round");
            }
        }
        if config.round_limit.is_some_and(|limit| completed_rounds >= limit) {
            tracing::info!(completed_rounds, "round limit reached");
            break;
        }
    }

    let [blue, red] = game.arena().scores().as_array();
    tracing::info!(
        blue,
        red,
        ticks = game.arena().ticks(),
        frames = game.renderer().frames(),
        "Lightcycle host stopped"
    );
    match serde_json::to_string_pretty(&game.arena().snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize final state"),
    }
    ExitCode::SUCCESS
}
