//! Rolling Grove
//!
//! Desktop build of the tilt-steered rolling-ball game. Loads the scene
//! config, validates it (and its sound assets) before the engine starts,
//! then hands everything to `GroveGamePlugin`.

use std::path::PathBuf;

use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use grove_core::bevy::GroveGamePlugin;
use grove_core::config::SceneConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let asset_root = std::env::var("GROVE_ASSET_ROOT").unwrap_or_else(|_| "assets".to_string());
    let config_path = PathBuf::from(&asset_root).join("scene.json");

    // Fail fast: a broken config or a missing sound file aborts here, not
    // mid-game.
    let config = SceneConfig::from_path(&config_path)
        .with_context(|| format!("loading scene config from {}", config_path.display()))?;
    config
        .validate_assets(&asset_root)
        .context("checking sound assets")?;

    tracing::info!(scene = %config.meta.name, asset_root = %asset_root, "starting");

    App::new()
        .add_plugins(
            DefaultPlugins
                .build()
                // The subscriber above replaces bevy's own.
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Rolling Grove".to_string(),
                        resolution: (1280, 720).into(),
                        present_mode: PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: asset_root,
                    ..default()
                }),
        )
        .add_plugins(GroveGamePlugin::new(config))
        .run();

    Ok(())
}
