//! Sound effect playback.

use bevy::audio::{PlaybackSettings, Volume};
use bevy::prelude::*;

use crate::bevy::events::{PlaySoundEvent, SoundKind};
use crate::bevy::resources::{GroveConfig, SoundBank};

/// Loads the sound effects named in the config and starts the looping
/// ambience track.
pub fn setup_sound_bank(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GroveConfig>,
) {
    let sounds = &config.0.sounds;
    let bank = SoundBank {
        jump: asset_server.load(&sounds.jump),
        saw: asset_server.load(&sounds.saw),
        ambience: asset_server.load(&sounds.ambience),
    };

    commands.spawn((
        AudioPlayer::new(bank.ambience.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(sounds.ambience_volume)),
    ));

    commands.insert_resource(bank);
}

/// Spawns a one-shot audio player per requested sound effect.
pub fn play_sound_effects(
    mut commands: Commands,
    mut requests: MessageReader<PlaySoundEvent>,
    bank: Option<Res<SoundBank>>,
) {
    let Some(bank) = bank else {
        return;
    };
    for request in requests.read() {
        let handle = match request.kind {
            SoundKind::Jump => bank.jump.clone(),
            SoundKind::Saw => bank.saw.clone(),
        };
        commands.spawn((AudioPlayer::new(handle), PlaybackSettings::DESPAWN));
    }
}
