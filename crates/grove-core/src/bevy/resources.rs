//! Bevy resources.

use std::sync::Arc;

use bevy::prelude::*;
use parking_lot::Mutex;

use crate::config::SceneConfig;

/// Latest tilt sample, shared between the sampling side and the ECS.
///
/// On device the platform motion callback pushes samples from its own
/// thread; in tests (and the desktop build) the keyboard system pushes
/// instead. The game only ever reads the most recent sample, so a single
/// mutex-guarded slot is enough.
#[derive(Resource, Clone, Default)]
pub struct TiltSampler {
    inner: Arc<Mutex<Vec3>>,
}

impl TiltSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current sample. Callable from any thread.
    pub fn push(&self, sample: Vec3) {
        *self.inner.lock() = sample;
    }

    /// Returns the most recent sample.
    pub fn sample(&self) -> Vec3 {
        *self.inner.lock()
    }
}

/// The loaded scene configuration.
#[derive(Resource, Debug, Clone, Default)]
pub struct GroveConfig(pub SceneConfig);

/// Gameplay constants resolved from the scene config at startup.
///
/// Systems read these instead of digging through [`GroveConfig`] every tick.
#[derive(Resource, Debug, Clone)]
pub struct GameTuning {
    pub force_scale: f32,
    pub rest_bias: f32,
    pub jump_impulse: Vec3,
    pub bounce_impulse: Vec3,
    pub reveal_delay: f32,
}

impl GameTuning {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            force_scale: config.steering.force_scale,
            rest_bias: config.steering.rest_bias,
            jump_impulse: Vec3::from_array(config.steering.jump_impulse),
            bounce_impulse: Vec3::from_array(config.contact.bounce_impulse),
            reveal_delay: config.contact.reveal_delay,
        }
    }
}

impl Default for GameTuning {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

/// Handles to the loaded sound effects. Windowed builds only.
#[derive(Resource, Debug, Clone)]
pub struct SoundBank {
    pub jump: Handle<AudioSource>,
    pub saw: Handle<AudioSource>,
    pub ambience: Handle<AudioSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_sampler_starts_at_zero() {
        let sampler = TiltSampler::new();
        assert_eq!(sampler.sample(), Vec3::ZERO);
    }

    #[test]
    fn test_tilt_sampler_keeps_latest_sample() {
        let sampler = TiltSampler::new();
        sampler.push(Vec3::new(0.1, -0.2, 0.0));
        sampler.push(Vec3::new(0.5, 0.3, 0.0));
        assert_eq!(sampler.sample(), Vec3::new(0.5, 0.3, 0.0));
    }

    #[test]
    fn test_tilt_sampler_shared_across_threads() {
        let sampler = TiltSampler::new();
        let writer = sampler.clone();
        std::thread::spawn(move || {
            writer.push(Vec3::new(1.0, 2.0, 3.0));
        })
        .join()
        .unwrap();
        assert_eq!(sampler.sample(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_tuning_mirrors_config() {
        let tuning = GameTuning::default();
        assert_eq!(tuning.force_scale, 0.05);
        assert_eq!(tuning.jump_impulse, Vec3::new(0.0, 4.0, -2.0));
        assert_eq!(tuning.reveal_delay, 15.0);
    }
}
