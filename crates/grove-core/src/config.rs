//! Scene configuration loaded from JSON.
//!
//! Every field has a default matching the built-in scene, so a partial (or
//! empty) config file is valid. Validation is fail-fast: a bad value or a
//! missing sound file aborts startup with a [`SceneError`] instead of being
//! silently clamped.

use std::path::{Path, PathBuf};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::{Deserialize, Serialize};

/// Errors produced while loading or validating a scene configuration.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to read scene config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scene config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid scene config: {0}")]
    Invalid(String),

    #[error("sound file not found: {0}")]
    MissingSound(PathBuf),
}

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub meta: SceneMeta,
    #[serde(default)]
    pub ball: BallConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub steering: SteeringConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub trees: TreeLayout,
    #[serde(default)]
    pub ground: GroundConfig,
    #[serde(default)]
    pub sounds: SoundManifest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMeta {
    #[serde(default = "default_scene_name")]
    pub name: String,
}

impl Default for SceneMeta {
    fn default() -> Self {
        Self {
            name: default_scene_name(),
        }
    }
}

fn default_scene_name() -> String {
    "grove".to_string()
}

/// The player-controlled ball.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallConfig {
    #[serde(default = "default_ball_spawn")]
    pub spawn: [f32; 3],
    #[serde(default = "default_ball_radius")]
    pub radius: f32,
    #[serde(default = "default_ball_restitution")]
    pub restitution: f32,
    #[serde(default = "default_ball_friction")]
    pub friction: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            spawn: default_ball_spawn(),
            radius: default_ball_radius(),
            restitution: default_ball_restitution(),
            friction: default_ball_friction(),
        }
    }
}

fn default_ball_spawn() -> [f32; 3] {
    [0.0, 0.5, 0.0]
}

fn default_ball_radius() -> f32 {
    0.5
}

fn default_ball_restitution() -> f32 {
    0.4
}

fn default_ball_friction() -> f32 {
    0.8
}

/// Chase camera placement and smoothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Offset of the camera target from the ball.
    #[serde(default = "default_camera_offset")]
    pub offset: [f32; 3],
    /// Per-tick blend weight toward the target, in `(0, 1]`.
    #[serde(default = "default_camera_damping")]
    pub damping: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: default_camera_offset(),
            damping: default_camera_damping(),
        }
    }
}

fn default_camera_offset() -> [f32; 3] {
    [0.0, 5.0, 5.0]
}

fn default_camera_damping() -> f32 {
    crate::steering::CAMERA_DAMPING
}

/// Tilt-to-velocity mapping and the tap jump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteeringConfig {
    #[serde(default = "default_force_scale")]
    pub force_scale: f32,
    #[serde(default = "default_rest_bias")]
    pub rest_bias: f32,
    /// Velocity change applied when the player taps the ball.
    #[serde(default = "default_jump_impulse")]
    pub jump_impulse: [f32; 3],
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            force_scale: default_force_scale(),
            rest_bias: default_rest_bias(),
            jump_impulse: default_jump_impulse(),
        }
    }
}

fn default_force_scale() -> f32 {
    crate::steering::TILT_FORCE_SCALE
}

fn default_rest_bias() -> f32 {
    crate::steering::TILT_REST_BIAS
}

fn default_jump_impulse() -> [f32; 3] {
    [0.0, 4.0, -2.0]
}

/// What happens when the ball runs into a tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Velocity change applied to the ball on tree contact.
    #[serde(default = "default_bounce_impulse")]
    pub bounce_impulse: [f32; 3],
    /// Seconds the tree stays hidden before reappearing.
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay: f32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            bounce_impulse: default_bounce_impulse(),
            reveal_delay: default_reveal_delay(),
        }
    }
}

fn default_bounce_impulse() -> [f32; 3] {
    [0.0, 4.0, -2.0]
}

fn default_reveal_delay() -> f32 {
    crate::steering::TREE_REVEAL_DELAY
}

/// Tree placement: either an explicit list or a seeded scatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TreeLayout {
    /// Trees at fixed positions.
    Explicit { positions: Vec<[f32; 3]> },
    /// Trees scattered uniformly over a square area by a seeded RNG.
    Scatter { count: u32, area: f32, seed: u64 },
}

impl Default for TreeLayout {
    fn default() -> Self {
        // Slalom line down the -z track.
        Self::Explicit {
            positions: vec![[-2.0, 0.0, -6.0], [2.0, 0.0, -12.0], [0.0, 0.0, -18.0]],
        }
    }
}

/// Ground plane dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundConfig {
    /// Half extents of the ground along x and z.
    #[serde(default = "default_ground_half_extents")]
    pub half_extents: [f32; 2],
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            half_extents: default_ground_half_extents(),
        }
    }
}

fn default_ground_half_extents() -> [f32; 2] {
    [30.0, 30.0]
}

/// Relative paths (under the asset root) of the sound effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundManifest {
    #[serde(default = "default_jump_sound")]
    pub jump: String,
    #[serde(default = "default_saw_sound")]
    pub saw: String,
    #[serde(default = "default_ambience_sound")]
    pub ambience: String,
    #[serde(default = "default_ambience_volume")]
    pub ambience_volume: f32,
}

impl Default for SoundManifest {
    fn default() -> Self {
        Self {
            jump: default_jump_sound(),
            saw: default_saw_sound(),
            ambience: default_ambience_sound(),
            ambience_volume: default_ambience_volume(),
        }
    }
}

fn default_jump_sound() -> String {
    "sounds/jump.wav".to_string()
}

fn default_saw_sound() -> String {
    "sounds/saw.wav".to_string()
}

fn default_ambience_sound() -> String {
    "sounds/ambience.wav".to_string()
}

fn default_ambience_volume() -> f32 {
    0.3
}

impl SceneConfig {
    /// Loads and validates a scene config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|source| SceneError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges. Called automatically by [`Self::from_path`].
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.camera.damping > 0.0 && self.camera.damping <= 1.0) {
            return Err(SceneError::Invalid(format!(
                "camera.damping must be in (0, 1], got {}",
                self.camera.damping
            )));
        }
        if self.ball.radius <= 0.0 {
            return Err(SceneError::Invalid(format!(
                "ball.radius must be positive, got {}",
                self.ball.radius
            )));
        }
        if self.contact.reveal_delay <= 0.0 {
            return Err(SceneError::Invalid(format!(
                "contact.reveal_delay must be positive, got {}",
                self.contact.reveal_delay
            )));
        }
        if self.steering.force_scale <= 0.0 {
            return Err(SceneError::Invalid(format!(
                "steering.force_scale must be positive, got {}",
                self.steering.force_scale
            )));
        }
        if !(0.0..=1.0).contains(&self.sounds.ambience_volume) {
            return Err(SceneError::Invalid(format!(
                "sounds.ambience_volume must be in [0, 1], got {}",
                self.sounds.ambience_volume
            )));
        }
        if let TreeLayout::Scatter { area, .. } = self.trees
            && area <= 4.0
        {
            return Err(SceneError::Invalid(format!(
                "trees.area must exceed 4.0 to leave room around the spawn, got {area}"
            )));
        }
        Ok(())
    }

    /// Checks that every sound file in the manifest exists under `asset_root`.
    pub fn validate_assets(&self, asset_root: impl AsRef<Path>) -> Result<(), SceneError> {
        let root = asset_root.as_ref();
        for sound in [&self.sounds.jump, &self.sounds.saw, &self.sounds.ambience] {
            let path = root.join(sound);
            if !path.is_file() {
                return Err(SceneError::MissingSound(path));
            }
        }
        Ok(())
    }

    /// Resolves the tree layout into concrete positions.
    ///
    /// Scatter placement is deterministic for a given seed and keeps a 2m
    /// clearance around the ball spawn.
    pub fn tree_positions(&self) -> Vec<[f32; 3]> {
        match &self.trees {
            TreeLayout::Explicit { positions } => positions.clone(),
            TreeLayout::Scatter { count, area, seed } => {
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                let half = area / 2.0;
                let spawn = self.ball.spawn;
                let mut positions = Vec::with_capacity(*count as usize);
                while positions.len() < *count as usize {
                    let x = rng.random_range(-half..half);
                    let z = rng.random_range(-half..half);
                    let dx = x - spawn[0];
                    let dz = z - spawn[2];
                    if dx * dx + dz * dz < 4.0 {
                        continue;
                    }
                    positions.push([x, 0.0, z]);
                }
                positions
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ball.spawn, [0.0, 0.5, 0.0]);
        assert_eq!(config.camera.offset, [0.0, 5.0, 5.0]);
        assert_eq!(config.contact.reveal_delay, 15.0);
        assert_eq!(config.tree_positions().len(), 3);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: SceneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.steering.force_scale, 0.05);
        assert_eq!(config.steering.rest_bias, 0.8);
        assert_eq!(config.sounds.saw, "sounds/saw.wav");
    }

    #[test]
    fn test_round_trip() {
        let config = SceneConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ball.radius, config.ball.radius);
        assert_eq!(back.tree_positions(), config.tree_positions());
    }

    #[test]
    fn test_partial_override() {
        let config: SceneConfig = serde_json::from_str(
            r#"{
                "camera": { "damping": 0.5 },
                "trees": { "mode": "explicit", "positions": [[1.0, 0.0, -5.0]] }
            }"#,
        )
        .unwrap();
        assert_eq!(config.camera.damping, 0.5);
        assert_eq!(config.camera.offset, [0.0, 5.0, 5.0]);
        assert_eq!(config.tree_positions(), vec![[1.0, 0.0, -5.0]]);
    }

    #[test]
    fn test_invalid_damping_rejected() {
        let mut config = SceneConfig::default();
        config.camera.damping = 0.0;
        assert!(matches!(config.validate(), Err(SceneError::Invalid(_))));

        config.camera.damping = 1.5;
        assert!(matches!(config.validate(), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let mut config = SceneConfig::default();
        config.ball.radius = -1.0;
        assert!(matches!(config.validate(), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_invalid_reveal_delay_rejected() {
        let mut config = SceneConfig::default();
        config.contact.reveal_delay = 0.0;
        assert!(matches!(config.validate(), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_invalid_force_scale_rejected() {
        let mut config = SceneConfig::default();
        config.steering.force_scale = 0.0;
        assert!(matches!(config.validate(), Err(SceneError::Invalid(_))));

        config.steering.force_scale = -0.05;
        assert!(matches!(config.validate(), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_invalid_ambience_volume_rejected() {
        let mut config = SceneConfig::default();
        config.sounds.ambience_volume = -0.1;
        assert!(matches!(config.validate(), Err(SceneError::Invalid(_))));

        config.sounds.ambience_volume = 1.5;
        assert!(matches!(config.validate(), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let config = SceneConfig {
            trees: TreeLayout::Scatter {
                count: 8,
                area: 40.0,
                seed: 7,
            },
            ..Default::default()
        };
        let a = config.tree_positions();
        let b = config.tree_positions();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn test_scatter_respects_spawn_clearance() {
        let config = SceneConfig {
            trees: TreeLayout::Scatter {
                count: 32,
                area: 10.0,
                seed: 3,
            },
            ..Default::default()
        };
        for pos in config.tree_positions() {
            let dx = pos[0] - config.ball.spawn[0];
            let dz = pos[2] - config.ball.spawn[2];
            assert!(dx * dx + dz * dz >= 4.0);
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SceneConfig::from_path("/nonexistent/scene.json").unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
    }

    #[test]
    fn test_missing_sound_reported() {
        let config = SceneConfig::default();
        let dir = std::env::temp_dir().join("grove-missing-sounds");
        std::fs::create_dir_all(&dir).unwrap();
        let err = config.validate_assets(&dir).unwrap_err();
        assert!(matches!(err, SceneError::MissingSound(_)));
    }
}
