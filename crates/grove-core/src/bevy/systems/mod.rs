//! Game systems.

pub mod audio;
pub mod camera;
pub mod contact;
pub mod input;
pub mod rendering;
pub mod scene;
pub mod tilt;

pub use audio::{play_sound_effects, setup_sound_bank};
pub use camera::update_chase_camera;
pub use contact::{detect_tree_hits, handle_tree_hits, reveal_hidden_trees};
pub use input::{handle_tap, keyboard_tilt};
pub use rendering::{
    attach_ball_visuals, attach_ground_visuals, attach_tree_visuals, setup_camera, setup_lighting,
};
pub use scene::spawn_scene;
pub use tilt::{apply_jump, apply_tilt_force};
