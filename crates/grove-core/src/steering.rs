//! Pure steering math: chase-camera damping, tilt-to-force mapping, and the
//! tap hit-test. No engine state is touched here, so everything is directly
//! unit-testable.

use bevy::math::Vec3;

/// Fixed offset of the chase camera above and behind the ball.
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 5.0);

/// Per-tick blend weight of the camera smoothing filter.
pub const CAMERA_DAMPING: f32 = 0.3;

/// Scales raw tilt sensor units into velocity-delta units.
pub const TILT_FORCE_SCALE: f32 = 0.05;

/// Calibration offset compensating for the device's resting tilt.
pub const TILT_REST_BIAS: f32 = 0.8;

/// Instantaneous velocity change for the tap jump and the tree bounce.
pub const JUMP_IMPULSE: Vec3 = Vec3::new(0.0, 4.0, -2.0);

/// Seconds a tree stays hidden after contact.
pub const TREE_REVEAL_DELAY: f32 = 15.0;

/// Target position for the chase camera: a fixed offset from the ball.
pub fn chase_target(ball_pos: Vec3, offset: Vec3) -> Vec3 {
    ball_pos + offset
}

/// One-pole smoothing step: `current * (1 - d) + target * d`.
///
/// Repeated application converges geometrically toward `target`; the error
/// shrinks by a factor of `1 - d` per step. The blend is per step, not per
/// second, so it assumes a fixed tick rate.
pub fn damp_toward(current: Vec3, target: Vec3, damping: f32) -> Vec3 {
    current * (1.0 - damping) + target * damping
}

/// Maps a tilt sample to the velocity nudge added to the ball each tick.
///
/// The x component steers sideways; the y component (plus the rest bias)
/// drives the ball forward along -z. A zero sample still produces
/// `(0, 0, -bias * scale)` from the rest bias alone.
pub fn tilt_force(sample: Vec3, scale: f32, rest_bias: f32) -> Vec3 {
    Vec3::new(sample.x * scale, 0.0, (sample.y + rest_bias) * -scale)
}

/// Ray/sphere intersection test used by the tap handler.
///
/// Returns true if the ray starting at `origin` in direction `dir` passes
/// within `radius` of `center`, in front of the origin.
pub fn ray_hits_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> bool {
    let dir = dir.normalize_or_zero();
    if dir == Vec3::ZERO {
        return false;
    }
    let to_center = center - origin;
    let along = to_center.dot(dir);
    if along < 0.0 {
        return false;
    }
    let closest_sq = to_center.length_squared() - along * along;
    closest_sq <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_close(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < 1e-5,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn damping_blends_seventy_thirty() {
        let cam = Vec3::new(10.0, 10.0, 10.0);
        let target = Vec3::new(0.0, 5.0, 5.0);
        let next = damp_toward(cam, target, 0.3);
        assert_vec3_close(next, cam * 0.7 + target * 0.3);
    }

    #[test]
    fn damping_converges_geometrically() {
        let target = Vec3::new(3.0, 8.0, -4.0);
        let mut cam = Vec3::new(-20.0, 0.0, 50.0);
        let mut err = (cam - target).length();
        for _ in 0..30 {
            cam = damp_toward(cam, target, 0.3);
            let next_err = (cam - target).length();
            // Error shrinks by a factor of 0.7 each step.
            assert!(next_err <= err * 0.7 + 1e-5);
            err = next_err;
        }
        assert!(err < 1e-2);
    }

    #[test]
    fn damping_is_stationary_at_target() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        assert_vec3_close(damp_toward(target, target, 0.3), target);
    }

    #[test]
    fn zero_tilt_yields_rest_bias_drift() {
        let force = tilt_force(Vec3::ZERO, 0.05, 0.8);
        assert_vec3_close(force, Vec3::new(0.0, 0.0, -0.04));
    }

    #[test]
    fn tilt_maps_to_scaled_force() {
        let force = tilt_force(Vec3::new(1.0, 0.2, 0.0), 0.05, 0.8);
        assert_vec3_close(force, Vec3::new(0.05, 0.0, -0.05));
    }

    #[test]
    fn tilt_z_component_is_ignored() {
        let a = tilt_force(Vec3::new(0.3, -0.1, 0.0), 0.05, 0.8);
        let b = tilt_force(Vec3::new(0.3, -0.1, 9.0), 0.05, 0.8);
        assert_vec3_close(a, b);
    }

    #[test]
    fn chase_target_is_fixed_offset() {
        let target = chase_target(Vec3::new(1.0, 2.0, -7.0), CAMERA_OFFSET);
        assert_vec3_close(target, Vec3::new(1.0, 7.0, -2.0));
    }

    #[test]
    fn ray_hits_centered_sphere() {
        assert!(ray_hits_sphere(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            0.5,
        ));
    }

    #[test]
    fn ray_misses_offset_sphere() {
        assert!(!ray_hits_sphere(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(2.0, 0.0, 0.0),
            0.5,
        ));
    }

    #[test]
    fn ray_ignores_sphere_behind_origin() {
        assert!(!ray_hits_sphere(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::ZERO,
            0.5,
        ));
    }

    #[test]
    fn grazing_ray_hits_at_radius() {
        assert!(ray_hits_sphere(
            Vec3::new(0.49, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            0.5,
        ));
    }
}
