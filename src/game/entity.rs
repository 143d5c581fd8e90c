//=========================================================================
// Animated Entities
//=========================================================================
//
// Decorative arena objects. An entity never changes after construction;
// its rendered transform is computed from the base position, the elapsed
// time and the entity id alone, so the same inputs always give the same
// pose regardless of frame rate.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::TAU;
use std::fmt;

use glam::Vec3;

//=== Constants ===========================================================

/// Frame rate the spin increments were tuned at.
pub const REFERENCE_FPS: f32 = 60.0;

const PLATFORM_SPIN: f32 = 0.005;
const AVATAR_SPIN: f32 = 0.02;
const ORB_PITCH_SPIN: f32 = 0.02;
const ORB_YAW_SPIN: f32 = 0.03;

//=== ColorToken ==========================================================

/// 24-bit RGB color, written `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken(pub u32);

impl ColorToken {
    pub const fn hex(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    pub fn rgb(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

//=== Shape ===============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box { size: Vec3 },
    Sphere { radius: f32 },
    /// Capsule body with a jetpack and its flame.
    Avatar { pack: ColorToken, flame: ColorToken },
}

//=== AnimationProfile ====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationProfile {
    /// Gentle bob phased by the platform's x position, slow yaw.
    Platform,
    /// Multiplayer avatar: bob and yaw.
    Player,
    /// Single-player pilot: bob only.
    Pilot,
    /// Sweeps a wide orbit around its base; `bot_id` sets the rates.
    Bot { bot_id: u32 },
    /// Fast bob, spins on pitch and yaw.
    Orb,
}

//=== Transform ===========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians (pitch, yaw, roll), each in `[0, TAU)`.
    pub rotation: Vec3,
}

//=== AnimatedEntity ======================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedEntity {
    pub id: u32,
    pub base: Vec3,
    pub color: ColorToken,
    pub shape: Shape,
    pub profile: AnimationProfile,
}

impl AnimatedEntity {
    pub fn new(id: u32, base: Vec3, color: ColorToken, shape: Shape, profile: AnimationProfile) -> Self {
        Self { id, base, color, shape, profile }
    }

    /// Pose at `t` seconds after the arena mounted.
    pub fn transform_at(&self, t: f32) -> Transform {
        let base = self.base;

        match self.profile {
            AnimationProfile::Platform => Transform {
                position: Vec3::new(base.x, base.y + (t + base.x).sin() * 0.2, base.z),
                rotation: Vec3::new(0.0, spin(t, PLATFORM_SPIN), 0.0),
            },
            AnimationProfile::Player => Transform {
                position: Vec3::new(base.x, base.y + (t * 2.0).sin() * 0.3, base.z),
                rotation: Vec3::new(0.0, spin(t, AVATAR_SPIN), 0.0),
            },
            AnimationProfile::Pilot => Transform {
                position: Vec3::new(base.x, base.y + (t * 2.0).sin() * 0.3, base.z),
                rotation: Vec3::ZERO,
            },
            AnimationProfile::Bot { bot_id } => {
                let id = bot_id as f32;
                Transform {
                    position: Vec3::new(
                        base.x + (t * (0.5 + id * 0.2)).sin() * 5.0,
                        base.y + (t * 2.0 + id).sin() * 2.0,
                        base.z + (t * (0.3 + id * 0.15)).cos() * 5.0,
                    ),
                    rotation: Vec3::new(0.0, spin(t, AVATAR_SPIN), 0.0),
                }
            }
            AnimationProfile::Orb => Transform {
                position: Vec3::new(base.x, base.y + (t * 3.0).sin() * 0.5, base.z),
                rotation: Vec3::new(spin(t, ORB_PITCH_SPIN), spin(t, ORB_YAW_SPIN), 0.0),
            },
        }
    }
}

/// Angle reached after `t` seconds at `increment` radians per reference frame.
fn spin(t: f32, increment: f32) -> f32 {
    (t * increment * REFERENCE_FPS).rem_euclid(TAU)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn entity(profile: AnimationProfile, base: Vec3) -> AnimatedEntity {
        AnimatedEntity::new(7, base, ColorToken::hex(0x00AAFF), Shape::Sphere { radius: 0.3 }, profile)
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < EPS
    }

    #[test]
    fn color_formats_as_hex() {
        assert_eq!(ColorToken::hex(0x00AAFF).to_string(), "#00AAFF");
        assert_eq!(ColorToken::hex(0xFF8800).rgb(), [0xFF, 0x88, 0x00]);
        assert_eq!(ColorToken::hex(0x1_000000), ColorToken(0));
    }

    #[test]
    fn everything_rests_at_base_at_time_zero() {
        let base = Vec3::new(0.0, 8.0, 0.0);
        for profile in [AnimationProfile::Player, AnimationProfile::Pilot, AnimationProfile::Orb] {
            let pose = entity(profile, base).transform_at(0.0);
            assert!(close(pose.position, base), "{profile:?}");
            assert!(close(pose.rotation, Vec3::ZERO));
        }
    }

    #[test]
    fn platform_bob_is_phased_by_x() {
        let platform = entity(AnimationProfile::Platform, Vec3::new(8.0, 3.0, -5.0));
        let pose = platform.transform_at(1.5);
        assert!((pose.position.y - (3.0 + (1.5f32 + 8.0).sin() * 0.2)).abs() < EPS);
        assert_eq!(pose.position.x, 8.0);
        assert_eq!(pose.position.z, -5.0);
    }

    #[test]
    fn bot_orbits_around_base() {
        let base = Vec3::new(-3.0, 6.0, -4.0);
        let bot = entity(AnimationProfile::Bot { bot_id: 1 }, base);
        let t = 2.0f32;
        let pose = bot.transform_at(t);

        let expected = Vec3::new(
            base.x + (t * 0.7).sin() * 5.0,
            base.y + (t * 2.0 + 1.0).sin() * 2.0,
            base.z + (t * 0.45).cos() * 5.0,
        );
        assert!(close(pose.position, expected));

        for step in 0..200 {
            let p = bot.transform_at(step as f32 * 0.37).position;
            assert!((p.x - base.x).abs() <= 5.0 + EPS);
            assert!((p.y - base.y).abs() <= 2.0 + EPS);
            assert!((p.z - base.z).abs() <= 5.0 + EPS);
        }
    }

    #[test]
    fn bot_id_changes_the_path() {
        let base = Vec3::new(6.0, 1.0, 8.0);
        let a = entity(AnimationProfile::Bot { bot_id: 1 }, base).transform_at(3.0);
        let b = entity(AnimationProfile::Bot { bot_id: 2 }, base).transform_at(3.0);
        assert!(!close(a.position, b.position));
    }

    #[test]
    fn spin_matches_one_second_of_reference_frames() {
        let orb = entity(AnimationProfile::Orb, Vec3::ZERO).transform_at(1.0);
        assert!((orb.rotation.x - 0.02 * 60.0).abs() < EPS);
        assert!((orb.rotation.y - 0.03 * 60.0).abs() < EPS);

        let pilot = entity(AnimationProfile::Pilot, Vec3::ZERO).transform_at(42.0);
        assert_eq!(pilot.rotation, Vec3::ZERO);
    }

    #[test]
    fn rotation_stays_wrapped() {
        let platform = entity(AnimationProfile::Platform, Vec3::ZERO);
        for t in [0.0, 10.0, 1_000.0] {
            let yaw = platform.transform_at(t).rotation.y;
            assert!((0.0..TAU).contains(&yaw), "yaw {yaw} at t={t}");
        }
    }

    #[test]
    fn transform_is_pure() {
        let bot = entity(AnimationProfile::Bot { bot_id: 3 }, Vec3::new(-8.0, 4.0, 5.0));
        assert_eq!(bot.transform_at(12.25), bot.clone().transform_at(12.25));
    }
}
