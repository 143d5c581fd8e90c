//=========================================================================
// Scene Composer
//=========================================================================
//
// Lays out the arena backdrop: floating platforms, avatars or bots, power
// orbs, lighting, a star field, the title text and the orbit camera.
// `compose` samples every entity at one instant and returns a `Frame`
// borrowing from the composer.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

//=== Internal Dependencies ===============================================

use super::entity::{AnimatedEntity, AnimationProfile, ColorToken, Shape, Transform};

//=== Scene Furniture =====================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient { intensity: f32 },
    Point { position: Vec3, intensity: f32, color: ColorToken },
}

pub const LIGHTS: [Light; 3] = [
    Light::Ambient { intensity: 0.3 },
    Light::Point {
        position: Vec3::new(10.0, 10.0, 10.0),
        intensity: 1.0,
        color: ColorToken::hex(0x00AAFF),
    },
    Light::Point {
        position: Vec3::new(-10.0, 5.0, -10.0),
        intensity: 0.5,
        color: ColorToken::hex(0xFF00AA),
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarField {
    pub radius: f32,
    pub depth: f32,
    pub count: u32,
    pub factor: f32,
}

pub const STAR_FIELD: StarField = StarField { radius: 100.0, depth: 50.0, count: 5000, factor: 4.0 };

/// Orbit camera; panning is disabled and it never dips below the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub fov_degrees: f32,
    pub max_polar_angle: f32,
}

pub const CAMERA: Camera = Camera {
    position: Vec3::new(0.0, 10.0, 15.0),
    fov_degrees: 75.0,
    max_polar_angle: FRAC_PI_2,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleText {
    pub text: &'static str,
    pub position: Vec3,
    pub font_size: f32,
    pub color: ColorToken,
}

//=== Entity Layouts ======================================================

const PLATFORM_SIZE: Vec3 = Vec3::new(4.0, 0.5, 4.0);
const ORB_RADIUS: f32 = 0.3;

const PLATFORMS: [(Vec3, u32); 5] = [
    (Vec3::new(0.0, 0.0, 0.0), 0x0088FF),
    (Vec3::new(8.0, 3.0, -5.0), 0xFF0088),
    (Vec3::new(-6.0, 5.0, 8.0), 0x00FF88),
    (Vec3::new(5.0, -2.0, 12.0), 0xFFAA00),
    (Vec3::new(-8.0, 8.0, -8.0), 0xAA00FF),
];

const ORBS: [(Vec3, u32); 3] = [
    (Vec3::new(0.0, 8.0, 0.0), 0xFFFF00),
    (Vec3::new(-10.0, 3.0, 5.0), 0xFF0000),
    (Vec3::new(12.0, 6.0, -3.0), 0x00FF00),
];

const PLAYER_POSITIONS: [Vec3; 3] = [
    Vec3::new(2.0, 3.0, 2.0),
    Vec3::new(-3.0, 6.0, -4.0),
    Vec3::new(6.0, 1.0, 8.0),
];

const PILOT_POSITION: Vec3 = Vec3::new(0.0, 3.0, 2.0);

const BOT_POSITIONS: [Vec3; 3] = [
    Vec3::new(-3.0, 6.0, -4.0),
    Vec3::new(6.0, 1.0, 8.0),
    Vec3::new(-8.0, 4.0, 5.0),
];

const ALLY_BODY: u32 = 0x00FFAA;
const ALLY_PACK: u32 = 0xFF6600;
const ALLY_FLAME: u32 = 0xFFAA00;
const BOT_BODY: u32 = 0xFF4444;
const BOT_PACK: u32 = 0x880000;
const BOT_FLAME: u32 = 0xFF8800;

//=== Frame ===============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedEntity<'a> {
    pub entity: &'a AnimatedEntity,
    pub transform: Transform,
}

/// Everything needed to draw one arena frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub elapsed: f32,
    pub entities: Vec<RenderedEntity<'a>>,
    pub lights: &'a [Light],
    pub stars: StarField,
    pub camera: Camera,
    pub title: TitleText,
}

//=== SceneComposer =======================================================

#[derive(Debug, Clone)]
pub struct SceneComposer {
    entities: Vec<AnimatedEntity>,
    title: TitleText,
}

impl SceneComposer {
    /// Multiplayer arena: five platforms, three allied avatars, three orbs.
    pub fn multiplayer() -> Self {
        let avatars = PLAYER_POSITIONS.iter().map(|&position| {
            (position, ALLY_BODY, avatar(ALLY_PACK, ALLY_FLAME), AnimationProfile::Player)
        });
        Self::build("JETPACK SKY WARS", avatars)
    }

    /// Training arena: five platforms, the pilot, three bots, three orbs.
    pub fn single_player() -> Self {
        let pilot = std::iter::once((
            PILOT_POSITION,
            ALLY_BODY,
            avatar(ALLY_PACK, ALLY_FLAME),
            AnimationProfile::Pilot,
        ));
        let bots = (1u32..).zip(BOT_POSITIONS).map(|(bot_id, position)| {
            (position, BOT_BODY, avatar(BOT_PACK, BOT_FLAME), AnimationProfile::Bot { bot_id })
        });
        Self::build("SINGLE PLAYER MODE", pilot.chain(bots))
    }

    fn build(
        title: &'static str,
        avatars: impl Iterator<Item = (Vec3, u32, Shape, AnimationProfile)>,
    ) -> Self {
        let platforms = PLATFORMS.iter().map(|&(position, color)| {
            (position, color, Shape::Box { size: PLATFORM_SIZE }, AnimationProfile::Platform)
        });
        let orbs = ORBS.iter().map(|&(position, color)| {
            (position, color, Shape::Sphere { radius: ORB_RADIUS }, AnimationProfile::Orb)
        });

        let entities = platforms
            .chain(avatars)
            .chain(orbs)
            .zip(0u32..)
            .map(|((base, color, shape, profile), id)| {
                AnimatedEntity::new(id, base, ColorToken::hex(color), shape, profile)
            })
            .collect();

        Self {
            entities,
            title: TitleText {
                text: title,
                position: Vec3::new(0.0, 15.0, 0.0),
                font_size: 3.0,
                color: ColorToken::hex(0x00AAFF),
            },
        }
    }

    pub fn entities(&self) -> &[AnimatedEntity] {
        &self.entities
    }

    pub fn title(&self) -> &TitleText {
        &self.title
    }

    pub fn bot_count(&self) -> usize {
        self.count_where(|p| matches!(p, AnimationProfile::Bot { .. }))
    }

    pub fn count_where(&self, predicate: impl Fn(&AnimationProfile) -> bool) -> usize {
        self.entities.iter().filter(|e| predicate(&e.profile)).count()
    }

    /// Samples every entity at `elapsed` seconds.
    pub fn compose(&self, elapsed: f32) -> Frame<'_> {
        Frame {
            elapsed,
            entities: self
                .entities
                .iter()
                .map(|entity| RenderedEntity { entity, transform: entity.transform_at(elapsed) })
                .collect(),
            lights: &LIGHTS,
            stars: STAR_FIELD,
            camera: CAMERA,
            title: self.title,
        }
    }
}

fn avatar(pack: u32, flame: u32) -> Shape {
    Shape::Avatar { pack: ColorToken::hex(pack), flame: ColorToken::hex(flame) }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplayer_layout() {
        let composer = SceneComposer::multiplayer();
        assert_eq!(composer.entities().len(), 11);
        assert_eq!(composer.count_where(|p| *p == AnimationProfile::Platform), 5);
        assert_eq!(composer.count_where(|p| *p == AnimationProfile::Player), 3);
        assert_eq!(composer.count_where(|p| *p == AnimationProfile::Orb), 3);
        assert_eq!(composer.bot_count(), 0);
        assert_eq!(composer.title().text, "JETPACK SKY WARS");
    }

    #[test]
    fn single_player_layout() {
        let composer = SceneComposer::single_player();
        assert_eq!(composer.entities().len(), 12);
        assert_eq!(composer.count_where(|p| *p == AnimationProfile::Pilot), 1);
        assert_eq!(composer.bot_count(), 3);
        assert_eq!(composer.title().text, "SINGLE PLAYER MODE");

        let bot_ids: Vec<u32> = composer
            .entities()
            .iter()
            .filter_map(|e| match e.profile {
                AnimationProfile::Bot { bot_id } => Some(bot_id),
                _ => None,
            })
            .collect();
        assert_eq!(bot_ids, vec![1, 2, 3]);
    }

    #[test]
    fn entity_ids_are_unique() {
        let composer = SceneComposer::single_player();
        let mut ids: Vec<u32> = composer.entities().iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), composer.entities().len());
    }

    #[test]
    fn bots_are_red() {
        let composer = SceneComposer::single_player();
        for bot in composer.entities().iter().filter(|e| matches!(e.profile, AnimationProfile::Bot { .. })) {
            assert_eq!(bot.color.to_string(), "#FF4444");
        }
    }

    #[test]
    fn frame_samples_each_entity() {
        let composer = SceneComposer::multiplayer();
        let frame = composer.compose(2.5);

        assert_eq!(frame.elapsed, 2.5);
        assert_eq!(frame.entities.len(), composer.entities().len());
        for rendered in &frame.entities {
            assert_eq!(rendered.transform, rendered.entity.transform_at(2.5));
        }
        assert_eq!(frame.lights.len(), 3);
        assert_eq!(frame.stars.count, 5000);
        assert_eq!(frame.camera.position, Vec3::new(0.0, 10.0, 15.0));
    }

    #[test]
    fn frames_are_deterministic() {
        let composer = SceneComposer::single_player();
        assert_eq!(composer.compose(7.0), composer.compose(7.0));
    }
}
