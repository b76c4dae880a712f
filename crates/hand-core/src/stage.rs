//! Lighting rig, ground grid and background of the hand scene.

use crate::constants::*;
use crate::geometry::{grid_lines, LineVertex};
use glam::Vec3;

/// Convert a packed `0xRRGGBB` sRGB color into linear RGB.
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Directional light shining from `position` towards the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
}

impl DirectionalLight {
    /// Unit vector pointing from the scene towards the light.
    pub fn to_light(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero.
    pub range: f32,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub size: f32,
    pub divisions: u32,
    pub center_color: [f32; 3],
    pub line_color: [f32; 3],
}

impl GridSpec {
    pub fn lines(&self) -> Vec<LineVertex> {
        grid_lines(self.size, self.divisions, self.center_color, self.line_color)
    }
}

/// Everything about the scene that is not part of the hand.
#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub background: [f32; 3],
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    pub accents: [PointLight; 2],
    pub grid: GridSpec,
    pub shadows: bool,
    pub antialias: bool,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            background: hex_to_linear(BACKGROUND_HEX),
            ambient: AmbientLight {
                color: hex_to_linear(AMBIENT_HEX),
                intensity: AMBIENT_INTENSITY,
            },
            sun: DirectionalLight {
                color: hex_to_linear(SUN_HEX),
                intensity: SUN_INTENSITY,
                position: Vec3::from(SUN_POSITION),
                cast_shadow: true,
            },
            accents: ACCENT_LIGHTS.map(|(hex, intensity, range, position)| PointLight {
                color: hex_to_linear(hex),
                intensity,
                range,
                position: Vec3::from(position),
            }),
            grid: GridSpec {
                size: GRID_SIZE,
                divisions: GRID_DIVISIONS,
                center_color: hex_to_linear(GRID_CENTER_HEX),
                line_color: hex_to_linear(GRID_LINE_HEX),
            },
            shadows: true,
            antialias: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_linear_endpoints() {
        assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
        for c in hex_to_linear(0xffffff) {
            assert!((c - 1.0).abs() < 1e-5);
        }
        let [r, g, b] = hex_to_linear(0x0044ff);
        assert_eq!(r, 0.0);
        assert!(g > 0.0 && g < 0.1);
        assert!((b - 1.0).abs() < 1e-5);
    }

    #[test]
    fn default_stage_has_four_lights_and_one_shadow_caster() {
        let stage = Stage::default();
        assert_eq!(stage.accents.len(), 2);
        assert!(stage.shadows && stage.sun.cast_shadow);
        assert_ne!(stage.accents[0].color, stage.accents[1].color);
    }
}
