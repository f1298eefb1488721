//! Brick definitions: identity, size, color, and random sampling.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::Rng;

/// Opaque brick identity, assigned by the world in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrickId(pub(crate) u32);

impl BrickId {
    /// Returns the single-character label used in text layouts.
    ///
    /// Ids 0-9 map to digits, 10-35 to `A`-`Z`, anything larger to `*`.
    pub fn label(self) -> char {
        match self.0 {
            n @ 0..=9 => char::from(b'0' + n as u8),
            n @ 10..=35 => char::from(b'A' + (n - 10) as u8),
            _ => '*',
        }
    }
}

impl fmt::Display for BrickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An RGB color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Samples a uniformly random color.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// Returns the channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        // classic brick red
        Self::new(0xd0, 0x1c, 0x1f)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when a color string is not `#rrggbb` or `rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}, expected #rrggbb")]
pub struct ParseRgbError(String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseRgbError(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseRgbError(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Brick extents along x (width), y (height), and z (depth).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrickSize {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl BrickSize {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Samples a random size: width and depth in `1..=4`, height in `1..=3`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(
            rng.gen_range(1..=4) as f32,
            rng.gen_range(1..=3) as f32,
            rng.gen_range(1..=4) as f32,
        )
    }

    /// Height at which a brick's center sits when resting on the ground.
    #[inline]
    pub fn resting_y(&self) -> f32 {
        self.height / 2.0
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

impl Default for BrickSize {
    fn default() -> Self {
        Self::new(2.0, 1.0, 4.0)
    }
}

impl fmt::Display for BrickSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

/// A placed brick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brick {
    pub id: BrickId,
    pub size: BrickSize,
    pub color: Rgb,
    /// Center of the brick; `y` always equals `size.resting_y()`.
    pub position: Vec3,
}

impl Brick {
    /// Returns the brick-local centers of its top studs, one per unit cell.
    pub fn stud_offsets(&self) -> Vec<Vec3> {
        let columns = self.size.width.floor().max(0.0) as u32;
        let rows = self.size.depth.floor().max(0.0) as u32;
        let top = self.size.height / 2.0 + 0.1;

        (0..columns)
            .flat_map(|i| {
                (0..rows).map(move |j| {
                    Vec3::new(
                        -self.size.width / 2.0 + 0.5 + i as f32,
                        top,
                        -self.size.depth / 2.0 + 0.5 + j as f32,
                    )
                })
            })
            .collect()
    }

    /// Returns the half-unit ground cells covered by this brick's footprint.
    ///
    /// Cell `(i, k)` spans `[i / 2, (i + 1) / 2)` on x and the same on z, which
    /// keeps odd and even extents exact for bricks centered on integer cells.
    pub fn footprint(&self) -> impl Iterator<Item = (i32, i32)> {
        let (min, max) = crate::geometry::corners(self.position, self.size.to_vec3());
        let (x0, x1) = ((min.x * 2.0).floor() as i32, (max.x * 2.0).ceil() as i32);
        let (z0, z1) = ((min.z * 2.0).floor() as i32, (max.z * 2.0).ceil() as i32);
        (x0..x1).flat_map(move |x| (z0..z1).map(move |z| (x, z)))
    }
}
