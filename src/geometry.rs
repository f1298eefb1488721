//! Axis-aligned box math: overlap tests, rays, and grid snapping.
//!
//! All boxes are described by a center and full extents (width, height, depth)
//! rather than min/max corners, since that is how bricks store themselves.

use glam::Vec3;

/// Returns true if two axis-aligned boxes intersect.
///
/// Boxes overlap iff on every axis the distance between centers is strictly
/// less than the average of their extents. Faces that exactly touch do not
/// count as overlapping, so bricks can sit flush against each other.
#[inline]
pub fn overlaps(
    candidate_position: Vec3,
    candidate_size: Vec3,
    existing_position: Vec3,
    existing_size: Vec3,
) -> bool {
    let delta = (candidate_position - existing_position).abs();
    let reach = (candidate_size + existing_size) / 2.0;
    delta.cmplt(reach).all()
}

/// Returns the (min, max) corners of a box given its center and extents.
#[inline]
pub fn corners(position: Vec3, size: Vec3) -> (Vec3, Vec3) {
    let half = size / 2.0;
    (position - half, position + half)
}

/// Rounds x and z to the nearest integer cell, leaving y untouched.
#[inline]
pub fn snap_to_grid(position: Vec3) -> Vec3 {
    Vec3::new(position.x.round(), position.y, position.z.round())
}

/// A half-line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit-length direction.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Builds the pointer ray through a screen pixel for a perspective camera.
    ///
    /// `cursor` and `viewport` are in pixels with the origin at the top-left
    /// corner; `fov_y` is the vertical field of view in radians.
    pub fn from_screen(
        cursor: (f32, f32),
        viewport: (f32, f32),
        eye: Vec3,
        target: Vec3,
        fov_y: f32,
    ) -> Self {
        let (width, height) = (viewport.0.max(1.0), viewport.1.max(1.0));
        let ndc_x = 2.0 * cursor.0 / width - 1.0;
        // screen y grows downward
        let ndc_y = 1.0 - 2.0 * cursor.1 / height;

        let forward = (target - eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        let half_fov_tan = (fov_y / 2.0).tan();
        let aspect = width / height;
        let direction =
            forward + right * ndc_x * half_fov_tan * aspect + up * ndc_y * half_fov_tan;

        Self::new(eye, direction)
    }

    /// Returns the point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test against a box; returns the distance to the nearest hit.
    ///
    /// A ray starting inside the box reports the exit distance. Hits behind
    /// the origin are ignored.
    pub fn intersect_box(&self, position: Vec3, size: Vec3) -> Option<f32> {
        let (min, max) = corners(position, size);

        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let origin = self.origin[axis];
            let direction = self.direction[axis];
            if direction.abs() < 1e-8 {
                // parallel to this slab: must already lie between its planes
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / direction;
            let t1 = (min[axis] - origin) * inv;
            let t2 = (max[axis] - origin) * inv;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
        }

        if t_max < t_min || t_max < 0.0 {
            None
        } else if t_min >= 0.0 {
            Some(t_min)
        } else {
            Some(t_max)
        }
    }

    /// Intersects the ground plane `y = 0` within a square of side `extent`
    /// centered at the origin.
    pub fn intersect_ground(&self, extent: f32) -> Option<Vec3> {
        if self.direction.y >= -1e-8 {
            return None;
        }
        let t = -self.origin.y / self.direction.y;
        if t < 0.0 {
            return None;
        }
        let hit = self.at(t);
        let half = extent / 2.0;
        if hit.x.abs() > half || hit.z.abs() > half {
            return None;
        }
        Some(Vec3::new(hit.x, 0.0, hit.z))
    }
}
