//! The placement set: every brick on the ground plus the current selection.
//!
//! The world is the single owner of brick state. Renderers read it through
//! [`World::bricks`] and never hold their own copy.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::brick::{Brick, BrickId, BrickSize, Rgb};
use crate::geometry::{overlaps, Ray};

/// Bricks keyed by id, plus which one (if any) is being dragged.
#[derive(Clone, Debug, Default)]
pub struct World {
    bricks: FxHashMap<BrickId, Brick>,
    selected: Option<BrickId>,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        self.bricks.get(&id)
    }

    /// Iterates bricks in no particular order.
    pub fn bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.values()
    }

    /// Returns bricks sorted by id, for stable output.
    pub fn sorted_bricks(&self) -> Vec<&Brick> {
        let mut bricks: Vec<&Brick> = self.bricks.values().collect();
        bricks.sort_by_key(|brick| brick.id);
        bricks
    }

    pub fn selected(&self) -> Option<BrickId> {
        self.selected
    }

    /// Returns true if a box at `position` would overlap any brick other
    /// than `exclude`.
    pub fn any_collision(&self, position: Vec3, size: BrickSize, exclude: Option<BrickId>) -> bool {
        let size = size.to_vec3();
        self.bricks
            .values()
            .filter(|brick| Some(brick.id) != exclude)
            .any(|brick| overlaps(position, size, brick.position, brick.size.to_vec3()))
    }

    /// Inserts a brick at a position already known to be free.
    ///
    /// Callers go through the placement searches, which check collisions
    /// first; this only asserts the invariant in debug builds.
    pub(crate) fn insert(&mut self, size: BrickSize, color: Rgb, position: Vec3) -> BrickId {
        debug_assert!(
            !self.any_collision(position, size, None),
            "inserting overlapping brick at {position}"
        );
        let id = BrickId(self.next_id);
        self.next_id += 1;
        self.bricks.insert(
            id,
            Brick {
                id,
                size,
                color,
                position,
            },
        );
        id
    }

    /// Moves a brick if its new footprint is clear of every other brick.
    ///
    /// Returns false (and leaves the brick in place) on collision or if the
    /// id is unknown. The brick is excluded from its own collision check, so
    /// moving onto its current position always succeeds.
    pub fn try_move(&mut self, id: BrickId, target: Vec3) -> bool {
        let Some(size) = self.bricks.get(&id).map(|brick| brick.size) else {
            return false;
        };
        let target = Vec3::new(target.x, size.resting_y(), target.z);
        if self.any_collision(target, size, Some(id)) {
            return false;
        }
        if let Some(brick) = self.bricks.get_mut(&id) {
            brick.position = target;
        }
        true
    }

    /// Returns the brick nearest along the ray, if any is hit.
    pub fn pick(&self, ray: &Ray) -> Option<BrickId> {
        self.bricks
            .values()
            .filter_map(|brick| {
                ray.intersect_box(brick.position, brick.size.to_vec3())
                    .map(|t| (t, brick.id))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, id)| id)
    }

    /// Replaces the selection; `None` clears it.
    pub fn select(&mut self, id: Option<BrickId>) {
        self.selected = id.filter(|id| self.bricks.contains_key(id));
    }

    /// Returns true if no two bricks overlap.
    pub fn is_consistent(&self) -> bool {
        let bricks = self.sorted_bricks();
        bricks.iter().enumerate().all(|(i, a)| {
            bricks[i + 1..].iter().all(|b| {
                !overlaps(
                    a.position,
                    a.size.to_vec3(),
                    b.position,
                    b.size.to_vec3(),
                )
            })
        })
    }

    /// Formats a top-down map of the world as text.
    ///
    /// Each character is a half-unit ground cell labelled with the id of the
    /// brick covering it, or `.` for empty ground. Rows run from the smallest
    /// z to the largest. A brick list follows the map.
    pub fn format_layout(&self) -> String {
        let bricks = self.sorted_bricks();
        if bricks.is_empty() {
            return "(empty)\n".to_string();
        }

        let mut cells: FxHashMap<(i32, i32), char> = FxHashMap::default();
        for brick in &bricks {
            for cell in brick.footprint() {
                cells.insert(cell, brick.id.label());
            }
        }

        let (mut x_min, mut x_max, mut z_min, mut z_max) = (i32::MAX, i32::MIN, i32::MAX, i32::MIN);
        for &(x, z) in cells.keys() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            z_min = z_min.min(z);
            z_max = z_max.max(z);
        }

        let mut output = format!(
            "x {}..{}  z {}..{}\n",
            x_min as f32 / 2.0,
            (x_max + 1) as f32 / 2.0,
            z_min as f32 / 2.0,
            (z_max + 1) as f32 / 2.0,
        );
        for z in z_min..=z_max {
            for x in x_min..=x_max {
                output.push(cells.get(&(x, z)).copied().unwrap_or('.'));
            }
            output.push('\n');
        }
        for brick in &bricks {
            output.push_str(&format!(
                "{} {} {} at ({}, {}, {})\n",
                brick.id.label(),
                brick.size,
                brick.color,
                brick.position.x,
                brick.position.y,
                brick.position.z,
            ));
        }

        output
    }
}
