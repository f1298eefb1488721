//! Searches for free ground positions for new bricks.
//!
//! Two policies with different failure reporting:
//! - [`find_slot`] walks two rays out from the origin (+X, then +Z at each
//!   offset) and fails with [`PlacementError::NoSlotFound`].
//! - [`find_random_slot`] samples random positions for a fixed size and fails
//!   with [`PlacementError::RandomPlacementAbandoned`].
//!
//! Neither search mutates the world; callers insert the returned position.

use glam::Vec3;
use rand::Rng;

use crate::brick::BrickSize;
use crate::config::WorldConfig;
use crate::error::{PlacementError, Result};
use crate::world::World;

/// Finds the first free position for `size` along the +X and +Z rays.
///
/// The origin is tried first. After that, each offset in `1..max_offset` tries
/// `(offset, y, 0)` before `(0, y, offset)`. Free space at negative offsets or
/// off the two rays is never considered.
pub fn find_slot(world: &World, size: BrickSize, config: &WorldConfig) -> Result<Vec3> {
    let y = size.resting_y();
    let origin = Vec3::new(0.0, y, 0.0);
    if !world.any_collision(origin, size, None) {
        return Ok(origin);
    }

    for offset in 1..config.max_offset() {
        let offset = offset as f32;
        let along_x = Vec3::new(offset, y, 0.0);
        if !world.any_collision(along_x, size, None) {
            return Ok(along_x);
        }
        let along_z = Vec3::new(0.0, y, offset);
        if !world.any_collision(along_z, size, None) {
            return Ok(along_z);
        }
    }

    log::debug!(
        "slot search exhausted {} offsets for {size}",
        config.max_offset()
    );
    Err(PlacementError::NoSlotFound { size })
}

/// Samples random integer ground positions until one is free for `size`.
///
/// x and z are drawn from `-random_extent..random_extent`; the size stays
/// fixed across attempts.
pub fn find_random_slot(
    world: &World,
    size: BrickSize,
    config: &WorldConfig,
    rng: &mut impl Rng,
) -> Result<Vec3> {
    let extent = config.random_extent.max(1);
    let y = size.resting_y();

    for attempt in 1..=config.random_attempts {
        let candidate = Vec3::new(
            rng.gen_range(-extent..extent) as f32,
            y,
            rng.gen_range(-extent..extent) as f32,
        );
        if !world.any_collision(candidate, size, None) {
            log::trace!("random slot {candidate} found on attempt {attempt}");
            return Ok(candidate);
        }
    }

    Err(PlacementError::RandomPlacementAbandoned {
        attempts: config.random_attempts,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brick::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SLAB: BrickSize = BrickSize::new(2.0, 1.0, 2.0);
    const UNIT: BrickSize = BrickSize::new(1.0, 1.0, 1.0);

    #[test]
    fn test_empty_world_places_at_origin() {
        let world = World::new();
        let position = find_slot(&world, SLAB, &WorldConfig::default());
        assert_eq!(position, Ok(Vec3::new(0.0, 0.5, 0.0)));
    }

    #[test]
    fn test_origin_height_follows_size() {
        let world = World::new();
        let tall = BrickSize::new(1.0, 3.0, 1.0);
        let position = find_slot(&world, tall, &WorldConfig::default());
        assert_eq!(position, Ok(Vec3::new(0.0, 1.5, 0.0)));
    }

    #[test]
    fn test_blocked_origin_prefers_x_ray() {
        let mut world = World::new();
        world.insert(SLAB, Rgb::default(), Vec3::new(0.0, 0.5, 0.0));

        // offset 1 still overlaps by a unit on both rays; offset 2 is flush
        let position = find_slot(&world, SLAB, &WorldConfig::default());
        assert_eq!(position, Ok(Vec3::new(2.0, 0.5, 0.0)));
        assert_ne!(position, Ok(Vec3::new(0.0, 0.5, 2.0)));
    }

    #[test]
    fn test_x_ray_blocked_falls_back_to_z_ray() {
        let mut world = World::new();
        world.insert(UNIT, Rgb::default(), Vec3::new(0.0, 0.5, 0.0));
        world.insert(UNIT, Rgb::default(), Vec3::new(1.0, 0.5, 0.0));

        let position = find_slot(&world, UNIT, &WorldConfig::default());
        assert_eq!(position, Ok(Vec3::new(0.0, 0.5, 1.0)));
    }

    #[test]
    fn test_exhausted_rays_report_no_slot() {
        let config = WorldConfig {
            grid_size: 24,
            ..WorldConfig::default()
        };
        let mut world = World::new();
        world.insert(UNIT, Rgb::default(), Vec3::new(0.0, 0.5, 0.0));
        for offset in 1..config.max_offset() {
            let offset = offset as f32;
            world.insert(UNIT, Rgb::default(), Vec3::new(offset, 0.5, 0.0));
            world.insert(UNIT, Rgb::default(), Vec3::new(0.0, 0.5, offset));
        }

        let result = find_slot(&world, UNIT, &config);
        assert_eq!(result, Err(PlacementError::NoSlotFound { size: UNIT }));
        // free space at negative offsets is not explored
        assert!(!world.any_collision(Vec3::new(-1.0, 0.5, 0.0), UNIT, None));
    }

    #[test]
    fn test_random_slot_is_free_and_in_range() {
        let config = WorldConfig::default();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let size = BrickSize::random(&mut rng);
            if let Ok(position) = find_random_slot(&world, size, &config, &mut rng) {
                assert!((-10.0..10.0).contains(&position.x));
                assert!((-10.0..10.0).contains(&position.z));
                assert_eq!(position.y, size.resting_y());
                world.insert(size, Rgb::random(&mut rng), position);
            }
        }
        assert!(world.is_consistent());
    }

    #[test]
    fn test_random_slot_abandons_when_region_is_full() {
        // x and z are always -1 or 0, all covered by the big slab
        let config = WorldConfig {
            random_extent: 1,
            random_attempts: 5,
            ..WorldConfig::default()
        };
        let mut world = World::new();
        world.insert(BrickSize::new(4.0, 1.0, 4.0), Rgb::default(), Vec3::new(-0.5, 0.5, -0.5));
        let mut rng = StdRng::seed_from_u64(1);

        let result = find_random_slot(&world, UNIT, &config, &mut rng);
        assert_eq!(
            result,
            Err(PlacementError::RandomPlacementAbandoned {
                attempts: 5,
                size: UNIT
            })
        );
    }
}
