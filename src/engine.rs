//! Command-driven placement engine.
//!
//! Front ends translate raw input into [`Command`]s; the engine applies them
//! to its [`World`] one at a time, in order.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::brick::{BrickId, BrickSize, Rgb};
use crate::config::WorldConfig;
use crate::error::Result;
use crate::geometry::{snap_to_grid, Ray};
use crate::placement::{find_random_slot, find_slot};
use crate::world::World;

/// A user action, already decoded from window or CLI input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Add a brick of the given color and size near the origin.
    AddBrick { color: Rgb, size: BrickSize },
    /// Add a brick of random size and color at a random position.
    AddRandomBrick,
    /// Select the brick under the pointer ray, or clear the selection.
    Select { ray: Ray },
    /// Drag the selected brick to where the pointer ray meets the ground.
    Drag { ray: Ray },
    /// Move a brick to a ground position.
    MoveBrick { id: BrickId, target: Vec3 },
    /// Restore the default camera pose.
    ResetCamera,
}

/// What a successfully applied command did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Added(BrickId),
    Selected(Option<BrickId>),
    Moved { id: BrickId, position: Vec3 },
    /// The target overlapped another brick; nothing changed.
    MoveRejected(BrickId),
    /// Nothing selected, or the pointer missed the ground.
    Ignored,
    CameraReset,
}

/// Owns the world and the random source, and applies commands to them.
pub struct Engine {
    world: World,
    config: WorldConfig,
    rng: StdRng,
    status: Option<String>,
}

impl Engine {
    /// Creates an engine seeded from OS entropy.
    pub fn new(config: WorldConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates an engine whose random bricks are reproducible.
    pub fn seeded(config: WorldConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: WorldConfig, rng: StdRng) -> Self {
        Self {
            world: World::new(),
            config,
            rng,
            status: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The last user-facing message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies one command.
    ///
    /// Only the two add commands can fail. An explicit add that finds no slot
    /// sets the status message; a random add that gives up is only logged.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::AddBrick { color, size } => self.add_brick(color, size),
            Command::AddRandomBrick => self.add_random_brick(),
            Command::Select { ray } => {
                let picked = self.world.pick(&ray);
                self.world.select(picked);
                Ok(Outcome::Selected(picked))
            }
            Command::Drag { ray } => Ok(self.drag(&ray)),
            Command::MoveBrick { id, target } => Ok(self.move_brick(id, target)),
            Command::ResetCamera => Ok(Outcome::CameraReset),
        }
    }

    fn add_brick(&mut self, color: Rgb, size: BrickSize) -> Result<Outcome> {
        match find_slot(&self.world, size, &self.config) {
            Ok(position) => {
                let id = self.world.insert(size, color, position);
                log::info!("added brick {id} {size} at {position}");
                self.status = None;
                Ok(Outcome::Added(id))
            }
            Err(error) => {
                log::warn!("{error}");
                self.status = Some("no space available for new brick".to_string());
                Err(error)
            }
        }
    }

    fn add_random_brick(&mut self) -> Result<Outcome> {
        let size = BrickSize::random(&mut self.rng);
        let color = Rgb::random(&mut self.rng);
        match find_random_slot(&self.world, size, &self.config, &mut self.rng) {
            Ok(position) => {
                let id = self.world.insert(size, color, position);
                log::info!("added random brick {id} {size} at {position}");
                Ok(Outcome::Added(id))
            }
            Err(error) => {
                log::debug!("{error}");
                Err(error)
            }
        }
    }

    fn drag(&mut self, ray: &Ray) -> Outcome {
        let Some(id) = self.world.selected() else {
            return Outcome::Ignored;
        };
        match ray.intersect_ground(self.config.ground_extent()) {
            Some(hit) => self.move_brick(id, snap_to_grid(hit)),
            None => Outcome::Ignored,
        }
    }

    fn move_brick(&mut self, id: BrickId, target: Vec3) -> Outcome {
        if self.world.try_move(id, target) {
            let position = self.world.get(id).map_or(target, |brick| brick.position);
            Outcome::Moved { id, position }
        } else {
            log::trace!("move of {id} to {target} rejected");
            Outcome::MoveRejected(id)
        }
    }
}
