//! Brick Sandbox Library
//!
//! Keeps a set of box-shaped bricks resting on a ground plane and guarantees
//! that no two of them overlap. Bricks are added near the origin, at random,
//! or dragged around by a pointer ray; every change goes through an
//! [`Engine`] command.

pub mod brick;
pub mod camera;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod world;

pub use brick::{Brick, BrickId, BrickSize, Rgb};
pub use config::WorldConfig;
pub use engine::{Command, Engine, Outcome};
pub use error::PlacementError;
pub use world::World;
