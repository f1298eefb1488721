//! Brick Sandbox
//!
//! Places box-shaped bricks on a ground plane without letting them overlap.
//! Bricks can be added next to the origin, scattered at random, and dragged
//! around in an interactive 3D viewer. A headless mode fills a world with
//! random bricks and prints a top-down map of the result.

mod visualization;

use clap::{Args, Parser, Subcommand};

use bricks::config::{DEFAULT_GRID_SIZE, DEFAULT_RANDOM_ATTEMPTS, DEFAULT_RANDOM_EXTENT};
use bricks::engine::Command as BrickCommand;
use bricks::{BrickSize, Engine, Rgb, WorldConfig};

/// Builds non-overlapping brick layouts on a ground plane.
#[derive(Parser)]
#[command(name = "bricks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    world: WorldArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive 3D viewer.
    View,
    /// Add random bricks without a window and print the layout.
    Fill {
        /// Number of random bricks to try to place.
        #[arg(long, short, default_value_t = 20)]
        count: u32,
    },
}

/// World and brick options shared by every mode.
#[derive(Args)]
struct WorldArgs {
    /// Seed for random bricks; omit for a different layout every run.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Side length of the square ground, in world units.
    #[arg(long, global = true, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u32,

    /// Positions sampled for a random brick before giving up.
    #[arg(long, global = true, default_value_t = DEFAULT_RANDOM_ATTEMPTS)]
    random_attempts: u32,

    /// Random bricks land within this many units of the origin.
    #[arg(long, global = true, default_value_t = DEFAULT_RANDOM_EXTENT)]
    random_extent: i32,

    /// Color of bricks added with [B], as #rrggbb.
    #[arg(long, global = true, default_value_t = Rgb::default())]
    color: Rgb,

    /// Width (x) of bricks added with [B].
    #[arg(long, global = true, default_value_t = BrickSize::default().width)]
    width: f32,

    /// Height (y) of bricks added with [B].
    #[arg(long, global = true, default_value_t = BrickSize::default().height)]
    height: f32,

    /// Depth (z) of bricks added with [B].
    #[arg(long, global = true, default_value_t = BrickSize::default().depth)]
    depth: f32,
}

impl WorldArgs {
    fn config(&self) -> WorldConfig {
        WorldConfig {
            grid_size: self.grid_size,
            random_attempts: self.random_attempts,
            random_extent: self.random_extent,
        }
    }

    fn engine(&self) -> Engine {
        match self.seed {
            Some(seed) => Engine::seeded(self.config(), seed),
            None => Engine::new(self.config()),
        }
    }

    fn brick_size(&self) -> Option<BrickSize> {
        let size = BrickSize::new(self.width, self.height, self.depth);
        let positive = [size.width, size.height, size.depth]
            .iter()
            .all(|extent| extent.is_finite() && *extent > 0.0);
        positive.then_some(size)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Fill { count }) => run_fill(&cli.world, count),
        Some(Command::View) | None => run_view(&cli.world),
    }
}

/// Opens the viewer with an empty world.
fn run_view(args: &WorldArgs) {
    let Some(size) = args.brick_size() else {
        eprintln!("Brick width, height and depth must be positive.");
        return;
    };
    println!("Controls: [B] add, [N] random, [C]/[R] reset camera, WASD/QE move, click+move drags");
    visualization::display(args.engine(), args.color, size);
}

/// Adds `count` random bricks and prints the resulting layout.
fn run_fill(args: &WorldArgs, count: u32) {
    let mut engine = args.engine();
    let placed = fill(&mut engine, count);

    print!("{}", engine.world().format_layout());
    println!(
        "Placed {} of {} random bricks ({} abandoned)",
        placed,
        count,
        count - placed
    );
}

/// Issues `count` random-add commands, returning how many succeeded.
fn fill(engine: &mut Engine, count: u32) -> u32 {
    (0..count)
        .filter(|_| engine.apply(BrickCommand::AddRandomBrick).is_ok())
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use bricks::engine::Outcome;
    use bricks::PlacementError;

    #[test]
    fn test_layout_snapshot() {
        let mut engine = Engine::seeded(WorldConfig::default(), 0);
        let bricks = [
            ("#d01c1f", BrickSize::new(2.0, 1.0, 2.0)),
            ("#00ff00", BrickSize::new(1.0, 1.0, 3.0)),
            ("#0000ff", BrickSize::new(3.0, 2.0, 1.0)),
        ];
        for (color, size) in bricks {
            let color = color.parse::<Rgb>().unwrap();
            let outcome = engine.apply(BrickCommand::AddBrick { color, size });
            assert!(matches!(outcome, Ok(Outcome::Added(_))), "{outcome:?}");
        }

        // the blue brick cannot be dragged onto the red one
        let blue = engine.world().sorted_bricks()[2].id;
        let rejected = engine.apply(BrickCommand::MoveBrick {
            id: blue,
            target: glam::Vec3::ZERO,
        });
        assert_eq!(rejected, Ok(Outcome::MoveRejected(blue)));

        insta::assert_snapshot!(engine.world().format_layout(), @r"
        x -1.5..2.5  z -1.5..2.5
        ......11
        .0000.11
        .0000.11
        .0000.11
        .0000.11
        ......11
        222222..
        222222..
        0 2x1x2 #d01c1f at (0, 0.5, 0)
        1 1x1x3 #00ff00 at (2, 0.5, 0)
        2 3x2x1 #0000ff at (0, 1, 2)
        ");
    }

    #[test]
    fn test_fill_keeps_layout_consistent() {
        let mut engine = Engine::seeded(WorldConfig::default(), 11);
        let placed = fill(&mut engine, 40);
        assert_eq!(engine.world().len(), placed as usize);
        assert!(engine.world().is_consistent());
    }

    #[test]
    fn test_fill_in_full_region_places_nothing_more() {
        let config = WorldConfig {
            random_extent: 1,
            random_attempts: 4,
            ..WorldConfig::default()
        };
        let mut engine = Engine::seeded(config, 5);
        let blocker = engine.apply(BrickCommand::AddBrick {
            color: Rgb::default(),
            size: BrickSize::new(8.0, 1.0, 8.0),
        });
        assert!(blocker.is_ok());

        assert_eq!(fill(&mut engine, 10), 0);
        assert_eq!(engine.world().len(), 1);
        assert!(!matches!(
            engine.apply(BrickCommand::AddRandomBrick),
            Err(PlacementError::NoSlotFound { .. })
        ));
    }

    #[test]
    fn test_cli_parses_world_options() {
        let cli = Cli::parse_from([
            "bricks",
            "fill",
            "--count",
            "5",
            "--seed",
            "9",
            "--color",
            "#102030",
            "--width",
            "3",
        ]);
        assert!(matches!(cli.command, Some(Command::Fill { count: 5 })));
        assert_eq!(cli.world.seed, Some(9));
        assert_eq!(cli.world.color, Rgb::new(0x10, 0x20, 0x30));
        assert_eq!(cli.world.brick_size(), Some(BrickSize::new(3.0, 1.0, 4.0)));
        assert_eq!(cli.world.config().max_offset(), 50);
    }

    #[test]
    fn test_non_positive_size_is_refused() {
        let cli = Cli::parse_from(["bricks", "--height", "0"]);
        assert_eq!(cli.world.brick_size(), None);
    }
}
