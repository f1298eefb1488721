//! Interactive 3D view of a brick world using kiss3d.
//!
//! The viewer never stores brick state of its own: every frame it reads the
//! engine's world and moves (or creates) one scene node per brick. Window
//! input is turned into engine commands as it arrives.

use kiss3d::event::{Action, Key, MouseButton, WindowEvent};
use kiss3d::prelude::*;
use rustc_hash::FxHashMap;

use bricks::camera::{CameraMove, CameraRig, DEFAULT_EYE, DEFAULT_TARGET, FIELD_OF_VIEW};
use bricks::engine::{Command, Outcome};
use bricks::geometry::Ray;
use bricks::{Brick, BrickId, BrickSize, Engine, Rgb};

/// Radius of the studs on top of each brick.
const STUD_RADIUS: f32 = 0.25;
/// Height of the studs on top of each brick.
const STUD_HEIGHT: f32 = 0.2;

fn to_scene(v: glam::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn brick_color(color: Rgb) -> Color {
    let [r, g, b] = color.to_unit();
    Color::new(r, g, b, 1.0)
}

fn default_camera() -> OrbitCamera3d {
    OrbitCamera3d::new(to_scene(DEFAULT_EYE), to_scene(DEFAULT_TARGET))
}

/// Maps held movement keys to camera directions.
fn camera_move(key: Key) -> Option<CameraMove> {
    match key {
        Key::W => Some(CameraMove::Forward),
        Key::S => Some(CameraMove::Back),
        Key::A => Some(CameraMove::Left),
        Key::D => Some(CameraMove::Right),
        Key::E => Some(CameraMove::Up),
        Key::Q => Some(CameraMove::Down),
        _ => None,
    }
}

/// Builds the pointer ray for a cursor position under the current camera.
fn pointer_ray(camera: &OrbitCamera3d, cursor: (f32, f32), viewport: (f32, f32)) -> Ray {
    let eye = camera.eye();
    let at = camera.at();
    Ray::from_screen(
        cursor,
        viewport,
        glam::Vec3::new(eye.x, eye.y, eye.z),
        glam::Vec3::new(at.x, at.y, at.z),
        FIELD_OF_VIEW,
    )
}

/// Adds the scene nodes for one brick: a body plus its studs.
///
/// The returned group node is positioned at the brick's center; children use
/// brick-local coordinates.
fn build_brick(scene: &mut SceneNode3d, brick: &Brick) -> SceneNode3d {
    let color = brick_color(brick.color);
    let BrickSize {
        width,
        height,
        depth,
    } = brick.size;

    let mut group = scene.add_group();
    group.add_cube(width, height, depth).set_color(color);
    for offset in brick.stud_offsets() {
        group
            .add_cylinder(STUD_RADIUS, STUD_HEIGHT)
            .set_color(color)
            .set_position(to_scene(offset));
    }
    group
}

fn window_title(engine: &Engine) -> String {
    let status = engine
        .status()
        .map(|message| format!(" - {message}"))
        .unwrap_or_default();
    format!(
        "Bricks: {} placed - [B] add, [N] random, [C] reset camera{}",
        engine.world().len(),
        status
    )
}

/// Displays the world in an interactive 3D viewer until the window closes.
///
/// `color` and `size` describe the bricks added with the [B] key.
pub fn display(engine: Engine, color: Rgb, size: BrickSize) {
    pollster::block_on(display_async(engine, color, size));
}

async fn display_async(mut engine: Engine, color: Rgb, size: BrickSize) {
    let mut window = Window::new(&window_title(&engine)).await;
    let mut camera = default_camera();
    let mut rig = CameraRig::default();

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(10.0, 15.0, 10.0));

    // thin slab just under y = 0 so the ground is visible
    let extent = engine.config().ground_extent();
    scene
        .add_cube(extent, 0.01, extent)
        .set_color(Color::new(0.11, 0.11, 0.11, 1.0))
        .set_position(Vec3::new(0.0, -0.005, 0.0));

    let mut rendered: FxHashMap<BrickId, SceneNode3d> = FxHashMap::default();
    let mut cursor = (0.0f32, 0.0f32);
    let mut title = String::new();

    loop {
        let viewport = (window.width() as f32, window.height() as f32);
        let mut commands = Vec::new();

        for event in window.events().iter() {
            match event.value {
                WindowEvent::Key(key, Action::Press, _) => match key {
                    Key::B => commands.push(Command::AddBrick { color, size }),
                    Key::N => commands.push(Command::AddRandomBrick),
                    Key::C | Key::R => commands.push(Command::ResetCamera),
                    _ => {
                        if let Some(movement) = camera_move(key) {
                            rig.press(movement);
                        }
                    }
                },
                WindowEvent::Key(key, Action::Release, _) => {
                    if let Some(movement) = camera_move(key) {
                        rig.release(movement);
                    }
                }
                WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                    let ray = pointer_ray(&camera, cursor, viewport);
                    commands.push(Command::Select { ray });
                }
                WindowEvent::CursorPos(x, y, _) => {
                    cursor = (x as f32, y as f32);
                    if engine.world().selected().is_some() {
                        let ray = pointer_ray(&camera, cursor, viewport);
                        commands.push(Command::Drag { ray });
                    }
                }
                _ => {}
            }
        }

        for command in commands {
            match engine.apply(command) {
                Ok(Outcome::CameraReset) => camera = default_camera(),
                Ok(outcome) => log::trace!("{command:?} -> {outcome:?}"),
                // failures are already logged, and explicit adds set the status
                Err(_) => {}
            }
        }

        if rig.is_moving() {
            let eye = camera.eye();
            let at = camera.at();
            let offset = rig.translation(
                glam::Vec3::new(eye.x, eye.y, eye.z),
                glam::Vec3::new(at.x, at.y, at.z),
            );
            camera.set_at(at + to_scene(offset));
        }

        for brick in engine.world().bricks() {
            let node = rendered
                .entry(brick.id)
                .or_insert_with(|| build_brick(&mut scene, brick));
            node.set_position(to_scene(brick.position));
        }

        let new_title = window_title(&engine);
        if new_title != title {
            window.set_title(&new_title);
            title = new_title;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
