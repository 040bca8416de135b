//! Room camera demo.
//!
//! Opens a raylib window, spawns a room layout and a player square, and lets
//! the [`RoomCamera`] follow the player from room to room.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini --rooms assets/rooms.json
//! ```
//!
//! Move with WASD or the arrow keys.

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use roomcam::resources::cameraconfig::{CameraConfig, ConfigError};
use roomcam::resources::input::InputState;
use roomcam::resources::roomcamera::{FollowAxes, RoomCamera};
use roomcam::resources::roomlayout::RoomLayout;
use roomcam::resources::screensize::ScreenSize;
use roomcam::resources::worldtime::WorldTime;
use roomcam::systems::movement::movement_system;
use roomcam::systems::playerinput::player_input_system;
use roomcam::systems::render::{render_debug_ui, render_world};
use roomcam::systems::roomcamera::{room_camera_follow_system, room_camera_pan_system};
use roomcam::systems::time::update_world_time;

/// Room camera demo
#[derive(Parser)]
#[command(version, about = "Follow a player through rooms with a room-bounded camera.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Room layout JSON (overrides [rooms] layout in the config).
    #[arg(long, value_name = "PATH")]
    rooms: Option<PathBuf>,

    /// Axes to follow: horizontal, vertical, both or none (overrides the config).
    #[arg(long, value_name = "MODE")]
    follow_axes: Option<FollowAxes>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = CameraConfig::with_path(&cli.config);
    match config.load_from_file() {
        Ok(()) => {}
        Err(ConfigError::Io(e)) => {
            warn!("Config {:?} not read ({}), using defaults", cli.config, e);
        }
        Err(e) => {
            error!("Invalid config {:?}: {}", cli.config, e);
            std::process::exit(1);
        }
    }
    if let Some(axes) = cli.follow_axes {
        config.follow_axes = axes;
    }
    let layout_path = cli.rooms.clone().unwrap_or_else(|| config.layout_path.clone());

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Room Camera")
        .build();
    rl.set_target_fps(config.target_fps);

    // Zoom is fixed from the window size at startup.
    let screen = ScreenSize::new(rl.get_screen_width(), rl.get_screen_height());
    let camera = match RoomCamera::from_config(&config, screen) {
        Ok(camera) => camera,
        Err(e) => {
            error!("Cannot create camera: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Camera viewport {}x{} at zoom {:.2}",
        config.viewport_width,
        config.viewport_height,
        camera.zoom()
    );

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(screen);
    world.insert_resource(camera);
    world.insert_resource(config);
    RoomLayout::load_or_default(&layout_path).spawn(&mut world);

    let mut update = Schedule::default();
    update.add_systems(
        (
            player_input_system,
            movement_system,
            room_camera_follow_system,
            room_camera_pan_system,
        )
            .chain(),
    );

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        world.resource_mut::<InputState>().poll(&rl);
        update_world_time(&mut world, dt);

        update.run(&mut world);

        let mut d = rl.begin_drawing(&thread);
        render_world(&mut world, &mut d);
        render_debug_ui(&world, &mut d);
    }
}
