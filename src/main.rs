use anyhow::{Context, Result};
use glam::Vec2;
use log::{debug, error, info};
use std::path::PathBuf;
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetLoader;
use engine::game_loop::GameLoop;
use engine::input::{Gamepad, Key, KeyboardState};
use engine::renderer::{GpuFrameSource, Renderer};
use game::player::Player;
use game::{ControlMode, Game, GameConfig};

/// Frames between two FPS log lines
const FPS_LOG_INTERVAL: u64 = 300;

/// Command-line options
#[derive(Debug, Clone, PartialEq)]
struct Options {
    /// Image directory, overriding the configured one
    images_dir: Option<PathBuf>,
    /// Control mode, overriding the configured one
    mode: Option<ControlMode>,
    /// State to start in instead of a random idle one
    state: Option<String>,
}

impl Options {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut options = Self {
            images_dir: None,
            mode: None,
            state: None,
        };

        for arg in args {
            match arg.as_str() {
                "--joystick" => options.mode = Some(ControlMode::Joystick),
                "--keyboard" => options.mode = Some(ControlMode::Keyboard),
                flag if flag.starts_with("--state=") => {
                    options.state = flag.strip_prefix("--state=").map(str::to_string);
                }
                flag if flag.starts_with("--") => anyhow::bail!("Unknown option: {}", flag),
                path => options.images_dir = Some(PathBuf::from(path)),
            }
        }

        Ok(options)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let options = Options::parse(std::env::args().skip(1))?;

    let mut config = GameConfig::default();
    if let Some(mode) = options.mode {
        config.controls.mode = mode;
    }
    let images_dir = options
        .images_dir
        .unwrap_or_else(|| PathBuf::from(config.assets.images_dir));

    info!("Starting {} ({:?} controls)", config.window.title, config.controls.mode);

    let logical_size = Vec2::new(config.window.width as f32, config.window.height as f32);

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window.width,
                config.window.height,
            ))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone(), logical_size))?;

    let mut loader = AssetLoader::new(&images_dir);
    let background = loader
        .load_image(config.assets.background)
        .context("Failed to load background")?;
    let background = renderer.upload_image(&background, "background");

    let mut player = {
        let mut frames = GpuFrameSource::new(&mut loader, &mut renderer);
        Player::new(&config.player, config.physics.world(), &mut frames)
            .context("Failed to create player")?
    };
    if let Some(state) = &options.state {
        player
            .activate_by_name(state)
            .with_context(|| format!("Invalid --state value '{}'", state))?;
    }
    info!(
        "Loaded {} animations ({} textures) from {}",
        player.animations().len(),
        renderer.texture_manager().texture_count(),
        images_dir.display()
    );

    let mut gamepad = (config.controls.mode == ControlMode::Joystick)
        .then(|| Gamepad::new(config.controls.gamepad, config.controls.dead_zone));
    let mut game = Game::new(player, config.controls.clone());
    let mut keyboard = KeyboardState::new();
    let mut game_loop = GameLoop::new(config.window.ticks_per_second);

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => renderer.resize(physical_size),
                WindowEvent::Focused(false) => keyboard.reset(),
                WindowEvent::KeyboardInput { event, .. } => {
                    if let Some((key, true)) = keyboard.process_keyboard_event(&event) {
                        if key == Key::Space {
                            game_loop.toggle_pause();
                        } else if !game_loop.is_paused() {
                            game.key_pressed(key);
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    let ticks = game_loop.begin_frame();

                    if let Some(gamepad) = gamepad.as_mut() {
                        let buttons = gamepad.poll();
                        if !game_loop.is_paused() {
                            for button in buttons {
                                game.gamepad_button_pressed(button);
                            }
                        }
                    }

                    for _ in 0..ticks {
                        if let Some(gamepad) = gamepad.as_ref() {
                            game.poll_stick(gamepad.left_stick());
                        }
                        game.poll_keyboard(&keyboard);
                        game.update();
                    }

                    if game_loop.frame_count() % FPS_LOG_INTERVAL == 0 {
                        debug!("{:.1} FPS, {} ticks run", game_loop.fps(), game_loop.tick_count());
                    }

                    renderer.draw_sprite(background, Vec2::ZERO);
                    renderer.draw_sprite(*game.player().current_frame(), game.player().position());

                    if let Err(e) = renderer.render() {
                        error!("Render error: {:#}", e);
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
