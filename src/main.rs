//! dotsim entry point
//!
//! Runs a scripted, headless session: a dot wanders the bundled tile map
//! under a frame cap, then the final view is printed as text.
//!
//! Usage: `dotsim [settings.json]`

use anyhow::{Context, Result};
use glam::IVec2;

use dotsim::consts::*;
use dotsim::platform::SystemClock;
use dotsim::renderer::{AsciiCanvas, render_scene};
use dotsim::sim::{Direction, InputEvent, Level, Scene, TickInput, TileMap, tick};
use dotsim::{FpsCounter, FrameLimiter, FrameTimer, Settings};

const DEFAULT_SETTINGS_PATH: &str = "dotsim.json";
const LEVEL_MAP: &str = include_str!("../assets/lazy.map");
const SEED: u64 = 0x5EED;

/// Scripted key presses: (frame, event)
const SCRIPT: &[(u64, InputEvent)] = &[
    (5, InputEvent::Pressed(Direction::Right)),
    (6, InputEvent::Pressed(Direction::Right)), // key repeat, ignored
    (70, InputEvent::Pressed(Direction::Down)),
    (100, InputEvent::Released(Direction::Right)),
    (130, InputEvent::Pressed(Direction::Left)),
    (160, InputEvent::Released(Direction::Down)),
    (200, InputEvent::FocusLost),
    (220, InputEvent::Released(Direction::Left)), // already released on focus loss
    (240, InputEvent::Quit),
];

fn main() -> Result<()> {
    env_logger::init();
    log::info!("dotsim starting...");

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = Settings::load(&settings_path);

    let tiles = TileMap::parse(LEVEL_MAP, TILE_COLUMNS, TILE_ROWS, TILE_WIDTH, TILE_HEIGHT)
        .context("bundled level map is invalid")?;
    let level = Level::from_tiles(tiles).with_spawn(IVec2::new(100, 100));
    let mut scene = Scene::from_settings(level, &settings, SEED);

    let clock = SystemClock::new();
    let mut limiter = settings
        .frame_cap()
        .map(|fps| FrameLimiter::new(clock, fps));
    let mut fps = FpsCounter::new(clock);
    let mut step_timer = FrameTimer::with_clock(clock);
    step_timer.start();

    let mut frame: u64 = 0;
    while scene.running {
        if let Some(limiter) = limiter.as_mut() {
            limiter.begin_frame();
        }

        let events = SCRIPT
            .iter()
            .filter(|(at, _)| *at == frame)
            .map(|(_, event)| *event);
        let mut input = TickInput::with_events(events);
        if settings.frame_independent {
            input.elapsed_ms = Some(step_timer.elapsed());
            step_timer.start();
        }

        tick(&mut scene, &input);
        fps.frame();

        if settings.show_fps && frame % 60 == 0 {
            log::info!(
                "frame {:>4}  dot {:?}  vel {:?}  avg fps {:.1}",
                frame,
                scene.dot.position(),
                scene.dot.velocity(),
                fps.average()
            );
        }

        if let Some(limiter) = limiter.as_mut() {
            limiter.end_frame();
        }
        frame += 1;
    }

    let mut canvas = AsciiCanvas::new(SCREEN_WIDTH, SCREEN_HEIGHT, 10);
    render_scene(&scene, &mut canvas);
    println!("{}", canvas.to_text());
    println!(
        "Finished after {} ticks at {:?} ({:.1} fps average)",
        scene.time_ticks,
        scene.dot.position(),
        fps.average()
    );

    Ok(())
}
