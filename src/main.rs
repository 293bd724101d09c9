//! Headless demonstration binary.
//!
//! Drives the companion core through a short scripted session — run right,
//! jump, settle, then a pointer drag with a fling release — and logs the
//! frames the renderer would draw. The real window and input glue are
//! external collaborators and are not part of this crate.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use deskmate::config::Config;
use deskmate::drag::DragSample;
use deskmate::init_logging;
use deskmate::motion::HeldKeys;
use deskmate::pet::Pet;
use deskmate::physics::PixelSize;
use deskmate::vector::Vec2;

/// Animated desktop companion core, scripted headless demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON config file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// How many seconds of simulated time to run
    #[arg(short, long, default_value_t = 6)]
    seconds: u64,
}

const WINDOW: PixelSize = PixelSize::new(128, 128);
const SCREEN: PixelSize = PixelSize::new(1920, 1080);

const RUN_UNTIL_MS: f64 = 1500.0;
const JUMP_UNTIL_MS: f64 = 1600.0;
const DRAG_FROM_MS: f64 = 3000.0;
const DRAG_UNTIL_MS: f64 = 4000.0;
const DRAG_SPEED_PX_PER_MS: f64 = 0.8;

fn held_keys_at(ms: f64) -> HeldKeys {
    if ms < RUN_UNTIL_MS {
        HeldKeys {
            right: true,
            ..HeldKeys::NONE
        }
    } else if ms < JUMP_UNTIL_MS {
        HeldKeys {
            up: true,
            ..HeldKeys::NONE
        }
    } else {
        HeldKeys::NONE
    }
}

fn drive_drag(pet: &mut Pet, ms: f64, ms_per_tick: f64) {
    if (DRAG_FROM_MS..DRAG_UNTIL_MS).contains(&ms) {
        if pet.is_dragging() {
            let origin = pet.position();
            let travelled = DRAG_SPEED_PX_PER_MS * ms_per_tick;
            pet.drag_to(DragSample::new(
                Vec2::new(origin.x() - travelled, origin.y()),
                ms,
            ));
        } else {
            pet.begin_drag(DragSample::new(pet.position(), ms));
        }
    } else if ms >= DRAG_UNTIL_MS && pet.is_dragging() {
        pet.end_drag();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::with_scale(0.2).context("building default config")?,
    };
    info!(
        "starting demo: {} ticks/s, animation every {} ms",
        config.ticks_per_second, config.animation_interval_ms
    );

    let mut pet = Pet::new(&config);
    let ms_per_tick = 1000.0 / config.ticks_per_second;
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "Simulated durations are small positive tick counts."
    )]
    let total_ticks = (args.seconds as f64 * config.ticks_per_second) as u64;
    let animation_every_ms = config.animation_interval_ms as f64;
    let mut last_animation_ms = f64::NEG_INFINITY;

    for tick in 0..total_ticks {
        #[expect(
            clippy::cast_precision_loss,
            reason = "Tick counts stay far below the f64 mantissa range."
        )]
        let ms = tick as f64 * ms_per_tick;

        pet.set_held_keys(held_keys_at(ms));
        drive_drag(&mut pet, ms, ms_per_tick);
        pet.physics_tick(WINDOW, SCREEN);

        if ms - last_animation_ms >= animation_every_ms {
            last_animation_ms = ms;
            let frame = pet.animation_tick();
            let (x, y) = pet.window_position();
            info!(
                "t={ms:6.0}ms pos=({x:5}, {y:5}) state={:?} frame={} flipped={}",
                frame.state, frame.index, frame.flipped
            );
        }
    }

    info!("demo finished");
    Ok(())
}
