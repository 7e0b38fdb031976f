//! Wave Survivor entry point
//!
//! Native headless driver: runs the game loop with a fixed clock and an
//! autopilot standing in for the keyboard, logging what happens. A windowed
//! frontend plugs its own `Clock`/`InputSource` into the same loop.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use wave_survivor::platform::{Clock, FixedClock, InputSource};
use wave_survivor::settings::SETTINGS_FILE;
use wave_survivor::sim::{GameEvent, TickInput, find_nearest};
use wave_survivor::{FrameInput, FrameOutcome, Game, Scene, Settings};

/// Keyboard stand-in: starts a run from the menu and steers away from the
/// nearest enemy, detouring for power-ups.
struct Autopilot<'a> {
    game: &'a Game,
}

impl InputSource for Autopilot<'_> {
    fn poll(&mut self) -> FrameInput {
        let mut input = FrameInput::default();
        match self.game.scene {
            Scene::MainMenu => input.start = true,
            Scene::GameOver => input.restart = true,
            Scene::Playing => input.movement = self.steer(),
            Scene::Intro => {}
        }
        input
    }
}

impl Autopilot<'_> {
    fn steer(&self) -> TickInput {
        let session = &self.game.session;
        let player = session.player.pos;

        let target = if session.powerup.active {
            session.powerup.pos - player
        } else if let Some((_, enemy)) = find_nearest(&session.enemies, player, 250.0) {
            player - enemy.pos
        } else {
            session.tuning.screen_size() * 0.5 - player
        };

        let dead_zone = 8.0;
        TickInput {
            up: target.y < -dead_zone,
            down: target.y > dead_zone,
            left: target.x < -dead_zone,
            right: target.x > dead_zone,
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Wave Survivor (headless) starting...");

    let settings = Settings::load(SETTINGS_FILE);
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Seed {}", seed);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut clock = FixedClock::new(settings.demo_frame_dt);
    let mut game = Game::new(&settings);

    let mut deaths = 0u32;
    let mut best_wave = 1u32;
    for frame in 0..settings.demo_frames {
        let input = Autopilot { game: &game }.poll();
        let dt = clock.elapsed_since_last_frame();
        let (outcome, events) = game.frame(&input, dt, &mut rng);

        for event in &events {
            match event {
                GameEvent::WaveCompleted { wave } => best_wave = best_wave.max(*wave),
                GameEvent::PlayerDied { wave, kills } => {
                    deaths += 1;
                    log::info!("Frame {}: died on wave {} ({} kills)", frame, wave, kills);
                }
                _ => {}
            }
        }

        if outcome == FrameOutcome::Quit {
            break;
        }
    }

    let snap = game.snapshot();
    println!(
        "Scene {} | wave {} | health {} | kills {} | power-ups {} | enemies {} | deaths {} | best wave {}",
        snap.scene.as_str(),
        snap.run.wave,
        snap.run.health,
        snap.run.kills,
        snap.run.powerups_collected,
        snap.run.enemies.len(),
        deaths,
        best_wave,
    );
}
