//! Top-level scene state machine
//!
//! Intro -> MainMenu -> Playing <-> GameOver, with pause as a flag inside
//! Playing. The scene decides whether the simulation update runs at all;
//! drawing happens every frame regardless.

use serde::{Deserialize, Serialize};

use crate::platform::RandomSource;
use crate::settings::Settings;
use crate::sim::{GameEvent, Session, Snapshot, TickInput, tick};

/// Current top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    /// Logo splash, leaves on a timer
    Intro,
    MainMenu,
    Playing,
    GameOver,
}

impl Scene {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scene::Intro => "Intro",
            Scene::MainMenu => "MainMenu",
            Scene::Playing => "Playing",
            Scene::GameOver => "GameOver",
        }
    }
}

/// Input for one frame: held movement plus edge-triggered actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub movement: TickInput,
    /// Main menu: begin a run
    pub start: bool,
    /// Main menu: exit the program
    pub quit: bool,
    /// Playing: toggle pause
    pub pause: bool,
    /// Playing: end the run and show the game-over screen
    pub end_session: bool,
    /// Game over: play again
    pub restart: bool,
    /// Game over: back to the main menu
    pub menu: bool,
}

/// What the frame loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Final numbers of a run that ended through the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub wave: u32,
    pub kills: u32,
    pub powerups_collected: u32,
}

/// Everything the renderer needs for one frame: which screen to draw, the
/// pause overlay, the game-over numbers and the live run
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub scene: Scene,
    pub paused: bool,
    pub last_run: Option<RunSummary>,
    pub run: Snapshot<'a>,
}

/// Complete game: scene, pause flag and the run in progress
#[derive(Debug, Clone)]
pub struct Game {
    pub scene: Scene,
    pub paused: bool,
    /// Seconds spent on the intro splash
    pub intro_timer: f32,
    pub session: Session,
    /// Result of the last run ended via game over
    pub last_run: Option<RunSummary>,
    /// Debug override: pin the scene every frame
    pub force_scene: Option<Scene>,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let scene = settings.force_scene.unwrap_or(Scene::Intro);
        Self {
            scene,
            paused: false,
            intro_timer: 0.0,
            session: Session::new(settings.tuning.clone()),
            last_run: None,
            force_scene: settings.force_scene,
        }
    }

    /// Run one frame: scene transitions, then the simulation if Playing and
    /// not paused. Returns the simulation events and whether to keep going.
    pub fn frame(
        &mut self,
        input: &FrameInput,
        dt: f32,
        rng: &mut impl RandomSource,
    ) -> (FrameOutcome, Vec<GameEvent>) {
        let dt = dt.clamp(0.0, self.session.tuning.max_frame_dt);

        if let Some(forced) = self.force_scene {
            self.scene = forced;
        }

        let mut events = Vec::new();
        match self.scene {
            Scene::Intro => {
                self.intro_timer += dt;
                if self.intro_timer >= self.session.tuning.intro_duration {
                    self.switch_to(Scene::MainMenu);
                }
            }
            Scene::MainMenu => {
                if input.start {
                    self.reset_session();
                    self.switch_to(Scene::Playing);
                } else if input.quit {
                    log::info!("Quit from main menu");
                    return (FrameOutcome::Quit, events);
                }
            }
            Scene::Playing => {
                if input.end_session {
                    self.last_run = Some(self.summary());
                    self.reset_session();
                    self.switch_to(Scene::GameOver);
                } else {
                    if input.pause {
                        self.paused = !self.paused;
                        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
                    }
                    if !self.paused {
                        events = tick(&mut self.session, &input.movement, dt, rng);
                    }
                }
            }
            Scene::GameOver => {
                if input.restart {
                    self.reset_session();
                    self.switch_to(Scene::Playing);
                } else if input.menu {
                    self.reset_session();
                    self.switch_to(Scene::MainMenu);
                }
            }
        }

        (FrameOutcome::Continue, events)
    }

    /// Single entry point for starting a fresh run. Also clears pause.
    pub fn reset_session(&mut self) {
        self.session.reset();
        self.paused = false;
        log::info!("Session reset");
    }

    /// Read-only view of the game for the renderer
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            scene: self.scene,
            paused: self.paused,
            last_run: self.last_run,
            run: self.session.snapshot(),
        }
    }

    fn summary(&self) -> RunSummary {
        let progression = &self.session.progression;
        RunSummary {
            wave: progression.wave,
            kills: progression.enemies_shot,
            powerups_collected: progression.powerups_collected,
        }
    }

    fn switch_to(&mut self, scene: Scene) {
        log::info!("Scene {} -> {}", self.scene.as_str(), scene.as_str());
        self.scene = scene;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn quiet_settings() -> Settings {
        Settings {
            tuning: Tuning {
                initial_spawn_chance: 0,
                ..Tuning::default()
            },
            ..Settings::default()
        }
    }

    fn press(f: impl FnOnce(&mut FrameInput)) -> FrameInput {
        let mut input = FrameInput::default();
        f(&mut input);
        input
    }

    fn playing_game() -> Game {
        let mut game = Game::new(&quiet_settings());
        game.scene = Scene::Playing;
        game
    }

    #[test]
    fn test_intro_times_out_to_menu() {
        let mut game = Game::new(&quiet_settings());
        let mut rng = Pcg32::seed_from_u64(1);
        let idle = FrameInput::default();
        assert_eq!(game.scene, Scene::Intro);

        // 29 frames of 0.1s
        for _ in 0..29 {
            game.frame(&idle, 0.1, &mut rng);
        }
        assert_eq!(game.scene, Scene::Intro);

        for _ in 0..2 {
            game.frame(&idle, 0.1, &mut rng);
        }
        assert_eq!(game.scene, Scene::MainMenu);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut game = Game::new(&quiet_settings());
        let mut rng = Pcg32::seed_from_u64(1);
        game.frame(&FrameInput::default(), 5.0, &mut rng);
        assert_eq!(game.intro_timer, 0.1);
        assert_eq!(game.scene, Scene::Intro);
    }

    #[test]
    fn test_menu_start_and_quit() {
        let mut game = Game::new(&quiet_settings());
        game.scene = Scene::MainMenu;
        let mut rng = Pcg32::seed_from_u64(1);

        let (outcome, _) = game.frame(&FrameInput::default(), 0.016, &mut rng);
        assert_eq!(outcome, FrameOutcome::Continue);
        assert_eq!(game.scene, Scene::MainMenu);

        game.frame(&press(|i| i.start = true), 0.016, &mut rng);
        assert_eq!(game.scene, Scene::Playing);

        let mut menu = Game::new(&quiet_settings());
        menu.scene = Scene::MainMenu;
        let (outcome, _) = menu.frame(&press(|i| i.quit = true), 0.016, &mut rng);
        assert_eq!(outcome, FrameOutcome::Quit);
    }

    #[test]
    fn test_pause_gates_simulation() {
        let mut game = playing_game();
        let mut rng = Pcg32::seed_from_u64(1);
        let right = press(|i| i.movement.right = true);

        game.frame(&press(|i| i.pause = true), 0.05, &mut rng);
        assert!(game.paused);

        game.frame(&right, 0.05, &mut rng);
        assert_eq!(game.session.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(game.session.progression.wave_timer, 0.0);

        // Unpausing runs the update in the same frame
        game.frame(
            &press(|i| {
                i.pause = true;
                i.movement.right = true;
            }),
            0.05,
            &mut rng,
        );
        assert!(!game.paused);
        assert_eq!(game.session.player.pos, Vec2::new(410.0, 300.0));
    }

    #[test]
    fn test_snapshot_reports_scene_and_pause() {
        let mut game = playing_game();
        let mut rng = Pcg32::seed_from_u64(1);

        let snap = game.snapshot();
        assert_eq!(snap.scene, Scene::Playing);
        assert!(!snap.paused);
        assert_eq!(snap.last_run, None);

        game.frame(&press(|i| i.pause = true), 0.05, &mut rng);
        let snap = game.snapshot();
        assert!(snap.paused);
        assert_eq!(snap.run.health, 10);
        assert_eq!(snap.run.wave, 1);

        game.session.progression.enemies_shot = 4;
        game.frame(&press(|i| i.end_session = true), 0.016, &mut rng);
        let snap = game.snapshot();
        assert_eq!(snap.scene, Scene::GameOver);
        assert!(!snap.paused);
        assert_eq!(snap.last_run.map(|run| run.kills), Some(4));
    }

    #[test]
    fn test_end_session_records_summary_and_resets() {
        let mut game = playing_game();
        let mut rng = Pcg32::seed_from_u64(1);
        game.session.progression.wave = 3;
        game.session.progression.enemies_shot = 27;
        game.session.progression.powerups_collected = 2;
        game.session.player.health = 4;

        game.frame(&press(|i| i.end_session = true), 0.016, &mut rng);
        assert_eq!(game.scene, Scene::GameOver);
        assert_eq!(
            game.last_run,
            Some(RunSummary {
                wave: 3,
                kills: 27,
                powerups_collected: 2
            })
        );
        assert_eq!(game.session, Session::new(quiet_settings().tuning));
    }

    #[test]
    fn test_game_over_restart_and_menu() {
        let mut rng = Pcg32::seed_from_u64(1);

        let mut game = playing_game();
        game.scene = Scene::GameOver;
        game.paused = true;
        game.session.progression.wave = 6;
        game.frame(&press(|i| i.restart = true), 0.016, &mut rng);
        assert_eq!(game.scene, Scene::Playing);
        assert!(!game.paused);
        assert_eq!(game.session.progression.wave, 1);

        game.scene = Scene::GameOver;
        game.session.progression.wave = 6;
        game.frame(&press(|i| i.menu = true), 0.016, &mut rng);
        assert_eq!(game.scene, Scene::MainMenu);
        assert_eq!(game.session.progression.wave, 1);
    }

    #[test]
    fn test_game_over_waits_for_input() {
        let mut game = playing_game();
        game.scene = Scene::GameOver;
        let mut rng = Pcg32::seed_from_u64(1);
        game.frame(&press(|i| i.movement.up = true), 0.016, &mut rng);
        assert_eq!(game.scene, Scene::GameOver);
    }

    #[test]
    fn test_forced_scene_overrides_transitions() {
        let settings = Settings {
            force_scene: Some(Scene::Playing),
            ..quiet_settings()
        };
        let mut game = Game::new(&settings);
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(game.scene, Scene::Playing);

        // Ending the run would normally leave Playing
        game.frame(&press(|i| i.end_session = true), 0.016, &mut rng);
        game.frame(&FrameInput::default(), 0.016, &mut rng);
        assert_eq!(game.scene, Scene::Playing);
    }

    #[test]
    fn test_health_depletion_stays_in_playing() {
        let mut game = playing_game();
        let mut rng = Pcg32::seed_from_u64(1);
        game.session.player.health = 1;
        let p = game.session.player.pos;
        game.session
            .enemies
            .spawn(crate::sim::Enemy {
                pos: p,
                radius: 15.0,
                dir: Vec2::ZERO,
            })
            .unwrap();

        let (_, events) = game.frame(&FrameInput::default(), 0.016, &mut rng);
        assert_eq!(game.scene, Scene::Playing);
        assert_eq!(game.session.player.health, 10);
        assert!(events.iter().any(|e| matches!(e, GameEvent::PlayerDied { .. })));
    }
}
