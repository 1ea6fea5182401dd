//! Game loop orchestrator
//!
//! Owns the current session and the `Idle -> Running -> Ended -> Running`
//! state machine. Hosts call the command methods from input handlers and
//! `frame` once per display refresh, rescheduling only while it returns
//! `LoopControl::Continue`.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::highscores::BestScore;
use crate::persistence::ScoreStore;
use crate::renderer::{RenderSurface, SceneView, draw};
use crate::settings::Settings;
use crate::sim::particles::spawn_burst;
use crate::sim::{GameEvent, GamePhase, Session, SessionSummary, Sky, tick};
use crate::theme::{Theme, ThemeName};
use crate::tuning::Tuning;

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

pub struct Game {
    phase: GamePhase,
    session: Session,
    sky: Sky,
    tuning: Tuning,
    settings: Settings,
    best: BestScore,
    rng: Pcg32,
    summary: Option<SessionSummary>,
    /// Events raised by commands since the last `update`
    pending: Vec<GameEvent>,
}

impl Game {
    /// New game waiting at the start prompt
    ///
    /// `best` is the persisted best score, read once by the host.
    pub fn new(seed: u64, tuning: Tuning, settings: Settings, best: BestScore) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let sky = Sky::new(&tuning, &mut rng);
        log::info!(
            "Game created (seed {}, theme {}, best {})",
            seed,
            settings.theme,
            best.value
        );
        Self {
            phase: GamePhase::Idle,
            session: Session::new(&tuning),
            sky,
            tuning,
            settings,
            best,
            rng,
            summary: None,
            pending: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sky(&self) -> &Sky {
        &self.sky
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn best(&self) -> u32 {
        self.best.value
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    /// Summary of the last finished run, while `Ended`
    pub fn summary(&self) -> Option<SessionSummary> {
        self.summary
    }

    /// Start the first run from the start prompt
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return false;
        }
        self.begin_session();
        true
    }

    /// Start a fresh run from the game-over summary
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::Ended {
            log::debug!("restart ignored in {:?}", self.phase);
            return false;
        }
        self.begin_session();
        true
    }

    /// Flap; only meaningful while running
    pub fn jump(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            log::debug!("jump ignored in {:?}", self.phase);
            return false;
        }
        self.session.bird.impulse();
        spawn_burst(
            &mut self.session.particles,
            self.session.bird.pos,
            self.tuning.jump_burst,
            &self.tuning,
            &mut self.rng,
        );
        self.pending.push(GameEvent::Jumped);
        true
    }

    /// Single "tap" input: flap while running, restart from the summary
    pub fn tap(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => self.jump(),
            GamePhase::Ended => self.restart(),
            GamePhase::Idle => false,
        }
    }

    /// Switch palettes by name; unknown names leave the theme unchanged
    pub fn select_theme(&mut self, name: &str) -> bool {
        match name.parse::<ThemeName>() {
            Ok(theme) => {
                self.set_theme(theme);
                true
            }
            Err(e) => {
                log::warn!("{}; keeping {}", e, self.settings.theme);
                false
            }
        }
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        if self.settings.theme != theme {
            log::info!("Theme changed to {}", theme);
            self.settings.theme = theme;
        }
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::get(self.settings.theme)
    }

    pub fn set_particles_enabled(&mut self, enabled: bool) {
        self.settings.particles = enabled;
    }

    /// Advance one frame if running
    ///
    /// A raised best score is written to `store` before this returns.
    pub fn update(&mut self, now_ms: f64, store: &mut dyn ScoreStore) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending);
        if self.phase != GamePhase::Running {
            return events;
        }

        let outcome = tick(
            &mut self.session,
            &mut self.sky,
            &mut self.best,
            now_ms,
            &self.tuning,
            &mut self.rng,
        );

        if outcome
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::NewBest { .. }))
        {
            self.best.save(store);
        }

        if outcome.crashed.is_some() {
            self.end_session();
        }

        events.extend(outcome.events);
        events
    }

    /// Draw the current state; never mutates the simulation
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let view = SceneView {
            session: &self.session,
            sky: &self.sky,
            theme: self.theme(),
            show_particles: self.settings.particles,
            particle_reference_life: self.tuning.particle_reference_life,
        };
        draw(surface, &view);
    }

    /// One display frame: update then render
    pub fn frame<S: RenderSurface + ?Sized>(
        &mut self,
        now_ms: f64,
        store: &mut dyn ScoreStore,
        surface: &mut S,
    ) -> (LoopControl, Vec<GameEvent>) {
        let events = self.update(now_ms, store);
        self.render(surface);
        let control = if self.phase == GamePhase::Running {
            LoopControl::Continue
        } else {
            LoopControl::Stop
        };
        (control, events)
    }

    fn begin_session(&mut self) {
        self.session = Session::new(&self.tuning);
        self.summary = None;
        self.pending.clear();
        self.pending.push(GameEvent::Started);
        self.phase = GamePhase::Running;
        log::info!("Session started (best {})", self.best.value);
    }

    fn end_session(&mut self) {
        self.phase = GamePhase::Ended;
        let summary = SessionSummary {
            score: self.session.score,
            best: self.best.value,
            new_best: self.session.new_best,
        };
        log::info!(
            "Session ended: score {}, best {}{}",
            summary.score,
            summary.best,
            if summary.new_best { " (new best)" } else { "" }
        );
        self.summary = Some(summary);
    }
}
