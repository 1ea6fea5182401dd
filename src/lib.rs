//! Flappy Sky - A themed side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, obstacles, collisions, scoring)
//! - `game`: Run/not-running state machine driving update then render
//! - `renderer`: Abstract 2D surface and the scene drawn onto it
//! - `platform`: Browser canvas binding (wasm32 only)
//! - `persistence`: Key-value store for the best score
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod theme;
pub mod tuning;

pub use game::{Game, LoopControl};
pub use highscores::BestScore;
pub use settings::Settings;
pub use theme::{Theme, ThemeName};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical field size
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Height of the ground band at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Avatar never moves horizontally; the world scrolls past it
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_START_Y: f32 = 300.0;

    /// Nominal display cadence the physics constants were tuned for.
    /// One simulation step runs per rendered frame.
    pub const FRAME_HZ: f32 = 60.0;

    /// Top of the ground band (the avatar dies below this line)
    pub const GROUND_TOP: f32 = FIELD_HEIGHT - GROUND_HEIGHT;

    /// Width of one ground detail tile; the scroll offset wraps at this value
    pub const GROUND_TILE: f32 = 20.0;
    /// Ground scroll per frame at speed multiplier 1
    pub const GROUND_SCROLL: f32 = 2.0;

    /// Clouds only spawn in the upper band of the sky
    pub const CLOUD_BAND: f32 = 200.0;
}

/// Parse a `#rrggbb` literal into normalized RGBA components
#[inline]
pub const fn rgb(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Same as [`rgb`] with an explicit alpha
#[inline]
pub const fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    let [r, g, b, _] = rgb(hex);
    [r, g, b, alpha]
}
