//! Arcade snake: a grid-based game-state engine with a terminal front end.
//!
//! The engine lives in [`snake`], [`obstacle`], [`food`], and [`game`]: a
//! wrap-around grid, a two-phase (discrete step + interpolated render)
//! movement model, level-scaled obstacle generation, and a food/bonus-food
//! lifecycle. Everything else is a thin shell around it: terminal rendering,
//! input polling, and persisted history/best-score records.

pub mod config;
pub mod food;
pub mod game;
pub mod history;
pub mod input;
pub mod obstacle;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
