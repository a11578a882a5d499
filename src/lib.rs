//! Keypress-driven terminal snake: the game-state engine and its ratatui shell.

pub mod board;
pub mod config;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
