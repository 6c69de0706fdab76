//! # Gomoku
//!
//! Two-player five-in-a-row on a 19×19 board, played in the terminal with
//! mouse or keyboard. Every position is kept, so the players can jump back to
//! any earlier move and play on from there.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board snapshots, win detection, move history
//! - [`ui`] — Terminal UI: board, status, move list, input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed tracing setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
