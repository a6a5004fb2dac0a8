//! Snake on a wrap-around board, with food that runs away from the head.
//!
//! The simulation lives in [`game`] and [`food`]; everything else paces it,
//! configures it, or puts it on a terminal.

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
