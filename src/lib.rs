//! Terminal Snake arcade game with a companion chat relay server.
//!
//! The game engine lives in [`game`], [`snake`], and [`food`]; the terminal
//! front-end in [`renderer`] and [`ui`]. The [`relay`] module is an
//! independent HTTP proxy that forwards chat requests to an upstream
//! vision/chat API — it shares nothing with the game beyond this crate.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod relay;
pub mod renderer;
pub mod snake;
pub mod ui;
