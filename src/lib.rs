//! Skyward - a terminal flappy-bird arcade game.
//!
//! This module exposes the simulation for testing and external use.

// Allow dead code in library - some items are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
