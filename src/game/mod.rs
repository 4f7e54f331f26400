//! The Skyward simulation core.
//!
//! A bird falls under per-tick gravity and flaps upward on input while
//! obstacle pairs scroll in from the right. Passing a pair scores a point;
//! touching a pair or leaving the playfield ends the run. Depending on the
//! game mode, weather or a score-triggered boost bends the physics.

pub mod logic;
pub mod types;
pub mod weather;

#[allow(unused_imports)]
pub use logic::*;
#[allow(unused_imports)]
pub use types::*;
