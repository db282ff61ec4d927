//! Match rules.
//!
//! - `placement`: which end a tile attaches to, and whether it turns
//! - `event`: the transcript the engine records
//! - `engine`: dealing, turn order, drawing and termination

pub mod placement;
pub mod event;
pub mod engine;

pub use placement::{match_side, Placement};
pub use event::{MatchEvent, MatchOutcome, WinReason};
pub use engine::{MatchEngine, MatchPhase, Position};
