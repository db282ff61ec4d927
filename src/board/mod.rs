//! The board: placed tiles and their two open ends.
//!
//! ## Key Types
//!
//! - `Board`: Ordered line of placed tiles
//! - `Side`: Left or right open end

pub mod line;

pub use line::{Board, Side};
