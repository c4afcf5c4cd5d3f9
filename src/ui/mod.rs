//! Console UI for the berth binary
//!
//! - `theme` - color, icon and rule tokens
//! - `terminal` / `context` - capability detection and output decisions
//! - `primitives`, `widgets`, `blocks`, `views` - rendering building blocks
//! - `reporter` - console implementation of the `Reporter` port

pub mod blocks;
pub mod context;
pub mod error;
pub mod live_region;
pub mod output;
pub mod primitives;
pub mod reporter;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
