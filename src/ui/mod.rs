//! Terminal UI for the vitrine binary
//!
//! Theme tokens and primitives at the bottom, views composed from widgets
//! and blocks at the top.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod live_region;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
