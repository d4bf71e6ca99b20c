//! Core types shared by the terrain crates.
//!
//! This crate provides the foundational types used across the workspace:
//! - `Rgb` colours with hex conversion and blending
//! - `Grid2`, the heap-backed 2D container behind node grids and elevation maps
//! - `TerrainError`, raised when a terrain or colour ramp is set up with bad parameters

pub mod colour;
pub mod error;
pub mod grid;

pub use colour::*;
pub use error::*;
pub use grid::*;

// Re-export commonly used types
pub use glam::Vec2;
