//! Plantmap - Terminal dashboard for industrial plants and their projects
//!
//! This library crate exposes internal modules for integration testing.

pub mod config;
pub mod data;
pub mod map;
pub mod tui;
