//! Map capability used by the dashboard.
//!
//! The dashboard only talks to a map through [`MapCapability`]: create a
//! viewport, place markers, register what a click on a marker should send
//! back, and restyle markers. `canvas::TerminalMap` is the implementation
//! drawn inside the TUI; tests plug in their own.

pub mod canvas;

pub use canvas::TerminalMap;

use crate::tui::Message;
use anyhow::Result;

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Opaque handle to a created map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapHandle(pub usize);

/// Opaque handle to a placed marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub usize);

/// Visual state of a plant marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// Plant matches the current plant filter (or there is none)
    #[default]
    Active,
    /// Plant is excluded by the current plant filter
    Inactive,
}

/// Text shown when a marker is opened
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerPopup {
    pub title: String,
    /// `(label, value)` rows
    pub rows: Vec<(String, String)>,
    /// Label of the action Enter/click performs
    pub action: String,
}

/// Everything needed to place one marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub coords: GeoPoint,
    pub popup: MarkerPopup,
    /// Short hover text
    pub hint: String,
    pub style: MarkerStyle,
}

pub trait MapCapability {
    /// Create the map viewport. Fails if the map cannot be shown.
    fn create_map(&mut self, center: GeoPoint, zoom: u8) -> Result<MapHandle>;

    /// Place a marker on a map previously returned by `create_map`.
    fn add_marker(&mut self, map: MapHandle, marker: MarkerSpec) -> Result<MarkerHandle>;

    /// Register the message delivered when `marker` is clicked.
    fn on_marker_click(&mut self, marker: MarkerHandle, on_click: Message);

    fn set_marker_style(&mut self, marker: MarkerHandle, style: MarkerStyle);

    /// Click `marker`, returning the message registered for it.
    fn click(&self, marker: MarkerHandle) -> Option<Message>;
}
