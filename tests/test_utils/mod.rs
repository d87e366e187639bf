//! Test utilities and fixtures for plantmap tests

#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use plantmap::config::Config;
use plantmap::data::{Dataset, Plant, PlantId, Project, ProjectId, ProjectStatus};
use plantmap::map::{GeoPoint, MapCapability, MapHandle, MarkerHandle, MarkerSpec, MarkerStyle};
use plantmap::tui::{Dashboard, Message};

// ============================================================================
// Map fake
// ============================================================================

/// Where a [`RecordingMap`] should fail
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum FailAt {
    #[default]
    Never,
    CreateMap,
    /// Fail when placing the n-th marker (0-based)
    AddMarker(usize),
}

/// Map that records every call made through [`MapCapability`].
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub fail_at: FailAt,
    pub created: Vec<(GeoPoint, u8)>,
    pub markers: Vec<MarkerSpec>,
    pub callbacks: Vec<Option<Message>>,
    /// Every `set_marker_style` call, in order
    pub style_calls: Vec<(MarkerHandle, MarkerStyle)>,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(fail_at: FailAt) -> Self {
        Self {
            fail_at,
            ..Self::default()
        }
    }

    pub fn style_of(&self, marker: MarkerHandle) -> MarkerStyle {
        self.markers[marker.0].style
    }
}

impl MapCapability for RecordingMap {
    fn create_map(&mut self, center: GeoPoint, zoom: u8) -> Result<MapHandle> {
        if self.fail_at == FailAt::CreateMap {
            anyhow::bail!("map provider unavailable");
        }
        self.created.push((center, zoom));
        Ok(MapHandle(self.created.len() - 1))
    }

    fn add_marker(&mut self, _map: MapHandle, marker: MarkerSpec) -> Result<MarkerHandle> {
        if self.fail_at == FailAt::AddMarker(self.markers.len()) {
            anyhow::bail!("marker rejected");
        }
        self.markers.push(marker);
        self.callbacks.push(None);
        Ok(MarkerHandle(self.markers.len() - 1))
    }

    fn on_marker_click(&mut self, marker: MarkerHandle, on_click: Message) {
        self.callbacks[marker.0] = Some(on_click);
    }

    fn set_marker_style(&mut self, marker: MarkerHandle, style: MarkerStyle) {
        self.style_calls.push((marker, style));
        self.markers[marker.0].style = style;
    }

    fn click(&self, marker: MarkerHandle) -> Option<Message> {
        self.callbacks.get(marker.0).cloned().flatten()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn test_config() -> Config {
    Config::default()
}

pub fn builtin_dataset() -> Dataset {
    Dataset::builtin().expect("built-in dataset parses")
}

/// Dashboard over the built-in dataset with a recording map
pub fn test_dashboard() -> Dashboard<RecordingMap> {
    Dashboard::new(test_config(), builtin_dataset(), RecordingMap::new())
}

pub fn make_plant(id: u32, name: &str, city: &str) -> Plant {
    Plant {
        id: PlantId(id),
        name: name.to_string(),
        city: city.to_string(),
        foundation_year: 1960,
        projects_count: 0,
        lat: 55.0,
        lon: 40.0,
    }
}

pub fn make_project(id: u32, plant_id: u32, direction: &str, status: ProjectStatus) -> Project {
    Project {
        id: ProjectId(id),
        name: format!("Project {}", id),
        plant_id: PlantId(plant_id),
        plant_name: format!("Plant {}", plant_id),
        direction: direction.to_string(),
        status,
        status_text: String::new(),
        initiator: "Initiator".to_string(),
        leader: "Leader".to_string(),
        goals: "Goals".to_string(),
        description: String::new(),
        budget: "1 млн ₽".to_string(),
        created_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
    }
}

/// Ids of the projects currently shown
pub fn shown_ids<M: MapCapability>(dashboard: &Dashboard<M>) -> Vec<u32> {
    dashboard.filtered_projects().map(|p| p.id.0).collect()
}

/// Marker of the given plant
pub fn marker_for<M: MapCapability>(dashboard: &Dashboard<M>, plant: u32) -> MarkerHandle {
    match dashboard.map_view() {
        plantmap::tui::MapView::Ready { markers, .. } => markers
            .iter()
            .find(|(id, _)| *id == PlantId(plant))
            .map(|(_, handle)| *handle)
            .expect("plant has a marker"),
        plantmap::tui::MapView::Fallback { reason } => panic!("map in fallback: {reason}"),
    }
}

// ============================================================================
// Key events
// ============================================================================

/// Create a key event with no modifiers
pub fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a key event with SHIFT modifier (how terminals report uppercase)
pub fn key_event_shift(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::SHIFT,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn key_event_ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}
