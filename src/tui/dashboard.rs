use crate::config::Config;
use crate::data::{apply_filters, Dataset, FilterCriteria, Plant, PlantId, Project, ProjectId, Statistics};
use crate::map::{GeoPoint, MapCapability, MapHandle, MarkerHandle, MarkerPopup, MarkerSpec, MarkerStyle};
use crate::tui::search::FuzzySearch;
use anyhow::Result;

/// Number of cards skipped by PageUp/PageDown
const PAGE_SIZE: usize = 5;

/// Active modal state - only one modal can be active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    Help { tab: usize },
    FilterMenu,
    PlantFinder,
    Passport { project: ProjectId },
}

impl ModalState {
    pub fn is_none(&self) -> bool {
        matches!(self, ModalState::None)
    }
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Projects,
    Map,
}

/// Outcome of map initialization
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Ready {
        map: MapHandle,
        /// One marker per plant, in plant order
        markers: Vec<(PlantId, MarkerHandle)>,
    },
    /// Map could not be shown; the plant list is rendered instead
    Fallback { reason: String },
}

/// The project dashboard: owns the dataset, the filter criteria and the
/// derived view, and drives an injected map.
pub struct Dashboard<M: MapCapability> {
    pub config: Config,
    dataset: Dataset,
    directions: Vec<String>,
    statistics: Statistics,

    map: M,
    map_view: MapView,

    // Filter state
    pub criteria: FilterCriteria,
    filtered_indices: Vec<usize>,

    // UI state
    pub modal: ModalState,
    pub focus: Pane,
    pub search_mode: bool,
    pub selected: usize,
    pub marker_focus: Option<usize>,
    pub passport_scroll: usize,

    // Plant finder state
    pub finder_query: String,
    pub finder_results: Vec<usize>,
    pub finder_selected: usize,
}

// Modal state accessors
impl<M: MapCapability> Dashboard<M> {
    pub fn show_help(&self) -> bool {
        matches!(self.modal, ModalState::Help { .. })
    }

    pub fn help_tab(&self) -> usize {
        match self.modal {
            ModalState::Help { tab } => tab,
            _ => 0,
        }
    }

    pub fn show_filter_menu(&self) -> bool {
        matches!(self.modal, ModalState::FilterMenu)
    }

    pub fn show_plant_finder(&self) -> bool {
        matches!(self.modal, ModalState::PlantFinder)
    }

    pub fn show_passport(&self) -> bool {
        matches!(self.modal, ModalState::Passport { .. })
    }
}

impl<M: MapCapability> Dashboard<M> {
    /// Build the dashboard and place the plant markers on `map`.
    ///
    /// A map that cannot be created leaves the dashboard in fallback mode;
    /// construction itself never fails.
    pub fn new(config: Config, dataset: Dataset, map: M) -> Self {
        let directions = dataset.directions();
        let statistics = Statistics::compute(&dataset.projects);

        let mut dashboard = Self {
            config,
            dataset,
            directions,
            statistics,
            map,
            map_view: MapView::Fallback {
                reason: String::new(),
            },
            criteria: FilterCriteria::default(),
            filtered_indices: Vec::new(),
            modal: ModalState::None,
            focus: Pane::Projects,
            search_mode: false,
            selected: 0,
            marker_focus: None,
            passport_scroll: 0,
            finder_query: String::new(),
            finder_results: Vec::new(),
            finder_selected: 0,
        };

        dashboard.apply_filters();
        dashboard.init_map();

        tracing::info!(
            plants = dashboard.dataset.plants.len(),
            projects = dashboard.dataset.projects.len(),
            map_ready = dashboard.map_ready(),
            "Dashboard initialized"
        );
        dashboard
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn plants(&self) -> &[Plant] {
        &self.dataset.plants
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_view(&self) -> &MapView {
        &self.map_view
    }

    pub fn map_ready(&self) -> bool {
        matches!(self.map_view, MapView::Ready { .. })
    }

    /// Indices into `dataset().projects` that pass the current filter
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered_indices
    }

    /// Projects that pass the current filter, in source order
    pub fn filtered_projects(&self) -> impl Iterator<Item = &Project> {
        self.filtered_indices
            .iter()
            .filter_map(|&idx| self.dataset.projects.get(idx))
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.filtered_indices
            .get(self.selected)
            .and_then(|&idx| self.dataset.projects.get(idx))
    }

    /// Project shown in the passport modal
    pub fn passport_project(&self) -> Option<&Project> {
        match self.modal {
            ModalState::Passport { project } => self.dataset.project(project),
            _ => None,
        }
    }

    /// Marker handle of the focused plant marker
    pub fn focused_marker(&self) -> Option<MarkerHandle> {
        let MapView::Ready { markers, .. } = &self.map_view else {
            return None;
        };
        self.marker_focus
            .and_then(|idx| markers.get(idx))
            .map(|(_, handle)| *handle)
    }

    /// Plant under the focused marker
    pub fn focused_plant(&self) -> Option<&Plant> {
        let MapView::Ready { markers, .. } = &self.map_view else {
            return None;
        };
        let (plant_id, _) = markers.get(self.marker_focus?)?;
        self.dataset.plant(*plant_id)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.criteria.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Update
    // ─────────────────────────────────────────────────────────────────────────

    /// Process a message and update dashboard state (Elm Architecture update function).
    ///
    /// Returns `true` if the app should quit.
    pub fn update(&mut self, msg: super::Message) -> bool {
        use super::Message;
        match msg {
            // ─────────────────────────────────────────────────────────────────
            // App lifecycle
            // ─────────────────────────────────────────────────────────────────
            Message::Quit => return true,

            // ─────────────────────────────────────────────────────────────────
            // Project list navigation
            // ─────────────────────────────────────────────────────────────────
            Message::MoveUp => self.move_selection(-1),
            Message::MoveDown => self.move_selection(1),
            Message::GotoTop => self.selected = 0,
            Message::GotoBottom => {
                self.selected = self.filtered_indices.len().saturating_sub(1);
            }
            Message::PageUp => self.move_selection(-(PAGE_SIZE as i32)),
            Message::PageDown => self.move_selection(PAGE_SIZE as i32),
            Message::ToggleFocus => self.toggle_focus(),

            // ─────────────────────────────────────────────────────────────────
            // Map
            // ─────────────────────────────────────────────────────────────────
            Message::NextMarker => self.move_marker_focus(1),
            Message::PrevMarker => self.move_marker_focus(-1),
            Message::ActivateFocusedMarker => {
                if let Some(marker) = self.focused_marker() {
                    return self.click_marker(marker);
                }
            }
            Message::MarkerClicked(marker) => return self.click_marker(marker),
            Message::PlantMarkerActivated(plant_id) => self.on_plant_marker_activated(plant_id),

            // ─────────────────────────────────────────────────────────────────
            // Search mode
            // ─────────────────────────────────────────────────────────────────
            Message::EnterSearch => self.search_mode = true,
            Message::ExitSearch => {
                self.search_mode = false;
                self.set_search_text(String::new());
            }
            Message::ConfirmSearch => self.search_mode = false,
            Message::SearchInput(c) => {
                let mut text = self.criteria.search_text.clone();
                text.push(c);
                self.set_search_text(text);
            }
            Message::SearchBackspace => {
                let mut text = self.criteria.search_text.clone();
                text.pop();
                self.set_search_text(text);
            }

            // ─────────────────────────────────────────────────────────────────
            // Filter menu
            // ─────────────────────────────────────────────────────────────────
            Message::ToggleFilterMenu => self.toggle_modal(ModalState::FilterMenu),
            Message::SelectPlantFilter(idx) => self.select_plant_filter(idx),
            Message::SelectDirectionFilter(idx) => self.select_direction_filter(idx),
            Message::NextDirectionFilter => self.step_direction_filter(true),
            Message::PrevDirectionFilter => self.step_direction_filter(false),
            Message::ResetFilters => self.reset_filters(),

            // ─────────────────────────────────────────────────────────────────
            // Plant finder
            // ─────────────────────────────────────────────────────────────────
            Message::OpenPlantFinder => self.open_plant_finder(),
            Message::PlantFinderInput(c) => {
                self.finder_query.push(c);
                self.update_plant_finder();
            }
            Message::PlantFinderBackspace => {
                self.finder_query.pop();
                self.update_plant_finder();
            }
            Message::PlantFinderUp => {
                self.finder_selected = self.finder_selected.saturating_sub(1);
            }
            Message::PlantFinderDown => {
                if self.finder_selected + 1 < self.finder_results.len() {
                    self.finder_selected += 1;
                }
            }
            Message::ConfirmPlantFinder => self.confirm_plant_finder(),

            // ─────────────────────────────────────────────────────────────────
            // Passport
            // ─────────────────────────────────────────────────────────────────
            Message::OpenPassport => {
                if let Some(id) = self.selected_project().map(|p| p.id) {
                    self.open_passport(id);
                }
            }
            Message::ScrollPassport(delta) => self.scroll_passport(delta),
            Message::ClosePassport => self.close_passport(),

            // ─────────────────────────────────────────────────────────────────
            // Help
            // ─────────────────────────────────────────────────────────────────
            Message::ToggleHelp => self.toggle_modal(ModalState::Help { tab: 0 }),
            Message::SetHelpTab(tab) => self.modal = ModalState::Help { tab },
            Message::CloseModal => self.modal = ModalState::None,

            Message::None => {}
        }
        false
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────────────────────

    /// Recompute the filtered view from the current criteria and resync markers.
    pub fn apply_filters(&mut self) {
        self.filtered_indices = apply_filters(&self.dataset.projects, &self.criteria);

        // Keep the selection inside the new list
        if self.selected >= self.filtered_indices.len() {
            self.selected = self.filtered_indices.len().saturating_sub(1);
        }

        tracing::debug!(
            plant = ?self.criteria.plant_id,
            direction = ?self.criteria.direction,
            search = %self.criteria.search_text,
            matched = self.filtered_indices.len(),
            "Applied filters"
        );

        self.sync_marker_highlight();
    }

    pub fn set_plant_filter(&mut self, plant_id: Option<PlantId>) {
        self.criteria.plant_id = plant_id;
        self.apply_filters();
    }

    pub fn set_direction_filter(&mut self, direction: Option<String>) {
        self.criteria.direction = direction;
        self.apply_filters();
    }

    pub fn set_search_text(&mut self, text: String) {
        self.criteria.search_text = text;
        self.apply_filters();
    }

    /// Clear every criterion: full list, all markers active.
    pub fn reset_filters(&mut self) {
        self.criteria.clear();
        self.selected = 0;
        self.apply_filters();
    }

    /// Menu index 0 clears the plant filter, n selects the n-th plant.
    fn select_plant_filter(&mut self, idx: usize) {
        let plant_id = match idx {
            0 => None,
            n => match self.dataset.plants.get(n - 1) {
                Some(plant) => Some(plant.id),
                None => return,
            },
        };
        self.set_plant_filter(plant_id);
    }

    /// Menu index 0 clears the direction filter, n selects the n-th direction.
    fn select_direction_filter(&mut self, idx: usize) {
        let direction = match idx {
            0 => None,
            n => match self.directions.get(n - 1) {
                Some(direction) => Some(direction.clone()),
                None => return,
            },
        };
        self.set_direction_filter(direction);
    }

    /// Move the direction filter one entry along the menu order. Stepping
    /// past either end lands on all directions.
    fn step_direction_filter(&mut self, forward: bool) {
        let count = self.directions.len();
        if count == 0 {
            return;
        }
        let current = self
            .criteria
            .direction
            .as_ref()
            .and_then(|d| self.directions.iter().position(|x| x == d));
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(i), true) => (i + 1 < count).then_some(i + 1),
            (Some(i), false) => i.checked_sub(1),
        };
        let direction = next.and_then(|i| self.directions.get(i).cloned());
        self.set_direction_filter(direction);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Map
    // ─────────────────────────────────────────────────────────────────────────

    fn init_map(&mut self) {
        if !self.config.map.enabled {
            tracing::warn!("Map disabled in config, showing plant list instead");
            self.map_view = MapView::Fallback {
                reason: "The map is disabled in the configuration.".to_string(),
            };
            return;
        }

        match self.place_markers() {
            Ok(view) => {
                self.map_view = view;
                self.sync_marker_highlight();
            }
            Err(e) => {
                tracing::error!("Map initialization failed: {:#}", e);
                self.map_view = MapView::Fallback {
                    reason: format!("Map initialization failed: {:#}", e),
                };
            }
        }
    }

    fn place_markers(&mut self) -> Result<MapView> {
        let [lat, lon] = self.config.map.center;
        let map = self.map.create_map(GeoPoint::new(lat, lon), self.config.map.zoom)?;

        let mut markers = Vec::with_capacity(self.dataset.plants.len());
        for plant in &self.dataset.plants {
            let marker = self.map.add_marker(map, marker_spec(plant))?;
            self.map
                .on_marker_click(marker, super::Message::PlantMarkerActivated(plant.id));
            markers.push((plant.id, marker));
        }

        Ok(MapView::Ready { map, markers })
    }

    /// Style each marker active when it passes the plant filter.
    ///
    /// No-op while the map is in fallback mode.
    pub fn sync_marker_highlight(&mut self) {
        let MapView::Ready { markers, .. } = &self.map_view else {
            return;
        };

        for (plant_id, marker) in markers {
            let style = match self.criteria.plant_id {
                None => MarkerStyle::Active,
                Some(selected) if selected == *plant_id => MarkerStyle::Active,
                Some(_) => MarkerStyle::Inactive,
            };
            self.map.set_marker_style(*marker, style);
        }
    }

    /// A plant marker was activated: filter by that plant and bring the
    /// project list into view.
    pub fn on_plant_marker_activated(&mut self, plant_id: PlantId) {
        tracing::info!(plant = %plant_id, "Plant marker activated");

        self.set_plant_filter(Some(plant_id));

        // Scroll the project list into view
        self.modal = ModalState::None;
        self.focus = Pane::Projects;
        self.selected = 0;

        // Keep the map focus on the activated plant
        if let MapView::Ready { markers, .. } = &self.map_view {
            if let Some(idx) = markers.iter().position(|(id, _)| *id == plant_id) {
                self.marker_focus = Some(idx);
            }
        }
    }

    /// Deliver the click callback registered for `marker`.
    fn click_marker(&mut self, marker: MarkerHandle) -> bool {
        match self.map.click(marker) {
            Some(msg) => self.update(msg),
            None => false,
        }
    }

    fn move_marker_focus(&mut self, delta: i32) {
        let MapView::Ready { markers, .. } = &self.map_view else {
            return;
        };
        let len = markers.len();
        if len == 0 {
            return;
        }

        self.marker_focus = Some(match self.marker_focus {
            None if delta >= 0 => 0,
            None => len - 1,
            Some(idx) => (idx as i64 + i64::from(delta)).rem_euclid(len as i64) as usize,
        });
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Projects if self.map_ready() => {
                if self.marker_focus.is_none() {
                    self.move_marker_focus(1);
                }
                Pane::Map
            }
            _ => Pane::Projects,
        };
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.filtered_indices.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as i64 + i64::from(delta);
        self.selected = target.clamp(0, len as i64 - 1) as usize;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────

    fn toggle_modal(&mut self, modal: ModalState) {
        if std::mem::discriminant(&self.modal) == std::mem::discriminant(&modal) {
            self.modal = ModalState::None;
        } else {
            self.modal = modal;
        }
    }

    /// Show the passport of a project. Unknown ids are ignored.
    pub fn open_passport(&mut self, project: ProjectId) {
        if self.dataset.project(project).is_some() {
            self.modal = ModalState::Passport { project };
            self.passport_scroll = 0;
        }
    }

    pub fn close_passport(&mut self) {
        self.modal = ModalState::None;
        self.passport_scroll = 0;
    }

    pub fn scroll_passport(&mut self, delta: i32) {
        let new_scroll = self.passport_scroll as i64 + i64::from(delta);
        self.passport_scroll = new_scroll.max(0) as usize;
    }

    pub fn open_plant_finder(&mut self) {
        self.modal = ModalState::PlantFinder;
        self.finder_query.clear();
        self.update_plant_finder();
    }

    pub fn update_plant_finder(&mut self) {
        let mut search = FuzzySearch::new();
        self.finder_results = search.search_plants(&self.dataset.plants, &self.finder_query);
        self.finder_selected = 0;
    }

    /// Plant highlighted in the finder
    pub fn finder_plant(&self) -> Option<&Plant> {
        self.finder_results
            .get(self.finder_selected)
            .and_then(|&idx| self.dataset.plants.get(idx))
    }

    fn confirm_plant_finder(&mut self) {
        if let Some(plant_id) = self.finder_plant().map(|p| p.id) {
            self.on_plant_marker_activated(plant_id);
        }
        self.finder_query.clear();
        self.update_plant_finder();
    }
}

/// Marker contents for one plant: hint, popup rows and the click action.
fn marker_spec(plant: &Plant) -> MarkerSpec {
    MarkerSpec {
        coords: GeoPoint::new(plant.lat, plant.lon),
        popup: MarkerPopup {
            title: plant.name.clone(),
            rows: vec![
                ("City".to_string(), plant.city.clone()),
                ("Founded".to_string(), plant.foundation_year.to_string()),
                ("Projects".to_string(), plant.projects_count.to_string()),
            ],
            action: "Show projects".to_string(),
        },
        hint: plant.name.clone(),
        style: MarkerStyle::Active,
    }
}
