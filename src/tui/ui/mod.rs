//! TUI rendering module.
//!
//! This module handles all UI rendering for the terminal interface.
//! It's organized into submodules for maintainability:
//!
//! - `icons` - Nerd Font icons used throughout the UI
//! - `layout` - Layout calculations and text utilities
//! - `status` - Status configuration, statistics and status bar rendering
//! - `projects` - Header and project cards
//! - `map_pane` - Plant map or its fallback panel
//! - `modals` - Modal popup rendering (passport, plant finder)
//! - `menus` - Filter menu

pub mod icons;
pub mod layout;
mod map_pane;
mod menus;
mod modals;
mod projects;
mod status;

// Re-export the main draw function
pub use self::draw::draw;

mod draw {

    use super::layout::main_layout;
    use super::map_pane::draw_map_pane;
    use super::menus::draw_filter_menu;
    use super::modals::{draw_passport, draw_plant_finder};
    use super::projects::{draw_header, draw_projects};
    use super::status::{draw_help_popup, draw_statistics, draw_status_bar};
    use crate::map::TerminalMap;
    use crate::tui::Dashboard;
    use ratatui::Frame;

    /// Main draw function - renders the entire TUI.
    pub fn draw(f: &mut Frame, dashboard: &Dashboard<TerminalMap>) {
        let layout = main_layout(f.area());

        draw_header(f, dashboard, layout.header);
        draw_statistics(f, dashboard.statistics(), layout.stats);
        draw_map_pane(f, dashboard, layout.map);
        draw_projects(f, dashboard, layout.projects);
        draw_status_bar(f, dashboard, layout.status);

        // Overlays
        if dashboard.show_filter_menu() {
            draw_filter_menu(f, dashboard);
        }

        if dashboard.show_plant_finder() {
            draw_plant_finder(f, dashboard);
        }

        if dashboard.show_passport() {
            draw_passport(f, dashboard);
        }

        if dashboard.show_help() {
            draw_help_popup(f, dashboard);
        }
    }
}
