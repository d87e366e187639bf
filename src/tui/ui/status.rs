//! Status configuration, statistics bar and status bar rendering.

use super::icons;
use super::layout::{fit_lines_to_area, popup_rect};
use crate::data::{ProjectStatus, Statistics};
use crate::map::MapCapability;
use crate::tui::keybindings::{current_mode, generate_footer_hints, generate_keyboard_shortcuts};
use crate::tui::Dashboard;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Unified status configuration - single source of truth for icon and style.
pub struct StatusConfig {
    pub icon: &'static str,
    pub style: Style,
}

/// Trait for types that can provide their display configuration (icon + style).
pub trait StatusConfigurable {
    fn status_config(&self) -> StatusConfig;
}

impl StatusConfigurable for ProjectStatus {
    fn status_config(&self) -> StatusConfig {
        match self {
            ProjectStatus::Planned => StatusConfig {
                icon: icons::STATUS_PLANNED,
                style: Style::default().fg(Color::Cyan),
            },
            ProjectStatus::Active => StatusConfig {
                icon: icons::STATUS_ACTIVE,
                style: Style::default().fg(Color::Green),
            },
            ProjectStatus::Suspended => StatusConfig {
                icon: icons::STATUS_SUSPENDED,
                style: Style::default().fg(Color::Rgb(255, 165, 0)), // Orange
            },
            ProjectStatus::Completed => StatusConfig {
                icon: icons::STATUS_COMPLETED,
                style: Style::default().fg(Color::Magenta),
            },
        }
    }
}

pub fn project_status_config(status: ProjectStatus) -> StatusConfig {
    status.status_config()
}

/// Generate the status legend for help popup.
pub fn generate_status_legend() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from("  PROJECT STATUS"),
        Line::from("  ──────────────"),
    ];
    for status in ProjectStatus::all() {
        let cfg = status.status_config();
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", cfg.icon), cfg.style),
            Span::raw(format!("{:<12}", status.label())),
            Span::styled(status.description(), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines.extend([
        Line::from(""),
        Line::from("  MAP MARKERS"),
        Line::from("  ───────────"),
        Line::from(vec![
            Span::styled("  ●  ", Style::default().fg(Color::Green)),
            Span::raw(format!("{:<12}", "Active")),
            Span::styled(
                "Plant matches the plant filter",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ●  ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:<12}", "Inactive")),
            Span::styled(
                "Another plant is selected",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ◉  ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{:<12}", "Focused")),
            Span::styled(
                "Enter shows the plant's projects",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ]);
    lines
}

/// Draw the four-figure statistics bar.
///
/// Figures always describe the whole dataset, whatever the filter.
pub fn draw_statistics(f: &mut Frame, stats: Statistics, area: Rect) {
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let completed = project_status_config(ProjectStatus::Completed);
    let active = project_status_config(ProjectStatus::Active);

    let line = Line::from(vec![
        Span::styled(" Projects ", label_style),
        Span::styled(stats.total_projects.to_string(), value_style),
        Span::styled("  │  Plants ", label_style),
        Span::styled(stats.active_plants.to_string(), value_style),
        Span::styled("  │  ", label_style),
        Span::styled(format!("{} ", completed.icon), completed.style),
        Span::styled("Completed ", label_style),
        Span::styled(stats.completed.to_string(), value_style),
        Span::styled("  │  ", label_style),
        Span::styled(format!("{} ", active.icon), active.style),
        Span::styled("In progress ", label_style),
        Span::styled(stats.in_progress.to_string(), value_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar at the bottom of the screen.
pub fn draw_status_bar<M: MapCapability>(f: &mut Frame, dashboard: &Dashboard<M>, area: Rect) {
    let width = area.width as usize;
    let mode = current_mode(dashboard);

    let shown = dashboard.filtered_indices().len();
    let total = dashboard.dataset().projects.len();
    let counter = format!(" {}/{} ", shown, total);

    let hints = if width >= 100 {
        generate_footer_hints(mode)
    } else if width >= 50 {
        "  ?: help | q: quit"
    } else {
        ""
    };

    let hint_style = if dashboard.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(
            counter,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, hint_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Draw the help popup.
pub fn draw_help_popup<M: MapCapability>(f: &mut Frame, dashboard: &Dashboard<M>) {
    let area = popup_rect(65, 80, 40, 12, f.area());

    f.render_widget(Clear, area);

    let tab_style_active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let tab_style_inactive = Style::default().fg(Color::DarkGray);

    let tab_style = |tab: usize| {
        if dashboard.help_tab() == tab {
            tab_style_active
        } else {
            tab_style_inactive
        }
    };

    let tabs = Line::from(vec![
        Span::styled(" [1] Shortcuts ", tab_style(0)),
        Span::raw(" │ "),
        Span::styled("[2] Legend ", tab_style(1)),
    ]);

    let mut lines = vec![tabs, Line::from("")];
    if dashboard.help_tab() == 0 {
        lines.extend(generate_keyboard_shortcuts().into_iter().map(Line::from));
    } else {
        lines.extend(generate_status_legend());
    }

    lines.push(Line::from(Span::styled(
        "  Press 1: Shortcuts | 2: Legend | Esc: Close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(format!(" {} Help ", icons::HELP))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, area);
}
