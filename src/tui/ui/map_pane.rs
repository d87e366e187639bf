//! Map pane: the terminal map with plant markers, or the fallback panel.

use super::icons;
use super::layout::{render_two_col_line, truncate_with_ellipsis};
use crate::map::{MarkerStyle, TerminalMap};
use crate::tui::{Dashboard, MapView, Pane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_map_pane(f: &mut Frame, dashboard: &Dashboard<TerminalMap>, area: Rect) {
    match dashboard.map_view() {
        MapView::Ready { .. } => draw_map(f, dashboard, area),
        MapView::Fallback { reason } => draw_fallback(f, dashboard, reason, area),
    }
}

fn draw_map(f: &mut Frame, dashboard: &Dashboard<TerminalMap>, area: Rect) {
    let focused = dashboard.focus == Pane::Map && dashboard.modal.is_none();
    let block = Block::default()
        .title(format!(" {} Plants ", icons::MAP))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let marker = dashboard.focused_marker();
    let popup = marker.and_then(|m| dashboard.map().marker(m));

    let Some(spec) = popup else {
        dashboard.map().draw(f, area, block, None);
        return;
    };

    // Room for the popup rows, title, action and borders
    let info_height = (spec.popup.rows.len() + 4) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(info_height)])
        .split(area);

    dashboard.map().draw(f, chunks[0], block, marker);

    let label_style = Style::default().fg(Color::Cyan);
    let value_style = Style::default().fg(Color::White);
    let dim = Style::default().fg(Color::DarkGray);
    let title_style = match spec.style {
        MarkerStyle::Active => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        MarkerStyle::Inactive => dim.add_modifier(Modifier::BOLD),
    };

    let info_block = Block::default()
        .title(Span::styled(format!(" {} ", spec.popup.title), title_style))
        .borders(Borders::ALL)
        .border_style(dim);
    let inner = info_block.inner(chunks[1]);
    let total_width = inner.width as usize;

    let mut lines: Vec<Line> = spec
        .popup
        .rows
        .iter()
        .map(|(label, value)| {
            render_two_col_line(
                vec![Span::styled(format!(" {label}"), label_style)],
                vec![Span::styled(value.clone(), value_style)],
                10,
                total_width,
                dim,
            )
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!(" [Enter] {}", spec.popup.action),
        dim,
    )));

    f.render_widget(Paragraph::new(lines).block(info_block), chunks[1]);
}

/// Static plant list shown when the map cannot be displayed.
fn draw_fallback(f: &mut Frame, dashboard: &Dashboard<TerminalMap>, reason: &str, area: Rect) {
    let block = Block::default()
        .title(format!(" {} Plants (map unavailable) ", icons::MAP))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(255, 165, 0)));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let name_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let count_style = Style::default().fg(Color::Green);

    let mut lines = vec![Line::from("")];
    for plant in dashboard.plants() {
        let selected = dashboard.criteria.plant_id == Some(plant.id);
        lines.push(Line::from(vec![
            Span::styled(
                if selected { " ▶ " } else { "   " },
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("{} ", icons::ICON_PLANT),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                truncate_with_ellipsis(&plant.name, width.saturating_sub(24).max(8)),
                name_style,
            ),
            Span::styled(format!("  {} {} ", icons::ICON_CITY, plant.city), dim),
            Span::styled(format!("({})", plant.projects_count), count_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", reason),
        Style::default().fg(Color::Rgb(255, 165, 0)),
    )));
    lines.push(Line::from(Span::styled(
        fallback_hint(dashboard),
        dim,
    )));
    lines.push(Line::from(Span::styled(
        " P: find a plant | f: filter by plant",
        dim,
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// What the user can change to get the map back.
fn fallback_hint(dashboard: &Dashboard<TerminalMap>) -> &'static str {
    if dashboard.config.map.enabled {
        " Check [map] center and zoom in config.toml"
    } else {
        " Set [map] enabled = true in config.toml to show the map"
    }
}
