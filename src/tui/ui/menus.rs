//! Filter menu rendering.

use super::icons;
use super::layout::{fit_lines_to_area, popup_rect, truncate_str};
use crate::map::MapCapability;
use crate::tui::keybindings::{generate_footer_hints, Mode};
use crate::tui::Dashboard;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Entries reachable with a single digit chord (p1-p9 / d1-d9)
const MAX_CHORD_ENTRIES: usize = 9;

pub fn draw_filter_menu<M: MapCapability>(f: &mut Frame, dashboard: &Dashboard<M>) {
    let plants = dashboard.plants();
    let directions = dashboard.directions();

    let more_plants = plants.len() > MAX_CHORD_ENTRIES;
    let more_directions = directions.len() > MAX_CHORD_ENTRIES;

    // Headers, "all" rows, spacers, footer and overflow rows
    let content_height = 8
        + plants.len().min(MAX_CHORD_ENTRIES)
        + directions.len().min(MAX_CHORD_ENTRIES)
        + usize::from(more_plants)
        + 2 * usize::from(more_directions);
    let area = popup_rect(55, 80, 44, content_height as u16 + 2, f.area());

    f.render_widget(Clear, area);

    let active_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let criteria = &dashboard.criteria;
    let mut lines: Vec<Line> = Vec::new();

    // ─────────────────────────────────────────────────────────────────
    // Plant section
    // ─────────────────────────────────────────────────────────────────
    lines.push(Line::from(Span::styled("  PLANT", header_style)));
    lines.push(render_filter_radio(
        "p0",
        "All plants",
        criteria.plant_id.is_none(),
        active_style,
        dim_style,
    ));
    for (idx, plant) in plants.iter().enumerate().take(MAX_CHORD_ENTRIES) {
        lines.push(render_filter_radio(
            &format!("p{}", idx + 1),
            &truncate_str(&plant.name, 28),
            criteria.plant_id == Some(plant.id),
            active_style,
            dim_style,
        ));
    }
    if more_plants {
        lines.push(Line::from(Span::styled(
            "        more plants: P to search by name",
            dim_style,
        )));
    }
    lines.push(Line::from(""));

    // ─────────────────────────────────────────────────────────────────
    // Direction section
    // ─────────────────────────────────────────────────────────────────
    lines.push(Line::from(Span::styled("  DIRECTION", header_style)));
    lines.push(render_filter_radio(
        "d0",
        "All directions",
        criteria.direction.is_none(),
        active_style,
        dim_style,
    ));
    for (idx, direction) in directions.iter().enumerate().take(MAX_CHORD_ENTRIES) {
        lines.push(render_filter_radio(
            &format!("d{}", idx + 1),
            &truncate_str(direction, 28),
            criteria.direction.as_deref() == Some(direction.as_str()),
            active_style,
            dim_style,
        ));
    }
    if more_directions {
        // Selected direction without a digit of its own
        if let Some(direction) = criteria.direction.as_deref().filter(|d| {
            directions
                .iter()
                .position(|x| x == d)
                .is_some_and(|idx| idx >= MAX_CHORD_ENTRIES)
        }) {
            lines.push(render_filter_radio(
                "n/N",
                &truncate_str(direction, 28),
                true,
                active_style,
                dim_style,
            ));
        }
        lines.push(Line::from(Span::styled(
            format!("        more directions: n/N steps through {}", directions.len()),
            dim_style,
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        generate_footer_hints(Mode::FilterMenu),
        dim_style,
    )));

    let block = Block::default()
        .title(format!(" {} Filter ", icons::FILTER))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);
    let paragraph = Paragraph::new(lines).block(block);

    f.render_widget(paragraph, area);
}

/// Render a single-choice filter line
fn render_filter_radio<'a>(
    key: &str,
    label: &str,
    is_selected: bool,
    active_style: Style,
    dim_style: Style,
) -> Line<'a> {
    let marker = if is_selected {
        icons::RADIO_ON
    } else {
        icons::RADIO_OFF
    };
    let style = if is_selected { active_style } else { dim_style };
    Line::from(vec![
        Span::styled(
            format!("  {} ", marker),
            if is_selected {
                Style::default().fg(Color::Green)
            } else {
                dim_style
            },
        ),
        Span::styled(format!("[{}] ", key), style),
        Span::styled(label.to_string(), style),
    ])
}
