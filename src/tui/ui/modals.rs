//! Modal popup rendering - project passport and plant finder.

use super::icons;
use super::layout::{
    display_width, popup_rect, render_two_col_line, truncate_with_ellipsis, wrap_text,
};
use super::status::project_status_config;
use crate::map::MapCapability;
use crate::tui::keybindings::{generate_footer_hints, Mode};
use crate::tui::Dashboard;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_passport<M: MapCapability>(f: &mut Frame, dashboard: &Dashboard<M>) {
    let Some(project) = dashboard.passport_project() else {
        return;
    };

    let area = popup_rect(70, 80, 50, 18, f.area());
    f.render_widget(Clear, area);

    let label_style = Style::default().fg(Color::Cyan);
    let value_style = Style::default().fg(Color::White);
    let dim = Style::default().fg(Color::DarkGray);
    let status = project_status_config(project.status);

    let block = Block::default()
        .title(Span::styled(
            format!(" Passport #{} ", project.id),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Body scrolls, footer stays
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    let total_width = chunks[0].width as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", project.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let rows: [(&str, &str, Vec<Span<'static>>); 8] = [
        ("", "Project", vec![Span::styled(project.id.to_string(), value_style)]),
        (
            icons::ICON_PLANT,
            "Plant",
            vec![Span::styled(project.plant_name.clone(), value_style)],
        ),
        (
            icons::ICON_DIRECTION,
            "Direction",
            vec![Span::styled(project.direction.clone(), value_style)],
        ),
        (
            status.icon,
            "Status",
            vec![Span::styled(project.status_label().to_string(), status.style)],
        ),
        (
            icons::ICON_PERSON,
            "Initiator",
            vec![Span::styled(project.initiator.clone(), value_style)],
        ),
        (
            icons::ICON_PERSON,
            "Leader",
            vec![Span::styled(project.leader.clone(), value_style)],
        ),
        (
            icons::ICON_BUDGET,
            "Budget",
            vec![Span::styled(project.budget.clone(), value_style)],
        ),
        (
            icons::ICON_CREATED,
            "Created",
            vec![Span::styled(
                project.created_date.format("%d.%m.%Y").to_string(),
                value_style,
            )],
        ),
    ];

    let left_width = 16;
    for (icon, label, value) in rows {
        let left = vec![
            Span::styled(format!("  {:<2}", icon), label_style),
            Span::styled(label.to_string(), label_style),
        ];
        lines.push(render_two_col_line(left, value, left_width, total_width, dim));
    }

    let text_width = total_width.saturating_sub(4);
    for (icon, label, text) in [
        (icons::ICON_GOALS, "Goals", &project.goals),
        (icons::PROJECTS, "Description", &project.description),
    ] {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", icon), label_style),
            Span::styled(label.to_string(), label_style),
        ]));
        if text.trim().is_empty() {
            lines.push(Line::from(Span::styled("    —", dim)));
        }
        for chunk in wrap_text(text, text_width) {
            lines.push(Line::from(Span::styled(format!("    {chunk}"), value_style)));
        }
    }

    // Never scroll past the last line
    let body_height = chunks[0].height as usize;
    let max_scroll = lines.len().saturating_sub(body_height);
    let scroll = dashboard.passport_scroll.min(max_scroll) as u16;

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), chunks[0]);

    let more = if max_scroll > scroll as usize {
        "  ↓ more"
    } else {
        ""
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(generate_footer_hints(Mode::Passport), dim),
            Span::styled(more, label_style),
        ])),
        chunks[1],
    );
}

pub fn draw_plant_finder<M: MapCapability>(f: &mut Frame, dashboard: &Dashboard<M>) {
    let area = popup_rect(50, 60, 40, 14, f.area());
    f.render_widget(Clear, area);

    let dim = Style::default().fg(Color::DarkGray);
    let block = Block::default()
        .title(format!(" {} Find plant ", icons::SEARCH))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Query
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    let query = Line::from(vec![
        Span::styled(" > ", Style::default().fg(Color::Magenta)),
        Span::styled(
            dashboard.finder_query.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("█", Style::default().fg(Color::Magenta)),
    ]);
    f.render_widget(Paragraph::new(query), chunks[0]);

    let width = chunks[1].width as usize;
    let plants = dashboard.plants();
    let items: Vec<ListItem> = dashboard
        .finder_results
        .iter()
        .filter_map(|&idx| plants.get(idx))
        .map(|plant| {
            let city = format!("  {}", plant.city);
            let count = format!("  ({})", plant.projects_count);
            let name_width = width
                .saturating_sub(display_width(&city) + display_width(&count) + 3)
                .max(6);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", icons::ICON_PLANT),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    truncate_with_ellipsis(&plant.name, name_width),
                    Style::default().fg(Color::White),
                ),
                Span::styled(city, dim),
                Span::styled(count, Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    if items.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("   No plants match", dim)),
            chunks[1],
        );
    } else {
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Rgb(40, 40, 50))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(icons::SELECTED);
        let mut state = ListState::default();
        state.select(Some(dashboard.finder_selected));
        f.render_stateful_widget(list, chunks[1], &mut state);
    }

    f.render_widget(
        Paragraph::new(Span::styled(generate_footer_hints(Mode::PlantFinder), dim)),
        chunks[2],
    );
}
