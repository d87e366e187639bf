//! Header and project card rendering.

use super::icons;
use super::layout::{truncate_with_ellipsis, wrap_text};
use super::status::project_status_config;
use crate::data::filter::match_ranges;
use crate::data::Project;
use crate::map::MapCapability;
use crate::tui::{Dashboard, Pane};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Description lines shown on a card before it is cut
const CARD_DESCRIPTION_LINES: usize = 2;

/// Draw the application header: title and active filters, or the search box.
pub fn draw_header<M: MapCapability>(f: &mut Frame, dashboard: &Dashboard<M>, area: Rect) {
    let border_style = if dashboard.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = if dashboard.search_mode {
        Line::from(vec![
            Span::styled(
                format!("{} Search: ", icons::SEARCH),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                dashboard.criteria.search_text.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else {
        let mut spans = vec![
            Span::styled(format!("{} ", icons::APP), Style::default().fg(Color::Cyan)),
            Span::styled(
                "Plant projects ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        spans.extend(filter_summary(dashboard));
        Line::from(spans)
    };

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

/// One span per active criterion, or "[all projects]".
fn filter_summary<M: MapCapability>(dashboard: &Dashboard<M>) -> Vec<Span<'static>> {
    let tag_style = Style::default().fg(Color::Green);
    let criteria = &dashboard.criteria;

    if criteria.is_empty() {
        return vec![Span::styled("[all projects]", Style::default().fg(Color::DarkGray))];
    }

    let mut spans = Vec::new();
    if let Some(plant_id) = criteria.plant_id {
        let name = dashboard
            .dataset()
            .plant(plant_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("plant {}", plant_id));
        spans.push(Span::styled(
            format!("[{} {}] ", icons::ICON_PLANT, name),
            tag_style,
        ));
    }
    if let Some(direction) = &criteria.direction {
        spans.push(Span::styled(
            format!("[{} {}] ", icons::ICON_DIRECTION, direction),
            tag_style,
        ));
    }
    if !criteria.search_text.is_empty() {
        spans.push(Span::styled(
            format!("[{} \"{}\"] ", icons::SEARCH, criteria.search_text),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::styled("x: reset", Style::default().fg(Color::DarkGray)));
    spans
}

/// Draw the filtered project list as cards.
pub fn draw_projects<M: MapCapability>(f: &mut Frame, dashboard: &Dashboard<M>, area: Rect) {
    let focused = dashboard.focus == Pane::Projects && dashboard.modal.is_none();
    let shown = dashboard.filtered_indices().len();

    let block = Block::default()
        .title(format!(" {} Projects ({}) ", icons::PROJECTS, shown))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if shown == 0 {
        draw_no_results(f, dashboard, block, area);
        return;
    }

    let inner = block.inner(area);
    let width = inner.width as usize;
    let query = dashboard.criteria.search_text.as_str();
    let show_descriptions = dashboard.config.ui.show_descriptions;

    let items: Vec<ListItem> = dashboard
        .filtered_projects()
        .map(|project| ListItem::new(card_lines(project, query, width, show_descriptions)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 50)))
        .highlight_symbol(icons::SELECTED);

    let mut state = ListState::default();
    state.select(Some(dashboard.selected));
    f.render_stateful_widget(list, area, &mut state);
}

/// Explicit empty state when nothing passes the filter.
fn draw_no_results<M: MapCapability>(
    f: &mut Frame,
    dashboard: &Dashboard<M>,
    block: Block,
    area: Rect,
) {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No projects match the current filters",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if dashboard.has_active_filters() {
        lines.push(Line::from(Span::styled("Press x to reset filters", dim)));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Lines of one project card. Every project field appears on the card.
fn card_lines(
    project: &Project,
    query: &str,
    width: usize,
    show_descriptions: bool,
) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(Color::White);
    let dim = Style::default().fg(Color::DarkGray);
    let label = Style::default().fg(Color::Cyan);
    let status = project_status_config(project.status);
    // Room left after the highlight symbol and indent
    let body_width = width.saturating_sub(4);

    let mut lines = Vec::new();

    // Title row: status icon, name, id
    let mut title = vec![Span::styled(format!(" {} ", status.icon), status.style)];
    title.extend(highlight_search_matches(
        &truncate_with_ellipsis(&project.name, body_width.saturating_sub(8)),
        query,
        text_style.add_modifier(Modifier::BOLD),
    ));
    title.push(Span::styled(format!("  #{}", project.id), dim));
    lines.push(Line::from(title));

    // Plant, direction, status text
    lines.push(Line::from(vec![
        Span::styled(format!("   {} ", icons::ICON_PLANT), label),
        Span::styled(project.plant_name.clone(), text_style),
        Span::styled("  ·  ", dim),
        Span::styled(format!("{} ", icons::ICON_DIRECTION), label),
        Span::styled(project.direction.clone(), text_style),
        Span::styled("  ·  ", dim),
        Span::styled(project.status_label().to_string(), status.style),
    ]));

    // People
    let mut people = vec![
        Span::styled(format!("   {} ", icons::ICON_PERSON), label),
        Span::styled("Initiator: ", dim),
    ];
    people.extend(highlight_search_matches(&project.initiator, query, text_style));
    people.push(Span::styled("   Leader: ", dim));
    people.extend(highlight_search_matches(&project.leader, query, text_style));
    lines.push(Line::from(people));

    // Goals
    let mut goals = vec![
        Span::styled(format!("   {} ", icons::ICON_GOALS), label),
        Span::styled("Goals: ", dim),
    ];
    goals.extend(highlight_search_matches(
        &truncate_with_ellipsis(&project.goals, body_width.saturating_sub(10)),
        query,
        text_style,
    ));
    lines.push(Line::from(goals));

    if show_descriptions && !project.description.is_empty() {
        let wrapped = wrap_text(&project.description, body_width.saturating_sub(3));
        let cut = wrapped.len() > CARD_DESCRIPTION_LINES;
        for (i, text) in wrapped.into_iter().take(CARD_DESCRIPTION_LINES).enumerate() {
            let text = if cut && i + 1 == CARD_DESCRIPTION_LINES {
                format!("{text} …")
            } else {
                text
            };
            lines.push(Line::from(Span::styled(format!("     {text}"), dim)));
        }
    }

    // Budget, date, passport action
    lines.push(Line::from(vec![
        Span::styled(format!("   {} ", icons::ICON_BUDGET), label),
        Span::styled(project.budget.clone(), text_style),
        Span::styled(format!("   {} ", icons::ICON_CREATED), label),
        Span::styled(project.created_date.format("%d.%m.%Y").to_string(), text_style),
        Span::styled("   [Enter] passport", dim),
    ]));

    lines.push(Line::from(""));
    lines
}

/// Highlight search matches in text with yellow/bold styling.
pub fn highlight_search_matches(text: &str, query: &str, base_style: Style) -> Vec<Span<'static>> {
    let highlight_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let ranges = match_ranges(text, query);
    if ranges.is_empty() {
        return vec![Span::styled(text.to_string(), base_style)];
    }

    let mut spans = Vec::new();
    let mut last_end = 0;
    for (start, end) in ranges {
        if start > last_end {
            spans.push(Span::styled(text[last_end..start].to_string(), base_style));
        }
        spans.push(Span::styled(text[start..end].to_string(), highlight_style));
        last_end = end;
    }
    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    #[test]
    fn test_highlight_splits_on_matches() {
        let base = Style::default();
        let spans = highlight_search_matches("Иванов А.П.", "иван", base);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "Иван");
        assert_eq!(spans[1].content, "ов А.П.");
    }

    #[test]
    fn test_highlight_without_query_is_single_span() {
        let spans = highlight_search_matches("Печь", "", Style::default());
        assert_eq!(spans.len(), 1);
    }

    fn card_text(project: &Project, width: usize) -> String {
        card_lines(project, "", width, true)
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_card_shows_every_field() {
        let dataset = Dataset::builtin().unwrap();
        let mut project = dataset.projects[0].clone();
        project.goals = "Снизить расход газа".to_string();
        project.description = "Замена футеровки и горелки".to_string();
        let text = card_text(&project, 120);

        for field in [
            &project.name,
            &project.plant_name,
            &project.direction,
            &project.initiator,
            &project.leader,
            &project.goals,
            &project.description,
            &project.budget,
        ] {
            assert!(text.contains(field.as_str()), "card is missing {field}");
        }
        assert!(text.contains(&format!("#{}", project.id)));
        assert!(text.contains(project.status_label()));
        assert!(text.contains(&project.created_date.format("%d.%m.%Y").to_string()));
    }

    #[test]
    fn test_card_cuts_long_goals_and_description() {
        let dataset = Dataset::builtin().unwrap();
        let mut project = dataset.projects[0].clone();
        project.goals = "цель ".repeat(40).trim_end().to_string();
        project.description = "описание ".repeat(60).trim_end().to_string();

        let lines = card_lines(&project, "", 60, true);
        let text = card_text(&project, 60);

        assert!(!text.contains(&project.goals));
        assert!(!text.contains(&project.description));
        assert!(text.matches('…').count() >= 2, "{text}");
        // Title, meta, people, goals, two description rows, budget, spacer
        assert_eq!(lines.len(), 8);
    }
}
