//! Layout calculations and text utilities for the TUI.

use once_cell::sync::Lazy;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pre-computed padding strings to avoid repeated " ".repeat(n) allocations.
static PADDING: Lazy<Vec<String>> = Lazy::new(|| (0..=100).map(|n| " ".repeat(n)).collect());

/// Get a padding string of the given width (reuses pre-computed strings).
#[inline]
fn get_padding(width: usize) -> &'static str {
    &PADDING[width.min(100)]
}

pub const SEP: &str = " │ ";
pub const SEP_WIDTH: usize = 3;

/// Below this width the map and project panes are stacked vertically
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Screen regions of the main view
pub struct MainLayout {
    pub header: Rect,
    pub stats: Rect,
    pub map: Rect,
    pub projects: Rect,
    pub status: Rect,
}

/// Split the frame into header, statistics bar, map, project list and status bar.
pub fn main_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header/search
            Constraint::Length(1), // Statistics
            Constraint::Min(0),    // Map + projects
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[2])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[2])
    };

    MainLayout {
        header: rows[0],
        stats: rows[1],
        map: panes[0],
        projects: panes[1],
        status: rows[3],
    }
}

/// Calculate the display width of text (accounting for Unicode).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate text to a maximum display width.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Truncate text with an ellipsis if it exceeds max width.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let truncated = truncate_to_width(text, max_width.saturating_sub(1));
    format!("{truncated}…")
}

/// Pad text to a specific width with given alignment.
pub fn pad_to_width(text: &str, width: usize, alignment: Alignment) -> String {
    let mut trimmed = truncate_to_width(text, width);
    let pad = width.saturating_sub(display_width(&trimmed));
    match alignment {
        Alignment::Left => {
            trimmed.push_str(get_padding(pad));
            trimmed
        }
        Alignment::Right => format!("{}{}", get_padding(pad), trimmed),
        Alignment::Center => {
            let left = pad / 2;
            let right = pad.saturating_sub(left);
            format!("{}{}{}", get_padding(left), trimmed, get_padding(right))
        }
    }
}

/// Fit a Line to a maximum width by truncating spans.
pub fn fit_line_to_width<'a>(line: Line<'a>, max_width: usize) -> Line<'a> {
    if max_width == 0 {
        return Line::from(Vec::<Span>::new());
    }

    let Line {
        spans,
        alignment,
        style,
    } = line;
    let mut out: Vec<Span<'a>> = Vec::new();
    let mut used = 0usize;

    for span in spans {
        if used >= max_width {
            break;
        }
        let content = span.content.as_ref();
        let span_width = display_width(content);
        if used + span_width <= max_width {
            used += span_width;
            out.push(span);
        } else {
            let remaining = max_width.saturating_sub(used);
            let truncated = truncate_to_width(content, remaining);
            if !truncated.is_empty() {
                out.push(Span::styled(truncated, span.style));
            }
            break;
        }
    }

    Line {
        spans: out,
        alignment,
        style,
    }
}

/// Calculate the display width of a Line.
pub fn line_display_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .map(|span| display_width(span.content.as_ref()))
        .sum()
}

/// Pad a Line to a specific width by adding trailing spaces.
pub fn pad_line_to_width<'a>(mut line: Line<'a>, width: usize) -> Line<'a> {
    let current = line_display_width(&line);
    if current < width {
        line.spans.push(Span::raw(get_padding(width - current)));
    }
    line
}

/// Create an ellipsis line centered in the given width.
pub fn ellipsis_line(width: u16) -> Line<'static> {
    let text = pad_to_width("…", width as usize, Alignment::Center);
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

/// Fit lines to an area, adding ellipsis if content is truncated.
///
/// `keep_bottom` lines at the end (footer hints) always stay visible.
pub fn fit_lines_to_area<'a>(
    lines: Vec<Line<'a>>,
    inner: Rect,
    keep_bottom: usize,
) -> Vec<Line<'a>> {
    let width = inner.width as usize;
    let height = inner.height as usize;
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let mut fitted: Vec<Line<'a>> = lines
        .into_iter()
        .map(|line| fit_line_to_width(line, width))
        .collect();

    if fitted.len() <= height {
        return fitted;
    }

    let keep_bottom = keep_bottom.min(height);
    let top_space = height.saturating_sub(keep_bottom);
    let mut out: Vec<Line<'a>> = Vec::with_capacity(height);

    if top_space > 0 {
        let top_take = top_space.saturating_sub(1);
        if top_take > 0 {
            out.extend(fitted.drain(..top_take));
        }
        out.push(ellipsis_line(inner.width));
    }

    if keep_bottom > 0 {
        let start = fitted.len().saturating_sub(keep_bottom);
        out.extend(fitted.drain(start..));
    }

    if out.is_empty() {
        out.push(ellipsis_line(inner.width));
    }

    out
}

/// Render a two-column line with separator.
pub fn render_two_col_line<'a>(
    left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    left_width: usize,
    total_width: usize,
    sep_style: Style,
) -> Line<'a> {
    let left_line = pad_line_to_width(fit_line_to_width(Line::from(left), left_width), left_width);
    let right_width = total_width.saturating_sub(left_width + SEP_WIDTH);
    let right_line = fit_line_to_width(Line::from(right), right_width);

    let mut spans = left_line.spans;
    spans.push(Span::styled(SEP, sep_style));
    spans.extend(right_line.spans);
    Line::from(spans)
}

/// Wrap text on whitespace into lines no wider than `width`.
///
/// Words longer than `width` are cut.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate_to_width(word, width);
        let needed = if current.is_empty() {
            display_width(&word)
        } else {
            display_width(&current) + 1 + display_width(&word)
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Calculate a centered popup rectangle within a container.
pub fn popup_rect(
    percent_x: u16,
    percent_y: u16,
    min_width: u16,
    min_height: u16,
    r: Rect,
) -> Rect {
    let max_width = r.width.saturating_sub(2).max(1);
    let max_height = r.height.saturating_sub(2).max(1);

    let target_width = (r.width.saturating_mul(percent_x) / 100).max(min_width);
    let target_height = (r.height.saturating_mul(percent_y) / 100).max(min_height);

    let width = target_width.min(max_width);
    let height = target_height.min(max_height);

    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if display_width(s) <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return truncate_to_width(s, max_len);
    }
    let truncated = truncate_to_width(s, max_len.saturating_sub(3));
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_with_ellipsis_cyrillic() {
        assert_eq!(truncate_with_ellipsis("Новоросцемент", 6), "Новор…");
        assert_eq!(truncate_with_ellipsis("Завод", 10), "Завод");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("снижение расхода топлива на обжиг", 16),
            vec!["снижение расхода", "топлива на обжиг"]
        );
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_popup_rect_stays_inside() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = popup_rect(80, 80, 60, 20, area);
        assert!(popup.width <= 38);
        assert!(popup.height <= 8);
        assert!(popup.x + popup.width <= area.width);
    }

    #[test]
    fn test_main_layout_stacks_on_narrow_terminals() {
        let wide = main_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(wide.map.y, wide.projects.y);

        let narrow = main_layout(Rect::new(0, 0, 80, 40));
        assert_eq!(narrow.map.x, narrow.projects.x);
        assert!(narrow.projects.y > narrow.map.y);
    }
}
