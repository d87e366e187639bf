//! Auto-generate help text from the keybindings registry.

use super::registry::BINDINGS;
use super::{Category, KeyPattern, Mode};

/// Generate compact footer hints for a given mode.
/// Returns a string like "j/k: nav | /: search | Esc: back"
pub fn generate_footer_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Normal => "  j/k: nav | Enter: passport | Tab: map | /: search | f: filters | P: plant | ?: help",
        Mode::Map => "  j/k: plant | Enter: show projects | Tab: list | f: filters | x: reset | ?: help",
        Mode::Search => "  type to filter | Enter: keep | Esc: clear",
        Mode::PlantFinder => "  type plant name | ↑/↓: select | Enter: show projects | Esc: close",
        Mode::FilterMenu => "  p0-9: plant | d0-9 n/N: direction | x: reset | Esc: close",
        Mode::Passport => "  j/k: scroll | gg: top | Esc: close",
        Mode::Help => "  1/2: tabs | Esc: close",
    }
}

/// Generate keyboard shortcuts help text for the main help popup.
///
/// Covers the main screen (project list and map) plus the filter menu,
/// grouped by category. Shared bindings are registered once so they are
/// listed once.
pub fn generate_keyboard_shortcuts() -> Vec<String> {
    const MODES: [Mode; 3] = [Mode::Normal, Mode::Map, Mode::FilterMenu];
    const CATEGORIES: [Category; 6] = [
        Category::Navigation,
        Category::Map,
        Category::Search,
        Category::Filters,
        Category::Actions,
        Category::Application,
    ];

    let mut lines = vec![String::new()];
    for category in CATEGORIES {
        let bindings: Vec<_> = BINDINGS
            .iter()
            .filter(|b| b.show_in_help && b.category == category)
            .filter(|b| b.modes.iter().any(|m| MODES.contains(m)))
            .collect();
        if bindings.is_empty() {
            continue;
        }

        lines.push(format!("  {}", category.label()));
        lines.push(format!("  {}", "─".repeat(category.label().len())));
        for binding in bindings {
            let keys = format_binding_keys(&binding.pattern, binding.alternatives);
            lines.push(format!("  {:16}{}", keys, binding.description));
        }
        lines.push(String::new());
    }
    lines
}

/// Format a binding's keys for display (primary + alternatives).
fn format_binding_keys(pattern: &KeyPattern, alternatives: &[KeyPattern]) -> String {
    let mut parts = vec![pattern.display()];
    for alt in alternatives {
        parts.push(alt.display());
    }
    parts.join(", ")
}
