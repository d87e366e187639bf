//! Static registry of all keybindings.
//!
//! This is THE SINGLE SOURCE OF TRUTH for all keybindings in the application.
//! Both dispatch logic and help generation derive from this registry.

use super::{Category, KeyBinding, KeyPattern, Mode};
use crossterm::event::{KeyCode, KeyModifiers};

/// Modes where the main screen (no modal) is showing.
const MAIN: &[Mode] = &[Mode::Normal, Mode::Map];

/// All keybindings in the application.
///
/// Bindings are organized by mode and category. The dispatch system
/// searches this list to find matching bindings for key events.
pub static BINDINGS: &[KeyBinding] = &[
    // ═══════════════════════════════════════════════════════════════════════════
    // NORMAL MODE (project list)
    // ═══════════════════════════════════════════════════════════════════════════

    // Navigation
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('j')),
        description: "Move down",
        category: Category::Navigation,
        alternatives: &[KeyPattern::Single(KeyCode::Down)],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('k')),
        description: "Move up",
        category: Category::Navigation,
        alternatives: &[KeyPattern::Single(KeyCode::Up)],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Chord {
            first: KeyCode::Char('g'),
            second: KeyCode::Char('g'),
        },
        description: "Go to top",
        category: Category::Navigation,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('G')),
        description: "Go to bottom",
        category: Category::Navigation,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::WithModifier {
            key: KeyCode::Char('d'),
            mods: KeyModifiers::CONTROL,
        },
        description: "Page down",
        category: Category::Navigation,
        alternatives: &[KeyPattern::Single(KeyCode::PageDown)],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::WithModifier {
            key: KeyCode::Char('u'),
            mods: KeyModifiers::CONTROL,
        },
        description: "Page up",
        category: Category::Navigation,
        alternatives: &[KeyPattern::Single(KeyCode::PageUp)],
        show_in_help: true,
    },
    KeyBinding {
        modes: MAIN,
        pattern: KeyPattern::Single(KeyCode::Tab),
        description: "Switch between projects and map",
        category: Category::Navigation,
        alternatives: &[],
        show_in_help: true,
    },
    // Actions
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Enter),
        description: "Open project passport",
        category: Category::Actions,
        alternatives: &[KeyPattern::Single(KeyCode::Char('o'))],
        show_in_help: true,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // MAP MODE
    // ═══════════════════════════════════════════════════════════════════════════
    KeyBinding {
        modes: &[Mode::Map],
        pattern: KeyPattern::Single(KeyCode::Char('j')),
        description: "Next plant marker",
        category: Category::Map,
        alternatives: &[
            KeyPattern::Single(KeyCode::Down),
            KeyPattern::Single(KeyCode::Char('l')),
            KeyPattern::Single(KeyCode::Right),
        ],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Map],
        pattern: KeyPattern::Single(KeyCode::Char('k')),
        description: "Previous plant marker",
        category: Category::Map,
        alternatives: &[
            KeyPattern::Single(KeyCode::Up),
            KeyPattern::Single(KeyCode::Char('h')),
            KeyPattern::Single(KeyCode::Left),
        ],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Map],
        pattern: KeyPattern::Single(KeyCode::Enter),
        description: "Show projects of plant",
        category: Category::Map,
        alternatives: &[KeyPattern::Single(KeyCode::Char('o'))],
        show_in_help: true,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // SHARED MAIN SCREEN BINDINGS
    // ═══════════════════════════════════════════════════════════════════════════
    KeyBinding {
        modes: MAIN,
        pattern: KeyPattern::Single(KeyCode::Char('/')),
        description: "Search projects",
        category: Category::Search,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: MAIN,
        pattern: KeyPattern::Single(KeyCode::Char('P')),
        description: "Find plant by name",
        category: Category::Search,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: MAIN,
        pattern: KeyPattern::Single(KeyCode::Char('f')),
        description: "Open filter menu",
        category: Category::Filters,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: MAIN,
        pattern: KeyPattern::Single(KeyCode::Char('x')),
        description: "Reset filters",
        category: Category::Filters,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: MAIN,
        pattern: KeyPattern::Single(KeyCode::Char('?')),
        description: "Toggle help",
        category: Category::Application,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: MAIN,
        pattern: KeyPattern::Single(KeyCode::Char('q')),
        description: "Quit",
        category: Category::Application,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: MAIN,
        pattern: KeyPattern::WithModifier {
            key: KeyCode::Char('c'),
            mods: KeyModifiers::CONTROL,
        },
        description: "Quit",
        category: Category::Application,
        alternatives: &[],
        show_in_help: false,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // FILTER MENU
    // ═══════════════════════════════════════════════════════════════════════════
    KeyBinding {
        modes: &[Mode::FilterMenu],
        pattern: KeyPattern::ChordDigit {
            prefix: 'p',
            range: 0..=9,
        },
        description: "Filter by plant (p0 = all)",
        category: Category::Filters,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::FilterMenu],
        pattern: KeyPattern::ChordDigit {
            prefix: 'd',
            range: 0..=9,
        },
        description: "Filter by direction (d0 = all)",
        category: Category::Filters,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::FilterMenu],
        pattern: KeyPattern::Single(KeyCode::Char('n')),
        description: "Next direction",
        category: Category::Filters,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::FilterMenu],
        pattern: KeyPattern::Single(KeyCode::Char('N')),
        description: "Previous direction",
        category: Category::Filters,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::FilterMenu],
        pattern: KeyPattern::Single(KeyCode::Char('x')),
        description: "Reset filters",
        category: Category::Filters,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::FilterMenu],
        pattern: KeyPattern::Single(KeyCode::Esc),
        description: "Close modal",
        category: Category::Application,
        alternatives: &[
            KeyPattern::Single(KeyCode::Char('q')),
            KeyPattern::Single(KeyCode::Char('f')),
        ],
        show_in_help: true,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // PASSPORT
    // ═══════════════════════════════════════════════════════════════════════════
    KeyBinding {
        modes: &[Mode::Passport],
        pattern: KeyPattern::Single(KeyCode::Char('j')),
        description: "Scroll down",
        category: Category::Navigation,
        alternatives: &[KeyPattern::Single(KeyCode::Down)],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Passport],
        pattern: KeyPattern::Single(KeyCode::Char('k')),
        description: "Scroll up",
        category: Category::Navigation,
        alternatives: &[KeyPattern::Single(KeyCode::Up)],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Passport],
        pattern: KeyPattern::WithModifier {
            key: KeyCode::Char('d'),
            mods: KeyModifiers::CONTROL,
        },
        description: "Scroll half page down",
        category: Category::Navigation,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Passport],
        pattern: KeyPattern::WithModifier {
            key: KeyCode::Char('u'),
            mods: KeyModifiers::CONTROL,
        },
        description: "Scroll half page up",
        category: Category::Navigation,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Passport],
        pattern: KeyPattern::Chord {
            first: KeyCode::Char('g'),
            second: KeyCode::Char('g'),
        },
        description: "Scroll to top",
        category: Category::Navigation,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Passport],
        pattern: KeyPattern::Single(KeyCode::Esc),
        description: "Close passport",
        category: Category::Application,
        alternatives: &[
            KeyPattern::Single(KeyCode::Char('q')),
            KeyPattern::Single(KeyCode::Enter),
        ],
        show_in_help: true,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // HELP
    // ═══════════════════════════════════════════════════════════════════════════
    KeyBinding {
        modes: &[Mode::Help],
        pattern: KeyPattern::DigitRange(1..=2),
        description: "Switch help tab",
        category: Category::Navigation,
        alternatives: &[],
        show_in_help: true,
    },
    KeyBinding {
        modes: &[Mode::Help],
        pattern: KeyPattern::Single(KeyCode::Esc),
        description: "Close modal",
        category: Category::Application,
        alternatives: &[
            KeyPattern::Single(KeyCode::Char('q')),
            KeyPattern::Single(KeyCode::Char('?')),
        ],
        show_in_help: true,
    },
];
