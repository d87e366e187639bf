//! Dispatch logic using the keybindings registry.
//!
//! This module provides the main dispatch function that matches key events
//! against the registry and returns appropriate messages.

use super::registry::BINDINGS;
use super::{KeyPattern, Mode};
use crate::map::MapCapability;
use crate::tui::input::InputState;
use crate::tui::{Dashboard, ModalState, Pane};
use crate::tui::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Passport lines scrolled by Ctrl+d / Ctrl+u
const HALF_PAGE: i32 = 10;

/// Determine the current mode from dashboard state.
pub fn current_mode<M: MapCapability>(dashboard: &Dashboard<M>) -> Mode {
    if dashboard.search_mode {
        return Mode::Search;
    }
    match dashboard.modal {
        ModalState::Help { .. } => Mode::Help,
        ModalState::FilterMenu => Mode::FilterMenu,
        ModalState::PlantFinder => Mode::PlantFinder,
        ModalState::Passport { .. } => Mode::Passport,
        ModalState::None => {
            if dashboard.focus == Pane::Map && dashboard.map_ready() {
                Mode::Map
            } else {
                Mode::Normal
            }
        }
    }
}

/// Map key events to messages based on current dashboard mode.
///
/// This is the main dispatch function that routes keys to the appropriate
/// mode-specific handler.
pub fn dispatch<M: MapCapability>(
    dashboard: &Dashboard<M>,
    input: &mut InputState,
    key: KeyEvent,
) -> Message {
    let mode = current_mode(dashboard);

    // Handle pending chords first
    if let Some(pending) = input.pending.take() {
        input.pending_since = None;
        return handle_chord(mode, pending, key.code);
    }

    // Text input modes handle characters specially
    if mode.is_text_input() {
        return dispatch_text_input(mode, key);
    }

    // Check for chord starters in appropriate modes
    if let Some(msg) = check_chord_start(input, mode, key) {
        return msg;
    }

    // Regular single-key dispatch
    dispatch_single_key(mode, key)
}

/// Dispatch for text input modes (Search, PlantFinder).
fn dispatch_text_input(mode: Mode, key: KeyEvent) -> Message {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Message::Quit;
    }
    match mode {
        Mode::Search => match key.code {
            KeyCode::Esc => Message::ExitSearch,
            KeyCode::Enter => Message::ConfirmSearch,
            KeyCode::Backspace => Message::SearchBackspace,
            KeyCode::Down => Message::MoveDown,
            KeyCode::Up => Message::MoveUp,
            KeyCode::Char(c) => Message::SearchInput(c),
            _ => Message::None,
        },
        Mode::PlantFinder => match key.code {
            KeyCode::Esc => Message::CloseModal,
            KeyCode::Enter => Message::ConfirmPlantFinder,
            KeyCode::Backspace => Message::PlantFinderBackspace,
            KeyCode::Down => Message::PlantFinderDown,
            KeyCode::Up => Message::PlantFinderUp,
            KeyCode::Char(c) => Message::PlantFinderInput(c),
            _ => Message::None,
        },
        _ => Message::None,
    }
}

/// Check if a key starts a chord sequence.
fn check_chord_start(input: &mut InputState, mode: Mode, key: KeyEvent) -> Option<Message> {
    if !key.modifiers.is_empty() {
        return None;
    }
    // Only specific modes support chords
    let starts_chord = match mode {
        // 'g' starts gg chord
        Mode::Normal | Mode::Passport => key.code == KeyCode::Char('g'),
        // 'p' and 'd' start p0-p9 / d0-d9
        Mode::FilterMenu => matches!(key.code, KeyCode::Char('p') | KeyCode::Char('d')),
        _ => false,
    };
    if starts_chord {
        input.set_pending(key.code);
        return Some(Message::None);
    }
    None
}

/// Handle the second key of a chord sequence.
fn handle_chord(mode: Mode, first: KeyCode, second: KeyCode) -> Message {
    match (mode, first, second) {
        // gg -> go to top
        (Mode::Normal, KeyCode::Char('g'), KeyCode::Char('g')) => Message::GotoTop,
        (Mode::Passport, KeyCode::Char('g'), KeyCode::Char('g')) => Message::ScrollPassport(-10000),

        // p0-p9 -> plant filter, d0-d9 -> direction filter
        (Mode::FilterMenu, KeyCode::Char(prefix), KeyCode::Char(c)) => {
            let Some(digit) = c.to_digit(10) else {
                return Message::None;
            };
            match prefix {
                'p' => Message::SelectPlantFilter(digit as usize),
                'd' => Message::SelectDirectionFilter(digit as usize),
                _ => Message::None,
            }
        }

        _ => Message::None,
    }
}

/// Dispatch a single key (non-chord) based on current mode.
fn dispatch_single_key(mode: Mode, key: KeyEvent) -> Message {
    // Try to find a matching binding in the registry
    for binding in BINDINGS.iter() {
        // Check if binding applies to current mode
        if !binding.modes.contains(&mode) {
            continue;
        }

        // Check if the key matches the pattern or any alternative
        if matches_pattern(&binding.pattern, &key)
            || binding
                .alternatives
                .iter()
                .any(|alt| matches_pattern(alt, &key))
        {
            return binding_to_message(mode, binding, &key);
        }
    }

    Message::None
}

/// Check if a key event matches a pattern.
fn matches_pattern(pattern: &KeyPattern, key: &KeyEvent) -> bool {
    match pattern {
        KeyPattern::Single(code) => {
            if key.code != *code {
                return false;
            }
            // Allow empty modifiers, or SHIFT for characters that require it
            if key.modifiers.is_empty() {
                return true;
            }
            // Allow SHIFT modifier for uppercase letters and shifted symbols
            if key.modifiers == KeyModifiers::SHIFT {
                if let KeyCode::Char(c) = key.code {
                    return c.is_ascii_uppercase() || "~!@#$%^&*()_+{}|:\"<>?".contains(c);
                }
            }
            false
        }
        KeyPattern::WithModifier { key: code, mods } => {
            key.code == *code && key.modifiers == *mods
        }
        KeyPattern::DigitRange(range) => {
            if let KeyCode::Char(c) = key.code {
                if let Some(digit) = c.to_digit(10) {
                    let d = digit as u8;
                    return range.contains(&d) && key.modifiers.is_empty();
                }
            }
            false
        }
        // Chords and ChordDigit are handled separately in check_chord_start/handle_chord
        KeyPattern::Chord { .. } | KeyPattern::ChordDigit { .. } => false,
    }
}

/// Convert a matched binding to the appropriate message.
fn binding_to_message(mode: Mode, binding: &super::KeyBinding, key: &KeyEvent) -> Message {
    // Handle special cases that need parameters from the key
    let result = match mode {
        Mode::Normal => match_normal_mode(key),
        Mode::Map => match_map_mode(key),
        Mode::FilterMenu => match_filter_menu(key),
        Mode::Passport => match_passport(key),
        Mode::Help => match_help_mode(key),
        Mode::Search | Mode::PlantFinder => None,
    };
    result.unwrap_or_else(|| {
        // Fallback: try to infer message from description
        message_from_description(binding.description)
    })
}

/// Keys shared by the project list and the map pane.
fn match_main_screen(key: &KeyEvent) -> Option<Message> {
    Some(match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Message::Quit,
        KeyCode::Char('q') => Message::Quit,
        KeyCode::Tab => Message::ToggleFocus,
        KeyCode::Char('/') => Message::EnterSearch,
        KeyCode::Char('P') => Message::OpenPlantFinder,
        KeyCode::Char('f') => Message::ToggleFilterMenu,
        KeyCode::Char('x') => Message::ResetFilters,
        KeyCode::Char('?') => Message::ToggleHelp,
        _ => return None,
    })
}

/// Match normal mode keys to messages.
fn match_normal_mode(key: &KeyEvent) -> Option<Message> {
    Some(match key.code {
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Message::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Message::PageUp,
        KeyCode::Char('j') | KeyCode::Down => Message::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Message::MoveUp,
        KeyCode::Char('G') => Message::GotoBottom,
        KeyCode::PageDown => Message::PageDown,
        KeyCode::PageUp => Message::PageUp,
        KeyCode::Char('o') | KeyCode::Enter => Message::OpenPassport,
        _ => return match_main_screen(key),
    })
}

/// Match map pane keys to messages.
fn match_map_mode(key: &KeyEvent) -> Option<Message> {
    Some(match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
            Message::NextMarker
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
            Message::PrevMarker
        }
        KeyCode::Char('o') | KeyCode::Enter => Message::ActivateFocusedMarker,
        _ => return match_main_screen(key),
    })
}

/// Match filter menu keys to messages.
fn match_filter_menu(key: &KeyEvent) -> Option<Message> {
    Some(match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('f') => Message::CloseModal,
        KeyCode::Char('x') => Message::ResetFilters,
        KeyCode::Char('n') => Message::NextDirectionFilter,
        KeyCode::Char('N') => Message::PrevDirectionFilter,
        _ => return None,
    })
}

/// Match passport keys to messages.
fn match_passport(key: &KeyEvent) -> Option<Message> {
    Some(match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Message::ClosePassport,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Message::ScrollPassport(HALF_PAGE)
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Message::ScrollPassport(-HALF_PAGE)
        }
        KeyCode::Char('j') | KeyCode::Down => Message::ScrollPassport(1),
        KeyCode::Char('k') | KeyCode::Up => Message::ScrollPassport(-1),
        _ => return None,
    })
}

/// Match help mode keys to messages.
fn match_help_mode(key: &KeyEvent) -> Option<Message> {
    Some(match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Message::CloseModal,
        KeyCode::Char('1') => Message::SetHelpTab(0),
        KeyCode::Char('2') => Message::SetHelpTab(1),
        _ => return None,
    })
}

/// Try to infer a message from the binding description.
/// This is a fallback and won't produce parameterized messages.
fn message_from_description(desc: &str) -> Message {
    match desc {
        "Move down" => Message::MoveDown,
        "Move up" => Message::MoveUp,
        "Go to bottom" => Message::GotoBottom,
        "Quit" => Message::Quit,
        "Toggle help" => Message::ToggleHelp,
        "Close modal" => Message::CloseModal,
        "Reset filters" => Message::ResetFilters,
        _ => Message::None,
    }
}
