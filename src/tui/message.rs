//! Message enum for Elm Architecture (TEA) pattern.
//!
//! All possible user actions in the application are represented as messages.
//! This enables unidirectional data flow and testable update logic.

use crate::data::PlantId;
use crate::map::MarkerHandle;

/// All possible user actions in the application.
///
/// Messages are dispatched from key and mouse events and processed by
/// `Dashboard::update()`. Map markers also hand one back when clicked.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Project list navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move selection up by one
    MoveUp,
    /// Move selection down by one
    MoveDown,
    /// Go to the first project
    GotoTop,
    /// Go to the last project
    GotoBottom,
    /// Move selection up by a page
    PageUp,
    /// Move selection down by a page
    PageDown,
    /// Switch keyboard focus between project list and map
    ToggleFocus,

    // ─────────────────────────────────────────────────────────────────────────
    // Map
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the next plant marker
    NextMarker,
    /// Focus the previous plant marker
    PrevMarker,
    /// Click the focused marker
    ActivateFocusedMarker,
    /// A marker was clicked with the mouse
    MarkerClicked(MarkerHandle),
    /// A plant marker asked for its projects (registered click callback)
    PlantMarkerActivated(PlantId),

    // ─────────────────────────────────────────────────────────────────────────
    // Search mode
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearch,
    /// Leave search mode and clear the search text
    ExitSearch,
    /// Leave search mode keeping the search text
    ConfirmSearch,
    /// Add a character to the search text
    SearchInput(char),
    /// Remove last character from the search text
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Filter menu
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle filter menu modal
    ToggleFilterMenu,
    /// Select plant filter by menu index (0 = all plants)
    SelectPlantFilter(usize),
    /// Select direction filter by menu index (0 = all directions)
    SelectDirectionFilter(usize),
    /// Step to the next direction, wrapping to all directions
    NextDirectionFilter,
    /// Step to the previous direction, wrapping to all directions
    PrevDirectionFilter,
    /// Clear plant, direction and search text
    ResetFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Plant finder
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the fuzzy plant finder
    OpenPlantFinder,
    /// Add a character to the finder query
    PlantFinderInput(char),
    /// Remove last character from the finder query
    PlantFinderBackspace,
    /// Move finder selection up
    PlantFinderUp,
    /// Move finder selection down
    PlantFinderDown,
    /// Show projects of the selected plant
    ConfirmPlantFinder,

    // ─────────────────────────────────────────────────────────────────────────
    // Passport
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the passport of the selected project
    OpenPassport,
    /// Scroll passport by delta (positive = down, negative = up)
    ScrollPassport(i32),
    /// Close the passport
    ClosePassport,

    // ─────────────────────────────────────────────────────────────────────────
    // Help
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle help modal
    ToggleHelp,
    /// Switch to a specific help tab (0-indexed)
    SetHelpTab(usize),
    /// Close current modal (generic close)
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // No-op
    // ─────────────────────────────────────────────────────────────────────────
    /// No operation (for unhandled keys or pending chords)
    None,
}
