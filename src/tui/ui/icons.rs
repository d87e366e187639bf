//! Nerd Font icons used throughout the UI.

// Header and pane titles
pub const APP: &str = "󰙅"; // nf-md-map_marker_path
pub const SEARCH: &str = "󰍉"; // nf-md-magnify
pub const FILTER: &str = "󰈲"; // nf-md-filter
pub const MAP: &str = "󰍍"; // nf-md-map
pub const PROJECTS: &str = "󰈙"; // nf-md-folder
pub const HELP: &str = "󰋗"; // nf-md-help_circle

// Project status - fractional circles
pub const STATUS_PLANNED: &str = "◔"; // 1/4 filled
pub const STATUS_ACTIVE: &str = "◑"; // 1/2 filled
pub const STATUS_SUSPENDED: &str = "⊘"; // Slashed circle
pub const STATUS_COMPLETED: &str = "●"; // Full circle

// Card and passport field icons
pub const ICON_PLANT: &str = "󰒓"; // nf-md-factory
pub const ICON_DIRECTION: &str = "󰓹"; // nf-md-tag
pub const ICON_PERSON: &str = "󰀄"; // nf-md-account
pub const ICON_GOALS: &str = "󰓾"; // nf-md-target
pub const ICON_BUDGET: &str = "󰄔"; // nf-md-cash
pub const ICON_CREATED: &str = "󰃭"; // nf-md-calendar_plus
pub const ICON_CITY: &str = "󰄛"; // nf-md-city

// Selection markers
pub const SELECTED: &str = "▶";
pub const RADIO_ON: &str = "●";
pub const RADIO_OFF: &str = "○";
