//! Application-level configuration constants.

// Page
pub const PAGE_TITLE: &str = "Drag Calculator - Professional Tool";
pub const APP_HEADING: &str = "Drag Calculator";
pub const APP_SUBTITLE: &str = "Calculate drag values based on maximum drag, number of settings, \
                                and desired setting using our precision algorithm.";

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "theme";

// Result display
pub const DISPLAY_DECIMALS: usize = 4;
pub const RESULT_PLACEHOLDER: &str = "--";
pub const RESULT_UNITS: &str = "units";

// Input attributes
pub const MAX_DRAG_STEP: &str = "0.01";
pub const COUNT_STEP: &str = "1";
