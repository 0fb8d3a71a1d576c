// Host page contract: element ids, selectors and attributes the front end binds to.

pub const STARFIELD_CANVAS_ID: &str = "starfield";
pub const CURVE_PATH_ID: &str = "gaussianPath";
pub const POINTS_CONTAINER_ID: &str = "dataPointsContainer";
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const STOP_BUTTON_ID: &str = "stop-button";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MENU_ID: &str = "menu";
pub const MENU_OPEN_CLASS: &str = "open";
pub const LANG_TOGGLE_ID: &str = "lang-toggle";

pub const I18N_ATTR: &str = "data-i18n"; // text key on translatable elements
pub const DEVICE_OVERRIDE_ATTR: &str = "data-device"; // on <body>, forces the device class

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Pause button labels
pub const PAUSE_GLYPH: &str = "\u{23F8}"; // shown while running
pub const PLAY_GLYPH: &str = "\u{25B6}"; // shown while paused

#[inline]
pub fn stop_button_glyph(paused: bool) -> &'static str {
    if paused {
        PLAY_GLYPH
    } else {
        PAUSE_GLYPH
    }
}
