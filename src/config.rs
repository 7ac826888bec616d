// Window
pub const WINDOW_TITLE: &str = "DonSync";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

// Overlay Reference Geometry (for a 720px-tall window; scaled by actual height)
pub const OVERLAY_REF_HEIGHT: f32 = 720.0;
pub const OVERLAY_RIM_RADIUS_REF: f32 = 350.0; // Rim circle radius at reference resolution
pub const OVERLAY_BOTTOM_OFFSET_REF: f32 = 20.0; // Drum origin lift off the bottom edge
pub const CENTRE_REGION: f32 = 0.80; // Centre circle radius relative to the rim circle

// Input
// Reserved source handle for the mouse pointer; winit touch ids start at 0.
pub const MOUSE_SOURCE: u64 = u64::MAX;

// Settings
pub const SETTINGS_DIR: &str = "save";
pub const SETTINGS_INI_PATH: &str = "save/settings.ini";
