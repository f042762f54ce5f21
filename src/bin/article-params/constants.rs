/// Width of the article parameters sidebar in pixels.
pub const SIDEBAR_WIDTH: f32 = 616.0;

/// Inner padding of the sidebar.
pub const SIDEBAR_PADDING: f32 = 48.0;

/// Gap between the sidebar edge (or window edge) and the toggle.
pub const TOGGLE_MARGIN: f32 = 24.0;

/// Horizontal margin kept around the article column.
pub const ARTICLE_MARGIN: f32 = 32.0;

/// Initial window size.
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];
