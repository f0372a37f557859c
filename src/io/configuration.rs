//! Engine constants and runtime configuration defaults

// Default values for configurable parameters
/// Default column count
pub const DEFAULT_COLS: usize = 10;
/// Default row count
pub const DEFAULT_ROWS: usize = 10;
/// Default cap on placed words
pub const DEFAULT_MAX_WORDS: usize = 20;
/// Default probability of trying backward directions first
pub const DEFAULT_BACKWARDS_PROBABILITY: f64 = 0.3;
/// Default number of full-restart retries when forbidden words leak into the grid
pub const DEFAULT_MAX_RETRIES: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
