// Game timing constants
pub const POLL_INTERVAL_MS: u64 = 50;

// Fishing timing constants
pub const CATCH_WINDOW_SECONDS: f64 = 2.0;
// Seconds until a bite becomes possible, drawn as an integer from [MIN, MAX)
pub const BITE_INTERVAL_MIN_SECONDS: u32 = 2;
pub const BITE_INTERVAL_MAX_SECONDS: u32 = 6;

// Save system constants
pub const SAVE_DIR_NAME: &str = ".angler";
pub const SAVE_FILE_NAME: &str = "save.json";

// UI constants
pub const MESSAGE_LOG_CAPACITY: usize = 6;
