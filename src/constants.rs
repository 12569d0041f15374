//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the message keys the watchface
//! firmware understands.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Watchface Config";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "watchface-config";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "WatchfaceConfig";

/// Message key carrying the current temperature (sent by the weather fetcher).
pub const KEY_TEMP: &str = "KEY_TEMP";

/// Message key carrying the weather icon name (sent by the weather fetcher).
pub const KEY_ICON: &str = "KEY_ICON";

/// Message key for the color inversion toggle.
pub const KEY_INVERT_COLORS: &str = "KEY_INVERT_COLORS";

/// Every message key declared by the watchface firmware.
pub const DEVICE_MESSAGE_KEYS: [&str; 3] = [KEY_TEMP, KEY_ICON, KEY_INVERT_COLORS];
