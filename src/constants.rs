//! Application-wide constants.

/// Display name, used for the config directory and user-facing output.
pub const APP_NAME: &str = "ShadeKit";

/// Binary name as installed on the PATH (used in command examples).
pub const APP_BINARY_NAME: &str = "shadekit";
