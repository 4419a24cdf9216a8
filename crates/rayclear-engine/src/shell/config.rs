use crate::paint::{Color, RAYWHITE};

/// Fixed window parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    /// Logical pixels.
    pub width: u32,
    /// Logical pixels.
    pub height: u32,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("raylib-android", 480, 480)
    }
}

/// Everything the shell needs to run: the window to open and the color every
/// frame is cleared to.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub window: WindowConfig,
    pub clear_color: Color,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clear_color: RAYWHITE,
        }
    }
}
