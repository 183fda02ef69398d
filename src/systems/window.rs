//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    dpi::PhysicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
        demo_name: &str,
    ) -> Result<Self, WindowError> {
        let base_title = format!("{} - {}", config.title, demo_name);
        let mut attrs = Window::default_attributes()
            .with_title(&base_title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self { window, base_title })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show the current mode in the title bar
    pub fn update_title(&self, mode_label: &str) {
        self.window.set_title(&format_title(&self.base_title, mode_label));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// False while the window has no area (e.g. minimised)
    pub fn is_drawable(&self) -> bool {
        has_area(self.window.inner_size())
    }
}

fn has_area(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

fn format_title(base_title: &str, mode_label: &str) -> String {
    format!("{} {} [1-9/Space: mode, Esc: exit]", base_title, mode_label)
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_formatting() {
        let title = format_title("Starlab - Stars", "[1/4] mixed topologies");
        assert!(title.starts_with("Starlab - Stars [1/4]"));
        assert!(title.contains("Esc: exit"));
    }

    #[test]
    fn test_zero_size_has_no_area() {
        assert!(has_area(PhysicalSize::new(800, 600)));
        assert!(!has_area(PhysicalSize::new(0, 0)));
        assert!(!has_area(PhysicalSize::new(800, 0)));
        assert!(!has_area(PhysicalSize::new(0, 600)));
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
