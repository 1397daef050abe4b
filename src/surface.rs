use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// A display surface provided by the host windowing layer.
///
/// The panel owns at most one of these at a time; the host decides what
/// "displaying" means (webview, embedded browser, external window).
pub trait NoteSurface {
    /// Replace the surface content with a full HTML document.
    fn set_html(&mut self, html: &str) -> Result<()>;

    /// Bring the surface to the foreground.
    fn reveal(&mut self);
}

/// Creates display surfaces on demand.
pub trait SurfaceFactory {
    fn create(&self, title: &str) -> Result<Box<dyn NoteSurface>>;
}

/// Surface that serves the note through the system browser.
///
/// The HTML is written to a temp file and handed to the platform opener,
/// the same way the editor preview serves its rendered pages.
pub struct BrowserSurface {
    temp_path: PathBuf,
}

impl BrowserSurface {
    pub fn new() -> Self {
        Self {
            temp_path: std::env::temp_dir().join("relnote-panel.html"),
        }
    }
}

impl Default for BrowserSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteSurface for BrowserSurface {
    fn set_html(&mut self, html: &str) -> Result<()> {
        fs::write(&self.temp_path, html)?;
        Ok(())
    }

    fn reveal(&mut self) {
        // Opener failures leave the file in place; nothing to report.
        let _ = open::that(&self.temp_path);
    }
}

/// Factory for [`BrowserSurface`] instances.
pub struct BrowserSurfaceFactory;

impl SurfaceFactory for BrowserSurfaceFactory {
    fn create(&self, _title: &str) -> Result<Box<dyn NoteSurface>> {
        Ok(Box::new(BrowserSurface::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_surface_writes_html() {
        let mut surface = BrowserSurface {
            temp_path: std::env::temp_dir().join("relnote-surface-test.html"),
        };
        surface.set_html("<html><body>note</body></html>").unwrap();

        let written = fs::read_to_string(&surface.temp_path).unwrap();
        assert!(written.contains("note"));

        let _ = fs::remove_file(&surface.temp_path);
    }

    #[test]
    fn test_factory_creates_surface() {
        assert!(BrowserSurfaceFactory.create("Release Note").is_ok());
    }
}
