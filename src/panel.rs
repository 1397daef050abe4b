//! Panel lifecycle: the owned display surface, the startup gate and the
//! last-read marker.

use crate::changelog::{self, ChangelogFetcher, HttpFetcher};
use crate::commands::Command;
use crate::config::PanelConfig;
use crate::error::Result;
use crate::gate;
use crate::render::{CmarkRenderer, MarkdownRenderer, wrap_note_html};
use crate::state::{LAST_READ_RELEASE_DATE, StateStore};
use crate::surface::{BrowserSurfaceFactory, NoteSurface, SurfaceFactory};

/// The live display surface. At most one exists per feature instance.
struct ReleaseNotePanel {
    surface: Box<dyn NoteSurface>,
}

/// Owns the release note panel and everything it needs: config, the
/// changelog fetcher, the markdown renderer, the surface factory and
/// the persisted state. Hosts construct one per activation and route
/// commands and surface events through it.
pub struct ReleaseNoteFeature {
    config: PanelConfig,
    fetcher: Box<dyn ChangelogFetcher>,
    renderer: Box<dyn MarkdownRenderer>,
    surfaces: Box<dyn SurfaceFactory>,
    store: Box<dyn StateStore>,
    panel: Option<ReleaseNotePanel>,
}

impl ReleaseNoteFeature {
    /// Feature with the default fetcher, renderer and surface, loading
    /// config from disk.
    pub fn new(store: Box<dyn StateStore>) -> Self {
        Self::with_parts(
            PanelConfig::load(),
            Box::new(HttpFetcher),
            Box::new(CmarkRenderer),
            Box::new(BrowserSurfaceFactory),
            store,
        )
    }

    /// Feature with every collaborator injected.
    pub fn with_parts(
        config: PanelConfig,
        fetcher: Box<dyn ChangelogFetcher>,
        renderer: Box<dyn MarkdownRenderer>,
        surfaces: Box<dyn SurfaceFactory>,
        store: Box<dyn StateStore>,
    ) -> Self {
        Self {
            config,
            fetcher,
            renderer,
            surfaces,
            store,
            panel: None,
        }
    }

    /// Startup hook: opens the panel when the latest published note has
    /// not been read yet.
    pub fn activate(&mut self) -> Result<()> {
        let last_read = self.store.get(LAST_READ_RELEASE_DATE);
        if gate::should_show(last_read.as_deref(), gate::latest_publish_date()) {
            self.show(None)?;
        }
        Ok(())
    }

    /// Open the panel for `date` (latest when omitted). An already open
    /// panel is revealed as-is, without re-rendering.
    pub fn show(&mut self, date: Option<&str>) -> Result<()> {
        if let Some(panel) = self.panel.as_mut() {
            panel.surface.reveal();
            return Ok(());
        }

        let surface = self.surfaces.create(&self.config.panel_title)?;
        self.panel = Some(ReleaseNotePanel { surface });
        self.update(date)?;

        if let Some(panel) = self.panel.as_mut() {
            panel.surface.reveal();
        }
        Ok(())
    }

    /// Host hook: the surface regained visibility, re-render the latest
    /// note.
    pub fn surface_became_visible(&mut self) -> Result<()> {
        if self.panel.is_some() {
            self.update(None)
        } else {
            Ok(())
        }
    }

    /// Host hook: the surface was closed (by the user or the host).
    /// Drops the owned panel so the next `show` creates a fresh one.
    pub fn dispose_panel(&mut self) {
        self.panel = None;
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// Forget the persisted last-read marker.
    pub fn clear_last_read(&mut self) -> Result<()> {
        self.store.set(LAST_READ_RELEASE_DATE, None)
    }

    pub fn last_read(&self) -> Option<String> {
        self.store.get(LAST_READ_RELEASE_DATE)
    }

    /// Route a registered command to its handler.
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::ShowReleaseNote => self.show(None),
            Command::ClearReleaseNoteCache => self.clear_last_read(),
        }
    }

    /// Fetch, transform, render and display the note for `date`, then
    /// advance the last-read marker if the displayed date is newer than
    /// what was stored. Any failure before display leaves the marker
    /// untouched.
    fn update(&mut self, date: Option<&str>) -> Result<()> {
        let Some(panel) = self.panel.as_mut() else {
            return Ok(());
        };

        let date = match date {
            Some(date) => date,
            None => gate::latest_publish_date(),
        };

        let markdown = changelog::load_changelog(self.fetcher.as_ref(), &self.config, date)?;
        let html = wrap_note_html(&self.config.panel_title, &self.renderer.render(&markdown));
        panel.surface.set_html(&html)?;

        let last_read = self.store.get(LAST_READ_RELEASE_DATE);
        if last_read.as_deref().map_or(true, |read| date > read) {
            self.store.set(LAST_READ_RELEASE_DATE, Some(date))?;
        }
        Ok(())
    }
}
