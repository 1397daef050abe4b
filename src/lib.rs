//! Release note panel for desktop editors.
//!
//! On startup the feature checks whether the user has seen the most
//! recently published release note; if not, it fetches the changelog
//! entry as markdown, rewrites the site-specific markup it carries,
//! renders it to HTML and hands it to a display surface. A persisted
//! marker keeps a note from showing more than once per publish date.
//!
//! # Structure
//!
//! - `gate` - show-or-skip decision at startup
//! - `changelog` - fetch, front matter, markup rewriting
//! - `render` - markdown-to-HTML capability and the HTML shell
//! - `surface` - display surface capability
//! - `state` - persisted last-read marker
//! - `panel` - panel lifecycle coordinator
//! - `commands` - host-bindable command surface

pub mod changelog;
pub mod commands;
pub mod config;
pub mod error;
pub mod gate;
pub mod panel;
pub mod render;
pub mod state;
pub mod surface;

// Re-exports for convenient external access
pub use changelog::{ChangelogFetcher, FrontMatter, HttpFetcher};
pub use commands::Command;
pub use config::PanelConfig;
pub use error::{PanelError, Result};
pub use panel::ReleaseNoteFeature;
pub use render::{CmarkRenderer, MarkdownRenderer};
pub use state::{JsonStateStore, LAST_READ_RELEASE_DATE, MemoryStateStore, StateStore};
pub use surface::{BrowserSurface, BrowserSurfaceFactory, NoteSurface, SurfaceFactory};
