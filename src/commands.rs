//! Commands the host can bind to its command registry.

/// The two host-facing commands of the release note feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open (or refocus) the release note panel.
    ShowReleaseNote,
    /// Forget the persisted last-read marker.
    ClearReleaseNoteCache,
}

impl Command {
    /// Stable identifier for command registration.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ShowReleaseNote => "releaseNote.show",
            Self::ClearReleaseNoteCache => "releaseNote.clearCache",
        }
    }

    /// Resolve a registered identifier back to its command.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "releaseNote.show" => Some(Self::ShowReleaseNote),
            "releaseNote.clearCache" => Some(Self::ClearReleaseNoteCache),
            _ => None,
        }
    }

    /// All commands, in registration order.
    pub fn all() -> [Command; 2] {
        [Self::ShowReleaseNote, Self::ClearReleaseNoteCache]
    }
}
