//! Options controlling scene import.

use serde::{Deserialize, Serialize};

/// Options for reading `.bezier` scenes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportOptions {
    /// How to treat lines that fail to parse.
    pub on_malformed: MalformedLinePolicy,
}

impl ImportOptions {
    /// Create default import options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn on malformed lines and continue instead of aborting.
    pub fn skip_malformed(mut self) -> Self {
        self.on_malformed = MalformedLinePolicy::Skip;
        self
    }
}

/// Policy for lines that fail to parse.
///
/// Out-of-range patch indices abort the import under either policy;
/// skipping those would corrupt patch topology without any visible sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedLinePolicy {
    /// Abort the import with a `MalformedLine` error.
    #[default]
    Fail,
    /// Log a warning and continue with the next line.
    Skip,
}
