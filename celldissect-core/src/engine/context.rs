//! Per-message decode state.

use smallvec::SmallVec;

use crate::error::DecodeError;

/// Default nesting limit for recursive field elements.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Scratch entry: (key, value).
pub type ScratchEntry = (&'static str, u64);

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum nesting depth of container elements.
    pub max_depth: usize,
    /// Report extraneous data as an error instead of a warning.
    pub strict: bool,
    /// Skip the element walk when the message type is unknown.
    pub stop_on_unknown_message: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
            stop_on_unknown_message: true,
        }
    }
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational (unknown tags rendered opaque)
    Note,
    /// Decoded, but the PDU deviates from the format
    Warning,
    /// Part of the PDU could not be decoded
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A problem found during a decode pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Offset relative to the start of the message
    pub offset: usize,
    pub severity: Severity,
    pub error: DecodeError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}: {}", self.severity.as_str(), self.offset, self.error)
    }
}

/// Mutable state threaded through one decode pass.
///
/// Element decoders use the scratch map to pass values to decoders of later
/// or nested elements (e.g. the cell identification discriminator of a
/// Cell Identifier List used by a later Cell Load Information Group).
/// Nothing here outlives the message.
#[derive(Debug, Clone, Default)]
pub struct DecodeContext {
    pub config: DecoderConfig,

    /// Current nesting depth (0 = message level).
    depth: usize,

    /// Message type being decoded.
    pub message_type: Option<u8>,

    /// Cross-element scratch values. Typically 0-2 entries.
    scratch: SmallVec<[ScratchEntry; 4]>,

    diagnostics: Vec<Diagnostic>,
}

impl DecodeContext {
    /// Create a context for one message.
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a container. Fails when the depth limit would be exceeded.
    pub fn descend(&mut self, element: &'static str) -> Result<(), DecodeError> {
        if self.depth >= self.config.max_depth {
            return Err(DecodeError::DepthExceeded {
                element,
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a container entered with [`descend`](Self::descend).
    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Get a scratch value by key.
    #[inline]
    pub fn scratch(&self, key: &str) -> Option<u64> {
        self.scratch.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Set a scratch value (updates existing or appends).
    #[inline]
    pub fn set_scratch(&mut self, key: &'static str, value: u64) {
        if let Some(entry) = self.scratch.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.scratch.push((key, value));
        }
    }

    /// Record a diagnostic.
    pub fn report(&mut self, offset: usize, severity: Severity, error: DecodeError) {
        tracing::debug!(offset, severity = severity.as_str(), %error, "decode diagnostic");
        self.diagnostics.push(Diagnostic {
            offset,
            severity,
            error,
        });
    }

    /// Severity for extraneous data under the current config.
    pub fn extraneous_severity(&self) -> Severity {
        if self.config.strict {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take the diagnostics, leaving the context empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Check if any error-level diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }
}
