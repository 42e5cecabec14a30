//! Error types for static (construction-time) failures.
//!
//! The misuse class — wrong kind for a location, out-of-bounds index,
//! unaligned access where atomicity was required — is kept statically
//! unrepresentable by the typed location API and has no runtime error here.
//! What remains is platform capability (static for a process's lifetime,
//! reported at construction/probe time) and field registration lookups.

use crate::kind::ScalarKind;

/// The target lacks a native lock-free atomic for the requested kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformError {
    kind: ScalarKind,
}

impl PlatformError {
    pub(crate) const fn new(kind: ScalarKind) -> Self {
        Self { kind }
    }

    /// The unsupported scalar kind.
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }
}

impl core::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "no native {}-byte atomic support on this target (kind {:?})",
            self.kind.width(),
            self.kind
        )
    }
}

impl std::error::Error for PlatformError {}

/// A field-offset lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The named field was never registered with the layout, the analogue of
    /// a field the compiler has made unaddressable. Surfaced explicitly
    /// rather than failing silently.
    UnaddressableField {
        /// The name that was looked up.
        name: &'static str,
    },
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::UnaddressableField { name } => {
                write!(f, "field `{name}` is not addressable in this layout")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
