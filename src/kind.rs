//! Scalar kinds and array layout descriptors.
//!
//! The accessor families operate on a closed set of eight scalar kinds. Each
//! kind has a fixed byte width, a natural alignment equal to that width
//! (capped at the machine word), and a width-matched hardware atomic behind
//! it. The kind of a location never changes for the duration of an access
//! sequence; mixing kinds on the same bytes is a caller error the layer does
//! not detect.

use crate::error::PlatformError;

/// The eight scalar kinds the access layer understands.
///
/// `Char16` is an unsigned 16-bit code unit (represented as `u16` in the
/// typed API); `Bool` occupies one byte and its atomics operate on that byte
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 64-bit IEEE-754 float.
    F64,
    /// 64-bit signed integer.
    I64,
    /// 32-bit signed integer.
    I32,
    /// 32-bit IEEE-754 float.
    F32,
    /// 16-bit unsigned code unit.
    Char16,
    /// 16-bit signed integer.
    I16,
    /// 8-bit signed integer.
    I8,
    /// Single-byte boolean.
    Bool,
}

impl ScalarKind {
    /// Every kind, widest first.
    pub const ALL: [ScalarKind; 8] = [
        ScalarKind::F64,
        ScalarKind::I64,
        ScalarKind::I32,
        ScalarKind::F32,
        ScalarKind::Char16,
        ScalarKind::I16,
        ScalarKind::I8,
        ScalarKind::Bool,
    ];

    /// Byte width of one scalar of this kind.
    #[inline(always)]
    pub const fn width(self) -> usize {
        match self {
            ScalarKind::F64 | ScalarKind::I64 => 8,
            ScalarKind::I32 | ScalarKind::F32 => 4,
            ScalarKind::Char16 | ScalarKind::I16 => 2,
            ScalarKind::I8 | ScalarKind::Bool => 1,
        }
    }

    /// Natural alignment required for atomic access to this kind.
    ///
    /// This is the alignment of the width-matched atomic type, which on some
    /// 32-bit targets is stricter than the alignment of the plain scalar
    /// (e.g. `f64` on x86).
    #[inline(always)]
    pub const fn alignment(self) -> usize {
        self.width()
    }

    /// Whether the kind is a floating-point kind.
    #[inline(always)]
    pub const fn is_float(self) -> bool {
        matches!(self, ScalarKind::F64 | ScalarKind::F32)
    }

    /// Whether the current target provides a native lock-free atomic of this
    /// kind's width.
    ///
    /// Platform capability is static for the lifetime of a process, so this
    /// is meant to be consulted once, at construction time of whatever
    /// structure needs the kind, not per access.
    #[inline]
    pub const fn is_lock_free(self) -> bool {
        match self.width() {
            8 => cfg!(target_has_atomic = "64"),
            4 => cfg!(target_has_atomic = "32"),
            2 => cfg!(target_has_atomic = "16"),
            _ => cfg!(target_has_atomic = "8"),
        }
    }

    /// Returns an error if the target lacks a native atomic for this kind.
    ///
    /// # Errors
    /// [`PlatformError`] naming the unsupported kind.
    pub fn require_lock_free(self) -> Result<(), PlatformError> {
        if self.is_lock_free() {
            Ok(())
        } else {
            Err(PlatformError::new(self))
        }
    }

    /// The layout of a dense, header-free array of this kind.
    #[inline]
    pub const fn array_layout(self) -> ArrayLayout {
        ArrayLayout::of(self)
    }
}

/// Verifies that every scalar kind has native atomic support on this target.
///
/// # Errors
/// [`PlatformError`] for the first unsupported kind, widest first.
pub fn platform_check() -> Result<(), PlatformError> {
    for kind in ScalarKind::ALL {
        kind.require_lock_free()?;
    }
    Ok(())
}

/// Describes where element 0 of an array begins and the byte stride between
/// elements, for translating `(array, index)` into a byte offset.
///
/// For native slices the base offset is zero and the scale is the kind
/// width; non-zero base offsets describe foreign layouts such as serialized
/// buffers with headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayLayout {
    /// Byte offset of element 0 from the array base.
    pub base_offset: usize,
    /// Byte stride between consecutive elements.
    pub index_scale: usize,
}

impl ArrayLayout {
    /// The layout of a dense, header-free array of `kind`.
    #[inline]
    pub const fn of(kind: ScalarKind) -> Self {
        Self {
            base_offset: 0,
            index_scale: kind.width(),
        }
    }

    /// A layout with an explicit base offset and stride.
    #[inline]
    pub const fn new(base_offset: usize, index_scale: usize) -> Self {
        Self {
            base_offset,
            index_scale,
        }
    }

    /// Byte offset of the element at `index`.
    ///
    /// The caller is responsible for `index` being in bounds for the backing
    /// storage; no check happens here.
    #[inline(always)]
    pub const fn offset_of(self, index: usize) -> usize {
        self.base_offset + index * self.index_scale
    }
}
