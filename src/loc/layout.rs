//! Field-offset registration and lookup.
//!
//! Byte offsets for named fields are computed once, at registration time,
//! and reused; a lookup of a name that was never registered surfaces
//! [`LayoutError::UnaddressableField`] rather than failing silently.

use crate::error::LayoutError;
use crate::kind::ScalarKind;

/// One registered field: its name, byte offset, and scalar kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    offset: usize,
    kind: ScalarKind,
}

impl FieldDescriptor {
    /// The field's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The field's byte offset from the owning object's base.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The field's scalar kind.
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }
}

/// A registry of addressable fields for one object layout.
///
/// Offsets are supplied at registration, typically from
/// [`core::mem::offset_of!`] on a `#[repr(C)]` type:
///
/// ```
/// use hematite::{ScalarKind, StructLayout};
///
/// #[repr(C)]
/// struct Header { magic: i32, flags: i32 }
///
/// let layout = StructLayout::new()
///     .with_field("magic", core::mem::offset_of!(Header, magic), ScalarKind::I32)
///     .with_field("flags", core::mem::offset_of!(Header, flags), ScalarKind::I32);
///
/// assert_eq!(layout.field_offset("flags"), Ok(4));
/// assert!(layout.field_offset("missing").is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct StructLayout {
    fields: Vec<FieldDescriptor>,
}

impl StructLayout {
    /// An empty layout.
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Registers a field. Later registrations of the same name shadow
    /// earlier ones.
    #[must_use]
    pub fn with_field(mut self, name: &'static str, offset: usize, kind: ScalarKind) -> Self {
        self.fields.insert(0, FieldDescriptor { name, offset, kind });
        self
    }

    /// Looks up a registered field.
    ///
    /// # Errors
    /// [`LayoutError::UnaddressableField`] if `name` was never registered.
    pub fn field(&self, name: &'static str) -> Result<&FieldDescriptor, LayoutError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or(LayoutError::UnaddressableField { name })
    }

    /// Looks up a registered field's byte offset.
    ///
    /// # Errors
    /// [`LayoutError::UnaddressableField`] if `name` was never registered.
    pub fn field_offset(&self, name: &'static str) -> Result<usize, LayoutError> {
        self.field(name).map(FieldDescriptor::offset)
    }

    /// The registered fields, most recently registered first.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadowing_keeps_latest_registration() {
        let layout = StructLayout::new()
            .with_field("x", 0, ScalarKind::I32)
            .with_field("x", 8, ScalarKind::I64);
        assert_eq!(layout.field_offset("x"), Ok(8));
        assert_eq!(layout.field("x").unwrap().kind(), ScalarKind::I64);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let layout = StructLayout::new();
        assert_eq!(
            layout.field_offset("ghost"),
            Err(crate::error::LayoutError::UnaddressableField { name: "ghost" })
        );
    }
}
