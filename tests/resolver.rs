use core::mem::offset_of;

use hematite::{
    platform_check, ArrayLayout, Consistency, LayoutError, MemoryLocation, OffHeap, ScalarKind,
    StructLayout,
};

#[test]
fn platform_supports_all_kinds() {
    // The test host is a mainstream 64-bit target.
    assert!(platform_check().is_ok());
    for kind in ScalarKind::ALL {
        assert!(kind.require_lock_free().is_ok());
    }
}

#[test]
fn absolute_addressing_through_offheap() {
    let region = OffHeap::for_kind(ScalarKind::I64, 4).unwrap();
    assert_eq!(region.len(), 32);
    assert_eq!(region.base_address() % ScalarKind::I64.alignment(), 0);

    // Zeroed on allocation.
    for i in 0..4 {
        assert_eq!(region.element::<i64>(i).get(), 0);
    }

    region.element::<i64>(2).put(-7);
    assert_eq!(region.element::<i64>(2).fetch_add(10), -7);
    assert_eq!(region.element::<i64>(2).get(), 3);
    assert_eq!(region.element::<i64>(0).get(), 0);
}

#[test]
fn raw_address_resolution() {
    let region = OffHeap::for_kind(ScalarKind::I32, 2).unwrap();
    let addr = region.base_address() + ScalarKind::I32.width();

    // SAFETY: addr points at element 1 of a live, kind-aligned region that
    // is only accessed through locations.
    let loc = unsafe { MemoryLocation::<i32>::from_raw_address(addr) };
    loc.put(42);
    assert_eq!(region.element::<i32>(1).get(), 42);
}

#[test]
fn array_layout_resolution() {
    let region = OffHeap::for_kind(ScalarKind::I16, 8).unwrap();
    let layout = ScalarKind::I16.array_layout();
    assert_eq!(layout, ArrayLayout::of(ScalarKind::I16));
    assert_eq!(layout.index_scale, 2);

    // SAFETY: index 5 is within the 8-element region.
    let loc = unsafe { MemoryLocation::<i16>::array_element(region.as_ptr(), layout, 5) };
    loc.put(1234);
    assert_eq!(region.element::<i16>(5).get(), 1234);
}

// Fields meant for shared atomic access live in cells; ScalarCell is
// repr(transparent), so offset_of! sees the scalar's real offset.
#[repr(C)]
struct Record {
    header: hematite::ScalarCell<i32>,
    count: hematite::ScalarCell<i64>,
    ready: hematite::ScalarCell<bool>,
}

#[test]
fn relative_addressing_with_field_offsets() {
    let layout = StructLayout::new()
        .with_field("header", offset_of!(Record, header), ScalarKind::I32)
        .with_field("count", offset_of!(Record, count), ScalarKind::I64)
        .with_field("ready", offset_of!(Record, ready), ScalarKind::Bool);

    let record = Record {
        header: hematite::ScalarCell::new(7),
        count: hematite::ScalarCell::new(100),
        ready: hematite::ScalarCell::new(false),
    };
    assert_eq!(record.header.location().get(), 7);

    let count_offset = layout.field_offset("count").unwrap();
    // SAFETY: the offset came from offset_of! on this repr(C) type, and the
    // field is only accessed through this location while it exists.
    let count = unsafe { MemoryLocation::<i64>::from_object(&record, count_offset) };
    assert_eq!(count.get(), 100);
    assert_eq!(count.fetch_add_with(1, Consistency::Release), 100);
    assert_eq!(count.get_acquire(), 101);

    let ready_offset = layout.field_offset("ready").unwrap();
    // SAFETY: as above.
    let ready = unsafe { MemoryLocation::<bool>::from_object(&record, ready_offset) };
    assert!(!ready.get());
    ready.put(true);
    assert!(ready.get());
}

#[test]
fn unregistered_field_is_unaddressable() {
    let layout = StructLayout::new().with_field("header", 0, ScalarKind::I32);
    assert_eq!(
        layout.field_offset("padding"),
        Err(LayoutError::UnaddressableField { name: "padding" })
    );
    let err = layout.field("padding").unwrap_err();
    assert!(err.to_string().contains("padding"));
}

#[test]
fn offheap_rejects_impossible_requests() {
    assert!(OffHeap::for_kind(ScalarKind::I64, 0).is_err());
    assert!(OffHeap::for_kind(ScalarKind::I64, usize::MAX).is_err());
}

#[test]
#[should_panic(expected = "out of range")]
fn offheap_location_bounds_are_checked() {
    let region = OffHeap::for_kind(ScalarKind::I32, 1).unwrap();
    let _ = region.element::<i32>(1);
}

// An offset near usize::MAX must not wrap around the end-of-scalar
// computation and slip past the bounds check.
#[test]
#[should_panic(expected = "out of range")]
fn offheap_rejects_offsets_that_wrap_the_address_space() {
    let region = OffHeap::for_kind(ScalarKind::I64, 2).unwrap();
    let _ = region.location::<i64>(usize::MAX - 7);
}

#[test]
fn locations_are_small_copyable_views() {
    let cell = hematite::ScalarCell::new(3i32);
    let a = cell.location();
    let b = a;
    a.put(4);
    assert_eq!(b.get(), 4);
    assert!(!format!("{a:?}").is_empty());
}
