#![cfg_attr(not(test), no_std)]

use core::{
  alloc::{
    GlobalAlloc,
    Layout,
  },
  ptr::NonNull,
};

use ordalloc_buddy::{
  BuddyAlloc,
  counters::Counters,
  header::{
    HEADER_SIZE,
    USER_ALIGN,
  },
};
use spin::{
  Lazy,
  Mutex,
};

static ALLOCATOR: Lazy<Mutex<BuddyAlloc>> = Lazy::new(|| Mutex::new(BuddyAlloc::new()));

/// Hands out `size` bytes, or null on invalid size / exhaustion.
pub fn alloc(size: usize) -> *mut u8 {
  match ALLOCATOR.lock().allocate(size) {
    Ok(user) => user.as_ptr(),
    Err(_) => core::ptr::null_mut(),
  }
}

/// `count * size` zero-filled bytes, with calloc's stricter bounds.
pub fn alloc_zeroed(count: usize, size: usize) -> *mut u8 {
  match ALLOCATOR.lock().allocate_zeroed(count, size) {
    Ok(user) => user.as_ptr(),
    Err(_) => core::ptr::null_mut(),
  }
}

/// Returns a block; silent on null, low addresses, and double frees.
///
/// # Safety
///
/// `user` must be null or a pointer previously returned by this module,
/// and the block must not be accessed after this call.
pub unsafe fn free(user: *mut u8) {
  if let Some(user) = NonNull::new(user) {
    unsafe { ALLOCATOR.lock().deallocate(user) };
  }
}

/// Resizes a block, behaving as [`alloc`] when `old` is null. On every
/// failure the result is null and the old block remains valid.
///
/// # Safety
///
/// `old` must be null or a live pointer previously returned by this
/// module.
pub unsafe fn realloc(old: *mut u8, size: usize) -> *mut u8 {
  let Some(user) = NonNull::new(old) else {
    return alloc(size);
  };

  match unsafe { ALLOCATOR.lock().reallocate(user, size) } {
    Ok(moved) => moved.as_ptr(),
    Err(_) => core::ptr::null_mut(),
  }
}

pub fn num_free_blocks() -> usize {
  ALLOCATOR.lock().counters().free_blocks()
}

pub fn num_free_bytes() -> usize {
  ALLOCATOR.lock().counters().free_bytes()
}

pub fn num_allocated_blocks() -> usize {
  ALLOCATOR.lock().counters().allocated_blocks()
}

pub fn num_allocated_bytes() -> usize {
  ALLOCATOR.lock().counters().allocated_bytes()
}

pub fn num_meta_data_bytes() -> usize {
  ALLOCATOR.lock().counters().meta_data_bytes()
}

pub const fn size_meta_data() -> usize {
  HEADER_SIZE
}

/// Snapshot of the running totals.
pub fn counters() -> Counters {
  *ALLOCATOR.lock().counters()
}

/// `GlobalAlloc` adapter over the process-wide allocator. Alignment
/// requests above the buddy geometry's natural guarantee are refused.
pub struct OrdAlloc {}

unsafe impl GlobalAlloc for OrdAlloc {
  unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
    if layout.align() > USER_ALIGN {
      return core::ptr::null_mut();
    }

    alloc(layout.size().max(1))
  }

  unsafe fn dealloc(&self, ptr: *mut u8, _layout: Layout) {
    unsafe { free(ptr) }
  }

  unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
    if layout.align() > USER_ALIGN {
      return core::ptr::null_mut();
    }

    let user = alloc(layout.size().max(1));
    if !user.is_null() {
      unsafe { core::ptr::write_bytes(user, 0, layout.size()) };
    }

    user
  }

  unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
    if layout.align() > USER_ALIGN {
      return core::ptr::null_mut();
    }

    unsafe { realloc(ptr, new_size) }
  }
}

pub mod prelude {
  pub use ordalloc_buddy::prelude::*;
  pub use ordalloc_sys::prim::page_size;

  pub use super::OrdAlloc;
}
