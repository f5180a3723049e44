#![no_std]

pub use ordalloc::prelude::*;
use core::ptr;

mod handler;

#[unsafe(no_mangle)]
pub extern "C" fn malloc(size: usize) -> *mut u8 {
  ordalloc::alloc(size)
}

#[unsafe(no_mangle)]
pub extern "C" fn free(ptr: *mut u8) {
  unsafe { ordalloc::free(ptr) }
}

#[unsafe(no_mangle)]
pub extern "C" fn realloc(ptr: *mut u8, size: usize) -> *mut u8 {
  unsafe { ordalloc::realloc(ptr, size) }
}

#[unsafe(no_mangle)]
pub extern "C" fn calloc(count: usize, size: usize) -> *mut u8 {
  ordalloc::alloc_zeroed(count, size)
}

#[unsafe(no_mangle)]
pub extern "C" fn aligned_alloc(align: usize, size: usize) -> *mut u8 {
  if align == 0 || !align.is_power_of_two() || align > USER_ALIGN {
    return ptr::null_mut();
  }

  ordalloc::alloc(size)
}

#[unsafe(no_mangle)]
pub extern "C" fn ord_page_size() -> usize {
  page_size()
}

#[unsafe(no_mangle)]
pub extern "C" fn ord_num_free_blocks() -> usize {
  ordalloc::num_free_blocks()
}

#[unsafe(no_mangle)]
pub extern "C" fn ord_num_free_bytes() -> usize {
  ordalloc::num_free_bytes()
}

#[unsafe(no_mangle)]
pub extern "C" fn ord_num_allocated_blocks() -> usize {
  ordalloc::num_allocated_blocks()
}

#[unsafe(no_mangle)]
pub extern "C" fn ord_num_allocated_bytes() -> usize {
  ordalloc::num_allocated_bytes()
}

#[unsafe(no_mangle)]
pub extern "C" fn ord_num_meta_data_bytes() -> usize {
  ordalloc::num_meta_data_bytes()
}

#[unsafe(no_mangle)]
pub extern "C" fn ord_size_meta_data() -> usize {
  ordalloc::size_meta_data()
}
