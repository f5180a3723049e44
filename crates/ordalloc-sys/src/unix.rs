#[cfg(any(target_os = "linux", target_os = "macos"))]
use core::ptr::NonNull;

#[cfg(any(target_os = "linux", target_os = "macos"))]
use crate::{
  prim::is_page_aligned,
  system::{
    SysError,
    SysResult,
    System,
  },
};

pub struct UnixSystem {}

#[cfg(any(target_os = "linux", target_os = "macos"))]
pub static UNIX_SYSTEM: UnixSystem = UnixSystem {};

#[cfg(any(target_os = "linux", target_os = "macos"))]
impl UnixSystem {
  const BRK_FAILED: *mut libc::c_void = usize::MAX as *mut libc::c_void;

  const fn map_prot() -> i32 {
    libc::PROT_READ | libc::PROT_WRITE
  }

  const fn map_flags() -> i32 {
    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS
  }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
unsafe impl System for UnixSystem {
  unsafe fn extend(&self, delta: usize) -> SysResult<NonNull<u8>> {
    if delta > isize::MAX as usize {
      return Err(SysError::InvalidArgument);
    }

    let old = unsafe { libc::sbrk(delta as libc::intptr_t) };
    if old == Self::BRK_FAILED {
      return Err(SysError::OutOfMemory);
    }

    NonNull::new(old as *mut u8).ok_or(SysError::OutOfMemory)
  }

  unsafe fn map(&self, len: usize) -> SysResult<NonNull<u8>> {
    if !is_page_aligned(len) {
      return Err(SysError::InvalidArgument);
    }

    let ptr = unsafe {
      libc::mmap(
        core::ptr::null_mut(),
        len,
        Self::map_prot(),
        Self::map_flags(),
        -1,
        0,
      )
    };

    match ptr {
      libc::MAP_FAILED => Err(SysError::OutOfMemory),
      _ => NonNull::new(ptr as *mut u8).ok_or(SysError::OutOfMemory),
    }
  }

  unsafe fn unmap(&self, base: NonNull<u8>, len: usize) -> SysResult<()> {
    let result = unsafe { libc::munmap(base.as_ptr() as *mut libc::c_void, len) };
    if result == 0 {
      return Ok(());
    }

    Err(SysError::InvalidArgument)
  }
}
