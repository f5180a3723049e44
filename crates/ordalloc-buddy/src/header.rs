use core::ptr::NonNull;

use ordalloc_list::{
  Link,
  Linked,
};

/// Metadata prefix written at the base of every block; the user pointer
/// always points one header past it.
///
/// `size` is the total footprint including the header. Small blocks carry
/// a power of two in `[MIN_BLOCK, BMAX]`; large blocks carry their
/// page-rounded mapping length, which stays far below `u32::MAX` because
/// requests are capped at `MAX_REQUEST`.
#[repr(C)]
pub struct BlockHeader {
  size: u32,
  is_free: bool,
  link: Link<Self>,
}

pub const HEADER_SIZE: usize = core::mem::size_of::<BlockHeader>();

/// Alignment every user pointer carries: block bases are at least
/// `MIN_BLOCK`- or page-aligned, so the guarantee is set by the header
/// footprint alone.
pub const USER_ALIGN: usize = 1 << HEADER_SIZE.trailing_zeros();

impl BlockHeader {
  /// Stamps a fresh header onto raw memory at `addr`.
  ///
  /// # Safety
  ///
  /// `addr` must be the base of an owned, writable region of at least
  /// `size` bytes that holds no other live header.
  pub unsafe fn write_at(addr: usize, size: usize, is_free: bool) -> NonNull<Self> {
    let ptr = addr as *mut Self;
    unsafe {
      ptr.write(Self {
        size: size as u32,
        is_free,
        link: Link::new(),
      });
      NonNull::new_unchecked(ptr)
    }
  }

  /// # Safety
  ///
  /// `user` must be a pointer previously handed out by this allocator,
  /// i.e. one header past a live [`BlockHeader`].
  pub unsafe fn from_user(user: NonNull<u8>) -> NonNull<Self> {
    unsafe { NonNull::new_unchecked(user.as_ptr().sub(HEADER_SIZE) as *mut Self) }
  }

  pub fn size(&self) -> usize {
    self.size as usize
  }

  pub fn is_free(&self) -> bool {
    self.is_free
  }

  pub fn set_size(&mut self, size: usize) {
    debug_assert!(size <= u32::MAX as usize);
    self.size = size as u32;
  }

  pub fn set_free(&mut self, is_free: bool) {
    self.is_free = is_free;
  }

  pub fn base_addr(&self) -> usize {
    self as *const Self as usize
  }

  /// First byte past the header, the address callers see.
  pub fn user_ptr(&self) -> NonNull<u8> {
    unsafe { NonNull::new_unchecked((self.base_addr() + HEADER_SIZE) as *mut u8) }
  }

  pub fn payload(&self) -> usize {
    self.size() - HEADER_SIZE
  }

  /// The companion covering the other half of this block's parent.
  /// Only meaningful inside an arena aligned to at least `2 * size`.
  pub fn buddy_addr(&self) -> usize {
    self.base_addr() ^ self.size()
  }
}

impl Linked for BlockHeader {
  fn link(&self) -> &Link<Self> {
    &self.link
  }

  fn link_mut(&mut self) -> &mut Link<Self> {
    &mut self.link
  }
}
