use core::ptr::NonNull;

use ordalloc_list::StackList;
use ordalloc_sys::{
  prim::page_align,
  system::System,
};

use crate::{
  BuddyError,
  BuddyResult,
  counters::Counters,
  header::{
    BlockHeader,
    HEADER_SIZE,
  },
};

/// The satellite regime for over-threshold requests: each block is its own
/// anonymous mapping, threaded on one list, newest first. Free-list
/// counters never see these blocks.
pub struct LargeList {
  blocks: StackList<BlockHeader>,
}

impl LargeList {
  pub const fn new() -> Self {
    Self {
      blocks: StackList::new(),
    }
  }

  /// Maps a page-rounded region for `total` bytes (header included) and
  /// returns the user pointer.
  ///
  /// # Safety
  ///
  /// `system` must uphold the [`System`] contract.
  pub unsafe fn map(
    &mut self,
    system: &dyn System,
    total: usize,
    counters: &mut Counters,
  ) -> BuddyResult<NonNull<u8>> {
    let rounded = page_align(total).map_err(|_| BuddyError::InvalidSize)?;
    let base = unsafe { system.map(rounded) }.map_err(BuddyError::SystemError)?;

    let block = unsafe { BlockHeader::write_at(base.as_ptr() as usize, rounded, false) };
    unsafe { self.blocks.push(block) };
    counters.account_adopt(rounded - HEADER_SIZE);

    Ok(unsafe { block.as_ref() }.user_ptr())
  }

  /// Unlinks `block` and hands its mapping back to the OS.
  ///
  /// # Safety
  ///
  /// `block` must be a header previously produced by [`Self::map`] on this
  /// list, and must not be touched afterwards.
  pub unsafe fn release(
    &mut self,
    system: &dyn System,
    block: NonNull<BlockHeader>,
    counters: &mut Counters,
  ) {
    let (addr, size, payload) = {
      let header = unsafe { block.as_ref() };
      (header.base_addr(), header.size(), header.payload())
    };

    unsafe { self.blocks.remove(block) };
    counters.account_retire(payload);

    let base = unsafe { NonNull::new_unchecked(addr as *mut u8) };
    let _ = unsafe { system.unmap(base, size) };
  }

  pub fn len(&self) -> usize {
    self.blocks.len()
  }

  pub fn head(&self) -> Option<NonNull<BlockHeader>> {
    self.blocks.head()
  }
}
