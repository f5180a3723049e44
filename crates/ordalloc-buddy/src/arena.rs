use ordalloc_sys::{
  math::align_offset,
  system::{
    SysError,
    SysResult,
    System,
  },
};

use crate::{
  counters::Counters,
  geometry::{
    ARENA_SIZE,
    ARENA_SLOTS,
    BMAX,
  },
  header::{
    BlockHeader,
    HEADER_SIZE,
  },
  table::FreeTable,
};

/// The single contiguous region all small-path blocks are carved from.
///
/// The base is forced to a multiple of the region's own size, which gives
/// every buddy pair up to the top order coincident low bits; that is the
/// whole reason `addr ^ size` finds the buddy.
pub struct Arena {
  base: usize,
  len: usize,
}

impl Arena {
  /// Probes the current break, then extends by padding plus region in one
  /// request so the arena lands on an [`ARENA_SIZE`] boundary.
  pub fn reserve(system: &dyn System) -> SysResult<Self> {
    let probe = unsafe { system.extend(0) }?;
    let pad = align_offset(probe.as_ptr() as usize, ARENA_SIZE)
      .map_err(|_| SysError::InvalidArgument)?;

    let old = unsafe { system.extend(pad + ARENA_SIZE) }?;

    Ok(Self {
      base: old.as_ptr() as usize + pad,
      len: ARENA_SIZE,
    })
  }

  /// Stamps the initial [`ARENA_SLOTS`] top-order headers and threads them
  /// onto the table.
  ///
  /// # Safety
  ///
  /// The region must be owned and writable, and this must be called
  /// exactly once.
  pub unsafe fn carve(&self, table: &mut FreeTable, counters: &mut Counters) {
    for slot in 0..ARENA_SLOTS {
      let addr = self.base + slot * BMAX;
      let block = unsafe { BlockHeader::write_at(addr, BMAX, true) };

      counters.account_adopt(BMAX - HEADER_SIZE);
      unsafe { table.insert(block, counters) };
    }
  }

  pub fn base(&self) -> usize {
    self.base
  }

  pub fn contains(&self, addr: usize) -> bool {
    (self.base..self.base + self.len).contains(&addr)
  }
}
