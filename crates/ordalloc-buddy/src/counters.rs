use getset::CloneGetters;

use crate::header::HEADER_SIZE;

/// Running totals over every block the allocator currently owns.
///
/// `allocated_*` counts free and in-use blocks alike; `free_*` counts only
/// blocks resident on a small-path free list. Byte totals are user-visible
/// payload and never include header bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, CloneGetters)]
pub struct Counters {
  #[getset(get_clone = "pub")]
  free_blocks: usize,
  #[getset(get_clone = "pub")]
  free_bytes: usize,
  #[getset(get_clone = "pub")]
  allocated_blocks: usize,
  #[getset(get_clone = "pub")]
  allocated_bytes: usize,
}

impl Counters {
  pub const fn new() -> Self {
    Self {
      free_blocks: 0,
      free_bytes: 0,
      allocated_blocks: 0,
      allocated_bytes: 0,
    }
  }

  pub fn meta_data_bytes(&self) -> usize {
    HEADER_SIZE * self.allocated_blocks
  }

  /// A new block identity arrived from the OS (arena carve, large map).
  pub(crate) fn account_adopt(&mut self, payload: usize) {
    self.allocated_blocks += 1;
    self.allocated_bytes += payload;
  }

  /// A large mapping was handed back to the OS.
  pub(crate) fn account_retire(&mut self, payload: usize) {
    self.allocated_blocks -= 1;
    self.allocated_bytes -= payload;
  }

  /// One parent payload became two half payloads: a new identity, and one
  /// header's worth of payload turned into metadata.
  pub(crate) fn account_split(&mut self) {
    self.allocated_blocks += 1;
    self.allocated_bytes -= HEADER_SIZE;
  }

  pub(crate) fn account_merge(&mut self) {
    self.allocated_blocks -= 1;
    self.allocated_bytes += HEADER_SIZE;
  }

  /// A block entered a free list.
  pub(crate) fn account_enlist(&mut self, payload: usize) {
    self.free_blocks += 1;
    self.free_bytes += payload;
  }

  pub(crate) fn account_delist(&mut self, payload: usize) {
    self.free_blocks -= 1;
    self.free_bytes -= payload;
  }
}

impl core::fmt::Display for Counters {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      r#"Stat               | Value
-------------------|-------------------
# Free Blocks      | {:>18}
# Free Bytes       | {:>18}
# Allocated Blocks | {:>18}
# Allocated Bytes  | {:>18}
# Metadata Bytes   | {:>18}"#,
      self.free_blocks,
      self.free_bytes,
      self.allocated_blocks,
      self.allocated_bytes,
      self.meta_data_bytes(),
    )
  }
}
