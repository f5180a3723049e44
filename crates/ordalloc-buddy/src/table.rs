use core::ptr::NonNull;

use ordalloc_list::{
  ListIter,
  OrderedList,
};

use crate::{
  counters::Counters,
  geometry::{
    ORDER_COUNT,
    order_for,
  },
  header::BlockHeader,
};

/// One address-ascending free list per order.
pub struct FreeTable {
  orders: [OrderedList<BlockHeader>; ORDER_COUNT],
}

impl FreeTable {
  pub const fn new() -> Self {
    Self {
      orders: [const { OrderedList::new() }; ORDER_COUNT],
    }
  }

  /// Threads a free block onto the list of its order.
  ///
  /// # Safety
  ///
  /// `block` must be a valid header, already marked free, not resident on
  /// any list.
  pub unsafe fn insert(&mut self, block: NonNull<BlockHeader>, counters: &mut Counters) {
    let (order, payload) = {
      let header = unsafe { block.as_ref() };
      debug_assert!(header.is_free());
      (order_for(header.size()), header.payload())
    };

    unsafe { self.orders[order].insert(block) };
    counters.account_enlist(payload);
  }

  /// # Safety
  ///
  /// `block` must currently be resident on the list of its order.
  pub unsafe fn remove(&mut self, block: NonNull<BlockHeader>, counters: &mut Counters) {
    let (order, payload) = {
      let header = unsafe { block.as_ref() };
      (order_for(header.size()), header.payload())
    };

    unsafe { self.orders[order].remove(block) };
    counters.account_delist(payload);
  }

  /// Detaches the lowest-address head of the first nonempty list at
  /// `min_order` or above.
  ///
  /// # Safety
  ///
  /// Every resident block must still be a valid header.
  pub unsafe fn pop_at_least(
    &mut self,
    min_order: usize,
    counters: &mut Counters,
  ) -> Option<NonNull<BlockHeader>> {
    for order in min_order..ORDER_COUNT {
      if let Some(block) = unsafe { self.orders[order].pop_head() } {
        counters.account_delist(unsafe { block.as_ref() }.payload());
        return Some(block);
      }
    }

    None
  }

  pub fn len(&self, order: usize) -> usize {
    self.orders[order].len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.iter().all(|list| list.is_empty())
  }

  /// Block count per order, lowest first.
  pub fn profile(&self) -> [usize; ORDER_COUNT] {
    core::array::from_fn(|order| self.orders[order].len())
  }

  pub fn iter(&self, order: usize) -> ListIter<'_, BlockHeader> {
    self.orders[order].iter()
  }
}
