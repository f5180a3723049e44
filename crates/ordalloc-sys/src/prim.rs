use spin::Once;

use crate::math::{
  MathResult,
  align_up,
};

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
const FALLBACK_PAGE_SIZE: usize = 4096;

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn probe_page_size() -> usize {
  unsafe { libc::sysconf(libc::_SC_PAGESIZE) as usize }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn probe_page_size() -> usize {
  FALLBACK_PAGE_SIZE
}

/// The system page size, probed once and cached for the process lifetime.
pub fn page_size() -> usize {
  static PAGE_SIZE: Once<usize> = Once::new();
  *PAGE_SIZE.call_once(probe_page_size)
}

/// Rounds `value` up to a whole number of pages.
pub fn page_align(value: usize) -> MathResult<usize> {
  align_up(value, page_size())
}

pub fn is_page_aligned(value: usize) -> bool {
  value & (page_size() - 1) == 0
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_size_is_a_cached_power_of_two() {
    let first = page_size();
    assert!(first > 0);
    assert!(first.is_power_of_two());
    assert_eq!(page_size(), first);
  }

  #[test]
  fn page_align_rounds_to_the_next_page() {
    let ps = page_size();
    assert_eq!(page_align(0), Ok(0));
    assert_eq!(page_align(1), Ok(ps));
    assert_eq!(page_align(ps), Ok(ps));
    assert_eq!(page_align(ps + 1), Ok(ps * 2));

    assert!(page_align(usize::MAX).is_err());
  }

  #[test]
  fn page_alignment_check() {
    let ps = page_size();
    assert!(is_page_aligned(0));
    assert!(is_page_aligned(ps));
    assert!(is_page_aligned(ps * 3));
    assert!(!is_page_aligned(1));
    assert!(!is_page_aligned(ps - 1));
  }
}
