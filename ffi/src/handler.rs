#![allow(dead_code)]

struct Stderr {}

impl core::fmt::Write for Stderr {
  fn write_str(&mut self, s: &str) -> core::fmt::Result {
    unsafe {
      libc::write(
        libc::STDERR_FILENO,
        s.as_ptr() as *const libc::c_void,
        s.len(),
      );
    }
    Ok(())
  }
}

#[cfg(not(test))]
#[panic_handler]
pub fn panic_handler(info: &core::panic::PanicInfo) -> ! {
  use core::fmt::Write;

  let mut sink = Stderr {};
  let _ = writeln!(sink, "panic: {}", info);
  unsafe { libc::abort() }
}
