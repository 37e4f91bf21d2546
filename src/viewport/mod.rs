//! Viewport state signal.
//!
//! The viewport width is the root signal behind breakpoint reactivity.
//! The host environment pushes width changes into [`set_viewport_width`];
//! breakpoint controllers subscribe through [`viewport_width_signal`].

use std::cell::RefCell;

use spark_signals::signal;

thread_local! {
    static VIEWPORT_WIDTH: RefCell<spark_signals::Signal<u32>> = RefCell::new(signal(1920));
}

/// Get the current viewport width in pixels.
pub fn viewport_width() -> u32 {
    VIEWPORT_WIDTH.with(|w| w.borrow().get())
}

/// Set the viewport width (called by the host on resize notifications).
pub fn set_viewport_width(px: u32) {
    VIEWPORT_WIDTH.with(|w| w.borrow().set(px));
}

/// Get the viewport width signal for reactive tracking.
pub fn viewport_width_signal() -> spark_signals::Signal<u32> {
    VIEWPORT_WIDTH.with(|w| w.borrow().clone())
}

/// Reset the viewport to its initial width. Test seam.
pub fn reset_viewport_state() {
    VIEWPORT_WIDTH.with(|w| *w.borrow_mut() = signal(1920));
}

// =============================================================================
// Tests
// =============================================================================
