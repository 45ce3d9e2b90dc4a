//! Display session shared between contexts
//!
//! The transport and the orientation state must be held together for a
//! whole bus sequence. Wrapping the session in one blocking mutex makes each
//! closure passed to [`SharedDisplay::lock`] a single uninterrupted
//! sequence, even when the session is reachable from several tasks or from
//! an interrupt handler (with `CriticalSectionRawMutex`).

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Session behind a blocking mutex
pub struct SharedDisplay<M: RawMutex, T> {
    inner: Mutex<M, RefCell<T>>,
}

impl<M: RawMutex, T> SharedDisplay<M, T> {
    pub const fn new(display: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(display)),
        }
    }

    /// Run `f` with exclusive access to the session
    ///
    /// # Panics
    ///
    /// Panics if called again from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Exclusive access without locking, through `&mut self`
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut().get_mut()
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner().into_inner()
    }
}
