use std::{
    num::NonZeroU32,
    sync::{Mutex, MutexGuard},
};

/// Build a non-zero constant, failing the build if it is zero
pub(crate) const fn non_zero(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("constant must not be zero"),
    }
}

pub trait MutexUtils<T> {
    /// Lock a mutex and execute a function with its lock.
    /// This makes sure that the mutex is locked only during the function execution.
    ///
    /// A poisoned lock is recovered, as the guarded data stays valid for our uses.
    fn with_lock<R, F>(&self, f: F) -> R
    where
        F: FnOnce(MutexGuard<'_, T>) -> R;
}

impl<T> MutexUtils<T> for Mutex<T> {
    fn with_lock<R, F>(&self, f: F) -> R
    where
        F: FnOnce(MutexGuard<'_, T>) -> R,
    {
        f(self.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}
