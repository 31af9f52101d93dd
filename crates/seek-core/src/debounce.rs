//! Debouncer: collapse bursts of calls into one trailing call.
//!
//! Every [`Debouncer::call`] cancels the pending task (if any) and schedules a
//! fresh one carrying the latest arguments. Only a call followed by a full
//! `wait` of silence reaches the callback.
//!
//! Scheduling goes through the [`Scheduler`] trait. [`LocalScheduler`] spawns
//! onto the current `tokio::task::LocalSet`, so callbacks run on the same
//! thread as the caller and may hold `Rc` state.

use std::{cell::RefCell, rc::Rc, time::Duration};

/// Deferred-task capability: run `task` after `delay` unless cancelled.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancelling a task that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// [`Scheduler`] backed by `tokio::task::spawn_local` and `tokio::time::sleep`.
///
/// Must be used from inside a `LocalSet`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalScheduler;

impl Scheduler for LocalScheduler {
    type Handle = tokio::task::JoinHandle<()>;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task();
        })
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}

/// Trailing-edge debounce wrapper around a callback taking `A`.
pub struct Debouncer<A, S: Scheduler = LocalScheduler> {
    callback: Rc<dyn Fn(A)>,
    wait: Duration,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

impl<A: 'static, S: Scheduler> Debouncer<A, S> {
    pub fn new(scheduler: S, wait: Duration, callback: impl Fn(A) + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
            wait,
            scheduler,
            pending: RefCell::new(None),
        }
    }

    /// Supersede any pending call and schedule `args` for delivery after `wait`.
    pub fn call(&self, args: A) {
        if let Some(previous) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(previous);
        }
        let callback = Rc::clone(&self.callback);
        let handle = self
            .scheduler
            .schedule(self.wait, Box::new(move || callback(args)));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
