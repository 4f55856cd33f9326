// Bookkeeping for the requestAnimationFrame chain, kept free of web types so
// the stop/hidden rules can be checked off the browser.

use std::cell::Cell;
use std::rc::Rc;

/// What the caller must do with the host scheduler after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopAction {
    Request,
    Cancel(i32),
    Keep,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopState {
    stopped: bool,
    hidden: bool,
    pending: Option<i32>,
}

impl LoopState {
    #[inline]
    pub fn should_run(&self) -> bool {
        !self.stopped && !self.hidden
    }

    #[inline]
    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    pub fn set_stopped(&mut self, stopped: bool) -> LoopAction {
        self.stopped = stopped;
        self.sync()
    }

    pub fn set_hidden(&mut self, hidden: bool) -> LoopAction {
        self.hidden = hidden;
        self.sync()
    }

    /// Reconcile the pending request with the stop/hidden flags. A
    /// `Cancel` clears the pending id.
    pub fn sync(&mut self) -> LoopAction {
        match (self.should_run(), self.pending) {
            (true, None) => LoopAction::Request,
            (false, Some(id)) => {
                self.pending = None;
                LoopAction::Cancel(id)
            }
            _ => LoopAction::Keep,
        }
    }

    pub fn requested(&mut self, id: i32) {
        self.pending = Some(id);
    }

    pub fn take_pending(&mut self) -> Option<i32> {
        self.pending.take()
    }

    /// Called when a scheduled callback fires; `false` means the frame must
    /// not run.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.should_run()
    }
}

/// Resize request that stays raised until a reinitialization succeeds.
#[derive(Clone, Debug)]
pub struct ResizeLatch(Rc<Cell<bool>>);

impl ResizeLatch {
    pub fn new(raised: bool) -> Self {
        Self(Rc::new(Cell::new(raised)))
    }

    #[inline]
    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Run `reinit` when raised. A failed attempt leaves the latch raised so
    /// the next frame tries again.
    pub fn service<T, E>(&self, reinit: impl FnOnce() -> Result<T, E>) -> Option<Result<T, E>> {
        if !self.0.get() {
            return None;
        }
        let result = reinit();
        self.0.set(result.is_err());
        Some(result)
    }
}
