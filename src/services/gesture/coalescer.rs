//! Per-frame coalescing of rapid updates.
//!
//! Pointer samples arrive faster than frames are drawn. [`FrameCoalescer`]
//! keeps only the latest sample and at most one scheduled application; the host
//! calls [`FrameCoalescer::on_frame`] once per rendered frame.

/// Last-value-wins buffer with at most one pending frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCoalescer<T> {
    latest: Option<T>,
    scheduled: bool,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self {
            latest: None,
            scheduled: false,
        }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` as the latest sample.
    ///
    /// Returns true when this call scheduled a new frame, false when a frame was
    /// already pending and only the value was replaced.
    pub fn push(&mut self, value: T) -> bool {
        self.latest = Some(value);
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Frame tick: hand out the latest sample, if any, and unschedule.
    pub fn on_frame(&mut self) -> Option<T> {
        self.scheduled = false;
        self.latest.take()
    }

    /// Drop the pending sample and the scheduled frame.
    pub fn cancel(&mut self) {
        self.scheduled = false;
        self.latest = None;
    }

    /// Apply immediately instead of waiting for the next frame.
    pub fn flush(&mut self) -> Option<T> {
        self.on_frame()
    }

    pub fn peek(&self) -> Option<&T> {
        self.latest.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.latest.is_some()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}
