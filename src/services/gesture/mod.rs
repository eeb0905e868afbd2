// Event gesture system
//
// Drives the drag/resize preview for the layout engine.
// - Pointer samples become snapped, clamped candidate minutes
// - Candidates are coalesced to at most one application per frame
// - The controller is the only writer of the preview; readers get a PreviewReader

use chrono::{DateTime, Local};

use crate::models::event::Event;
use crate::models::preview::DragPreview;
use crate::models::settings::LayoutSettings;
use crate::utils::date::{
    end_minutes_within_day, minutes_since_midnight, with_minutes, MINUTES_PER_DAY,
};

pub mod coalescer;
pub mod snap;

pub use coalescer::FrameCoalescer;

use snap::{
    clamp_start_minutes, minutes_to_px, px_to_minutes, snap_to_minutes, MIN_GESTURE_MINUTES,
};

/// Which edge of the event is being resized
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Top edge - adjusts start time
    Top,
    /// Bottom edge - adjusts end time
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize(ResizeHandle),
}

/// Candidate start/end in minutes after midnight of the event's day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateMinutes {
    pub start: i64,
    pub end: i64,
}

/// State captured when a gesture begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GestureContext {
    pub event_id: String,
    pub kind: GestureKind,
    pub original_start: DateTime<Local>,
    pub original_end: DateTime<Local>,
    origin: CandidateMinutes,
}

impl GestureContext {
    pub fn from_event(event: &Event, kind: GestureKind) -> Self {
        let start = minutes_since_midnight(event.start);
        let end = end_minutes_within_day(event.start, event.end).max(start);
        Self {
            event_id: event.id.clone(),
            kind,
            original_start: event.start,
            original_end: event.end,
            origin: CandidateMinutes {
                start: i64::from(start),
                end: i64::from(end),
            },
        }
    }

    /// Minutes the event occupied when the gesture began.
    pub fn origin(&self) -> CandidateMinutes {
        self.origin
    }

    /// Candidate minutes after moving the pointer by `delta_minutes`.
    pub fn candidate(&self, delta_minutes: f64, snap: u32) -> CandidateMinutes {
        let day = i64::from(MINUTES_PER_DAY);
        let CandidateMinutes { start, end } = self.origin;

        match self.kind {
            GestureKind::Drag => {
                let duration = end - start;
                let moved = snap_to_minutes(start as f64 + delta_minutes, snap);
                let start = clamp_start_minutes(moved, duration, day);
                CandidateMinutes {
                    start,
                    end: start + duration,
                }
            }
            GestureKind::Resize(ResizeHandle::Top) => {
                let moved = snap_to_minutes(start as f64 + delta_minutes, snap);
                CandidateMinutes {
                    start: moved.min(end - MIN_GESTURE_MINUTES).max(0),
                    end,
                }
            }
            GestureKind::Resize(ResizeHandle::Bottom) => {
                let moved = snap_to_minutes(end as f64 + delta_minutes, snap);
                CandidateMinutes {
                    start,
                    end: moved.max(start + MIN_GESTURE_MINUTES).min(day),
                }
            }
        }
    }

    /// Preview for `candidate`, or `None` if the wall-clock time does not exist.
    pub fn preview_at(&self, candidate: CandidateMinutes) -> Option<DragPreview> {
        Some(DragPreview::new(
            self.event_id.clone(),
            with_minutes(self.original_start, candidate.start)?,
            with_minutes(self.original_start, candidate.end)?,
        ))
    }
}

/// Times to persist after a gesture is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommittedMove {
    pub event_id: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

/// Immediate geometry for the element under the pointer, bypassing layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedbackGeometry {
    pub top: f64,
    pub height: f64,
}

/// Read-only view of the current preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewReader<'a> {
    preview: Option<&'a DragPreview>,
}

impl<'a> PreviewReader<'a> {
    pub fn current(&self) -> Option<&'a DragPreview> {
        self.preview
    }

    pub fn is_active(&self) -> bool {
        self.preview.is_some()
    }

    pub fn event_id(&self) -> Option<&'a str> {
        self.preview.map(|p| p.event_id.as_str())
    }
}

/// Single writer of the drag/resize preview.
#[derive(Debug)]
pub struct GestureController {
    hour_height: f64,
    snap_minutes: u32,
    active: Option<GestureContext>,
    preview: Option<DragPreview>,
    pending: FrameCoalescer<CandidateMinutes>,
    last_candidate: Option<CandidateMinutes>,
}

impl GestureController {
    pub fn new(hour_height: f64, snap_minutes: u32) -> Self {
        Self {
            hour_height,
            snap_minutes,
            active: None,
            preview: None,
            pending: FrameCoalescer::new(),
            last_candidate: None,
        }
    }

    pub fn from_settings(settings: &LayoutSettings) -> Self {
        Self::new(settings.hour_height, settings.snap_minutes)
    }

    pub fn begin_drag(&mut self, event: &Event) {
        self.begin(GestureContext::from_event(event, GestureKind::Drag));
    }

    pub fn begin_resize(&mut self, event: &Event, handle: ResizeHandle) {
        self.begin(GestureContext::from_event(event, GestureKind::Resize(handle)));
    }

    fn begin(&mut self, context: GestureContext) {
        if let Some(previous) = &self.active {
            log::debug!(
                "Gesture on {} replaced by gesture on {}",
                previous.event_id,
                context.event_id
            );
        }
        self.reset();
        self.active = Some(context);
    }

    fn reset(&mut self) {
        self.pending.cancel();
        self.preview = None;
        self.last_candidate = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&GestureContext> {
        self.active.as_ref()
    }

    /// Record a pointer sample `delta_px` pixels from where the gesture began.
    ///
    /// Returns true when the host should schedule a frame.
    pub fn pointer_moved(&mut self, delta_px: f64) -> bool {
        let Some(context) = &self.active else {
            return false;
        };
        let delta_minutes = px_to_minutes(delta_px, self.hour_height);
        let candidate = context.candidate(delta_minutes, self.snap_minutes);
        self.last_candidate = Some(candidate);
        self.pending.push(candidate)
    }

    /// Frame tick: apply the pending candidate. Returns true if the preview changed.
    pub fn on_frame(&mut self) -> bool {
        match self.pending.on_frame() {
            Some(candidate) => self.apply(candidate),
            None => false,
        }
    }

    fn apply(&mut self, candidate: CandidateMinutes) -> bool {
        let Some(context) = &self.active else {
            return false;
        };
        let Some(preview) = context.preview_at(candidate) else {
            log::debug!(
                "Skipping candidate {:?} for {}: no such local time",
                candidate,
                context.event_id
            );
            return false;
        };
        if self.preview.as_ref() == Some(&preview) {
            return false;
        }
        self.preview = Some(preview);
        true
    }

    /// Drop: apply anything pending, end the gesture, and return the new times.
    ///
    /// Returns `None` when no gesture was active or the event did not move.
    pub fn finish(&mut self) -> Option<CommittedMove> {
        if let Some(candidate) = self.pending.flush() {
            self.apply(candidate);
        }
        let context = self.active.take()?;
        let preview = self.preview.take();
        self.reset();

        let preview = preview?;
        if preview.temp_start == context.original_start && preview.temp_end == context.original_end
        {
            return None;
        }

        log::debug!(
            "Committing {} to {} - {}",
            context.event_id,
            preview.temp_start,
            preview.temp_end
        );
        Some(CommittedMove {
            event_id: context.event_id,
            start: preview.temp_start,
            end: preview.temp_end,
        })
    }

    /// Abort: discard pending samples and restore the pre-gesture layout.
    ///
    /// Returns the cancelled gesture so the host can restore its element.
    pub fn cancel(&mut self) -> Option<GestureContext> {
        self.reset();
        self.active.take()
    }

    pub fn preview(&self) -> PreviewReader<'_> {
        PreviewReader {
            preview: self.preview.as_ref(),
        }
    }

    /// Geometry for the dragged element from the newest sample, applied or not.
    pub fn feedback(&self) -> Option<FeedbackGeometry> {
        let context = self.active.as_ref()?;
        let candidate = self.last_candidate.unwrap_or(context.origin);
        Some(FeedbackGeometry {
            top: minutes_to_px(candidate.start as f64, self.hour_height),
            height: minutes_to_px((candidate.end - candidate.start) as f64, self.hour_height),
        })
    }
}
