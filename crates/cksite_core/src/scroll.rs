//! Scroll-driven visibility state machines for the floating controls.
//!
//! Each gate owns one widget's visibility and recomputes it from the
//! scroll offset of its container. Recomputation is frame-batched: the
//! host reports raw scroll events into a [`FrameCoalescer`] and drives the
//! gates once per animation frame, so a burst of scroll events costs a
//! single recompute.

/// Default reveal threshold for the scroll-to-top control, in pixels.
pub const DEFAULT_TOP_THRESHOLD: f64 = 40.0;

/// Frames an unmounting control stays in the layout after it hides, long
/// enough for a ~300ms exit transition at 60fps.
pub const UNMOUNT_DELAY_FRAMES: u8 = 18;

/// Non-unmounting visibility gate: the control always exists in the
/// layout and only its presentation (opacity, transform, pointer
/// interactivity) toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    always_visible: bool,
    visible: bool,
}

impl VisibilityGate {
    /// Build a gate and compute its rest state from the mount-time offset.
    /// A threshold of exactly zero is visible at rest, before any scroll
    /// event arrives.
    pub fn new(threshold: f64, offset_at_mount: f64) -> Self {
        let mut gate = Self {
            threshold,
            always_visible: false,
            visible: false,
        };
        gate.observe(offset_at_mount);
        gate
    }

    /// Gate that ignores scrolling entirely.
    pub fn pinned_visible() -> Self {
        Self {
            threshold: 0.0,
            always_visible: true,
            visible: true,
        }
    }

    /// Recompute from a new offset; returns true when visibility flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let next = self.always_visible || self.threshold == 0.0 || offset > self.threshold;
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Unmounting visibility gate: the control leaves the layout when hidden,
/// a few frames after the hide transition starts so the exit animation
/// can play.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedGate {
    inner: VisibilityGate,
    mounted: bool,
    unmount_in: Option<u8>,
}

impl MountedGate {
    pub fn new(threshold: f64, offset_at_mount: f64) -> Self {
        let inner = VisibilityGate::new(threshold, offset_at_mount);
        let mounted = inner.visible();
        Self {
            inner,
            mounted,
            unmount_in: None,
        }
    }

    /// Recompute from a new offset; returns true when the widget state
    /// moved. Reappearing cancels a pending unmount.
    pub fn observe(&mut self, offset: f64) -> bool {
        if !self.inner.observe(offset) {
            return false;
        }
        if self.inner.visible() {
            self.mounted = true;
            self.unmount_in = None;
        } else {
            self.unmount_in = Some(UNMOUNT_DELAY_FRAMES);
        }
        true
    }

    /// Advance the deferred-unmount countdown by one frame; returns true
    /// when the control actually left the layout.
    pub fn tick(&mut self) -> bool {
        let Some(remaining) = self.unmount_in else {
            return false;
        };
        if remaining > 1 {
            self.unmount_in = Some(remaining - 1);
            false
        } else {
            self.unmount_in = None;
            self.mounted = false;
            true
        }
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn visible(&self) -> bool {
        self.inner.visible()
    }
}

/// Latches the newest scroll offset between animation frames.
///
/// `record` may run on every scroll event; `take` yields the latest value
/// at most once per frame, so gate recomputation cannot outpace paint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameCoalescer {
    pending: Option<f64>,
}

impl FrameCoalescer {
    pub fn record(&mut self, offset: f64) {
        self.pending = Some(offset);
    }

    pub fn take(&mut self) -> Option<f64> {
        self.pending.take()
    }
}

/// Where the back affordance goes when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackNav {
    /// Pop one browser history entry.
    HistoryBack,
    /// Entered from outside: no in-app history to pop, go to the root.
    GoHome,
}

impl BackNav {
    pub fn for_history_len(history_len: u32) -> BackNav {
        if history_len > 1 {
            BackNav::HistoryBack
        } else {
            BackNav::GoHome
        }
    }
}
