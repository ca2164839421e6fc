//! Frame loop driver with an explicit stop handle
//!
//! Hosts own the scheduling (egui repaint requests in the browser, a tokio
//! interval in the CLI). They call [`Ticker::tick`] once per frame and only
//! schedule the next frame while it returns [`TickOutcome::Continue`].

use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

use super::renderer::{FieldRenderer, FrameStats};
use super::surface::Surface;

/// Cloneable flag that ends a frame loop
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            debug!("Frame loop stop requested");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Result of one ticker step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame drawn; schedule another
    Continue(FrameStats),
    /// Stop requested; nothing was drawn
    Stopped,
}

/// Runs renderer ticks until stopped, counting frames
#[derive(Debug, Default)]
pub struct Ticker {
    stop: StopHandle,
    frames: u64,
    frame_limit: Option<u64>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticker that stops on its own once `limit` frames are drawn.
    /// A limit of 0 draws nothing.
    pub fn with_frame_limit(limit: Option<u64>) -> Self {
        Self {
            frame_limit: limit,
            ..Self::default()
        }
    }

    /// Handle that stops this ticker (and every clone of it)
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick<R: Rng, S: Surface + ?Sized>(
        &mut self,
        renderer: &mut FieldRenderer<R>,
        surface: &mut S,
    ) -> TickOutcome {
        if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
            debug!(frames = self.frames, "Frame limit reached");
            self.stop.stop();
        }
        if self.stop.is_stopped() {
            return TickOutcome::Stopped;
        }
        let stats = renderer.tick(surface);
        self.frames += 1;
        TickOutcome::Continue(stats)
    }
}
