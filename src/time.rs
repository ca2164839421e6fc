//! Platform-agnostic frame timing
//!
//! `now_seconds` is elapsed time since start (page load in the browser,
//! first call natively). `FpsCounter` averages over the last 60 frames.

use std::collections::VecDeque;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
pub fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

const FPS_WINDOW: usize = 60;

/// Rolling frames-per-second estimate
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: VecDeque<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::with_capacity(FPS_WINDOW + 1),
        }
    }

    /// Record a frame at `now` (seconds)
    pub fn tick(&mut self, now: f64) {
        self.frames.push_back(now);
        if self.frames.len() > FPS_WINDOW {
            self.frames.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}
