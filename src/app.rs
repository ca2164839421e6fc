//! Browser app: draws the particle field behind the page content
//!
//! eframe owns the canvas and the display-refresh loop. Each `update` is
//! one tick; the next frame is requested only while the ticker runs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::core::{FieldConfig, FieldRenderer, FrameStats, TickOutcome, Ticker};
use crate::painter::EguiSurface;
use crate::theme::{background_visuals, colors};
use crate::time::{now_seconds, FpsCounter};

/// Seconds between stats log lines
const STATS_INTERVAL: f64 = 5.0;

pub struct FieldApp {
    renderer: FieldRenderer<StdRng>,
    ticker: Ticker,
    /// Last viewport size the field was built for
    size: Option<egui::Vec2>,
    fps_counter: FpsCounter,
    last_stats: FrameStats,
    last_stats_log: f64,
}

impl FieldApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: FieldConfig, ticker: Ticker) -> Self {
        cc.egui_ctx.set_visuals(background_visuals());

        Self {
            renderer: FieldRenderer::new(config, StdRng::from_entropy()),
            ticker,
            size: None,
            fps_counter: FpsCounter::new(),
            last_stats: FrameStats::default(),
            last_stats_log: now_seconds(),
        }
    }

    fn log_stats(&mut self, now: f64) {
        if now - self.last_stats_log < STATS_INTERVAL {
            return;
        }
        self.last_stats_log = now;
        debug!(
            frames = self.ticker.frames(),
            fps = format!("{:.1}", self.fps_counter.fps()),
            particles = self.last_stats.particles,
            lines = self.last_stats.lines,
            "stats"
        );
    }
}

impl eframe::App for FieldApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        colors::CLEAR
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let painter = ctx.layer_painter(egui::LayerId::background());
        let mut surface = EguiSurface::new(&painter);

        // Viewport changed (or first frame): rebuild the field
        let size = ctx.screen_rect().size();
        if self.size != Some(size) {
            info!(width = size.x, height = size.y, "Viewport resized");
            self.size = Some(size);
            self.renderer.resize(&mut surface, size.x, size.y);
        }

        match self.ticker.tick(&mut self.renderer, &mut surface) {
            TickOutcome::Continue(stats) => {
                let now = now_seconds();
                self.fps_counter.tick(now);
                self.last_stats = stats;
                self.log_stats(now);
                ctx.request_repaint();
            }
            TickOutcome::Stopped => {}
        }
    }
}
