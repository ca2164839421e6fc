//! Headless runner for the particle field
//!
//! Drives the renderer against a recording surface at a fixed frame rate
//! and logs frame statistics. Useful for profiling the proximity pass.
//!
//! Run with: cargo run --features cli --bin field-cli
//!
//! Environment:
//! - FIELD_CONFIG: path to a JSON FieldConfig
//! - FIELD_WIDTH / FIELD_HEIGHT: surface size (default 1280x720)
//! - FIELD_SEED: fixed RNG seed for reproducible runs
//! - FIELD_FPS: target frame rate (default 60)
//! - FIELD_FRAMES: stop after this many frames

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use particle_field::core::{
        FieldConfig, FieldRenderer, FrameStats, RecordingSurface, TickOutcome, Ticker,
    };
    use particle_field::settings::RunSettings;
    use particle_field::time::{now_seconds, FpsCounter};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,particle_field=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let settings = RunSettings::from_env()?;
    let config = match &settings.config_path {
        Some(path) => {
            info!(path = %path, "Loading field config");
            FieldConfig::from_path(path)?
        }
        None => FieldConfig::default(),
    };
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (width, height) = (settings.width, settings.height);

    let mut renderer = FieldRenderer::new(config, rng);
    let mut surface = RecordingSurface::new();
    renderer.resize(&mut surface, width, height);

    let mut ticker = Ticker::with_frame_limit(settings.max_frames);
    let stop = ticker.stop_handle();
    let mut fps_counter = FpsCounter::new();
    let mut last_stats = FrameStats::default();
    let mut lines_total = 0u64;

    let mut frame_interval = tokio::time::interval(settings.frame_period);
    let mut stats_interval = tokio::time::interval(Duration::from_secs(5));

    info!(
        width,
        height,
        particles = renderer.field().len(),
        fps = settings.target_fps,
        frames = ?settings.max_frames,
        "Running particle field"
    );

    loop {
        tokio::select! {
            _ = frame_interval.tick() => {
                match ticker.tick(&mut renderer, &mut surface) {
                    TickOutcome::Continue(stats) => {
                        fps_counter.tick(now_seconds());
                        last_stats = stats;
                        lines_total += stats.lines as u64;
                    }
                    TickOutcome::Stopped => break,
                }
            }
            _ = stats_interval.tick() => {
                info!(
                    frames = ticker.frames(),
                    fps = format!("{:.1}", fps_counter.fps()),
                    particles = last_stats.particles,
                    lines = last_stats.lines,
                    "stats"
                );
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted");
                stop.stop();
            }
        }
    }

    let frames = ticker.frames();
    let avg_lines = if frames > 0 { lines_total as f64 / frames as f64 } else { 0.0 };
    info!(frames, avg_lines = format!("{:.1}", avg_lines), "Done");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
