//! Headless harness: drives the scheduler with a synthetic frame clock and
//! reports what it spawned, released and paused.

use aurora_core::{
    initialize, AuroraOptions, Coordinator, EntityKind, HostError, HostSignals,
};
use clap::{Parser, Subcommand};
use glam::Vec2;

mod surface;

use surface::RecordingSurface;

#[derive(Parser)]
#[command(name = "aurora-native")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
struct DeviceArgs {
    /// Viewport width in CSS pixels
    #[arg(long, default_value = "1280")]
    width: f64,

    /// Reported device memory in GB (omit to leave unreported)
    #[arg(long)]
    memory: Option<f64>,

    /// Reported logical core count (omit to leave unreported)
    #[arg(long)]
    cores: Option<u32>,

    /// Primary pointer is coarse (touch)
    #[arg(long)]
    coarse: bool,

    /// User prefers reduced motion
    #[arg(long)]
    reduced_motion: bool,
}

impl DeviceArgs {
    fn signals(&self) -> HostSignals {
        HostSignals {
            viewport_width: self.width,
            device_memory_gb: self.memory,
            logical_cores: self.cores,
            coarse_pointer: self.coarse,
            reduced_motion: self.reduced_motion,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the capability tier for a device description
    Caps {
        #[command(flatten)]
        device: DeviceArgs,
    },

    /// Run the scheduler against a synthetic clock
    Run {
        #[command(flatten)]
        device: DeviceArgs,

        /// Simulated seconds
        #[arg(short, long, default_value = "30")]
        seconds: f64,

        /// Host frame rate
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Host frame rate after `--slow-at`
        #[arg(long, default_value = "20")]
        slow_fps: f64,

        /// Second at which the host slows down
        #[arg(long)]
        slow_at: Option<f64>,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Second at which the page becomes hidden
        #[arg(long)]
        hide_at: Option<f64>,

        /// Second at which the page becomes visible again
        #[arg(long)]
        show_at: Option<f64>,

        /// Battery level reported at startup (0..1)
        #[arg(long)]
        battery: Option<f64>,

        /// Resize the viewport to this width at `--resize-at`
        #[arg(long)]
        resize_to: Option<f64>,

        #[arg(long)]
        resize_at: Option<f64>,

        /// Generator kinds whose mount is missing (star, streak, shooting-star, meteor, debris)
        #[arg(long, value_delimiter = ',')]
        missing: Vec<String>,

        /// Simulate a host with no frame clock
        #[arg(long)]
        no_clock: bool,
    },
}

fn parse_kind(name: &str) -> anyhow::Result<EntityKind> {
    EntityKind::ALL
        .into_iter()
        .find(|k| k.label() == name)
        .ok_or_else(|| anyhow::anyhow!("unknown generator kind `{}`", name))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder().filter_level(level).init();

    match cli.command {
        Commands::Caps { device } => {
            let options = AuroraOptions::default();
            let profile = aurora_core::profile(&device.signals(), options.mobile_breakpoint_px);
            println!("tier:           {}", profile.tier.label());
            println!("frame interval: {}ms", profile.tier.min_frame_interval_ms());
            println!("cursor:         {}", profile.cursor_enabled());
            for kind in EntityKind::ALL {
                match aurora_core::GeneratorConfig::for_tier(kind, profile.tier) {
                    Some(cfg) => println!("  {:<14} ceiling {:>4}", kind.label(), cfg.ceiling),
                    None => println!("  {:<14} disabled", kind.label()),
                }
            }
            Ok(())
        }
        Commands::Run {
            device,
            seconds,
            fps,
            slow_fps,
            slow_at,
            seed,
            hide_at,
            show_at,
            battery,
            resize_to,
            resize_at,
            missing,
            no_clock,
        } => {
            let missing = missing
                .iter()
                .map(|m| parse_kind(m.trim()))
                .collect::<anyhow::Result<Vec<_>>>()?;
            if fps <= 0.0 || slow_fps <= 0.0 {
                anyhow::bail!("frame rates must be positive");
            }
            let signals = if no_clock {
                Err(HostError::ClockUnavailable)
            } else {
                Ok(device.signals())
            };
            let options = AuroraOptions {
                seed,
                ..AuroraOptions::default()
            };
            let mut coordinator = initialize(signals, RecordingSurface::without(missing), options);
            if battery.is_some() {
                coordinator.on_battery(battery, 0.0);
            }

            let plan = Plan {
                end_ms: seconds * 1000.0,
                fps,
                slow_fps,
                slow_at_ms: slow_at.map(|s| s * 1000.0),
                hide_at_ms: hide_at.map(|s| s * 1000.0),
                show_at_ms: show_at.map(|s| s * 1000.0),
                resize: resize_to.zip(resize_at).map(|(w, at)| (w, at * 1000.0)),
            };
            simulate(&mut coordinator, &device, &plan);
            report(&coordinator);
            let released = coordinator.teardown();
            log::info!(
                "teardown released {}; live after teardown {}",
                released,
                coordinator.surface().live_total()
            );
            Ok(())
        }
    }
}

struct Plan {
    end_ms: f64,
    fps: f64,
    slow_fps: f64,
    slow_at_ms: Option<f64>,
    hide_at_ms: Option<f64>,
    show_at_ms: Option<f64>,
    resize: Option<(f64, f64)>,
}

fn simulate(c: &mut Coordinator<RecordingSurface>, device: &DeviceArgs, plan: &Plan) {
    let mut now = 0.0;
    let mut hidden = false;
    let mut shown = false;
    let mut resized = false;
    let mut executed = 0u64;
    while now <= plan.end_ms {
        if !hidden && plan.hide_at_ms.is_some_and(|t| now >= t) {
            hidden = true;
            c.on_visibility(false, now);
        }
        if hidden && !shown && plan.show_at_ms.is_some_and(|t| now >= t) {
            shown = true;
            c.on_visibility(true, now);
        }
        if let Some((width, at)) = plan.resize {
            if !resized && now >= at {
                resized = true;
                let signals = HostSignals {
                    viewport_width: width,
                    ..device.signals()
                };
                c.on_resize(&signals);
            }
        }

        // pointer circles the middle of the viewport
        let t = (now / 1000.0) as f32;
        c.on_pointer_move(Vec2::new(640.0 + 200.0 * t.cos(), 360.0 + 200.0 * t.sin()));

        if c.frame(now).executed {
            executed += 1;
        }
        let rate = match plan.slow_at_ms {
            Some(at) if now >= at => plan.slow_fps,
            _ => plan.fps,
        };
        now += 1000.0 / rate;
    }
    log::info!("simulated {:.1}s, {} executed frames", plan.end_ms / 1000.0, executed);
}

fn report(c: &Coordinator<RecordingSurface>) {
    let surface = c.surface();
    println!(
        "tier {} paused {} live {}",
        c.tier().label(),
        c.is_paused(),
        c.registry().len()
    );
    for kind in EntityKind::ALL {
        let s = surface.stats[kind.index()];
        println!(
            "  {:<14} created {:>6} removed {:>6} live {:>4} peak {:>4}",
            kind.label(),
            s.created,
            s.removed,
            s.live,
            s.peak
        );
    }
    println!(
        "  updates {} cursor frames {}",
        surface.updates, surface.cursor_frames
    );
}
