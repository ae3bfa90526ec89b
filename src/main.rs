// src/main.rs

use psplash::{
    backends::{drm::DrmSource, Backend, DrmBackend, FramebufferBackend, HeadlessBackend},
    canvas::Rotation,
    config::CONFIG,
    console::ConsoleGuard,
    fifo::{Fifo, FifoChannel},
    notify,
    protocol::CommandEngine,
    signals,
    splash::Splash,
};

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};

/// Device, backend or fifo creation failed.
const EXIT_SETUP_FAILURE: i32 = -1;
/// The fifo exists but could not be opened for reading.
const EXIT_FIFO_OPEN_FAILURE: i32 = -2;

#[derive(Parser, Debug)]
#[command(name = "psplash", version, about = "Boot splash screen for Linux displays")]
struct Cli {
    /// Draw on the current virtual terminal instead of switching to a free one.
    #[arg(short = 'n', long = "no-console-switch")]
    no_console_switch: bool,

    /// Screen rotation in degrees.
    #[arg(short = 'a', long = "angle", value_name = "0|90|180|270", default_value = "0", value_parser = parse_angle)]
    angle: Rotation,

    /// Framebuffer (or DRM card) index.
    #[arg(
        short = 'f',
        long = "fbdev",
        short_alias = 'd',
        alias = "dev",
        value_name = "0..9",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=9)
    )]
    device: u8,

    /// Use DRM/KMS dumb buffers instead of fbdev.
    #[arg(long)]
    drm: bool,

    /// Render on a DRM lease obtained from the lease manager.
    #[arg(long = "drm-lease", value_name = "NAME")]
    drm_lease: Option<String>,

    /// Render into memory only (for testing without a display).
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size, hide = true)]
    headless: Option<(u32, u32)>,
}

fn parse_angle(text: &str) -> Result<Rotation, String> {
    let degrees: u32 = text
        .parse()
        .map_err(|_| format!("'{}' is not an angle", text))?;
    Rotation::try_from(degrees)
}

fn parse_size(text: &str) -> Result<(u32, u32), String> {
    let (w, h) = text
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", text))?;
    let parse = |v: &str| v.parse::<u32>().ok().filter(|&v| v > 0);
    match (parse(w), parse(h)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(format!("invalid size '{}'", text)),
    }
}

fn open_backend(cli: &Cli) -> Result<Box<dyn Backend>> {
    if let Some((width, height)) = cli.headless {
        return Ok(Box::new(HeadlessBackend::new(width, height, cli.angle, true)));
    }
    if let Some(name) = &cli.drm_lease {
        let source = DrmSource::Lease(name.clone());
        return Ok(Box::new(DrmBackend::open(&source, cli.angle)?));
    }
    if cli.drm {
        let source = DrmSource::Card(cli.device);
        return Ok(Box::new(DrmBackend::open(&source, cli.angle)?));
    }
    Ok(Box::new(FramebufferBackend::open(cli.device, cli.angle)?))
}

/// Runs the splash and returns the process exit status. Every guard is
/// dropped before this returns, restoring the console and removing the fifo.
fn run(cli: &Cli) -> i32 {
    let config = &*CONFIG;

    if let Err(e) = signals::install_shutdown_handlers() {
        warn!("Main: {:#}", e);
    }

    let fifo_path = config.channel.fifo_path();
    let _fifo = match Fifo::create(&fifo_path) {
        Ok(fifo) => fifo,
        Err(e) => {
            error!("Main: {:#}", e);
            return EXIT_SETUP_FAILURE;
        }
    };
    let mut channel = match FifoChannel::open(&fifo_path) {
        Ok(channel) => channel,
        Err(e) => {
            error!("Main: {:#}", e);
            return EXIT_FIFO_OPEN_FAILURE;
        }
    };

    let _console = if cli.no_console_switch {
        None
    } else {
        ConsoleGuard::acquire()
    };

    let mut backend = match open_backend(cli) {
        Ok(backend) => backend,
        Err(e) => {
            error!("Main: display setup failed: {:#}", e);
            return EXIT_SETUP_FAILURE;
        }
    };
    let info = backend.info();
    info!(
        "Main: {}x{} canvas, {} bpp, rotation {}",
        info.width, info.height, info.bpp, info.rotation
    );

    notify::notify_ready();

    let splash = Splash::new(config.colors, &config.layout);
    splash.draw_initial_scene(&mut backend.canvas());
    if let Err(e) = backend.flip(true) {
        warn!("Main: initial flip failed: {:#}", e);
    }

    info!("Main: waiting for commands on {}", fifo_path.display());
    let mut engine = CommandEngine::new(&splash, config.channel.timeout());
    match engine.run(&mut channel, backend.as_mut()) {
        Ok(exit) => {
            info!("Main: shutting down ({:?})", exit);
            0
        }
        Err(e) => {
            error!("Main: command loop failed: {:#}", e);
            EXIT_SETUP_FAILURE
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    let status = run(&cli);
    std::process::exit(status);
}
