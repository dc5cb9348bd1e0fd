// wave2png - Run the water scene headless and write PNG frames
//
// Pipeline:
//   1. Load config (JSON file or screen defaults), apply flag overrides
//   2. Drop the scripted rocks and floats
//   3. Tick N frames, rasterizing every K-th and the last one
//
// Usage: cargo run --bin wave2png -- --rock 600 --float 300 --frames 240 --every 30

mod error;
mod raster;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info};
use water_engine::{Scene, WaterConfig};

use error::OutputError;
use raster::Raster;

#[derive(Parser, Debug)]
#[command(name = "wave2png", about = "Simulate the spring-mesh water surface and save PNG frames")]
struct Args {
    /// JSON water config; unspecified fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Screen width override
    #[arg(long)]
    width: Option<f32>,

    /// Screen height override
    #[arg(long)]
    height: Option<f32>,

    /// Frames to simulate
    #[arg(long, default_value_t = 240)]
    frames: u64,

    /// Write every K-th frame (0 = only the last)
    #[arg(long, default_value_t = 0)]
    every: u64,

    /// Drop a rock at this x (repeatable)
    #[arg(long = "rock")]
    rocks: Vec<f32>,

    /// Drop a float at this x (repeatable)
    #[arg(long = "float")]
    floats: Vec<f32>,

    /// Height the scripted bodies start from
    #[arg(long, default_value_t = 0.0)]
    drop_y: f32,

    /// Texture for rocks instead of flat brown
    #[arg(long)]
    rock_texture: Option<PathBuf>,

    #[arg(long)]
    no_smooth: bool,

    #[arg(long)]
    no_volume_rise: bool,

    #[arg(long)]
    no_physics: bool,

    /// Output directory
    #[arg(long, default_value = "frames")]
    out: PathBuf,
}

fn load_config(args: &Args) -> Result<WaterConfig, OutputError> {
    let mut config = match &args.config {
        Some(path) => WaterConfig::from_json(&fs::read_to_string(path)?)?,
        None => WaterConfig::for_screen(args.width.unwrap_or(1200.0), args.height.unwrap_or(720.0)),
    };

    if args.config.is_some() {
        if let Some(w) = args.width { config.screen_width = w; }
        if let Some(h) = args.height { config.screen_height = h; }
    }
    if args.no_smooth { config.set_smooth(false); }
    if args.no_volume_rise { config.set_volume_rise(false); }
    if args.no_physics { config.set_physics(false); }

    config.validate()?;
    Ok(config)
}

fn frame_path(dir: &Path, frame: u64) -> PathBuf {
    dir.join(format!("frame_{:05}.png", frame))
}

fn run(args: Args) -> Result<(), OutputError> {
    let config = load_config(&args)?;
    let (w, h) = (config.screen_width, config.screen_height);

    let mut raster = Raster::new(w.ceil() as u32, h.ceil() as u32);
    if let Some(path) = &args.rock_texture {
        raster.load_rock_texture(path)?;
        info!("rock texture {}", path.display());
    }

    let mut scene = Scene::new(config);
    for &x in &args.rocks {
        scene.drop_rock(x, args.drop_y);
    }
    for &x in &args.floats {
        scene.drop_float(x, args.drop_y);
    }

    fs::create_dir_all(&args.out)?;

    let mut written = 0;
    for frame in 1..=args.frames {
        scene.tick();

        let wanted = (args.every > 0 && frame % args.every == 0) || frame == args.frames;
        if !wanted { continue; }

        raster.clear();
        scene.draw(&mut raster);
        let path = frame_path(&args.out, frame);
        raster.save(&path)?;
        written += 1;
        info!(
            "frame {} rest level {:.2} -> {}",
            frame,
            scene.wave().rest_level(),
            path.display()
        );
    }

    info!("wrote {} frames to {}", written, args.out.display());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        eprintln!("wave2png: {}", e);
        std::process::exit(1);
    }
}
