//! Entry point for meshview.
//! Loads an OBJ model (and optionally a skybox panorama), prints its summary
//! and runs the scene animation for a number of frames.

use std::path::PathBuf;

use anyhow::{Context, Result};
use asset::LoadOptions;
use scene::{SceneConfig, SceneContext};

#[derive(Debug, Default, PartialEq)]
struct Args {
    model: Option<PathBuf>,
    skybox: Option<PathBuf>,
    options: LoadOptions,
    frames: u32,
    size: Option<(u32, u32)>,
}

fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args::default();
    for arg in args {
        if let Some(v) = arg.strip_prefix("--model=") {
            parsed.model = Some(PathBuf::from(v));
        } else if let Some(v) = arg.strip_prefix("--skybox=") {
            parsed.skybox = Some(PathBuf::from(v));
        } else if arg == "--no-normalize" {
            parsed.options = parsed.options.with_normalize(false);
        } else if arg == "--no-textures" {
            parsed.options = parsed.options.with_textures(false);
        } else if arg == "--strict-materials" {
            parsed.options = parsed.options.with_strict_materials(true);
        } else if let Some(v) = arg.strip_prefix("--frames=") {
            match v.parse::<u32>() {
                Ok(n) => parsed.frames = n,
                Err(_) => log::warn!("Ignoring invalid frame count '{}'", v),
            }
        } else if let Some(v) = arg.strip_prefix("--size=") {
            parsed.size = parse_size(v);
            if parsed.size.is_none() {
                log::warn!("Ignoring invalid window size '{}'", v);
            }
        } else if !arg.starts_with("--") && parsed.model.is_none() {
            // Bare path is the model.
            parsed.model = Some(PathBuf::from(arg));
        } else {
            log::warn!("Unknown argument '{}'", arg);
        }
    }
    parsed
}

fn parse_size(v: &str) -> Option<(u32, u32)> {
    let (sw, sh) = v.split_once('x').or_else(|| v.split_once('X'))?;
    let (w, h) = (sw.parse::<u32>().ok()?, sh.parse::<u32>().ok()?);
    Some((w.max(1), h.max(1)))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args);

    let mut config = SceneConfig::default();
    if let Some((w, h)) = args.size {
        config.width = w;
        config.height = h;
    }
    log::info!(
        "Starting meshview. window_size={}x{}, frames={}, {:?}",
        config.width,
        config.height,
        args.frames,
        args.options
    );

    let mut scene = SceneContext::new(config).context("Failed to set up scene")?;

    if let Some(path) = &args.model {
        let warnings = scene
            .load_model(path, &args.options)
            .with_context(|| format!("Failed to load model {}", path.display()))?;
        if let Some(object) = scene.object() {
            println!("{}", object.mesh.info());
        }
        for warning in &warnings {
            println!("warning: {warning}");
        }
    } else {
        log::info!("No model given; pass --model=PATH");
    }

    if let Some(path) = &args.skybox {
        scene
            .set_skybox(path)
            .with_context(|| format!("Failed to load skybox {}", path.display()))?;
    }

    let mut last = None;
    for _ in 0..args.frames {
        last = Some(scene.advance_frame());
    }
    if let Some(frame) = last {
        let draws = frame.object.as_ref().map_or(0, |o| o.draws.len());
        log::info!(
            "After {} frame(s): {} submesh draw(s), skybox rotation {:?}",
            args.frames,
            draws,
            frame.skybox.map(|s| s.rotation_deg)
        );
    }

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}
