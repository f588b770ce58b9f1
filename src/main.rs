use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use raycaster::config::{Args, RenderSettings, Schedule};
use raycaster::{load_scene, save_frame, Frame};

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = RenderSettings::try_from(Args::parse())?;

    let scene = load_scene(&settings.scene_path)
        .with_context(|| format!("failed to load scene {:?}", settings.scene_path))?;

    log::info!(
        "rendering {}x{} frame: {} objects, {} lights",
        settings.resolution.width,
        settings.resolution.height,
        scene.objects().len(),
        scene.lights().len(),
    );

    let thread_pool = settings.schedule.thread_pool()?;
    let start = Instant::now();

    let frame = match (&settings.schedule, &thread_pool) {
        (Schedule::Sequential, _) => Frame::render_sequential(&scene, settings.resolution),
        (_, Some(thread_pool)) => Frame::render_in_pool(&scene, settings.resolution, thread_pool),
        (_, None) => Frame::render(&scene, settings.resolution),
    };

    log::info!("rendered in {:.2?}", start.elapsed());

    save_frame(&frame, &settings.output_path, settings.format)
        .with_context(|| format!("failed to write {:?}", settings.output_path))?;

    log::info!("saved {:?}", settings.output_path);
    Ok(())
}
