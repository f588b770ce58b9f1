use std::path::PathBuf;

use clap::Parser;

use crate::camera::Resolution;
use crate::error::RenderError;
use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "raycaster")]
#[command(version)]
#[command(about = "Renders spheres and planes lit by point and spot lights")]
pub struct Args {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// JSON scene description
    pub scene: PathBuf,

    /// Output image; the format follows the extension unless --format is given
    pub output: PathBuf,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Worker threads for the render (defaults to one per core)
    #[arg(long, conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Render on the calling thread only
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Sequential,
    Parallel { threads: Option<usize> },
}

/// Validated settings for a single render.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub resolution: Resolution,
    pub scene_path: PathBuf,
    pub output_path: PathBuf,
    pub format: Option<OutputFormat>,
    pub schedule: Schedule,
}

impl TryFrom<Args> for RenderSettings {
    type Error = RenderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let schedule = if args.sequential {
            Schedule::Sequential
        } else {
            Schedule::Parallel {
                threads: args.threads,
            }
        };

        Ok(RenderSettings {
            resolution: Resolution::new(args.width, args.height)?,
            scene_path: args.scene,
            output_path: args.output,
            format: args.format,
            schedule,
        })
    }
}

impl Schedule {
    /// A dedicated pool when a thread count was requested, otherwise rayon's
    /// global pool is used.
    pub fn thread_pool(&self) -> Result<Option<rayon::ThreadPool>, RenderError> {
        match self {
            Schedule::Parallel {
                threads: Some(threads),
            } => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(*threads)
                    .thread_name(|index| format!("render-{index}"))
                    .build()?;
                Ok(Some(pool))
            }
            _ => Ok(None),
        }
    }
}
