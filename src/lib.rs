//! Ray casting renderer for spheres and planes with Phong shading and hard
//! shadows from point and spot lights.

pub mod camera;
pub mod config;
pub mod error;
pub mod frame;
pub mod intersection;
pub mod lighting;
pub mod loader;
pub mod math;
pub mod output;
pub mod renderer;
pub mod scene;

pub use camera::{Ray, Resolution};
pub use error::{ConfigurationError, DegenerateVectorError, LoadError, OutputError, RenderError};
pub use frame::Frame;
pub use loader::{load_scene, parse_scene};
pub use output::{save_frame, write_frame, OutputFormat};
pub use renderer::Renderer;
pub use scene::Scene;
