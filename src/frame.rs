use image::{ImageBuffer, Rgb, RgbImage};
use rayon::prelude::*;

use crate::camera::{Ray, Resolution, ViewPlane};
use crate::renderer::Renderer;
use crate::scene::Scene;

/// A rendered image: `width * height` RGB triples, top row first, each row
/// left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl Frame {
    /// Renders on the current rayon pool. Pixel order does not depend on
    /// scheduling.
    pub fn render(scene: &Scene, resolution: Resolution) -> Frame {
        let renderer = Renderer::new(scene);
        let view_plane = ViewPlane::new(*scene.camera(), resolution);

        let pixels: Vec<[u8; 3]> = view_plane
            .ray_directions
            .par_iter()
            .map(|direction| renderer.per_pixel(&Ray::primary(*direction)))
            .collect();

        Frame::from_pixels(resolution, pixels)
    }

    pub fn render_in_pool(
        scene: &Scene,
        resolution: Resolution,
        thread_pool: &rayon::ThreadPool,
    ) -> Frame {
        thread_pool.install(|| Frame::render(scene, resolution))
    }

    // single threaded version of the rendering
    pub fn render_sequential(scene: &Scene, resolution: Resolution) -> Frame {
        let renderer = Renderer::new(scene);
        let view_plane = ViewPlane::new(*scene.camera(), resolution);

        let pixels: Vec<[u8; 3]> = view_plane
            .ray_directions
            .iter()
            .map(|direction| renderer.per_pixel(&Ray::primary(*direction)))
            .collect();

        Frame::from_pixels(resolution, pixels)
    }

    fn from_pixels(resolution: Resolution, pixels: Vec<[u8; 3]>) -> Frame {
        debug_assert_eq!(pixels.len(), resolution.pixel_count());
        Frame {
            width: resolution.width,
            height: resolution.height,
            pixels,
        }
    }

    /// Pixel at column `x`, row `row` counted from the top.
    pub fn pixel(&self, x: u32, row: u32) -> [u8; 3] {
        self.pixels[row as usize * self.width as usize + x as usize]
    }

    /// Flat RGB bytes in scan order.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| Rgb(self.pixel(x, y)))
    }
}
