use glam::{dvec3, DVec3};

use crate::error::RenderError;
use crate::scene::Camera;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    pub fn new(origin: DVec3, direction: DVec3) -> Ray {
        Ray { origin, direction }
    }

    /// Primary rays all start at the eye.
    pub fn primary(direction: DVec3) -> Ray {
        Ray::new(DVec3::ZERO, direction)
    }

    pub fn at(&self, distance: f64) -> DVec3 {
        self.origin + self.direction * distance
    }
}

/// Output size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Resolution, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidResolution { width, height });
        }
        Ok(Resolution { width, height })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Maps the camera's view plane onto a pixel grid.
#[derive(Debug, Clone)]
pub struct ViewPlane {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub ray_directions: Vec<DVec3>,
    pixel_width: f64,
    pixel_height: f64,
    camera: Camera,
}

impl ViewPlane {
    pub fn new(camera: Camera, resolution: Resolution) -> ViewPlane {
        let mut view_plane = ViewPlane {
            viewport_width: resolution.width,
            viewport_height: resolution.height,
            ray_directions: vec![],
            pixel_width: camera.width / resolution.width as f64,
            pixel_height: camera.height / resolution.height as f64,
            camera,
        };

        view_plane.recalculate_ray_directions();
        view_plane
    }

    /// Direction through the center of pixel `(x, y)`, where `y` counts rows
    /// from the bottom (`1..=height`) and `x` columns from the left. Row `y`
    /// is sampled at its center, `y - 0.5` pixel heights up the view plane, so
    /// the rows span exactly `[-height / 2, height / 2]`.
    pub fn ray_direction(&self, x: u32, y: u32) -> DVec3 {
        // view plane centered on the z axis
        let (cx, cy) = (0.0, 0.0);

        let target = dvec3(
            cx - self.camera.width / 2.0 + self.pixel_width * (x as f64 + 0.5),
            cy - self.camera.height / 2.0 + self.pixel_height * (y as f64 - 0.5),
            1.0,
        );

        // z is always 1, so the length is never zero
        target.normalize()
    }

    fn recalculate_ray_directions(&mut self) {
        let pixel_count = self.viewport_width as usize * self.viewport_height as usize;
        self.ray_directions = Vec::with_capacity(pixel_count);

        // top row first, left to right
        for y in (1..=self.viewport_height).rev() {
            for x in 0..self.viewport_width {
                let direction = self.ray_direction(x, y);
                self.ray_directions.push(direction);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_camera() -> Camera {
        Camera {
            width: 2.0,
            height: 2.0,
        }
    }

    #[test]
    fn test_zero_resolution_rejected() {
        assert!(Resolution::new(0, 4).is_err());
        assert!(Resolution::new(4, 0).is_err());
        assert_eq!(Resolution::new(4, 3).unwrap().pixel_count(), 12);
    }

    #[test]
    fn test_ray_directions_in_scan_order() {
        let view_plane = ViewPlane::new(square_camera(), Resolution::new(3, 3).unwrap());
        assert_eq!(view_plane.ray_directions.len(), 9);

        // middle pixel looks straight down the z axis
        let center = view_plane.ray_directions[4];
        assert!((center - DVec3::Z).length() < 1e-12);

        // first pixel is the top-left one
        let top_left = view_plane.ray_directions[0];
        assert!(top_left.x < 0.0 && top_left.y > 0.0);

        let bottom_right = view_plane.ray_directions[8];
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
    }

    #[test]
    fn test_ray_directions_are_unit_length() {
        let view_plane = ViewPlane::new(
            Camera {
                width: 1.5,
                height: 0.5,
            },
            Resolution::new(7, 5).unwrap(),
        );
        for direction in &view_plane.ray_directions {
            assert!((direction.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pixel_centers_span_the_view_plane() {
        let view_plane = ViewPlane::new(square_camera(), Resolution::new(2, 2).unwrap());
        let top_left = view_plane.ray_direction(0, 2);
        // unnormalized target is (-0.5, 0.5, 1)
        assert!((top_left.x / top_left.z + 0.5).abs() < 1e-12);
        assert!((top_left.y / top_left.z - 0.5).abs() < 1e-12);
    }
}
