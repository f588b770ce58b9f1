use glam::DVec3;

use crate::camera::Ray;
use crate::error::DegenerateVectorError;
use crate::math::normalize;
use crate::scene::{Plane, SceneObject, Sphere};

/// `N . Rd` below this is treated as a ray running parallel to a plane.
const PARALLEL_EPSILON: f64 = 1e-12;

pub trait Intersect {
    /// Smallest strictly positive distance along `ray` to the surface.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    fn normal_at(&self, point: DVec3) -> Result<DVec3, DegenerateVectorError>;
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        sphere_intersection(ray.origin, ray.direction, self.center, self.radius)
    }

    fn normal_at(&self, point: DVec3) -> Result<DVec3, DegenerateVectorError> {
        normalize(point - self.center)
    }
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        plane_intersection(ray.origin, ray.direction, self.point, self.normal)
    }

    fn normal_at(&self, _point: DVec3) -> Result<DVec3, DegenerateVectorError> {
        normalize(self.normal)
    }
}

impl SceneObject {
    /// Cameras and lights have no surface and are never hit.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray),
            SceneObject::Plane(plane) => plane.intersect(ray),
            _ => None,
        }
    }

    pub fn normal_at(&self, point: DVec3) -> Result<DVec3, DegenerateVectorError> {
        match self {
            SceneObject::Sphere(sphere) => sphere.normal_at(point),
            SceneObject::Plane(plane) => plane.normal_at(point),
            _ => Err(DegenerateVectorError),
        }
    }
}

pub fn sphere_intersection(
    origin: DVec3,
    direction: DVec3,
    center: DVec3,
    radius: f64,
) -> Option<f64> {
    // a t^2 + b t + c = 0
    // a = |Rd|^2
    // b = 2 Rd . (Ro - C)
    // c = |Ro - C|^2 - r^2
    let offset = origin - center;

    let a = direction.length_squared();
    let b = 2.0 * direction.dot(offset);
    let c = offset.length_squared() - radius * radius;

    if a == 0.0 {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        // we missed the sphere
        return None;
    }

    let root = discriminant.sqrt();
    let t0 = (-b - root) / (2.0 * a);
    let t1 = (-b + root) / (2.0 * a);

    [t0, t1].into_iter().find(|t| is_hit(*t))
}

pub fn plane_intersection(
    origin: DVec3,
    direction: DVec3,
    point: DVec3,
    normal: DVec3,
) -> Option<f64> {
    let denominator = normal.dot(direction);
    if denominator.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = normal.dot(point - origin) / denominator;
    is_hit(t).then_some(t)
}

fn is_hit(t: f64) -> bool {
    t > 0.0 && t.is_finite()
}
