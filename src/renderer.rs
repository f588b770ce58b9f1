use glam::DVec3;

use crate::camera::Ray;
use crate::lighting;
use crate::math::{normalize, reflect, to_rgb};
use crate::scene::{Light, Material, Scene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPayload {
    pub hit_distance: f64,
    pub world_position: DVec3,
    pub world_normal: DVec3,
    pub material: Material,

    pub object_index: usize,
}

/// Shades single rays against a borrowed scene. Holds no mutable state, so
/// one renderer can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    scene: &'a Scene,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene) -> Renderer<'a> {
        Renderer { scene }
    }

    /// Final byte colour for one primary ray. Misses are black.
    pub fn per_pixel(&self, ray: &Ray) -> [u8; 3] {
        match self.trace_ray(ray) {
            Some(hit_payload) => to_rgb(self.shade(ray, &hit_payload)),
            None => [0, 0, 0],
        }
    }

    /// Closest surface along `ray`. On equal distances the object that comes
    /// first in the scene wins.
    pub fn trace_ray(&self, ray: &Ray) -> Option<HitPayload> {
        let mut hit_distance = f64::INFINITY;
        let mut closest_object_index: Option<usize> = None;

        for (object_index, object) in self.scene.objects().iter().enumerate() {
            if let Some(current_t) = object.intersect(ray) {
                if current_t < hit_distance {
                    hit_distance = current_t;
                    closest_object_index = Some(object_index);
                }
            }
        }

        closest_object_index.and_then(|object_index| self.closest_hit(ray, hit_distance, object_index))
    }

    fn closest_hit(&self, ray: &Ray, hit_distance: f64, object_index: usize) -> Option<HitPayload> {
        let object = &self.scene.objects()[object_index];

        let hit_point = ray.at(hit_distance);
        let world_normal = match object.normal_at(hit_point) {
            Ok(normal) => normal,
            Err(err) => {
                log::trace!("object {object_index} has no normal at {hit_point}: {err}");
                return None;
            }
        };

        Some(HitPayload {
            hit_distance,
            world_position: hit_point,
            world_normal,
            material: *object.material()?,
            object_index,
        })
    }

    /// Sum of every unoccluded light's contribution, unclamped.
    pub fn shade(&self, ray: &Ray, hit_payload: &HitPayload) -> DVec3 {
        self.scene
            .lights()
            .iter()
            .filter_map(|light| self.light_contribution(ray, hit_payload, light))
            .sum()
    }

    fn light_contribution(&self, ray: &Ray, hit_payload: &HitPayload, light: &Light) -> Option<DVec3> {
        let offset = light.position() - hit_payload.world_position;
        let distance = offset.length();

        let to_light = match normalize(offset) {
            Ok(direction) => direction,
            Err(err) => {
                log::trace!("light at {} sits on the hit point: {err}", light.position());
                return None;
            }
        };

        let shadow_ray = Ray::new(hit_payload.world_position, to_light);
        if self.is_occluded(&shadow_ray, distance, hit_payload.object_index) {
            return None;
        }

        let normal = hit_payload.world_normal;
        let view = ray.direction;
        let reflection = reflect(to_light, normal);
        let material = &hit_payload.material;

        let diffuse = lighting::diffuse(material.diffuse_color, light.color(), normal, to_light);
        let specular = lighting::specular(
            material.specular_color,
            light.color(),
            view,
            reflection,
            normal,
            to_light,
        );

        let attenuation = lighting::attenuation(light, to_light, distance);

        Some(attenuation * (diffuse + specular))
    }

    /// Whether anything other than the surface the shadow ray leaves from lies
    /// strictly between it and the light.
    pub fn is_occluded(&self, shadow_ray: &Ray, light_distance: f64, hit_object_index: usize) -> bool {
        self.scene
            .objects()
            .iter()
            .enumerate()
            .filter(|(object_index, _)| *object_index != hit_object_index)
            .filter_map(|(_, object)| object.intersect(shadow_ray))
            .any(|t| t < light_distance)
    }
}
