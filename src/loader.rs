//! JSON scene descriptions.
//!
//! A scene file is an array of objects, each tagged with a `"type"` of
//! `camera`, `sphere`, `plane` or `light`:
//!
//! ```json
//! [
//!   { "type": "camera", "width": 2.0, "height": 2.0 },
//!   { "type": "sphere", "position": [0, 0, 5], "radius": 1,
//!     "diffuse_color": [1, 0, 0], "specular_color": [1, 1, 1] },
//!   { "type": "light", "position": [0, 3, 0], "color": [1, 1, 1],
//!     "radial-a2": 0.05, "theta": 40, "direction": [0, -1, 1], "angular-a0": 2 }
//! ]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use glam::DVec3;
use serde::Deserialize;

use crate::error::LoadError;
use crate::scene::{Camera, Material, Plane, PointLight, RadialAttenuation, Scene, SceneObject, Sphere};

type UnknownKeys = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ObjectDescription {
    Camera(CameraDescription),
    Sphere(SphereDescription),
    Plane(PlaneDescription),
    Light(LightDescription),
}

#[derive(Debug, Deserialize)]
struct CameraDescription {
    width: f64,
    height: f64,
    #[serde(flatten)]
    unknown: UnknownKeys,
}

#[derive(Debug, Deserialize)]
struct SphereDescription {
    position: DVec3,
    radius: f64,
    #[serde(default)]
    diffuse_color: DVec3,
    #[serde(default)]
    specular_color: DVec3,
    #[serde(flatten)]
    unknown: UnknownKeys,
}

#[derive(Debug, Deserialize)]
struct PlaneDescription {
    position: DVec3,
    normal: DVec3,
    #[serde(default)]
    diffuse_color: DVec3,
    #[serde(default)]
    specular_color: DVec3,
    #[serde(flatten)]
    unknown: UnknownKeys,
}

#[derive(Debug, Deserialize)]
struct LightDescription {
    position: DVec3,
    color: DVec3,
    #[serde(rename = "radial-a0")]
    radial_a0: Option<f64>,
    #[serde(rename = "radial-a1")]
    radial_a1: Option<f64>,
    #[serde(rename = "radial-a2")]
    radial_a2: Option<f64>,
    /// Cone angle in degrees.
    #[serde(default)]
    theta: f64,
    direction: Option<DVec3>,
    #[serde(rename = "angular-a0", default)]
    angular_a0: f64,
    #[serde(flatten)]
    unknown: UnknownKeys,
}

impl LightDescription {
    fn radial(&self) -> Option<RadialAttenuation> {
        if self.radial_a0.is_none() && self.radial_a1.is_none() && self.radial_a2.is_none() {
            return None;
        }

        let defaults = RadialAttenuation::default();
        Some(RadialAttenuation {
            a0: self.radial_a0.unwrap_or(defaults.a0),
            a1: self.radial_a1.unwrap_or(defaults.a1),
            a2: self.radial_a2.unwrap_or(defaults.a2),
        })
    }
}

impl ObjectDescription {
    fn unknown_keys(&self) -> &UnknownKeys {
        match self {
            ObjectDescription::Camera(camera) => &camera.unknown,
            ObjectDescription::Sphere(sphere) => &sphere.unknown,
            ObjectDescription::Plane(plane) => &plane.unknown,
            ObjectDescription::Light(light) => &light.unknown,
        }
    }

    fn into_object(self) -> SceneObject {
        match self {
            ObjectDescription::Camera(camera) => SceneObject::Camera(Camera {
                width: camera.width,
                height: camera.height,
            }),
            ObjectDescription::Sphere(sphere) => SceneObject::Sphere(Sphere {
                center: sphere.position,
                radius: sphere.radius,
                material: Material {
                    diffuse_color: sphere.diffuse_color,
                    specular_color: sphere.specular_color,
                },
            }),
            ObjectDescription::Plane(plane) => SceneObject::Plane(Plane {
                point: plane.position,
                normal: plane.normal,
                material: Material {
                    diffuse_color: plane.diffuse_color,
                    specular_color: plane.specular_color,
                },
            }),
            ObjectDescription::Light(light) => {
                let source = PointLight {
                    position: light.position,
                    color: light.color,
                    radial: light.radial(),
                };
                SceneObject::light(source, light.direction, light.theta, light.angular_a0)
            }
        }
    }
}

pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("loading scene from {path:?}");
    parse_scene(&source)
}

pub fn parse_scene(source: &str) -> Result<Scene, LoadError> {
    let descriptions: Vec<ObjectDescription> = serde_json::from_str(source)?;

    let objects: Vec<SceneObject> = descriptions
        .into_iter()
        .enumerate()
        .map(|(index, description)| {
            for key in description.unknown_keys().keys() {
                log::warn!("ignoring unknown property {key:?} on scene object {index}");
            }
            description.into_object()
        })
        .collect();

    log::debug!("parsed {} scene objects", objects.len());
    Ok(Scene::new(objects)?)
}
