use glam::DVec3;

use crate::error::ConfigurationError;

/// View plane one unit in front of the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse_color: DVec3,
    pub specular_color: DVec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
    pub material: Material,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: DVec3,
    /// Not required to be unit length.
    pub normal: DVec3,
    pub material: Material,
}

/// Quadratic distance falloff `1 / (a2 d^2 + a1 d + a0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialAttenuation {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl Default for RadialAttenuation {
    fn default() -> Self {
        RadialAttenuation {
            a0: 1.0,
            a1: 0.0,
            a2: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
    pub color: DVec3,
    /// `None` means infinite range: no distance falloff at all.
    pub radial: Option<RadialAttenuation>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub light: PointLight,
    pub direction: DVec3,
    pub cone_angle_degrees: f64,
    pub angular_exponent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneObject {
    Camera(Camera),
    Sphere(Sphere),
    Plane(Plane),
    PointLight(PointLight),
    SpotLight(SpotLight),
}

impl SceneObject {
    /// Builds a light the way scene files describe one: a zero cone angle or a
    /// missing direction gives a point light.
    pub fn light(
        light: PointLight,
        direction: Option<DVec3>,
        cone_angle_degrees: f64,
        angular_exponent: f64,
    ) -> SceneObject {
        match direction {
            Some(direction) if cone_angle_degrees != 0.0 => SceneObject::SpotLight(SpotLight {
                light,
                direction,
                cone_angle_degrees,
                angular_exponent,
            }),
            _ => SceneObject::PointLight(light),
        }
    }

    pub fn material(&self) -> Option<&Material> {
        match self {
            SceneObject::Sphere(sphere) => Some(&sphere.material),
            SceneObject::Plane(plane) => Some(&plane.material),
            _ => None,
        }
    }
}

/// Cached, render-ready view of a light. Spot directions are unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point(PointLight),
    Spot(SpotLight),
}

impl Light {
    pub fn position(&self) -> DVec3 {
        self.source().position
    }

    pub fn color(&self) -> DVec3 {
        self.source().color
    }

    pub fn radial(&self) -> Option<RadialAttenuation> {
        self.source().radial
    }

    fn source(&self) -> &PointLight {
        match self {
            Light::Point(light) => light,
            Light::Spot(spot) => &spot.light,
        }
    }
}

/// An immutable, validated scene. Objects keep the order they were read in.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    objects: Vec<SceneObject>,
    camera: Camera,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(objects: Vec<SceneObject>) -> Result<Scene, ConfigurationError> {
        for (index, object) in objects.iter().enumerate() {
            validate_object(index, object)?;
        }

        // later cameras are ignored
        let camera = objects
            .iter()
            .find_map(|object| match object {
                SceneObject::Camera(camera) => Some(*camera),
                _ => None,
            })
            .ok_or(ConfigurationError::MissingCamera)?;

        let lights = collect_lights(&objects);

        Ok(Scene {
            objects,
            camera,
            lights,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}

fn collect_lights(objects: &[SceneObject]) -> Vec<Light> {
    objects
        .iter()
        .filter_map(|object| match object {
            SceneObject::PointLight(light) => Some(Light::Point(*light)),
            SceneObject::SpotLight(spot) if spot.cone_angle_degrees == 0.0 => {
                Some(Light::Point(spot.light))
            }
            SceneObject::SpotLight(spot) => Some(Light::Spot(SpotLight {
                // validated non-zero
                direction: spot.direction.normalize(),
                ..*spot
            })),
            _ => None,
        })
        .collect()
}

fn validate_object(index: usize, object: &SceneObject) -> Result<(), ConfigurationError> {
    match object {
        SceneObject::Camera(camera) => {
            if !(camera.width > 0.0 && camera.height > 0.0)
                || !camera.width.is_finite()
                || !camera.height.is_finite()
            {
                return Err(ConfigurationError::InvalidCamera {
                    width: camera.width,
                    height: camera.height,
                });
            }
        }
        SceneObject::Sphere(sphere) => {
            check_finite(index, "sphere center", sphere.center)?;
            if !(sphere.radius > 0.0) || !sphere.radius.is_finite() {
                return Err(ConfigurationError::DegenerateSphere {
                    index,
                    radius: sphere.radius,
                });
            }
            check_material(index, &sphere.material)?;
        }
        SceneObject::Plane(plane) => {
            check_finite(index, "plane point", plane.point)?;
            check_finite(index, "plane normal", plane.normal)?;
            if plane.normal.length_squared() == 0.0 {
                return Err(ConfigurationError::DegeneratePlane { index });
            }
            check_material(index, &plane.material)?;
        }
        SceneObject::PointLight(light) => check_light(index, light)?,
        SceneObject::SpotLight(spot) => {
            check_light(index, &spot.light)?;
            check_finite(index, "spotlight direction", spot.direction)?;
            if spot.direction.length_squared() == 0.0 {
                return Err(ConfigurationError::DegenerateSpotDirection { index });
            }
            if !(0.0..=360.0).contains(&spot.cone_angle_degrees) {
                return Err(ConfigurationError::InvalidConeAngle {
                    index,
                    degrees: spot.cone_angle_degrees,
                });
            }
            if !spot.angular_exponent.is_finite() {
                return Err(ConfigurationError::NonFinite {
                    index,
                    field: "angular exponent",
                });
            }
        }
    }

    Ok(())
}

fn check_light(index: usize, light: &PointLight) -> Result<(), ConfigurationError> {
    check_finite(index, "light position", light.position)?;
    check_color(index, "light color", light.color)?;
    if let Some(radial) = light.radial {
        check_finite(
            index,
            "radial attenuation",
            DVec3::new(radial.a0, radial.a1, radial.a2),
        )?;
    }
    Ok(())
}

fn check_material(index: usize, material: &Material) -> Result<(), ConfigurationError> {
    check_color(index, "diffuse color", material.diffuse_color)?;
    check_color(index, "specular color", material.specular_color)
}

fn check_color(index: usize, field: &'static str, color: DVec3) -> Result<(), ConfigurationError> {
    let in_range = color.to_array().iter().all(|c| (0.0..=1.0).contains(c));
    if in_range {
        Ok(())
    } else {
        Err(ConfigurationError::ColorOutOfRange { index, field })
    }
}

fn check_finite(index: usize, field: &'static str, vector: DVec3) -> Result<(), ConfigurationError> {
    if vector.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::NonFinite { index, field })
    }
}
