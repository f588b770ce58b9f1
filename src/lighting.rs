//! Local illumination terms evaluated per hit point and light.
//!
//! Colours are `DVec3` with one channel per component, so every term below is
//! evaluated for all three channels at once.

use glam::DVec3;

use crate::scene::{Light, RadialAttenuation};

/// Phong shininess exponent used for every surface.
pub const SHININESS: f64 = 20.0;

/// Distance falloff. `None` marks a light of infinite range.
pub fn radial_attenuation(radial: Option<RadialAttenuation>, distance: f64) -> f64 {
    let Some(radial) = radial else {
        return 1.0;
    };
    if distance.is_infinite() {
        return 1.0;
    }

    let denominator = radial.a2 * distance * distance + radial.a1 * distance + radial.a0;
    if denominator == 0.0 {
        0.0
    } else {
        1.0 / denominator
    }
}

/// Spotlight cone falloff.
///
/// `to_surface` is the unit vector from the light to the lit point and
/// `spot_direction` the unit beam axis. Points whose angle from the axis exceeds
/// half the cone angle get nothing; a point exactly on the cone boundary keeps
/// the boundary value `cos^exponent`.
pub fn angular_attenuation(
    to_surface: DVec3,
    spot_direction: DVec3,
    angular_exponent: f64,
    cone_angle_degrees: f64,
) -> f64 {
    let cos_angle = to_surface.dot(spot_direction);
    // angle > half-cone compared as cosines, acos is monotonically decreasing
    // on [0, pi], so the half-angle is capped there
    let half_angle = (cone_angle_degrees.to_radians() / 2.0).min(std::f64::consts::PI);
    let cutoff = half_angle.cos();
    if cos_angle < cutoff {
        0.0
    } else {
        cos_angle.max(0.0).powf(angular_exponent)
    }
}

/// Combined radial and angular factor for one light.
pub fn attenuation(light: &Light, to_light: DVec3, distance: f64) -> f64 {
    let radial = radial_attenuation(light.radial(), distance);
    match light {
        Light::Point(_) => radial,
        Light::Spot(spot) => {
            radial
                * angular_attenuation(
                    -to_light,
                    spot.direction,
                    spot.angular_exponent,
                    spot.cone_angle_degrees,
                )
        }
    }
}

pub fn diffuse(
    diffuse_color: DVec3,
    light_color: DVec3,
    normal: DVec3,
    to_light: DVec3,
) -> DVec3 {
    let n_dot_l = normal.dot(to_light);
    if n_dot_l > 0.0 {
        diffuse_color * light_color * n_dot_l
    } else {
        DVec3::ZERO
    }
}

pub fn specular(
    specular_color: DVec3,
    light_color: DVec3,
    view: DVec3,
    reflection: DVec3,
    normal: DVec3,
    to_light: DVec3,
) -> DVec3 {
    let v_dot_r = view.dot(reflection);
    if v_dot_r > 0.0 && normal.dot(to_light) > 0.0 {
        specular_color * light_color * v_dot_r.powf(SHININESS)
    } else {
        DVec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{PointLight, SpotLight};
    use glam::dvec3;

    #[test]
    fn test_radial_infinite_range_is_one() {
        for distance in [0.0, 0.5, 3.0, 1e6, f64::INFINITY] {
            assert_eq!(radial_attenuation(None, distance), 1.0);
        }
    }

    #[test]
    fn test_radial_quadratic() {
        let radial = RadialAttenuation {
            a0: 1.0,
            a1: 1.0,
            a2: 1.0,
        };
        assert_eq!(radial_attenuation(Some(radial), 2.0), 1.0 / 7.0);
        assert_eq!(radial_attenuation(Some(RadialAttenuation::default()), 42.0), 1.0);
    }

    #[test]
    fn test_radial_zero_denominator() {
        let radial = RadialAttenuation {
            a0: 0.0,
            a1: 0.0,
            a2: 0.0,
        };
        assert_eq!(radial_attenuation(Some(radial), 3.0), 0.0);
    }

    #[test]
    fn test_radial_non_increasing_with_distance() {
        let coefficients = [
            RadialAttenuation { a0: 1.0, a1: 0.0, a2: 0.0 },
            RadialAttenuation { a0: 1.0, a1: 0.5, a2: 0.0 },
            RadialAttenuation { a0: 0.2, a1: 0.0, a2: 0.1 },
            RadialAttenuation { a0: 0.0, a1: 0.3, a2: 0.7 },
        ];
        for radial in coefficients {
            let mut previous = f64::INFINITY;
            for step in 1..200 {
                let value = radial_attenuation(Some(radial), step as f64 * 0.25);
                assert!(value <= previous, "{radial:?} increased at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_spot_boundary_keeps_boundary_value() {
        let cone = 90.0_f64;
        let half = cone.to_radians() / 2.0;
        let on_boundary = dvec3(half.sin(), 0.0, half.cos());

        let value = angular_attenuation(on_boundary, DVec3::Z, 2.0, cone);
        assert_eq!(value, half.cos().powf(2.0));
    }

    #[test]
    fn test_spot_outside_cone_is_zero() {
        let outside = dvec3(1.0, 0.0, 1.0).normalize();
        assert_eq!(angular_attenuation(outside, DVec3::Z, 1.0, 60.0), 0.0);
        assert_eq!(angular_attenuation(-DVec3::Z, DVec3::Z, 1.0, 60.0), 0.0);
    }

    #[test]
    fn test_spot_wider_than_full_turn_lights_everything() {
        assert_eq!(angular_attenuation(-DVec3::Z, DVec3::Z, 0.0, 400.0), 1.0);
        assert_eq!(angular_attenuation(DVec3::X, DVec3::Z, 0.0, 400.0), 1.0);
    }

    #[test]
    fn test_spot_negative_cosine_inside_wide_cone_is_zero() {
        // 270 degree cone: a point 120 degrees off the axis is inside it
        let off_axis = dvec3(120.0_f64.to_radians().sin(), 0.0, 120.0_f64.to_radians().cos());
        assert_eq!(angular_attenuation(off_axis, DVec3::Z, 1.5, 270.0), 0.0);
    }

    #[test]
    fn test_spot_on_axis() {
        assert_eq!(angular_attenuation(DVec3::Z, DVec3::Z, 10.0, 30.0), 1.0);
    }

    #[test]
    fn test_point_light_has_no_angular_term() {
        let light = PointLight {
            position: DVec3::ZERO,
            color: DVec3::ONE,
            radial: None,
        };
        assert_eq!(attenuation(&Light::Point(light), DVec3::X, 10.0), 1.0);

        let spot = Light::Spot(SpotLight {
            light,
            direction: -DVec3::Y,
            cone_angle_degrees: 40.0,
            angular_exponent: 1.0,
        });
        // point lies along +x from the light, far outside a downward cone
        assert_eq!(attenuation(&spot, -DVec3::X, 10.0), 0.0);
        // point straight below the light
        assert_eq!(attenuation(&spot, DVec3::Y, 10.0), 1.0);
    }

    #[test]
    fn test_diffuse_and_specular_terms() {
        let normal = DVec3::Y;
        let to_light = DVec3::Y;
        let color = dvec3(1.0, 0.5, 0.0);

        assert_eq!(diffuse(color, DVec3::ONE, normal, to_light), color);
        assert_eq!(diffuse(color, DVec3::ONE, normal, -to_light), DVec3::ZERO);

        let reflection = crate::math::reflect(to_light, normal);
        let view = -DVec3::Y;
        assert_eq!(
            specular(DVec3::ONE, DVec3::ONE, view, reflection, normal, to_light),
            DVec3::ONE
        );
        assert_eq!(
            specular(DVec3::ONE, DVec3::ONE, -view, reflection, normal, to_light),
            DVec3::ZERO
        );
    }
}
