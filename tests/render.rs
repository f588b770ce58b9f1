use glam::{dvec3, DVec3};

use raycaster::camera::ViewPlane;
use raycaster::scene::{Camera, Material, Plane, PointLight, RadialAttenuation, SceneObject, Sphere};
use raycaster::{parse_scene, Frame, Ray, Renderer, Resolution, Scene};

fn red_sphere_scene() -> Scene {
    Scene::new(vec![
        SceneObject::Camera(Camera {
            width: 2.0,
            height: 2.0,
        }),
        SceneObject::Sphere(Sphere {
            center: dvec3(0.0, 0.0, 5.0),
            radius: 1.0,
            material: Material {
                diffuse_color: dvec3(1.0, 0.0, 0.0),
                specular_color: DVec3::ZERO,
            },
        }),
        SceneObject::PointLight(PointLight {
            position: DVec3::ZERO,
            color: DVec3::ONE,
            radial: Some(RadialAttenuation {
                a0: 1.0,
                a1: 0.0,
                a2: 0.0,
            }),
        }),
    ])
    .unwrap()
}

fn showcase_scene() -> Scene {
    parse_scene(include_str!("../scenes/basic.json")).unwrap()
}

#[test]
fn test_red_sphere_three_by_three() {
    let frame = Frame::render(&red_sphere_scene(), Resolution::new(3, 3).unwrap());

    assert_eq!(frame.pixels.len(), 9);
    assert_eq!(frame.pixel(1, 1), [255, 0, 0]);
    for (x, row) in [(0, 0), (2, 0), (0, 2), (2, 2)] {
        assert_eq!(frame.pixel(x, row), [0, 0, 0], "corner ({x}, {row})");
    }
}

#[test]
fn test_missed_rays_are_black() {
    let scene = showcase_scene();
    let resolution = Resolution::new(24, 16).unwrap();
    let frame = Frame::render(&scene, resolution);

    let view_plane = ViewPlane::new(*scene.camera(), resolution);
    let renderer = Renderer::new(&scene);

    let mut misses = 0;
    for (direction, pixel) in view_plane.ray_directions.iter().zip(&frame.pixels) {
        if renderer.trace_ray(&Ray::primary(*direction)).is_none() {
            assert_eq!(*pixel, [0, 0, 0]);
            misses += 1;
        }
    }
    // the sky above the floor plane is empty
    assert!(misses > 0);
}

#[test]
fn test_rendering_is_idempotent() {
    let scene = showcase_scene();
    let resolution = Resolution::new(40, 30).unwrap();

    let first = Frame::render(&scene, resolution);
    let second = Frame::render(&scene, resolution);
    assert_eq!(first, second);
}

#[test]
fn test_parallel_matches_sequential() {
    let scene = showcase_scene();
    let resolution = Resolution::new(33, 17).unwrap();

    let parallel = Frame::render(&scene, resolution);
    let sequential = Frame::render_sequential(&scene, resolution);
    assert_eq!(parallel, sequential);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(3).build().unwrap();
    assert_eq!(Frame::render_in_pool(&scene, resolution, &pool), sequential);
}

#[test]
fn test_occluder_casts_shadow_on_wall() {
    let camera = SceneObject::Camera(Camera {
        width: 1.0,
        height: 1.0,
    });
    let wall = SceneObject::Plane(Plane {
        point: dvec3(0.0, 0.0, 10.0),
        normal: dvec3(0.0, 0.0, -2.0),
        material: Material {
            diffuse_color: DVec3::ONE,
            specular_color: DVec3::ZERO,
        },
    });
    // light between the eye and the wall, occluder between light and wall
    let lamp = SceneObject::PointLight(PointLight {
        position: dvec3(1.0, 0.0, 4.0),
        color: DVec3::ONE,
        radial: None,
    });
    let occluder = SceneObject::Sphere(Sphere {
        center: dvec3(1.0, 0.0, 7.0),
        radius: 0.2,
        material: Material {
            diffuse_color: DVec3::ONE,
            specular_color: DVec3::ZERO,
        },
    });

    let resolution = Resolution::new(9, 9).unwrap();
    let lit = Frame::render(&Scene::new(vec![camera, wall, lamp]).unwrap(), resolution);
    let shadowed = Frame::render(
        &Scene::new(vec![camera, wall, occluder, lamp]).unwrap(),
        resolution,
    );

    // the corner sees the wall in both scenes, only the occluder changes its light
    assert!(lit.pixel(0, 0).iter().all(|c| *c > 0));
    assert_eq!(shadowed.pixel(0, 0), lit.pixel(0, 0));

    // hits the wall at (1, 0, 10), straight behind the occluder as seen from the lamp
    let ray = Ray::primary(dvec3(0.1, 0.0, 1.0).normalize());
    let open = Scene::new(vec![camera, wall, lamp]).unwrap();
    let blocked = Scene::new(vec![camera, wall, occluder, lamp]).unwrap();
    assert!(Renderer::new(&open).per_pixel(&ray).iter().all(|c| *c > 0));
    assert_eq!(Renderer::new(&blocked).per_pixel(&ray), [0, 0, 0]);
}
