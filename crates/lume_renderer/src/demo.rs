//! Hardcoded demo scenes.
//!
//! Scene population is glue around the core: each builder registers
//! materials, geometry, and lights and positions the camera, returning
//! everything ready to render.

use crate::{
    camera::Camera,
    light::Light,
    material::{Color, Material},
    scene::Scene,
    triangle::CullMode,
};
use lume_core::MeshData;
use lume_math::Vec3;

const WHITE: Color = Color::ONE;
const GRAY_BLUE: Color = Color::new(0.49, 0.57, 0.57);

/// Two spheres over a yellow floor, lit by two white point lights.
pub fn simple_scene() -> (Scene, Camera) {
    let mut scene = Scene::new();

    let lambert_red = scene.add_material(Material::Lambert {
        color: Color::new(1.0, 0.0, 0.0),
        diffuse_reflectance: 1.0,
    });
    let lambert_yellow = scene.add_material(Material::Lambert {
        color: Color::new(1.0, 1.0, 0.0),
        diffuse_reflectance: 1.0,
    });
    let ct_blue = scene.add_material(Material::CookTorrance {
        albedo: Color::new(0.0, 0.0, 1.0),
        metalness: 0.0,
        roughness: 0.6,
    });

    scene.add_sphere(Vec3::new(-0.75, 1.0, 0.0), 1.0, lambert_red);
    scene.add_sphere(Vec3::new(0.75, 1.0, 0.0), 1.0, ct_blue);

    scene.add_plane(Vec3::ZERO, Vec3::Y, lambert_yellow);

    scene.add_light(Light::point(Vec3::new(0.0, 5.0, 5.0), 25.0, WHITE));
    scene.add_light(Light::point(Vec3::new(0.0, 2.5, -5.0), 25.0, WHITE));

    (scene, camera_at_default())
}

/// Six Cook-Torrance spheres in a gray-blue room: metals on the bottom
/// row, plastics on top, roughness decreasing left to right.
pub fn reference_scene() -> (Scene, Camera) {
    let mut scene = Scene::new();

    let metal = Color::new(0.95, 0.93, 0.88);
    let plastic = Color::new(0.8, 0.8, 0.8);
    let roughness = [1.0, 0.6, 0.1];

    let metals: Vec<_> = roughness
        .iter()
        .map(|&r| {
            scene.add_material(Material::CookTorrance {
                albedo: metal,
                metalness: 1.0,
                roughness: r,
            })
        })
        .collect();
    let plastics: Vec<_> = roughness
        .iter()
        .map(|&r| {
            scene.add_material(Material::CookTorrance {
                albedo: plastic,
                metalness: 0.0,
                roughness: r,
            })
        })
        .collect();

    for (column, x) in [-1.75, 0.0, 1.75].into_iter().enumerate() {
        scene.add_sphere(Vec3::new(x, 1.0, 0.0), 0.75, metals[column]);
        scene.add_sphere(Vec3::new(x, 3.0, 0.0), 0.75, plastics[column]);
    }

    add_room(&mut scene);
    add_three_point_lights(&mut scene);

    (scene, camera_at_default())
}

/// A back-face-culled cube mesh floating in the gray-blue room.
pub fn mesh_scene() -> (Scene, Camera) {
    let mut scene = Scene::new();

    let lambert_white = scene.add_material(Material::Lambert {
        color: WHITE,
        diffuse_reflectance: 1.0,
    });

    let mesh = scene.add_mesh(cube(), CullMode::BackFace, lambert_white);
    mesh.scale(Vec3::splat(0.7))
        .translate(Vec3::new(0.0, 1.0, 0.0));
    mesh.rebuild_world();

    add_room(&mut scene);
    add_three_point_lights(&mut scene);

    (scene, camera_at_default())
}

/// Spheres under a rectangular area light, for soft shadows.
pub fn area_light_scene() -> (Scene, Camera) {
    let mut scene = Scene::new();

    let lambert_gray = scene.add_material(Material::Lambert {
        color: GRAY_BLUE,
        diffuse_reflectance: 1.0,
    });
    let phong_blue = scene.add_material(Material::LambertPhong {
        color: Color::new(0.0, 0.0, 1.0),
        diffuse_reflectance: 1.0,
        specular_reflectance: 1.0,
        shininess: 60.0,
    });

    scene.add_sphere(Vec3::new(-1.0, 1.0, 0.0), 1.0, lambert_gray);
    scene.add_sphere(Vec3::new(1.25, 0.75, -1.0), 0.75, phong_blue);
    scene.add_plane(Vec3::ZERO, Vec3::Y, lambert_gray);

    scene.add_light(Light::area_rect(
        Vec3::new(0.0, 6.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::Z,
        3.0,
        3.0,
        60.0,
        Color::new(1.0, 0.9, 0.8),
    ));
    scene.add_light(Light::area_sphere(
        Vec3::new(4.0, 3.0, -3.0),
        Vec3::Y,
        Vec3::Z,
        0.5,
        30.0,
        Color::new(0.6, 0.7, 1.0),
    ));

    (scene, camera_at_default())
}

/// The shared demo viewpoint.
fn camera_at_default() -> Camera {
    Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0)
}

/// Five gray-blue planes boxing in the scene, open toward the camera.
fn add_room(scene: &mut Scene) {
    let gray_blue = scene.add_material(Material::Lambert {
        color: GRAY_BLUE,
        diffuse_reflectance: 1.0,
    });

    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0), gray_blue); // back
    scene.add_plane(Vec3::ZERO, Vec3::Y, gray_blue); // bottom
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0), gray_blue); // top
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), gray_blue); // right
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, gray_blue); // left
}

/// Warm back light plus two colored fill lights.
fn add_three_point_lights(scene: &mut Scene) {
    scene.add_light(Light::point(
        Vec3::new(0.0, 5.0, 5.0),
        50.0,
        Color::new(1.0, 0.61, 0.45),
    ));
    scene.add_light(Light::point(
        Vec3::new(-2.5, 5.0, -5.0),
        70.0,
        Color::new(1.0, 0.8, 0.45),
    ));
    scene.add_light(Light::point(
        Vec3::new(2.5, 2.5, -5.0),
        50.0,
        Color::new(0.34, 0.47, 0.68),
    ));
}

/// Axis-aligned cube with half-extent 1, faces wound CCW from outside.
fn cube() -> MeshData {
    let positions = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];
    #[rustfmt::skip]
    let indices = vec![
        4, 5, 6,  4, 6, 7, // front (+z)
        1, 0, 3,  1, 3, 2, // back (-z)
        5, 1, 2,  5, 2, 6, // right (+x)
        0, 4, 7,  0, 7, 3, // left (-x)
        3, 7, 6,  3, 6, 2, // top (+y)
        4, 0, 1,  4, 1, 5, // bottom (-y)
    ];

    MeshData::new(positions, indices).expect("cube data is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lume_math::Ray;

    #[test]
    fn test_every_demo_scene_has_lights_and_geometry() {
        for (scene, _) in [
            simple_scene(),
            reference_scene(),
            mesh_scene(),
            area_light_scene(),
        ] {
            assert!(scene.primitive_count() > 0);
            assert!(!scene.lights().is_empty());
        }
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let data = cube();
        assert_eq!(data.triangle_count(), 12);

        // Each face normal points away from the cube center
        for (face, normal) in data.face_normals.iter().enumerate() {
            let i = face * 3;
            let centroid = (data.positions[data.indices[i] as usize]
                + data.positions[data.indices[i + 1] as usize]
                + data.positions[data.indices[i + 2] as usize])
                / 3.0;
            assert!(normal.dot(centroid) > 0.0, "face {} winds inward", face);
        }
    }

    #[test]
    fn test_reference_scene_camera_sees_spheres() {
        let (scene, camera) = reference_scene();

        // A ray straight ahead from the demo viewpoint crosses the room
        let ray = Ray::new(camera.origin, camera.forward());
        let rec = scene.closest_hit(&ray);
        assert!(rec.did_hit);
        // Room walls sit 10 units out at most
        assert!(rec.t < 20.0);
    }

    #[test]
    fn test_mesh_scene_cube_is_transformed() {
        let (scene, camera) = mesh_scene();

        // The cube hangs at y=1 with half-extent 0.7; a ray from the
        // camera toward it must strike the mesh before the back wall
        let target = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(camera.origin, (target - camera.origin).normalize());
        let rec = scene.closest_hit(&ray);
        assert!(rec.did_hit);
        let back_wall_t = (10.0 - camera.origin.z) / ray.direction.z;
        assert!(rec.t < back_wall_t);
    }
}
