// Host-side tests for icosphere generation.

use hero_core::geometry::icosphere;

#[test]
fn subdivision_counts_follow_the_closed_form() {
    for order in 0..=3u32 {
        let mesh = icosphere(1.0, order);
        let quads = 4usize.pow(order);
        assert_eq!(mesh.vertex_count(), 10 * quads + 2, "order {order}");
        assert_eq!(mesh.index_count(), 20 * quads * 3, "order {order}");
    }
}

#[test]
fn vertices_sit_on_the_sphere() {
    let radius = 1.85;
    let mesh = icosphere(radius, 2);
    for v in &mesh.vertices {
        let r = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
        assert!((r - radius).abs() < 1e-4, "vertex off the sphere: r={r}");
    }
}

#[test]
fn normals_are_unit_and_radial() {
    let radius = 1.85;
    let mesh = icosphere(radius, 2);
    for v in &mesh.vertices {
        let n = v.normal;
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-4);
        // Outward normal of a sphere is the normalized position.
        for k in 0..3 {
            assert!((n[k] * radius - v.position[k]).abs() < 1e-3);
        }
    }
}

#[test]
fn indices_stay_in_range_and_cover_every_vertex() {
    let mesh = icosphere(1.0, 2);
    let vcount = mesh.vertex_count() as u32;
    let mut referenced = vec![false; vcount as usize];
    for &i in &mesh.indices {
        assert!(i < vcount);
        referenced[i as usize] = true;
    }
    assert!(referenced.iter().all(|&r| r), "unreferenced vertex");
}

#[test]
fn triangles_are_non_degenerate() {
    let mesh = icosphere(1.0, 1);
    for tri in mesh.indices.chunks(3) {
        assert_ne!(tri[0], tri[1]);
        assert_ne!(tri[1], tri[2]);
        assert_ne!(tri[0], tri[2]);
    }
}
