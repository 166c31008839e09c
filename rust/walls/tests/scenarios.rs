// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end wall scenarios and properties that every wall must satisfy.

use approx::assert_relative_eq;
use libroom_walls::{IntersectionKind, Side, Tolerance, Wall2D, Wall3D};
use nalgebra::{Vector2, Vector3};

fn unit_square_wall() -> Wall3D {
    Wall3D::without_holes(
        &[
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ],
        vec![0.1],
        vec![0.0],
        "unit",
        Tolerance::default(),
    )
    .unwrap()
}

fn square(x0: f64, y0: f64, size: f64) -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(x0, y0, 0.0),
        Vector3::new(x0 + size, y0, 0.0),
        Vector3::new(x0 + size, y0 + size, 0.0),
        Vector3::new(x0, y0 + size, 0.0),
    ]
}

/// A few walls with different orientations, sizes and holes.
fn assorted_walls() -> Vec<Wall3D> {
    let tol = Tolerance::default();
    vec![
        unit_square_wall(),
        // vertical wall in the xz plane, listed clockwise seen from +y
        Wall3D::without_holes(
            &[
                Vector3::new(0.0, 2.0, 0.0),
                Vector3::new(0.0, 2.0, 3.0),
                Vector3::new(5.0, 2.0, 3.0),
                Vector3::new(5.0, 2.0, 0.0),
            ],
            vec![0.2, 0.4],
            vec![0.1, 0.1],
            "south",
            tol,
        )
        .unwrap(),
        // tilted triangle
        Wall3D::without_holes(
            &[
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
            ],
            vec![0.5],
            vec![0.5],
            "roof",
            tol,
        )
        .unwrap(),
        Wall3D::new(
            &square(0.0, 0.0, 4.0),
            &[square(1.5, 1.5, 1.0)],
            vec![0.3],
            vec![0.2],
            "window",
            tol,
        )
        .unwrap(),
    ]
}

fn probe_points() -> Vec<Vector3<f64>> {
    let mut points = Vec::new();
    for i in -2..=2 {
        for j in -2..=2 {
            for k in -2..=2 {
                points.push(Vector3::new(
                    0.7 * i as f64 + 0.1,
                    1.3 * j as f64 - 0.2,
                    0.9 * k as f64 + 0.05,
                ));
            }
        }
    }
    points
}

#[test]
fn unit_square_scenario() {
    let wall = unit_square_wall();

    assert_relative_eq!(wall.transmission()[0], 0.9_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(wall.energy_reflection()[0], 0.9, epsilon = 1e-12);
    assert_relative_eq!(wall.area(), 1.0, epsilon = 1e-10);

    let hit = wall
        .intersection(&Vector3::new(0.5, 0.5, -1.0), &Vector3::new(0.5, 0.5, 1.0))
        .unwrap();
    assert_eq!(hit.code(), 0);
    assert_relative_eq!(hit.point, Vector3::new(0.5, 0.5, 0.0), epsilon = 1e-10);
}

#[test]
fn segment_wall_scenario() {
    let wall = Wall2D::new(
        &[Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)],
        vec![0.1],
        vec![0.0],
        "",
        Tolerance::default(),
    )
    .unwrap();

    let hit = wall
        .intersection(&Vector2::new(0.5, -1.0), &Vector2::new(0.5, 1.0))
        .unwrap();
    assert_eq!(hit.code(), 0);
    assert_relative_eq!(hit.point, Vector2::new(0.5, 0.0), epsilon = 1e-12);

    assert_eq!(
        wall.intersection_code(&Vector2::new(0.5, -1.0), &Vector2::new(0.5, -0.1)),
        -1
    );
}

#[test]
fn window_wall_area() {
    let wall = Wall3D::new(
        &square(0.0, 0.0, 4.0),
        &[square(1.0, 1.0, 1.0)],
        vec![0.1],
        vec![0.1],
        "",
        Tolerance::default(),
    )
    .unwrap();
    assert_relative_eq!(wall.area(), 15.0, epsilon = 1e-10);
}

#[test]
fn reflection_is_an_involution() {
    for wall in assorted_walls() {
        for p in probe_points() {
            let (side, image) = wall.reflect(&p);
            if side == Side::OnPlane {
                continue;
            }
            let (back_side, back) = wall.reflect(&image);
            assert_relative_eq!(back, p, epsilon = 1e-9);
            assert_eq!(back_side.sign(), -side.sign());
        }
    }
}

#[test]
fn side_agrees_with_reflect() {
    for wall in assorted_walls() {
        for p in probe_points().into_iter().chain([wall.origin()]) {
            assert_eq!(wall.side(&p), wall.reflect(&p).0);
        }
    }
}

#[test]
fn intersects_agrees_with_intersection() {
    let points = probe_points();
    for wall in assorted_walls() {
        for pair in points.windows(7).step_by(3) {
            let (a, b) = (pair[0], pair[6]);
            assert_eq!(wall.intersects(&a, &b), wall.intersection(&a, &b).is_some());
            assert_eq!(wall.intersects(&a, &b), wall.intersection_code(&a, &b) != -1);
        }
    }
}

#[test]
fn intersection_points_lie_on_the_plane() {
    let points = probe_points();
    for wall in assorted_walls() {
        for (i, a) in points.iter().enumerate() {
            let b = &points[points.len() - 1 - i];
            if let Some(hit) = wall.intersection(a, b) {
                assert_eq!(wall.side(&hit.point), Side::OnPlane);
            }
        }
    }
}

#[test]
fn normals_are_unit_and_areas_positive() {
    for wall in assorted_walls() {
        assert_relative_eq!(wall.normal().norm(), 1.0, epsilon = 1e-10);
        assert!(wall.area() > 0.0);
    }
}

#[test]
fn clone_is_same_as_original() {
    for wall in assorted_walls() {
        let copy = wall.clone();
        assert!(copy.same_as(&wall));
        assert!(wall.same_as(&copy));
        assert_eq!(copy.holes(), wall.holes());
        assert_eq!(copy.n_bands(), wall.n_bands());
    }
}

#[test]
fn hole_edges_are_part_of_the_wall() {
    let wall = Wall3D::new(
        &square(0.0, 0.0, 4.0),
        &[square(1.5, 1.5, 1.0)],
        vec![0.3],
        vec![0.2],
        "",
        Tolerance::default(),
    )
    .unwrap();

    let edge = wall
        .intersection(&Vector3::new(2.5, 2.0, 1.0), &Vector3::new(2.5, 2.0, -1.0))
        .unwrap();
    assert_eq!(edge.kind, IntersectionKind::Boundary);

    assert!(!wall.intersects(&Vector3::new(2.0, 2.0, 1.0), &Vector3::new(2.0, 2.0, -1.0)));
}
