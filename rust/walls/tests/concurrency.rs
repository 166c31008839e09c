// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walls are immutable and can be queried from many threads at once.

use libroom_walls::{AnyWall, Tolerance, Wall3D};
use nalgebra::Vector3;
use rayon::prelude::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn walls_are_send_and_sync() {
    assert_send_sync::<Wall3D>();
    assert_send_sync::<AnyWall>();
}

fn room() -> Vec<Wall3D> {
    let tol = Tolerance::default();
    let v = Vector3::<f64>::new;
    let faces = [
        [v(0.0, 0.0, 0.0), v(0.0, 4.0, 0.0), v(5.0, 4.0, 0.0), v(5.0, 0.0, 0.0)],
        [v(0.0, 0.0, 3.0), v(5.0, 0.0, 3.0), v(5.0, 4.0, 3.0), v(0.0, 4.0, 3.0)],
        [v(0.0, 0.0, 0.0), v(5.0, 0.0, 0.0), v(5.0, 0.0, 3.0), v(0.0, 0.0, 3.0)],
        [v(0.0, 4.0, 0.0), v(0.0, 4.0, 3.0), v(5.0, 4.0, 3.0), v(5.0, 4.0, 0.0)],
        [v(0.0, 0.0, 0.0), v(0.0, 0.0, 3.0), v(0.0, 4.0, 3.0), v(0.0, 4.0, 0.0)],
        [v(5.0, 0.0, 0.0), v(5.0, 4.0, 0.0), v(5.0, 4.0, 3.0), v(5.0, 0.0, 3.0)],
    ];

    faces
        .iter()
        .enumerate()
        .map(|(i, corners)| {
            Wall3D::without_holes(corners, vec![0.1], vec![0.0], format!("face{i}"), tol).unwrap()
        })
        .collect()
}

#[test]
fn parallel_queries_match_sequential_ones() {
    let walls = room();
    let source = Vector3::new(2.5, 2.0, 1.5);

    // rays from the center towards points far outside the box
    let targets: Vec<Vector3<f64>> = (0..500)
        .map(|i| {
            let t = i as f64 * 0.37;
            Vector3::new(2.5 + 20.0 * t.cos(), 2.0 + 20.0 * t.sin(), 1.5 + 10.0 * (0.5 * t).sin())
        })
        .collect();

    let count_hits = |target: &Vector3<f64>| {
        walls
            .iter()
            .filter(|w| w.intersects(&source, target))
            .count()
    };

    let sequential: Vec<usize> = targets.iter().map(count_hits).collect();
    let parallel: Vec<usize> = targets.par_iter().map(count_hits).collect();

    assert_eq!(sequential, parallel);
    // every ray leaves the closed box through at least one face
    assert!(parallel.iter().all(|&n| n >= 1));
}
