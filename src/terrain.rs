/*
 * Terrain Module
 *
 * This module defines the procedural seabed height field. Elevation at any
 * planar coordinate is the sum of a fixed set of weighted Gaussian dunes,
 * so the function is pure and deterministic. Agents, decorations and any
 * camera ground-following must all evaluate terrain through this single
 * function or they will disagree about where the seabed is.
 */

use glam::Vec2;

struct Dune {
    center: Vec2,
    height: f32,
    sigma: f32,
}

const fn dune(x: f32, y: f32, height: f32, sigma: f32) -> Dune {
    Dune {
        center: Vec2::new(x, y),
        height,
        sigma,
    }
}

// Fixed dune table shared by the whole scene
const DUNES: [Dune; 15] = [
    dune(-25.0, -25.0, 2.0, 24.0),
    dune(20.0, 20.0, -1.0, 9.0),
    dune(-10.0, 15.0, 1.5, 12.0),
    dune(15.0, 15.0, 2.5, 12.0),
    dune(-20.0, -20.0, 4.0, 15.0),
    dune(0.0, 0.0, 0.5, 6.0),
    dune(-15.0, 10.0, 1.0, 9.0),
    dune(10.0, -15.0, 2.0, 12.0),
    dune(-5.0, 20.0, -0.5, 15.0),
    dune(25.0, 25.0, 8.0, 18.0),
    dune(-25.0, 0.0, 1.0, 9.0),
    dune(0.0, 25.0, 2.0, 9.0),
    dune(25.0, -25.0, -1.5, 12.0),
    dune(20.0, 0.0, 3.0, 12.0),
    dune(0.0, -20.0, 2.0, 9.0),
];

// Evaluate the seabed elevation at (x, y). Overlapping dunes add linearly,
// with no renormalization, so the sum can exceed any individual height.
pub fn dune_height(x: f32, y: f32) -> f32 {
    let p = Vec2::new(x, y);
    let mut s = 0.0;
    for dune in &DUNES {
        let d = p.distance(dune.center) / dune.sigma;
        s += dune.height * (-d * d).exp();
    }
    s
}
