/*
 * Placement Module
 *
 * This module defines the terrain-aware scatter generators used at scene
 * setup to seed decoration positions: a uniform in-bounds scatter and a
 * clustered scatter drawing around anchor points with a Gaussian
 * acceptance test. Both take an explicitly passed random source so a scene
 * build is seeded once and reproducible.
 */

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::terrain::dune_height;

// n independent draws uniform in [-world_size/2 + margin, world_size/2 - margin]^2,
// with the height set from the terrain minus z_offset.
pub fn scatter_uniform(
    rng: &mut impl Rng,
    n: usize,
    world_size: f32,
    z_offset: f32,
    margin: f32,
) -> Vec<Vec3> {
    let extent = world_size / 2.0 - margin;
    (0..n)
        .map(|_| {
            let x = rng.gen_range(-extent..extent);
            let y = rng.gen_range(-extent..extent);
            Vec3::new(x, y, dune_height(x, y) - z_offset)
        })
        .collect()
}

// n draws clustered around the anchors: pick a random anchor, offset
// uniformly in [-spread, spread]^2, and accept only in-bounds points that
// pass the Gaussian test exp(-(d/spread)^2) > uniform(0,1). Rejection
// sampling: each output slot retries until a draw is accepted, so the
// result always holds exactly n points.
pub fn scatter_clustered(
    rng: &mut impl Rng,
    n: usize,
    world_size: f32,
    z_offset: f32,
    anchors: &[Vec3],
    spread: f32,
) -> Vec<Vec3> {
    let half = world_size / 2.0;
    (0..n)
        .map(|_| loop {
            let anchor = anchors[rng.gen_range(0..anchors.len())];
            let x = anchor.x + rng.gen_range(-spread..spread);
            let y = anchor.y + rng.gen_range(-spread..spread);

            if x.abs() >= half || y.abs() >= half {
                continue;
            }

            let distance = Vec2::new(x - anchor.x, y - anchor.y).length();
            let probability = (-(distance / spread) * (distance / spread)).exp();
            if rng.gen_range(0.0..1.0) < probability {
                break Vec3::new(x, y, dune_height(x, y) - z_offset);
            }
        })
        .collect()
}
