/*
 * Decay Function Module
 *
 * This module defines the plateau-then-exponential response curve used to
 * convert a distance to a threat (obstacle, ground, wall, ceiling, camera)
 * into a force magnitude. Every repulsion in the simulation goes through
 * this single function; call sites only vary the parameters.
 */

// Full-strength plateau up to `plateau_end`, smooth exponential falloff beyond.
// Continuous at the knee and monotonic non-increasing past it.
pub fn plateau_decay(x: f32, plateau_level: f32, plateau_end: f32, rate: f32) -> f32 {
    if x <= plateau_end {
        plateau_level
    } else {
        plateau_level * (-rate * (x - plateau_end)).exp()
    }
}
