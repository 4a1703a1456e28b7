/*
 * Physics Module
 *
 * This module handles the per-frame flocking step. Each agent accumulates
 * a force from its neighbors (separation, alignment, cohesion inside a
 * forward field-of-view cone) and from the environment (camera, obstacles,
 * seabed, walls, ceiling), then integrates velocity and position with a
 * speed clamp. Agents that escape the world bounds are teleport-respawned.
 *
 * Force computation for every agent reads only the pre-step snapshot of
 * the flock and writes into a fresh buffer, so iteration order cannot
 * affect the result and the per-agent work can run in parallel.
 */

use glam::{Vec2, Vec3};
use rayon::prelude::*;

use crate::agent::Agent;
use crate::boundary::Boundary;
use crate::decay::plateau_decay;
use crate::params::SimulationParams;
use crate::scene::Obstacle;
use crate::terrain::dune_height;

// Advance the whole flock by one step. All force reads see the pre-step
// state; the new buffer is swapped in once every agent has been computed.
pub fn simulation_step(
    agents: &mut Vec<Agent>,
    dt: f32,
    camera_position: Vec3,
    obstacles: &[Obstacle],
    boundary: &Boundary,
    params: &SimulationParams,
) {
    let snapshot: &[Agent] = agents;
    let next: Vec<Agent> = if params.enable_parallel {
        snapshot
            .par_iter()
            .map(|agent| step_agent(agent, snapshot, dt, camera_position, obstacles, boundary, params))
            .collect()
    } else {
        snapshot
            .iter()
            .map(|agent| step_agent(agent, snapshot, dt, camera_position, obstacles, boundary, params))
            .collect()
    };

    *agents = next;
}

// Compute one agent's next state from the pre-step snapshot of the flock
fn step_agent(
    agent: &Agent,
    flock: &[Agent],
    dt: f32,
    camera_position: Vec3,
    obstacles: &[Obstacle],
    boundary: &Boundary,
    params: &SimulationParams,
) -> Agent {
    let force = neighbor_force(agent, flock, params)
        + environment_force(agent, camera_position, obstacles, boundary, params);

    let scale = params.scale();
    let mut velocity = agent.velocity + dt * force;

    // Clamp speed to avoid divergence
    let max_speed = params.max_speed * scale;
    if velocity.length() > max_speed {
        velocity = velocity.normalize() * max_speed;
    }

    let position = agent.position + dt * velocity;

    // Boundary violation policy: a hard reset, not a soft correction
    let limit = params.half_extent() + params.acceptance_margin;
    if position.x.abs() > limit || position.y.abs() > limit || position.z.abs() > limit {
        log::warn!("agent out of bounds at {position:?}, respawning");
        return Agent::spawn(&mut rand::thread_rng(), params.half_extent());
    }

    Agent { position, velocity }
}

// Neighbor interaction: three radial bands keyed on separation distance,
// restricted to a forward field-of-view cone. Coincident agents (distance
// zero) contribute nothing.
fn neighbor_force(agent: &Agent, flock: &[Agent], params: &SimulationParams) -> Vec3 {
    let mut force = Vec3::ZERO;

    for other in flock {
        let offset = other.position - agent.position;

        // Positive comparison on purpose: a NaN angle (zero-length velocity
        // or coincident positions) fails it and excludes the pair
        let angle = angle_between(agent.velocity, offset);
        if angle < params.fov_angle {
            let distance = offset.length();
            if distance > 0.0 {
                if distance < params.separation_radius {
                    // Inverse-square repulsion away from the neighbor
                    force += -offset / (distance * distance);
                } else if distance < params.alignment_radius {
                    // Exponentially weighted pull toward the neighbor's velocity
                    force += (-params.alignment_falloff * distance).exp()
                        * (other.velocity - agent.velocity);
                } else if distance < params.cohesion_radius {
                    // Linear attraction toward the neighbor
                    force += offset * distance;
                }
            }
        }
    }

    force
}

// Environment repulsion: camera, obstacles, seabed, walls and ceiling, all
// through the shared plateau-decay response with per-threat parameters.
fn environment_force(
    agent: &Agent,
    camera_position: Vec3,
    obstacles: &[Obstacle],
    boundary: &Boundary,
    params: &SimulationParams,
) -> Vec3 {
    let p = agent.position;
    let scale = params.scale();
    let mut force = Vec3::ZERO;

    // Camera repulsion
    let camera_distance = p.distance(camera_position);
    if camera_distance < params.camera_range {
        force += (p - camera_position)
            * plateau_decay(
                camera_distance,
                params.camera_plateau,
                params.camera_cutoff,
                params.camera_rate,
            );
    }

    // Obstacle repulsion, each obstacle's translation applied independently
    for obstacle in obstacles {
        let place = obstacle.center + obstacle.translation;
        let away = p - place;
        force += away
            * plateau_decay(
                away.length(),
                params.obstacle_plateau,
                params.volume_factor * obstacle.radius * scale,
                params.obstacle_rate,
            );
    }

    // Ground repulsion, pushing up and away from the seabed
    let terrain_height = dune_height(p.x, p.y);
    force += Vec3::Z
        * plateau_decay(
            (terrain_height - p.z).abs(),
            params.ground_plateau,
            params.ground_cutoff * scale,
            params.ground_rate,
        );

    // Wall repulsion along the nearest-edge normal
    let (wall_distance, normal) = boundary.nearest_edge(Vec2::new(p.x, p.y));
    force += normal.extend(0.0)
        * plateau_decay(
            wall_distance,
            params.wall_plateau,
            params.wall_cutoff * scale,
            params.wall_rate,
        );

    // Ceiling repulsion, pushing down from the top of the world
    let ceiling_distance = (p.z - params.half_extent()).abs();
    force += Vec3::NEG_Z
        * plateau_decay(
            ceiling_distance,
            params.ceiling_plateau,
            params.ceiling_cutoff * scale,
            params.ceiling_rate,
        );

    force
}

// Angle between two vectors in [0, pi]. Degenerate inputs (zero-length
// vectors) produce NaN, which fails the cone's positive comparison and
// therefore excludes the pair, matching the distance-zero guard.
fn angle_between(v1: Vec3, v2: Vec3) -> f32 {
    let lengths = v1.length() * v2.length();
    (v1.dot(v2) / lengths).clamp(-1.0, 1.0).acos()
}
