/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the aquarium simulation: the neighbor
 * interaction bands, the decay profiles of every environment repulsion,
 * and the integration limits. Defaults reproduce the reference scene
 * (a 30-unit world with 100 fish).
 */

use std::f32::consts::PI;

use crate::WORLD_SIZE;

pub struct SimulationParams {
    pub num_agents: usize,
    pub world_size: f32,

    // Neighbor interaction: forward field-of-view cone and the three
    // radial bands (repulsion / alignment / attraction)
    pub fov_angle: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub alignment_falloff: f32,

    // Camera repulsion
    pub camera_range: f32,
    pub camera_plateau: f32,
    pub camera_cutoff: f32,
    pub camera_rate: f32,

    // Obstacle repulsion; the cutoff is volume_factor * radius * scale()
    pub obstacle_plateau: f32,
    pub volume_factor: f32,
    pub obstacle_rate: f32,

    // Ground repulsion
    pub ground_plateau: f32,
    pub ground_cutoff: f32,
    pub ground_rate: f32,

    // Wall repulsion
    pub wall_plateau: f32,
    pub wall_cutoff: f32,
    pub wall_rate: f32,

    // Ceiling repulsion
    pub ceiling_plateau: f32,
    pub ceiling_cutoff: f32,
    pub ceiling_rate: f32,

    // Integration limits
    pub max_speed: f32,
    pub acceptance_margin: f32,

    // Performance settings
    pub enable_parallel: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_agents: 100,
            world_size: WORLD_SIZE,
            fov_angle: 2.0 * PI / 3.0,
            separation_radius: 1.5,
            alignment_radius: 2.0,
            cohesion_radius: 3.0,
            alignment_falloff: 3.0,
            camera_range: 6.0,
            camera_plateau: 7.0,
            camera_cutoff: 2.5,
            camera_rate: 5.0,
            obstacle_plateau: 7.0,
            volume_factor: 1.2,
            obstacle_rate: 10.0,
            ground_plateau: 12.0,
            ground_cutoff: 0.75,
            ground_rate: 8.0,
            wall_plateau: 15.0,
            wall_cutoff: 1.5,
            wall_rate: 4.0,
            ceiling_plateau: 20.0,
            ceiling_cutoff: 1.0,
            ceiling_rate: 8.0,
            max_speed: 4.0,
            acceptance_margin: 0.4,
            enable_parallel: true,
        }
    }
}

impl SimulationParams {
    pub fn half_extent(&self) -> f32 {
        self.world_size / 2.0
    }

    // Every tuned constant was calibrated against a 30-unit world; larger
    // or smaller worlds scale the cutoffs and the speed cap by this factor.
    pub fn scale(&self) -> f32 {
        self.world_size / WORLD_SIZE
    }
}
