/*
 * Agent Module
 *
 * This module defines the Agent struct, a single autonomously moving fish
 * with a position and a velocity. Agents are created at scene init,
 * teleport-respawned in place whenever they escape the world bounds, and
 * never destroyed for the life of the process.
 */

use glam::Vec3;
use rand::Rng;

use crate::terrain::dune_height;

#[derive(Clone, Debug)]
pub struct Agent {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Agent {
    // Spawn at a uniformly random in-bounds planar position, with the
    // altitude drawn above the terrain surface (at least one unit of
    // clearance from both the seabed and the ceiling) and a uniformly
    // random velocity in [-1, 1]^3. Used for both the initial population
    // and out-of-bounds respawns.
    pub fn spawn(rng: &mut impl Rng, half_extent: f32) -> Self {
        let x = rng.gen_range(-half_extent..half_extent);
        let y = rng.gen_range(-half_extent..half_extent);
        let h = dune_height(x, y);
        let z = h + rng.gen_range(1.0..(half_extent - h - 1.0));

        let velocity = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );

        Self {
            position: Vec3::new(x, y, z),
            velocity,
        }
    }

    // Display orientation derives from the normalized velocity
    pub fn heading(&self) -> Vec3 {
        self.velocity.normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_above_the_terrain_and_below_the_ceiling() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let agent = Agent::spawn(&mut rng, 15.0);
            let h = dune_height(agent.position.x, agent.position.y);
            assert!(agent.position.x.abs() < 15.0);
            assert!(agent.position.y.abs() < 15.0);
            assert!(agent.position.z > h);
            assert!(agent.position.z < 15.0);
        }
    }

    #[test]
    fn spawn_velocity_is_bounded() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let agent = Agent::spawn(&mut rng, 15.0);
            assert!(agent.velocity.x.abs() <= 1.0);
            assert!(agent.velocity.y.abs() <= 1.0);
            assert!(agent.velocity.z.abs() <= 1.0);
        }
    }

    #[test]
    fn heading_of_a_still_agent_is_zero() {
        let agent = Agent {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
        };
        assert_eq!(agent.heading(), Vec3::ZERO);
    }
}
