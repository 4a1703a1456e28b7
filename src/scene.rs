/*
 * Scene Module
 *
 * This module assembles the simulated aquarium: the flock, the static
 * obstacles, the polygonal boundary, the scattered decorations (craters
 * and seaweed clusters) and the keyframe tracks driving the bubble
 * trajectories. Rendering, input and camera control live entirely outside
 * this crate; the scene only exposes positions, velocities and
 * interpolated track samples for a renderer to consume.
 */

use glam::Vec3;
use rand::Rng;

use crate::agent::Agent;
use crate::boundary::Boundary;
use crate::keyframe::{KeyframeTrack, TrackClock, TrackError};
use crate::params::SimulationParams;
use crate::physics::simulation_step;
use crate::placement::{scatter_clustered, scatter_uniform};

// A static mesh registered for repulsion queries: a bounding-sphere center
// and radius derived from the mesh extent, plus the world translation it
// was placed with. Immutable after scene setup.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub center: Vec3,
    pub radius: f32,
    pub translation: Vec3,
}

// Everything the scene needs at build time. The default reproduces the
// reference aquarium: a 30-unit world, 100 fish, 30 seaweed stalks
// clustered around 3 islets, 30 bubble craters and three bubble tracks.
pub struct SceneConfig {
    pub params: SimulationParams,
    pub num_seaweed: usize,
    pub num_islets: usize,
    pub num_craters: usize,
    pub seaweed_spread: f32,
    pub obstacles: Vec<Obstacle>,
    pub tracks: Vec<(Vec<Vec3>, Vec<f32>)>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            params: SimulationParams::default(),
            num_seaweed: 30,
            num_islets: 3,
            num_craters: 30,
            seaweed_spread: 3.0,
            obstacles: Vec::new(),
            tracks: default_bubble_tracks(),
        }
    }
}

// The three bubble trajectories of the reference scene: rising, wobbling
// paths with their own control-time tables.
pub fn default_bubble_tracks() -> Vec<(Vec<Vec3>, Vec<f32>)> {
    let positions_0 = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 6.0),
        Vec3::new(1.0, 0.0, 9.0),
        Vec3::new(2.0, 0.0, 12.0),
        Vec3::new(2.0, 1.0, 15.0),
        Vec3::new(2.0, 1.5, 18.0),
        Vec3::new(1.5, 1.0, 21.0),
        Vec3::new(1.5, 0.0, 24.0),
        Vec3::new(1.0, 0.0, 27.0),
        Vec3::new(0.0, 0.0, 29.0),
        Vec3::new(-1.0, 0.0, 30.0),
    ];
    let positions_1 = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.5, 5.0),
        Vec3::new(1.5, 1.0, 8.0),
        Vec3::new(2.0, 1.5, 10.0),
        Vec3::new(2.5, 2.0, 12.0),
        Vec3::new(2.5, 2.5, 14.0),
        Vec3::new(2.0, 2.0, 16.0),
        Vec3::new(1.5, 1.5, 18.0),
        Vec3::new(1.0, 1.0, 20.0),
        Vec3::new(0.5, 0.5, 22.0),
        Vec3::new(0.0, 0.0, 24.0),
    ];
    let positions_2 = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.6, -0.2, 3.0),
        Vec3::new(1.0, -0.5, 4.5),
        Vec3::new(1.5, -0.8, 6.0),
        Vec3::new(2.0, -1.0, 7.5),
        Vec3::new(2.5, -1.2, 9.0),
        Vec3::new(3.0, -1.5, 10.5),
        Vec3::new(3.5, -1.5, 12.0),
        Vec3::new(4.0, -1.0, 13.5),
        Vec3::new(4.5, -0.5, 15.0),
        Vec3::new(5.0, 0.0, 16.0),
    ];

    let times_0 = vec![0.0, 1.0, 2.0, 2.5, 3.0, 3.5, 3.75, 4.5, 5.0, 6.0, 7.0, 8.0];
    let times_1 = vec![0.0, 3.0, 5.0, 5.5, 6.0, 6.5, 6.75, 7.5, 8.0, 9.0, 10.0, 11.0];
    let times_2 = vec![0.0, 7.0, 8.0, 8.5, 9.0, 9.5, 9.75, 10.5, 11.0, 12.0, 13.0, 14.0];

    vec![
        (positions_0, times_0),
        (positions_1, times_1),
        (positions_2, times_2),
    ]
}

pub struct Scene {
    pub params: SimulationParams,
    pub agents: Vec<Agent>,
    pub obstacles: Vec<Obstacle>,
    pub boundary: Boundary,

    // Static decorations, placed once at setup
    pub craters: Vec<Vec3>,
    pub seaweed: Vec<Vec3>,
    pub seaweed_heights: Vec<f32>,
    pub crater_track_indices: Vec<usize>,

    tracks: Vec<KeyframeTrack>,
    clocks: Vec<TrackClock>,
    pub bubble_positions: Vec<Vec3>,
}

impl Scene {
    // Build the scene from its configuration. The random source is seeded
    // once by the caller and threaded through every placement draw, so a
    // scene build is reproducible.
    pub fn new(config: SceneConfig, rng: &mut impl Rng) -> Result<Self, TrackError> {
        let params = config.params;
        let half = params.half_extent();
        let scale = params.scale();
        let world = params.world_size;

        let agents = (0..params.num_agents)
            .map(|_| Agent::spawn(rng, half))
            .collect();
        let boundary = Boundary::square(half);

        // Craters sit slightly sunk into the terrain; seaweed clusters
        // around a handful of islet anchors with random stalk heights
        let craters = scatter_uniform(rng, config.num_craters, world, 0.6 * scale, 1.0);
        let islets = scatter_uniform(rng, config.num_islets, world, 0.0, 5.0);
        let seaweed = scatter_clustered(
            rng,
            config.num_seaweed,
            world,
            0.5,
            &islets,
            config.seaweed_spread,
        );
        let seaweed_heights = (0..config.num_seaweed)
            .map(|_| rng.gen_range(1.0..7.0))
            .collect();

        let tracks = config
            .tracks
            .into_iter()
            .map(|(positions, times)| KeyframeTrack::new(positions, times))
            .collect::<Result<Vec<_>, _>>()?;
        let clocks: Vec<TrackClock> = tracks.iter().map(TrackClock::for_track).collect();

        // Each crater blows bubbles along one of the tracks
        let crater_track_indices = if tracks.is_empty() {
            Vec::new()
        } else {
            (0..config.num_craters)
                .map(|_| rng.gen_range(0..tracks.len()))
                .collect()
        };

        let bubble_positions = tracks
            .iter()
            .zip(&clocks)
            .map(|(track, clock)| track.sample(clock.t))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            params,
            agents,
            obstacles: config.obstacles,
            boundary,
            craters,
            seaweed,
            seaweed_heights,
            crater_track_indices,
            tracks,
            clocks,
            bubble_positions,
        })
    }

    pub fn tracks(&self) -> &[KeyframeTrack] {
        &self.tracks
    }

    pub fn clocks(&self) -> &[TrackClock] {
        &self.clocks
    }

    // Advance the scene by one frame: run the flocking step, tick every
    // track clock and refresh the interpolated bubble positions. Returns
    // one flag per track, true on the frame that track's clock wrapped,
    // so a renderer can clear the trajectory trace it accumulated.
    pub fn update(&mut self, dt: f32, camera_position: Vec3) -> Result<Vec<bool>, TrackError> {
        simulation_step(
            &mut self.agents,
            dt,
            camera_position,
            &self.obstacles,
            &self.boundary,
            &self.params,
        );

        let wrapped: Vec<bool> = self
            .clocks
            .iter_mut()
            .map(|clock| clock.advance(dt))
            .collect();

        for (i, (track, clock)) in self.tracks.iter().zip(&self.clocks).enumerate() {
            self.bubble_positions[i] = track.sample(clock.t)?;
        }

        Ok(wrapped)
    }
}
