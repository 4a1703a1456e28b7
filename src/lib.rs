/*
 * Underwater Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the aquarium simulation core.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use agent::Agent;
pub use boundary::Boundary;
pub use keyframe::{KeyframeTrack, TrackClock, TrackError};
pub use params::SimulationParams;
pub use scene::{Obstacle, Scene, SceneConfig};

// Define modules
pub mod agent;
pub mod boundary;
pub mod decay;
pub mod keyframe;
pub mod params;
pub mod physics;
pub mod placement;
pub mod scene;
pub mod terrain;

// Constants
pub const WORLD_SIZE: f32 = 30.0;
