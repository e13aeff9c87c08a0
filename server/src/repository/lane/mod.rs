//! Lane Repository
//!
//! Core CRUD in `lane_repo`, position management in `lane_positioning`.

mod lane_positioning;
mod lane_repo;

pub use lane_positioning::LanePositioningOperations;
pub use lane_repo::LaneRepository;

pub(in crate::repository) use lane_repo::load_lanes_for_board;
