//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod scene_repo;
pub mod tour_repo;
pub mod user_repo;

pub use scene_repo::SceneRepo;
pub use tour_repo::TourRepo;
pub use user_repo::UserRepo;
