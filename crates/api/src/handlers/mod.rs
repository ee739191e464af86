pub mod marker;
pub mod scene;
pub mod tour;
