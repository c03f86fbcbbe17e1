pub mod capacity;
pub mod hide;
pub mod quality;
pub mod unveil;
