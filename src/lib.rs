pub mod classify;
pub mod distance;
pub mod error;
pub mod idx;
pub mod neighbors;
pub mod render;
pub mod vote;

// Everything downstream of the loaders assumes this fixed 28x28 image shape.
pub const IMAGE_SIDE: usize = 28;
pub const IMAGE_AREA: usize = IMAGE_SIDE * IMAGE_SIDE;

// Number of nearest reference images consulted for each vote.
pub const K_NEIGHBORS: usize = 5;
