//! The two demo scenes.
//!
//! Each scene owns its pipeline and mesh (built once, immutable) and records
//! one render pass per frame: clear color + depth, bind, upload matrices,
//! draw.

mod cube;
mod pass;
mod spin;
mod square;
mod transform;

pub use cube::CubeScene;
pub use square::SquareScene;
