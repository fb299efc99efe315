pub mod access;
pub mod chunk;
pub mod chunk_map;
pub mod grid;
pub mod terrain;

pub use access::WorldAccess;
pub use chunk::ChunkState;
pub use grid::{GridWorld, ScheduledTick};
pub use terrain::{FloorGenerator, FloorLayers};
