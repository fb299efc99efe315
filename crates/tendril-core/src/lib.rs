pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod event;
pub mod types;

pub use config::{load_config_from_str, ReplaceableSet, SpreaderConfig};
pub use direction::{Face, FaceSet, ALL_FACES, NON_CORNER_OFFSETS};
pub use error::ConfigError;
pub use event::{EventRecord, WorldEvent};
pub use types::{BlockKind, BlockPos, CellState, ChunkCoord};
