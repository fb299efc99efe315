use tendril_core::types::ChunkCoord;

/// Chunk ticking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkState {
    /// Not loaded; reads return air and nothing ticks.
    Unloaded,
    /// Loaded and inside simulation distance; block logic ticks.
    Active,
    /// Loaded but outside simulation distance; data is kept, nothing ticks.
    Static,
}

/// Per-chunk metadata.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub coord: ChunkCoord,
    pub state: ChunkState,
}

impl Chunk {
    pub fn new_active(coord: ChunkCoord) -> Self {
        Self {
            coord,
            state: ChunkState::Active,
        }
    }

    pub fn activate(&mut self) {
        self.state = ChunkState::Active;
    }

    /// Stop ticking while keeping data loaded.
    pub fn sleep(&mut self) {
        self.state = ChunkState::Static;
    }

    pub fn is_ticking(&self) -> bool {
        self.state == ChunkState::Active
    }
}
