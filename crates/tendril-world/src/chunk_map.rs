use crate::chunk::{Chunk, ChunkState};
use glam::IVec3;
use std::collections::HashMap;
use tendril_core::types::ChunkCoord;

/// Spatial container tracking which chunks are loaded and ticking.
#[derive(Debug, Default)]
pub struct ChunkMap {
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl ChunkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a chunk (transitions to Active). Loading an already loaded
    /// chunk leaves its state untouched.
    pub fn load_chunk(&mut self, coord: ChunkCoord) -> &mut Chunk {
        self.chunks
            .entry(coord)
            .or_insert_with(|| Chunk::new_active(coord))
    }

    pub fn unload_chunk(&mut self, coord: &ChunkCoord) -> Option<Chunk> {
        self.chunks.remove(coord)
    }

    pub fn get(&self, coord: &ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(coord)
    }

    pub fn get_mut(&mut self, coord: &ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(coord)
    }

    /// State of a chunk, `Unloaded` if it is not in the map.
    pub fn state(&self, coord: &ChunkCoord) -> ChunkState {
        self.chunks
            .get(coord)
            .map_or(ChunkState::Unloaded, |c| c.state)
    }

    /// Make chunks within `radius` (Chebyshev, in chunks) of `center` Active
    /// and every other loaded chunk Static.
    pub fn apply_simulation_distance(&mut self, center: ChunkCoord, radius: i32) {
        for (coord, chunk) in self.chunks.iter_mut() {
            let delta: IVec3 = (*coord - center).abs();
            if delta.max_element() <= radius {
                chunk.activate();
            } else {
                chunk.sleep();
            }
        }
    }

    /// Get counts: (total_loaded, active, static_count)
    pub fn chunk_counts(&self) -> (u32, u32, u32) {
        let mut active = 0u32;
        let mut static_count = 0u32;
        for chunk in self.chunks.values() {
            match chunk.state {
                ChunkState::Active => active += 1,
                ChunkState::Static => static_count += 1,
                ChunkState::Unloaded => {}
            }
        }
        (self.chunks.len() as u32, active, static_count)
    }
}
