use std::collections::{HashMap, HashSet};

use glam::IVec3;
use tendril_core::direction::Face;
use tendril_core::event::{EventRecord, WorldEvent};
use tendril_core::types::{chunk_of, BlockKind, BlockPos, CellState, ChunkCoord};

use crate::access::WorldAccess;
use crate::chunk::ChunkState;
use crate::chunk_map::ChunkMap;

/// A block tick requested through [`WorldAccess::schedule_tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub pos: BlockPos,
    pub due_tick: u64,
}

/// Sparse in-memory world. Cells not stored read as air.
///
/// Writing a cell loads its chunk. Kinds registered as solid are full
/// cubes and present a sturdy face on every side.
#[derive(Debug, Default)]
pub struct GridWorld {
    cells: HashMap<BlockPos, CellState>,
    chunk_map: ChunkMap,
    solid_kinds: HashSet<BlockKind>,
    scheduled: Vec<ScheduledTick>,
    events: Vec<EventRecord>,
    tick: u64,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world where the given kinds are solid full cubes.
    pub fn with_solid_kinds(kinds: impl IntoIterator<Item = BlockKind>) -> Self {
        Self {
            solid_kinds: kinds.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn mark_solid(&mut self, kind: BlockKind) {
        self.solid_kinds.insert(kind);
    }

    pub fn is_solid(&self, kind: BlockKind) -> bool {
        self.solid_kinds.contains(&kind)
    }

    /// Fill the inclusive box `[min, max]` with `state`.
    pub fn fill_box(&mut self, min: BlockPos, max: BlockPos, state: CellState) {
        let lo = min.min(max);
        let hi = min.max(max);
        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                for z in lo.z..=hi.z {
                    self.set_cell(IVec3::new(x, y, z), state);
                }
            }
        }
    }

    /// Number of stored cells of a given kind.
    pub fn count_kind(&self, kind: BlockKind) -> usize {
        self.cells.values().filter(|c| c.kind == kind).count()
    }

    /// Positions of all stored cells of a given kind.
    pub fn positions_of(&self, kind: BlockKind) -> Vec<BlockPos> {
        self.cells
            .iter()
            .filter(|(_, c)| c.kind == kind)
            .map(|(p, _)| *p)
            .collect()
    }

    /// Loaded chunk counts: (total, active, static).
    pub fn chunk_counts(&self) -> (u32, u32, u32) {
        self.chunk_map.chunk_counts()
    }

    /// Keep only chunks within `radius` chunks of `center` ticking.
    pub fn apply_simulation_distance(&mut self, center: BlockPos, radius: i32) {
        self.chunk_map.apply_simulation_distance(chunk_of(center), radius);
    }

    /// Stop ticking the chunk containing `pos` without unloading it.
    pub fn sleep_chunk_at(&mut self, pos: BlockPos) {
        if let Some(chunk) = self.chunk_map.get_mut(&chunk_of(pos)) {
            chunk.sleep();
        }
    }

    /// Unload a chunk, dropping its cells.
    pub fn unload_chunk(&mut self, coord: ChunkCoord) {
        if self.chunk_map.unload_chunk(&coord).is_some() {
            self.cells.retain(|pos, _| chunk_of(*pos) != coord);
            self.scheduled.retain(|t| chunk_of(t.pos) != coord);
        }
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn events_of(&self, kind: WorldEvent) -> impl Iterator<Item = &EventRecord> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.events)
    }

    pub fn scheduled_ticks(&self) -> &[ScheduledTick] {
        &self.scheduled
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Advance the world clock by one tick and return block ticks that came due.
    pub fn advance_tick(&mut self) -> Vec<ScheduledTick> {
        self.tick += 1;
        let now = self.tick;
        let (due, pending): (Vec<_>, Vec<_>) =
            self.scheduled.drain(..).partition(|t| t.due_tick <= now);
        self.scheduled = pending;
        due
    }
}

impl WorldAccess for GridWorld {
    fn get_cell(&self, pos: BlockPos) -> CellState {
        if self.chunk_map.state(&chunk_of(pos)) == ChunkState::Unloaded {
            return CellState::AIR;
        }
        self.cells.get(&pos).copied().unwrap_or(CellState::AIR)
    }

    fn set_cell(&mut self, pos: BlockPos, state: CellState) {
        self.chunk_map.load_chunk(chunk_of(pos));
        if state.is_air() {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, state);
        }
    }

    fn schedule_tick(&mut self, pos: BlockPos, delay: u32) {
        self.scheduled.push(ScheduledTick {
            pos,
            due_tick: self.tick + delay as u64,
        });
    }

    fn is_tick_due(&self, pos: BlockPos) -> bool {
        self.chunk_map
            .get(&chunk_of(pos))
            .is_some_and(|c| c.is_ticking())
    }

    fn emit_event(&mut self, kind: WorldEvent, pos: BlockPos, payload: u32) {
        self.events.push(EventRecord { kind, pos, payload });
    }

    fn is_face_sturdy(&self, pos: BlockPos, _face: Face) -> bool {
        self.is_solid(self.get_cell(pos).kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STONE: BlockKind = BlockKind(1);

    #[test]
    fn test_unknown_cells_read_as_air() {
        let world = GridWorld::new();
        assert!(world.get_cell(IVec3::new(3, -4, 5)).is_air());
        assert!(!world.is_tick_due(IVec3::new(3, -4, 5)));
    }

    #[test]
    fn test_set_cell_loads_chunk_and_ticks() {
        let mut world = GridWorld::new();
        let pos = IVec3::new(20, 0, -3);
        world.set_cell(pos, CellState::of(STONE));
        assert_eq!(world.get_cell(pos).kind, STONE);
        assert!(world.is_tick_due(pos));
        assert_eq!(world.chunk_counts(), (1, 1, 0));

        world.set_cell(pos, CellState::AIR);
        assert!(world.get_cell(pos).is_air());
        assert!(world.is_tick_due(pos), "clearing a cell keeps its chunk loaded");
    }

    #[test]
    fn test_simulation_distance_stops_far_chunks() {
        let mut world = GridWorld::new();
        let near = IVec3::new(5, 0, 5);
        let far = IVec3::new(70, 0, 0);
        world.set_cell(near, CellState::of(STONE));
        world.set_cell(far, CellState::of(STONE));

        world.apply_simulation_distance(IVec3::ZERO, 1);
        assert!(world.is_tick_due(near));
        assert!(!world.is_tick_due(far));
        assert_eq!(world.get_cell(far).kind, STONE);
        assert_eq!(world.chunk_counts(), (2, 1, 1));
    }

    #[test]
    fn test_sleeping_chunk_is_not_due() {
        let mut world = GridWorld::new();
        let pos = IVec3::new(1, 1, 1);
        world.set_cell(pos, CellState::of(STONE));
        world.sleep_chunk_at(pos);
        assert!(!world.is_tick_due(pos));
        assert_eq!(world.get_cell(pos).kind, STONE, "static chunks keep data");
    }

    #[test]
    fn test_unload_chunk_drops_cells() {
        let mut world = GridWorld::new();
        let pos = IVec3::new(1, 1, 1);
        world.set_cell(pos, CellState::of(STONE));
        world.unload_chunk(chunk_of(pos));
        assert!(world.get_cell(pos).is_air());
        assert_eq!(world.count_kind(STONE), 0);
    }

    #[test]
    fn test_sturdy_faces_follow_solid_kinds() {
        let mut world = GridWorld::with_solid_kinds([STONE]);
        let pos = IVec3::new(0, 0, 0);
        world.set_cell(pos, CellState::of(STONE));
        world.set_cell(IVec3::X, CellState::of(BlockKind(7)));
        assert!(world.is_face_sturdy(pos, Face::Up));
        assert!(!world.is_face_sturdy(IVec3::X, Face::Up));
        assert!(!world.is_face_sturdy(IVec3::Y, Face::Down));
    }

    #[test]
    fn test_fill_box_inclusive() {
        let mut world = GridWorld::new();
        world.fill_box(IVec3::new(2, 0, 2), IVec3::new(0, 1, 0), CellState::of(STONE));
        assert_eq!(world.count_kind(STONE), 3 * 2 * 3);
    }

    #[test]
    fn test_scheduled_ticks_come_due() {
        let mut world = GridWorld::new();
        world.schedule_tick(IVec3::ZERO, 2);
        assert!(world.advance_tick().is_empty());
        let due = world.advance_tick();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].pos, IVec3::ZERO);
        assert!(world.scheduled_ticks().is_empty());
    }

    #[test]
    fn test_events_recorded_and_drained() {
        let mut world = GridWorld::new();
        world.emit_event(WorldEvent::CursorDespawn, IVec3::ZERO, 0);
        world.emit_event(WorldEvent::ChargeFeedback, IVec3::ONE, 65);
        assert_eq!(world.events_of(WorldEvent::ChargeFeedback).count(), 1);
        let drained = world.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(world.events().is_empty());
    }
}
