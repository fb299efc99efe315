use tendril_core::direction::Face;
use tendril_core::event::WorldEvent;
use tendril_core::types::{BlockPos, CellState};

/// Read/write access to the world grid as seen by the spreading engine.
///
/// The engine never owns grid storage. Every call is synchronous and
/// takes effect immediately, so a later cursor in the same tick observes
/// earlier writes.
pub trait WorldAccess {
    /// Current state of a cell. Unknown cells read as air.
    fn get_cell(&self, pos: BlockPos) -> CellState;

    fn set_cell(&mut self, pos: BlockPos, state: CellState);

    /// Request a block tick at `pos` after `delay` ticks.
    fn schedule_tick(&mut self, pos: BlockPos, delay: u32);

    /// Whether the region containing `pos` is being simulated this tick.
    fn is_tick_due(&self, pos: BlockPos) -> bool;

    fn emit_event(&mut self, kind: WorldEvent, pos: BlockPos, payload: u32);

    /// Whether the cell at `pos` presents a full sturdy face on `face`.
    fn is_face_sturdy(&self, pos: BlockPos, face: Face) -> bool;
}
