use crate::types::BlockPos;

/// World-facing side effects emitted by the engine and its capabilities.
/// The host maps these onto sounds, particles or network packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldEvent {
    /// A cursor ran out of charge. Payload is always 0.
    CursorDespawn,
    /// Per-position charge feedback after a tick.
    /// Payload: `(intensity << 6) + packed faces`.
    ChargeFeedback,
    /// A capability converted cells at the cursor position.
    VeinSpread,
    /// A substrate capability placed a growth block. Payload: growth kind id.
    GrowthPlaced,
}

/// One emitted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
    pub kind: WorldEvent,
    pub pos: BlockPos,
    pub payload: u32,
}

/// Split a `ChargeFeedback` payload into (intensity, packed faces).
pub fn decode_feedback(payload: u32) -> (u32, u32) {
    (payload >> 6, payload & 0b11_1111)
}
