use glam::IVec3;
use tendril_core::types::BlockKind;
use tendril_world::{FloorGenerator, FloorLayers, GridWorld};

/// Which standard spreader configuration a scene runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadMode {
    Level,
    WorldGeneration,
}

/// Configuration for a single benchmark scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub name: &'static str,
    pub mode: SpreadMode,
    /// Charge injected per burst.
    pub burst_charge: i32,
    /// Ticks between bursts. 0 means a single burst at tick 0.
    pub burst_interval: u64,
    /// Half-width of the generated floor.
    pub floor_radius: i32,
    /// Save and reload the cursor list at this tick.
    pub checkpoint_tick: Option<u64>,
    /// Only chunks within this many chunks of the origin tick.
    pub simulation_radius: Option<i32>,
}

impl SceneConfig {
    /// Whether a burst is injected on `tick`.
    pub fn bursts_on(&self, tick: u64) -> bool {
        if self.burst_interval == 0 {
            tick == 0
        } else {
            tick % self.burst_interval == 0
        }
    }
}

/// Return the standard suite of benchmark scenes.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "level-single-burst",
            mode: SpreadMode::Level,
            burst_charge: 1000,
            burst_interval: 0,
            floor_radius: 24,
            checkpoint_tick: None,
            simulation_radius: None,
        },
        SceneConfig {
            name: "level-saturated",
            mode: SpreadMode::Level,
            burst_charge: 5000,
            burst_interval: 10,
            floor_radius: 32,
            checkpoint_tick: Some(60),
            simulation_radius: None,
        },
        SceneConfig {
            name: "level-simulation-distance",
            mode: SpreadMode::Level,
            burst_charge: 5000,
            burst_interval: 10,
            floor_radius: 48,
            checkpoint_tick: None,
            simulation_radius: Some(1),
        },
        SceneConfig {
            name: "world-generation",
            mode: SpreadMode::WorldGeneration,
            burst_charge: 3000,
            burst_interval: 0,
            floor_radius: 20,
            checkpoint_tick: None,
            simulation_radius: None,
        },
    ]
}

/// Kinds the scene floor is built from.
#[derive(Debug, Clone, Copy)]
pub struct FloorKinds {
    pub fill: BlockKind,
    pub top: BlockKind,
}

/// Generate the scene floor and return the spreader origin: the air cell
/// just above the surface at the centre column.
pub fn build_floor(
    world: &mut GridWorld,
    config: &SceneConfig,
    seed: u64,
    kinds: FloorKinds,
) -> IVec3 {
    let gen = FloorGenerator::new(seed as u32).with_amplitude(3);
    let r = config.floor_radius;
    gen.generate(
        world,
        (-r, -r),
        (r, r),
        0,
        4,
        FloorLayers {
            fill: kinds.fill,
            top: kinds.top,
        },
    );
    IVec3::new(0, gen.column_height(0, 0) + 1, 0)
}
