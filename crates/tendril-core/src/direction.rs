use glam::IVec3;
use std::fmt;

/// One of the 6 face directions of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    East = 4,
    West = 5,
}

/// All 6 faces in bit order.
pub const ALL_FACES: [Face; 6] = [
    Face::Down,
    Face::Up,
    Face::North,
    Face::South,
    Face::East,
    Face::West,
];

/// The 18 neighbor offsets a cursor may move along: 6 faces plus 12 edges.
/// Corners (all three axes non-zero) are excluded.
pub const NON_CORNER_OFFSETS: [IVec3; 18] = [
    // Faces
    IVec3::new(0, -1, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, -1),
    IVec3::new(0, 0, 1),
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    // Edges (down)
    IVec3::new(0, -1, -1),
    IVec3::new(0, -1, 1),
    IVec3::new(1, -1, 0),
    IVec3::new(-1, -1, 0),
    // Edges (up)
    IVec3::new(0, 1, -1),
    IVec3::new(0, 1, 1),
    IVec3::new(1, 1, 0),
    IVec3::new(-1, 1, 0),
    // Edges (lateral)
    IVec3::new(1, 0, -1),
    IVec3::new(-1, 0, -1),
    IVec3::new(1, 0, 1),
    IVec3::new(-1, 0, 1),
];

impl Face {
    /// Offset vector for this face. Y-up convention: Down = (0,-1,0).
    pub fn offset(self) -> IVec3 {
        match self {
            Face::Down => IVec3::new(0, -1, 0),
            Face::Up => IVec3::new(0, 1, 0),
            Face::North => IVec3::new(0, 0, -1),
            Face::South => IVec3::new(0, 0, 1),
            Face::East => IVec3::new(1, 0, 0),
            Face::West => IVec3::new(-1, 0, 0),
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Down => Face::Up,
            Face::Up => Face::Down,
            Face::North => Face::South,
            Face::South => Face::North,
            Face::East => Face::West,
            Face::West => Face::East,
        }
    }

    /// Face pointing along one axis. `axis` is 0 = X, 1 = Y, 2 = Z.
    /// Returns None for an out-of-range axis or a zero component.
    pub fn along_axis(axis: usize, sign: i32) -> Option<Face> {
        match (axis, sign.signum()) {
            (0, 1) => Some(Face::East),
            (0, -1) => Some(Face::West),
            (1, 1) => Some(Face::Up),
            (1, -1) => Some(Face::Down),
            (2, 1) => Some(Face::South),
            (2, -1) => Some(Face::North),
            _ => None,
        }
    }

    /// Lowercase name used in persisted records.
    pub fn name(self) -> &'static str {
        match self {
            Face::Down => "down",
            Face::Up => "up",
            Face::North => "north",
            Face::South => "south",
            Face::East => "east",
            Face::West => "west",
        }
    }

    pub fn from_name(name: &str) -> Option<Face> {
        ALL_FACES.into_iter().find(|f| f.name() == name)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of up to 6 faces, stored as a bitmask in face order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceSet(u8);

impl FaceSet {
    pub const EMPTY: FaceSet = FaceSet(0);
    pub const ALL: FaceSet = FaceSet(0b11_1111);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub fn contains(self, face: Face) -> bool {
        self.0 & face.bit() != 0
    }

    pub fn insert(&mut self, face: Face) {
        self.0 |= face.bit();
    }

    pub fn remove(&mut self, face: Face) {
        self.0 &= !face.bit();
    }

    pub fn with(mut self, face: Face) -> Self {
        self.insert(face);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Packed bitmask, one bit per face in `ALL_FACES` order.
    pub fn pack(self) -> u32 {
        self.0 as u32
    }

    pub fn iter(self) -> impl Iterator<Item = Face> {
        ALL_FACES.into_iter().filter(move |f| self.contains(*f))
    }
}

impl FromIterator<Face> for FaceSet {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        let mut set = FaceSet::EMPTY;
        for face in iter {
            set.insert(face);
        }
        set
    }
}
