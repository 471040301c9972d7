use strata_geom::Vec3;

/// The six face directions. Opposites sit on consecutive even/odd indices,
/// so `index ^ 1` flips a direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

/// Fixed meshing order: each direction is swept once per call.
pub const FACES: [Face; 6] = [
    Face::PosY,
    Face::NegY,
    Face::PosX,
    Face::NegX,
    Face::PosZ,
    Face::NegZ,
];

impl Face {
    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        match i {
            0 => Face::PosY,
            1 => Face::NegY,
            2 => Face::PosX,
            3 => Face::NegX,
            4 => Face::PosZ,
            5 => Face::NegZ,
            _ => Face::PosY,
        }
    }

    #[inline]
    pub fn opposite(self) -> Face {
        Face::from_index(self.index() ^ 1)
    }

    /// Whether this face points along the positive direction of its axis.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.index() & 1 == 0
    }

    /// `(depth, u, v)` axis indices (0 = x, 1 = y, 2 = z) for this face's
    /// slice space: masks are `dims[u] × dims[v]` and sweep along `depth`.
    #[inline]
    pub fn axes(self) -> (usize, usize, usize) {
        match self {
            Face::PosY | Face::NegY => (1, 0, 2),
            Face::PosX | Face::NegX => (0, 2, 1),
            Face::PosZ | Face::NegZ => (2, 0, 1),
        }
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (axis, _, _) = self.axes();
        Vec3::axis_unit(axis, self.is_positive())
    }

    /// Face-side aliases tried against the texture atlas, most canonical
    /// first: name, sign notation, numeric code.
    #[inline]
    pub fn side_aliases(self) -> [&'static str; 3] {
        match self {
            Face::PosY => ["top", "+y", "0"],
            Face::NegY => ["bottom", "-y", "1"],
            Face::PosX => ["east", "+x", "2"],
            Face::NegX => ["west", "-x", "3"],
            Face::PosZ => ["south", "+z", "4"],
            Face::NegZ => ["north", "-z", "5"],
        }
    }
}
