use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::transformation::voxelization::VoxelizationErrorKind;
use crate::utils;

/// A regular grid of cubic cells of side `1 / resolution`, aligned on the world origin.
///
/// The cell with integer coordinates `(i, j, k)` spans `[i, i + 1] / resolution` along `x`
/// (and similarly along `y` and `z`). The cells of the grid are the ones between
/// [`VoxelGrid::mins`] and [`VoxelGrid::maxs`], both inclusive. They are enumerated in scan
/// order: `x` varies slowest and `z` fastest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelGrid {
    mins: Point<i32>,
    maxs: Point<i32>,
    resolution: u32,
}

impl VoxelGrid {
    /// The grid covering `bounds` at the given resolution.
    ///
    /// Along each axis, the grid spans the cells from `round_half_up(bounds.mins * resolution)`
    /// to `round_half_up(bounds.maxs * resolution)`. If `bounds` is invalid (e.g. the bounds of
    /// an empty mesh), the grid is empty.
    pub fn new(bounds: &Aabb, resolution: u32) -> Result<Self, VoxelizationErrorKind> {
        if resolution == 0 {
            return Err(VoxelizationErrorKind::InvalidResolution);
        }

        if !bounds.is_valid() {
            return Ok(Self::empty(resolution));
        }

        let scale = resolution as Real;
        let to_cell = |x: Real| -> Result<i32, VoxelizationErrorKind> {
            let cell = utils::round_half_up(x * scale);

            // The upper bound is exclusive because `i32::MAX as Real` rounds up with `f32`.
            if cell.is_finite() && cell >= i32::MIN as Real && cell < i32::MAX as Real {
                Ok(cell as i32)
            } else {
                Err(VoxelizationErrorKind::BoundsOutOfRange { resolution })
            }
        };

        let mut mins = Point::origin();
        let mut maxs = Point::origin();

        for i in 0..3 {
            mins[i] = to_cell(bounds.mins[i])?;
            maxs[i] = to_cell(bounds.maxs[i])?;
        }

        Ok(Self {
            mins,
            maxs,
            resolution,
        })
    }

    /// A grid without any cell.
    pub fn empty(resolution: u32) -> Self {
        Self {
            mins: Point::origin(),
            maxs: Point::new(-1, -1, -1),
            resolution,
        }
    }

    /// The coordinates of the first cell of the grid.
    #[inline]
    pub fn mins(&self) -> Point<i32> {
        self.mins
    }

    /// The coordinates of the last cell of the grid.
    #[inline]
    pub fn maxs(&self) -> Point<i32> {
        self.maxs
    }

    /// The number of cells per unit length.
    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The side length of each cell.
    #[inline]
    pub fn voxel_size(&self) -> Real {
        1.0 / self.resolution as Real
    }

    /// The number of cells along each axis.
    pub fn dimensions(&self) -> Vector<u64> {
        // The span of the grid doesn't always fit in an `i32`.
        Vector::from_fn(|i, _| (self.maxs[i] as i64 - self.mins[i] as i64 + 1).max(0) as u64)
    }

    /// The total number of cells of this grid.
    pub fn len(&self) -> u64 {
        let dims = self.dimensions();
        dims.x.saturating_mul(dims.y).saturating_mul(dims.z)
    }

    /// Does this grid have no cell at all?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Is the cell with coordinates `cell` part of this grid?
    pub fn contains(&self, cell: &Point<i32>) -> bool {
        (0..3).all(|i| cell[i] >= self.mins[i] && cell[i] <= self.maxs[i])
    }

    /// The scan-order index of `cell`, or `None` if it isn’t part of this grid.
    pub fn linear_index(&self, cell: &Point<i32>) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }

        let dims = self.dimensions();
        let local = Vector::<u64>::from_fn(|i, _| (cell[i] as i64 - self.mins[i] as i64) as u64);
        let index = (local.x * dims.y + local.y) * dims.z + local.z;
        Some(index as usize)
    }

    /// The coordinates of the cell with the given scan-order index.
    ///
    /// The index must be smaller than [`VoxelGrid::len`].
    pub fn cell_at(&self, index: usize) -> Point<i32> {
        let dims = self.dimensions();
        let index = index as u64;
        let z = index % dims.z;
        let y = (index / dims.z) % dims.y;
        let x = index / (dims.z * dims.y);

        Point::new(
            (self.mins.x as i64 + x as i64) as i32,
            (self.mins.y as i64 + y as i64) as i32,
            (self.mins.z as i64 + z as i64) as i32,
        )
    }

    /// Iterates through the coordinates of every cell, in scan order.
    pub fn cells(&self) -> impl Iterator<Item = Point<i32>> + '_ {
        (0..self.len() as usize).map(move |i| self.cell_at(i))
    }

    /// The box covered by the cell with coordinates `cell`.
    pub fn cell_aabb(&self, cell: &Point<i32>) -> Aabb {
        self.cells_aabb(cell, cell)
    }

    /// The box covered by every cell from `first` to `last`, both inclusive.
    pub fn cells_aabb(&self, first: &Point<i32>, last: &Point<i32>) -> Aabb {
        let scale = self.resolution as Real;
        Aabb::new(
            first.map(|i| i as Real / scale),
            last.map(|i| (i as i64 + 1) as Real / scale),
        )
    }
}
