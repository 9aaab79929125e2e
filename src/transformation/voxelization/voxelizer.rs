use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector};
use crate::query::{self, Ray, RayHit};
use crate::shape::Mesh;
use crate::transformation::voxelization::voxel_simplification::{self, CellBox};
use crate::transformation::voxelization::voxelization_task::SharedState;
use crate::transformation::voxelization::{
    CancellationToken, VoxelGrid, VoxelizationError, VoxelizationErrorKind, VoxelizerState,
};
use smallvec::SmallVec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parameters of a [`Voxelizer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct VoxelizerConfig {
    /// The number of voxels per unit length.
    ///
    /// Must be at least 1.
    /// Default: 16
    pub resolution: u32,
    /// Merge the occupied voxels into larger boxes.
    ///
    /// Default: true
    pub simplify: bool,
    /// The maximum number of cells of the voxelization grid. Larger grids are rejected before
    /// any cell is classified.
    ///
    /// Default: None (no limit)
    pub max_cells: Option<u64>,
}

impl Default for VoxelizerConfig {
    fn default() -> Self {
        Self {
            resolution: 16,
            simplify: true,
            max_cells: None,
        }
    }
}

/// The complete result of a voxelization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Voxelization {
    grid: VoxelGrid,
    occupancy: Vec<bool>,
    boxes: Vec<Aabb>,
}

impl Voxelization {
    /// The grid that was scanned.
    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// The occupancy of every cell of the grid, in scan order.
    #[inline]
    pub fn occupancy(&self) -> &[bool] {
        &self.occupancy
    }

    /// Is the given cell occupied? Cells outside of the grid are never occupied.
    pub fn is_occupied(&self, cell: &Point<i32>) -> bool {
        self.grid
            .linear_index(cell)
            .map(|i| self.occupancy[i])
            .unwrap_or(false)
    }

    /// The coordinates of every occupied cell, in scan order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Point<i32>> + '_ {
        self.grid
            .cells()
            .zip(self.occupancy.iter())
            .filter(|(_, occupied)| **occupied)
            .map(|(cell, _)| cell)
    }

    /// The number of occupied cells.
    pub fn num_occupied(&self) -> usize {
        self.occupancy.iter().filter(|o| **o).count()
    }

    /// The boxes covering the occupied cells.
    #[inline]
    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    /// Consumes `self` and returns the boxes covering the occupied cells.
    pub fn into_boxes(self) -> Vec<Aabb> {
        self.boxes
    }
}

/// Converts a mesh into a set of axis-aligned boxes laid on a regular grid.
///
/// A cell of the grid is occupied if the mesh surface crosses it, or if its center lies inside
/// of the mesh. The inside test casts a ray along `+X` toward the cell center and looks at the
/// orientation of the nearest polygons hit, so the mesh is expected to be closed with outward
/// normals for interior cells to be detected.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use meshvox3d::math::Point;
/// use meshvox3d::shape::{MeshBuilder, PolygonData};
/// use meshvox3d::transformation::voxelization::{Voxelizer, VoxelizerConfig};
///
/// let mut builder = MeshBuilder::new("triangle");
/// builder.push_triangle_face(
///     [
///         Point::new(0.1, 0.1, 0.6),
///         Point::new(0.9, 0.1, 0.6),
///         Point::new(0.1, 0.9, 0.6),
///     ],
///     PolygonData::default(),
/// );
/// let mesh = builder.build().unwrap();
///
/// let config = VoxelizerConfig { resolution: 2, simplify: false, ..Default::default() };
/// let voxelization = Voxelizer::new(&mesh, config).unwrap().run().unwrap();
/// assert!(voxelization.is_occupied(&Point::new(0, 0, 1)));
/// assert!(!voxelization.is_occupied(&Point::new(2, 2, 1)));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Voxelizer<'a> {
    mesh: &'a Mesh,
    config: VoxelizerConfig,
    grid: VoxelGrid,
    cancel: CancellationToken,
    state: SharedState,
}

impl<'a> Voxelizer<'a> {
    /// Prepares the voxelization of `mesh`.
    ///
    /// This computes the voxelization grid and checks it against the configuration, without
    /// classifying any cell.
    pub fn new(mesh: &'a Mesh, config: VoxelizerConfig) -> Result<Self, VoxelizationError> {
        let grid = VoxelGrid::new(mesh.local_aabb(), config.resolution)
            .map_err(|kind| Self::failure(mesh, kind))?;

        if let Some(max_cells) = config.max_cells {
            if grid.len() > max_cells {
                return Err(Self::failure(
                    mesh,
                    VoxelizationErrorKind::GridTooLarge {
                        num_cells: grid.len(),
                        max_cells,
                    },
                ));
            }
        }

        if grid.len() > usize::MAX as u64 {
            return Err(Self::failure(
                mesh,
                VoxelizationErrorKind::GridTooLarge {
                    num_cells: grid.len(),
                    max_cells: usize::MAX as u64,
                },
            ));
        }

        Ok(Self {
            mesh,
            config,
            grid,
            cancel: CancellationToken::new(),
            state: SharedState::new(),
        })
    }

    /// Makes this voxelizer stop as soon as `token` is cancelled.
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub(crate) fn with_shared_state(mut self, state: SharedState) -> Self {
        self.state = state;
        self
    }

    /// The mesh being voxelized.
    #[inline]
    pub fn mesh(&self) -> &'a Mesh {
        self.mesh
    }

    /// The configuration of this voxelizer.
    #[inline]
    pub fn config(&self) -> &VoxelizerConfig {
        &self.config
    }

    /// The grid scanned by this voxelizer.
    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// The token that can be used to cancel this voxelizer.
    #[inline]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// The progress of the last run of this voxelizer.
    #[inline]
    pub fn state(&self) -> VoxelizerState {
        self.state.get()
    }

    /// Voxelizes the mesh and returns the boxes covering its occupied cells.
    ///
    /// Without simplification, there is one box per occupied cell, in scan order. Otherwise the
    /// merged boxes are sorted by their minimum corner.
    pub fn voxelize(&self) -> Result<Vec<Aabb>, VoxelizationError> {
        self.run().map(Voxelization::into_boxes)
    }

    /// Voxelizes the mesh and returns the occupancy of every cell along with the final boxes.
    pub fn run(&self) -> Result<Voxelization, VoxelizationError> {
        self.state.set(VoxelizerState::Scanning);
        log::debug!(
            "Voxelizing mesh {} with {} polygons on a {:?} grid at resolution {}.",
            self.mesh.name(),
            self.mesh.polygons().len(),
            self.grid.dimensions().as_slice(),
            self.grid.resolution(),
        );

        match self.scan() {
            Ok(occupancy) => {
                self.state.set(VoxelizerState::Aggregating);
                let cell_boxes = if self.config.simplify {
                    voxel_simplification::simplify(&self.grid, &occupancy)
                } else {
                    voxel_simplification::occupied_cells(&self.grid, &occupancy)
                };
                let boxes: Vec<_> = cell_boxes
                    .iter()
                    .map(|b: &CellBox| self.grid.cells_aabb(&b.mins, &b.maxs))
                    .collect();

                log::debug!(
                    "Voxelized mesh {} into {} boxes.",
                    self.mesh.name(),
                    boxes.len()
                );
                self.state.set(VoxelizerState::Done);

                Ok(Voxelization {
                    grid: self.grid,
                    occupancy,
                    boxes,
                })
            }
            Err(kind) => {
                self.state.set(VoxelizerState::Failed);
                let err = self.error(kind);
                log::error!("{}: {}", err, kind);
                Err(err)
            }
        }
    }

    fn scan(&self) -> Result<Vec<bool>, VoxelizationErrorKind> {
        let num_cells = self.grid.len() as usize;

        #[cfg(feature = "parallel")]
        let occupancy = (0..num_cells)
            .into_par_iter()
            .map(|i| self.classify_cell(i))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let occupancy = (0..num_cells).map(|i| self.classify_cell(i)).collect();

        occupancy
    }

    fn classify_cell(&self, index: usize) -> Result<bool, VoxelizationErrorKind> {
        if self.cancel.is_cancelled() {
            return Err(VoxelizationErrorKind::Cancelled);
        }

        let cell = self.grid.cell_at(index);
        let occupied = self.classify_box(&self.grid.cell_aabb(&cell))?;
        log::trace!("Cell {} occupied: {}", cell, occupied);
        Ok(occupied)
    }

    fn classify_box(&self, aabb: &Aabb) -> Result<bool, VoxelizationErrorKind> {
        Ok(self.box_intersects_surface(aabb) || self.is_point_inside(&aabb.center())?)
    }

    /// Is the voxel `aabb` occupied, i.e., does it intersect the mesh surface or is its center
    /// inside of the mesh?
    pub fn is_box_valid_voxel(&self, aabb: &Aabb) -> Result<bool, VoxelizationError> {
        self.classify_box(aabb).map_err(|kind| self.error(kind))
    }

    /// Does any polygon of the mesh intersect `aabb`?
    ///
    /// Candidate polygons are searched in `aabb` shrunk by `1 / 64` of a voxel on each side, so
    /// polygons only grazing its boundary are ignored. The candidates are then tested against
    /// the whole box.
    pub fn does_box_intersect(&self, aabb: &Aabb) -> bool {
        self.box_intersects_surface(aabb)
    }

    /// Is `point` inside of the mesh?
    ///
    /// This looks at the polygons hit by a ray cast along `+X` from outside of the mesh bounds
    /// toward `point`, keeping only the ones closest to `point`. The point is inside if any of
    /// them faces it.
    pub fn is_point_inside_mesh(&self, point: &Point<Real>) -> Result<bool, VoxelizationError> {
        self.is_point_inside(point).map_err(|kind| self.error(kind))
    }

    /// The hits, closest to `point`, of the ray used to decide if `point` is inside of the mesh.
    ///
    /// Hit points are rounded (see [`RayHit::rounded`]) so hits on coincident polygons are tied.
    pub fn interior_hits(
        &self,
        point: &Point<Real>,
    ) -> Result<SmallVec<[RayHit<'a>; 4]>, VoxelizationError> {
        self.closest_hits(point).map_err(|kind| self.error(kind))
    }

    fn box_intersects_surface(&self, aabb: &Aabb) -> bool {
        // Polygons lying on the boundary between two cells must not occupy both.
        let margin = self.grid.voxel_size() / 64.0;
        let query = aabb.tightened(margin);

        self.mesh
            .search(&query)
            .any(|polygon| query::intersection_test_aabb_polygon(aabb, &polygon.shape))
    }

    fn is_point_inside(&self, point: &Point<Real>) -> Result<bool, VoxelizationErrorKind> {
        Ok(self
            .closest_hits(point)?
            .iter()
            .any(|hit| hit.is_facing(point)))
    }

    fn closest_hits(
        &self,
        point: &Point<Real>,
    ) -> Result<SmallVec<[RayHit<'a>; 4]>, VoxelizationErrorKind> {
        let origin = Point::new(self.mesh.local_aabb().mins.x - 1.0, point.y, point.z);
        let ray = Ray::new(origin, Vector::x());
        let mut closest = SmallVec::new();
        let mut min_dist = Real::MAX;

        for hit in self.mesh.cast_ray(&ray) {
            let hit = hit.rounded();
            let dist = hit
                .distance_to(point)
                .ok_or(VoxelizationErrorKind::NonFiniteDistance { center: *point })?;

            if !dist.is_finite() {
                return Err(VoxelizationErrorKind::NonFiniteDistance { center: *point });
            }

            if dist < min_dist {
                min_dist = dist;
                closest.clear();
            }

            if dist == min_dist {
                closest.push(hit);
            }
        }

        Ok(closest)
    }

    fn error(&self, kind: VoxelizationErrorKind) -> VoxelizationError {
        Self::failure(self.mesh, kind)
    }

    fn failure(mesh: &Mesh, kind: VoxelizationErrorKind) -> VoxelizationError {
        VoxelizationError::new(mesh.name(), kind)
    }
}
