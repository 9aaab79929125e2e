use crate::math::Point;
use crate::transformation::voxelization::VoxelGrid;
use crate::utils::HashMap;

/// A box made of the cells from `mins` to `maxs`, both inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CellBox {
    pub mins: Point<i32>,
    pub maxs: Point<i32>,
}

impl CellBox {
    fn cell(cell: Point<i32>) -> Self {
        Self {
            mins: cell,
            maxs: cell,
        }
    }
}

/// One box per occupied cell, in scan order.
pub(crate) fn occupied_cells(grid: &VoxelGrid, occupancy: &[bool]) -> Vec<CellBox> {
    occupancy
        .iter()
        .enumerate()
        .filter(|(_, occupied)| **occupied)
        .map(|(i, _)| CellBox::cell(grid.cell_at(i)))
        .collect()
}

/// Greedily merges the occupied cells of `grid` into larger boxes.
///
/// Occupied cells are first merged into runs along `z`. Runs with the same `y` and `z` extents
/// are then merged along `x`, and the resulting slabs with the same `x` and `z` extents are
/// merged along `y`. Any fully occupied cuboid ends up as a single box, but the result isn’t
/// minimal in general. The boxes are returned sorted by their minimum cell.
pub(crate) fn simplify(grid: &VoxelGrid, occupancy: &[bool]) -> Vec<CellBox> {
    let runs = z_runs(grid, occupancy);
    let slabs = merge_along(runs, 0);
    let mut boxes = merge_along(slabs, 1);
    boxes.sort_by_key(|b| (b.mins.x, b.mins.y, b.mins.z));
    boxes
}

fn z_runs(grid: &VoxelGrid, occupancy: &[bool]) -> Vec<CellBox> {
    let mut runs: Vec<CellBox> = vec![];
    let mut open = false;

    for (i, occupied) in occupancy.iter().enumerate() {
        let cell = grid.cell_at(i);

        if !*occupied {
            open = false;
            continue;
        }

        match runs.last_mut() {
            // Consecutive occupied indices belong to the same run unless we just moved to the
            // next column.
            Some(last) if open && last.maxs.z + 1 == cell.z => {
                last.maxs.z = cell.z;
            }
            _ => runs.push(CellBox::cell(cell)),
        }

        open = true;
    }

    runs
}

/// Merges boxes that are contiguous along `axis` (0 for `x`, 1 for `y`) and share the same
/// extents along the two other axes.
fn merge_along(mut boxes: Vec<CellBox>, axis: usize) -> Vec<CellBox> {
    let other_axes = [(axis + 1) % 3, (axis + 2) % 3];
    let footprint = |b: &CellBox| {
        (
            b.mins[other_axes[0]],
            b.maxs[other_axes[0]],
            b.mins[other_axes[1]],
            b.maxs[other_axes[1]],
        )
    };

    boxes.sort_by_key(|b| (b.mins[axis], b.mins[other_axes[0]], b.mins[other_axes[1]]));

    let mut result: Vec<CellBox> = Vec::with_capacity(boxes.len());
    // Index, in `result`, of the last box with a given footprint.
    let mut open: HashMap<_, usize> = HashMap::default();

    for b in boxes {
        let key = footprint(&b);

        if let Some(&id) = open.get(&key) {
            let target = &mut result[id];
            if target.maxs[axis] + 1 == b.mins[axis] {
                target.maxs[axis] = b.maxs[axis];
                continue;
            }
        }

        let _ = open.insert(key, result.len());
        result.push(b);
    }

    result
}
