//! Work-item addressing and the launch driver.
//!
//! One work-item per work-group: a legal degenerate configuration of
//! the dispatch model that removes barriers and shared-local state
//! from the picture. Kernels still see the full query surface
//! (`global_id`, `local_size`, ...), they just observe group counts
//! equal to global sizes and local sizes pinned at 1.
//!
//! The context travels by reference into kernel code — no thread-local
//! ambient state, each invocation owns its own copy.

use rayon::prelude::*;

/// Maximum dispatch rank. Launch geometry beyond rank 3 does not exist
/// in the source model.
pub const MAX_DIM: usize = 3;

// ─── Context ───────────────────────────────────────────────────────

/// Per-invocation work-item addressing state.
///
/// Constructed once per launch, then re-pointed at successive
/// work-groups via [`DispatchContext::set_group_id`] or
/// [`DispatchContext::set_flat_group_id`]. All queries are pure reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchContext {
    work_dim: u32,
    global_offset: [usize; MAX_DIM],
    num_groups: [usize; MAX_DIM],
    group_id: [usize; MAX_DIM],
}

impl DispatchContext {
    /// Context for a `work_dim`-rank launch. Unused trailing dimensions
    /// of `num_groups` must be 1 and of `global_offset` must be 0.
    pub fn new(
        work_dim: u32,
        global_offset: [usize; MAX_DIM],
        num_groups: [usize; MAX_DIM],
    ) -> Self {
        debug_assert!((1..=MAX_DIM as u32).contains(&work_dim));
        debug_assert!(num_groups.iter().all(|&n| n > 0));
        Self {
            work_dim,
            global_offset,
            num_groups,
            group_id: [0; MAX_DIM],
        }
    }

    /// Point the context at one work-group.
    #[inline]
    pub fn set_group_id(&mut self, id: [usize; MAX_DIM]) {
        debug_assert!(
            id.iter().zip(&self.num_groups).all(|(&g, &n)| g < n),
            "group id {id:?} outside grid {:?}",
            self.num_groups
        );
        self.group_id = id;
    }

    /// Point the context at the work-group with flat index `k`,
    /// decomposed row-minor (x fastest).
    #[inline]
    pub fn set_flat_group_id(&mut self, k: usize) {
        let [nx, ny, nz] = self.num_groups;
        let z = k / (nx * ny);
        debug_assert!(z < nz, "flat group id {k} outside grid {:?}", self.num_groups);
        self.group_id = [k % nx, (k / nx) % ny, z];
    }

    /// Rank of the launch geometry.
    #[inline]
    pub fn work_dim(&self) -> u32 {
        self.work_dim
    }

    /// Global work-item id along `d`; 0 for `d >= work_dim`.
    ///
    /// With one work-item per group this is the group id plus the
    /// launch offset.
    #[inline]
    pub fn global_id(&self, d: u32) -> usize {
        if d < self.work_dim {
            self.group_id[d as usize] + self.global_offset[d as usize]
        } else {
            0
        }
    }

    /// Total work-items along `d`; 1 for `d >= work_dim`.
    #[inline]
    pub fn global_size(&self, d: u32) -> usize {
        if d < self.work_dim {
            self.num_groups[d as usize]
        } else {
            1
        }
    }

    /// Launch offset along `d`; 0 for `d >= work_dim`.
    #[inline]
    pub fn global_offset(&self, d: u32) -> usize {
        if d < self.work_dim {
            self.global_offset[d as usize]
        } else {
            0
        }
    }

    /// Work-group count along `d`; 1 for `d >= work_dim`.
    #[inline]
    pub fn num_groups(&self, d: u32) -> usize {
        self.global_size(d)
    }

    /// This invocation's work-group id along `d`; 0 for `d >= work_dim`.
    #[inline]
    pub fn group_id(&self, d: u32) -> usize {
        if d < self.work_dim {
            self.group_id[d as usize]
        } else {
            0
        }
    }

    /// Work-group extent along any `d`: always 1 on this backend.
    #[inline]
    pub fn local_size(&self, _d: u32) -> usize {
        1
    }

    /// Matches [`DispatchContext::local_size`]; no non-uniform trailing
    /// groups exist when every group is a single item.
    #[inline]
    pub fn enqueued_local_size(&self, d: u32) -> usize {
        self.local_size(d)
    }

    /// Position within the work-group: always 0.
    #[inline]
    pub fn local_id(&self, _d: u32) -> usize {
        0
    }

    /// Flat global id over the first `work_dim` dimensions, x fastest,
    /// not including the launch offset.
    #[inline]
    pub fn global_linear_id(&self) -> usize {
        let mut id = 0;
        let mut d = self.work_dim;
        while d > 0 {
            d -= 1;
            id = id * self.num_groups[d as usize] + self.group_id[d as usize];
        }
        id
    }

    /// Flat id within the work-group: always 0.
    #[inline]
    pub fn local_linear_id(&self) -> usize {
        0
    }
}

// ─── Launch driver ─────────────────────────────────────────────────

/// Launch geometry: per-dimension global sizes and offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDim {
    pub work_dim: u32,
    pub global_size: [usize; MAX_DIM],
    pub global_offset: [usize; MAX_DIM],
}

impl GridDim {
    pub fn d1(n: usize) -> Self {
        Self {
            work_dim: 1,
            global_size: [n, 1, 1],
            global_offset: [0; MAX_DIM],
        }
    }

    pub fn d2(nx: usize, ny: usize) -> Self {
        Self {
            work_dim: 2,
            global_size: [nx, ny, 1],
            global_offset: [0; MAX_DIM],
        }
    }

    pub fn d3(nx: usize, ny: usize, nz: usize) -> Self {
        Self {
            work_dim: 3,
            global_size: [nx, ny, nz],
            global_offset: [0; MAX_DIM],
        }
    }

    pub fn with_offset(mut self, offset: [usize; MAX_DIM]) -> Self {
        self.global_offset = offset;
        self
    }

    /// Total number of work-groups (= work-items) in the grid.
    pub fn total(&self) -> usize {
        self.global_size.iter().product()
    }
}

/// Run `kernel` once per work-item of `grid`, spread over the rayon
/// pool. Each invocation gets its own context already pointed at its
/// work-group; kernels run to completion with no cancellation points.
pub fn launch<K>(grid: GridDim, kernel: K)
where
    K: Fn(&DispatchContext) + Sync,
{
    let template = DispatchContext::new(grid.work_dim, grid.global_offset, grid.global_size);
    (0..grid.total()).into_par_iter().for_each(|k| {
        let mut ctx = template;
        ctx.set_flat_group_id(k);
        kernel(&ctx);
    });
}

// ─── Tests ─────────────────────────────────────────────────────────
