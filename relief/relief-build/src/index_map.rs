//! Grid cell to vertex index mapping.

/// Maps grid cells to the 1-based index of their top-surface vertex.
///
/// Stored flat as `rows * cols` slots indexed by `row * cols + col`. Cells
/// without a finite height hold `None`.
///
/// Base vertices are not stored: the base vertex of a cell is always
/// `top + base_vertex_start - 1`, because base vertices are emitted in the
/// same order immediately after every top vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexIndexMap {
    rows: usize,
    cols: usize,
    slots: Vec<Option<u32>>,
    top_count: u32,
    base_start: Option<u32>,
}

impl VertexIndexMap {
    /// Build the map from a validity mask, numbering valid cells 1, 2, ...
    /// in row-major order.
    ///
    /// Returns `None` if there are more valid cells than `u32` can index.
    pub(crate) fn from_mask(rows: usize, cols: usize, valid: impl Iterator<Item = bool>) -> Option<Self> {
        let mut slots = Vec::with_capacity(rows * cols);
        let mut next: u32 = 0;
        for is_valid in valid.take(rows * cols) {
            if is_valid {
                next = next.checked_add(1)?;
                slots.push(Some(next));
            } else {
                slots.push(None);
            }
        }
        Some(Self {
            rows,
            cols,
            slots,
            top_count: next,
            base_start: None,
        })
    }

    /// Record that base vertices follow the top vertices.
    ///
    /// Returns `None` if the base block would overflow `u32` indices.
    pub(crate) fn with_base(mut self) -> Option<Self> {
        self.top_count.checked_mul(2)?;
        self.base_start = Some(self.top_count.checked_add(1)?);
        Some(self)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of top-surface vertices.
    #[must_use]
    pub const fn top_vertex_count(&self) -> u32 {
        self.top_count
    }

    /// 1-based index of the first base vertex, if a base was emitted.
    #[must_use]
    pub const fn base_vertex_start(&self) -> Option<u32> {
        self.base_start
    }

    /// 1-based top vertex index of `(row, col)`.
    #[inline]
    #[must_use]
    pub fn top(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.slots.get(row * self.cols + col).copied().flatten()
    }

    /// 1-based base vertex index of `(row, col)`.
    ///
    /// `None` for holes and when no base was emitted.
    #[inline]
    #[must_use]
    pub fn base(&self, row: usize, col: usize) -> Option<u32> {
        let top = self.top(row, col)?;
        Some(top + self.base_start? - 1)
    }

    /// Number of cells without a vertex.
    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Iterate over `(row, col, top_index)` for every cell with a vertex.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let cols = self.cols.max(1);
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.map(|idx| (i / cols, i % cols, idx)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn numbers_valid_cells_row_major() {
        let mask = [true, false, true, true];
        let map = VertexIndexMap::from_mask(2, 2, mask.into_iter()).unwrap();
        assert_eq!(map.top(0, 0), Some(1));
        assert_eq!(map.top(0, 1), None);
        assert_eq!(map.top(1, 0), Some(2));
        assert_eq!(map.top(1, 1), Some(3));
        assert_eq!(map.top(2, 0), None);
        assert_eq!(map.top_vertex_count(), 3);
        assert_eq!(map.hole_count(), 1);
    }

    #[test]
    fn base_is_fixed_offset_from_top() {
        let mask = [true, false, true, true];
        let map = VertexIndexMap::from_mask(2, 2, mask.into_iter())
            .unwrap()
            .with_base()
            .unwrap();
        assert_eq!(map.base_vertex_start(), Some(4));
        assert_eq!(map.base(0, 0), Some(4));
        assert_eq!(map.base(1, 1), Some(6));
        assert_eq!(map.base(0, 1), None);
    }

    #[test]
    fn no_base_without_with_base() {
        let map = VertexIndexMap::from_mask(1, 2, [true, true].into_iter()).unwrap();
        assert_eq!(map.base_vertex_start(), None);
        assert_eq!(map.base(0, 0), None);
    }

    #[test]
    fn iter_lists_valid_cells() {
        let mask = [false, true, true, false, true, false];
        let map = VertexIndexMap::from_mask(2, 3, mask.into_iter()).unwrap();
        let cells: Vec<_> = map.iter().collect();
        assert_eq!(cells, vec![(0, 1, 1), (0, 2, 2), (1, 1, 3)]);
    }
}
