//! Sparse storage for penalty stiffness contributions
//!
//! Each assembler returns a [`StiffnessContribution`] in coordinate (COO)
//! format: three parallel sequences of row indices, column indices and
//! values for a `size x size` matrix. Unlisted entries are zero and repeated
//! `(row, col)` pairs are summed. The symmetric assemblers store only the
//! upper triangle; [`StiffnessContribution::mirrored`] and
//! [`SparseMatrixBuilder::finalize_symmetric`] restore the full matrix.

use crate::error::{ConnectionError, ConnectionResult};
use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CsrMatrix};

/// Coordinate-format stiffness contribution to a `size x size` system matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StiffnessContribution {
    size: usize,
    rows: Vec<usize>,
    cols: Vec<usize>,
    values: Vec<f64>,
}

impl StiffnessContribution {
    /// Empty contribution to a `size x size` matrix
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Build from already validated parallel sequences
    pub(crate) fn from_parts(
        size: usize,
        rows: Vec<usize>,
        cols: Vec<usize>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert!(rows.len() == cols.len() && cols.len() == values.len());
        Self {
            size,
            rows,
            cols,
            values,
        }
    }

    /// Concatenate triplet blocks in order
    pub(crate) fn from_blocks(size: usize, blocks: Vec<Vec<(usize, usize, f64)>>) -> Self {
        let nnz = blocks.iter().map(Vec::len).sum();
        let mut rows = Vec::with_capacity(nnz);
        let mut cols = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);
        for (row, col, value) in blocks.into_iter().flatten() {
            rows.push(row);
            cols.push(col);
            values.push(value);
        }
        Self::from_parts(size, rows, cols, values)
    }

    /// Dimension of the (square) system matrix
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of stored entries, explicit zeros included
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(row, col, value)` triplets in storage order
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.values)
            .map(|((&r, &c), &v)| (r, c, v))
    }

    /// True when no entry lies below the diagonal
    pub fn is_upper_triangular(&self) -> bool {
        self.triplets().all(|(r, c, _)| r <= c)
    }

    /// Append another contribution to the same system matrix
    pub fn extend(&mut self, other: &StiffnessContribution) -> ConnectionResult<()> {
        if other.size != self.size {
            return Err(ConnectionError::SizeMismatch {
                expected: self.size,
                found: other.size,
            });
        }
        self.rows.extend_from_slice(&other.rows);
        self.cols.extend_from_slice(&other.cols);
        self.values.extend_from_slice(&other.values);
        Ok(())
    }

    /// Full symmetric contribution: every off-diagonal entry is also stored transposed
    pub fn mirrored(&self) -> StiffnessContribution {
        let mut full = self.clone();
        for (r, c, v) in self.triplets().filter(|&(r, c, _)| r != c) {
            full.rows.push(c);
            full.cols.push(r);
            full.values.push(v);
        }
        full
    }

    /// Convert to a nalgebra-sparse COO matrix, keeping duplicates
    pub fn to_coo(&self) -> CooMatrix<f64> {
        let mut coo = CooMatrix::new(self.size, self.size);
        for (row, col, val) in self.triplets() {
            coo.push(row, col, val);
        }
        coo
    }

    /// Convert to CSR format, summing duplicates
    pub fn to_csr(&self) -> CsrMatrix<f64> {
        CsrMatrix::from(&self.to_coo())
    }

    /// Convert to dense matrix (for comparison/debugging)
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut mat = DMatrix::zeros(self.size, self.size);
        for (row, col, val) in self.triplets() {
            mat[(row, col)] += val;
        }
        mat
    }
}

/// Global matrix accumulator summing contributions from many connections
pub struct SparseMatrixBuilder {
    size: usize,
    entries: Vec<(usize, usize, f64)>,
}

impl SparseMatrixBuilder {
    /// Create a new sparse matrix builder
    pub fn new(size: usize) -> Self {
        Self {
            size,
            entries: Vec::new(),
        }
    }

    /// Add a value to the matrix (accumulates if already exists).
    /// Exact zeros are skipped, anything else is kept however small.
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        if value != 0.0 {
            self.entries.push((row, col, value));
        }
    }

    /// Sum a connection contribution into the matrix
    pub fn add_contribution(
        &mut self,
        contribution: &StiffnessContribution,
    ) -> ConnectionResult<()> {
        if contribution.size() != self.size {
            return Err(ConnectionError::SizeMismatch {
                expected: self.size,
                found: contribution.size(),
            });
        }
        self.entries.reserve(contribution.len());
        for (row, col, val) in contribution.triplets() {
            self.add(row, col, val);
        }
        Ok(())
    }

    /// Convert to CSR format, summing duplicates
    pub fn to_csr(&self) -> CsrMatrix<f64> {
        let mut coo = CooMatrix::new(self.size, self.size);
        for &(row, col, val) in &self.entries {
            coo.push(row, col, val);
        }
        CsrMatrix::from(&coo)
    }

    /// CSR matrix of the accumulated upper triangle reflected onto the lower one
    pub fn finalize_symmetric(&self) -> CsrMatrix<f64> {
        let mut coo = CooMatrix::new(self.size, self.size);
        for &(row, col, val) in &self.entries {
            coo.push(row, col, val);
            if row != col {
                coo.push(col, row, val);
            }
        }
        CsrMatrix::from(&coo)
    }

    /// Convert to dense matrix (for comparison/debugging)
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut mat = DMatrix::zeros(self.size, self.size);
        for &(row, col, val) in &self.entries {
            mat[(row, col)] += val;
        }
        mat
    }

    /// Number of accumulated entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Get sparsity ratio
    pub fn sparsity(&self) -> f64 {
        let total = self.size * self.size;
        1.0 - (self.entries.len() as f64 / total as f64)
    }
}
