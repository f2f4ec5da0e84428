//! Dense row-major views over complex double-precision buffers.
//!
//! [`ComplexView`] borrows a caller-owned buffer together with its shape and
//! never mutates it. [`ComplexMatrix`] is the owned counterpart handed back to
//! callers by the operator factories.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LphiError};

/// Complex scalar stored as an IEEE-754 `(re, im)` pair.
pub type Complex = Complex64;

fn overflow_error(shape: &[usize]) -> LphiError {
    LphiError::Shape(
        ErrorInfo::new("shape-buffer", "shape element count overflows")
            .with_context("shape", format!("{shape:?}")),
    )
}

fn element_count(shape: &[usize]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

/// Allocates a zero-filled buffer of `len` scalars, reporting allocation
/// failure instead of aborting.
pub fn alloc_zeroed(what: &str, len: usize) -> Result<Vec<Complex>, LphiError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| LphiError::out_of_memory(what, len))?;
    buffer.resize(len, Complex::new(0.0, 0.0));
    Ok(buffer)
}

/// Read-only view over a contiguous row-major buffer of complex scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexView<'a> {
    data: &'a [Complex],
    shape: Box<[usize]>,
}

impl<'a> ComplexView<'a> {
    /// Creates a view with an arbitrary shape.
    ///
    /// Fails with a shape error when the product of `shape` differs from the
    /// buffer length, so element access can never leave the buffer.
    pub fn new(data: &'a [Complex], shape: &[usize]) -> Result<Self, LphiError> {
        let Some(expected) = element_count(shape) else {
            return Err(overflow_error(shape));
        };
        if expected != data.len() {
            return Err(LphiError::Shape(
                ErrorInfo::new("shape-buffer", "buffer length does not match shape")
                    .with_context("shape", format!("{shape:?}"))
                    .with_context("len", data.len()),
            ));
        }
        Ok(Self {
            data,
            shape: shape.into(),
        })
    }

    /// Creates a one-dimensional view spanning the whole buffer.
    pub fn vector(data: &'a [Complex]) -> Self {
        Self {
            data,
            shape: Box::new([data.len()]),
        }
    }

    /// Creates a two-dimensional `rows x cols` view.
    pub fn matrix(data: &'a [Complex], rows: usize, cols: usize) -> Result<Self, LphiError> {
        Self::new(data, &[rows, cols])
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Extent of every dimension.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of scalars in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the view holds no scalars.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrowed row-major buffer.
    pub fn as_slice(&self) -> &'a [Complex] {
        self.data
    }

    /// Returns the element at a multi-dimensional index, or `None` when the
    /// index arity or any coordinate is out of range.
    pub fn get(&self, index: &[usize]) -> Option<Complex> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0usize;
        for (&idx, &dim) in index.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return None;
            }
            offset = offset * dim + idx;
        }
        self.data.get(offset).copied()
    }

    /// Element `i` of a vector view. Panics when out of range.
    #[inline]
    pub fn at(&self, i: usize) -> Complex {
        self.data[i]
    }

    /// Element `(i, j)` of an `n x n` matrix view, addressed as `data[i * n + j]`.
    /// Panics when out of range.
    #[inline]
    pub fn at2(&self, i: usize, j: usize) -> Complex {
        let cols = self.shape.get(1).copied().unwrap_or(0);
        debug_assert!(self.shape.len() == 2 && j < cols);
        self.data[i * cols + j]
    }
}

/// Owned dense row-major complex matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct ComplexMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex>,
}

/// Serialized form of [`ComplexMatrix`]; validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    data: Vec<Complex>,
}

impl TryFrom<MatrixRepr> for ComplexMatrix {
    type Error = LphiError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        ComplexMatrix::from_row_major(repr.rows, repr.cols, repr.data)
    }
}

impl From<ComplexMatrix> for MatrixRepr {
    fn from(matrix: ComplexMatrix) -> Self {
        MatrixRepr {
            rows: matrix.rows,
            cols: matrix.cols,
            data: matrix.data,
        }
    }
}

impl ComplexMatrix {
    /// Allocates a `rows x cols` zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, LphiError> {
        let Some(len) = rows.checked_mul(cols) else {
            return Err(overflow_error(&[rows, cols]));
        };
        let data = alloc_zeroed("matrix", len)?;
        Ok(Self { rows, cols, data })
    }

    /// Allocates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, LphiError> {
        let mut matrix = Self::zeros(n, n)?;
        for i in 0..n {
            matrix.data[i * n + i] = Complex::new(1.0, 0.0);
        }
        Ok(matrix)
    }

    /// Takes ownership of a row-major buffer of length `rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<Complex>) -> Result<Self, LphiError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(LphiError::Shape(
                ErrorInfo::new("shape-buffer", "buffer length does not match matrix shape")
                    .with_context("rows", rows)
                    .with_context("cols", cols)
                    .with_context("len", data.len()),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<Complex> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        self.data.get(i * self.cols + j).copied()
    }

    /// Overwrites element `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: Complex) -> Result<(), LphiError> {
        if i >= self.rows || j >= self.cols {
            return Err(LphiError::Shape(
                ErrorInfo::new("shape-index", "matrix index out of range")
                    .with_context("index", format!("({i}, {j})"))
                    .with_context("rows", self.rows)
                    .with_context("cols", self.cols),
            ));
        }
        self.data[i * self.cols + j] = value;
        Ok(())
    }

    /// Element-wise difference `self - other` into a fresh matrix.
    pub fn sub(&self, other: &ComplexMatrix) -> Result<ComplexMatrix, LphiError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(LphiError::DimensionMismatch(
                ErrorInfo::new("dimension-operands", "operand shapes differ")
                    .with_context("lhs", format!("{}x{}", self.rows, self.cols))
                    .with_context("rhs", format!("{}x{}", other.rows, other.cols)),
            ));
        }
        let mut out = Self::zeros(self.rows, self.cols)?;
        for (dst, (a, b)) in out
            .data
            .iter_mut()
            .zip(self.data.iter().zip(other.data.iter()))
        {
            *dst = a - b;
        }
        Ok(out)
    }

    /// Borrowed row-major buffer.
    pub fn as_slice(&self) -> &[Complex] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<Complex> {
        self.data
    }

    /// Two-dimensional read-only view of the matrix.
    pub fn view(&self) -> ComplexView<'_> {
        ComplexView {
            data: &self.data,
            shape: Box::new([self.rows, self.cols]),
        }
    }
}
