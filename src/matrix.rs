use crate::complex_float::ComplexFloat;
use crate::complex_rational::ComplexRational;
use crate::error::MatrixError;
use crate::util::clamp_prec;
use ndarray::prelude::*;
use ndarray::Zip;
use num_traits::Zero;
use regex::Regex;
use simple_error::{SimpleError, bail};
use std::fmt;
use std::sync::LazyLock;

static MATRIX_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?\d+(?:/\d+)?\s*\+\s*[-+]?\d+(?:/\d+)?\s*i").expect("Invalid regex!")
});

/// A dense matrix of exact complex entries.
///
/// A 1x1 matrix acts as a scalar and is broadcast against the other operand in
/// [`add`](Matrix::add), [`sub`](Matrix::sub) and [`mul`](Matrix::mul). `prec` is the
/// float precision entries are promoted to for transcendental functions and for
/// [`float_string`](Matrix::float_string); it is not stored per entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    prec: u32,
    values: Array2<ComplexRational>,
}

impl Matrix {
    /// Create an empty matrix
    pub fn new(prec: u32) -> Self {
        Matrix::from_array(prec, Array2::default((0, 0)))
    }

    /// Create a 1x1 matrix
    pub fn scalar(prec: u32, value: ComplexRational) -> Self {
        Matrix::from_array(prec, Array2::from_elem((1, 1), value))
    }

    pub fn from_array(prec: u32, values: Array2<ComplexRational>) -> Self {
        Matrix {
            prec: clamp_prec(prec),
            values,
        }
    }

    /// Create a matrix from a list of rows of equal length
    pub fn from_rows(prec: u32, rows: Vec<Vec<ComplexRational>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != ncols) {
            log::warn!("row {} has {} entries, expected {}", index, row.len(), ncols);
            return Err(MatrixError::RaggedRows(format!(
                "row {} has {} entries, expected {}",
                index,
                row.len(),
                ncols
            )));
        }

        let flat: Vec<ComplexRational> = rows.into_iter().flatten().collect();
        let values = Array2::from_shape_vec((nrows, ncols), flat)
            .map_err(|err| MatrixError::RaggedRows(err.to_string()))?;
        Ok(Matrix::from_array(prec, values))
    }

    /// Parse the display form, `"[a b ;c d ;]"` or a bare scalar
    pub fn parse(prec: u32, text: &str) -> Result<Self, SimpleError> {
        let text = text.trim();
        let Some(body) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) else {
            let value: ComplexRational = text.parse()?;
            return Ok(Matrix::scalar(prec, value));
        };

        let mut rows = Vec::new();
        for row in body.split(';') {
            if row.trim().is_empty() {
                continue;
            }
            let leftover = MATRIX_ENTRY_RE.replace_all(row, "");
            if !leftover.trim().is_empty() {
                bail!("unexpected text {:?} in matrix row", leftover.trim());
            }
            let entries = MATRIX_ENTRY_RE
                .find_iter(row)
                .map(|m| m.as_str().parse::<ComplexRational>())
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(entries);
        }

        Matrix::from_rows(prec, rows).map_err(|err| SimpleError::new(err.to_string()))
    }

    pub fn prec(&self) -> u32 {
        self.prec
    }

    pub fn set_prec(&mut self, prec: u32) {
        self.prec = clamp_prec(prec);
    }

    /// Get the shape as (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Check if the matrix is a broadcastable 1x1 scalar
    pub fn is_scalar(&self) -> bool {
        self.dim() == (1, 1)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&ComplexRational> {
        self.values.get((row, col))
    }

    /// Get a view of the entries
    pub fn view(&self) -> ArrayView2<'_, ComplexRational> {
        self.values.view()
    }

    /// Convert to the inner ndarray (consuming self)
    pub fn into_inner(self) -> Array2<ComplexRational> {
        self.values
    }

    fn scalar_value(&self) -> Option<&ComplexRational> {
        if self.is_scalar() {
            self.values.get((0, 0))
        } else {
            None
        }
    }

    fn with_values(&self, values: Array2<ComplexRational>) -> Matrix {
        Matrix {
            prec: self.prec,
            values,
        }
    }

    fn elementwise<F>(&self, other: &Matrix, op: &str, f: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(&ComplexRational, &ComplexRational) -> ComplexRational,
    {
        let values = match (self.scalar_value(), other.scalar_value()) {
            (Some(a), _) => {
                log::debug!("{}: broadcasting 1x1 left operand over {:?}", op, other.dim());
                other.values.map(|b| f(a, b))
            }
            (None, Some(b)) => {
                log::debug!("{}: broadcasting 1x1 right operand over {:?}", op, self.dim());
                self.values.map(|a| f(a, b))
            }
            (None, None) => {
                if self.dim() != other.dim() {
                    log::warn!("{}: shapes {:?} and {:?} differ", op, self.dim(), other.dim());
                    return Err(MatrixError::ShapeMismatch(format!(
                        "cannot {} {:?} and {:?}",
                        op,
                        self.dim(),
                        other.dim()
                    )));
                }
                Zip::from(&self.values)
                    .and(&other.values)
                    .map_collect(|a, b| f(a, b))
            }
        };
        Ok(self.with_values(values))
    }

    /// Entrywise sum, broadcasting a 1x1 operand
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise(other, "add", |a, b| a + b)
    }

    /// Entrywise difference, broadcasting a 1x1 operand on either side
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.elementwise(other, "subtract", |a, b| a - b)
    }

    /// Matrix product, or a scaling when either operand is 1x1
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.is_scalar() || other.is_scalar() {
            return self.elementwise(other, "multiply", |a, b| a * b);
        }

        let (rows, inner) = self.dim();
        let (other_inner, cols) = other.dim();
        if inner != other_inner {
            log::warn!("multiply: shapes {:?} and {:?} do not chain", self.dim(), other.dim());
            return Err(MatrixError::ShapeMismatch(format!(
                "cannot multiply {:?} by {:?}",
                self.dim(),
                other.dim()
            )));
        }

        let values = Array2::from_shape_fn((rows, cols), |(x, y)| {
            (0..inner).fold(ComplexRational::zero(), |sum, z| {
                sum + &self.values[(x, z)] * &other.values[(z, y)]
            })
        });
        Ok(self.with_values(values))
    }

    /// Quotient of two 1x1 matrices; any other shape is rejected
    pub fn div(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        match (self.scalar_value(), other.scalar_value()) {
            (Some(a), Some(b)) => {
                let value = a.checked_div(b).ok_or(MatrixError::DivisionByZero)?;
                Ok(self.with_values(Array2::from_elem((1, 1), value)))
            }
            _ => {
                log::warn!("divide: {:?} by {:?} is not a 1x1 division", self.dim(), other.dim());
                Err(MatrixError::NotScalar(format!(
                    "cannot divide {:?} by {:?}",
                    self.dim(),
                    other.dim()
                )))
            }
        }
    }

    // Promote each entry to a float at `prec`, apply `f`, demote the result
    fn apply<F>(&self, f: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(&ComplexFloat) -> ComplexFloat,
    {
        let mut values = Vec::with_capacity(self.values.len());
        for ((row, col), entry) in self.values.indexed_iter() {
            let promoted = ComplexFloat::from_rational(self.prec, entry);
            let value = f(&promoted).to_rational().map_err(|err| {
                log::warn!("entry ({}, {}) = {} has no exact result: {}", row, col, entry, err);
                MatrixError::NotRepresentable(format!("entry ({}, {}): {}", row, col, err))
            })?;
            values.push(value);
        }

        let values = Array2::from_shape_vec(self.dim(), values)
            .map_err(|err| MatrixError::ShapeMismatch(err.to_string()))?;
        Ok(self.with_values(values))
    }

    pub fn abs(&self) -> Result<Matrix, MatrixError> {
        self.apply(ComplexFloat::abs)
    }

    /// Entrywise conjugate, computed exactly
    pub fn conj(&self) -> Matrix {
        self.with_values(self.values.map(ComplexRational::conj))
    }

    pub fn sqrt(&self) -> Result<Matrix, MatrixError> {
        self.apply(ComplexFloat::sqrt)
    }

    pub fn atan2(&self) -> Result<Matrix, MatrixError> {
        self.apply(ComplexFloat::atan2)
    }

    /// Entrywise [`ComplexFloat::arg`]; a zero entry has no representable angle
    pub fn arg(&self) -> Result<Matrix, MatrixError> {
        self.apply(ComplexFloat::arg)
    }

    pub fn exp(&self) -> Result<Matrix, MatrixError> {
        self.apply(ComplexFloat::exp)
    }

    pub fn cos(&self) -> Result<Matrix, MatrixError> {
        self.apply(ComplexFloat::cos)
    }

    pub fn sin(&self) -> Result<Matrix, MatrixError> {
        self.apply(ComplexFloat::sin)
    }

    pub fn tan(&self) -> Result<Matrix, MatrixError> {
        self.apply(ComplexFloat::tan)
    }

    pub fn ln(&self) -> Result<Matrix, MatrixError> {
        self.apply(ComplexFloat::ln)
    }

    /// Raise every entry to the same power
    pub fn pow(&self, exponent: &ComplexRational) -> Result<Matrix, MatrixError> {
        let exponent = ComplexFloat::from_rational(self.prec, exponent);
        self.apply(|x| x.pow(&exponent))
    }

    pub fn neg(&self) -> Matrix {
        self.with_values(self.values.map(|x| -x))
    }

    fn render<F>(&self, f: F) -> String
    where
        F: Fn(&ComplexRational) -> String,
    {
        if let Some(value) = self.scalar_value() {
            return f(value);
        }

        let mut out = String::from("[");
        for row in self.values.rows() {
            let entries: Vec<String> = row.iter().map(&f).collect();
            out.push_str(&entries.join(" "));
            out.push_str(" ;");
        }
        out.push(']');
        out
    }

    /// Render with every entry promoted to a float at `prec`
    pub fn float_string(&self) -> String {
        self.render(|entry| ComplexFloat::from_rational(self.prec, entry).to_string())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|entry| entry.to_string()))
    }
}
