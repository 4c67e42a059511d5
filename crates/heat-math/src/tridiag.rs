// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — Tridiag
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thomas algorithm for tridiagonal systems.
//!
//! Forward elimination followed by back substitution, O(n) time and
//! O(n) scratch. Inputs are borrowed and never written; the solution is
//! returned as a new vector.

use heat_types::error::{HeatError, HeatResult};

/// Solve tridiagonal system Ax = d using the Thomas algorithm.
///
/// - `a`: sub-diagonal \[n\] (a\[0\] unused)
/// - `b`: main diagonal \[n\]
/// - `c`: super-diagonal \[n\] (c\[n-1\] unused)
/// - `d`: right-hand side \[n\]
///
/// Returns: solution vector x \[n\]. `d` keeps its original values.
///
/// Fails with `InvalidDimension` on empty or mismatched inputs, before any
/// arithmetic, and with `DegeneratePivot` if an effective pivot is zero or
/// non-finite. No other conditioning check is made; the caller supplies a
/// diagonally dominant system.
pub fn thomas_solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> HeatResult<Vec<f64>> {
    let n = d.len();
    check_dimensions(a, b, c, d, "right-hand side")?;

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    // Forward sweep
    let pivot = checked_pivot(0, b[0])?;
    c_prime[0] = c[0] / pivot;
    d_prime[0] = d[0] / pivot;

    for i in 1..n {
        let m = 1.0 / checked_pivot(i, b[i] - a[i] * c_prime[i - 1])?;
        c_prime[i] = c[i] * m;
        d_prime[i] = (d[i] - a[i] * d_prime[i - 1]) * m;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}

/// `v` is the vector the diagonals are checked against; `v_name` labels it.
fn check_dimensions(
    a: &[f64],
    b: &[f64],
    c: &[f64],
    v: &[f64],
    v_name: &str,
) -> HeatResult<()> {
    let n = v.len();
    if n == 0 {
        return Err(HeatError::InvalidDimension(
            "system size must be > 0".to_string(),
        ));
    }
    let diagonals = [
        ("sub-diagonal", a.len()),
        ("main diagonal", b.len()),
        ("super-diagonal", c.len()),
    ];
    for (name, len) in diagonals {
        if len != n {
            return Err(HeatError::InvalidDimension(format!(
                "{name} has length {len}, {v_name} has length {n}"
            )));
        }
    }
    Ok(())
}

#[inline]
fn checked_pivot(row: usize, pivot: f64) -> HeatResult<f64> {
    if pivot == 0.0 || !pivot.is_finite() {
        return Err(HeatError::DegeneratePivot { row, pivot });
    }
    Ok(pivot)
}

/// Compute A·x for the tridiagonal A given by (a, b, c).
/// `a[0]` and `c[n-1]` are ignored.
pub fn tridiag_matvec(a: &[f64], b: &[f64], c: &[f64], x: &[f64]) -> HeatResult<Vec<f64>> {
    check_dimensions(a, b, c, x, "x")?;
    let n = x.len();
    let ax = (0..n)
        .map(|i| {
            let mut v = b[i] * x[i];
            if i > 0 {
                v += a[i] * x[i - 1];
            }
            if i + 1 < n {
                v += c[i] * x[i + 1];
            }
            v
        })
        .collect();
    Ok(ax)
}

/// Owned coefficient and right-hand-side sequences of one tridiagonal system.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    pub lower: Vec<f64>,
    pub main: Vec<f64>,
    pub upper: Vec<f64>,
    pub rhs: Vec<f64>,
}

impl TridiagonalSystem {
    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Solve with [`thomas_solve`]. The system is left untouched.
    pub fn solve(&self) -> HeatResult<Vec<f64>> {
        thomas_solve(&self.lower, &self.main, &self.upper, &self.rhs)
    }

    /// Max-norm of A·x − rhs.
    pub fn residual(&self, x: &[f64]) -> HeatResult<f64> {
        check_dimensions(
            &self.lower,
            &self.main,
            &self.upper,
            &self.rhs,
            "right-hand side",
        )?;
        let ax = tridiag_matvec(&self.lower, &self.main, &self.upper, x)?;
        Ok(ax
            .iter()
            .zip(&self.rhs)
            .map(|(lhs, rhs)| (lhs - rhs).abs())
            .fold(0.0_f64, f64::max))
    }
}
