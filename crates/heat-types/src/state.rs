// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Uniform 1D grid with precomputed node coordinates.
#[derive(Debug, Clone)]
pub struct Grid1D {
    pub n: usize,
    pub x: Array1<f64>, // node coordinates [n] - linspace(x_min, x_max, n)
    pub dx: f64,        // node spacing
}

impl Grid1D {
    /// Create a grid of `n` nodes spanning [x_min, x_max], boundaries included.
    pub fn new(n: usize, x_min: f64, x_max: f64) -> Self {
        let x = Array1::linspace(x_min, x_max, n);
        let dx = if n > 1 { x[1] - x[0] } else { x_max - x_min };
        Grid1D { n, x, dx }
    }

    /// Create a grid of `n` nodes starting at zero with spacing `dx`.
    pub fn from_spacing(n: usize, dx: f64) -> Self {
        let x_max = if n > 1 { dx * (n - 1) as f64 } else { 0.0 };
        let mut grid = Grid1D::new(n, 0.0, x_max);
        grid.dx = dx;
        grid
    }
}

/// Dirichlet values imposed at node 0 and node N-1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryValues {
    pub left: f64,
    pub right: f64,
}

impl BoundaryValues {
    pub fn new(left: f64, right: f64) -> Self {
        BoundaryValues { left, right }
    }

    /// Overwrite the first and last entries of `u`. No-op on an empty slice.
    pub fn apply(&self, u: &mut [f64]) {
        let n = u.len();
        if n == 0 {
            return;
        }
        u[0] = self.left;
        u[n - 1] = self.right;
    }
}

/// Result of a multi-step run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub steps_taken: usize,
    pub diffusion_factor: f64,
    pub final_state: Vec<f64>, // full grid, boundaries included
    pub solve_time_ms: f64,
}

impl RunSummary {
    /// Interior values, nodes 1..N-1.
    pub fn interior(&self) -> &[f64] {
        let n = self.final_state.len();
        if n < 2 {
            return &[];
        }
        &self.final_state[1..n - 1]
    }
}
