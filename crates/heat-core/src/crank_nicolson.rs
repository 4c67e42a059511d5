// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — Crank-Nicolson
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Crank-Nicolson time stepping for the 1D heat equation with Dirichlet
//! boundaries.
//!
//! Each step solves
//!
//! ```text
//! -r/2 u'[i-1] + (1+r) u'[i] - r/2 u'[i+1] = (1-r) u[i] + r/2 (u[i-1] + u[i+1])
//! ```
//!
//! for the interior nodes. The first and last rows also pick up
//! `r/2 u[0]` and `r/2 u[N-1]` from the previous state's boundary nodes.

use std::time::Instant;

use heat_math::tridiag::TridiagonalSystem;
use heat_types::config::DiffusionConfig;
use heat_types::error::{HeatError, HeatResult};
use heat_types::state::{BoundaryValues, Grid1D, RunSummary};
use tracing::{debug, info, trace};

/// Constant CN coefficients for `m` interior unknowns: (lower, main, upper).
///
/// `lower[0]` and `upper[m-1]` are filled like every other entry; the
/// solver never reads them.
pub fn crank_nicolson_coefficients(m: usize, r: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let off = -r / 2.0;
    (vec![off; m], vec![1.0 + r; m], vec![off; m])
}

/// Assemble the tridiagonal system for one step from the previous state.
///
/// Both boundary corrections read the end nodes of `old`.
pub fn build_system(old: &[f64], r: f64) -> HeatResult<TridiagonalSystem> {
    let n = old.len();
    if n < 3 {
        return Err(HeatError::InvalidDimension(format!(
            "grid needs at least 3 nodes for one interior unknown, got {n}"
        )));
    }
    let m = n - 2;
    let half_r = r / 2.0;

    let mut rhs: Vec<f64> = (1..n - 1)
        .map(|i| (1.0 - r) * old[i] + half_r * (old[i - 1] + old[i + 1]))
        .collect();

    // Boundary correction for the first and last interior rows.
    rhs[0] += half_r * old[0];
    rhs[m - 1] += half_r * old[n - 1];

    let (lower, main, upper) = crank_nicolson_coefficients(m, r);
    Ok(TridiagonalSystem {
        lower,
        main,
        upper,
        rhs,
    })
}

/// Advance `old` by one Crank-Nicolson step. Returns the new full-grid state.
///
/// Pure: `old` is not modified. `bc` only sets the boundary nodes of the
/// result, which are exactly `bc.left` and `bc.right`.
pub fn step(old: &[f64], r: f64, bc: BoundaryValues) -> HeatResult<Vec<f64>> {
    let system = build_system(old, r)?;
    let interior = system.solve()?;

    let n = old.len();
    let mut new = Vec::with_capacity(n);
    new.push(bc.left);
    new.extend_from_slice(&interior);
    new.push(bc.right);
    Ok(new)
}

/// Stateful driver over a configured run.
#[derive(Debug, Clone)]
pub struct HeatSolver {
    grid: Grid1D,
    u: Vec<f64>,
    r: f64,
    boundaries: BoundaryValues,
    time_steps: usize,
    steps_taken: usize,
}

impl HeatSolver {
    /// Validate `config` and build the initial state.
    pub fn new(config: &DiffusionConfig) -> HeatResult<Self> {
        config.validate()?;
        Ok(HeatSolver {
            grid: config.create_grid(),
            u: config.initial_state()?,
            r: config.diffusion_factor()?,
            boundaries: config.boundaries(),
            time_steps: config.time_steps,
            steps_taken: 0,
        })
    }

    /// Create a new solver from a JSON config file.
    pub fn from_file(path: &str) -> HeatResult<Self> {
        let config = DiffusionConfig::from_file(path)?;
        Self::new(&config)
    }

    /// One step: discretize, solve, reassert boundaries, replace state.
    pub fn advance(&mut self) -> HeatResult<()> {
        let next = step(&self.u, self.r, self.boundaries)?;
        self.u = next;
        self.steps_taken += 1;
        Ok(())
    }

    /// Run the configured number of steps.
    pub fn run(&mut self) -> HeatResult<RunSummary> {
        self.run_steps(self.time_steps)
    }

    /// Run `n_steps` further steps and summarise the resulting state.
    pub fn run_steps(&mut self, n_steps: usize) -> HeatResult<RunSummary> {
        info!(
            nodes = self.grid.n,
            r = self.r,
            steps = n_steps,
            "starting Crank-Nicolson run"
        );
        let start = Instant::now();
        for _ in 0..n_steps {
            self.advance()?;
            trace!(step = self.steps_taken, "step complete");
        }
        let solve_time_ms = start.elapsed().as_secs_f64() * 1e3;
        debug!(solve_time_ms, "run finished");

        Ok(RunSummary {
            steps_taken: self.steps_taken,
            diffusion_factor: self.r,
            final_state: self.u.clone(),
            solve_time_ms,
        })
    }

    /// Full grid state, boundaries included.
    pub fn state(&self) -> &[f64] {
        &self.u
    }

    /// Interior nodes 1..N-1.
    pub fn interior(&self) -> &[f64] {
        let n = self.u.len();
        &self.u[1..n - 1]
    }

    pub fn grid(&self) -> &Grid1D {
        &self.grid
    }

    pub fn diffusion_factor(&self) -> f64 {
        self.r
    }

    pub fn boundaries(&self) -> BoundaryValues {
        self.boundaries
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }
}
