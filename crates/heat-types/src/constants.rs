// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reference scenario: a 6-node rod held at 100 and 50 at its ends,
//! advanced one Crank-Nicolson step.

/// Number of nodes including both boundaries.
pub const REFERENCE_GRID_SIZE: usize = 6;

/// Diffusion number r = D·dt/dx².
pub const REFERENCE_DIFFUSION_FACTOR: f64 = 0.020875;

/// Left Dirichlet value, u(0, t).
pub const REFERENCE_LEFT_BOUNDARY: f64 = 100.0;

/// Right Dirichlet value, u(N-1, t).
pub const REFERENCE_RIGHT_BOUNDARY: f64 = 50.0;

/// Initial interior temperature.
pub const REFERENCE_INTERIOR_VALUE: f64 = 0.0;

/// Number of time steps.
pub const REFERENCE_TIME_STEPS: usize = 1;

/// Spatial step used when no physical parameters are configured.
pub const DEFAULT_DX: f64 = 1.0;
