// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DX, REFERENCE_DIFFUSION_FACTOR, REFERENCE_GRID_SIZE, REFERENCE_INTERIOR_VALUE,
    REFERENCE_LEFT_BOUNDARY, REFERENCE_RIGHT_BOUNDARY, REFERENCE_TIME_STEPS,
};
use crate::error::{HeatError, HeatResult};
use crate::state::{BoundaryValues, Grid1D};

/// Relative tolerance when `diffusionFactor` and `physics` are both given.
const DIFFUSION_FACTOR_MATCH_TOL: f64 = 1e-12;

/// Run configuration for a 1D Crank-Nicolson diffusion problem.
/// JSON keys: gridSize, diffusionFactor, leftBoundary, rightBoundary,
/// initialCondition, timeSteps, physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffusionConfig {
    /// Node count N, boundaries included. Must be >= 3.
    pub grid_size: usize,
    /// r = D·dt/dx². Derived from `physics` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffusion_factor: Option<f64>,
    pub left_boundary: f64,
    pub right_boundary: f64,
    #[serde(default)]
    pub initial_condition: InitialCondition,
    #[serde(default = "default_time_steps")]
    pub time_steps: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physics: Option<PhysicsParams>,
}

/// Initial temperature field. A bare number fills the interior;
/// an array gives every node, boundaries included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialCondition {
    Uniform(f64),
    Profile(Vec<f64>),
}

impl Default for InitialCondition {
    fn default() -> Self {
        InitialCondition::Uniform(REFERENCE_INTERIOR_VALUE)
    }
}

/// Physical constants from which r is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Diffusion coefficient D [length²/time].
    pub diffusivity: f64,
    pub dx: f64,
    pub dt: f64,
}

impl PhysicsParams {
    /// r = D·dt/dx².
    pub fn diffusion_factor(&self) -> f64 {
        self.diffusivity * self.dt / (self.dx * self.dx)
    }

    fn validate(&self) -> HeatResult<()> {
        if !self.diffusivity.is_finite() || self.diffusivity < 0.0 {
            return Err(HeatError::ConfigError(format!(
                "physics.diffusivity must be finite and >= 0, got {}",
                self.diffusivity
            )));
        }
        if !self.dx.is_finite() || self.dx <= 0.0 {
            return Err(HeatError::ConfigError(format!(
                "physics.dx must be finite and > 0, got {}",
                self.dx
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(HeatError::ConfigError(format!(
                "physics.dt must be finite and > 0, got {}",
                self.dt
            )));
        }
        Ok(())
    }
}

fn default_time_steps() -> usize {
    REFERENCE_TIME_STEPS
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl DiffusionConfig {
    /// The 6-node, one-step reference scenario.
    pub fn reference() -> Self {
        DiffusionConfig {
            grid_size: REFERENCE_GRID_SIZE,
            diffusion_factor: Some(REFERENCE_DIFFUSION_FACTOR),
            left_boundary: REFERENCE_LEFT_BOUNDARY,
            right_boundary: REFERENCE_RIGHT_BOUNDARY,
            initial_condition: InitialCondition::default(),
            time_steps: REFERENCE_TIME_STEPS,
            physics: None,
        }
    }

    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> HeatResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve r from `diffusionFactor` or, failing that, from `physics`.
    pub fn diffusion_factor(&self) -> HeatResult<f64> {
        match (self.diffusion_factor, self.physics.as_ref()) {
            (Some(r), None) => Ok(r),
            (None, Some(physics)) => Ok(physics.diffusion_factor()),
            (Some(r), Some(physics)) => {
                let derived = physics.diffusion_factor();
                if (r - derived).abs() > DIFFUSION_FACTOR_MATCH_TOL * r.abs().max(1.0) {
                    return Err(HeatError::ConfigError(format!(
                        "diffusionFactor {r} conflicts with physics-derived value {derived}"
                    )));
                }
                Ok(r)
            }
            (None, None) => Err(HeatError::ConfigError(
                "either diffusionFactor or physics must be given".to_string(),
            )),
        }
    }

    pub fn boundaries(&self) -> BoundaryValues {
        BoundaryValues::new(self.left_boundary, self.right_boundary)
    }

    /// Build the full-grid initial state, N values.
    pub fn initial_state(&self) -> HeatResult<Vec<f64>> {
        match &self.initial_condition {
            InitialCondition::Uniform(value) => {
                let mut u = vec![*value; self.grid_size];
                self.boundaries().apply(&mut u);
                Ok(u)
            }
            InitialCondition::Profile(values) => {
                if values.len() != self.grid_size {
                    return Err(HeatError::ConfigError(format!(
                        "initialCondition has {} values, gridSize is {}",
                        values.len(),
                        self.grid_size
                    )));
                }
                Ok(values.clone())
            }
        }
    }

    /// Create a Grid1D using physics.dx, or unit spacing.
    pub fn create_grid(&self) -> Grid1D {
        let dx = self.physics.map(|p| p.dx).unwrap_or(DEFAULT_DX);
        Grid1D::from_spacing(self.grid_size, dx)
    }

    pub fn validate(&self) -> HeatResult<()> {
        if self.grid_size < 3 {
            return Err(HeatError::ConfigError(format!(
                "gridSize must be >= 3 (at least one interior node), got {}",
                self.grid_size
            )));
        }
        if let Some(physics) = &self.physics {
            physics.validate()?;
        }
        let r = self.diffusion_factor()?;
        if !r.is_finite() {
            return Err(HeatError::ConfigError(format!(
                "diffusionFactor must be finite, got {r}"
            )));
        }
        if r == -1.0 {
            return Err(HeatError::ConfigError(
                "diffusionFactor of -1 makes the main diagonal zero".to_string(),
            ));
        }
        if !self.left_boundary.is_finite() || !self.right_boundary.is_finite() {
            return Err(HeatError::ConfigError(format!(
                "boundary values must be finite, got left={} right={}",
                self.left_boundary, self.right_boundary
            )));
        }
        let u0 = self.initial_state()?;
        if u0.iter().any(|v| !v.is_finite()) {
            return Err(HeatError::ConfigError(
                "initialCondition contains non-finite values".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/heat-types/, workspace root is 2 up.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_load_reference_config() {
        let cfg = DiffusionConfig::from_file(&config_path("configs/reference.json")).unwrap();
        assert_eq!(cfg, DiffusionConfig::reference());
        assert_eq!(cfg.grid_size, 6);
        assert!((cfg.diffusion_factor().unwrap() - 0.020875).abs() < 1e-15);
        assert_eq!(cfg.time_steps, 1);
    }

    #[test]
    fn test_load_physics_config() {
        let cfg = DiffusionConfig::from_file(&config_path("configs/rod_physics.json")).unwrap();
        assert!(cfg.diffusion_factor.is_none());
        let physics = cfg.physics.unwrap();
        let expected = physics.diffusivity * physics.dt / (physics.dx * physics.dx);
        assert!((cfg.diffusion_factor().unwrap() - expected).abs() < 1e-15);
        assert_eq!(cfg.initial_state().unwrap().len(), cfg.grid_size);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DiffusionConfig::from_file(&config_path("configs/does_not_exist.json"));
        assert!(matches!(err, Err(HeatError::Io(_))));
    }

    #[test]
    fn test_camel_case_keys_and_defaults() {
        let json = r#"{
            "gridSize": 5,
            "diffusionFactor": 0.5,
            "leftBoundary": 1.0,
            "rightBoundary": 2.0
        }"#;
        let cfg: DiffusionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.grid_size, 5);
        assert_eq!(cfg.time_steps, 1);
        assert_eq!(cfg.initial_condition, InitialCondition::Uniform(0.0));
        assert_eq!(cfg.initial_state().unwrap(), vec![1.0, 0.0, 0.0, 0.0, 2.0]);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_profile_initial_condition() {
        let json = r#"{
            "gridSize": 4,
            "diffusionFactor": 0.1,
            "leftBoundary": 1.0,
            "rightBoundary": 1.0,
            "initialCondition": [0.0, 3.0, 4.0, 0.0],
            "timeSteps": 7
        }"#;
        let cfg: DiffusionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.time_steps, 7);
        assert_eq!(cfg.initial_state().unwrap(), vec![0.0, 3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_profile_length_mismatch_rejected() {
        let mut cfg = DiffusionConfig::reference();
        cfg.initial_condition = InitialCondition::Profile(vec![0.0; 5]);
        assert!(matches!(cfg.validate(), Err(HeatError::ConfigError(_))));
    }

    #[test]
    fn test_small_grid_rejected() {
        let mut cfg = DiffusionConfig::reference();
        cfg.grid_size = 2;
        assert!(matches!(cfg.validate(), Err(HeatError::ConfigError(_))));
        cfg.grid_size = 3;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_degenerate_diffusion_factor_rejected() {
        let mut cfg = DiffusionConfig::reference();
        cfg.diffusion_factor = Some(-1.0);
        assert!(matches!(cfg.validate(), Err(HeatError::ConfigError(_))));
        cfg.diffusion_factor = Some(f64::NAN);
        assert!(matches!(cfg.validate(), Err(HeatError::ConfigError(_))));
    }

    #[test]
    fn test_diffusion_factor_sources() {
        let mut cfg = DiffusionConfig::reference();
        cfg.diffusion_factor = None;
        assert!(matches!(
            cfg.diffusion_factor(),
            Err(HeatError::ConfigError(_))
        ));

        cfg.physics = Some(PhysicsParams {
            diffusivity: 0.020875,
            dx: 1.0,
            dt: 1.0,
        });
        assert!((cfg.diffusion_factor().unwrap() - 0.020875).abs() < 1e-15);

        cfg.diffusion_factor = Some(0.020875);
        assert!(cfg.diffusion_factor().is_ok());

        cfg.diffusion_factor = Some(0.5);
        assert!(matches!(
            cfg.diffusion_factor(),
            Err(HeatError::ConfigError(_))
        ));
    }

    #[test]
    fn test_invalid_physics_rejected() {
        let mut cfg = DiffusionConfig::reference();
        cfg.diffusion_factor = None;
        cfg.physics = Some(PhysicsParams {
            diffusivity: 1.0,
            dx: 0.0,
            dt: 1.0,
        });
        assert!(matches!(cfg.validate(), Err(HeatError::ConfigError(_))));
    }

    #[test]
    fn test_create_grid_spacing() {
        let mut cfg = DiffusionConfig::reference();
        assert!((cfg.create_grid().dx - 1.0).abs() < 1e-15);
        cfg.physics = Some(PhysicsParams {
            diffusivity: 0.0835,
            dx: 0.5,
            dt: 0.0625,
        });
        let grid = cfg.create_grid();
        assert_eq!(grid.n, 6);
        assert!((grid.dx - 0.5).abs() < 1e-15);
        assert!((grid.x[5] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = DiffusionConfig::from_file(&config_path("configs/rod_physics.json")).unwrap();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: DiffusionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }
}
