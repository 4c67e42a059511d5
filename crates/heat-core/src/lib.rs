//! 1D heat-equation driver.
//!
//! Crank-Nicolson discretization with Dirichlet boundaries on top of the
//! Thomas solver in `heat-math`.

pub mod crank_nicolson;
