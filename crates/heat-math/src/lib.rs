//! Mathematical primitives for SCPN Heat Core.

pub mod tridiag;
