//! Property-based tests for the widest-path pipeline.
//!
//! Verifies the spanning-forest bottleneck table against a brute-force
//! enumeration of simple paths and checks the structural properties the
//! table must satisfy (symmetry, zero diagonal, deterministic output).

mod oracle;
mod strategies;
