//! Shared library modules providing error types, command construction, and telemetry initialization.

pub mod errors;
pub mod paths;
pub mod python;
pub mod telemetry;
