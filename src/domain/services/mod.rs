//! Domain services operating over several entities.

mod permission_calculator;

pub use permission_calculator::PermissionCalculator;
