/// Absolute tolerance for target matches and the division guard.
pub const EPSILON: f64 = 1e-6;

/// The number the classic game asks for.
pub const DEFAULT_TARGET: f64 = 24.0;
