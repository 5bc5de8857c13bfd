pub mod knots;
pub mod sweep;
