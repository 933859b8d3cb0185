/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation: numbers, strings, booleans
/// and `nil`, together with truthiness and the display form used by `print`.
pub mod core;

pub use self::core::Value;
