/// The runtime value type.
///
/// Defines the `Value` enum (nil, boolean, number, string, array), its
/// conversions, kind names used in diagnostics, and its human-readable
/// rendering.
pub mod core;
