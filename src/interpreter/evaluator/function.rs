/// Built-in function implementations.
///
/// Contains the static table of functions available by default: `pow`, `abs`,
/// `max`, `min`.
pub mod builtin;

pub mod core;
