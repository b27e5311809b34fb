/// Runtime values and their identity rules.
pub mod core;
/// Kind tags for runtime values.
pub mod kind;
