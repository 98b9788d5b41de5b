// Domain layer: the two pure helpers. No I/O, no shared state.

pub mod size;
pub mod text;
