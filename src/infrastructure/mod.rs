pub mod renderer;
pub mod scratch;
