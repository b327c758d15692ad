pub mod manim;
pub mod process;
