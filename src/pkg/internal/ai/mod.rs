pub mod generate;
pub mod normalize;
pub mod prompt;
pub mod read;
pub mod spec;
