pub mod delay;

pub use delay::{DelayError, Phase, delayed};
