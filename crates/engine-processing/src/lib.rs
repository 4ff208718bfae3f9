pub mod error;
pub mod inspect;
pub mod pipeline;
pub mod sampler;
