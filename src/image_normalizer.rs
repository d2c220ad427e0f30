pub mod normalize;
pub mod tensor;

pub use normalize::normalize;
pub use tensor::NormalizedTensor;
