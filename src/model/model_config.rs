use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelBackend {
    TractOnnx,
    /// Random scores, for running the server without a model file.
    Fake,
}

impl FromStr for ModelBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tract-onnx" | "tract" | "onnx" => Ok(ModelBackend::TractOnnx),
            "fake" => Ok(ModelBackend::Fake),
            other => Err(format!("unknown model backend {:?}", other)),
        }
    }
}

/// Memory layout of the model's input tensor. Keras exports are
/// channels-last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorLayout {
    Nhwc,
    Nchw,
}

impl FromStr for TensorLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nhwc" => Ok(TensorLayout::Nhwc),
            "nchw" => Ok(TensorLayout::Nchw),
            other => Err(format!("unknown tensor layout {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub backend: ModelBackend,
    pub onnx_model_path: PathBuf,
    pub layout: TensorLayout,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            backend: ModelBackend::TractOnnx,
            onnx_model_path: PathBuf::from("model/fish_classifier.onnx"),
            layout: TensorLayout::Nhwc,
        }
    }
}
