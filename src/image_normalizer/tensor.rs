pub const TENSOR_HEIGHT: usize = 224;
pub const TENSOR_WIDTH: usize = 224;
pub const TENSOR_CHANNELS: usize = 3;

/// A 224x224 RGB image as `f32` values in `[0, 1]`, stored row-major in
/// height, width, channel order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTensor {
    data: Vec<f32>,
}

impl NormalizedTensor {
    pub const SHAPE: [usize; 3] = [TENSOR_HEIGHT, TENSOR_WIDTH, TENSOR_CHANNELS];
    pub const LEN: usize = TENSOR_HEIGHT * TENSOR_WIDTH * TENSOR_CHANNELS;

    /// Only the normalizer builds tensors, so the length and value range
    /// are guaranteed by construction.
    pub(super) fn from_hwc(data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), Self::LEN);
        Self { data }
    }

    #[cfg(test)]
    pub fn filled(value: f32) -> Self {
        Self {
            data: vec![value.clamp(0.0, 1.0); Self::LEN],
        }
    }

    #[cfg(test)]
    pub fn shape(&self) -> [usize; 3] {
        Self::SHAPE
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[cfg(test)]
    pub fn get(&self, y: usize, x: usize, c: usize) -> Option<f32> {
        if y >= TENSOR_HEIGHT || x >= TENSOR_WIDTH || c >= TENSOR_CHANNELS {
            return None;
        }
        self.data
            .get((y * TENSOR_WIDTH + x) * TENSOR_CHANNELS + c)
            .copied()
    }
}
