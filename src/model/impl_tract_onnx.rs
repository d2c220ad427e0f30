use crate::image_normalizer::tensor::{TENSOR_CHANNELS, TENSOR_HEIGHT, TENSOR_WIDTH};
use crate::image_normalizer::NormalizedTensor;
use crate::library::logger::interface::Logger;
use crate::model::interface::{ModelError, ScoreModel};
use crate::model::model_config::{ModelConfig, TensorLayout};
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ScoreModelTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    layout: TensorLayout,
    num_classes: Option<usize>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ScoreModelTractOnnx {
    pub fn new(
        config: &ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelError> {
        let logger = logger.with_namespace("model").with_namespace("tract_onnx");
        let path = config.onnx_model_path.display().to_string();
        let load_error = |e: TractError| ModelError::Load {
            path: path.clone(),
            reason: format!("{:#}", e),
        };

        let _ = logger.info(&format!("Loading model from {}", path));

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), input_shape(config.layout)),
                )
            })
            .and_then(|model| model.into_optimized())
            .map_err(load_error)?;

        let num_classes = model
            .output_fact(0)
            .ok()
            .and_then(|fact| fact.shape.as_concrete().and_then(|dims| dims.last().copied()));

        let model = model.into_runnable().map_err(load_error)?;

        let _ = logger.info(&format!(
            "Model loaded ({:?} input, {} output classes)",
            config.layout,
            num_classes.map_or("unknown".to_string(), |n| n.to_string())
        ));

        Ok(Self {
            model,
            layout: config.layout,
            num_classes,
            logger,
        })
    }
}

/// Adds the batch dimension and reorders channels for NCHW models.
fn input_tensor(tensor: &NormalizedTensor, layout: TensorLayout) -> Result<Tensor, ModelError> {
    let nhwc = tract_ndarray::Array4::from_shape_vec(
        (1, TENSOR_HEIGHT, TENSOR_WIDTH, TENSOR_CHANNELS),
        tensor.as_slice().to_vec(),
    )
    .map_err(|e| ModelError::Inference(e.to_string()))?;

    let batch = match layout {
        TensorLayout::Nhwc => nhwc,
        TensorLayout::Nchw => nhwc
            .permuted_axes([0, 3, 1, 2])
            .as_standard_layout()
            .into_owned(),
    };

    Ok(batch.into_tensor())
}

fn input_shape(layout: TensorLayout) -> TVec<usize> {
    match layout {
        TensorLayout::Nhwc => tvec!(1, TENSOR_HEIGHT, TENSOR_WIDTH, TENSOR_CHANNELS),
        TensorLayout::Nchw => tvec!(1, TENSOR_CHANNELS, TENSOR_HEIGHT, TENSOR_WIDTH),
    }
}

impl ScoreModel for ScoreModelTractOnnx {
    fn predict(&self, tensor: &NormalizedTensor) -> Result<Vec<f32>, ModelError> {
        let input = input_tensor(tensor, self.layout)?;

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ModelError::Inference(format!("{:#}", e)))?;

        let output = outputs
            .first()
            .ok_or(ModelError::EmptyOutput)?
            .to_array_view::<f32>()
            .map_err(|e| ModelError::Inference(format!("{:#}", e)))?;

        let scores: Vec<f32> = output.iter().copied().collect();

        let _ = self.logger.debug(&format!("Scores: {:?}", scores));

        Ok(scores)
    }

    fn num_classes(&self) -> Option<usize> {
        self.num_classes
    }
}
