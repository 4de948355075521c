use burn::module::Param;
use burn::nn::Linear;
use burn::prelude::*;
use burn::tensor::Distribution;

/// Symmetric weight bound for a hidden layer, scaled by the number of input
/// connections (the leading dimension of the stored weight tensor).
pub fn hidden_bound<B: Backend>(layer: &Linear<B>) -> f64 {
    let [fan_in, _] = layer.weight.val().dims();
    1.0 / (fan_in as f64).sqrt()
}

/// Redraws a layer's weights uniformly from `(-bound, bound)`, keeping the
/// bias at the values produced by `LinearConfig::init`.
pub fn reinit_uniform<B: Backend>(mut layer: Linear<B>, bound: f64) -> Linear<B> {
    layer.weight = Param::initialized(
        layer.weight.id,
        layer
            .weight
            .val()
            .random_like(Distribution::Uniform(-bound, bound)),
    );
    layer
}

/// Redraws a hidden layer's weights with the fan-in scaled bound.
pub fn reinit_hidden<B: Backend>(layer: Linear<B>) -> Linear<B> {
    let bound = hidden_bound(&layer);
    reinit_uniform(layer, bound)
}

#[cfg(test)]
mod tests {
    use burn::backend::NdArray;
    use burn::nn::LinearConfig;

    use super::*;

    #[test]
    fn test_hidden_bound_uses_input_width() {
        let device = &Default::default();
        let layer: Linear<NdArray> = LinearConfig::new(16, 32).init(device);
        assert!((hidden_bound(&layer) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_reinit_hidden_bounds_weights_and_keeps_bias() {
        let device = &Default::default();
        let layer: Linear<NdArray> = LinearConfig::new(4, 8).init(device);
        let bias_before = layer
            .bias
            .as_ref()
            .unwrap()
            .val()
            .into_data()
            .to_vec::<f32>()
            .unwrap();
        let layer = reinit_hidden(layer);
        let weights = layer.weight.val().into_data().to_vec::<f32>().unwrap();
        assert!(weights.iter().all(|w| w.abs() <= 0.5));
        let bias_after = layer
            .bias
            .as_ref()
            .unwrap()
            .val()
            .into_data()
            .to_vec::<f32>()
            .unwrap();
        assert_eq!(bias_before, bias_after);
    }

    #[test]
    fn test_reinit_uniform_narrow_bound() {
        let device = &Default::default();
        let layer: Linear<NdArray> = LinearConfig::new(128, 2).init(device);
        let layer = reinit_uniform(layer, 3e-3);
        let weights = layer.weight.val().into_data().to_vec::<f32>().unwrap();
        assert!(weights.iter().all(|w| w.abs() <= 3e-3));
    }
}
