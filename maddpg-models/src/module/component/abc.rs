use burn::{prelude::Backend, tensor::Tensor};

/// Deterministic policy evaluated over a batch of per-agent observations.
pub trait Policy<B: Backend> {
    fn a_batch(&self, states: Tensor<B, 2>) -> Tensor<B, 2>;
}

/// Centralised action-value estimate over the agents' joint states and actions.
pub trait ActionValue<B: Backend> {
    fn q_batch(&self, states: Tensor<B, 2>, actions: Tensor<B, 2>) -> Tensor<B, 1>;
}
