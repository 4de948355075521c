use burn::nn::{Dropout, DropoutConfig, LeakyRelu, LeakyReluConfig, Linear, LinearConfig};
use burn::prelude::*;

use crate::module::component::abc::ActionValue;
use crate::module::nn::init::{reinit_hidden, reinit_uniform};

#[derive(Config)]
pub struct CriticConfig {
    /// Width of all agents' state vectors concatenated.
    state_size: usize,
    /// Width of all agents' action vectors concatenated.
    action_size: usize,
    /// Recorded with the run configuration; weight draws come from the
    /// backend's ambient generator (seed it with `B::seed`).
    seed: u64,
    #[config(default = 256)]
    fcs1_units: usize,
    #[config(default = 128)]
    fc2_units: usize,
}

/// Value network. Maps the agents' joint state and joint action to one
/// unbounded quality estimate per sample.
#[derive(Module, Debug)]
pub struct Critic<B: Backend> {
    fcs1: Linear<B>,
    fc2: Linear<B>,
    fc3: Linear<B>,
    dropout: Dropout,
    activation: LeakyRelu,
}

impl CriticConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> Critic<B> {
        self.assertions();
        let fcs1 = reinit_hidden(LinearConfig::new(self.state_size, self.fcs1_units).init(device));
        let fc2 = reinit_hidden(
            LinearConfig::new(self.fcs1_units + self.action_size, self.fc2_units).init(device),
        );
        // narrow output weights keep the initial value estimates close to zero
        let fc3 = reinit_uniform(LinearConfig::new(self.fc2_units, 1).init(device), 3e-3);
        Critic {
            fcs1,
            fc2,
            fc3,
            dropout: DropoutConfig::new(0.2).init(),
            activation: LeakyReluConfig::new().init(),
        }
    }

    fn assertions(&self) {
        assert!(
            self.state_size > 0,
            "state_size should be a positive integer. got {}",
            self.state_size
        );
        assert!(
            self.action_size > 0,
            "action_size should be a positive integer. got {}",
            self.action_size
        );
        assert!(
            self.fcs1_units > 0 && self.fc2_units > 0,
            "hidden layer widths should be positive integers. got ({}, {})",
            self.fcs1_units,
            self.fc2_units
        );
    }
}

impl<B: Backend> Critic<B> {
    /// The state batch passes through `fcs1` before the raw actions are joined
    /// along the feature dimension. Batch dimensions of `state` and `action`
    /// must match; the concatenation rejects anything else.
    pub fn forward(&self, state: Tensor<B, 2>, action: Tensor<B, 2>) -> Tensor<B, 2> {
        let xs = self.fcs1.forward(state);
        let xs = self.dropout.forward(self.activation.forward(xs));
        let x = Tensor::cat(vec![xs, action], 1);
        let x = self.fc2.forward(x);
        let x = self.dropout.forward(self.activation.forward(x));
        self.fc3.forward(x)
    }
}

impl<B: Backend> ActionValue<B> for Critic<B> {
    fn q_batch(&self, states: Tensor<B, 2>, actions: Tensor<B, 2>) -> Tensor<B, 1> {
        self.forward(states, actions).squeeze(1)
    }
}
