use burn::nn::{Dropout, DropoutConfig, Linear, LinearConfig, Relu};
use burn::prelude::*;

use crate::module::component::abc::Policy;
use crate::module::nn::init::{reinit_hidden, reinit_uniform};

#[derive(Config)]
pub struct ActorConfig {
    state_size: usize,
    action_size: usize,
    /// Recorded with the run configuration; weight draws come from the
    /// backend's ambient generator (seed it with `B::seed`).
    seed: u64,
    #[config(default = 256)]
    fc1_units: usize,
    #[config(default = 128)]
    fc2_units: usize,
}

/// Policy network. Maps one agent's observed state to an action vector with
/// every component in `[-1, 1]`.
#[derive(Module, Debug)]
pub struct Actor<B: Backend> {
    fc1: Linear<B>,
    fc2: Linear<B>,
    fc3: Linear<B>,
    dropout: Dropout,
    activation: Relu,
}

impl ActorConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> Actor<B> {
        self.assertions();
        let fc1 = reinit_hidden(LinearConfig::new(self.state_size, self.fc1_units).init(device));
        let fc2 = reinit_hidden(LinearConfig::new(self.fc1_units, self.fc2_units).init(device));
        // narrow output weights keep the initial policy close to the neutral action
        let fc3 = reinit_uniform(
            LinearConfig::new(self.fc2_units, self.action_size).init(device),
            3e-3,
        );
        Actor {
            fc1,
            fc2,
            fc3,
            dropout: DropoutConfig::new(0.2).init(),
            activation: Relu::new(),
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
            self.fc1_units > 0 && self.fc2_units > 0,
            "hidden layer widths should be positive integers. got ({}, {})",
            self.fc1_units,
            self.fc2_units
        );
    }
}

impl<B: Backend> Actor<B> {
    /// Dropout fires only on an autodiff backend; take `valid()` for inference.
    pub fn forward(&self, state: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.fc1.forward(state);
        let x = self.dropout.forward(self.activation.forward(x));
        let x = self.fc2.forward(x);
        let x = self.dropout.forward(self.activation.forward(x));
        self.fc3.forward(x).tanh()
    }
}

impl<B: Backend> Policy<B> for Actor<B> {
    fn a_batch(&self, states: Tensor<B, 2>) -> Tensor<B, 2> {
        self.forward(states)
    }
}
