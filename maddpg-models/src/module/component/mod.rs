pub mod abc;

pub use abc::{ActionValue, Policy};
