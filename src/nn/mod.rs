//! Minimal neural network built on [`Matrix`](crate::primitives::Matrix).
//!
//! A [`SingleLayerNetwork`] computes `σ(xW + b)` and learns with the delta
//! rule. Everything is expressed with the matrix operations of this crate
//! (`matmul`, `transpose`, `hadamard`, `scalar_multiply`, `add`), which makes
//! it a small end-to-end exercise of the float domain.
//!
//! # Example
//!
//! ```
//! use densemat::nn::{xor_dataset, SingleLayerNetwork, TrainerConfig};
//!
//! let (inputs, targets) = xor_dataset();
//! let config = TrainerConfig::default().with_seed(42);
//! let mut net = SingleLayerNetwork::from_config(2, 2, &config).expect("valid sizes");
//! let report = net.fit(&inputs, &targets, &config).expect("valid data");
//! println!("error {:.3} -> {:.3}", report.initial_error, report.final_error);
//! ```
//!
//! # References
//!
//! - Widrow, B., & Hoff, M. E. (1960). Adaptive switching circuits.
//!   IRE WESCON Convention Record.

mod activation;
mod network;
mod trainer;

pub use activation::{sigmoid, sigmoid_derivative, sigmoid_matrix};
pub use network::{SingleLayerNetwork, DEFAULT_WEIGHT_RANGE};
pub use trainer::{xor_dataset, TrainerConfig, TrainingReport};
