/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 负责前馈神经网络（feedforward ANN）的构建、激活与持久化
 */

mod config;
mod descriptor;
mod handle;
mod network;
mod neuron;

pub use config::{NeuronCounts, OutputRange, WeightRange};
pub use descriptor::{AnnDescriptor, ConnectionDescriptor};
pub use handle::{AnnHandle, STATUS_FAILURE, STATUS_OK, status};
pub use network::{Ann, sigmoid};
pub use neuron::{Connection, Neuron, NeuronType};

#[cfg(test)]
mod tests;
