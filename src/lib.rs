//! # Simple ANN
//!
//! `simple_ann`是一个极简的前馈人工神经网络求值引擎：持有固定的神经元与带权连接图，
//! 执行前向激活，并以纯文本格式保存/恢复拓扑与权重。
//! 网络拓扑通常由外部的演化控制器（如[NEAT](https://ieeexplore.ieee.org/document/6790655)）给出，
//! 本crate不包含任何训练或拓扑变异逻辑。
//!

pub mod errors;
pub mod nn;
pub mod utils;
