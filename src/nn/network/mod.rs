/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : Ann 前馈神经网络的底层实现
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 创建 + 基础访问器 + 随机种子
 * - topology.rs: 拓扑构建与校验（显式连接、全连接前馈）
 * - weights.rs: 权重随机化
 * - io.rs: 输入绑定 / 输出读取
 * - activation.rs: 单次前向激活
 * - serialization.rs: 纯文本持久化
 * - describe.rs: 诊断输出 / 摘要 / 描述符
 */

mod activation;
mod core;
mod describe;
mod io;
mod serialization;
mod topology;
mod weights;

pub use activation::sigmoid;

use super::config::NeuronCounts;
use super::neuron::{Connection, Neuron};
use rand::rngs::StdRng;

/// 前馈人工神经网络
///
/// 持有按索引排列的神经元序列与连接序列。神经元的索引布局（输入、隐藏、输出）
/// 是所有遍历逻辑的依据，激活时从不按神经元类型分派。
///
/// 单个网络不支持并发修改；需要句柄语义时使用 [`crate::nn::AnnHandle`]。
#[derive(Debug, Clone)]
pub struct Ann {
    pub(in crate::nn) counts: NeuronCounts,
    pub(in crate::nn) neurons: Vec<Neuron>,
    pub(in crate::nn) connections: Vec<Connection>,
    /// 网络级别的随机数生成器（用于权重随机化）
    /// None 表示使用默认的 thread_rng（非确定性）
    pub(in crate::nn) rng: Option<StdRng>,
}
