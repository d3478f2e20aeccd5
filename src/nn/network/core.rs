/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : Ann 基础操作：原始创建 + 访问器 + 随机种子
 */

use super::Ann;
use crate::nn::config::NeuronCounts;
use crate::nn::neuron::{Connection, Neuron};
use rand::SeedableRng;
use rand::rngs::StdRng;

impl Ann {
    // ========== 创建 ==========

    /// 按数量分配神经元（顺序：输入、隐藏、输出），不含任何连接；数量须已校验
    pub(in crate::nn) fn with_counts(counts: NeuronCounts) -> Self {
        let neurons = (0..counts.total())
            .map(|n| Neuron::new(counts.type_of(n)))
            .collect();
        Self {
            counts,
            neurons,
            connections: Vec::new(),
            rng: None,
        }
    }

    /// 由已校验的部件直接组装（反序列化等内部路径使用）
    pub(in crate::nn) fn from_parts(
        counts: NeuronCounts,
        neurons: Vec<Neuron>,
        connections: Vec<Connection>,
    ) -> Self {
        Self {
            counts,
            neurons,
            connections,
            rng: None,
        }
    }

    // ========== 随机种子 ==========

    /// 设置/重置网络的随机种子
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = Some(StdRng::seed_from_u64(seed));
    }

    /// 链式设置随机种子
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.set_seed(seed);
        self
    }

    /// 检查网络是否有固定种子
    pub const fn has_seed(&self) -> bool {
        self.rng.is_some()
    }

    // ========== 基础访问器 ==========

    pub const fn counts(&self) -> NeuronCounts {
        self.counts
    }

    pub const fn num_input(&self) -> usize {
        self.counts.input
    }

    pub const fn num_hidden(&self) -> usize {
        self.counts.hidden
    }

    pub const fn num_output(&self) -> usize {
        self.counts.output
    }

    pub const fn num_input_plus_hidden(&self) -> usize {
        self.counts.input_plus_hidden()
    }

    pub fn total_neurons(&self) -> usize {
        self.neurons.len()
    }

    pub fn total_connections(&self) -> usize {
        self.connections.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// 获取某条连接权重的可变引用（拓扑本身不可修改）
    pub fn weight_mut(&mut self, connection: usize) -> Option<&mut f64> {
        self.connections.get_mut(connection).map(|c| &mut c.weight)
    }

    /// 当前所有连接的权重（按连接顺序）
    pub fn weights(&self) -> Vec<f64> {
        self.connections.iter().map(|c| c.weight).collect()
    }

    /// 清零所有神经元的累加值与输出、所有连接的传递值
    pub fn reset_state(&mut self) {
        for neuron in &mut self.neurons {
            neuron.input_sum = 0.0;
            neuron.output = 0.0;
        }
        for conn in &mut self.connections {
            conn.data = 0.0;
        }
    }
}
