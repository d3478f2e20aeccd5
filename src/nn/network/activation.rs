/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : Ann 单次前向激活
 */

use super::Ann;
use crate::nn::neuron::NeuronType;

/// |x| 超过该值时 sigmoid 直接饱和，避免 exp 溢出
const SIGMOID_SATURATION: f64 = 15.0;

/// 带饱和保护的 logistic 函数：1 / (1 + e^(-x))
///
/// x < -15 时返回 0.0，x > 15 时返回 1.0。
pub fn sigmoid(x: f64) -> f64 {
    if x < -SIGMOID_SATURATION {
        0.0
    } else if x > SIGMOID_SATURATION {
        1.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}

impl Ann {
    /// 执行一次前向激活（原地修改，无返回值）
    ///
    /// 1. 遍历所有连接：`data = weight * source.output`，累加到目标的 `input_sum`；
    /// 2. 按索引顺序对所有非输入神经元：`output = sigmoid(input_sum)`，再将 `input_sum` 清零。
    ///
    /// 所有连接都在任何神经元更新之前计算完毕，因此源为非输入神经元的连接传递的是
    /// 上一次激活的输出（见 [`Ann::delayed_connections`]）。深度为 d 的前馈网络在输入
    /// 不变时需要 d 次激活才能让输入影响到输出。不做环检测，也不做拓扑排序。
    pub fn activate(&mut self) {
        for conn in &mut self.connections {
            conn.data = conn.weight * self.neurons[conn.source].output;
            self.neurons[conn.target].input_sum += conn.data;
        }

        for neuron in &mut self.neurons[self.counts.input..] {
            neuron.output = sigmoid(neuron.input_sum);
            neuron.input_sum = 0.0;
        }
    }

    /// 源神经元不是输入神经元的连接索引
    ///
    /// 这些连接在单次激活中传递的是源神经元上一次激活的输出。
    pub fn delayed_connections(&self) -> Vec<usize> {
        self.connections
            .iter()
            .enumerate()
            .filter(|(_, c)| self.counts.type_of(c.source) != NeuronType::Input)
            .map(|(i, _)| i)
            .collect()
    }

    /// 最长的连接链长度（以连接条数计），即输入变化传到全部神经元所需的激活次数
    ///
    /// 拓扑中存在环时返回 None。
    pub fn propagation_depth(&self) -> Option<usize> {
        let total = self.neurons.len();
        let mut in_degree = vec![0usize; total];
        let mut children = vec![Vec::new(); total];
        for conn in &self.connections {
            in_degree[conn.target] += 1;
            children[conn.source].push(conn.target);
        }

        // Kahn 拓扑排序，顺带记录每个神经元距源头的最长路径
        let mut depth = vec![0usize; total];
        let mut queue: Vec<usize> = (0..total).filter(|&n| in_degree[n] == 0).collect();
        let mut visited = 0;
        while let Some(n) = queue.pop() {
            visited += 1;
            for &child in &children[n] {
                depth[child] = depth[child].max(depth[n] + 1);
                in_degree[child] -= 1;
                if in_degree[child] == 0 {
                    queue.push(child);
                }
            }
        }

        (visited == total).then(|| depth.into_iter().max().unwrap_or(0))
    }
}
