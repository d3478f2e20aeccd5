/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : Ann 拓扑构建：显式连接构建 + 全连接前馈生成 + 索引校验
 */

use super::Ann;
use crate::errors::{AnnError, AnnResult};
use crate::nn::config::NeuronCounts;
use crate::nn::neuron::Connection;

impl Ann {
    /// 由数量向量与显式连接构建网络
    ///
    /// - `counts`：长度为2（输入、输出）或3（输入、隐藏、输出）
    /// - `sources`/`targets`/`weights`：三者长度须一致，允许为空（无连接）
    ///
    /// 连接按给定顺序保存。任一索引越界则整体失败，不产生网络。
    ///
    /// # 示例
    /// ```
    /// use simple_ann::nn::Ann;
    ///
    /// // 2个输入直连1个输出
    /// let ann = Ann::new(&[2, 1], &[0, 1], &[2, 2], &[0.5, 0.5]).unwrap();
    /// assert_eq!(ann.total_neurons(), 3);
    /// assert_eq!(ann.total_connections(), 2);
    /// ```
    pub fn new(
        counts: &[usize],
        sources: &[usize],
        targets: &[usize],
        weights: &[f64],
    ) -> AnnResult<Self> {
        let counts = NeuronCounts::from_slice(counts)?;
        Self::with_topology(counts, sources, targets, weights)
    }

    /// 同 [`Ann::new`]，但数量已解析为 [`NeuronCounts`]
    pub fn with_topology(
        counts: NeuronCounts,
        sources: &[usize],
        targets: &[usize],
        weights: &[f64],
    ) -> AnnResult<Self> {
        counts.validate()?;
        Self::check_edge_lengths(sources.len(), targets.len(), weights.len())?;

        let total = counts.total();
        let connections = sources
            .iter()
            .zip(targets)
            .zip(weights)
            .enumerate()
            .map(|(c, ((&src, &trg), &w))| {
                Self::check_neuron_index(c, src, total)?;
                Self::check_neuron_index(c, trg, total)?;
                Ok(Connection::new(src, trg, w))
            })
            .collect::<AnnResult<Vec<_>>>()?;

        let mut ann = Self::with_counts(counts);
        ann.connections = connections;
        tracing::debug!(
            input = counts.input,
            hidden = counts.hidden,
            output = counts.output,
            connections = ann.connections.len(),
            "创建网络"
        );
        Ok(ann)
    }

    /// 丢弃现有连接，重建为全连接前馈拓扑
    ///
    /// 先为每个（输入，隐藏）对建一条边，再为每个（隐藏，输出）对建一条边，权重均为0。
    /// 连接总数为 hidden * (input + output)；无隐藏层时结果为零条连接。
    pub fn fully_connect_feedforward(&mut self) {
        let counts = self.counts;
        let mut connections = Vec::with_capacity(counts.hidden * (counts.input + counts.output));
        for i in counts.input_range() {
            for h in counts.hidden_range() {
                connections.push(Connection::new(i, h, 0.0));
            }
        }
        for h in counts.hidden_range() {
            for o in counts.output_range() {
                connections.push(Connection::new(h, o, 0.0));
            }
        }
        if counts.hidden == 0 {
            tracing::warn!("网络没有隐藏神经元，全连接前馈后连接数为0");
        }
        self.connections = connections;
    }

    /// 校验三个连接数组长度一致
    pub(in crate::nn) fn check_edge_lengths(
        sources: usize,
        targets: usize,
        weights: usize,
    ) -> AnnResult<()> {
        if sources == targets && sources == weights {
            Ok(())
        } else {
            Err(AnnError::EdgeLengthMismatch {
                sources,
                targets,
                weights,
            })
        }
    }

    /// 校验第 `connection` 条连接的端点索引是否落在 [0, total) 内
    pub(in crate::nn) fn check_neuron_index(
        connection: usize,
        index: usize,
        total: usize,
    ) -> AnnResult<()> {
        if index < total {
            Ok(())
        } else {
            Err(AnnError::NeuronIndexOutOfRange {
                connection,
                index: index as i64,
                total,
            })
        }
    }
}
