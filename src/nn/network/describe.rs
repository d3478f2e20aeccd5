/*
 * @Author       : 老董
 * @Date         : 2026-02-06
 * @Description  : Ann 诊断输出 / 摘要 / 描述符导入导出
 */

use super::Ann;
use crate::errors::{AnnError, AnnResult};
use crate::nn::descriptor::AnnDescriptor;
use std::fmt;
use std::io::{self, Write};

impl Ann {
    // ========== 诊断输出 ==========

    /// 向任意输出流写入可读的网络信息（数量、神经元类型编码、连接及权重）
    ///
    /// 仅供阅读，不是可回读的格式。
    pub fn stream_describe(&self, sink: &mut dyn Write) -> io::Result<()> {
        writeln!(sink, "神经元总数  : {}", self.neurons.len())?;
        writeln!(sink, "输入神经元数: {}", self.counts.input)?;
        writeln!(sink, "隐藏神经元数: {}", self.counts.hidden)?;
        writeln!(sink, "输出神经元数: {}", self.counts.output)?;

        let codes: Vec<String> = self
            .neurons
            .iter()
            .map(|n| n.neuron_type.code().to_string())
            .collect();
        writeln!(sink, "{}", codes.join(" "))?;

        writeln!(sink, "连接总数: {}", self.connections.len())?;
        for conn in &self.connections {
            writeln!(sink, "{} --> {} : {}", conn.source, conn.target, conn.weight)?;
        }
        Ok(())
    }

    // ========== 模型摘要（summary）==========

    /// 打印网络摘要
    pub fn summary(&self) {
        println!("{}", self.summary_string());
    }

    /// 返回网络摘要字符串（按神经元列出类型、当前输出及入/出连接数）
    pub fn summary_string(&self) -> String {
        let mut fan_in = vec![0usize; self.neurons.len()];
        let mut fan_out = vec![0usize; self.neurons.len()];
        for conn in &self.connections {
            fan_in[conn.target] += 1;
            fan_out[conn.source] += 1;
        }

        let mut output = String::new();
        output.push_str("┌──────┬──────┬──────────────┬──────┬──────┐\n");
        output.push_str("│ 索引 │ 类型 │ 输出         │ 入边 │ 出边 │\n");
        output.push_str("├──────┼──────┼──────────────┼──────┼──────┤\n");
        for (n, neuron) in self.neurons.iter().enumerate() {
            output.push_str(&format!(
                "│ {:<4} │ {} │ {:<12.6} │ {:<4} │ {:<4} │\n",
                n, neuron.neuron_type, neuron.output, fan_in[n], fan_out[n]
            ));
        }
        output.push_str("└──────┴──────┴──────────────┴──────┴──────┘\n");
        output.push_str(&format!(
            "神经元: {}（输入 {} / 隐藏 {} / 输出 {}）  连接: {}",
            self.neurons.len(),
            self.counts.input,
            self.counts.hidden,
            self.counts.output,
            self.connections.len()
        ));
        output
    }

    // ========== 描述符（describe）==========

    /// 导出网络的描述符（拓扑 + 权重，不含激活状态）
    ///
    /// # 示例
    /// ```
    /// use simple_ann::nn::Ann;
    ///
    /// let ann = Ann::new(&[1, 1], &[0], &[1], &[1.0]).unwrap();
    /// let json = ann.describe().to_json().unwrap();
    /// assert!(json.contains("\"weight\": 1.0"));
    /// ```
    pub fn describe(&self) -> AnnDescriptor {
        let mut descriptor = AnnDescriptor::new(self.counts);
        for conn in &self.connections {
            descriptor.add_connection(conn.source, conn.target, conn.weight);
        }
        descriptor
    }

    /// 由描述符重建网络，校验神经元类型与索引布局一致、连接索引不越界
    pub fn from_descriptor(descriptor: &AnnDescriptor) -> AnnResult<Self> {
        let counts = descriptor.counts;
        counts.validate()?;
        if descriptor.neurons.len() != counts.total() {
            return Err(AnnError::Json(format!(
                "神经元数量应为{}，描述中为{}",
                counts.total(),
                descriptor.neurons.len()
            )));
        }
        if let Some((n, t)) = descriptor
            .neurons
            .iter()
            .enumerate()
            .find(|&(n, &t)| t != counts.type_of(n))
        {
            return Err(AnnError::Json(format!(
                "第{n}个神经元应为{}神经元，描述中为{t}神经元",
                counts.type_of(n)
            )));
        }

        let sources: Vec<usize> = descriptor.connections.iter().map(|c| c.source).collect();
        let targets: Vec<usize> = descriptor.connections.iter().map(|c| c.target).collect();
        let weights: Vec<f64> = descriptor.connections.iter().map(|c| c.weight).collect();
        Self::with_topology(counts, &sources, &targets, &weights)
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> AnnResult<String> {
        self.describe()
            .to_json()
            .map_err(|e| AnnError::Json(e.to_string()))
    }

    /// 从 JSON 字符串重建网络
    pub fn from_json(json: &str) -> AnnResult<Self> {
        let descriptor =
            AnnDescriptor::from_json(json).map_err(|e| AnnError::Json(e.to_string()))?;
        Self::from_descriptor(&descriptor)
    }
}

impl fmt::Display for Ann {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        self.stream_describe(&mut buffer).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}
