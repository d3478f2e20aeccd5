/*
 * @Author       : 老董
 * @Date         : 2026-02-06
 * @Description  : 网络描述符（Ann Descriptor）
 *                 可序列化的中间表示，用于 JSON 导出/导入和调试输出
 */

use super::config::NeuronCounts;
use super::neuron::NeuronType;
use serde::{Deserialize, Serialize};

/// 网络的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnDescriptor {
    /// 导出时的 crate 版本，仅作记录，导入时不校验
    pub version: String,
    pub counts: NeuronCounts,
    /// 每个神经元的类型（按索引顺序）
    pub neurons: Vec<NeuronType>,
    pub connections: Vec<ConnectionDescriptor>,
}

/// 连接描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

impl AnnDescriptor {
    /// 创建新的网络描述符（尚无连接）
    pub fn new(counts: NeuronCounts) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            counts,
            neurons: (0..counts.total()).map(|n| counts.type_of(n)).collect(),
            connections: Vec::new(),
        }
    }

    /// 添加连接描述
    pub fn add_connection(&mut self, source: usize, target: usize, weight: f64) {
        self.connections.push(ConnectionDescriptor {
            source,
            target,
            weight,
        });
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
