/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 神经元与连接（网络的基本数据单元）
 */

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// 神经元类型
///
/// 整数编码沿用旧版网络文件的约定：输入=0，输出=1，隐藏=2。
/// 注意编码顺序与索引布局（输入、隐藏、输出）并不相同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeuronType {
    Input,
    Output,
    Hidden,
}

impl NeuronType {
    /// 持久化用的整数编码
    pub const fn code(self) -> u8 {
        match self {
            Self::Input => 0,
            Self::Output => 1,
            Self::Hidden => 2,
        }
    }

    /// 从整数编码解析，未知编码返回 None
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Input),
            1 => Some(Self::Output),
            2 => Some(Self::Hidden),
            _ => None,
        }
    }
}

impl Display for NeuronType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "输入",
            Self::Output => "输出",
            Self::Hidden => "隐藏",
        };
        write!(f, "{name}")
    }
}

/// 单个计算神经元
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    /// 本轮激活累加的输入和
    pub input_sum: f64,
    /// 上一次激活的输出（输入神经元则为外部设定的值）
    pub output: f64,
    pub neuron_type: NeuronType,
}

impl Neuron {
    pub const fn new(neuron_type: NeuronType) -> Self {
        Self {
            input_sum: 0.0,
            output: 0.0,
            neuron_type,
        }
    }
}

/// 两个神经元之间的有向带权连接
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    /// 最近一次激活中传递的值（weight * source.output）
    pub data: f64,
}

impl Connection {
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
            data: 0.0,
        }
    }
}
