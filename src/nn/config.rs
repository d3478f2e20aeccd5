/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 网络构建与权重初始化的配置
 */

use super::neuron::NeuronType;
use crate::errors::{AnnError, AnnResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// 三类神经元的数量
///
/// 索引布局固定为：[0, input) 为输入，[input, input+hidden) 为隐藏，
/// [input+hidden, total) 为输出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NeuronCounts {
    pub input: usize,
    pub hidden: usize,
    pub output: usize,
}

impl NeuronCounts {
    pub const fn new(input: usize, hidden: usize, output: usize) -> Self {
        Self {
            input,
            hidden,
            output,
        }
    }

    /// 从长度为2或3的数量向量解析
    ///
    /// - `[input, output]`：无隐藏层
    /// - `[input, hidden, output]`
    pub fn from_slice(counts: &[usize]) -> AnnResult<Self> {
        let counts = match *counts {
            [input, output] => Self::new(input, 0, output),
            [input, hidden, output] => Self::new(input, hidden, output),
            _ => return Err(AnnError::InvalidNeuronCounts { len: counts.len() }),
        };
        counts.validate()?;
        Ok(counts)
    }

    /// 神经元总数须能用 usize 表示
    pub fn validate(&self) -> AnnResult<()> {
        match self.checked_total() {
            Some(_) => Ok(()),
            None => Err(AnnError::NeuronCountOverflow {
                input: self.input,
                hidden: self.hidden,
                output: self.output,
            }),
        }
    }

    pub const fn checked_input_plus_hidden(&self) -> Option<usize> {
        self.input.checked_add(self.hidden)
    }

    pub const fn checked_total(&self) -> Option<usize> {
        match self.checked_input_plus_hidden() {
            Some(n) => n.checked_add(self.output),
            None => None,
        }
    }

    /// 调用方需保证数量已通过 [`NeuronCounts::validate`]
    pub const fn input_plus_hidden(&self) -> usize {
        self.input + self.hidden
    }

    /// 调用方需保证数量已通过 [`NeuronCounts::validate`]
    pub const fn total(&self) -> usize {
        self.input + self.hidden + self.output
    }

    pub const fn input_range(&self) -> Range<usize> {
        0..self.input
    }

    pub const fn hidden_range(&self) -> Range<usize> {
        self.input..self.input_plus_hidden()
    }

    pub const fn output_range(&self) -> Range<usize> {
        self.input_plus_hidden()..self.total()
    }

    /// 按索引布局推断神经元类型（调用方需保证 index < total）
    pub const fn type_of(&self, index: usize) -> NeuronType {
        if index < self.input {
            NeuronType::Input
        } else if index < self.input_plus_hidden() {
            NeuronType::Hidden
        } else {
            NeuronType::Output
        }
    }
}

/// 权重随机化的区间 [min, max)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
        }
    }
}

impl WeightRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 须满足 min < max，且区间宽度有限（NaN/无穷同样视为非法）
    pub fn validate(&self) -> AnnResult<()> {
        if self.min < self.max && (self.max - self.min).is_finite() {
            Ok(())
        } else {
            Err(AnnError::InvalidWeightRange {
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// 输出值的映射区间 [low, high]
///
/// sigmoid 输出 y ∈ [0, 1] 线性映射为 `low + (high - low) * y`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputRange {
    pub low: f64,
    pub high: f64,
}

impl Default for OutputRange {
    fn default() -> Self {
        Self {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl OutputRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// 须满足 low < high，且区间宽度有限
    pub fn validate(&self) -> AnnResult<()> {
        if self.low < self.high && (self.high - self.low).is_finite() {
            Ok(())
        } else {
            Err(AnnError::InvalidOutputRange {
                low: self.low,
                high: self.high,
            })
        }
    }

    pub fn scale(&self, y: f64) -> f64 {
        self.low + (self.high - self.low) * y
    }
}
