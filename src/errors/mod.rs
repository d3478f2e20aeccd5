use std::path::PathBuf;
use thiserror::Error;
mod ops;
pub use self::ops::*;

pub type AnnResult<T> = Result<T, AnnError>;

#[derive(Error, Debug)]
pub enum AnnError {
    // 构建参数
    #[error("神经元数量向量须含2或3个元素，实际为{len}个")]
    InvalidNeuronCounts { len: usize },
    #[error(
        "连接的源、目标和权重数组长度须一致：源{sources}个，目标{targets}个，权重{weights}个"
    )]
    EdgeLengthMismatch {
        sources: usize,
        targets: usize,
        weights: usize,
    },
    #[error("神经元总数超出可表示范围：输入{input}，隐藏{hidden}，输出{output}")]
    NeuronCountOverflow {
        input: usize,
        hidden: usize,
        output: usize,
    },
    #[error("神经元数量不能为负数：{value}")]
    NegativeNeuronCount { value: i64 },
    #[error("第{connection}条连接的神经元索引{index}越界，有效范围为[0, {total})")]
    NeuronIndexOutOfRange {
        connection: usize,
        index: i64,
        total: usize,
    },

    // 构建后的调用参数
    #[error("随机化权重时须满足min{}max：min={min}，max={max}", ComparisonOperator::LessThan)]
    InvalidWeightRange { min: f64, max: f64 },
    #[error("输出映射区间须满足low{}high：low={low}，high={high}", ComparisonOperator::LessThan)]
    InvalidOutputRange { low: f64, high: f64 },
    #[error("输入向量长度须与输入神经元数量一致：期望{expected}，实际{got}")]
    InputLengthMismatch { expected: usize, got: usize },
    #[error("输出缓冲区长度须与输出神经元数量一致：期望{expected}，实际{got}")]
    OutputLengthMismatch { expected: usize, got: usize },

    // 持久化
    #[error("无法打开文件{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("读写网络数据失败: {0}")]
    Stream(#[from] std::io::Error),
    #[error("网络文件格式错误（第{line}个字段）：{message}")]
    Format { line: usize, message: String },
    #[error("网络描述JSON无效: {0}")]
    Json(String),
}

impl AnnError {
    /// 错误所属大类
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNeuronCounts { .. }
            | Self::NeuronCountOverflow { .. }
            | Self::NegativeNeuronCount { .. }
            | Self::EdgeLengthMismatch { .. }
            | Self::NeuronIndexOutOfRange { .. }
            | Self::InvalidWeightRange { .. }
            | Self::InvalidOutputRange { .. }
            | Self::InputLengthMismatch { .. }
            | Self::OutputLengthMismatch { .. } => ErrorKind::Config,
            Self::Io { .. } | Self::Stream(_) => ErrorKind::Io,
            Self::Format { .. } | Self::Json(_) => ErrorKind::Format,
        }
    }
}
