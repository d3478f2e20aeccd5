/*
 * @Author       : 老董
 * @Date         : 2026-02-07
 * @Description  : Ann 句柄（面向外部调用方的扁平接口）
 */

use super::config::{NeuronCounts, OutputRange, WeightRange};
use super::network::Ann;
use crate::errors::{AnnError, AnnResult};
use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

/// 返回码：成功
pub const STATUS_OK: i32 = 0;
/// 返回码：失败
pub const STATUS_FAILURE: i32 = -1;

/// 将操作结果映射为扁平接口的返回码（0 成功，-1 失败）
pub fn status<T>(result: &AnnResult<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(_) => STATUS_FAILURE,
    }
}

/// AnnHandle - 网络句柄
///
/// # 设计原则
/// - 是 `Rc<RefCell<Ann>>` 的薄封装，句柄本身不是 `Send`，同一网络只能在单线程内使用
/// - Clone 语义：多个句柄引用同一个网络
/// - 每个能力对应一个方法，接收原始的整数/浮点缓冲区
/// - 最后一个句柄被丢弃时网络随之销毁
#[derive(Debug, Clone)]
pub struct AnnHandle {
    inner: Rc<RefCell<Ann>>,
}

impl AnnHandle {
    // ==================== 创建 ====================

    /// 由数量与连接数组创建网络
    ///
    /// 负数的数量或索引被视为参数错误，而不是终止进程。
    pub fn new(
        counts: &[i32],
        sources: &[i32],
        targets: &[i32],
        weights: &[f64],
    ) -> AnnResult<Self> {
        let counts = counts
            .iter()
            .map(|&n| {
                usize::try_from(n).map_err(|_| AnnError::NegativeNeuronCount { value: n.into() })
            })
            .collect::<AnnResult<Vec<_>>>()?;
        let counts = NeuronCounts::from_slice(&counts)?;
        Ann::check_edge_lengths(sources.len(), targets.len(), weights.len())?;

        let sources = Self::to_indices(sources, counts.total())?;
        let targets = Self::to_indices(targets, counts.total())?;
        Ok(Self::from_inner(Ann::with_topology(
            counts, &sources, &targets, weights,
        )?))
    }

    /// 从序列化文件创建网络
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnnResult<Self> {
        Ok(Self::from_inner(Ann::from_file(path)?))
    }

    /// 从现有 Ann 创建句柄
    pub fn from_inner(inner: Ann) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// 获取内部 Ann 的不可变引用
    pub fn inner(&self) -> std::cell::Ref<'_, Ann> {
        self.inner.borrow()
    }

    /// 获取内部 Ann 的可变引用
    pub fn inner_mut(&self) -> std::cell::RefMut<'_, Ann> {
        self.inner.borrow_mut()
    }

    // ==================== 网络操作 ====================

    pub fn fully_connect_feedforward(&self) {
        self.inner.borrow_mut().fully_connect_feedforward();
    }

    pub fn randomize_weights(&self, min: f64, max: f64) -> AnnResult<()> {
        self.inner.borrow_mut().randomize_weights(min, max)
    }

    pub fn randomize_weights_in(&self, range: WeightRange) -> AnnResult<()> {
        self.randomize_weights(range.min, range.max)
    }

    pub fn set_input(&self, values: &[f64]) -> AnnResult<()> {
        self.inner.borrow_mut().set_input(values)
    }

    /// 将输出写入调用方缓冲区，长度须等于输出神经元数量
    pub fn get_output(&self, buffer: &mut [f64]) -> AnnResult<()> {
        self.inner.borrow().get_output_into(buffer)
    }

    /// 将按 `range` 映射后的输出写入调用方缓冲区
    pub fn get_output_scaled(&self, buffer: &mut [f64], range: OutputRange) -> AnnResult<()> {
        let ann = self.inner.borrow();
        if buffer.len() != ann.num_output() {
            return Err(AnnError::OutputLengthMismatch {
                expected: ann.num_output(),
                got: buffer.len(),
            });
        }
        buffer.copy_from_slice(&ann.get_output_scaled(range)?);
        Ok(())
    }

    pub fn activate(&self) {
        self.inner.borrow_mut().activate();
    }

    pub fn serialize<P: AsRef<Path>>(&self, path: P) -> AnnResult<()> {
        self.inner.borrow().serialize(path)
    }

    pub fn deserialize<P: AsRef<Path>>(&self, path: P) -> AnnResult<()> {
        self.inner.borrow_mut().deserialize(path)
    }

    /// 将网络信息打印到标准输出
    pub fn describe(&self) {
        print!("{}", self.inner.borrow());
    }

    /// 将网络信息写入指定输出流
    pub fn describe_to(&self, sink: &mut dyn Write) -> AnnResult<()> {
        Ok(self.inner.borrow().stream_describe(sink)?)
    }

    // ==================== 内部工具 ====================

    fn to_indices(raw: &[i32], total: usize) -> AnnResult<Vec<usize>> {
        raw.iter()
            .enumerate()
            .map(|(c, &index)| {
                usize::try_from(index).map_err(|_| AnnError::NeuronIndexOutOfRange {
                    connection: c,
                    index: index.into(),
                    total,
                })
            })
            .collect()
    }
}
