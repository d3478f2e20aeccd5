/*
 * @Author       : 老董
 * @Date         : 2026-02-05
 * @Description  : Ann 纯文本序列化（serialize/deserialize）
 *
 * 文件格式（每个字段独占一行）：
 * - 输入数、隐藏数、输出数、输入+隐藏数、神经元总数
 * - 每个神经元的类型编码（按索引顺序）
 * - 连接总数
 * - 每条连接依次为：源索引、目标索引、权重
 *
 * 读取时按空白分隔解析，与旧版文件兼容。
 */

use super::Ann;
use crate::errors::{AnnError, AnnResult};
use crate::nn::config::NeuronCounts;
use crate::nn::neuron::{Connection, Neuron, NeuronType};
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

impl Ann {
    /// 将网络写入文本文件
    pub fn serialize<P: AsRef<Path>>(&self, path: P) -> AnnResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| AnnError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        tracing::debug!(path = %path.display(), "网络已保存");
        Ok(())
    }

    /// 将网络以文本格式写入任意输出流
    pub fn write_to<W: Write>(&self, mut writer: W) -> AnnResult<()> {
        let counts = self.counts;
        writeln!(writer, "{}", counts.input)?;
        writeln!(writer, "{}", counts.hidden)?;
        writeln!(writer, "{}", counts.output)?;
        writeln!(writer, "{}", counts.input_plus_hidden())?;
        writeln!(writer, "{}", self.neurons.len())?;

        for neuron in &self.neurons {
            writeln!(writer, "{}", neuron.neuron_type.code())?;
        }

        writeln!(writer, "{}", self.connections.len())?;
        for conn in &self.connections {
            writeln!(writer, "{}", conn.source)?;
            writeln!(writer, "{}", conn.target)?;
            writeln!(writer, "{}", conn.weight)?;
        }
        Ok(())
    }

    /// 从文本文件读取网络，整体替换当前的神经元与连接
    ///
    /// 先完整解析并校验，成功后才提交；失败时网络保持原状。随机种子不受影响。
    pub fn deserialize<P: AsRef<Path>>(&mut self, path: P) -> AnnResult<()> {
        let loaded = Self::from_file(path)?;
        self.counts = loaded.counts;
        self.neurons = loaded.neurons;
        self.connections = loaded.connections;
        Ok(())
    }

    /// 从文本文件创建网络
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnnResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AnnError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ann = Self::read_from(BufReader::new(file))
            .inspect_err(|e| tracing::warn!(path = %path.display(), "{e}"))?;
        tracing::debug!(
            path = %path.display(),
            neurons = ann.neurons.len(),
            connections = ann.connections.len(),
            "网络已加载"
        );
        Ok(ann)
    }

    /// 从任意输入流解析文本格式的网络
    pub fn read_from<R: BufRead>(mut reader: R) -> AnnResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => AnnError::Format {
                line: 0,
                message: format!("文件内容不是合法的UTF-8文本: {e}"),
            },
            _ => AnnError::Stream(e),
        })?;
        let mut fields = FieldReader::new(&text);

        let input: usize = fields.next("输入神经元数")?;
        let hidden: usize = fields.next("隐藏神经元数")?;
        let output: usize = fields.next("输出神经元数")?;
        let counts = NeuronCounts::new(input, hidden, output);
        let (Some(input_plus_hidden), Some(expected_total)) =
            (counts.checked_input_plus_hidden(), counts.checked_total())
        else {
            return Err(fields.error(format!(
                "神经元数量之和溢出：输入{input}，隐藏{hidden}，输出{output}"
            )));
        };

        // 第4个字段是冗余的派生值，重新计算并校验
        let stored_input_plus_hidden: usize = fields.next("输入+隐藏神经元数")?;
        if stored_input_plus_hidden != input_plus_hidden {
            return Err(fields.error(format!(
                "输入+隐藏神经元数应为{input_plus_hidden}，文件中为{stored_input_plus_hidden}"
            )));
        }
        let total: usize = fields.next("神经元总数")?;
        if total != expected_total {
            return Err(fields.error(format!(
                "神经元总数应为{expected_total}，文件中为{total}"
            )));
        }

        let mut neurons = Vec::new();
        for n in 0..total {
            let code: i64 = fields.next("神经元类型")?;
            let neuron_type = NeuronType::from_code(code)
                .ok_or_else(|| fields.error(format!("未知的神经元类型编码{code}")))?;
            let expected = counts.type_of(n);
            if neuron_type != expected {
                return Err(fields.error(format!(
                    "第{n}个神经元应为{expected}神经元，文件中为{neuron_type}神经元"
                )));
            }
            neurons.push(Neuron::new(neuron_type));
        }

        let num_connections: usize = fields.next("连接总数")?;
        let mut connections = Vec::new();
        for c in 0..num_connections {
            let source: usize = fields.next("连接源索引")?;
            let target: usize = fields.next("连接目标索引")?;
            let weight: f64 = fields.next("连接权重")?;
            for index in [source, target] {
                Self::check_neuron_index(c, index, total)
                    .map_err(|e| fields.error(e.to_string()))?;
            }
            connections.push(Connection::new(source, target, weight));
        }

        Ok(Self::from_parts(counts, neurons, connections))
    }
}

/// 按空白分隔逐个读取字段，并记录当前字段序号（用于报错）
struct FieldReader<'a> {
    fields: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> FieldReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            fields: text.split_whitespace(),
            position: 0,
        }
    }

    fn next<T>(&mut self, what: &str) -> AnnResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.position += 1;
        let raw = self
            .fields
            .next()
            .ok_or_else(|| self.error(format!("缺少字段：{what}")))?;
        raw.parse()
            .map_err(|e| self.error(format!("{what}“{raw}”无法解析: {e}")))
    }

    fn error(&self, message: String) -> AnnError {
        AnnError::Format {
            line: self.position,
            message,
        }
    }
}
