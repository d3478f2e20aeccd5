/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : Ann 输入绑定 / 输出读取
 */

use super::Ann;
use crate::errors::{AnnError, AnnResult};
use crate::nn::config::OutputRange;

impl Ann {
    /// 设置输入神经元的输出值
    ///
    /// `values` 长度须等于输入神经元数量，否则失败且网络不变。
    pub fn set_input(&mut self, values: &[f64]) -> AnnResult<()> {
        if values.len() != self.counts.input {
            let err = AnnError::InputLengthMismatch {
                expected: self.counts.input,
                got: values.len(),
            };
            tracing::warn!("{err}");
            return Err(err);
        }
        for (neuron, &value) in self.neurons[self.counts.input_range()]
            .iter_mut()
            .zip(values)
        {
            neuron.output = value;
        }
        Ok(())
    }

    /// 按索引顺序返回所有输出神经元的输出值
    pub fn get_output(&self) -> Vec<f64> {
        self.neurons[self.counts.output_range()]
            .iter()
            .map(|n| n.output)
            .collect()
    }

    /// 将输出值写入调用方提供的缓冲区（长度须等于输出神经元数量）
    pub fn get_output_into(&self, buffer: &mut [f64]) -> AnnResult<()> {
        if buffer.len() != self.counts.output {
            return Err(AnnError::OutputLengthMismatch {
                expected: self.counts.output,
                got: buffer.len(),
            });
        }
        for (slot, neuron) in buffer
            .iter_mut()
            .zip(&self.neurons[self.counts.output_range()])
        {
            *slot = neuron.output;
        }
        Ok(())
    }

    /// 设置输入、激活一次并返回输出
    pub fn activate_with(&mut self, inputs: &[f64]) -> AnnResult<Vec<f64>> {
        self.set_input(inputs)?;
        self.activate();
        Ok(self.get_output())
    }

    /// 按 `range` 映射后的输出值：`low + (high - low) * y`
    pub fn get_output_scaled(&self, range: OutputRange) -> AnnResult<Vec<f64>> {
        range.validate()?;
        let outputs = self.neurons[self.counts.output_range()]
            .iter()
            .map(|n| range.scale(n.output))
            .collect();
        Ok(outputs)
    }

    /// 同 [`Ann::activate_with`]，但输出按 `range` 映射
    ///
    /// 区间非法时直接失败，不会修改输入也不会激活。
    pub fn activate_scaled(&mut self, inputs: &[f64], range: OutputRange) -> AnnResult<Vec<f64>> {
        range.validate()?;
        self.set_input(inputs)?;
        self.activate();
        self.get_output_scaled(range)
    }
}
