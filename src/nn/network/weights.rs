/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : Ann 权重随机化
 */

use super::Ann;
use crate::errors::AnnResult;
use crate::nn::config::WeightRange;
use rand::Rng;

impl Ann {
    /// 将每条连接的权重独立地均匀采样自 [min, max)
    ///
    /// min >= max 时失败，且不修改任何权重。
    /// 网络设置了种子则使用网络自身的 RNG，否则使用 `thread_rng`。
    pub fn randomize_weights(&mut self, min: f64, max: f64) -> AnnResult<()> {
        let range = WeightRange::new(min, max);
        range.validate().inspect_err(|e| tracing::warn!("{e}"))?;

        // 先取出 RNG，避免与 connections 的可变借用冲突
        match self.rng.take() {
            Some(mut rng) => {
                self.fill_weights(range, &mut rng);
                self.rng = Some(rng);
            }
            None => self.fill_weights(range, &mut rand::thread_rng()),
        }
        Ok(())
    }

    /// 按默认区间 [-1, 1) 随机化权重
    pub fn randomize_weights_default(&mut self) -> AnnResult<()> {
        let WeightRange { min, max } = WeightRange::default();
        self.randomize_weights(min, max)
    }

    /// 使用调用方提供的随机源随机化权重
    pub fn randomize_weights_with_rng<R: Rng + ?Sized>(
        &mut self,
        range: WeightRange,
        rng: &mut R,
    ) -> AnnResult<()> {
        range.validate().inspect_err(|e| tracing::warn!("{e}"))?;
        self.fill_weights(range, rng);
        Ok(())
    }

    fn fill_weights<R: Rng + ?Sized>(&mut self, range: WeightRange, rng: &mut R) {
        for conn in &mut self.connections {
            conn.weight = rng.gen_range(range.min..range.max);
        }
    }
}
