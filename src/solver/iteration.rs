/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 按 epoch 生成样本顺序并切分为定长批次
 *
 * - 每个 epoch 可选地对全部 n 个样本下标做一次均匀随机排列
 * - 切分为 floor(n / batch_size) 个连续、定长的批次
 * - 末尾不足一个批次的 n mod batch_size 个样本在该 epoch 中不会被访问
 */

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// 批次采样器
///
/// # 示例
/// ```ignore
/// let sampler = BatchSampler::new(10, 3, true);
/// let order = sampler.epoch_order(&mut rng);
/// for batch in sampler.batches(&order) {
///     assert_eq!(batch.len(), 3);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSampler {
    sample_count: usize,
    batch_size: usize,
    permute_on: bool,
}

impl BatchSampler {
    /// 创建新的批次采样器
    ///
    /// # Panics
    /// `batch_size` 为 0 时 panic（配置解析阶段已拦截该情形）
    pub fn new(sample_count: usize, batch_size: usize, permute_on: bool) -> Self {
        assert!(batch_size > 0, "BatchSampler: batch_size 必须大于 0");
        Self {
            sample_count,
            batch_size,
            permute_on,
        }
    }

    /// 每个 epoch 的批次数（丢弃末尾不完整的批次）
    pub const fn num_batches(&self) -> usize {
        self.sample_count / self.batch_size
    }

    /// 每个 epoch 实际参与梯度计算的样本数
    pub const fn samples_per_epoch(&self) -> usize {
        self.num_batches() * self.batch_size
    }

    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// 生成本 epoch 的样本顺序：打乱开启时为随机排列，否则为恒等排列
    pub fn epoch_order(&self, rng: &mut StdRng) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.sample_count).collect();
        if self.permute_on {
            indices.shuffle(rng);
        }
        indices
    }

    /// 将样本顺序切分为定长批次，末尾不足 `batch_size` 的部分被丢弃
    pub fn batches<'a>(&self, order: &'a [usize]) -> std::slice::ChunksExact<'a, usize> {
        order.chunks_exact(self.batch_size)
    }
}
