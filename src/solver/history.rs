/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 求解历史记录（只追加，按 epoch 索引）
 *
 * 第 0 条记录是开始迭代前的状态，之后每完成一个 epoch 追加一条，
 * 因此各序列长度恒为“已完成 epoch 数 + 1”。
 */

use ndarray::Array1;
use serde::Serialize;

use crate::config::SubMode;
use crate::errors::SolverError;

/// 单个 epoch 的记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochRecord {
    pub epoch: usize,
    /// 自求解开始以来经过的秒数
    pub time: f64,
    /// 累计梯度计算次数（按样本计）
    pub grad_calc_count: u64,
    pub cost: f64,
    pub optgap: f64,
    /// 该 epoch 结束时的权重（仅在 `store_w` 开启时保存）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<Array1<f64>>,
}

impl EpochRecord {
    /// 逐 epoch 打印的进度文本
    pub fn summary(&self, sub_mode: SubMode) -> String {
        format!(
            "{}: Epoch = {:03}, cost = {:.16e}, optgap = {:.4e}",
            sub_mode, self.epoch, self.cost, self.optgap
        )
    }
}

/// 求解历史，以平行序列的形式对外暴露
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    epoch: Vec<usize>,
    time: Vec<f64>,
    grad_calc_count: Vec<u64>,
    cost: Vec<f64>,
    optgap: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    w: Vec<Array1<f64>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条记录，已有记录不会被修改
    pub fn push(&mut self, record: EpochRecord) {
        self.epoch.push(record.epoch);
        self.time.push(record.time);
        self.grad_calc_count.push(record.grad_calc_count);
        self.cost.push(record.cost);
        self.optgap.push(record.optgap);
        if let Some(w) = record.w {
            self.w.push(w);
        }
    }

    /// 记录条数（含第 0 条）
    pub fn len(&self) -> usize {
        self.epoch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epoch.is_empty()
    }

    pub fn epoch(&self) -> &[usize] {
        &self.epoch
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn grad_calc_count(&self) -> &[u64] {
        &self.grad_calc_count
    }

    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    pub fn optgap(&self) -> &[f64] {
        &self.optgap
    }

    /// 每个 epoch 的权重快照；未开启 `store_w` 时为空
    pub fn w(&self) -> &[Array1<f64>] {
        &self.w
    }

    /// 取第 `index` 条记录
    pub fn get(&self, index: usize) -> Option<EpochRecord> {
        if index >= self.len() {
            return None;
        }
        Some(EpochRecord {
            epoch: self.epoch[index],
            time: self.time[index],
            grad_calc_count: self.grad_calc_count[index],
            cost: self.cost[index],
            optgap: self.optgap[index],
            w: self.w.get(index).cloned(),
        })
    }

    /// 最后一条记录
    pub fn last(&self) -> Option<EpochRecord> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// 按 epoch 顺序遍历所有记录
    pub fn records(&self) -> impl Iterator<Item = EpochRecord> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// 以 JSON 导出（非有限浮点数会被写为 `null`）
    pub fn to_json(&self) -> Result<String, SolverError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
