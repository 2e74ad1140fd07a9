use std::time::Instant;

/// 计时源
///
/// 求解器在开始迭代前调用一次 [`Clock::start`]，
/// 之后每个 epoch 结束时通过 [`Clock::elapsed`] 读取已用时间（秒）。
pub trait Clock {
    /// 以当前时刻作为计时起点
    fn start(&mut self);

    /// 自起点以来经过的秒数
    fn elapsed(&self) -> f64;
}

/// 基于 [`Instant`] 的墙钟计时
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn start(&mut self) {
        self.start = Instant::now();
    }

    fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
