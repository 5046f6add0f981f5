//! 时间源（Clock）
//!
//! 以显式注入的能力替代全局可变时钟：领域代码一律通过 `Clock` 取当前时间，
//! 测试中用 `FixedClock` 获得确定性。
//!
use chrono::{DateTime, Utc};

/// 时间源能力：领域操作与事件封装从这里取发生时间
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 系统时钟（生产默认）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定时钟（测试用），始终返回构造时给定的时间
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
