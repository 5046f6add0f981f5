//! 事件处理器（EventHandler）
//!
//! 定义消费某类/多类/全部事件的处理逻辑与元信息（名称、订阅选择器）。
//!
use async_trait::async_trait;

use crate::domain_event::EventEnvelope;
use crate::error::DomainResult;

/// 订阅选择器：处理器关心的事件类型
#[derive(Clone, Debug)]
pub enum HandledEventType {
    One(String),
    Many(Vec<String>),
    All,
}

impl HandledEventType {
    /// 判断给定事件类型是否命中本选择器
    pub fn matches(&self, event_type: &str) -> bool {
        match self {
            Self::One(t) => t == event_type,
            Self::Many(ts) => ts.iter().any(|t| t == event_type),
            Self::All => true,
        }
    }
}

/// 事件处理器：处理某一类型的事件
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// 处理器名称（用于失败归因）
    fn handler_name(&self) -> &str;

    /// 处理事件
    async fn handle(&self, event: &EventEnvelope) -> DomainResult<()>;
}
