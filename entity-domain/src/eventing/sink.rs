//! 事件接收器（EventSink）协议
//!
//! 定义事件发布与订阅的统一抽象。接收器随封闭操作的生命周期显式传递
//! （依赖注入），不提供全局单例访问器，以保证测试确定性并避免跨测试
//! 状态泄漏。
//!
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain_event::EventEnvelope;
use crate::error::DomainResult;
use crate::eventing::{EventHandler, HandledEventType};

/// 订阅凭据：用于注销先前注册的处理器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SubscriptionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// 事件接收器：负责分发事件与管理订阅
///
/// `publish` 在返回前按注册顺序调用所有匹配的处理器；某个处理器失败
/// 不会阻断后续处理器，全部失败以 `EventDelivery` 聚合错误上报给
/// 发布方。投递不回滚触发事件的实体变更（内核不提供事务性）。
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn publish(&self, event: &EventEnvelope) -> DomainResult<()>;

    /// 注册处理器，返回可用于注销的凭据
    async fn subscribe(
        &self,
        selector: HandledEventType,
        handler: Arc<dyn EventHandler>,
    ) -> SubscriptionToken;

    /// 注销订阅；对未知凭据幂等
    async fn unsubscribe(&self, token: SubscriptionToken);
}
