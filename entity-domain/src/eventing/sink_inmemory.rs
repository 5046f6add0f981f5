//! 内存版事件接收器（InMemoryEventSink）
//!
//! 基于互斥锁保护的订阅注册表实现 `EventSink` 协议：
//! - `publish`：持锁期间按注册顺序串行调用所有匹配的处理器，
//!   失败收集为 `EventDelivery` 聚合错误；
//! - `subscribe`/`unsubscribe`：与投递互斥，注册表操作串行化；
//! - 典型用途：测试环境、示例与单进程宿主。
//!
//! 注意：投递持有注册表锁，处理器内再次调用同一接收器的
//! `subscribe`/`publish` 会死锁；同一实体的事件按发布顺序投递。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain_event::EventEnvelope;
use crate::error::{DeliveryFailures, DomainError, DomainResult, HandlerFailure};
use crate::eventing::{EventHandler, EventSink, HandledEventType, SubscriptionToken};

struct Subscription {
    token: SubscriptionToken,
    selector: HandledEventType,
    handler: Arc<dyn EventHandler>,
}

#[derive(Default)]
struct SinkRegistry {
    next_token: u64,
    subscriptions: Vec<Subscription>,
}

/// 简单的内存事件接收器实现
#[derive(Default)]
pub struct InMemoryEventSink {
    inner: Mutex<SinkRegistry>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前订阅数量（诊断用）
    pub async fn subscription_count(&self) -> usize {
        self.inner.lock().await.subscriptions.len()
    }
}

#[async_trait]
impl EventSink for InMemoryEventSink {
    async fn publish(&self, event: &EventEnvelope) -> DomainResult<()> {
        let registry = self.inner.lock().await;

        let mut failures: Vec<HandlerFailure> = Vec::new();
        for subscription in &registry.subscriptions {
            if !subscription.selector.matches(event.event_type()) {
                continue;
            }
            if let Err(err) = subscription.handler.handle(event).await {
                failures.push(HandlerFailure {
                    handler: subscription.handler.handler_name().to_string(),
                    reason: err.to_string(),
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DomainError::EventDelivery {
                failures: DeliveryFailures::new(failures),
            })
        }
    }

    async fn subscribe(
        &self,
        selector: HandledEventType,
        handler: Arc<dyn EventHandler>,
    ) -> SubscriptionToken {
        let mut registry = self.inner.lock().await;
        let token = SubscriptionToken::new(registry.next_token);
        registry.next_token += 1;
        registry.subscriptions.push(Subscription {
            token,
            selector,
            handler,
        });
        token
    }

    async fn unsubscribe(&self, token: SubscriptionToken) {
        let mut registry = self.inner.lock().await;
        registry.subscriptions.retain(|s| s.token != token);
    }
}
