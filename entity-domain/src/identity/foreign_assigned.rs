use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::error::{DomainError, DomainResult};
use crate::eventing::{EventHandler, EventSink, HandledEventType};
use crate::foreign::ForeignContextLookup;
use crate::identity::{
    GenerationContext, GenerationStrategy, Identity, IdentityGenerator, IdentitySlot,
};

/// 外部上下文分配策略：委托另一边界上下文的只读解析能力。
///
/// 首次解析成功后，向事件接收器注册一次同步处理器，订阅外部上下文的
/// 变更通知事件，使实体标识与外部上下文保持同步。
pub struct ForeignAssignedGenerator<I: Identity> {
    lookup: Arc<dyn ForeignContextLookup<Id = I>>,
    sink: Arc<dyn EventSink>,
    sync_handler: Arc<dyn EventHandler>,
    subscribed: AtomicBool,
}

impl<I: Identity> ForeignAssignedGenerator<I> {
    pub fn new(
        lookup: Arc<dyn ForeignContextLookup<Id = I>>,
        sink: Arc<dyn EventSink>,
        sync_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            lookup,
            sink,
            sync_handler,
            subscribed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl<I: Identity> IdentityGenerator<I> for ForeignAssignedGenerator<I> {
    fn strategy(&self) -> GenerationStrategy {
        GenerationStrategy::ForeignAssigned
    }

    async fn generate(&self, ctx: &GenerationContext) -> DomainResult<IdentitySlot<I>> {
        let criteria = ctx
            .criteria()
            .ok_or_else(|| DomainError::GenerationFailed {
                reason: "foreign-assigned strategy requires lookup criteria".to_string(),
            })?;

        let id = self.lookup.resolve(criteria).await?;

        // 同步订阅只注册一次
        if !self.subscribed.swap(true, Ordering::SeqCst) {
            self.sink
                .subscribe(
                    HandledEventType::One(self.lookup.change_event_type().to_string()),
                    self.sync_handler.clone(),
                )
                .await;
        }

        Ok(IdentitySlot::assigned(id))
    }
}
