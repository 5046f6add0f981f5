use std::marker::PhantomData;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainResult;
use crate::identity::{
    GenerationContext, GenerationStrategy, Identity, IdentityGenerator, IdentitySlot,
};

/// 应用分配策略：构造时生成统计唯一的 128 位随机标识（UUID v4），
/// 在任何持久化发生之前即可用。碰撞概率视为可忽略，不做查重。
pub struct ApplicationAssignedGenerator<I> {
    _marker: PhantomData<I>,
}

impl<I> ApplicationAssignedGenerator<I> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<I> Default for ApplicationAssignedGenerator<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<I> IdentityGenerator<I> for ApplicationAssignedGenerator<I>
where
    I: Identity + From<Uuid>,
{
    fn strategy(&self) -> GenerationStrategy {
        GenerationStrategy::ApplicationAssigned
    }

    async fn generate(&self, _ctx: &GenerationContext) -> DomainResult<IdentitySlot<I>> {
        Ok(IdentitySlot::assigned(I::from(Uuid::new_v4())))
    }
}
