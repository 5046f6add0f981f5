use std::marker::PhantomData;

use async_trait::async_trait;

use crate::error::DomainResult;
use crate::identity::{
    GenerationContext, GenerationStrategy, Identity, IdentityGenerator, IdentitySlot,
};

/// 仓储分配策略：标识在首次持久化前未知，生成结果为未分配哨兵，
/// 之后由仓储通过实体的一次性绑定操作赋值。
pub struct StoreAssignedGenerator<I> {
    _marker: PhantomData<I>,
}

impl<I> StoreAssignedGenerator<I> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<I> Default for StoreAssignedGenerator<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<I: Identity> IdentityGenerator<I> for StoreAssignedGenerator<I> {
    fn strategy(&self) -> GenerationStrategy {
        GenerationStrategy::StoreAssigned
    }

    async fn generate(&self, _ctx: &GenerationContext) -> DomainResult<IdentitySlot<I>> {
        Ok(IdentitySlot::unassigned())
    }
}
