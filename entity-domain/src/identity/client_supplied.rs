use std::marker::PhantomData;

use async_trait::async_trait;

use crate::error::{DomainError, DomainResult};
use crate::identity::{
    GenerationContext, GenerationStrategy, IdentityGenerator, IdentitySlot, ValidatedIdentity,
};

/// 调用方提供策略：对调用方原始输入做文法校验的构造器。
/// 不满足标识文法时返回 `InvalidIdentityFormat`；无随机性。
pub struct ClientSuppliedGenerator<I> {
    _marker: PhantomData<I>,
}

impl<I> ClientSuppliedGenerator<I> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<I> Default for ClientSuppliedGenerator<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<I: ValidatedIdentity> IdentityGenerator<I> for ClientSuppliedGenerator<I> {
    fn strategy(&self) -> GenerationStrategy {
        GenerationStrategy::ClientSupplied
    }

    async fn generate(&self, ctx: &GenerationContext) -> DomainResult<IdentitySlot<I>> {
        let raw = ctx.raw().ok_or_else(|| DomainError::GenerationFailed {
            reason: "client-supplied strategy requires raw input".to_string(),
        })?;
        Ok(IdentitySlot::assigned(I::parse(raw)?))
    }
}
