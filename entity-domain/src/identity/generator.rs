//! 标识生成协议（IdentityGenerator）与策略注册表
//!
//! 把"标识何时可用"这一取舍显式化：仓储分配的标识在首次持久化前不可用，
//! 其余三种策略在生成时即可用。生成策略与实体构造解耦，实体因此不感知
//! 持久化细节。
//!
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::identity::{Identity, IdentitySlot};

/// 标识生成策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationStrategy {
    /// 仓储分配：首次持久化时由仓储赋值，生成结果为未分配哨兵
    StoreAssigned,
    /// 应用分配：构造时生成统计唯一的 128 位随机标识
    ApplicationAssigned,
    /// 调用方提供：对原始输入做文法校验的构造器，无随机性
    ClientSupplied,
    /// 外部上下文分配：委托另一边界上下文的只读解析能力
    ForeignAssigned,
}

impl fmt::Display for GenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StoreAssigned => "store-assigned",
            Self::ApplicationAssigned => "application-assigned",
            Self::ClientSupplied => "client-supplied",
            Self::ForeignAssigned => "foreign-assigned",
        };
        write!(f, "{name}")
    }
}

/// 生成上下文：调用方原始输入与外部解析条件
#[derive(Builder, Default, Debug, Clone, Serialize, Deserialize)]
pub struct GenerationContext {
    /// 调用方提供策略的原始输入
    raw: Option<String>,
    /// 外部上下文分配策略的解析条件
    criteria: Option<serde_json::Value>,
}

impl GenerationContext {
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn criteria(&self) -> Option<&serde_json::Value> {
        self.criteria.as_ref()
    }
}

/// 标识生成器：按单一策略产出标识槽位
#[async_trait]
pub trait IdentityGenerator<I: Identity>: Send + Sync {
    /// 本生成器实现的策略
    fn strategy(&self) -> GenerationStrategy;

    /// 生成标识；底层来源不可用时返回 `GenerationFailed` 或策略专属错误
    async fn generate(&self, ctx: &GenerationContext) -> DomainResult<IdentitySlot<I>>;
}

/// 策略注册表：按策略分发到已注册的生成器
pub struct GeneratorRegistry<I: Identity> {
    by_strategy: HashMap<GenerationStrategy, Arc<dyn IdentityGenerator<I>>>,
}

impl<I: Identity> Default for GeneratorRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Identity> GeneratorRegistry<I> {
    pub fn new() -> Self {
        Self {
            by_strategy: HashMap::new(),
        }
    }

    /// 注册生成器（同策略后注册者覆盖先注册者）
    pub fn register(&mut self, generator: Arc<dyn IdentityGenerator<I>>) {
        self.by_strategy.insert(generator.strategy(), generator);
    }

    /// 按策略生成；未注册的策略返回 `UnsupportedStrategy`
    pub async fn generate(
        &self,
        strategy: GenerationStrategy,
        ctx: &GenerationContext,
    ) -> DomainResult<IdentitySlot<I>> {
        let generator =
            self.by_strategy
                .get(&strategy)
                .ok_or_else(|| DomainError::UnsupportedStrategy {
                    strategy: strategy.to_string(),
                })?;
        generator.generate(ctx).await
    }

    pub fn supports(&self, strategy: GenerationStrategy) -> bool {
        self.by_strategy.contains_key(&strategy)
    }
}
