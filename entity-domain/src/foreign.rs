//! 外部上下文查询（ForeignContextLookup）
//!
//! 面向外部上下文分配策略的只读边界协作者：本内核的类型与不变量
//! 不跨越该边界，延迟与超时策略由宿主负责。
//!
use async_trait::async_trait;

use crate::error::DomainResult;
use crate::identity::Identity;

/// 外部上下文的只读标识解析能力
#[async_trait]
pub trait ForeignContextLookup: Send + Sync {
    /// 解析得到的标识类型
    type Id: Identity;

    /// 按条件解析外部上下文中的标识；无法解析时返回
    /// `ForeignIdentityUnavailable`
    async fn resolve(&self, criteria: &serde_json::Value) -> DomainResult<Self::Id>;

    /// 外部上下文标识变更通知的事件类型（同步订阅用）
    fn change_event_type(&self) -> &str;
}
