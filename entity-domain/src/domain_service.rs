//! 领域服务（Domain Service）
//!
//! 封装不属于单个聚合的领域逻辑。跨聚合组合校验即以此建模：服务经仓储
//! 取得协作聚合、执行组合校验，并通过事件接收器宣告校验结论，
//! 让其他聚合异步响应而非被同步调用。
//!
use async_trait::async_trait;

/// 领域服务：封装不属于单个聚合的领域逻辑
#[async_trait]
pub trait DomainService: Send + Sync {
    type Input;
    type Output;
    type Error;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
