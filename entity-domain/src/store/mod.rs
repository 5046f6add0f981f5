//! 仓储（Store）边界协作者
//!
//! 持久化/检索实体，并在仓储分配策略下供给标识。内核只定义协议与一个
//! 面向测试/示例的内存实现；真实基础设施（数据库、ORM）在边界之外适配。
//! 调用按同步边界调用对待：超时与重试策略由宿主负责，内核不重试。

mod in_memory;

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::DomainResult;

pub use in_memory::InMemoryStore;

/// 实体仓储协议
///
/// `find` 以 `Ok(None)` 表达未找到；需要"存在性"语义的调用方自行转换
/// 为 `NotFound` 错误。
#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// 供给下一个标识（仅对仓储分配策略有意义）
    async fn next_identity(&self) -> DomainResult<E::Id>;

    /// 首次持久化：标识未分配时先绑定仓储供给的标识
    async fn add(&self, entity: &mut E) -> DomainResult<()>;

    /// 保存变更：带乐观锁版本检查，成功后推进实体版本
    async fn save(&self, entity: &mut E) -> DomainResult<()>;

    /// 删除实体记录（标识随之销毁）
    async fn remove(&self, id: &E::Id) -> DomainResult<()>;

    /// 按标识检索
    async fn find(&self, id: &E::Id) -> DomainResult<Option<E>>;
}
