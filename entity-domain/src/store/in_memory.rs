//! 内存版仓储（InMemoryStore）
//!
//! 基于 `Mutex<HashMap>` 与原子序列的轻量实现，满足 `Store` 协议：
//! - `add`：标识未分配时先用内部序列铸造并绑定（仓储分配策略）；
//! - `save`：乐观锁版本检查，冲突返回 `VersionConflict`；
//! - 典型用途：测试环境、示例与本地开发。

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::store::Store;

type IdMint<I> = Box<dyn Fn(u64) -> I + Send + Sync>;

/// 简单的内存仓储实现
pub struct InMemoryStore<E: Entity> {
    records: Mutex<HashMap<E::Id, E>>,
    sequence: AtomicU64,
    mint: IdMint<E::Id>,
}

impl<E> InMemoryStore<E>
where
    E: Entity + Clone,
{
    /// 创建内存仓储；`mint` 把内部序列值铸造成标识
    /// （仓储分配策略下 `next_identity`/`add` 使用）
    pub fn new(mint: impl Fn(u64) -> E::Id + Send + Sync + 'static) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            sequence: AtomicU64::new(0),
            mint: Box::new(mint),
        }
    }

    /// 当前记录数量（诊断用）
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl<E> Store<E> for InMemoryStore<E>
where
    E: Entity + Clone,
{
    async fn next_identity(&self) -> DomainResult<E::Id> {
        let n = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        Ok((self.mint)(n))
    }

    async fn add(&self, entity: &mut E) -> DomainResult<()> {
        if !entity.identity_slot().is_assigned() {
            let id = self.next_identity().await?;
            entity.bind_identity(id)?;
        }

        let id = entity.identity()?.clone();
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&id) {
            return Err(DomainError::InvalidState {
                reason: format!("entity already added: {id}"),
            });
        }
        records.insert(id, entity.clone());
        Ok(())
    }

    async fn save(&self, entity: &mut E) -> DomainResult<()> {
        let id = entity.identity()?.clone();
        let mut records = self.records.lock().unwrap();

        let stored = records.get(&id).ok_or_else(|| DomainError::NotFound {
            reason: format!("entity not found: {id}"),
        })?;

        if stored.version() != entity.version() {
            return Err(DomainError::VersionConflict {
                expected: stored.version().value(),
                actual: entity.version().value(),
            });
        }

        entity.advance_version();
        records.insert(id, entity.clone());
        Ok(())
    }

    async fn remove(&self, id: &E::Id) -> DomainResult<()> {
        let mut records = self.records.lock().unwrap();
        records.remove(id).ok_or_else(|| DomainError::NotFound {
            reason: format!("entity not found: {id}"),
        })?;
        Ok(())
    }

    async fn find(&self, id: &E::Id) -> DomainResult<Option<E>> {
        let records = self.records.lock().unwrap();
        Ok(records.get(id).cloned())
    }
}
