//! 内存版聚合仓储（InMemoryRepository）
//!
//! 按首次保存的顺序存放聚合，供测试、示例与读侧投影推导使用。
//! 保存时丢弃聚合的事件日志（`AggregateRoot::without_events`），
//! 加载得到的实例与从真实存储中重建的状态一致。
//!
use crate::aggregate::AggregateRoot;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::persist::Repository;
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct InMemoryRepository<A>
where
    A: AggregateRoot,
{
    aggregates: RwLock<Vec<A>>,
}

impl<A> Default for InMemoryRepository<A>
where
    A: AggregateRoot,
{
    fn default() -> Self {
        Self {
            aggregates: RwLock::new(Vec::new()),
        }
    }
}

impl<A> InMemoryRepository<A>
where
    A: AggregateRoot,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// 全部聚合（按首次保存顺序）
    pub fn find_all(&self) -> DomainResult<Vec<A>> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Vec<A>>> {
        self.aggregates
            .read()
            .map_err(|_| DomainError::repository(format!("{} store poisoned", A::TYPE)))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<A>>> {
        self.aggregates
            .write()
            .map_err(|_| DomainError::repository(format!("{} store poisoned", A::TYPE)))
    }
}

#[async_trait]
impl<A> Repository<A> for InMemoryRepository<A>
where
    A: AggregateRoot,
{
    async fn save(&self, aggregate: &A) -> DomainResult<()> {
        let stored = aggregate.without_events();
        let mut aggregates = self.write()?;

        match aggregates.iter_mut().find(|a| a.same_identity_as(aggregate)) {
            Some(slot) => *slot = stored,
            None => aggregates.push(stored),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &A::Id) -> DomainResult<Option<A>> {
        Ok(self.read()?.iter().find(|a| a.id() == id).cloned())
    }

    async fn delete_by_id(&self, id: &A::Id) -> DomainResult<()> {
        self.write()?.retain(|a| a.id() != id);
        Ok(())
    }
}
