//! 聚合仓储协议
//!
use crate::{aggregate::AggregateRoot, error::DomainResult};
use async_trait::async_trait;
use std::sync::Arc;

/// 单一聚合类型的仓储：按标识加载、持久化（新增或更新）与删除
#[async_trait]
pub trait Repository<A>: Send + Sync
where
    A: AggregateRoot,
{
    async fn save(&self, aggregate: &A) -> DomainResult<()>;

    /// 不存在时返回 `None`
    async fn find_by_id(&self, id: &A::Id) -> DomainResult<Option<A>>;

    async fn delete_by_id(&self, id: &A::Id) -> DomainResult<()>;
}

#[async_trait]
impl<A, T> Repository<A> for Arc<T>
where
    A: AggregateRoot,
    T: Repository<A> + ?Sized,
{
    async fn save(&self, aggregate: &A) -> DomainResult<()> {
        (**self).save(aggregate).await
    }

    async fn find_by_id(&self, id: &A::Id) -> DomainResult<Option<A>> {
        (**self).find_by_id(id).await
    }

    async fn delete_by_id(&self, id: &A::Id) -> DomainResult<()> {
        (**self).delete_by_id(id).await
    }
}
