//! 聚合获取器（AggregateObtainer）
//!
//! 命令处理器的标准第一步：按标识加载聚合，不存在时返回
//! `DomainError::NotFound`（携带资源名与标识）。
//!
use crate::aggregate::AggregateRoot;
use crate::error::{DomainError, DomainResult};
use crate::persist::Repository;
use std::marker::PhantomData;

/// - `A`：聚合类型
/// - `R`：聚合仓储（实现 `Repository<A>`）
pub struct AggregateObtainer<A, R>
where
    A: AggregateRoot,
    R: Repository<A>,
{
    repo: R,
    resource: &'static str,
    _marker: PhantomData<fn() -> A>,
}

impl<A, R> AggregateObtainer<A, R>
where
    A: AggregateRoot,
    R: Repository<A>,
{
    pub fn new(repo: R, resource: &'static str) -> Self {
        Self {
            repo,
            resource,
            _marker: PhantomData,
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    /// 加载聚合；缺失时报告 `Resource '<resource>' not found for id '<id>'`
    pub async fn obtain(&self, id: &A::Id) -> DomainResult<A> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(self.resource, id))
    }
}
