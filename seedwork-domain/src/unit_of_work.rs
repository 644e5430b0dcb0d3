//! 工作单元（Unit of Work）
//!
//! 事务边界的抽象契约：打开会话、提交、回滚。
//! 具体存储（数据库事务、文件锁等）由基础设施层实现。
//!
use crate::error::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// 打开事务会话
    async fn create_session(&self) -> DomainResult<()>;

    /// 提交当前会话
    async fn commit(&self) -> DomainResult<()>;

    /// 放弃当前会话
    async fn rollback(&self) -> DomainResult<()>;
}

#[async_trait]
impl<T> UnitOfWork for Arc<T>
where
    T: UnitOfWork + ?Sized,
{
    async fn create_session(&self) -> DomainResult<()> {
        (**self).create_session().await
    }

    async fn commit(&self) -> DomainResult<()> {
        (**self).commit().await
    }

    async fn rollback(&self) -> DomainResult<()> {
        (**self).rollback().await
    }
}
