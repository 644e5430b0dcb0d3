use crate::{
    error::AppError,
    filter::{FilterCriteria, Projection},
};
use async_trait::async_trait;
use std::sync::Arc;

/// 读模型仓储：只检索投影，不含业务逻辑
#[async_trait]
pub trait QueryRepository<P>: Send + Sync
where
    P: Projection,
{
    /// 不存在时返回 `None`
    async fn get_by_id(&self, id: &str) -> Result<Option<P>, AppError>;

    /// 满足全部条件的投影中 `[offset, offset + limit)` 的部分（不返回总数）
    async fn filter(
        &self,
        offset: usize,
        limit: usize,
        criteria: &[FilterCriteria<P>],
    ) -> Result<Vec<P>, AppError>;
}

#[async_trait]
impl<P, T> QueryRepository<P> for Arc<T>
where
    P: Projection,
    T: QueryRepository<P> + ?Sized,
{
    async fn get_by_id(&self, id: &str) -> Result<Option<P>, AppError> {
        (**self).get_by_id(id).await
    }

    async fn filter(
        &self,
        offset: usize,
        limit: usize,
        criteria: &[FilterCriteria<P>],
    ) -> Result<Vec<P>, AppError> {
        (**self).filter(offset, limit, criteria).await
    }
}
