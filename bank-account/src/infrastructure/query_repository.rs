use crate::application::{BankAccountFilterCriteria, BankAccountProjection};
use crate::domain::{BankAccount, BankAccountId};
use async_trait::async_trait;
use seedwork_application::{error::AppError, filter::apply_filters, query_repository::QueryRepository};
use seedwork_domain::persist::{InMemoryRepository, Repository};
use std::sync::Arc;

/// 由聚合存储即时推导投影的读模型仓储
pub struct InMemoryBankAccountQueryRepository {
    accounts: Arc<InMemoryRepository<BankAccount>>,
}

impl InMemoryBankAccountQueryRepository {
    pub fn new(accounts: Arc<InMemoryRepository<BankAccount>>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl QueryRepository<BankAccountProjection> for InMemoryBankAccountQueryRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<BankAccountProjection>, AppError> {
        let id = BankAccountId::parse(id)?;
        let account = self.accounts.find_by_id(&id).await?;
        Ok(account.as_ref().map(BankAccountProjection::from))
    }

    async fn filter(
        &self,
        offset: usize,
        limit: usize,
        criteria: &[BankAccountFilterCriteria],
    ) -> Result<Vec<BankAccountProjection>, AppError> {
        let projections = self
            .accounts
            .find_all()?
            .iter()
            .map(BankAccountProjection::from)
            .collect::<Vec<_>>();
        Ok(apply_filters(projections, offset, limit, criteria))
    }
}
