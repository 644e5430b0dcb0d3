//! 读侧用例：查询账户状态
//!
use super::projection::{BankAccountProjection, TransactionProjection};
use crate::domain::{AccountBalance, BankAccountId, Currency, TransactionType};
use async_trait::async_trait;
use seedwork_application::{
    context::AppContext, dto::Dto, error::AppError, query::Query, query_handler::QueryHandler,
    query_repository::QueryRepository,
};
use seedwork_domain::error::DomainError;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GetBankAccountStatus {
    pub account_id: String,
}

impl Query for GetBankAccountStatus {
    const NAME: &'static str = "GetBankAccountStatus";
    type Dto = BankAccountStatus;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: i64,
    pub currency: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountStatus {
    pub account_id: BankAccountId,
    pub balance: AccountBalance,
    pub transactions: Vec<TransactionDto>,
}

impl Dto for BankAccountStatus {}

impl TryFrom<TransactionProjection> for TransactionDto {
    type Error = DomainError;

    fn try_from(p: TransactionProjection) -> Result<Self, Self::Error> {
        Ok(Self {
            id: p.id,
            kind: p.kind.parse()?,
            amount: p.amount,
            currency: p.currency,
            created_at: p.created_at,
        })
    }
}

impl TryFrom<BankAccountProjection> for BankAccountStatus {
    type Error = DomainError;

    fn try_from(p: BankAccountProjection) -> Result<Self, Self::Error> {
        Ok(Self {
            account_id: BankAccountId::parse(p.id)?,
            balance: AccountBalance::new(p.balance_amount, p.currency.parse::<Currency>()?)?,
            transactions: p
                .transactions
                .into_iter()
                .map(TransactionDto::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

pub struct GetBankAccountStatusHandler {
    projections: Arc<dyn QueryRepository<BankAccountProjection>>,
}

impl GetBankAccountStatusHandler {
    pub fn new(projections: Arc<dyn QueryRepository<BankAccountProjection>>) -> Self {
        Self { projections }
    }
}

#[async_trait]
impl QueryHandler<GetBankAccountStatus> for GetBankAccountStatusHandler {
    #[tracing::instrument(skip(self, _ctx))]
    async fn handle(
        &self,
        _ctx: &AppContext,
        q: GetBankAccountStatus,
    ) -> Result<BankAccountStatus, AppError> {
        let account_id = BankAccountId::parse(q.account_id)?;
        let projection = self
            .projections
            .get_by_id(account_id.as_str())
            .await?
            .ok_or_else(|| DomainError::not_found("BankAccount", &account_id))?;

        Ok(BankAccountStatus::try_from(projection)?)
    }
}
