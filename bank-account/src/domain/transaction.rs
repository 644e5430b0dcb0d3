//! 账户流水（Transaction）实体
//!
use super::account::BankAccountId;
use super::money::Money;
use chrono::{DateTime, Utc};
use seedwork_domain::entity::Entity;
use seedwork_domain::error::{DomainError, DomainResult};
use seedwork_macros::entity_id;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[entity_id(prefix = "txn-", label = "Transaction id")]
pub struct TransactionId(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    TransferIn,
    TransferOut,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::TransferIn => "transfer_in",
            Self::TransferOut => "transfer_out",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(Self::Deposit),
            "withdrawal" => Ok(Self::Withdrawal),
            "transfer_in" => Ok(Self::TransferIn),
            "transfer_out" => Ok(Self::TransferOut),
            other => Err(DomainError::invalid_value(format!(
                "Unknown transaction type \"{other}\""
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionType,
    amount: Money,
    counterparty: Option<BankAccountId>,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// 新流水：生成标识，创建时间为当前时刻
    pub fn create(kind: TransactionType, amount: Money, counterparty: Option<BankAccountId>) -> Self {
        Self {
            id: TransactionId::generate(),
            kind,
            amount,
            counterparty,
            created_at: Utc::now(),
        }
    }

    /// 从存储重建；创建时间不得晚于当前时刻
    pub fn build(
        id: TransactionId,
        kind: TransactionType,
        amount: Money,
        counterparty: Option<BankAccountId>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if created_at > Utc::now() {
            return Err(DomainError::invalid_value(
                "Transaction created at cannot be in the future",
            ));
        }
        Ok(Self {
            id,
            kind,
            amount,
            counterparty,
            created_at,
        })
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// 转账的对方账户
    pub fn counterparty(&self) -> Option<&BankAccountId> {
        self.counterparty.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Currency;
    use chrono::Duration;

    fn ten_usd() -> Money {
        Money::new(10, Currency::Usd).unwrap()
    }

    #[test]
    fn create_generates_prefixed_id() {
        let txn = Transaction::create(TransactionType::Deposit, ten_usd(), None);
        assert!(txn.id().as_str().starts_with("txn-"));
        assert!(txn.created_at() <= Utc::now());
    }

    #[test]
    fn build_rejects_future_timestamps() {
        let id = TransactionId::parse("txn-1").unwrap();
        let future = Utc::now() + Duration::hours(1);
        let err = Transaction::build(id, TransactionType::Deposit, ten_usd(), None, future)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value: Transaction created at cannot be in the future"
        );
    }

    #[test]
    fn equality_is_by_identity() {
        let id = TransactionId::parse("txn-1").unwrap();
        let past = Utc::now() - Duration::minutes(5);
        let a = Transaction::build(id.clone(), TransactionType::Deposit, ten_usd(), None, past).unwrap();
        let b = Transaction::build(id, TransactionType::Withdrawal, ten_usd(), None, past).unwrap();
        assert!(a.same_identity_as(&b));
    }

    #[test]
    fn transaction_types_use_snake_case_codes() {
        assert_eq!(TransactionType::TransferOut.as_str(), "transfer_out");
        assert_eq!("withdrawal".parse::<TransactionType>().unwrap(), TransactionType::Withdrawal);
        assert_eq!(
            serde_json::to_value(TransactionType::TransferIn).unwrap(),
            serde_json::json!("transfer_in")
        );
    }
}
