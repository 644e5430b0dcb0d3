//! 读模型投影与过滤条件
//!
use crate::domain::{BankAccount, Transaction};
use chrono::SecondsFormat;
use seedwork_application::filter::{FilterCriteria, Projection};
use seedwork_domain::entity::Entity;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionProjection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub currency: String,
    /// RFC 3339，精确到秒，例如 `2024-05-01T10:00:00+00:00`
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountProjection {
    pub id: String,
    pub balance_amount: i64,
    pub currency: String,
    pub transactions: Vec<TransactionProjection>,
}

/// 账户投影的过滤条件；可用字段 `id`、`balanceAmount`（别名 `balance`）、`currency`
pub type BankAccountFilterCriteria = FilterCriteria<BankAccountProjection>;

impl Projection for BankAccountProjection {
    const FILTERABLE_FIELDS: &'static [&'static str] = &["id", "balanceAmount", "balance", "currency"];

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(json!(self.id)),
            "balanceAmount" | "balance" => Some(json!(self.balance_amount)),
            "currency" => Some(json!(self.currency)),
            _ => None,
        }
    }
}

impl From<&Transaction> for TransactionProjection {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id().to_string(),
            kind: txn.kind().as_str().to_owned(),
            amount: txn.amount().amount(),
            currency: txn.amount().currency().as_str().to_owned(),
            created_at: txn.created_at().to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

impl From<&BankAccount> for BankAccountProjection {
    fn from(account: &BankAccount) -> Self {
        let balance = account.balance();
        Self {
            id: account.id().to_string(),
            balance_amount: balance.amount(),
            currency: balance.currency().as_str().to_owned(),
            transactions: account.transactions().iter().map(Into::into).collect(),
        }
    }
}
