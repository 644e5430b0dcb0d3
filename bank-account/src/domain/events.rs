//! 账户领域事件
//!
//! 四类余额变动共用一个事件结构，`event_type` 由变动类型决定：
//! `bank_account.money_deposited` / `money_withdrawn` /
//! `money_transferred_out` / `money_transferred_in`，载荷版本 `1.0`。
//!
use super::account::{BankAccount, BankAccountId};
use super::money::Money;
use super::transaction::TransactionId;
use chrono::{DateTime, Utc};
use seedwork_domain::aggregate::AggregateRoot;
use seedwork_domain::domain_event::{DomainEvent, EventMetadata};
use seedwork_macros::entity_id;
use serde_json::{Value, json};
use std::any::Any;

pub const MONEY_DEPOSITED: &str = "bank_account.money_deposited";
pub const MONEY_WITHDRAWN: &str = "bank_account.money_withdrawn";
pub const MONEY_TRANSFERRED_OUT: &str = "bank_account.money_transferred_out";
pub const MONEY_TRANSFERRED_IN: &str = "bank_account.money_transferred_in";

/// 全部账户事件类型
pub const EVENT_TYPES: [&str; 4] = [
    MONEY_DEPOSITED,
    MONEY_WITHDRAWN,
    MONEY_TRANSFERRED_OUT,
    MONEY_TRANSFERRED_IN,
];

#[entity_id(prefix = "evt-", label = "Event id")]
pub struct BankAccountEventId(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceChange {
    MoneyDeposited {
        account_id: BankAccountId,
        amount: Money,
        transaction_id: TransactionId,
    },
    MoneyWithdrawn {
        account_id: BankAccountId,
        amount: Money,
        transaction_id: TransactionId,
    },
    MoneyTransferredOut {
        from_account_id: BankAccountId,
        to_account_id: BankAccountId,
        amount: Money,
        transaction_id: TransactionId,
    },
    MoneyTransferredIn {
        from_account_id: BankAccountId,
        to_account_id: BankAccountId,
        amount: Money,
        transaction_id: TransactionId,
    },
}

impl BalanceChange {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MoneyDeposited { .. } => MONEY_DEPOSITED,
            Self::MoneyWithdrawn { .. } => MONEY_WITHDRAWN,
            Self::MoneyTransferredOut { .. } => MONEY_TRANSFERRED_OUT,
            Self::MoneyTransferredIn { .. } => MONEY_TRANSFERRED_IN,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::MoneyDeposited { amount, .. }
            | Self::MoneyWithdrawn { amount, .. }
            | Self::MoneyTransferredOut { amount, .. }
            | Self::MoneyTransferredIn { amount, .. } => *amount,
        }
    }

    pub fn transaction_id(&self) -> &TransactionId {
        match self {
            Self::MoneyDeposited { transaction_id, .. }
            | Self::MoneyWithdrawn { transaction_id, .. }
            | Self::MoneyTransferredOut { transaction_id, .. }
            | Self::MoneyTransferredIn { transaction_id, .. } => transaction_id,
        }
    }

    fn payload(&self) -> Value {
        let amount = self.amount();
        match self {
            Self::MoneyDeposited { account_id, .. } | Self::MoneyWithdrawn { account_id, .. } => {
                json!({
                    "account_id": account_id.as_str(),
                    "amount": amount.amount(),
                    "currency": amount.currency().as_str(),
                    "transaction_id": self.transaction_id().as_str(),
                })
            }
            Self::MoneyTransferredOut {
                from_account_id,
                to_account_id,
                ..
            }
            | Self::MoneyTransferredIn {
                from_account_id,
                to_account_id,
                ..
            } => json!({
                "from_account_id": from_account_id.as_str(),
                "to_account_id": to_account_id.as_str(),
                "amount": amount.amount(),
                "currency": amount.currency().as_str(),
                "transaction_id": self.transaction_id().as_str(),
            }),
        }
    }
}

/// 账户聚合记录的领域事件
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccountEvent {
    metadata: EventMetadata,
    change: BalanceChange,
}

impl BankAccountEvent {
    pub(crate) fn record(account_id: &BankAccountId, change: BalanceChange) -> Self {
        Self {
            metadata: EventMetadata::builder()
                .event_id(BankAccountEventId::generate())
                .aggregate_id(account_id.as_str())
                .aggregate_type(BankAccount::TYPE)
                .build(),
            change,
        }
    }

    pub fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }

    pub fn change(&self) -> &BalanceChange {
        &self.change
    }
}

impl DomainEvent for BankAccountEvent {
    fn event_id(&self) -> &str {
        self.metadata.event_id()
    }

    fn event_type(&self) -> &str {
        self.change.event_type()
    }

    fn event_version(&self) -> &str {
        self.metadata.event_version()
    }

    fn payload(&self) -> Value {
        self.change.payload()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
