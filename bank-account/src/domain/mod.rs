//! 银行账户领域模型
//!
mod account;
mod events;
mod money;
mod transaction;

pub use account::{BankAccount, BankAccountId};
pub use events::{
    BalanceChange, BankAccountEvent, BankAccountEventId, EVENT_TYPES, MONEY_DEPOSITED,
    MONEY_TRANSFERRED_IN, MONEY_TRANSFERRED_OUT, MONEY_WITHDRAWN,
};
pub use money::{AccountBalance, Currency, Money};
pub use transaction::{Transaction, TransactionId, TransactionType};

use seedwork_domain::obtainer::AggregateObtainer;
use seedwork_domain::persist::Repository;
use std::sync::Arc;

/// 账户仓储端口
pub type BankAccountRepository = dyn Repository<BankAccount>;

/// 账户获取器，缺失时报告 `Resource 'BankAccount' not found for id '<id>'`
pub type BankAccountObtainer = AggregateObtainer<BankAccount, Arc<BankAccountRepository>>;

pub fn bank_account_obtainer(repository: Arc<BankAccountRepository>) -> BankAccountObtainer {
    AggregateObtainer::new(repository, "BankAccount")
}
