//! 银行账户聚合（BankAccount）
//!
//! 所有状态迁移都返回新的账户实例：新余额、追加一条流水、追加一个事件；
//! 原实例保持不变。迁移前依次校验币种一致与余额充足。
//!
use super::events::{BalanceChange, BankAccountEvent};
use super::money::{AccountBalance, Money};
use super::transaction::{Transaction, TransactionType};
use seedwork_domain::aggregate::AggregateRoot;
use seedwork_domain::domain_event::AggregateEvents;
use seedwork_domain::entity::Entity;
use seedwork_domain::error::{DomainError, DomainResult};
use seedwork_macros::entity_id;

#[entity_id(prefix = "acc-", label = "Bank account id")]
pub struct BankAccountId(String);

#[derive(Debug, Clone)]
pub struct BankAccount {
    id: BankAccountId,
    balance: AccountBalance,
    transactions: Vec<Transaction>,
    events: AggregateEvents,
}

impl BankAccount {
    /// 开户：缺省生成新标识，余额为 0 USD
    pub fn create(id: Option<BankAccountId>, initial_balance: Option<AccountBalance>) -> Self {
        Self {
            id: id.unwrap_or_else(BankAccountId::generate),
            balance: initial_balance.unwrap_or_default(),
            transactions: Vec::new(),
            events: AggregateEvents::new(),
        }
    }

    /// 从存储重建（事件日志为空）
    pub fn build(id: BankAccountId, balance: AccountBalance, transactions: Vec<Transaction>) -> Self {
        Self {
            id,
            balance,
            transactions,
            events: AggregateEvents::new(),
        }
    }

    pub fn balance(&self) -> AccountBalance {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn deposit(&self, amount: Money) -> DomainResult<Self> {
        self.assert_same_currency(&amount)?;
        let balance = self.balance.credit(&amount)?;
        let transaction = Transaction::create(TransactionType::Deposit, amount, None);
        let change = BalanceChange::MoneyDeposited {
            account_id: self.id.clone(),
            amount,
            transaction_id: transaction.id().clone(),
        };
        Ok(self.transition(balance, transaction, change))
    }

    pub fn withdraw(&self, amount: Money) -> DomainResult<Self> {
        self.assert_same_currency(&amount)?;
        let balance = self.balance.debit(&amount)?;
        let transaction = Transaction::create(TransactionType::Withdrawal, amount, None);
        let change = BalanceChange::MoneyWithdrawn {
            account_id: self.id.clone(),
            amount,
            transaction_id: transaction.id().clone(),
        };
        Ok(self.transition(balance, transaction, change))
    }

    pub fn transfer_out(&self, amount: Money, to: &BankAccountId) -> DomainResult<Self> {
        self.assert_same_currency(&amount)?;
        let balance = self.balance.debit(&amount)?;
        let transaction =
            Transaction::create(TransactionType::TransferOut, amount, Some(to.clone()));
        let change = BalanceChange::MoneyTransferredOut {
            from_account_id: self.id.clone(),
            to_account_id: to.clone(),
            amount,
            transaction_id: transaction.id().clone(),
        };
        Ok(self.transition(balance, transaction, change))
    }

    pub fn transfer_in(&self, amount: Money, from: &BankAccountId) -> DomainResult<Self> {
        self.assert_same_currency(&amount)?;
        let balance = self.balance.credit(&amount)?;
        let transaction =
            Transaction::create(TransactionType::TransferIn, amount, Some(from.clone()));
        let change = BalanceChange::MoneyTransferredIn {
            from_account_id: from.clone(),
            to_account_id: self.id.clone(),
            amount,
            transaction_id: transaction.id().clone(),
        };
        Ok(self.transition(balance, transaction, change))
    }

    fn transition(
        &self,
        balance: AccountBalance,
        transaction: Transaction,
        change: BalanceChange,
    ) -> Self {
        let mut transactions = self.transactions.clone();
        transactions.push(transaction);

        Self {
            id: self.id.clone(),
            balance,
            transactions,
            events: self
                .events
                .recorded(BankAccountEvent::record(&self.id, change)),
        }
    }

    fn assert_same_currency(&self, amount: &Money) -> DomainResult<()> {
        if self.balance.currency() != amount.currency() {
            return Err(DomainError::CurrencyMismatch {
                expected: self.balance.currency().to_string(),
                actual: amount.currency().to_string(),
            });
        }
        Ok(())
    }
}

impl Entity for BankAccount {
    type Id = BankAccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for BankAccount {
    const TYPE: &'static str = "bank_account";

    fn collect_events(&self) -> AggregateEvents {
        self.events.clone()
    }

    fn without_events(&self) -> Self {
        Self {
            events: AggregateEvents::new(),
            ..self.clone()
        }
    }
}
