//! 写侧用例：存款、取款、转账
//!
//! 处理器流程一致：取出请求上下文中的事件总线 → 解析输入 → 获取聚合 → 状态迁移
//! → 保存 → 将新事件发布到该总线。上下文缺少事件总线时不做任何写入。
//! 事件何时投递由外层的冲刷装饰器决定。
//!
use crate::domain::{BankAccountId, BankAccountObtainer, BankAccountRepository, Currency, Money};
use async_trait::async_trait;
use seedwork_application::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
    event_bus::DomainEventBus,
};
use seedwork_domain::aggregate::AggregateRoot;
use seedwork_domain::domain_event::DomainEvent;
use seedwork_domain::error::DomainError;
use seedwork_domain::persist::Repository;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DepositMoney {
    pub account_id: String,
    pub amount: i64,
    pub currency: String,
}

impl Command for DepositMoney {
    const NAME: &'static str = "DepositMoney";
}

#[derive(Debug, Clone)]
pub struct WithdrawMoney {
    pub account_id: String,
    pub amount: i64,
    pub currency: String,
}

impl Command for WithdrawMoney {
    const NAME: &'static str = "WithdrawMoney";
}

#[derive(Debug, Clone)]
pub struct TransferMoney {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: i64,
    pub currency: String,
}

impl Command for TransferMoney {
    const NAME: &'static str = "TransferMoney";
}

fn money(amount: i64, currency: &str) -> Result<Money, DomainError> {
    Money::new(amount, currency.parse::<Currency>()?)
}

pub struct DepositMoneyHandler {
    obtainer: BankAccountObtainer,
    repository: Arc<BankAccountRepository>,
}

impl DepositMoneyHandler {
    pub fn new(obtainer: BankAccountObtainer, repository: Arc<BankAccountRepository>) -> Self {
        Self {
            obtainer,
            repository,
        }
    }
}

#[async_trait]
impl CommandHandler<DepositMoney> for DepositMoneyHandler {
    #[tracing::instrument(skip(self, ctx), fields(account_id = %cmd.account_id))]
    async fn handle(&self, ctx: &AppContext, cmd: DepositMoney) -> Result<(), AppError> {
        let events = ctx.events()?;
        let account_id = BankAccountId::parse(cmd.account_id)?;
        let amount = money(cmd.amount, &cmd.currency)?;

        let account = self.obtainer.obtain(&account_id).await?.deposit(amount)?;
        self.repository.save(&account).await?;
        events.publish(&account.collect_events())?;
        Ok(())
    }
}

pub struct WithdrawMoneyHandler {
    obtainer: BankAccountObtainer,
    repository: Arc<BankAccountRepository>,
}

impl WithdrawMoneyHandler {
    pub fn new(obtainer: BankAccountObtainer, repository: Arc<BankAccountRepository>) -> Self {
        Self {
            obtainer,
            repository,
        }
    }
}

#[async_trait]
impl CommandHandler<WithdrawMoney> for WithdrawMoneyHandler {
    #[tracing::instrument(skip(self, ctx), fields(account_id = %cmd.account_id))]
    async fn handle(&self, ctx: &AppContext, cmd: WithdrawMoney) -> Result<(), AppError> {
        let events = ctx.events()?;
        let account_id = BankAccountId::parse(cmd.account_id)?;
        let amount = money(cmd.amount, &cmd.currency)?;

        let account = self.obtainer.obtain(&account_id).await?.withdraw(amount)?;
        self.repository.save(&account).await?;
        events.publish(&account.collect_events())?;
        Ok(())
    }
}

pub struct TransferMoneyHandler {
    obtainer: BankAccountObtainer,
    repository: Arc<BankAccountRepository>,
}

impl TransferMoneyHandler {
    pub fn new(obtainer: BankAccountObtainer, repository: Arc<BankAccountRepository>) -> Self {
        Self {
            obtainer,
            repository,
        }
    }
}

#[async_trait]
impl CommandHandler<TransferMoney> for TransferMoneyHandler {
    #[tracing::instrument(
        skip(self, ctx),
        fields(from = %cmd.from_account_id, to = %cmd.to_account_id)
    )]
    async fn handle(&self, ctx: &AppContext, cmd: TransferMoney) -> Result<(), AppError> {
        let events = ctx.events()?;
        let from_id = BankAccountId::parse(cmd.from_account_id)?;
        let to_id = BankAccountId::parse(cmd.to_account_id)?;
        if from_id == to_id {
            return Err(DomainError::InvalidState {
                reason: "cannot transfer to the same account".into(),
            }
            .into());
        }
        let amount = money(cmd.amount, &cmd.currency)?;

        let from = self
            .obtainer
            .obtain(&from_id)
            .await?
            .transfer_out(amount, &to_id)?;
        let to = self.obtainer.obtain(&to_id).await?.transfer_in(amount, &from_id)?;

        self.repository.save(&from).await?;
        self.repository.save(&to).await?;

        let recorded: Vec<Arc<dyn DomainEvent>> = from
            .collect_events()
            .iter()
            .chain(to.collect_events().iter())
            .cloned()
            .collect();
        events.publish(&recorded)?;
        Ok(())
    }
}
