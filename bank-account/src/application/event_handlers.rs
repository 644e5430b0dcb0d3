//! 默认的账户事件处理器
//!
//! 记录余额变动日志。需要通知、审计等副作用时，以同样方式实现
//! `DomainEventHandler` 并订阅对应事件类型。
//!
use crate::domain::{BalanceChange, BankAccountEvent};
use async_trait::async_trait;
use seedwork_application::{error::AppError, event_bus::DomainEventHandler};
use seedwork_domain::domain_event::DomainEvent;

#[derive(Debug, Default)]
pub struct DefaultMoneyDepositedHandler;

#[derive(Debug, Default)]
pub struct DefaultMoneyWithdrawnHandler;

#[derive(Debug, Default)]
pub struct DefaultMoneyTransferredOutHandler;

#[derive(Debug, Default)]
pub struct DefaultMoneyTransferredInHandler;

fn account_event(event: &dyn DomainEvent) -> Result<&BankAccountEvent, AppError> {
    event.downcast_ref::<BankAccountEvent>().ok_or_else(|| {
        AppError::validation(format!(
            "unexpected event {} ({})",
            event.event_type(),
            event.event_id()
        ))
    })
}

#[async_trait]
impl DomainEventHandler for DefaultMoneyDepositedHandler {
    async fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError> {
        if let BalanceChange::MoneyDeposited {
            account_id, amount, ..
        } = account_event(event)?.change()
        {
            tracing::info!(
                account_id = account_id.as_str(),
                amount = amount.amount(),
                currency = %amount.currency(),
                "money deposited"
            );
        }
        Ok(())
    }
}

#[async_trait]
impl DomainEventHandler for DefaultMoneyWithdrawnHandler {
    async fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError> {
        if let BalanceChange::MoneyWithdrawn {
            account_id, amount, ..
        } = account_event(event)?.change()
        {
            tracing::info!(
                account_id = account_id.as_str(),
                amount = amount.amount(),
                currency = %amount.currency(),
                "money withdrawn"
            );
        }
        Ok(())
    }
}

#[async_trait]
impl DomainEventHandler for DefaultMoneyTransferredOutHandler {
    async fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError> {
        if let BalanceChange::MoneyTransferredOut {
            from_account_id,
            to_account_id,
            amount,
            ..
        } = account_event(event)?.change()
        {
            tracing::info!(
                from = from_account_id.as_str(),
                to = to_account_id.as_str(),
                amount = amount.amount(),
                "money transferred out"
            );
        }
        Ok(())
    }
}

#[async_trait]
impl DomainEventHandler for DefaultMoneyTransferredInHandler {
    async fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError> {
        if let BalanceChange::MoneyTransferredIn {
            from_account_id,
            to_account_id,
            amount,
            ..
        } = account_event(event)?.change()
        {
            tracing::info!(
                from = from_account_id.as_str(),
                to = to_account_id.as_str(),
                amount = amount.amount(),
                "money transferred in"
            );
        }
        Ok(())
    }
}
