use async_trait::async_trait;
use bank_account::application::{
    DepositMoney, GetBankAccountStatus, TransferMoney, WithdrawMoney,
};
use bank_account::domain::{
    AccountBalance, BankAccount, BankAccountEvent, BankAccountId, Currency, EVENT_TYPES,
    TransactionType,
};
use bank_account::infrastructure::BankAccountModule;
use seedwork_application::{
    FlushPolicy,
    command::Command,
    command_bus::CommandBus,
    context::AppContext,
    error::AppError,
    event_bus::{DomainEventBus, DomainEventHandler},
    query_bus::QueryBus,
};
use seedwork_domain::domain_event::DomainEvent;
use seedwork_domain::error::{DomainError, DomainResult};
use seedwork_domain::persist::Repository;
use seedwork_domain::unit_of_work::UnitOfWork;
use std::sync::{Arc, Mutex};

type Log = Arc<Mutex<Vec<String>>>;

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

struct RecordingUnitOfWork {
    log: Log,
}

#[async_trait]
impl UnitOfWork for RecordingUnitOfWork {
    async fn create_session(&self) -> DomainResult<()> {
        self.log.lock().unwrap().push("begin".into());
        Ok(())
    }

    async fn commit(&self) -> DomainResult<()> {
        self.log.lock().unwrap().push("commit".into());
        Ok(())
    }

    async fn rollback(&self) -> DomainResult<()> {
        self.log.lock().unwrap().push("rollback".into());
        Ok(())
    }
}

/// 记录投递到的事件类型与所属账户
struct Audit {
    log: Log,
}

#[async_trait]
impl DomainEventHandler for Audit {
    async fn handle(&self, event: &dyn DomainEvent) -> Result<(), AppError> {
        let account = event
            .downcast_ref::<BankAccountEvent>()
            .map(|e| e.metadata().aggregate_id().to_owned())
            .unwrap_or_default();
        self.log
            .lock()
            .unwrap()
            .push(format!("{}@{account}", event.event_type()));
        Ok(())
    }
}

async fn fixture(accounts: &[(&str, i64)]) -> (BankAccountModule, Log, Log) {
    let module = BankAccountModule::in_memory();
    for (id, balance) in accounts {
        let account = BankAccount::create(
            Some(BankAccountId::parse(*id).unwrap()),
            Some(AccountBalance::new(*balance, Currency::Usd).unwrap()),
        );
        module.accounts.save(&account).await.unwrap();
    }

    let audit: Log = Arc::default();
    module
        .container
        .bind_event_handler("test.audit", Arc::new(Audit { log: audit.clone() }));
    for event_type in EVENT_TYPES {
        module.events.subscribe(event_type, "test.audit");
    }

    (module, audit, Arc::default())
}

fn deposit(account_id: &str, amount: i64) -> DepositMoney {
    DepositMoney {
        account_id: account_id.into(),
        amount,
        currency: "USD".into(),
    }
}

#[tokio::test]
async fn deposit_commits_and_flushes_event() {
    let (module, audit, tx) = fixture(&[("acc-1", 0)]).await;
    let bus = module.command_pipeline(
        Arc::new(RecordingUnitOfWork { log: tx.clone() }),
        FlushPolicy::default(),
    );

    bus.dispatch(&module.request_context(), deposit("acc-1", 100))
        .await
        .unwrap();

    assert_eq!(entries(&tx), vec!["begin", "commit"]);
    assert_eq!(
        entries(&audit),
        vec!["bank_account.money_deposited@acc-1"]
    );

    let status = module
        .queries
        .ask(
            &module.request_context(),
            GetBankAccountStatus {
                account_id: "acc-1".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(status.balance.amount(), 100);
    assert_eq!(status.transactions.len(), 1);
    assert_eq!(status.transactions[0].kind, TransactionType::Deposit);
}

#[tokio::test]
async fn failed_withdrawal_rolls_back_without_events() {
    let (module, audit, tx) = fixture(&[("acc-1", 50)]).await;
    let bus = module.command_pipeline(
        Arc::new(RecordingUnitOfWork { log: tx.clone() }),
        FlushPolicy::default(),
    );
    let ctx = module.request_context();

    let err = bus
        .dispatch(
            &ctx,
            WithdrawMoney {
                account_id: "acc-1".into(),
                amount: 80,
                currency: "USD".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_domain(),
        Some(DomainError::InsufficientFunds {
            available: 50,
            requested: 80
        })
    ));
    assert_eq!(entries(&tx), vec!["begin", "rollback"]);
    assert!(entries(&audit).is_empty());
    assert_eq!(ctx.events().unwrap().pending(), 0);

    let stored = module
        .accounts
        .find_by_id(&BankAccountId::parse("acc-1").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.balance().amount(), 50);
}

#[tokio::test]
async fn transfer_updates_both_accounts_and_flushes_in_order() {
    let (module, audit, tx) = fixture(&[("acc-1", 100), ("acc-2", 0)]).await;
    let bus = module.command_pipeline(
        Arc::new(RecordingUnitOfWork { log: tx.clone() }),
        FlushPolicy::default(),
    );

    bus.dispatch(
        &module.request_context(),
        TransferMoney {
            from_account_id: "acc-1".into(),
            to_account_id: "acc-2".into(),
            amount: 40,
            currency: "USD".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(
        entries(&audit),
        vec![
            "bank_account.money_transferred_out@acc-1",
            "bank_account.money_transferred_in@acc-2",
        ]
    );

    let ctx = module.request_context();
    let from = module
        .queries
        .ask(&ctx, GetBankAccountStatus { account_id: "acc-1".into() })
        .await
        .unwrap();
    let to = module
        .queries
        .ask(&ctx, GetBankAccountStatus { account_id: "acc-2".into() })
        .await
        .unwrap();
    assert_eq!(from.balance.amount(), 60);
    assert_eq!(from.transactions[0].kind, TransactionType::TransferOut);
    assert_eq!(to.balance.amount(), 40);
    assert_eq!(to.transactions[0].kind, TransactionType::TransferIn);
}

#[tokio::test]
async fn transfer_to_same_account_is_rejected() {
    let (module, _audit, tx) = fixture(&[("acc-1", 100)]).await;
    let bus = module.command_pipeline(
        Arc::new(RecordingUnitOfWork { log: tx.clone() }),
        FlushPolicy::default(),
    );

    let err = bus
        .dispatch(
            &module.request_context(),
            TransferMoney {
                from_account_id: "acc-1".into(),
                to_account_id: "acc-1".into(),
                amount: 10,
                currency: "USD".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_domain(),
        Some(DomainError::InvalidState { .. })
    ));
    assert_eq!(entries(&tx), vec!["begin", "rollback"]);
}

#[tokio::test]
async fn sequential_requests_use_independent_buffers() {
    let (module, audit, tx) = fixture(&[("acc-1", 0)]).await;
    let bus = module.command_pipeline(
        Arc::new(RecordingUnitOfWork { log: tx.clone() }),
        FlushPolicy::default(),
    );

    bus.dispatch(&module.request_context(), deposit("acc-1", 10))
        .await
        .unwrap();
    bus.dispatch(&module.request_context(), deposit("acc-1", 15))
        .await
        .unwrap();

    assert_eq!(entries(&audit).len(), 2);
    assert_eq!(entries(&tx), vec!["begin", "commit", "begin", "commit"]);
    assert_eq!(module.events.pending(), 0);
}

#[tokio::test]
async fn unknown_account_surfaces_not_found() {
    let (module, _audit, tx) = fixture(&[]).await;
    let bus = module.command_pipeline(
        Arc::new(RecordingUnitOfWork { log: tx.clone() }),
        FlushPolicy::default(),
    );

    let err = bus
        .dispatch(&module.request_context(), deposit("acc-404", 10))
        .await
        .unwrap_err();
    assert_eq!(
        err.as_domain().map(ToString::to_string).as_deref(),
        Some("Resource 'BankAccount' not found for id 'acc-404'")
    );

    let err = module
        .queries
        .ask(
            &module.request_context(),
            GetBankAccountStatus {
                account_id: "acc-404".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::NotFound { ref resource, .. }) if resource == "BankAccount"
    ));
}

struct CloseAccount;

impl Command for CloseAccount {
    const NAME: &'static str = "CloseAccount";
}

#[tokio::test]
async fn unregistered_command_is_a_configuration_error() {
    let (module, _audit, tx) = fixture(&[]).await;
    let bus = module.command_pipeline(
        Arc::new(RecordingUnitOfWork { log: tx.clone() }),
        FlushPolicy::default(),
    );

    let err = bus
        .dispatch(&module.request_context(), CloseAccount)
        .await
        .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(err.to_string(), "no handler registered for command CloseAccount");
    assert_eq!(entries(&tx), vec!["begin", "rollback"]);
}

async fn stored_balance(module: &BankAccountModule, id: &str) -> i64 {
    module
        .accounts
        .find_by_id(&BankAccountId::parse(id).unwrap())
        .await
        .unwrap()
        .unwrap()
        .balance()
        .amount()
}

#[tokio::test]
async fn context_without_event_bus_is_rejected_before_any_write() {
    let (module, _audit, _tx) = fixture(&[("acc-1", 0), ("acc-2", 50)]).await;
    let bare = AppContext::default();

    let err = module
        .commands
        .dispatch(&bare, deposit("acc-1", 10))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MissingEventBus));

    let err = module
        .commands
        .dispatch(
            &bare,
            WithdrawMoney {
                account_id: "acc-2".into(),
                amount: 10,
                currency: "USD".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MissingEventBus));

    let err = module
        .commands
        .dispatch(
            &bare,
            TransferMoney {
                from_account_id: "acc-2".into(),
                to_account_id: "acc-1".into(),
                amount: 20,
                currency: "USD".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MissingEventBus));

    assert_eq!(stored_balance(&module, "acc-1").await, 0);
    assert_eq!(stored_balance(&module, "acc-2").await, 50);
}
