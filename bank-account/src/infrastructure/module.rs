use crate::application::{
    DefaultMoneyDepositedHandler, DefaultMoneyTransferredInHandler,
    DefaultMoneyTransferredOutHandler, DefaultMoneyWithdrawnHandler, DepositMoney,
    DepositMoneyHandler, GetBankAccountStatus, GetBankAccountStatusHandler, TransferMoney,
    TransferMoneyHandler, WithdrawMoney, WithdrawMoneyHandler,
};
use crate::domain::{
    BankAccount, BankAccountRepository, MONEY_DEPOSITED, MONEY_TRANSFERRED_IN,
    MONEY_TRANSFERRED_OUT, MONEY_WITHDRAWN, bank_account_obtainer,
};
use crate::infrastructure::InMemoryBankAccountQueryRepository;
use seedwork_application::{
    CommandPipeline, ContainerCommandBus, ContainerQueryBus, DeferredDomainEventBus,
    FlushPolicy, InMemoryContainer, context::AppContext, event_bus::DomainEventBus,
    pipeline::PipelineBus,
};
use seedwork_domain::persist::InMemoryRepository;
use seedwork_domain::unit_of_work::UnitOfWork;
use std::sync::Arc;

pub const DEPOSIT_MONEY_HANDLER: &str = "bank_account.deposit_money";
pub const WITHDRAW_MONEY_HANDLER: &str = "bank_account.withdraw_money";
pub const TRANSFER_MONEY_HANDLER: &str = "bank_account.transfer_money";
pub const GET_STATUS_HANDLER: &str = "bank_account.get_status";
pub const MONEY_DEPOSITED_HANDLER: &str = "bank_account.on_money_deposited";
pub const MONEY_WITHDRAWN_HANDLER: &str = "bank_account.on_money_withdrawn";
pub const MONEY_TRANSFERRED_OUT_HANDLER: &str = "bank_account.on_money_transferred_out";
pub const MONEY_TRANSFERRED_IN_HANDLER: &str = "bank_account.on_money_transferred_in";

/// 账户上下文的内存装配：仓储、容器、总线与默认事件订阅
pub struct BankAccountModule {
    pub container: Arc<InMemoryContainer>,
    pub accounts: Arc<InMemoryRepository<BankAccount>>,
    pub commands: Arc<ContainerCommandBus>,
    pub queries: ContainerQueryBus,
    pub events: DeferredDomainEventBus,
}

impl BankAccountModule {
    pub fn in_memory() -> Self {
        let container = Arc::new(InMemoryContainer::new());
        let accounts = Arc::new(InMemoryRepository::<BankAccount>::new());
        let repository: Arc<BankAccountRepository> = accounts.clone();

        container.bind_command_handler::<DepositMoney, _>(
            DEPOSIT_MONEY_HANDLER,
            Arc::new(DepositMoneyHandler::new(
                bank_account_obtainer(repository.clone()),
                repository.clone(),
            )),
        );
        container.bind_command_handler::<WithdrawMoney, _>(
            WITHDRAW_MONEY_HANDLER,
            Arc::new(WithdrawMoneyHandler::new(
                bank_account_obtainer(repository.clone()),
                repository.clone(),
            )),
        );
        container.bind_command_handler::<TransferMoney, _>(
            TRANSFER_MONEY_HANDLER,
            Arc::new(TransferMoneyHandler::new(
                bank_account_obtainer(repository.clone()),
                repository,
            )),
        );
        container.bind_query_handler::<GetBankAccountStatus, _>(
            GET_STATUS_HANDLER,
            Arc::new(GetBankAccountStatusHandler::new(Arc::new(
                InMemoryBankAccountQueryRepository::new(accounts.clone()),
            ))),
        );
        container.bind_event_handler(MONEY_DEPOSITED_HANDLER, Arc::new(DefaultMoneyDepositedHandler));
        container.bind_event_handler(MONEY_WITHDRAWN_HANDLER, Arc::new(DefaultMoneyWithdrawnHandler));
        container.bind_event_handler(
            MONEY_TRANSFERRED_OUT_HANDLER,
            Arc::new(DefaultMoneyTransferredOutHandler),
        );
        container.bind_event_handler(
            MONEY_TRANSFERRED_IN_HANDLER,
            Arc::new(DefaultMoneyTransferredInHandler),
        );

        let commands = Arc::new(ContainerCommandBus::new(container.clone()));
        commands.register::<DepositMoney>(DEPOSIT_MONEY_HANDLER);
        commands.register::<WithdrawMoney>(WITHDRAW_MONEY_HANDLER);
        commands.register::<TransferMoney>(TRANSFER_MONEY_HANDLER);

        let queries = ContainerQueryBus::new(container.clone());
        queries.register::<GetBankAccountStatus>(GET_STATUS_HANDLER);

        let events = DeferredDomainEventBus::new(container.clone());
        events.subscribe(MONEY_DEPOSITED, MONEY_DEPOSITED_HANDLER);
        events.subscribe(MONEY_WITHDRAWN, MONEY_WITHDRAWN_HANDLER);
        events.subscribe(MONEY_TRANSFERRED_OUT, MONEY_TRANSFERRED_OUT_HANDLER);
        events.subscribe(MONEY_TRANSFERRED_IN, MONEY_TRANSFERRED_IN_HANDLER);

        Self {
            container,
            accounts,
            commands,
            queries,
            events,
        }
    }

    /// 新请求的上下文，绑定独立缓冲的事件总线
    pub fn request_context(&self) -> AppContext {
        AppContext::default().with_events(Arc::new(self.events.scoped()))
    }

    /// 以给定工作单元组装标准命令管道
    pub fn command_pipeline(
        &self,
        unit_of_work: Arc<dyn UnitOfWork>,
        flush_policy: FlushPolicy,
    ) -> PipelineBus<Arc<ContainerCommandBus>> {
        CommandPipeline::builder()
            .inner(self.commands.clone())
            .unit_of_work(unit_of_work)
            .flush_policy(flush_policy)
            .build()
            .into_bus()
    }
}
