//! 账户应用层：命令、查询、投影与默认事件处理器
//!
mod commands;
mod event_handlers;
mod projection;
mod status;

pub use commands::{
    DepositMoney, DepositMoneyHandler, TransferMoney, TransferMoneyHandler, WithdrawMoney,
    WithdrawMoneyHandler,
};
pub use event_handlers::{
    DefaultMoneyDepositedHandler, DefaultMoneyTransferredInHandler,
    DefaultMoneyTransferredOutHandler, DefaultMoneyWithdrawnHandler,
};
pub use projection::{BankAccountFilterCriteria, BankAccountProjection, TransactionProjection};
pub use status::{BankAccountStatus, GetBankAccountStatus, GetBankAccountStatusHandler, TransactionDto};
