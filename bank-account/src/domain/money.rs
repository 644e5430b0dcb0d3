//! 金额相关值对象：币种、金额与账户余额
//!
//! 金额均为最小货币单位的整数。
//!
use seedwork_domain::error::{DomainError, DomainResult};
use seedwork_domain::value_object::ValueObject;
use seedwork_macros::value_object;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[value_object]
#[derive(Copy, Hash, Default, Serialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            other => Err(DomainError::invalid_value(format!(
                "Unsupported currency \"{other}\""
            ))),
        }
    }
}

/// 一次操作涉及的金额（严格为正）
#[value_object]
#[derive(Copy, Hash, Serialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    pub fn new(amount: i64, currency: Currency) -> DomainResult<Self> {
        Self { amount, currency }.validated()
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl ValueObject for Money {
    type Error = DomainError;

    fn validate(&self) -> DomainResult<()> {
        if self.amount <= 0 {
            return Err(DomainError::invalid_value("Amount must be greater than 0"));
        }
        Ok(())
    }
}

/// 账户余额（非负）
#[value_object]
#[derive(Copy, Hash, Serialize)]
pub struct AccountBalance {
    amount: i64,
    currency: Currency,
}

impl AccountBalance {
    pub fn new(amount: i64, currency: Currency) -> DomainResult<Self> {
        Self { amount, currency }.validated()
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// 入账；调用方已保证币种一致
    pub(crate) fn credit(&self, money: &Money) -> DomainResult<Self> {
        let amount = self
            .amount
            .checked_add(money.amount())
            .ok_or_else(|| DomainError::invalid_value("Balance overflow"))?;
        Self::new(amount, self.currency)
    }

    /// 出账；余额不足时返回 `InsufficientFunds`
    pub(crate) fn debit(&self, money: &Money) -> DomainResult<Self> {
        if self.amount < money.amount() {
            return Err(DomainError::InsufficientFunds {
                available: self.amount,
                requested: money.amount(),
            });
        }
        Self::new(self.amount - money.amount(), self.currency)
    }
}

impl Default for AccountBalance {
    fn default() -> Self {
        Self::zero(Currency::default())
    }
}

impl ValueObject for AccountBalance {
    type Error = DomainError;

    fn validate(&self) -> DomainResult<()> {
        if self.amount < 0 {
            return Err(DomainError::invalid_value("Balance cannot be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_rejects_non_positive_amounts() {
        assert!(Money::new(1, Currency::Usd).is_ok());
        for amount in [0, -5] {
            let err = Money::new(amount, Currency::Usd).unwrap_err();
            assert_eq!(err.to_string(), "invalid value: Amount must be greater than 0");
        }
    }

    #[test]
    fn balance_rejects_negative_amounts() {
        assert!(AccountBalance::new(0, Currency::Eur).is_ok());
        assert!(AccountBalance::new(-1, Currency::Eur).is_err());
        assert_eq!(AccountBalance::default(), AccountBalance::zero(Currency::Usd));
    }

    #[test]
    fn debit_reports_available_and_requested() {
        let balance = AccountBalance::new(50, Currency::Usd).unwrap();
        let err = balance
            .debit(&Money::new(80, Currency::Usd).unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InsufficientFunds {
                available: 50,
                requested: 80
            }
        ));
    }

    #[test]
    fn currency_round_trips_through_its_code() {
        assert_eq!("GBP".parse::<Currency>().unwrap(), Currency::Gbp);
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert!("usd".parse::<Currency>().is_err());
    }

    #[test]
    fn value_equality_covers_all_fields() {
        let a = Money::new(10, Currency::Usd).unwrap();
        assert_eq!(a, Money::new(10, Currency::Usd).unwrap());
        assert_ne!(a, Money::new(10, Currency::Eur).unwrap());
    }
}
