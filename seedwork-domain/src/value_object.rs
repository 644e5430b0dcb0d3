//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//! 构造函数应返回 `Result`，校验失败时不产生任何半有效实例。
//!

/// 值对象抽象
pub trait ValueObject: Clone + PartialEq {
    /// 业务校验失败时的错误类型
    type Error;

    /// 校验值对象的不变量
    fn validate(&self) -> Result<(), Self::Error>;

    /// 校验通过则返回自身，供构造函数收尾使用
    fn validated(self) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use seedwork_macros::value_object;

    #[value_object]
    struct Percentage {
        value: u8,
    }

    impl Percentage {
        fn new(value: u8) -> Result<Self, DomainError> {
            Self { value }.validated()
        }
    }

    impl ValueObject for Percentage {
        type Error = DomainError;

        fn validate(&self) -> Result<(), Self::Error> {
            if self.value > 100 {
                return Err(DomainError::invalid_value("percentage must be <= 100"));
            }
            Ok(())
        }
    }

    #[test]
    fn construction_runs_validation() {
        assert!(Percentage::new(40).is_ok());

        let err = Percentage::new(101).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));
    }

    #[test]
    fn equality_is_over_all_fields() {
        assert_eq!(Percentage::new(10).unwrap(), Percentage::new(10).unwrap());
        assert_ne!(Percentage::new(10).unwrap(), Percentage::new(11).unwrap());
    }
}
