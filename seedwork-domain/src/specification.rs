//! 规约（Specification）
//!
//! 将可复用的筛选/业务规则封装为对象，可独立测试。
//! 读侧的过滤条件即以规约形式作用于投影，多个条件按 AND 语义共同生效。
//!

/// 规约模式的核心 trait
pub trait Specification<T> {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}

/// 一组规约全部满足（空集合视为满足）
pub fn satisfies_all<T, S>(candidate: &T, specs: &[S]) -> bool
where
    S: Specification<T>,
{
    specs.iter().all(|spec| spec.is_satisfied_by(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AtLeast(i64);
    impl Specification<i64> for AtLeast {
        fn is_satisfied_by(&self, candidate: &i64) -> bool {
            *candidate >= self.0
        }
    }

    #[test]
    fn empty_set_is_satisfied() {
        let none: Vec<AtLeast> = Vec::new();
        assert!(satisfies_all(&1, &none));
    }

    #[test]
    fn every_specification_must_hold() {
        let specs = [AtLeast(0), AtLeast(2)];
        assert!(satisfies_all(&2, &specs));
        assert!(!satisfies_all(&1, &specs));
    }
}
