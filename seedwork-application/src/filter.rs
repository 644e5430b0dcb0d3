//! 过滤条件（FilterCriteria）与求值引擎
//!
//! 条件为不可变的（字段, 运算符, 值）三元组，构造时校验：
//! - 字段必须属于投影声明的 `FILTERABLE_FIELDS`；
//! - `between` 需要恰好两个元素的数组（闭区间）；
//! - `in` 需要数组；其余运算符只接受标量。
//!
//! 求值规则：
//! - `eq/neq` 宽松相等：数值按数值比较，数字字符串可与数值比较；
//! - `gt/gte/lt/lte/between` 数值按数值、字符串按字典序，不可比较时不匹配；
//! - `in` 对集合做严格相等；
//! - `like` 对字符串做大小写不敏感的子串匹配，非字符串不匹配；
//! - 投影未暴露（或为 null）的字段不匹配。
//!
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use seedwork_domain::specification::{Specification, satisfies_all};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// 过滤运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Between,
    Like,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::In => "in",
            Self::Between => "between",
            Self::Like => "like",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "eq" => Self::Eq,
            "neq" => Self::Neq,
            "gt" => Self::Gt,
            "gte" => Self::Gte,
            "lt" => Self::Lt,
            "lte" => Self::Lte,
            "in" => Self::In,
            "between" => Self::Between,
            "like" => Self::Like,
            other => {
                return Err(AppError::validation(format!(
                    "unknown filter operator '{other}'"
                )));
            }
        };
        Ok(op)
    }
}

/// 经过形状校验的条件值
#[derive(Debug, Clone, PartialEq)]
pub enum CriterionValue {
    Scalar(Value),
    Set(Vec<Value>),
    Range(Value, Value),
}

/// 可被过滤的读模型投影
pub trait Projection: Serialize + Clone + Send + Sync + 'static {
    /// 允许出现在过滤条件中的字段名
    const FILTERABLE_FIELDS: &'static [&'static str];

    /// 读取字段值；未暴露的字段返回 `None`
    fn field(&self, name: &str) -> Option<Value>;
}

/// 针对投影 `P` 的单个过滤条件
pub struct FilterCriteria<P> {
    field: String,
    operator: FilterOperator,
    value: CriterionValue,
    _marker: PhantomData<fn() -> P>,
}

impl<P> FilterCriteria<P>
where
    P: Projection,
{
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: Value,
    ) -> Result<Self, AppError> {
        let field = field.into();
        if !P::FILTERABLE_FIELDS.contains(&field.as_str()) {
            return Err(AppError::validation(format!(
                "invalid field \"{field}\"; allowed: {}",
                P::FILTERABLE_FIELDS.join(", ")
            )));
        }

        let value = match (operator, value) {
            (FilterOperator::Between, Value::Array(items)) if items.len() == 2 => {
                let mut bounds = items.into_iter();
                match (bounds.next(), bounds.next()) {
                    (Some(lo), Some(hi)) => CriterionValue::Range(lo, hi),
                    _ => return Err(between_shape()),
                }
            }
            (FilterOperator::Between, _) => return Err(between_shape()),
            (FilterOperator::In, Value::Array(items)) => CriterionValue::Set(items),
            (FilterOperator::In, _) => {
                return Err(AppError::validation(
                    "operator in requires value to be an array",
                ));
            }
            (op, Value::Array(_) | Value::Object(_)) => {
                return Err(AppError::validation(format!(
                    "operator {op} requires a scalar value"
                )));
            }
            (_, scalar) => CriterionValue::Scalar(scalar),
        };

        Ok(Self {
            field,
            operator,
            value,
            _marker: PhantomData,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    pub fn value(&self) -> &CriterionValue {
        &self.value
    }

    /// 投影是否满足本条件
    pub fn matches(&self, projection: &P) -> bool {
        match projection.field(&self.field) {
            Some(Value::Null) | None => false,
            Some(actual) => evaluate(&actual, self.operator, &self.value),
        }
    }
}

fn between_shape() -> AppError {
    AppError::validation("operator between requires value to be an array of two elements")
}

impl<P> Clone for FilterCriteria<P> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            operator: self.operator,
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P> fmt::Debug for FilterCriteria<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCriteria")
            .field("field", &self.field)
            .field("operator", &self.operator)
            .field("value", &self.value)
            .finish()
    }
}

impl<P> Specification<P> for FilterCriteria<P>
where
    P: Projection,
{
    fn is_satisfied_by(&self, candidate: &P) -> bool {
        self.matches(candidate)
    }
}

/// 以 AND 语义过滤，保持原有顺序，返回 `[offset, offset + limit)` 区间
pub fn apply_filters<P>(
    items: impl IntoIterator<Item = P>,
    offset: usize,
    limit: usize,
    criteria: &[FilterCriteria<P>],
) -> Vec<P>
where
    P: Projection,
{
    items
        .into_iter()
        .filter(|item| satisfies_all(item, criteria))
        .skip(offset)
        .take(limit)
        .collect()
}

fn evaluate(actual: &Value, operator: FilterOperator, expected: &CriterionValue) -> bool {
    use FilterOperator as Op;

    match (operator, expected) {
        (Op::Eq, CriterionValue::Scalar(e)) => loose_eq(actual, e),
        (Op::Neq, CriterionValue::Scalar(e)) => !loose_eq(actual, e),
        (Op::Gt, CriterionValue::Scalar(e)) => compare(actual, e) == Some(Ordering::Greater),
        (Op::Gte, CriterionValue::Scalar(e)) => {
            matches!(compare(actual, e), Some(Ordering::Greater | Ordering::Equal))
        }
        (Op::Lt, CriterionValue::Scalar(e)) => compare(actual, e) == Some(Ordering::Less),
        (Op::Lte, CriterionValue::Scalar(e)) => {
            matches!(compare(actual, e), Some(Ordering::Less | Ordering::Equal))
        }
        (Op::In, CriterionValue::Set(items)) => items.contains(actual),
        (Op::Between, CriterionValue::Range(lo, hi)) => {
            matches!(compare(actual, lo), Some(Ordering::Greater | Ordering::Equal))
                && matches!(compare(actual, hi), Some(Ordering::Less | Ordering::Equal))
        }
        (Op::Like, CriterionValue::Scalar(Value::String(needle))) => actual
            .as_str()
            .is_some_and(|hay| hay.to_lowercase().contains(&needle.to_lowercase())),
        _ => false,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn truthy(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|x| x != 0.0),
        Value::String(s) => Some(!(s.is_empty() || s == "0")),
        _ => None,
    }
}

// 任一侧为布尔时按真值比较；任一侧为数值时按数值比较；否则按 JSON 值比较
fn loose_eq(a: &Value, b: &Value) -> bool {
    if a.is_boolean() || b.is_boolean() {
        return match (truthy(a), truthy(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        };
    }
    if a.is_number() || b.is_number() {
        return match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        };
    }
    a == b
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ if a.is_number() || b.is_number() => as_number(a)?.partial_cmp(&as_number(b)?),
        _ => None,
    }
}
