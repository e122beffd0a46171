use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Rendered in place of a field the catalog record does not carry.
pub const MISSING_VALUE: &str = "undefined";

/// Opaque identifier assigned by the product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Loan category. Anything other than the exact catalog spelling of a known
/// category is kept verbatim and rendered as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanType {
    Personal,
    Education,
    Vehicle,
    Home,
    CreditLine,
    DebtConsolidation,
    Other(String),
}

impl LoanType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "personal" => Self::Personal,
            "education" => Self::Education,
            "vehicle" => Self::Vehicle,
            "home" => Self::Home,
            "credit_line" => Self::CreditLine,
            "debt_consolidation" => Self::DebtConsolidation,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Personal => "personal",
            Self::Education => "education",
            Self::Vehicle => "vehicle",
            Self::Home => "home",
            Self::CreditLine => "credit_line",
            Self::DebtConsolidation => "debt_consolidation",
            Self::Other(raw) => raw,
        }
    }

}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for LoanType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<LoanType> for String {
    fn from(value: LoanType) -> Self {
        value.as_str().to_string()
    }
}

/// Loan offering as stored in the catalog. Read-only to badge derivation and
/// the assistant; every attribute except the id may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "lenient_id")]
    pub id: ProductId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(rename = "type", default)]
    pub loan_type: Option<LoanType>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rate_apr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub min_income: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub min_credit_score: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub tenure_min_months: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub tenure_max_months: Option<u32>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub processing_fee_pct: Option<f64>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub prepayment_allowed: bool,
    #[serde(default)]
    pub disbursal_speed: Option<String>,
    #[serde(default)]
    pub docs_level: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Product {
    /// Bare record carrying only its identifier.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            bank: None,
            loan_type: None,
            rate_apr: None,
            min_income: None,
            min_credit_score: None,
            tenure_min_months: None,
            tenure_max_months: None,
            processing_fee_pct: None,
            prepayment_allowed: false,
            disbursal_speed: None,
            docs_level: None,
            summary: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("this loan")
    }

    pub fn display_bank(&self) -> &str {
        self.bank.as_deref().unwrap_or("this bank")
    }

    pub fn display_type(&self) -> &str {
        self.loan_type
            .as_ref()
            .map(LoanType::as_str)
            .unwrap_or("loan")
    }

    /// Fee percentage when the product actually charges one.
    pub fn charged_fee_pct(&self) -> Option<f64> {
        self.processing_fee_pct.filter(|fee| *fee > 0.0)
    }
}

/// Scalar cell as exported by the products table, before it is coerced to
/// the field's type.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl CatalogValue {
    fn into_text(self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Decimal(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }

    fn decimal(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Decimal(value) => Some(*value),
            Self::Text(value) => value.trim().parse().ok(),
        }
    }

    fn count(&self) -> Option<u32> {
        self.decimal()
            .filter(|value| value.fract() == 0.0 && *value >= 0.0 && *value <= f64::from(u32::MAX))
            .map(|value| value as u32)
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<ProductId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ProductId(CatalogValue::deserialize(deserializer)?.into_text()))
}

/// Numbers, numeric text, or nothing; anything unreadable is treated as absent.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<CatalogValue>::deserialize(deserializer)?.and_then(|value| value.decimal()))
}

/// Whole non-negative numbers, including `700.0` or `"700"`.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<CatalogValue>::deserialize(deserializer)?.and_then(|value| value.count()))
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

pub(crate) fn display_decimal(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => MISSING_VALUE.to_string(),
    }
}

pub(crate) fn display_count(value: Option<u32>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => MISSING_VALUE.to_string(),
    }
}

pub(crate) fn display_text(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_VALUE)
}

pub(crate) fn display_fee(product: &Product) -> String {
    match product.charged_fee_pct() {
        Some(fee) => format!("{fee}%"),
        None => "0%".to_string(),
    }
}
