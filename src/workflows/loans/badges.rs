use super::domain::{display_count, display_decimal, Product};
use serde::{Serialize, Serializer};

/// Cards never show more than this many badges.
pub const MAX_BADGES: usize = 4;

const LOW_APR_CEILING: f64 = 12.0;
const COMPETITIVE_APR_CEILING: f64 = 15.0;

/// Display tag summarizing one eligibility or quality trait of a product.
#[derive(Debug, Clone, PartialEq)]
pub enum Badge {
    LowApr,
    CompetitiveRate,
    FlexibleCredit,
    PrepaymentAllowed,
    FastDisbursal,
    LowDocumentation,
    MinimumIncome(Option<f64>),
    MinimumCreditScore(Option<u32>),
}

impl Badge {
    /// Exactly one rate tier applies to every product. A missing rate fails
    /// both ceilings and lands in the top tier.
    pub fn rate_tier(rate_apr: Option<f64>) -> Self {
        match rate_apr {
            Some(rate) if rate <= LOW_APR_CEILING => Self::LowApr,
            Some(rate) if rate <= COMPETITIVE_APR_CEILING => Self::CompetitiveRate,
            _ => Self::FlexibleCredit,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::LowApr => "Low APR".to_string(),
            Self::CompetitiveRate => "Competitive Rate".to_string(),
            Self::FlexibleCredit => "Flexible Credit".to_string(),
            Self::PrepaymentAllowed => "Prepayment Allowed".to_string(),
            Self::FastDisbursal => "Fast Disbursal".to_string(),
            Self::LowDocumentation => "Low Documentation".to_string(),
            Self::MinimumIncome(income) => format!("Income ≥ ₹{}", display_decimal(*income)),
            Self::MinimumCreditScore(score) => {
                format!("Credit Score ≥ {}", display_count(*score))
            }
        }
    }
}

impl Serialize for Badge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Ordered badges for a product, capped at [`MAX_BADGES`]. Conditional
/// feature badges come before the income and credit thresholds, so the
/// thresholds are the first to be dropped.
pub fn derive_badges(product: &Product) -> Vec<Badge> {
    let mut badges = vec![Badge::rate_tier(product.rate_apr)];

    if product.prepayment_allowed {
        badges.push(Badge::PrepaymentAllowed);
    }

    if product.disbursal_speed.as_deref() == Some("fast") {
        badges.push(Badge::FastDisbursal);
    }

    if product.docs_level.as_deref() == Some("low_docs") {
        badges.push(Badge::LowDocumentation);
    }

    badges.push(Badge::MinimumIncome(product.min_income));
    badges.push(Badge::MinimumCreditScore(product.min_credit_score));

    badges.truncate(MAX_BADGES);
    badges
}

pub fn badge_labels(product: &Product) -> Vec<String> {
    derive_badges(product).iter().map(Badge::label).collect()
}
