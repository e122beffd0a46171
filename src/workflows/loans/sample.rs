use super::domain::{LoanType, Product};

#[allow(clippy::too_many_arguments)]
fn offering(
    id: &str,
    name: &str,
    bank: &str,
    loan_type: LoanType,
    rate_apr: f64,
    min_income: f64,
    min_credit_score: u32,
    tenure_months: (u32, u32),
    processing_fee_pct: f64,
    prepayment_allowed: bool,
    disbursal_speed: &str,
    docs_level: &str,
    summary: &str,
) -> Product {
    Product {
        name: Some(name.to_string()),
        bank: Some(bank.to_string()),
        loan_type: Some(loan_type),
        rate_apr: Some(rate_apr),
        min_income: Some(min_income),
        min_credit_score: Some(min_credit_score),
        tenure_min_months: Some(tenure_months.0),
        tenure_max_months: Some(tenure_months.1),
        processing_fee_pct: Some(processing_fee_pct),
        prepayment_allowed,
        disbursal_speed: Some(disbursal_speed.to_string()),
        docs_level: Some(docs_level.to_string()),
        summary: Some(summary.to_string()),
        ..Product::new(id)
    }
}

/// Built-in catalog served when no catalog file is configured.
pub fn sample_products() -> Vec<Product> {
    vec![
        offering(
            "quick-cash",
            "QuickCash",
            "ABC Bank",
            LoanType::Personal,
            11.0,
            30000.0,
            700,
            (12, 60),
            2.0,
            true,
            "fast",
            "low_docs",
            "Instant personal loan with minimal paperwork for salaried borrowers.",
        ),
        offering(
            "scholar-plus",
            "Scholar Plus",
            "Northwind Bank",
            LoanType::Education,
            9.5,
            20000.0,
            650,
            (24, 120),
            0.0,
            true,
            "standard",
            "standard",
            "Tuition and living costs covered with a moratorium during the course.",
        ),
        offering(
            "drive-easy",
            "DriveEasy Auto",
            "Metro Credit Union",
            LoanType::Vehicle,
            13.25,
            25000.0,
            680,
            (12, 84),
            1.0,
            false,
            "fast",
            "standard",
            "New and used vehicle financing up to 90% of on-road price.",
        ),
        offering(
            "homestead",
            "Homestead Prime",
            "Harbor Housing Finance",
            LoanType::Home,
            8.6,
            50000.0,
            720,
            (60, 360),
            0.5,
            true,
            "standard",
            "standard",
            "Long-tenure home loan with balance transfer support.",
        ),
        offering(
            "flexline",
            "FlexLine",
            "Summit Bank",
            LoanType::CreditLine,
            16.0,
            35000.0,
            690,
            (6, 36),
            1.5,
            true,
            "fast",
            "low_docs",
            "Revolving credit line; interest is charged only on the amount drawn.",
        ),
        offering(
            "clearpath",
            "ClearPath Consolidation",
            "ABC Bank",
            LoanType::DebtConsolidation,
            14.5,
            40000.0,
            710,
            (12, 72),
            2.5,
            false,
            "standard",
            "standard",
            "Roll high-interest card balances into a single fixed EMI.",
        ),
    ]
}
