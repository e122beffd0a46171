use crate::workflows::loans::domain::{
    display_count, display_decimal, display_fee, display_text, Product,
};

pub(crate) fn minimum_income(product: &Product) -> String {
    format!(
        "The minimum income required for {} is ₹{}.",
        product.display_name(),
        display_decimal(product.min_income)
    )
}

pub(crate) fn credit_score(product: &Product) -> String {
    format!(
        "The minimum credit score required for {} is {}.",
        product.display_name(),
        display_count(product.min_credit_score)
    )
}

pub(crate) fn rate(product: &Product) -> String {
    format!(
        "{} from {} has an APR of {}%.",
        product.display_name(),
        product.display_bank(),
        display_decimal(product.rate_apr)
    )
}

pub(crate) fn tenure(product: &Product) -> String {
    format!(
        "The tenure range for {} is {}–{} months.",
        product.display_name(),
        display_count(product.tenure_min_months),
        display_count(product.tenure_max_months)
    )
}

pub(crate) fn prepayment(product: &Product) -> String {
    if product.prepayment_allowed {
        format!("Yes, prepayment is allowed for {}.", product.display_name())
    } else {
        format!("No, prepayment is not allowed for {}.", product.display_name())
    }
}

pub(crate) fn processing_fee(product: &Product) -> String {
    match product.charged_fee_pct() {
        Some(fee) => format!(
            "{} has a processing fee of {}% of the loan amount.",
            product.display_name(),
            fee
        ),
        None => format!(
            "{} does not charge a processing fee (0%).",
            product.display_name()
        ),
    }
}

pub(crate) fn disbursal(product: &Product) -> String {
    format!(
        "The disbursal speed for {} is described as \"{}\".",
        product.display_name(),
        display_text(product.disbursal_speed.as_deref())
    )
}

pub(crate) fn documents(product: &Product) -> String {
    format!(
        "The documentation level for {} is \"{}\".",
        product.display_name(),
        display_text(product.docs_level.as_deref())
    )
}

pub(crate) fn loan_type(product: &Product) -> String {
    format!(
        "{} is a {} loan offered by {}.",
        product.display_name(),
        product.display_type().to_uppercase(),
        product.display_bank()
    )
}

pub(crate) fn bank(product: &Product) -> String {
    format!(
        "{} is offered by {}.",
        product.display_name(),
        product.display_bank()
    )
}

/// Full-detail summary used when no topic matches.
pub(crate) fn key_details(product: &Product) -> String {
    let lines = [
        format!("• Loan type: {}", product.display_type()),
        format!("• APR: {}%", display_decimal(product.rate_apr)),
        format!(
            "• Tenure: {}–{} months",
            display_count(product.tenure_min_months),
            display_count(product.tenure_max_months)
        ),
        format!("• Minimum income: ₹{}", display_decimal(product.min_income)),
        format!(
            "• Minimum credit score: {}",
            display_count(product.min_credit_score)
        ),
        format!(
            "• Prepayment allowed: {}",
            if product.prepayment_allowed { "Yes" } else { "No" }
        ),
        format!("• Processing fee: {}", display_fee(product)),
        format!(
            "• Disbursal speed: {}",
            display_text(product.disbursal_speed.as_deref())
        ),
        format!(
            "• Documentation level: {}",
            display_text(product.docs_level.as_deref())
        ),
    ];

    format!(
        "Here are the key details for {} from {}:\n\n{}\n\nUse these details to decide if this loan fits your needs.",
        product.display_name(),
        product.display_bank(),
        lines.join("\n")
    )
}
