//! End-to-end scenarios for the loan dashboard: ranking the catalog, deriving
//! badges, and answering product questions through the public service facade.

use std::sync::Arc;

use loan_compare::workflows::loans::{
    badge_labels, classify, resolve_answer, Conversation, InMemoryProductRepository, LoanType,
    Product, ProductId, ProductService, Topic, MAX_BADGES,
};

fn quick_cash() -> Product {
    Product {
        name: Some("QuickCash".to_string()),
        bank: Some("ABC Bank".to_string()),
        loan_type: Some(LoanType::Personal),
        rate_apr: Some(11.0),
        min_income: Some(30000.0),
        min_credit_score: Some(700),
        tenure_min_months: Some(12),
        tenure_max_months: Some(60),
        processing_fee_pct: Some(2.0),
        prepayment_allowed: true,
        disbursal_speed: Some("fast".to_string()),
        docs_level: Some("low_docs".to_string()),
        ..Product::new("quick-cash")
    }
}

#[test]
fn quick_cash_example_badges_and_answers() {
    let product = quick_cash();

    assert_eq!(
        badge_labels(&product),
        vec![
            "Low APR",
            "Prepayment Allowed",
            "Fast Disbursal",
            "Low Documentation"
        ]
    );
    assert_eq!(
        resolve_answer(&product, "What's the APR?"),
        "QuickCash from ABC Bank has an APR of 11%."
    );

    let fallback = resolve_answer(&product, "hello");
    assert!(fallback.starts_with("Here are the key details for QuickCash from ABC Bank:"));
    assert_eq!(fallback.lines().filter(|line| line.starts_with('•')).count(), 9);
}

#[test]
fn rate_tiers_are_exclusive_across_the_catalog() {
    let sample = InMemoryProductRepository::sample();
    let service = ProductService::new(Arc::new(sample), 10);
    let cards = service.top_picks(None).expect("top picks");

    for card in &cards {
        let tiers = card
            .badges
            .iter()
            .filter(|badge| {
                matches!(
                    badge.as_str(),
                    "Low APR" | "Competitive Rate" | "Flexible Credit"
                )
            })
            .count();
        assert_eq!(tiers, 1, "{} has {} rate tiers", card.id, tiers);
        assert!(card.badges.len() <= MAX_BADGES);
    }
}

#[test]
fn dashboard_flow_from_listing_to_chat() {
    let service = ProductService::new(Arc::new(InMemoryProductRepository::sample()), 5);

    let picks = service.top_picks(None).expect("top picks");
    assert_eq!(picks.len(), 5);
    assert!(picks[0].is_best_match);

    let best = service.product(&picks[0].id).expect("best match exists");
    let mut conversation = Conversation::new(best.id.clone());
    conversation
        .ask(&best, "Which bank offers this?")
        .expect("bank question answered");
    conversation
        .ask(&best, "Any processing fee?")
        .expect("fee question answered");

    assert_eq!(conversation.len(), 4);
    assert_eq!(
        conversation.messages()[1].content,
        "Homestead Prime is offered by Harbor Housing Finance."
    );
    assert_eq!(
        conversation.messages()[3].content,
        "Homestead Prime has a processing fee of 0.5% of the loan amount."
    );
}

#[test]
fn asking_about_unknown_product_fails_at_the_service() {
    let service = ProductService::new(Arc::new(InMemoryProductRepository::sample()), 5);
    assert!(service.ask(&ProductId::from("ghost"), "apr?").is_err());
    assert_eq!(classify("what is the cibil needed"), Some(Topic::CreditScore));
}
