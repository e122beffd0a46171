use super::templates;
use crate::workflows::loans::domain::Product;

/// Question category recognized by the keyword assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    MinimumIncome,
    CreditScore,
    Rate,
    Tenure,
    Prepayment,
    ProcessingFee,
    Disbursal,
    Documents,
    LoanType,
    Bank,
}

impl Topic {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinimumIncome => "Minimum income",
            Self::CreditScore => "Credit score",
            Self::Rate => "APR",
            Self::Tenure => "Tenure",
            Self::Prepayment => "Prepayment",
            Self::ProcessingFee => "Processing fee",
            Self::Disbursal => "Disbursal speed",
            Self::Documents => "Documentation",
            Self::LoanType => "Loan type",
            Self::Bank => "Bank",
        }
    }

    /// Topics in matching priority.
    pub fn ordered() -> [Self; 10] {
        TOPIC_RULES.map(|rule| rule.topic)
    }

    pub fn triggers(self) -> &'static [&'static str] {
        TOPIC_RULES
            .iter()
            .find(|rule| rule.topic == self)
            .map(|rule| rule.triggers)
            .unwrap_or(&[])
    }
}

/// One row of the matching table: the first row whose triggers occur in the
/// lowercased question renders the answer.
#[derive(Clone, Copy)]
pub(crate) struct TopicRule {
    pub(crate) topic: Topic,
    pub(crate) triggers: &'static [&'static str],
    pub(crate) render: fn(&Product) -> String,
}

impl TopicRule {
    pub(crate) fn matches(&self, normalized_question: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| normalized_question.contains(trigger))
    }
}

// Row order is the matching priority; "rate" and "fee" are broad enough to
// shadow anything listed after them.
pub(crate) const TOPIC_RULES: [TopicRule; 10] = [
    TopicRule {
        topic: Topic::MinimumIncome,
        triggers: &[
            "minimum income",
            "min income",
            "income required",
            "income for this loan",
        ],
        render: templates::minimum_income,
    },
    TopicRule {
        topic: Topic::CreditScore,
        triggers: &["credit score", "cibil", "score required"],
        render: templates::credit_score,
    },
    TopicRule {
        topic: Topic::Rate,
        triggers: &["apr", "interest rate", "rate"],
        render: templates::rate,
    },
    TopicRule {
        topic: Topic::Tenure,
        triggers: &["tenure", "duration", "how long", "months"],
        render: templates::tenure,
    },
    TopicRule {
        topic: Topic::Prepayment,
        triggers: &["prepayment", "pre payment", "foreclosure", "close early"],
        render: templates::prepayment,
    },
    TopicRule {
        topic: Topic::ProcessingFee,
        triggers: &["processing fee", "processing fees", "fee"],
        render: templates::processing_fee,
    },
    TopicRule {
        topic: Topic::Disbursal,
        triggers: &["disbursal", "disbursement", "how fast", "speed"],
        render: templates::disbursal,
    },
    TopicRule {
        topic: Topic::Documents,
        triggers: &["documents", "docs", "documentation"],
        render: templates::documents,
    },
    TopicRule {
        topic: Topic::LoanType,
        triggers: &["type", "kind of loan"],
        render: templates::loan_type,
    },
    TopicRule {
        topic: Topic::Bank,
        triggers: &["bank", "which bank"],
        render: templates::bank,
    },
];
