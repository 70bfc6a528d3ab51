//! Bundled sample levels backing [`StaticSource::with_sample_levels`] and the
//! test suites.
//!
//! [`StaticSource::with_sample_levels`]: crate::source::StaticSource::with_sample_levels

use std::collections::HashMap;

use crate::model::question::Question;

fn question(id: u32, prompt: &str, options: &[&str], correct: usize, explanation: &str) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_option: correct,
        explanation: explanation.to_string(),
    }
}

pub fn sample_levels() -> HashMap<String, Vec<Question>> {
    let mut levels = HashMap::new();
    levels.insert("budgeting-basics".to_string(), budgeting_basics());
    levels.insert("investing-101".to_string(), investing_101());
    levels
}

/// Four questions on everyday budgeting.
pub fn budgeting_basics() -> Vec<Question> {
    vec![
        question(
            1,
            "Under the 50/30/20 rule, the 20% share of your income goes to…",
            &[
                "Wants",
                "Savings and debt repayment",
                "Rent",
                "Subscriptions",
            ],
            1,
            "The rule splits take-home pay into 50% needs, 30% wants, and 20% savings or debt repayment.",
        ),
        question(
            2,
            "Which of these is a fixed expense?",
            &["Groceries", "Eating out", "Monthly rent", "Concert tickets"],
            2,
            "Fixed expenses stay the same each month; rent is the classic example.",
        ),
        question(
            3,
            "An emergency fund should ideally cover how much of your spending?",
            &["One week", "Three to six months", "Ten years"],
            1,
            "Three to six months of essential expenses is the common guideline.",
        ),
        question(
            4,
            "What is the first step in building a budget?",
            &[
                "Tracking your income and spending",
                "Opening a brokerage account",
                "Cancelling every subscription",
            ],
            0,
            "You can only allocate money sensibly once you know where it currently goes.",
        ),
    ]
}

/// Two questions introducing investing.
pub fn investing_101() -> Vec<Question> {
    vec![
        question(
            1,
            "What does diversification primarily reduce?",
            &[
                "Risk from any single investment",
                "Broker fees",
                "Taxes on dividends",
            ],
            0,
            "Spreading money across assets limits the damage any one of them can do.",
        ),
        question(
            2,
            "Which account is designed for retirement savings?",
            &[
                "Checking account",
                "Travel rewards card",
                "Pension or retirement account",
            ],
            2,
            "Retirement accounts are built for long-horizon saving, often with tax advantages.",
        ),
    ]
}
