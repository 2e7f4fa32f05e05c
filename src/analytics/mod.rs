mod aggregator;
mod rules;

pub use aggregator::{categorize, expense_series, summarize, RECENT_LIMIT};
pub use rules::{classify, CategoryRule, CATEGORY_RULES};
