use crate::models::Category;

/// One entry of the keyword table: a remark containing any keyword belongs to `category`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str]
}

impl CategoryRule {
    fn matches(&self, remark: &str) -> bool {
        self.keywords.iter().any(|keyword| remark.contains(keyword))
    }
}

/// Keyword rules in priority order. The first rule that matches wins, so a remark such as
/// "grocery bill" is Food & Dining and never Bills & Utilities. Remarks matching no rule
/// fall through to [`Category::Others`].
///
/// NOTE: the keyword sets overlap textually ("rent" also hits "current", "parent"). The order is
/// kept as-is; it is a heuristic rather than a documented policy.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule { category: Category::FoodAndDining, keywords: &["food", "restaurant", "grocery"] },
    CategoryRule { category: Category::Transportation, keywords: &["transport", "fuel", "uber", "taxi"] },
    CategoryRule { category: Category::Shopping, keywords: &["shopping", "clothes", "amazon"] },
    CategoryRule { category: Category::Entertainment, keywords: &["entertainment", "movie", "netflix"] },
    CategoryRule { category: Category::BillsAndUtilities, keywords: &["bill", "electricity", "water", "rent"] },
    CategoryRule { category: Category::Healthcare, keywords: &["health", "medical", "doctor"] },
];

/// Infers the spending category of a remark, case-insensitively.
pub fn classify(remark: &str) -> Category {
    let remark = remark.to_lowercase();

    CATEGORY_RULES.iter()
        .find(|rule| rule.matches(&remark))
        .map(|rule| rule.category)
        .unwrap_or(Category::Others)
}
