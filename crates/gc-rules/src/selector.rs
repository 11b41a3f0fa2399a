//! Department selection.

use crate::types::{RouteRule, RoutingTable};

fn rule_matches(rule: &RouteRule, categories: &[String]) -> bool {
    categories.iter().any(|cat| {
        let cat = cat.to_lowercase();
        rule.category_keywords.iter().any(|kw| cat.contains(&kw.to_lowercase()))
    })
}

/// First matching rule wins; otherwise the default department.
pub fn route_to<'a>(categories: &[String], table: &'a RoutingTable) -> &'a str {
    table
        .rules
        .iter()
        .find(|rule| rule_matches(rule, categories))
        .map(|rule| rule.department.as_str())
        .unwrap_or(table.default_department.as_str())
}
