//! Whole-document checks
//!
//! The store validates one entry at a time. Documents arriving in bulk
//! (imports) are checked here instead.

use super::names::{EntityKind, ValidationError, validate_name, validate_path};
use crate::models::Document;

/// Validate every entry against the entries before it
///
/// Returns one error per problem, in document order.
pub fn validate_document(document: &Document) -> Vec<ValidationError> {
    let mut problems = Vec::new();

    for (index, model) in document.models.iter().enumerate() {
        let earlier = document.models[..index].iter().map(|m| m.name.as_str());
        if let Err(e) = validate_name(EntityKind::Model, &model.name, earlier) {
            problems.push(e);
        }
    }

    for (index, route) in document.routes.iter().enumerate() {
        let earlier = document.routes[..index].iter().map(|r| r.name.as_str());
        if let Err(e) = validate_name(EntityKind::Route, &route.name, earlier) {
            problems.push(e);
        }
        if let Err(e) = validate_path(&route.path) {
            problems.push(e);
        }
    }

    problems
}

/// First of `name`, `name (2)`, `name (3)`, ... not in `taken`
pub fn unique_name(name: &str, taken: &[&str]) -> String {
    if !taken.contains(&name) {
        return name.to_string();
    }
    (2..)
        .map(|n| format!("{} ({})", name, n))
        .find(|candidate| !taken.contains(&candidate.as_str()))
        .unwrap_or_else(|| name.to_string())
}

/// A route renamed to keep names unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedRoute {
    pub from: String,
    pub to: String,
}

/// Rename later routes whose name an earlier route already uses
///
/// The first route keeps its name; later ones get a ` (n)` suffix.
pub fn dedupe_route_names(document: &mut Document) -> Vec<RenamedRoute> {
    let mut renamed = Vec::new();

    for index in 1..document.routes.len() {
        let (earlier, rest) = document.routes.split_at_mut(index);
        let route = &mut rest[0];
        let taken: Vec<&str> = earlier.iter().map(|r| r.name.as_str()).collect();
        let name = unique_name(&route.name, &taken);
        if name != route.name {
            renamed.push(RenamedRoute {
                from: std::mem::replace(&mut route.name, name.clone()),
                to: name,
            });
        }
    }

    renamed
}
