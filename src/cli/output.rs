//! Output formatting for CLI

use crate::models::Document;
use crate::notifications::{Notification, Severity};

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "info",
        Severity::Success => "ok",
        Severity::Warning => "warning",
        Severity::Error => "error",
    }
}

/// Format notifications, newest first
pub fn format_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|n| format!("[{}] {}\n", severity_label(n.severity), n.message))
        .collect()
}

/// Format the models and routes of a document
pub fn format_document(document: &Document) -> String {
    let mut output = String::new();

    output.push_str(&format!("Models ({}):\n", document.models.len()));
    for model in &document.models {
        let required = model.required_property_names();
        output.push_str(&format!(
            "  {} ({} properties",
            model.name,
            model.properties.len()
        ));
        if !required.is_empty() {
            output.push_str(&format!(", required: {}", required.join(", ")));
        }
        output.push_str(")\n");
    }

    output.push_str(&format!("Routes ({}):\n", document.routes.len()));
    for route in &document.routes {
        output.push_str(&format!("  {}: {}", route.name, route.label()));
        let codes: Vec<&str> = route
            .responses
            .iter()
            .map(|r| r.status_code.as_str())
            .collect();
        if !codes.is_empty() {
            output.push_str(&format!(" -> {}", codes.join(", ")));
        }
        output.push('\n');
    }

    output
}
