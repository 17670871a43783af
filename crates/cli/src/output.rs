use rootwalk_application::use_cases::RecursiveLookupReport;
use rootwalk_domain::{WalkEvent, WalkOutcome, WalkReport};
use std::time::Duration;

pub fn render_walk_report(report: &WalkReport) -> Vec<String> {
    let mut lines = vec![format!("[Iterative DNS Lookup] Resolving {}", report.domain)];

    for event in &report.events {
        match event {
            WalkEvent::QuerySucceeded { stage, server } => {
                lines.push(format!("[DEBUG] Querying {} server ({}) - SUCCESS", stage, server));
            }
            WalkEvent::QueryFailed { stage, server, .. } => {
                lines.push(format!("[ERROR] Query failed for {} {}", stage, server));
            }
            WalkEvent::NameserverExtracted { hostname } => {
                lines.push(format!("Extracted NS hostname: {}", hostname));
            }
            WalkEvent::NameserverResolved { hostname, ip } => {
                lines.push(format!("Resolved {} -> {}", hostname, ip));
            }
            WalkEvent::NameserverUnresolved { hostname, error } => {
                lines.push(format!("[WARNING] Could not resolve {}: {}", hostname, error));
            }
            WalkEvent::StageAdvanced { .. } => {}
        }
    }

    match &report.outcome {
        WalkOutcome::AnswerFound { record, .. } => {
            lines.push(format!("[SUCCESS] {} -> {}", report.domain, record.data));
        }
        WalkOutcome::QueryFailed { .. } | WalkOutcome::ReferralExhausted { .. } => {
            lines.push("[ERROR] Resolution failed.".to_string());
        }
    }

    lines
}

pub fn render_recursive_report(report: &RecursiveLookupReport) -> Vec<String> {
    let mut lines = vec![format!("[Recursive DNS Lookup] Resolving {}", report.domain)];

    lines.extend(
        report
            .records
            .iter()
            .map(|record| format!("[SUCCESS] {} -> {}", report.domain, record.data)),
    );

    if let Some(error) = &report.error {
        lines.push(format!("[ERROR] Recursive lookup failed: {}", error));
    }

    lines
}

pub fn render_elapsed(elapsed: Duration) -> String {
    format!("Time taken: {:.3} seconds", elapsed.as_secs_f64())
}
