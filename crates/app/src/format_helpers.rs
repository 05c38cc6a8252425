/// Shared formatting utilities for the UI layer.
///
/// Date helpers accept ISO-8601 strings (e.g. "2026-01-20T21:35:00Z").
use shared_types::{ProjectPriority, ProjectStatus};
use shared_ui::BadgeVariant;

/// Placeholder for absent values.
pub const MISSING: &str = "\u{2014}";

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026".
///
/// Missing or blank input gives the em-dash placeholder; anything that does
/// not look like a date is shown as given.
pub fn format_date(date: Option<&str>) -> String {
    let Some(date_str) = date.map(str::trim).filter(|s| !s.is_empty()) else {
        return MISSING.to_string();
    };
    let (Some(year), Some(month), Some(day)) =
        (date_str.get(..4), date_str.get(5..7), date_str.get(8..10))
    else {
        return date_str.to_string();
    };

    match (parse_month(month), day.parse::<u32>()) {
        (Some(m), Ok(day_num)) => format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year),
        _ => date_str.to_string(),
    }
}

/// Convert a snake_case value to Title Case ("in_progress" → "In Progress").
pub fn format_status(s: &str) -> String {
    s.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a budget as whole US dollars with thousands separators ("$12,500").
pub fn format_budget(amount: Option<f64>) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return MISSING.to_string();
    };
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0.0 && rounded > 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Progress as a whole percentage clamped to 0..=100.
pub fn format_progress(progress: Option<f64>) -> u32 {
    progress
        .filter(|p| p.is_finite())
        .map(|p| p.clamp(0.0, 100.0).round() as u32)
        .unwrap_or(0)
}

pub fn status_badge(status: &str) -> BadgeVariant {
    match ProjectStatus::parse(status) {
        Some(ProjectStatus::Planning) => BadgeVariant::Info,
        Some(ProjectStatus::InProgress) => BadgeVariant::Warning,
        Some(ProjectStatus::OnHold) => BadgeVariant::Neutral,
        Some(ProjectStatus::Completed) => BadgeVariant::Success,
        Some(ProjectStatus::Cancelled) => BadgeVariant::Danger,
        None => BadgeVariant::Outline,
    }
}

pub fn priority_badge(priority: &str) -> BadgeVariant {
    match ProjectPriority::parse(priority) {
        Some(ProjectPriority::High) => BadgeVariant::Danger,
        Some(ProjectPriority::Medium) => BadgeVariant::Warning,
        Some(ProjectPriority::Low) => BadgeVariant::Success,
        None => BadgeVariant::Outline,
    }
}
