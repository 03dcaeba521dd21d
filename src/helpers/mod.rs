//! Pure helper functions shared by producers and consumers of the store.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::errors::AppError;

/// Rendered when a date string cannot be parsed. Not a hard error.
const INVALID_DATE: &str = "Invalid Date";

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a complaint reference number: `CMP` + 6 uppercase base-36
/// characters. Not guaranteed globally unique; collisions are possible by
/// construction and unchecked by the store.
pub fn generate_complaint_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("CMP{}", suffix)
}

/// Render an ISO date in short display form, e.g. "Jan 5, 2024".
pub fn format_date(date: &str) -> String {
    match parse_iso_date(date) {
        Some(parsed) => parsed.format("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Fixed category-to-department routing table. Unrecognized categories,
/// including "Other", fall through to General Administration.
pub fn department_for_category(category: &str) -> &'static str {
    match category {
        "Infrastructure" => "Public Works",
        "Sanitation" => "Sanitation Department",
        "Public Transport" => "Transportation Department",
        "Utilities" => "Utility Services",
        _ => "General Administration",
    }
}

/// Projected resolution date: submitted date + 7 calendar days. No
/// business-day logic, no timezone normalization.
pub fn expected_resolution_date(date: &str) -> String {
    match parse_iso_date(date) {
        Some(parsed) => (parsed + Duration::days(7)).format("%Y-%m-%d").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Map a status name to its display-color token, case-insensitively.
/// Unrecognized statuses get the "new" token.
pub fn status_color(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "in progress" => "status-progress",
        "resolved" => "status-resolved",
        "urgent" => "status-urgent",
        "under review" => "status-review",
        "pending" => "status-pending",
        _ => "status-new",
    }
}

/// Numeric weight for priority sorting. Unknown priorities sort last.
pub fn priority_weight(priority: &str) -> u8 {
    match priority {
        "High" => 3,
        "Medium" => 2,
        "Low" => 1,
        _ => 0,
    }
}

/// Write text to the system clipboard. Fails when the platform denies
/// clipboard access.
pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|err| AppError::Clipboard(format!("Clipboard unavailable: {}", err)))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|err| AppError::Clipboard(format!("Clipboard write failed: {}", err)))
}

fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed);
    }
    // Full timestamps also occur, e.g. in timeline entries
    chrono::DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_complaint_id_format() {
        let id = generate_complaint_id();
        assert_eq!(id.len(), 9);
        assert!(id.starts_with("CMP"));
        assert!(id[3..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_format_date_short_form() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2023-12-31"), "Dec 31, 2023");
    }

    #[test]
    fn test_format_date_invalid_input() {
        assert_eq!(format_date("not-a-date"), "Invalid Date");
        assert_eq!(format_date(""), "Invalid Date");
    }

    #[test]
    fn test_department_routing() {
        assert_eq!(department_for_category("Infrastructure"), "Public Works");
        assert_eq!(
            department_for_category("Sanitation"),
            "Sanitation Department"
        );
        assert_eq!(
            department_for_category("Public Transport"),
            "Transportation Department"
        );
        assert_eq!(department_for_category("Utilities"), "Utility Services");
        assert_eq!(department_for_category("Other"), "General Administration");
        assert_eq!(department_for_category("Unknown"), "General Administration");
    }

    #[test]
    fn test_expected_resolution_adds_seven_days() {
        assert_eq!(expected_resolution_date("2024-01-01"), "2024-01-08");
        // Month rollover
        assert_eq!(expected_resolution_date("2024-02-26"), "2024-03-04");
    }

    #[test]
    fn test_status_color_case_insensitive() {
        assert_eq!(status_color("URGENT"), status_color("urgent"));
        assert_eq!(status_color("In Progress"), "status-progress");
        assert_eq!(status_color("Under Review"), "status-review");
    }

    #[test]
    fn test_status_color_unknown_falls_back_to_new() {
        assert_eq!(status_color("escalated"), status_color("New"));
        assert_eq!(status_color(""), "status-new");
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let tokens = [
            status_color("New"),
            status_color("In Progress"),
            status_color("Resolved"),
            status_color("Urgent"),
            status_color("Under Review"),
            status_color("Pending"),
        ];
        for (i, a) in tokens.iter().enumerate() {
            for b in &tokens[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_priority_weights() {
        assert_eq!(priority_weight("High"), 3);
        assert_eq!(priority_weight("Medium"), 2);
        assert_eq!(priority_weight("Low"), 1);
        assert_eq!(priority_weight("Critical"), 0);
    }
}
