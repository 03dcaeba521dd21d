//! Filtering, sorting, and dashboard tallies over the complaint list.
//!
//! Linear scans over a small collection; the admin dashboard re-runs these
//! on every filter change.

use serde::{Deserialize, Serialize};

use crate::helpers::priority_weight;
use crate::models::Complaint;

/// Sort order for the admin list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest submissions first
    #[default]
    Date,
    /// Highest priority weight first
    Priority,
    /// Status name, lexicographic
    Status,
}

/// Admin dashboard filter. Empty/absent fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintFilter {
    /// Case-insensitive substring match over id, name, description, contact,
    /// and location
    pub search: Option<String>,
    /// Case-insensitive status equality
    pub status: Option<String>,
    /// Case-insensitive substring match on department
    pub department: Option<String>,
    #[serde(default)]
    pub sort: SortBy,
}

/// Apply a filter and sort, returning matching complaints in display order.
pub fn filter_complaints(complaints: &[Complaint], filter: &ComplaintFilter) -> Vec<Complaint> {
    let mut filtered: Vec<Complaint> = complaints
        .iter()
        .filter(|c| matches_search(c, filter.search.as_deref()))
        .filter(|c| matches_status(c, filter.status.as_deref()))
        .filter(|c| matches_department(c, filter.department.as_deref()))
        .cloned()
        .collect();

    match filter.sort {
        // ISO dates order lexicographically
        SortBy::Date => filtered.sort_by(|a, b| b.submitted_date.cmp(&a.submitted_date)),
        SortBy::Priority => filtered
            .sort_by(|a, b| priority_weight(&b.priority).cmp(&priority_weight(&a.priority))),
        SortBy::Status => filtered.sort_by(|a, b| a.status.cmp(&b.status)),
    }

    filtered
}

fn matches_search(complaint: &Complaint, search: Option<&str>) -> bool {
    let Some(query) = search.filter(|q| !q.is_empty()) else {
        return true;
    };
    let query = query.to_lowercase();
    [
        &complaint.id,
        &complaint.name,
        &complaint.description,
        &complaint.contact,
        &complaint.location,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

fn matches_status(complaint: &Complaint, status: Option<&str>) -> bool {
    match status.filter(|s| !s.is_empty()) {
        Some(wanted) => complaint.status.eq_ignore_ascii_case(wanted),
        None => true,
    }
}

fn matches_department(complaint: &Complaint, department: Option<&str>) -> bool {
    match department.filter(|d| !d.is_empty()) {
        Some(wanted) => complaint
            .department
            .to_lowercase()
            .contains(&wanted.to_lowercase()),
        None => true,
    }
}

/// Dashboard card tallies, computed case-insensitively over status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub new: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub urgent: usize,
}

/// Count complaints per dashboard status bucket.
pub fn status_counts(complaints: &[Complaint]) -> StatusCounts {
    let count = |status: &str| {
        complaints
            .iter()
            .filter(|c| c.status.eq_ignore_ascii_case(status))
            .count()
    };
    StatusCounts {
        new: count("new"),
        in_progress: count("in progress"),
        resolved: count("resolved"),
        urgent: count("urgent"),
    }
}
