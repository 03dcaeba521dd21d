//! Submission and resolution operations.
//!
//! These are the mutations the presentation layer performs: the public
//! submission form on one side, the admin resolve action on the other.
//! Validation lives here, at the form boundary; the store trusts its input.

use chrono::Utc;

use crate::errors::AppError;
use crate::helpers::{department_for_category, expected_resolution_date, generate_complaint_id};
use crate::models::{Complaint, ComplaintUpdate, NewComplaint, TimelineEntry};
use crate::store::ComplaintStore;

/// Build a full complaint record from a submission form.
///
/// All derived fields are fixed here, at creation time: reference number,
/// department routing, expected resolution date, and the initial timeline
/// entry.
pub fn build_complaint(form: &NewComplaint) -> Complaint {
    let now = Utc::now();
    let today = now.date_naive().to_string();

    Complaint {
        id: generate_complaint_id(),
        name: form.name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        category: form.category.clone(),
        description: form.description.clone(),
        location: form.location.clone(),
        status: "New".to_string(),
        submitted_date: today.clone(),
        last_updated: today.clone(),
        contact: form.email.clone(),
        department: department_for_category(&form.category).to_string(),
        priority: "Medium".to_string(),
        progress: 10,
        expected_resolution: expected_resolution_date(&today),
        timeline: vec![TimelineEntry {
            date: now.to_rfc3339(),
            status: "Submitted".to_string(),
            details: "Complaint registered successfully".to_string(),
        }],
    }
}

/// Validate and register a new complaint, returning its reference number.
pub fn submit(store: &mut ComplaintStore, form: &NewComplaint) -> Result<String, AppError> {
    form.validate()?;

    let complaint = build_complaint(form);
    let id = complaint.id.clone();
    store.add(complaint)?;
    Ok(id)
}

/// Resolve a complaint: status "Resolved", progress 100, one timeline entry
/// carrying the resolution details.
///
/// Empty details are rejected before anything is touched. An unknown id is a
/// silent no-op, matching the store's update semantics.
pub fn resolve(store: &mut ComplaintStore, id: &str, details: &str) -> Result<(), AppError> {
    if details.trim().is_empty() {
        return Err(AppError::Validation(
            "Resolution details are required".to_string(),
        ));
    }

    let Some(existing) = store.get_by_id(id) else {
        tracing::debug!("Resolve for unknown complaint {} ignored", id);
        return Ok(());
    };

    let now = Utc::now();
    let mut timeline = existing.timeline.clone();
    timeline.push(TimelineEntry {
        date: now.to_rfc3339(),
        status: "Resolved".to_string(),
        details: details.to_string(),
    });

    store.update(
        id,
        ComplaintUpdate {
            status: Some("Resolved".to_string()),
            last_updated: Some(now.date_naive().to_string()),
            progress: Some(100),
            timeline: Some(timeline),
            ..Default::default()
        },
    )
}
