//! Complaint model matching the frontend Complaint interface.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One lifecycle event in a complaint's history. Append-only; insertion
/// order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub status: String,
    pub details: String,
}

/// A citizen-submitted complaint and its resolution lifecycle.
///
/// Status, priority, and category are deliberately free-form strings:
/// arbitrary values round-trip through persistence and fall back to default
/// display tokens, matching the behavior the frontend relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Reference number shown to the submitter, `CMP` + 6 characters
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub status: String,
    /// ISO date, immutable after creation
    pub submitted_date: String,
    /// ISO date, set on every mutation
    pub last_updated: String,
    /// Duplicate of email kept for display convenience
    pub contact: String,
    /// Derived once from category, immutable thereafter
    pub department: String,
    pub priority: String,
    /// 0-100, starts at 10, forced to 100 on resolution
    pub progress: u8,
    /// ISO date, submitted date + 7 days, fixed at creation
    pub expected_resolution: String,
    /// Non-empty after creation; first entry is always the submission event
    pub timeline: Vec<TimelineEntry>,
}

impl Complaint {
    /// Shallow-merge a partial update onto this record. Only supplied fields
    /// are replaced; the identifier and the creation-time fields have no
    /// counterpart in [`ComplaintUpdate`] and can never change here.
    pub fn apply(&mut self, update: ComplaintUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(last_updated) = update.last_updated {
            self.last_updated = last_updated;
        }
        if let Some(contact) = update.contact {
            self.contact = contact;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(progress) = update.progress {
            self.progress = progress;
        }
        if let Some(timeline) = update.timeline {
            self.timeline = timeline;
        }
    }
}

/// Partial update for an existing complaint.
///
/// The caller supplies only the changed fields; everything else keeps its
/// current value. Progress monotonicity is a workflow convention, not
/// enforced here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub progress: Option<u8>,
    /// Full replacement timeline; callers append to the existing entries
    #[serde(default)]
    pub timeline: Option<Vec<TimelineEntry>>,
}

/// Submission form payload for a new complaint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub description: String,
    pub location: String,
}

impl NewComplaint {
    /// Required-field check enforced at the submission boundary. The store
    /// itself performs no validation.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("category", &self.category),
            ("description", &self.description),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Complaint {
        Complaint {
            id: "CMPAB12CD".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            category: "Utilities".to_string(),
            description: "Street light out".to_string(),
            location: "5th and Main".to_string(),
            status: "New".to_string(),
            submitted_date: "2024-01-01".to_string(),
            last_updated: "2024-01-01".to_string(),
            contact: "jane@example.com".to_string(),
            department: "Utility Services".to_string(),
            priority: "Medium".to_string(),
            progress: 10,
            expected_resolution: "2024-01-08".to_string(),
            timeline: vec![TimelineEntry {
                date: "2024-01-01T09:00:00Z".to_string(),
                status: "Submitted".to_string(),
                details: "Complaint registered successfully".to_string(),
            }],
        }
    }

    #[test]
    fn test_apply_merges_only_supplied_fields() {
        let mut complaint = sample();
        complaint.apply(ComplaintUpdate {
            status: Some("In Progress".to_string()),
            progress: Some(40),
            ..Default::default()
        });

        assert_eq!(complaint.status, "In Progress");
        assert_eq!(complaint.progress, 40);
        // Untouched fields keep their values
        assert_eq!(complaint.name, "Jane Doe");
        assert_eq!(complaint.department, "Utility Services");
        assert_eq!(complaint.timeline.len(), 1);
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("submittedDate").is_some());
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("expectedResolution").is_some());
        assert!(json.get("submitted_date").is_none());
    }

    #[test]
    fn test_validate_rejects_blank_required_field() {
        let form = NewComplaint {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "  ".to_string(),
            category: "Other".to_string(),
            description: "Noise".to_string(),
            location: "Downtown".to_string(),
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.message().contains("phone"));
    }
}
