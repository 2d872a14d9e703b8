//! Job and internship application tracker.

use super::collection::{Collection, Draft, Placement, Record};
use super::storage::{Storage, StorageKey};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interviewing,
    Offered,
    Current,
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interviewing => "interviewing",
            ApplicationStatus::Offered => "offered",
            ApplicationStatus::Current => "current",
            ApplicationStatus::Rejected => "rejected",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: u64,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: String,
}

impl Record for JobApplication {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationDraft {
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    pub notes: String,
}

impl Draft for ApplicationDraft {
    type Record = JobApplication;

    fn into_record(self, id: u64) -> Option<JobApplication> {
        if self.company.trim().is_empty() || self.position.trim().is_empty() {
            return None;
        }
        Some(JobApplication {
            id,
            company: self.company,
            position: self.position,
            status: self.status,
            notes: self.notes,
        })
    }
}

/// Case-insensitive match on company or position; an empty query matches everything.
pub fn search<'a>(applications: &'a [JobApplication], query: &str) -> Vec<&'a JobApplication> {
    let needle = query.trim().to_lowercase();
    applications
        .iter()
        .filter(|app| needle.is_empty() || app.company.to_lowercase().contains(&needle) || app.position.to_lowercase().contains(&needle))
        .collect()
}

pub fn count_by_status(applications: &[JobApplication]) -> BTreeMap<ApplicationStatus, usize> {
    let mut counts = BTreeMap::new();
    for app in applications {
        *counts.entry(app.status).or_insert(0) += 1;
    }
    counts
}

/// The persisted application list. New applications are appended.
pub struct JobBoard {
    applications: Collection<JobApplication>,
}

impl JobBoard {
    pub fn open(storage: &Storage) -> Self {
        Self {
            applications: Collection::open(storage, StorageKey::JOB_APPLICATIONS, Placement::Back),
        }
    }

    pub fn list(&self) -> &[JobApplication] {
        self.applications.items()
    }

    pub fn add(&mut self, draft: ApplicationDraft) -> Option<JobApplication> {
        self.applications.add(draft)
    }

    pub fn set_status(&mut self, id: u64, status: ApplicationStatus) -> bool {
        self.applications.update(id, |app| JobApplication { status, ..app.clone() })
    }

    pub fn set_notes(&mut self, id: u64, notes: impl Into<String>) -> bool {
        let notes = notes.into();
        self.applications.update(id, |app| JobApplication { notes, ..app.clone() })
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.applications.delete(id)
    }

    pub fn search(&self, query: &str) -> Vec<&JobApplication> {
        search(self.list(), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: u64, company: &str, position: &str, status: ApplicationStatus) -> JobApplication {
        JobApplication {
            id,
            company: company.into(),
            position: position.into(),
            status,
            notes: String::new(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let apps = vec![
            app(1, "TechCorp Inc.", "Software Engineering Intern", ApplicationStatus::Applied),
            app(2, "Brand Solutions", "Marketing Intern", ApplicationStatus::Interviewing),
            app(3, "StartupXYZ", "Junior Developer", ApplicationStatus::Rejected),
        ];

        let ids = |query: &str| search(&apps, query).iter().map(|a| a.id).collect::<Vec<_>>();
        assert_eq!(ids("intern"), vec![1, 2]);
        assert_eq!(ids("STARTUP"), vec![3]);
        assert_eq!(ids(""), vec![1, 2, 3]);
        assert!(ids("bakery").is_empty());
    }

    #[test]
    fn test_count_by_status() {
        let apps = vec![
            app(1, "A", "x", ApplicationStatus::Applied),
            app(2, "B", "y", ApplicationStatus::Applied),
            app(3, "C", "z", ApplicationStatus::Offered),
        ];
        let counts = count_by_status(&apps);
        assert_eq!(counts[&ApplicationStatus::Applied], 2);
        assert_eq!(counts[&ApplicationStatus::Offered], 1);
        assert!(!counts.contains_key(&ApplicationStatus::Rejected));
    }

    #[test]
    fn test_draft_requires_company_and_position() {
        let draft = ApplicationDraft {
            company: "Acme".into(),
            ..ApplicationDraft::default()
        };
        assert!(draft.into_record(1).is_none());
    }
}
