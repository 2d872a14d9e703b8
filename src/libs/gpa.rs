//! GPA calculator over a list of courses.
//!
//! With weighting on (the default) each course's grade points count in
//! proportion to its credits; with weighting off every course counts once.
//! An empty course list, or one whose credits sum to zero, has a GPA of
//! `"0.00"`.

use super::collection::{Collection, Draft, Placement, Record};
use super::storage::{Storage, StorageCell, StorageKey};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credits used when the credit field is blank or unparsable.
pub const DEFAULT_CREDITS: u32 = 3;
pub const MAX_CREDITS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Grade {
    #[serde(rename = "A+")]
    #[value(name = "A+")]
    APlus,
    #[default]
    #[serde(rename = "A")]
    #[value(name = "A")]
    A,
    #[serde(rename = "A-")]
    #[value(name = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    #[value(name = "B+")]
    BPlus,
    #[serde(rename = "B")]
    #[value(name = "B")]
    B,
    #[serde(rename = "B-")]
    #[value(name = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    #[value(name = "C+")]
    CPlus,
    #[serde(rename = "C")]
    #[value(name = "C")]
    C,
    #[serde(rename = "C-")]
    #[value(name = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    #[value(name = "D+")]
    DPlus,
    #[serde(rename = "D")]
    #[value(name = "D")]
    D,
    #[serde(rename = "F")]
    #[value(name = "F")]
    F,
}

impl Grade {
    pub const ALL: [Grade; 12] = [
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::F,
    ];

    pub fn points(self) -> f64 {
        match self {
            Grade::APlus | Grade::A => 4.0,
            Grade::AMinus => 3.7,
            Grade::BPlus => 3.3,
            Grade::B => 3.0,
            Grade::BMinus => 2.7,
            Grade::CPlus => 2.3,
            Grade::C => 2.0,
            Grade::CMinus => 1.7,
            Grade::DPlus => 1.3,
            Grade::D => 1.0,
            Grade::F => 0.0,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Grade::ALL
            .into_iter()
            .find(|grade| grade.letter() == wanted)
            .ok_or_else(|| format!("unknown grade '{}'", s.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub name: String,
    pub credits: u32,
    pub grade: Grade,
}

impl Record for Course {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Form input; `credits` is the raw text typed by the user.
#[derive(Debug, Clone, Default)]
pub struct CourseDraft {
    pub name: String,
    pub credits: String,
    pub grade: Grade,
}

impl Draft for CourseDraft {
    type Record = Course;

    fn into_record(self, id: u64) -> Option<Course> {
        if self.name.trim().is_empty() {
            return None;
        }
        let credits = match self.credits.trim().parse::<u32>() {
            Ok(0) | Err(_) => DEFAULT_CREDITS,
            Ok(credits) => credits,
        };
        if credits > MAX_CREDITS {
            return None;
        }

        Some(Course {
            id,
            name: self.name,
            credits,
            grade: self.grade,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Grade points weighted by credits.
    Credits,
    /// Plain mean of grade points.
    Unweighted,
}

impl Weighting {
    pub fn from_flag(weighted: bool) -> Self {
        if weighted {
            Weighting::Credits
        } else {
            Weighting::Unweighted
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weighting::Credits => f.write_str("weighted by credits"),
            Weighting::Unweighted => f.write_str("unweighted"),
        }
    }
}

pub fn total_credits(courses: &[Course]) -> u32 {
    courses.iter().map(|course| course.credits).sum()
}

/// Numeric GPA; zero when there is nothing to average.
pub fn gpa_value(courses: &[Course], weighting: Weighting) -> f64 {
    if courses.is_empty() {
        return 0.0;
    }
    match weighting {
        Weighting::Credits => {
            let credits = total_credits(courses);
            if credits == 0 {
                return 0.0;
            }
            let points: f64 = courses.iter().map(|c| c.grade.points() * f64::from(c.credits)).sum();
            points / f64::from(credits)
        }
        Weighting::Unweighted => courses.iter().map(|c| c.grade.points()).sum::<f64>() / courses.len() as f64,
    }
}

/// GPA with two decimals, e.g. `"3.67"`.
pub fn gpa(courses: &[Course], weighting: Weighting) -> String {
    format!("{:.2}", gpa_value(courses, weighting))
}

/// The persisted course list and weighting flag.
pub struct Transcript {
    courses: Collection<Course>,
    weighted: StorageCell<bool>,
}

impl Transcript {
    pub fn open(storage: &Storage) -> Self {
        Self {
            courses: Collection::open(storage, StorageKey::GPA_COURSES, Placement::Back),
            weighted: storage.cell(StorageKey::GPA_WEIGHTED, true),
        }
    }

    pub fn list(&self) -> &[Course] {
        self.courses.items()
    }

    pub fn add(&mut self, draft: CourseDraft) -> Option<Course> {
        self.courses.add(draft)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.courses.delete(id)
    }

    pub fn weighting(&self) -> Weighting {
        Weighting::from_flag(*self.weighted.get())
    }

    pub fn set_weighted(&mut self, weighted: bool) {
        self.weighted.set(weighted);
    }

    pub fn toggle_weighting(&mut self) -> Weighting {
        self.weighted.update(|weighted| !weighted);
        self.weighting()
    }

    pub fn total_credits(&self) -> u32 {
        total_credits(self.list())
    }

    pub fn gpa(&self) -> String {
        gpa(self.list(), self.weighting())
    }
}
