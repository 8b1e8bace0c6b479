use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Variant order matches the registrar's term ordering; `term_index` feeds
/// the term-code formula in `crawl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Semester {
    Spring,
    Summer,
    Fall,
}

impl Semester {
    pub const ALL: [Semester; 3] = [Semester::Spring, Semester::Summer, Semester::Fall];

    pub fn term_index(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Semester::Spring => "Spring",
            Semester::Summer => "Summer",
            Semester::Fall => "Fall",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One contiguous slot of a course's weekly schedule. Every field is
/// optional; some offerings carry only a label ("Mandatory:") or only a
/// time range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub block: Option<String>,
    pub times: Option<String>,
    pub location: Option<String>,
    pub info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    /// Hex token from the faculty-guide profile link; stable but opaque.
    pub id: String,
}

/// One scraped catalog entry. Built fully populated by the record
/// assembler; only `description` (optional detail fetch) and the
/// `semester`/`year` context stamps are filled in afterwards by the crawl
/// pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// e.g. "Autonomous Robotics Lab"
    pub name: String,
    /// Registration number, unique within one results page.
    pub class_number: u32,

    /// e.g. "COSI 119A_1" splits into subject "COSI", number 119,
    /// group "A", section "1".
    pub subject: String,
    pub number: u32,
    /// May be empty.
    pub group: String,
    /// Usually numeric but not always ("1DL").
    pub section: String,

    pub schedule: Vec<Meeting>,

    pub enrolled: u32,
    pub limit: u32,
    /// Waitlisted sections can push `enrolled` past `limit`.
    pub waiting: u32,
    pub enrollment_status: String,

    pub syllabus: Option<String>,
    pub instructors: Vec<Instructor>,
    pub uni_reqs: Vec<String>,
    pub description: Option<String>,
    pub notes: Option<String>,

    pub semester: Option<Semester>,
    pub year: Option<u32>,
}

impl Course {
    /// User-facing course number, e.g. "COSI 119A_1".
    pub fn friendly_number(&self) -> String {
        let mut s = format!("{} {}{}", self.subject, self.number, self.group);
        if !self.section.is_empty() {
            s.push('_');
            s.push_str(&self.section);
        }
        s
    }

    pub fn instructor_str(&self) -> String {
        self.instructors
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Faculty-guide profile URL for each instructor.
    pub fn instructor_links(&self) -> impl Iterator<Item = String> + '_ {
        self.instructors.iter().map(|i| {
            format!(
                "https://www.brandeis.edu/facguide/person.html?emplid={}",
                i.id
            )
        })
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.friendly_number(),
            self.name,
            self.instructor_str()
        )?;
        if !self.uni_reqs.is_empty() {
            write!(f, " [{}]", self.uni_reqs.join(", "))?;
        }
        Ok(())
    }
}

// ── Tests ──
