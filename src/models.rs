use serde::{Deserialize, Serialize};

/// One logged occurrence on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: String,
    pub timestamp: i64,
}

impl Record {
    pub fn new(date: impl Into<String>, timestamp: i64) -> Self {
        Self {
            date: date.into(),
            timestamp,
        }
    }
}

/// Insertion-ordered record list, persisted as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the first record for `date`. Returns false when there was none.
    pub fn remove_one(&mut self, date: &str) -> bool {
        match self.records.iter().position(|record| record.date == date) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, date: &str) -> u64 {
        self.records.iter().filter(|record| record.date == date).count() as u64
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    pub date: Option<String>,
}

/// Form posted by the add/remove buttons; `year`/`month` keep the visible page.
#[derive(Debug, Deserialize)]
pub struct RecordForm {
    pub date: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<String>,
    pub month: Option<String>,
    pub selected: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayCountResponse {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveResponse {
    pub date: String,
    pub count: u64,
    pub removed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Acceptable,
    Caution,
    NotRecommended,
}

impl Recommendation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Acceptable => "acceptable",
            Self::Caution => "use caution",
            Self::NotRecommended => "not recommended",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Acceptable => "#27ae60",
            Self::Caution => "#f39c12",
            Self::NotRecommended => "#e74c3c",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: u64,
    pub year: u64,
    pub week: u64,
    pub week_start: String,
    pub week_end: String,
    pub recommendation: Recommendation,
    pub recommendation_text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    pub date: String,
    pub count: u64,
    pub has_record: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
    pub prev: (i32, u32),
    pub next: (i32, u32),
}
