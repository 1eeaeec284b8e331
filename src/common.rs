use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::error;

pub enum AppError {
    Anyhow(anyhow::Error),
    Code(StatusCode),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Anyhow(error) => {
                error!("request failed: {:#}", error);
                AppError::Code(StatusCode::INTERNAL_SERVER_ERROR).into_response()
            }
            AppError::Code(c) => (c, c.to_string()).into_response(),
        }
    }
}

impl From<StatusCode> for AppError {
    fn from(err: StatusCode) -> Self {
        Self::Code(err)
    }
}

// lets handlers use `?` on rendering errors
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}

/// Empty strings count as missing, same as a falsy template value.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCardData {
    pub title: String,
    pub course_key: String,
    pub course_image_url: String,
    #[serde(default)]
    pub marketing_url: Option<String>,
    #[serde(default)]
    pub course_url: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl CourseCardData {
    /// Marketing page first, then the in-platform course page.
    pub fn link(&self) -> Option<&str> {
        present(&self.marketing_url).or(present(&self.course_url))
    }

    pub fn run_period(&self) -> Option<(&str, &str)> {
        match (present(&self.start_date), present(&self.end_date)) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

const RUN_DATE_FORMAT: &str = "%b %-d, %Y";

/// A course run as the catalog describes it, before its dates are formatted for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRun {
    pub title: String,
    pub key: String,
    pub image_url: String,
    #[serde(default)]
    pub marketing_url: Option<String>,
    #[serde(default)]
    pub course_url: Option<String>,
    #[serde(default)]
    pub start: Option<Date>,
    #[serde(default)]
    pub end: Option<Date>,
}

impl From<&CourseRun> for CourseCardData {
    fn from(run: &CourseRun) -> Self {
        let (start_date, end_date) = match (run.start, run.end) {
            (Some(start), Some(end)) => (
                Some(start.strftime(RUN_DATE_FORMAT).to_string()),
                Some(end.strftime(RUN_DATE_FORMAT).to_string()),
            ),
            _ => (None, None),
        };

        CourseCardData {
            title: run.title.clone(),
            course_key: run.key.clone(),
            course_image_url: run.image_url.clone(),
            marketing_url: run.marketing_url.clone(),
            course_url: run.course_url.clone(),
            start_date,
            end_date,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramProgressData {
    pub title: String,
    #[serde(rename = "type")]
    pub program_type: String,
    pub total_count: u32,
    pub in_progress_count: u32,
    pub remaining_count: u32,
    pub completed_count: u32,
}

impl ProgramProgressData {
    pub fn is_consistent(&self) -> bool {
        let sum = u64::from(self.in_progress_count)
            + u64::from(self.remaining_count)
            + u64::from(self.completed_count);
        sum == u64::from(self.total_count)
    }

    pub fn is_complete(&self) -> bool {
        self.in_progress_count == self.total_count
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    Manual,
    #[serde(alias = "random")]
    Automatic,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortData {
    pub name: String,
    pub user_count: u64,
    pub assignment_type: AssignmentType,
}
