use anyhow::{bail, Context, Result};
use maud::{html, Markup};
use serde::{Deserialize, Serialize};

use crate::{
    common::{CourseCardData, CourseRun, ProgramProgressData},
    components::{
        course_card,
        program_details::{self, CourseLists},
        program_sidebar,
    },
    i18n::Translate,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramData {
    pub title: String,
    #[serde(rename = "type")]
    pub program_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseData {
    pub in_progress: Vec<CourseRun>,
    pub not_started: Vec<CourseRun>,
    pub completed: Vec<CourseRun>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramUrls {
    #[serde(default)]
    pub program_record_url: Option<String>,
}

/// Everything the program details page is built from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDetailsOptions {
    pub program_data: ProgramData,
    #[serde(default)]
    pub course_data: CourseData,
    #[serde(default)]
    pub certificate_data: Vec<Certificate>,
    #[serde(default)]
    pub urls: ProgramUrls,
}

fn list_count(len: usize) -> Result<u32> {
    u32::try_from(len).with_context(|| format!("course list of {} runs is too long", len))
}

#[derive(Debug)]
pub struct ProgramDetailsView {
    options: ProgramDetailsOptions,
}

/// Builds the program details view from its options.
pub fn construct(options: ProgramDetailsOptions) -> Result<ProgramDetailsView> {
    ProgramDetailsView::new(options)
}

impl ProgramDetailsView {
    pub fn new(options: ProgramDetailsOptions) -> Result<Self> {
        if options.program_data.title.trim().is_empty() {
            bail!("program data is missing a title");
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &ProgramDetailsOptions {
        &self.options
    }

    pub fn progress(&self) -> Result<ProgramProgressData> {
        let courses = &self.options.course_data;
        let in_progress = list_count(courses.in_progress.len())?;
        let remaining = list_count(courses.not_started.len())?;
        let completed = list_count(courses.completed.len())?;
        let total_count = in_progress
            .checked_add(remaining)
            .and_then(|n| n.checked_add(completed))
            .context("program has too many courses to count")?;

        Ok(ProgramProgressData {
            title: self.options.program_data.title.clone(),
            program_type: self.options.program_data.program_type.clone(),
            total_count,
            in_progress_count: in_progress,
            remaining_count: remaining,
            completed_count: completed,
        })
    }

    fn course_list(t: &dyn Translate, runs: &[CourseRun]) -> Markup {
        html! {
            @for run in runs {
                div class="program-course-card" {
                    (course_card::view(t, &CourseCardData::from(run)))
                }
            }
        }
    }

    pub fn render(&self, t: &dyn Translate) -> Result<Markup> {
        let progress = self.progress()?;
        let program = &self.options.program_data;
        let courses = &self.options.course_data;
        let lists = CourseLists {
            in_progress: Self::course_list(t, &courses.in_progress),
            remaining: Self::course_list(t, &courses.not_started),
            completed: Self::course_list(t, &courses.completed),
            sidebar: program_sidebar::view(
                t,
                &self.options.certificate_data,
                self.options.urls.program_record_url.as_deref().filter(|u| !u.is_empty()),
            ),
        };

        Ok(html! {
            header class="js-program-header program-header full-width-banner" {
                div class="program-type" { (program.program_type) }
                h2 class="program-title" { (program.title) }
            }
            (program_details::with_lists(t, &progress, &lists))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::Catalog;

    use super::*;

    fn run(key: &str) -> CourseRun {
        CourseRun {
            title: format!("Course {}", key),
            key: key.to_string(),
            image_url: format!("/img/{}.png", key),
            course_url: Some(format!("/courses/{}", key)),
            ..Default::default()
        }
    }

    fn options() -> ProgramDetailsOptions {
        ProgramDetailsOptions {
            program_data: ProgramData {
                title: "Data Science".to_string(),
                program_type: "MicroMasters".to_string(),
            },
            course_data: CourseData {
                in_progress: vec![run("DS101")],
                not_started: vec![run("DS201"), run("DS301")],
                completed: vec![],
            },
            certificate_data: vec![],
            urls: ProgramUrls::default(),
        }
    }

    #[test]
    fn construct_forwards_options() {
        let view = construct(options()).unwrap();
        assert_eq!(view.options(), &options());
    }

    #[test]
    fn construct_propagates_constructor_failure() {
        let mut options = options();
        options.program_data.title = "  ".to_string();

        let err = construct(options).unwrap_err();
        assert_eq!(err.to_string(), "program data is missing a title");
    }

    #[test]
    fn progress_is_derived_from_course_lists() {
        let progress = construct(options()).unwrap().progress().unwrap();

        assert_eq!(progress.total_count, 3);
        assert_eq!(progress.in_progress_count, 1);
        assert_eq!(progress.remaining_count, 2);
        assert_eq!(progress.completed_count, 0);
        assert!(progress.is_consistent());
    }

    #[test]
    fn render_fills_course_lists() {
        let out = construct(options())
            .unwrap()
            .render(&Catalog::default())
            .unwrap()
            .into_string();

        assert!(out.contains(r#"<h2 class="program-title">Data Science</h2>"#));
        assert!(out.contains(
            r#"<div class="course-list js-course-list-in-progress row"><div class="program-course-card">"#
        ));
        assert!(out.contains(r#"href="/courses/DS301""#));
        assert!(out.contains("motivating-section"));
        assert!(out.contains(r#"<aside class="js-program-sidebar program-sidebar"><div class="program-sidebar-content"></div></aside>"#));
    }

    #[test]
    fn oversized_course_list_is_an_error() {
        assert_eq!(list_count(7).unwrap(), 7);
        assert!(list_count(u32::MAX as usize).is_ok());
        assert!(list_count(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ProgramDetailsOptions =
            serde_json::from_str(r#"{"program_data":{"title":"Data Science","type":"MicroMasters"}}"#)
                .unwrap();

        assert!(options.course_data.in_progress.is_empty());
        assert_eq!(options.urls.program_record_url, None);
    }
}
