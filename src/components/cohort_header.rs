use maud::{html, Markup};

use crate::{
    common::{AssignmentType, CohortData},
    i18n::Translate,
};

pub const MANUAL_ASSIGNMENT_HELP_URL: &str = "http://edx.readthedocs.io/projects/edx-partner-course-staff/en/latest/course_features/cohorts/cohort_config.html#assign-learners-to-cohorts-manually";
pub const AUTOMATIC_ASSIGNMENT_HELP_URL: &str = "http://edx.readthedocs.io/projects/edx-partner-course-staff/en/latest/course_features/cohorts/cohorts_overview.html#all-automated-assignment";

pub fn view(t: &dyn Translate, cohort: &CohortData) -> Markup {
    let (setup, help_url) = match cohort.assignment_type {
        AssignmentType::Manual => (
            "Learners are added to this cohort only when you provide their email addresses or usernames on this page.",
            MANUAL_ASSIGNMENT_HELP_URL,
        ),
        AssignmentType::Automatic => (
            "Learners are added to this cohort automatically.",
            AUTOMATIC_ASSIGNMENT_HELP_URL,
        ),
    };
    let student_count = cohort.user_count.to_string();

    html! {
        div class="cohort-management-group-header" {
            h3 class="hd hd-3 group-header-title" tabindex="-1" {
                span class="title-value" { (cohort.name) }
                " "
                span class="group-count" {
                    (t.translate_plural(
                        "(contains %(student_count)s student)",
                        "(contains %(student_count)s students)",
                        cohort.user_count,
                        &[("student_count", student_count.as_str())],
                    ))
                }
            }
            div class="cohort-management-group-setup" {
                div class="setup-value" {
                    (t.gettext(setup))
                    " "
                    a href=(help_url) class="incontext-help action-secondary action-help" target="_blank" {
                        (t.gettext("What does this mean?"))
                    }
                }
            }
        }
    }
}
