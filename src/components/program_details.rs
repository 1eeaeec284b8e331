use maud::{html, Markup, PreEscaped};

use crate::{common::ProgramProgressData, i18n::Translate};

/// Contents for the course list containers and the sidebar. Empty markup leaves the
/// region for the client to fill.
pub struct CourseLists {
    pub in_progress: Markup,
    pub remaining: Markup,
    pub completed: Markup,
    pub sidebar: Markup,
}

impl Default for CourseLists {
    fn default() -> Self {
        Self {
            in_progress: PreEscaped(String::new()),
            remaining: PreEscaped(String::new()),
            completed: PreEscaped(String::new()),
            sidebar: PreEscaped(String::new()),
        }
    }
}

fn heading(t: &dyn Translate, progress: &ProgramProgressData) -> Markup {
    html! {
        div class="program-heading" {
            @if progress.is_complete() {
                h3 class="program-heading-title" { (t.gettext("Congratulations!")) }
                div class="program-heading-message" {
                    div {
                        (t.translate(
                            "You have successfully completed all the requirements for the %(title)s %(type)s.",
                            &[("title", progress.title.as_str()), ("type", progress.program_type.as_str())],
                        ))
                    }
                }
            } @else {
                h3 class="program-heading-title" { (t.gettext("Your Program Journey")) }
                div class="program-heading-message" {
                    div {
                        (t.translate(
                            "Track and plan your progress through the %(count)s courses in this program.",
                            &[("count", progress.total_count.to_string().as_str())],
                        ))
                    }
                    div {
                        (t.gettext("To complete the program, you must earn a verified certificate for each course."))
                    }
                }
            }
        }
    }
}

fn list_heading(status: String, count: u32) -> Markup {
    html! {
        h4 class="course-list-heading" {
            span class="status" { (status) }
            span class="count" { (count) }
        }
    }
}

pub fn view(t: &dyn Translate, progress: &ProgramProgressData) -> Markup {
    with_lists(t, progress, &CourseLists::default())
}

pub fn with_lists(t: &dyn Translate, progress: &ProgramProgressData, lists: &CourseLists) -> Markup {
    html! {
        section class="program-details-content" {
            (heading(t, progress))
            div class="course-list-headings" {
                @if progress.in_progress_count > 0 {
                    div class="in-progress-group" {
                        (list_heading(t.gettext("COURSES IN PROGRESS"), progress.in_progress_count))
                        div class="course-list js-course-list-in-progress row" { (lists.in_progress) }
                    }
                }
                @if progress.remaining_count > 0 {
                    div class="remaining-group" {
                        (list_heading(t.gettext("REMAINING COURSES"), progress.remaining_count))
                        div class="course-list js-course-list-remaining row" { (lists.remaining) }
                    }
                }
                div class="completed-group" {
                    (list_heading(t.gettext("COMPLETED COURSES"), progress.completed_count))
                    @if progress.completed_count > 0 {
                        div class="course-list js-course-list-completed row" { (lists.completed) }
                    } @else {
                        div class="motivating-section" {
                            p class="motivating-heading" {
                                (t.gettext("As you complete courses, you will see them listed here."))
                            }
                            p class="motivating-message" {
                                (t.gettext("Complete courses on your schedule to ensure you stay on track to earn a certificate."))
                            }
                        }
                    }
                }
            }
        }
        aside class="js-program-sidebar program-sidebar" { (lists.sidebar) }
    }
}
