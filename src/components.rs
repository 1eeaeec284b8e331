use maud::{html, Markup, DOCTYPE};

pub mod cohort_header;
pub mod course_card;
pub mod program_details;
pub mod program_sidebar;

pub fn base(title: &str, lang: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="utf-8";
                title { (title) }
                link rel="stylesheet" href="/assets/learner-dashboard.css";
                meta name="viewport" content="width=device-width,initial-scale=1.0" {}
            }
            body {
                div id="app-container" class="learner-dashboard" {
                    (content)
                }
            }
        }
    }
}
