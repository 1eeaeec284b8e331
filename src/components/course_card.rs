use maud::{html, Markup};

use crate::{common::CourseCardData, i18n::Translate};

pub fn view(t: &dyn Translate, course: &CourseCardData) -> Markup {
    let link = course.link();

    html! {
        div class="section" {
            div class="course-meta-container" {
                div class="course-image-link" {
                    @if let Some(href) = link {
                        a href=(href) class="course-image-link" {
                            img class="header-img" src=(course.course_image_url)
                                alt=(t.translate("%(courseTitle)s Home Page.", &[("courseTitle", course.title.as_str())]));
                        }
                    } @else {
                        img class="header-img" src=(course.course_image_url) alt="";
                    }
                }
                div class="course-details" {
                    h3 class="course-title" {
                        @if let Some(href) = link {
                            a href=(href) class="course-title-link" {
                                (course.title)
                            }
                        } @else {
                            (course.title)
                        }
                    }
                    div class="course-text" {
                        @if let Some((start, end)) = course.run_period() {
                            span class="run-period" { (start) " - " (end) }
                            " - "
                        }
                        span class="course-key" { (course.course_key) }
                    }
                }
            }
            div class="course-actions" {}
            div class="certificate-status" {}
        }
        div class="section action-msg-view" {}
        div class="section upgrade-message" {}
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::Catalog;

    use super::*;

    fn intro() -> CourseCardData {
        CourseCardData {
            title: "Intro to X".to_string(),
            course_key: "X101".to_string(),
            course_image_url: "/img.png".to_string(),
            marketing_url: None,
            course_url: Some("/course/X101".to_string()),
            start_date: Some("Jan 1".to_string()),
            end_date: Some("Feb 1".to_string()),
        }
    }

    #[test]
    fn linked_card_with_run_period() {
        let out = view(&Catalog::default(), &intro()).into_string();

        assert!(out.contains(r#"<a href="/course/X101" class="course-image-link">"#));
        assert!(out.contains(r#"<a href="/course/X101" class="course-title-link">Intro to X</a>"#));
        assert!(out.contains(r#"alt="Intro to X Home Page.""#));
        assert!(out.contains("Jan 1 - Feb 1"));
        assert!(out.contains(r#"<span class="course-key">X101</span>"#));
    }

    #[test]
    fn marketing_url_takes_precedence() {
        let card = CourseCardData {
            marketing_url: Some("https://www.example.com/x101".to_string()),
            ..intro()
        };
        let out = view(&Catalog::default(), &card).into_string();

        assert!(out.contains(r#"href="https://www.example.com/x101""#));
        assert!(!out.contains(r#"href="/course/X101""#));
    }

    #[test]
    fn unlinked_card_without_dates() {
        let card = CourseCardData {
            course_url: None,
            end_date: None,
            ..intro()
        };
        let out = view(&Catalog::default(), &card).into_string();

        assert!(!out.contains("<a "));
        assert!(out.contains(r#"<img class="header-img" src="/img.png" alt="">"#));
        assert!(!out.contains("run-period"));
        assert!(out.contains(r#"<div class="course-text"><span class="course-key">X101</span></div>"#));
    }

    #[test]
    fn placeholder_regions_are_present() {
        let out = view(&Catalog::default(), &intro()).into_string();

        assert!(out.contains(r#"<div class="section action-msg-view"></div>"#));
        assert!(out.contains(r#"<div class="section upgrade-message"></div>"#));
        assert!(out.contains(r#"<div class="certificate-status"></div>"#));
    }

    #[test]
    fn title_is_escaped() {
        let card = CourseCardData {
            title: "<script>".to_string(),
            ..intro()
        };
        let out = view(&Catalog::default(), &card).into_string();

        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
