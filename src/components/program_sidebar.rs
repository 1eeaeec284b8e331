use maud::{html, Markup};

use crate::{i18n::Translate, views::Certificate};

/// Contents of the `js-program-sidebar` region.
pub fn view(t: &dyn Translate, certificates: &[Certificate], program_record_url: Option<&str>) -> Markup {
    html! {
        div class="program-sidebar-content" {
            @if let Some(url) = program_record_url {
                div class="program-record" {
                    h2 class="divider-heading" { (t.gettext("Program Record")) }
                    a href=(url) class="program-record-link" {
                        (t.gettext("View Program Record"))
                    }
                }
            }
            @if !certificates.is_empty() {
                div class="certificate-container" {
                    h2 class="divider-heading" { (t.gettext("Your Certificates")) }
                    ul class="certificate-list" {
                        @for certificate in certificates {
                            li class="certificate" {
                                a href=(certificate.url) class="certificate-link" {
                                    (certificate.title)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
