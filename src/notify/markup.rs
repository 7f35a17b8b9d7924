use chrono::NaiveDateTime;
use maud::{DOCTYPE, Markup, Render, html};

use crate::kringle::Participant;

pub const SUBJECT: &str = "Your Kris Kringle for this year";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct PartnerEmail<'a> {
    partner: &'a Participant,
    generated_at: NaiveDateTime,
}

impl<'a> PartnerEmail<'a> {
    pub const fn new(partner: &'a Participant, generated_at: NaiveDateTime) -> Self {
        Self {
            partner,
            generated_at,
        }
    }
}

impl Render for PartnerEmail<'_> {
    fn render(&self) -> Markup {
        let partner = self.partner.as_str();

        html! {
            (DOCTYPE)
            html {
                head {
                    meta http-equiv="Content-Type" content="text/html; charset=utf-8";
                    title { "Your Kris Kringle partner" }
                }
                body {
                    h1 { "Hi there!" }
                    p {
                        "The email of your Kris Kringle partner is: "
                        a href={ "mailto:" (partner) } { (partner) }
                        "."
                    }
                    p {
                        "Remember, your Kris Kringle gift should be below 10 dollars "
                        "and ready by the 20th of December."
                    }
                    p {
                        "We hope you enjoyed the Kris Kringle service "
                        "and look forward to doing business with you next year."
                    }
                    p {
                        "Sincerely," br; "Santa Claus"
                    }
                    p {
                        code {
                            "This message is valid as of "
                            (self.generated_at.format(TIMESTAMP_FORMAT).to_string())
                            "."
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn should_render_partner_link() {
        let partner = Participant::new("valera@example.com");

        let actual = PartnerEmail::new(&partner, generated_at())
            .render()
            .into_string();

        assert!(actual.starts_with("<!DOCTYPE html>"));
        assert!(actual.contains(concat!(
            r#"<a href="mailto:valera@example.com">"#,
            "valera@example.com",
            "</a>"
        )));
    }

    #[test]
    fn should_render_timestamp() {
        let partner = Participant::new("valera@example.com");

        let actual = PartnerEmail::new(&partner, generated_at())
            .render()
            .into_string();

        assert!(actual.contains("<code>This message is valid as of 2024-12-01 09:30:00.</code>"));
    }

    #[test]
    fn should_escape_partner() {
        let partner = Participant::new("<b>jora</b>@example.com");

        let actual = PartnerEmail::new(&partner, generated_at())
            .render()
            .into_string();

        assert!(!actual.contains("<b>jora</b>"));
        assert!(actual.contains("&lt;b&gt;jora&lt;/b&gt;@example.com"));
    }
}
