use crate::config::EmailSettings;
use crate::domain::model::{EmailMessage, Submission};

const HEADING: &str = "New Contact Form Enquiry";

pub fn subject(submission: &Submission) -> String {
    format!("{} from {}", HEADING, submission.name)
}

/// HTML 內容：使用者輸入一律跳脫，訊息換行轉為 `<br>`
pub fn html_body(submission: &Submission, settings: &EmailSettings) -> String {
    let mut html = String::new();
    html.push_str(&format!("<h2>{}</h2>\n", HEADING));
    html.push_str(&format!(
        "<p><strong>Name:</strong> {}</p>\n",
        ammonia::clean_text(&submission.name)
    ));
    html.push_str(&format!(
        "<p><strong>Email:</strong> {}</p>\n",
        ammonia::clean_text(&submission.email)
    ));
    if submission.has_message() {
        html.push_str("<p><strong>Message:</strong></p>\n");
        html.push_str(&format!("<p>{}</p>\n", message_to_html(&submission.message)));
    }
    html.push_str("<hr>\n");
    html.push_str(&format!(
        "<p style=\"color: #666; font-size: 12px;\">This email was sent from the {} contact form.</p>",
        ammonia::clean_text(&settings.site_name)
    ));
    html
}

fn message_to_html(message: &str) -> String {
    message
        .split('\n')
        .map(ammonia::clean_text)
        .collect::<Vec<_>>()
        .join("<br>")
}

pub fn text_body(submission: &Submission, settings: &EmailSettings) -> String {
    let message = if submission.has_message() {
        format!("\nMessage:\n{}", submission.message)
    } else {
        String::new()
    };

    format!(
        "{}\n\nName: {}\nEmail: {}\n{}\n\n---\nThis email was sent from the {} contact form.",
        HEADING, submission.name, submission.email, message, settings.site_name
    )
    .trim()
    .to_string()
}

pub fn compose(submission: &Submission, settings: &EmailSettings) -> EmailMessage {
    EmailMessage {
        from: settings.from.clone(),
        to: vec![settings.to.clone()],
        subject: subject(submission),
        html: html_body(submission, settings),
        text: text_body(submission, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> EmailSettings {
        EmailSettings {
            from: "forms@example.com".to_string(),
            to: "team@example.com".to_string(),
            site_name: "IntelTree".to_string(),
        }
    }

    #[test]
    fn test_compose_addresses_and_subject() {
        let email = compose(&Submission::new("Ada", "ada@example.com", ""), &settings());

        assert_eq!(email.from, "forms@example.com");
        assert_eq!(email.to, vec!["team@example.com".to_string()]);
        assert_eq!(email.subject, "New Contact Form Enquiry from Ada");
    }

    #[test]
    fn test_text_body_with_message() {
        let submission = Submission::new("Ada", "ada@example.com", "Line one\nLine two");
        assert_eq!(
            text_body(&submission, &settings()),
            "New Contact Form Enquiry\n\nName: Ada\nEmail: ada@example.com\n\nMessage:\nLine one\nLine two\n\n---\nThis email was sent from the IntelTree contact form."
        );
    }

    #[test]
    fn test_text_body_without_message() {
        let submission = Submission::new("Ada", "ada@example.com", "");
        let text = text_body(&submission, &settings());
        assert!(!text.contains("Message:"));
        assert!(text.ends_with("This email was sent from the IntelTree contact form."));
    }

    #[test]
    fn test_html_converts_newlines() {
        let submission = Submission::new("Ada", "ada@example.com", "first\nsecond");
        let html = html_body(&submission, &settings());
        assert!(html.contains("<p><strong>Message:</strong></p>"));
        assert!(html.contains("first<br>second"));
    }

    #[test]
    fn test_html_omits_empty_message() {
        let html = html_body(&Submission::new("Ada", "ada@example.com", ""), &settings());
        assert!(!html.contains("Message:"));
        assert!(html.contains("<hr>"));
    }

    #[test]
    fn test_html_escapes_user_input() {
        let submission = Submission::new(
            "<script>alert(1)</script>",
            "ada@example.com",
            "<b>bold</b>",
        );
        let html = html_body(&submission, &settings());
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));

        // 純文字版本保留原始輸入
        let text = text_body(&submission, &settings());
        assert!(text.contains("<script>alert(1)</script>"));
    }
}
