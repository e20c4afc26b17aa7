use std::fmt;

/// A message handed off to the user's own mail client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn for_message(recipient: &str, name: &str, email: &str, message: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: format!("Message from {}", name),
            body: format!("Name: {}\nEmail: {}\n\nMessage:\n{}", name, email, message),
        }
    }

    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_param<'a>(uri: &'a str, key: &str) -> &'a str {
        let (_, query) = uri.split_once('?').expect("uri has a query");
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
            .expect("param present")
    }

    #[test]
    fn encoded_subject_and_body_decode_to_the_message() {
        let link = MailtoLink::for_message("me@example.com", "Ada", "ada@example.com", "Hello");
        let uri = link.to_uri();

        assert!(uri.starts_with("mailto:me@example.com?subject="));
        let subject = urlencoding::decode(query_param(&uri, "subject")).unwrap();
        let body = urlencoding::decode(query_param(&uri, "body")).unwrap();
        assert_eq!(subject, "Message from Ada");
        assert_eq!(body, "Name: Ada\nEmail: ada@example.com\n\nMessage:\nHello");
    }

    #[test]
    fn reserved_characters_do_not_leak_into_the_query() {
        let link = MailtoLink::for_message("me@example.com", "A&B", "a+b@example.com", "50% off? x=1&y=2");
        let uri = link.to_uri();

        // Exactly one separator between subject and body.
        assert_eq!(uri.matches('&').count(), 1);
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
        let body = urlencoding::decode(query_param(&uri, "body")).unwrap();
        assert!(body.ends_with("Message:\n50% off? x=1&y=2"));
    }

    #[test]
    fn display_matches_uri() {
        let link = MailtoLink::for_message("me@example.com", "", "", "");
        assert_eq!(link.to_string(), link.to_uri());
        assert_eq!(link.subject, "Message from ");
    }
}
