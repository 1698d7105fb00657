//! TwiML messaging responses.

use std::borrow::Cow;

use axum::http::header;
use axum::response::{IntoResponse, Response};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A `<Response>` document holding zero or more `<Message>` replies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagingResponse {
    messages: Vec<String>,
}

impl MessagingResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Response carrying a single reply.
    pub fn reply(body: impl Into<String>) -> Self {
        Self::new().message(body)
    }

    /// Append a `<Message>`.
    pub fn message(mut self, body: impl Into<String>) -> Self {
        self.messages.push(body.into());
        self
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Render the document. Message bodies are XML-escaped.
    pub fn to_xml(&self) -> String {
        if self.messages.is_empty() {
            return format!("{XML_DECLARATION}<Response />");
        }

        let mut xml = String::from(XML_DECLARATION);
        xml.push_str("<Response>");
        for body in &self.messages {
            xml.push_str("<Message>");
            xml.push_str(&escape_xml(body));
            xml.push_str("</Message>");
        }
        xml.push_str("</Response>");
        xml
    }
}

impl IntoResponse for MessagingResponse {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "text/xml")], self.to_xml()).into_response()
    }
}

/// Characters XML 1.0 cannot carry at all, even escaped.
fn is_forbidden(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

/// Escape the five XML special characters and drop characters XML 1.0 forbids.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'') || is_forbidden(c))
    {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if is_forbidden(c) => {}
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message_envelope() {
        let xml = MessagingResponse::reply("Take 500K from Majestic.").to_xml();
        assert_eq!(
            xml,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                "<Response><Message>Take 500K from Majestic.</Message></Response>"
            )
        );
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(
            MessagingResponse::new().to_xml(),
            r#"<?xml version="1.0" encoding="UTF-8"?><Response />"#
        );
    }

    #[test]
    fn test_multiple_messages_in_order() {
        let response = MessagingResponse::new().message("one").message("two");
        assert_eq!(response.messages(), ["one", "two"]);
        assert!(response
            .to_xml()
            .ends_with("<Message>one</Message><Message>two</Message></Response>"));
    }

    #[test]
    fn test_escape_xml() {
        assert!(matches!(escape_xml("plain 🚌 text"), Cow::Borrowed(_)));
        assert_eq!(
            escape_xml(r#"<b>Tom & "Jerry's"</b>"#),
            "&lt;b&gt;Tom &amp; &quot;Jerry&apos;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_xml_drops_forbidden_characters() {
        let escaped = escape_xml("a\u{1}b\u{1B}[0m\u{FFFF}c");
        assert!(matches!(escaped, Cow::Owned(_)));
        assert_eq!(escaped, "ab[0mc");

        // Tab, LF and CR are legal and kept.
        assert!(matches!(escape_xml("a\tb\r\nc"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_reply_is_escaped_in_envelope() {
        let xml = MessagingResponse::reply("fare < ₹20 & ETA > 5 min").to_xml();
        assert!(xml.contains("<Message>fare &lt; ₹20 &amp; ETA &gt; 5 min</Message>"));
    }
}
