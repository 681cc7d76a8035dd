use serde::Serialize;

// Push message request body for the LINE Messaging API
#[derive(Debug, Clone, Serialize)]
pub struct LineMessages<'a> {
    #[serde(rename = "to")]
    pub send_to: &'a str,
    pub messages: Vec<LineContent<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineContent<'a> {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub text: &'a str,
}

impl<'a> LineMessages<'a> {
    pub fn new(send_to: &'a str, messages: &'a [String]) -> Self {
        Self {
            send_to,
            messages: messages
                .iter()
                .map(|text| LineContent {
                    content_type: "text",
                    text: text.as_str(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_messages_json_shape() {
        let messages = vec!["1. A\nhttp://x".to_string(), "2. B\nhttp://y".to_string()];
        let payload = LineMessages::new("U123", &messages);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "to": "U123",
                "messages": [
                    {"type": "text", "text": "1. A\nhttp://x"},
                    {"type": "text", "text": "2. B\nhttp://y"}
                ]
            })
        );
    }
}
