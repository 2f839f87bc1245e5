//! Incremental parser for `text/event-stream` bodies.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event: String,
    pub data: String,
}

/// Accepts arbitrary byte chunks and yields complete events.
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
    ready: VecDeque<SseEvent>,
}

impl SseParser {
    pub fn new() -> Self {
        SseParser::default()
    }

    pub fn push(&mut self, chunk: &[u8]) {
        // CRLF line endings are treated as LF.
        self.buffer.extend(chunk.iter().copied().filter(|b| *b != b'\r'));

        while let Some(end) = find_blank_line(&self.buffer) {
            let block: Vec<u8> = self.buffer.drain(..end + 2).collect();
            if let Some(event) = parse_block(&String::from_utf8_lossy(&block[..end])) {
                self.ready.push_back(event);
            }
        }
    }

    pub fn next_event(&mut self) -> Option<SseEvent> {
        self.ready.pop_front()
    }
}

fn find_blank_line(buffer: &[u8]) -> Option<usize> {
    buffer.windows(2).position(|w| w == b"\n\n")
}

fn parse_block(block: &str) -> Option<SseEvent> {
    let mut event = None;
    let mut data: Vec<&str> = Vec::new();

    for line in block.lines() {
        if line.is_empty() || line.starts_with(':') {
            continue;
        }
        let (field, value) = line.split_once(':').unwrap_or((line, ""));
        let value = value.strip_prefix(' ').unwrap_or(value);
        match field {
            "event" => event = Some(value.to_string()),
            "data" => data.push(value),
            _ => {}
        }
    }

    if event.is_none() && data.is_empty() {
        return None;
    }

    Some(SseEvent {
        event: event.unwrap_or_else(|| "message".to_string()),
        data: data.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_event() {
        let mut parser = SseParser::new();
        parser.push(b"event: put\ndata: {\"path\":\"/\",\"data\":null}\n\n");
        assert_eq!(
            parser.next_event(),
            Some(SseEvent {
                event: "put".into(),
                data: "{\"path\":\"/\",\"data\":null}".into(),
            })
        );
        assert_eq!(parser.next_event(), None);
    }

    #[test]
    fn test_event_split_across_chunks() {
        let mut parser = SseParser::new();
        parser.push(b"event: pa");
        assert_eq!(parser.next_event(), None);
        parser.push(b"tch\ndata: {}\n");
        assert_eq!(parser.next_event(), None);
        parser.push(b"\nevent: keep-alive\ndata: null\n\n");

        assert_eq!(parser.next_event().unwrap().event, "patch");
        assert_eq!(parser.next_event().unwrap().event, "keep-alive");
    }

    #[test]
    fn test_crlf_comments_and_multiline_data() {
        let mut parser = SseParser::new();
        parser.push(b": hello\r\nevent: put\r\ndata: a\r\ndata: b\r\n\r\n");
        let event = parser.next_event().unwrap();
        assert_eq!(event.event, "put");
        assert_eq!(event.data, "a\nb");
    }

    #[test]
    fn test_default_event_name() {
        let mut parser = SseParser::new();
        parser.push(b"data: x\n\n\n\n");
        assert_eq!(parser.next_event().unwrap().event, "message");
        assert_eq!(parser.next_event(), None);
    }
}
