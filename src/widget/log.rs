use super::message::Message;

/// Append-only record of displayed messages, in display order.
#[derive(Debug, Default, Clone)]
pub struct ChatLog {
    entries: Vec<Message>,
}

impl ChatLog {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, message: Message) -> &Message {
        self.entries.push(message);
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ChatLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut log = ChatLog::new();
        log.push(Message::user("first"));
        log.push(Message::bot_plain("second"));
        log.push(Message::user("third"));

        let texts: Vec<&str> = log.iter().map(Message::text).collect();
        assert_eq!(texts, ["first", "second", "third"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_push_returns_appended_entry() {
        let mut log = ChatLog::new();
        let appended = log.push(Message::user("hello")).clone();
        assert_eq!(log.last(), Some(&appended));
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = ChatLog::default();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }
}
