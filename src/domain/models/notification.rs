use super::MessageId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    ReplyDelivered { message_id: MessageId },
}

impl Notification {
    pub fn text(&self) -> &'static str {
        match self {
            Notification::ReplyDelivered { .. } => {
                return "Message delivered across the digital ocean!";
            }
        }
    }
}
