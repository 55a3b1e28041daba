//! Client for the collaborator endpoint that generates bot replies.

mod http;
mod protocol;

pub use http::{Collaborator, HttpCollaborator, TransportError, response_url};
pub use protocol::{ChatReply, ChatRequest, RESPONSE_PATH, RequestMode};
