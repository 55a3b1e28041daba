use anyhow::Result;

use super::ClientOptions;
use crate::chat::ChatSession;

pub async fn run_chat(options: &ClientOptions) -> Result<()> {
    let config = options.resolve()?;
    let mut session = ChatSession::new(&config);
    session.run().await
}
