use anyhow::{Result, bail};

use crate::auth::Credential;
use crate::chat::{ChatSession, SendOutcome};
use crate::core::AppConfig;
use crate::nlp::NlpClient;

pub async fn run(config: &AppConfig, message: &str, token: Option<String>) -> Result<()> {
    let credential = token
        .or_else(|| config.token.clone())
        .map(|token| Credential::bearer(&token));
    let gateway = NlpClient::with_timeout(&config.api_base_url, config.request_timeout());
    let session = ChatSession::new(gateway, credential);

    match session.send(message).await {
        SendOutcome::Replied(reply) => {
            println!("{}", reply.text);
            Ok(())
        }
        SendOutcome::Failed(error) => bail!("{}", error.message),
        SendOutcome::Rejected(_) => bail!("Nothing to send"),
        SendOutcome::Superseded => unreachable!("one-shot send cannot be reset mid-flight"),
    }
}
