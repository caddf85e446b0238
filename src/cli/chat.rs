use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::auth::Credential;
use crate::chat::{ChatSession, SendOutcome};
use crate::core::AppConfig;
use crate::nlp::NlpClient;

/// Starter prompts, selectable by number at the prompt.
const SUGGESTIONS: [&str; 3] = [
    "What's my leave balance?",
    "I want to request leave",
    "Show me the leave policies",
];

pub async fn run(config: &AppConfig, token: Option<String>) -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let credential = token
        .or_else(|| config.token.clone())
        .map(|token| Credential::bearer(&token));
    let gateway = NlpClient::with_timeout(&config.api_base_url, config.request_timeout());
    let session = ChatSession::new(gateway, credential);

    println!("Connected to {}", config.api_base_url);
    println!("Type a message, a suggestion number, or /reset to start over.");
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        println!("  {}. {}", i + 1, suggestion);
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let line = line.trim().to_string();
                if line == "/reset" {
                    session.reset();
                    println!("Conversation cleared.");
                    continue;
                }

                // A bare number sends the matching suggestion
                let utterance = match line.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= SUGGESTIONS.len() => SUGGESTIONS[n - 1].to_string(),
                    _ => line,
                };

                match session.send(&utterance).await {
                    SendOutcome::Replied(message) => println!("{}", message.text),
                    SendOutcome::Failed(error) => println!("{}", error.message),
                    // Empty input; a sequential prompt can't race itself
                    SendOutcome::Rejected(_) | SendOutcome::Superseded => continue,
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
