use anyhow::Result;
use std::io::{self, Write};

use crate::auth::AuthClient;
use crate::core::AppConfig;

pub async fn run(
    config: &AppConfig,
    personnel_number: &str,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => {
            print!("Password: ");
            io::stdout().flush().unwrap();
            let mut input = String::new();
            io::stdin()
                .read_line(&mut input)
                .expect("Failed to read password");
            input.trim().to_string()
        }
    };

    let client = AuthClient::with_timeout(&config.api_base_url, config.request_timeout());
    let credential = client.login(personnel_number, &password).await?;

    if let Some(user) = &credential.user {
        println!("Logged in as {} ({})", user.name, user.personnel_number);
    }
    println!("\nexport SAP_ASSIST_TOKEN={}", credential.token);

    Ok(())
}
