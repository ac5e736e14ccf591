//! One-shot "say" command

use std::error::Error;

use crate::core::chat_client::ChatClient;
use crate::core::config::Config;
use crate::ui::markdown;

pub async fn run_say(
    config: &Config,
    base_url: Option<&str>,
    prompt: Vec<String>,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: podium say <prompt>");
        std::process::exit(1);
    }

    let client = ChatClient::new(config.chat_url(base_url), config.timeout())?;
    match client.send(prompt.trim()).await {
        Ok(reply) => {
            println!("{}", markdown::render_value(&reply.response));
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {}", err.display_text());
            std::process::exit(1);
        }
    }
}
