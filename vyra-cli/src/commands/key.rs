use anyhow::Result;
use dialoguer::Password;

use super::open_session;

pub async fn set_key(key: Option<String>) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => Password::new().with_prompt("OpenAI API key").interact()?,
    };

    let mut session = open_session()?;

    match session.set_api_key(&key) {
        Ok(()) => {
            println!("✓ API key saved");
            Ok(())
        }
        Err(e) => {
            println!("✗ {}", e);
            Err(e)
        }
    }
}

pub async fn clear_key() -> Result<()> {
    let mut session = open_session()?;

    if !session.has_api_key() {
        println!("No API key stored.");
        return Ok(());
    }

    session.clear_api_key()?;
    println!("✓ API key removed");

    Ok(())
}

pub async fn key_status() -> Result<()> {
    let session = open_session()?;

    match session.api_key() {
        Some(key) => println!("API key: configured ({})", mask_key(key)),
        None => {
            println!("API key: not configured");
            println!();
            println!("Use 'vyra key set' to add one.");
        }
    }

    Ok(())
}

/// Show only the prefix and the last four characters of a key
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return "sk-…".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("sk-…{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("sk-abcdefghijklmnop"), "sk-…mnop");
        assert_eq!(mask_key("sk-short"), "sk-…");
    }
}
