use std::sync::Arc;

use anyhow::{bail, Result};

use mohitto::auth::TokenStore;
use mohitto::commands;
use mohitto::{ApiClient, Config};

const USAGE: &str = "\
Usage: mohitto <command> [args]

  signup <email> <password> <name> [--agree]   create an account
  login <email> <password>                     sign in and store the token
  logout                                       sign out
  profile                                      show nickname and email
  welcome                                      greeting with your name
  discover                                     browse recommended styles and shops
  saved-styles                                 your bookmarked hairstyles
  saved-shops                                  your bookmarked hairshops
  simulate <user_id> <request_id>              trigger simulation image generation
  recommend <user_id> <request_id>             trigger recommendation generation
  watch [request_id]                           poll until recommendations are ready
";

#[tokio::main]
async fn main() -> Result<()> {
    mohitto::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        print!("{}", USAGE);
        return Ok(());
    };

    let config = Config::load()?;
    let tokens = TokenStore::new();
    let token = tokens.load().unwrap_or_else(|e| {
        tracing::warn!("Could not read stored token: {}", e);
        None
    });
    let api = ApiClient::new(&config, token)?;

    match (command, &args[1..]) {
        ("signup", [email, password, name, rest @ ..]) => {
            let agreed = rest.iter().any(|a| a == "--agree");
            commands::auth::signup(&api, &tokens, email, password, name, agreed).await;
        }
        ("login", [email, password]) => {
            commands::auth::signin(&api, &tokens, email, password).await;
        }
        ("logout", []) => commands::auth::logout(&api, &tokens).await,
        ("profile", []) => commands::auth::profile(&api, &tokens).await,
        ("welcome", []) => commands::auth::welcome(&api).await,
        ("discover", []) => commands::discover::browse(&api).await,
        ("saved-styles", []) => commands::mypage::saved_styles(&api, &tokens).await,
        ("saved-shops", []) => commands::mypage::saved_shops(&api, &tokens).await,
        ("simulate", [user_id, request_id]) => {
            commands::discover::trigger_simulation(&api, user_id, request_id).await;
        }
        ("recommend", [user_id, request_id]) => {
            commands::discover::trigger_recommendation(&api, user_id, request_id).await;
        }
        ("watch", rest) if rest.len() <= 1 => {
            let request_id = rest.first().cloned();
            commands::discover::watch(Arc::new(api), request_id, config.poll_interval()).await;
        }
        _ => {
            print!("{}", USAGE);
            bail!("unrecognized command or arguments: {}", args.join(" "));
        }
    }

    Ok(())
}
