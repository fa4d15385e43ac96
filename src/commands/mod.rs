//! Screen-level flows. Each screen is a thin view over the controllers in
//! [`crate::recommend`], [`crate::auth`] and [`crate::jobs`]; no screen talks
//! to reqwest directly.

pub mod auth;
pub mod discover;
pub mod mypage;

use std::io::{self, BufRead, Write};

use crate::auth::Navigator;

/// Navigation seam for the terminal: a redirect becomes a hint telling the
/// user which command to run.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn redirect_to_sign_in(&self) {
        println!("You are signed out. Run `mohitto login <email>` to sign in.");
    }
}

/// Prompt and read one trimmed line from stdin. `None` on EOF.
pub(crate) fn read_command(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
