//! AI advisor and support chat commands

use std::io::{self, BufRead, Write};

use crate::advisor::{Advisor, ChatSession};
use crate::config::Settings;
use crate::error::EduEasyResult;
use crate::storage::Storage;

/// Print the portfolio analysis
pub fn handle_advise_command(storage: &Storage, settings: &Settings) -> EduEasyResult<()> {
    let advisor = Advisor::from_settings(settings)?;
    let loans = storage.loans.get_all()?;

    println!("Financial analysis ({})", advisor.language());
    println!();
    println!("{}", advisor.analyze_portfolio(&loans));
    Ok(())
}

/// One-shot reply with `message`, otherwise an interactive session on stdin
pub fn handle_chat_command(
    storage: &Storage,
    settings: &Settings,
    message: Option<String>,
) -> EduEasyResult<()> {
    let advisor = Advisor::from_settings(settings)?;
    let loans = storage.loans.get_all()?;
    let mut session = ChatSession::new();

    if let Some(message) = message {
        if let Some(reply) = session.send(&advisor, &message, &loans) {
            println!("{}", reply.text);
        }
        return Ok(());
    }

    if let Some(greeting) = session.messages().first() {
        println!("assistant> {}", greeting.text);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if matches!(line, "exit" | "quit") {
            break;
        }

        if let Some(reply) = session.send(&advisor, line, &loans) {
            println!("assistant> {}", reply.text);
        }
    }

    Ok(())
}
