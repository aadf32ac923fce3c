use std::io::{self, Write};

use anyhow::{Context, Result};
use bingo_strategy::display;
use bingo_strategy::session::Session;

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Fetch,
    Predict,
    History,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "fetch" | "f" => Some(InteractiveCommand::Fetch),
        "2" | "predict" | "pred" | "p" => Some(InteractiveCommand::Predict),
        "3" | "history" | "hist" => Some(InteractiveCommand::History),
        "4" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu(session: &Session) {
    let predict_hint = if session.can_predict() { "" } else { " (fetch first)" };
    println!();
    println!("── Interactive mode ──");
    println!("  1. fetch     Fetch / refresh the latest draws");
    println!("  2. predict   Rank strategies and recommend picks{predict_hint}");
    println!("  3. history   Latest draws");
    println!("  4. quit      Quit");
    println!();
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("End of input");
    }
    Ok(input.trim().to_string())
}

pub fn run_interactive(session: &mut Session) -> Result<()> {
    println!("Bingo Bingo strategy picks, interactive mode.");
    display::display_status(session.status());

    loop {
        display_menu(session);
        let input = match prompt("> ") {
            Ok(s) => s,
            Err(_) => break, // EOF / Ctrl+D
        };

        if input.is_empty() {
            continue;
        }

        let result = match parse_command(&input) {
            Some(InteractiveCommand::Quit) => {
                println!("Bye!");
                break;
            }
            Some(InteractiveCommand::Fetch) => super::cmd_fetch(session),
            Some(InteractiveCommand::Predict) => super::cmd_session_predict(session),
            Some(InteractiveCommand::History) => super::cmd_session_history(session, 10),
            None => {
                println!("Unknown command: '{}'. Type a number (1-4) or a command name.", input);
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("Error: {e:#}");
        }
    }

    Ok(())
}
