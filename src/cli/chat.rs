//! CLI `chat` and `analyze` commands.

use anyhow::{Context, Result};
use momento::assistant::{Assistant, Message, Persona};
use momento::config::MomentoConfig;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{open_store, preview};

const HELP: &str = "Commands: /persona <name>, /personas, /analyze, /clear, /quit";

/// Print the collection analysis.
pub fn analyze(config: &MomentoConfig) -> Result<()> {
    let store = open_store(config)?.into_shared();
    let assistant = Assistant::new(store, &config.assistant);
    println!("{}", assistant.analyze());
    Ok(())
}

/// Interactive conversation on stdin/stdout.
pub async fn chat(config: &MomentoConfig, persona: Option<Persona>) -> Result<()> {
    let store = open_store(config)?.into_shared();
    let assistant = Assistant::new(store, &config.assistant);
    if let Some(persona) = persona {
        assistant.change_persona(persona);
    }

    for message in assistant.transcript() {
        print_message(&assistant, &message);
    }
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit" | "/exit", _) => break,
            ("/help", _) => println!("{HELP}"),
            ("/clear", _) => {
                assistant.clear_transcript();
                println!("(transcript cleared)");
            }
            ("/analyze", _) => println!("{}", assistant.analyze()),
            ("/personas", _) => {
                for p in Persona::ALL {
                    let marker = if *p == assistant.current_persona() { "*" } else { " " };
                    println!("{marker} {:<12} {} — {}", p.as_str(), p.label(), p.description());
                }
            }
            ("/persona", name) => match name.trim().parse::<Persona>() {
                Ok(persona) => {
                    assistant.change_persona(persona);
                    if let Some(message) = assistant.transcript().last() {
                        print_message(&assistant, message);
                    }
                }
                Err(e) => println!("{e}"),
            },
            _ => {
                let reply = assistant.submit(line).wait().await?;
                print_message(&assistant, &reply);
            }
        }
    }

    Ok(())
}

fn print_message(assistant: &Assistant, message: &Message) {
    if message.is_user {
        return;
    }
    println!("[{}] {}", assistant.current_persona().label(), message.content);
    for entry in assistant.related_entries(message) {
        println!("    ↳ {}", preview(&entry.content, 60));
    }
}
