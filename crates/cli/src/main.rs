use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use folio_agents::ChatAssistant;
use folio_core::{ChatInput, Locale, INTENT_TABLE};
use folio_observability::{init_tracing, AppMetrics};

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio chat assistant CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct LocaleArg {
    /// en, hi, od or sa
    #[arg(long, env = "FOLIO_LOCALE", default_value = "en")]
    locale: Locale,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer a single message.
    Ask {
        message: String,
        #[command(flatten)]
        locale: LocaleArg,
        /// Print the full reply, including the matched intent.
        #[arg(long)]
        json: bool,
    },
    /// Interactive chat loop.
    Chat {
        #[command(flatten)]
        locale: LocaleArg,
    },
    /// Print the chat widget's opening message.
    Welcome {
        #[command(flatten)]
        locale: LocaleArg,
    },
    /// List intents in match order with their keywords.
    Intents,
}

fn main() -> Result<()> {
    init_tracing("folio_cli");
    let cli = Cli::parse();

    let assistant = ChatAssistant::keyword(AppMetrics::shared());

    match cli.command {
        Command::Ask {
            message,
            locale,
            json,
        } => {
            let input = ChatInput::new(message, Some(locale.locale.as_code()));
            let reply = assistant.handle_chat(&input);
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{}", reply.response);
            }
        }
        Command::Chat { locale } => run_chat(&assistant, locale.locale)?,
        Command::Welcome { locale } => println!("{}", assistant.welcome(locale.locale)),
        Command::Intents => {
            for (position, rule) in INTENT_TABLE.iter().enumerate() {
                println!(
                    "{:>2}. {:<14} {}",
                    position + 1,
                    rule.intent,
                    rule.keywords.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn run_chat(assistant: &ChatAssistant, locale: Locale) -> Result<()> {
    println!("{}", assistant.welcome(locale));
    println!("(type 'exit' to quit)\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed reading stdin")?;

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let reply = assistant.handle_chat(&ChatInput::new(message, Some(locale.as_code())));
        println!("\n{}\n", reply.response);
    }

    Ok(())
}
