use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use engine::prompt::Prompter;
use engine::{Dice, api, game};

#[derive(Subcommand)]
enum Cmd {
    /// Play the dungeon interactively
    Play {
        /// RNG seed for a reproducible run (defaults to OS entropy)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a scripted battle from a JSON config and print the report
    Simulate {
        /// Path to the battle config JSON
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Parser)]
#[command(name = "dungeon-cli")]
#[command(about = "Menu-driven dungeon crawl")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

/// Real-console prompter: numbered menus on stdout, answers from stdin.
/// Invalid or empty input reprompts; EOF ends the program.
struct ConsolePrompter;

impl ConsolePrompter {
    fn read_line(&self) -> String {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).unwrap_or(0);
        if read == 0 {
            println!("\nInput closed; exiting.");
            std::process::exit(0);
        }
        line
    }
}

impl Prompter for ConsolePrompter {
    fn choose(&mut self, question: &str, options: &[String]) -> usize {
        loop {
            println!("{question}");
            for (i, option) in options.iter().enumerate() {
                println!("{}. {}", i + 1, option);
            }
            print!("> ");
            let _ = io::stdout().flush();
            let line = self.read_line();
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return n - 1,
                _ => println!("Invalid choice, please try again."),
            }
        }
    }

    fn prompt_number(&mut self, question: &str) -> Option<i32> {
        println!("{question}");
        print!("> ");
        let _ = io::stdout().flush();
        self.read_line().trim().parse().ok()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Play { seed } => {
            let mut dice = match seed {
                Some(s) => Dice::from_seed(s),
                None => Dice::from_entropy(),
            };
            let mut prompter = ConsolePrompter;
            game::run(&mut dice, &mut prompter, |msg| println!("{msg}"))?;
        }
        Cmd::Simulate { file } => {
            let cfg = api::load_battle_config(&file.to_string_lossy())?;
            let sim = api::simulate_battle(cfg)?;
            println!("{}", serde_json::to_string_pretty(&sim)?);
        }
    }
    Ok(())
}
