use std::fmt::Display;
use std::io;
use std::process;
use utilcalc::cli::Cli;
use utilcalc::config::SettingsStore;
use utilcalc::core::{submit, Form};
use utilcalc::debug_println;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    let store = match &cli.settings {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::from_env(),
    };
    debug_println!("settings path: {}", store.path().display());

    if cli.print {
        let snapshot = store.load();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if cli.check {
        match store.try_load() {
            Ok(snapshot) if snapshot.is_empty() => {
                println!("ℹ No saved settings at {}", store.path().display());
            }
            Ok(_) => println!("✓ Settings valid ({})", store.path().display()),
            Err(e) => {
                print_error(&e);
                process::exit(1);
            }
        }
        return Ok(());
    }

    // Prefill from the last successful run; prompts go to stderr
    let form = Form::new(store.load(), !cli.no_input);
    let request = {
        let stdin = io::stdin();
        let stderr = io::stderr();
        form.fill(&cli.provided_fields(), &mut stdin.lock(), &mut stderr.lock())?
    };

    let submission = match submit(&store, &request) {
        Ok(submission) => submission,
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&submission.result)?);
    } else {
        println!("{}", submission.result);
    }

    // The result above stands even if saving failed
    if let Err(e) = submission.persistence {
        print_error(&e);
        process::exit(2);
    }

    Ok(())
}

fn print_error(message: &dyn Display) {
    #[cfg(feature = "color")]
    let prefix = ansi_term::Colour::Red.bold().paint("Error:").to_string();
    #[cfg(not(feature = "color"))]
    let prefix = "Error:".to_string();

    eprintln!("{} {}", prefix, message);
}
