use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use log::{debug, info};

mod cli;

use cli::Cli;
use ytsum::config::{Config, Settings, config_path};
use ytsum::shell::{Event, Output, Shell, State};
use ytsum::summarize::GeminiGenerator;
use ytsum::youtube::CaptionGateway;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn render(outputs: &[Output]) {
    for output in outputs {
        match output {
            Output::Languages(names) => {
                println!("Available transcript languages:");
                for (i, name) in names.iter().enumerate() {
                    println!("  {}. {name}", i + 1);
                }
            }
            Output::Thumbnail(url) => println!("Thumbnail: {url}"),
            Output::Notice(msg) => eprintln!("{msg}"),
            Output::Summary(text) => println!("\n--- Summary ---\n{text}"),
            Output::Error(msg) => eprintln!("Error: {msg}"),
        }
    }
}

fn listed_names(outputs: &[Output]) -> Option<Vec<String>> {
    outputs.iter().find_map(|o| match o {
        Output::Languages(names) => Some(names.clone()),
        _ => None,
    })
}

/// Prompt on stdout and read one trimmed line; None on EOF
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Turn a menu entry (number or display name) into a display name
fn resolve_selection(input: &str, names: &[String]) -> String {
    if let Ok(n) = input.parse::<usize>() {
        if n >= 1 && n <= names.len() {
            return names[n - 1].clone();
        }
    }
    input.to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    // Config file is non-fatal if missing/invalid
    let config = Config::load().unwrap_or_default();
    let settings = Settings::resolve(&config, cli.model.clone(), cli.word_limit, cli.lang.clone());

    if cli.verbose {
        let path = config_path();
        if path.exists() {
            eprintln!("Config: {}", path.display());
        }
        eprintln!("Model: {}", settings.model);
    }

    let client = reqwest::Client::new();
    let transcripts = CaptionGateway::new(&client);
    let completions = GeminiGenerator::new(&client, &settings);
    let mut shell = Shell::new(&transcripts, &completions);

    // One-shot when a URL was given on the command line; otherwise keep
    // prompting until EOF
    let one_shot = cli.url.is_some();
    let mut next_link = cli.url.clone();

    loop {
        let link = match next_link.take() {
            Some(link) => link,
            None => match prompt("Enter YouTube video link: ")? {
                Some(link) if !link.is_empty() => link,
                Some(_) => continue,
                None => break,
            },
        };

        let outputs = shell.handle(Event::LinkEntered(link)).await;
        render(&outputs);

        let Some(names) = listed_names(&outputs) else {
            if one_shot {
                std::process::exit(1);
            }
            continue;
        };

        // Preselected language code skips the menu
        if let Some(ref code) = settings.preselected_lang {
            let name = shell
                .language_options()
                .and_then(|opts| opts.iter().find(|o| &o.code == code))
                .map(|o| o.name.clone());
            match name {
                Some(name) => {
                    debug!("Preselected language code '{code}' -> {name}");
                    render(&shell.handle(Event::LanguageChosen(name)).await);
                }
                None => {
                    eprintln!("Error: no transcript track for language '{code}'");
                    if one_shot {
                        std::process::exit(1);
                    }
                    continue;
                }
            }
        }

        while !matches!(shell.state(), State::LanguageSelected { .. }) {
            let Some(selection) = prompt("Select transcript language (number or name): ")? else {
                return Ok(());
            };
            if selection.is_empty() {
                continue;
            }
            let name = resolve_selection(&selection, &names);
            render(&shell.handle(Event::LanguageChosen(name)).await);
        }

        let outputs = shell.handle(Event::Submitted).await;
        render(&outputs);

        if one_shot {
            if !matches!(shell.state(), State::Summarized) {
                std::process::exit(1);
            }
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_selection_by_number() {
        let names = vec!["English".to_string(), "Tamil".to_string()];
        assert_eq!(resolve_selection("2", &names), "Tamil");
    }

    #[test]
    fn test_resolve_selection_by_name() {
        let names = vec!["English".to_string(), "Tamil".to_string()];
        assert_eq!(resolve_selection("English", &names), "English");
    }

    #[test]
    fn test_resolve_selection_out_of_range() {
        let names = vec!["English".to_string()];
        assert_eq!(resolve_selection("7", &names), "7");
    }
}
