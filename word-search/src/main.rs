use std::io::{self, Write};

use dictionary::Dictionary;
use search::{SearchController, UiState};
use tracing_subscriber::EnvFilter;

mod search;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut controller = SearchController::new(Dictionary::new());
    println!("Enter a word to look it up, 'clear' to dismiss the result, 'quit' to leave.");
    loop {
        let Some(line) = input(">> ")? else {
            break;
        };
        let line = line.trim();
        match line {
            "exit" | "quit" | "q" => {
                break;
            }
            "clear" | "x" => {
                controller.clear();
            }
            word => {
                controller.update_query(word);
                controller.submit().await;
            }
        }
        render(&controller);
    }
    Ok(())
}

fn render(controller: &SearchController) {
    match controller.state() {
        UiState::Idle => {}
        UiState::Error(message) => {
            println!("{message}");
        }
        UiState::Ready(result) => {
            for meaning in &result.meanings {
                println!("{}:", meaning.part_of_speech);
                for definition in &meaning.definitions {
                    println!("    {}", definition.definition);
                    if let Some(example) = &definition.example {
                        println!("      example: {example}");
                    }
                }
            }
            if let Some(audio_url) = &result.audio_url {
                println!("pronunciation: {audio_url}");
            }
        }
    }
}

/// Reads one line from stdin, `None` on end of input.
fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    let bytes = io::stdin().read_line(&mut line)?;
    Ok((bytes != 0).then_some(line))
}
