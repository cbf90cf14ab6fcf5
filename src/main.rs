use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt};

mod engine;
mod session;
mod settings;

use engine::classifier::classify_language;
use engine::detector::looks_like_code;
use engine::Advisor;
use session::Role;
use settings::{resolve_config, ConfigOverrides, EngineConfig};

#[derive(Debug, Parser)]
#[command(name = "code_review_advisor")]
#[command(about = "Simulated code-review chat assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Chat {
        /// Seed for the reply randomness; omit for a fresh session each run.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        flake_probability: Option<f64>,
        #[arg(long)]
        min_delay_ms: Option<u64>,
        #[arg(long)]
        max_delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Chat { seed, flake_probability, min_delay_ms, max_delay_ms } => {
            let overrides = ConfigOverrides {
                flake_probability,
                delay_min_ms: min_delay_ms,
                delay_max_ms: max_delay_ms,
            };
            let config = resolve_config(&EngineConfig::default(), &overrides);
            let rng = match seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            chat_loop(Advisor::with_rng(config, rng)).await?;
        }
    }
    Ok(())
}

async fn chat_loop(advisor: Advisor) -> anyhow::Result<()> {
    let mut events = advisor.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();

    for msg in advisor.messages() {
        out.write_all(format!("assistant> {}\n", msg.content).as_bytes()).await?;
    }
    out.write_all(b"(type code or a question; /log for the transcript, /quit to exit)\n> ")
        .await?;
    out.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/log" => {
                let json = serde_json::to_string_pretty(&advisor.messages())?;
                out.write_all(json.as_bytes()).await?;
                out.write_all(b"\n> ").await?;
                out.flush().await?;
                continue;
            }
            "" => {
                out.write_all(b"> ").await?;
                out.flush().await?;
                continue;
            }
            _ => {}
        }

        // Cosmetic live indicator, same detector as the submit-time split.
        if looks_like_code(&line) {
            out.write_all(
                format!("[code detected: {}]\n", classify_language(&line)).as_bytes(),
            )
            .await?;
        }

        advisor.submit(&line);
        // Single-flight: block this little UI until the reply lands.
        if advisor.is_analyzing() {
            loop {
                match events.recv().await {
                    Ok(msg) if msg.role == Role::Assistant => {
                        out.write_all(format!("assistant> {}\n", msg.content).as_bytes()).await?;
                        break;
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        }
        out.write_all(b"> ").await?;
        out.flush().await?;
    }
    Ok(())
}
