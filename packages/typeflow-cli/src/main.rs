use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use typeflow_core::{Settings, Typewriter, TypewriterConfig};
use typeflow_queue::{EventQueue, Op, Repeat};

mod renderer;

use renderer::LineRenderer;

#[derive(Parser)]
#[command(name = "typeflow")]
#[command(about = "Typeflow typing-animation player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demo sequence
    Demo {
        /// Typing speed in characters per second
        #[arg(long, default_value_t = 10.0)]
        cps: f64,
        /// Print the mutation log after the run
        #[arg(long)]
        dump: bool,
    },
    /// Play a JSON op script against a fresh surface
    Play {
        /// Path to the script file
        script: PathBuf,
        /// Print the mutation log after the run
        #[arg(long)]
        dump: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { cps, dump } => {
            let mut typewriter = Typewriter::new(TypewriterConfig {
                type_cps: cps,
                delete_cps: cps * 2.0,
                ..TypewriterConfig::default()
            })?;
            attach_renderer(&mut typewriter);

            let mut queue = EventQueue::new(typewriter);
            queue
                .type_text("Hello, world!")
                .standby(600.0)
                .delete_chars(6)
                .type_text("typeflow.")
                .standby(400.0)
                .settings(Settings {
                    type_cps: Some(cps * 3.0),
                    ..Settings::default()
                })
                .clear_history()
                .type_text(" And again, faster:")
                .standby(300.0)
                .repeat(Repeat::Times(1));
            run(queue, dump).await
        }
        Commands::Play { script, dump } => {
            let ops: Vec<Op> = serde_json::from_str(&std::fs::read_to_string(&script)?)?;
            let mut typewriter = Typewriter::new(TypewriterConfig::default())?;
            attach_renderer(&mut typewriter);

            let mut queue = EventQueue::new(typewriter);
            queue.extend(ops);
            run(queue, dump).await
        }
    }
}

fn attach_renderer(typewriter: &mut Typewriter) {
    typewriter.on_char_typed(LineRenderer::draw);
    typewriter.on_char_deleted(LineRenderer::draw);
}

async fn run(mut queue: EventQueue, dump: bool) -> Result<()> {
    queue.start().await?;
    LineRenderer::finish(queue.typewriter());

    if dump {
        let mutations = queue.typewriter_mut().drain_mutations();
        println!("{}", serde_json::to_string_pretty(&mutations)?);
    }
    Ok(())
}
