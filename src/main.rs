// src/main.rs
use pahtia_site::core::config::Config;
use pahtia_site::{bootstrap, CommandHandler, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const PROMPT: &str = "/// ";

#[tokio::main]
async fn main() -> Result<()> {
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    init_logger(rust_log_set);

    let ephemeral = std::env::args().skip(1).any(|arg| arg == "--ephemeral");

    let config = Config::load().await?;
    if !rust_log_set {
        log::set_max_level(config.log_level_filter());
    }

    let mut ctx = bootstrap(&config, ephemeral)?;
    log::info!(
        "Page ready in '{}'{}",
        ctx.synchronizer.current_language(),
        if ephemeral { " (ephemeral preference)" } else { "" }
    );

    let handler = CommandHandler::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_prompt();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            print_prompt();
            continue;
        }

        let result = handler.handle_input(&mut ctx, &line);
        if result.success {
            println!("{}", result.message);
        } else {
            eprintln!("{}", result.message);
        }

        if result.should_exit {
            break;
        }
        print_prompt();
    }

    Ok(())
}

fn init_logger(rust_log_set: bool) {
    let mut builder = env_logger::Builder::new();
    if rust_log_set {
        builder.parse_default_env();
    } else {
        builder.filter_level(log::LevelFilter::Trace);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();

    if !rust_log_set {
        // replaced by the configured level once the config is read
        log::set_max_level(log::LevelFilter::Info);
    }
}

fn print_prompt() {
    print!("{}", PROMPT);
    let _ = std::io::stdout().flush();
}
