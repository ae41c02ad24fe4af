use coinprofit::{Config, Shell};
use std::path::PathBuf;

fn main() {
    // Logs go to stderr so they never mix with rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let script = std::env::args_os().nth(1).map(PathBuf::from);
    let mut shell = Shell::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &script {
        Some(path) => shell.run_file(path, &mut out),
        None => shell.run(std::io::stdin().lock(), &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
