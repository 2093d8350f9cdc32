use clap::Parser;
use flashcards::{Session, SessionConfig};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "flashcards", about = "Interactive flashcard trainer", version)]
struct Cli {
    /// JSON deck imported before the first prompt
    #[arg(long = "import_from", value_name = "PATH")]
    import_from: Option<String>,

    /// JSON file the deck is exported to on exit
    #[arg(long = "export_to", value_name = "PATH")]
    export_to: Option<String>,
}

impl Cli {
    fn into_config(self) -> SessionConfig {
        // An empty value means the flag was not given.
        let non_empty = |p: Option<String>| p.filter(|p| !p.is_empty()).map(PathBuf::from);
        SessionConfig {
            import_from: non_empty(self.import_from),
            export_to: non_empty(self.export_to),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    log::debug!("starting session with {:?}", config);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_clean_shutdown() => {
            log::warn!("input closed, leaving without export");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
