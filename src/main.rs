// src/main.rs

use launchseq::{SETUP_ERROR_EXIT_CODE, cli, exit_code, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("launchseq error: {err:?}");
        std::process::exit(SETUP_ERROR_EXIT_CODE);
    }

    let outcome = run(args).await;
    if let Err(ref err) = outcome {
        eprintln!("launchseq error: {err}");
    }
    std::process::exit(exit_code(&outcome));
}
