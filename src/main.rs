use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = gmail_digest::cli::Cli::parse();

    if let Err(err) = gmail_digest::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
