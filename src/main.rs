use clap::Parser;
use sonar_report::structs::cli::Cli;
use sonar_report::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match CommandRunner::new().run_command(cli).await {
        Ok(path) => println!("Report generated successfully: {}", path.display()),
        Err(e) => {
            eprintln!("Error generating report: {e}");
            std::process::exit(1);
        }
    }
}
