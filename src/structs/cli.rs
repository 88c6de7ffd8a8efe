use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "sonar-report")]
#[clap(about = "Generates a PDF report from SonarQube analysis results", long_about = None)]
pub struct Cli {
    /// Project key, overriding SONAR_QUBE_PROJECT_KEY
    #[clap(short, long)]
    pub project: Option<String>,

    /// Where to write the PDF
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Settings file to read instead of the default locations
    #[clap(short, long)]
    pub config: Option<PathBuf>,
}
