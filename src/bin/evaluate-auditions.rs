use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::sync::Arc;

use dotenv::dotenv;
use log::{info, initialize_logger};
use structopt::StructOpt;

use actory::batch;
use actory::config::Config;
use actory::evaluation::Evaluator;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "evaluate-auditions",
    about = "Score audition submissions given as JSON lines and print their assessments"
)]
struct Opt {
    /// The file to read submissions from, one per line (defaults to standard input)
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let opt = Opt::from_args();

    let logger = Arc::new(initialize_logger());

    let config = Config::from_env()?;

    info!(
        logger,
        "Scoring submissions...";
        "strict_validation" => config.strict_validation,
        "input" => opt.input.as_ref().map(|path| path.display().to_string())
    );

    let evaluator = Evaluator::new(logger.clone(), config.weights).strict(config.strict_validation);

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());

    let summary = match &opt.input {
        Some(path) => batch::score_lines(BufReader::new(File::open(path)?), writer, &evaluator)?,
        None => {
            let stdin = io::stdin();
            batch::score_lines(stdin.lock(), writer, &evaluator)?
        }
    };

    info!(
        logger,
        "Finished scoring submissions";
        "scored" => summary.scored,
        "rejected" => summary.rejected
    );

    Ok(())
}
