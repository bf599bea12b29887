use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use log::info;

use chaintext_core::corpus;
use chaintext_core::model::generator::{GenerationRequest, Generator};
use chaintext_core::model::markov_model::MarkovModel;
use chaintext_core::text::{self, HeuristicTagger};

/// Generate text using a grammar-preprocessed Markov chain built from
/// a folder of text files.
#[derive(Parser, Debug)]
#[command(author, version, about = "Markov text generator with grammar-filtered training", long_about = None)]
struct Cli {
	/// Path to the input folder containing text files
	#[arg(long, value_name = "DIR")]
	input: PathBuf,

	/// Output file for the generated text
	#[arg(long, value_name = "PATH", default_value = "generated_text.txt")]
	output: PathBuf,

	/// Number of words to generate
	#[arg(long, value_name = "COUNT", default_value_t = 1000)]
	num_words: usize,

	/// Order of the Markov chain (recommended: 3 for large corpora)
	#[arg(long, value_name = "K", default_value_t = 3)]
	order: usize,

	/// Force rebuild of the Markov chain even if a snapshot exists
	#[arg(long)]
	rebuild: bool,

	/// Optional starting phrase for the generated text
	#[arg(long, value_name = "PHRASE")]
	start: Option<String>,

	/// Seed for the random source (entropy-seeded if omitted)
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,

	/// Increase verbosity (-v, -vv)
	#[arg(short = 'v', long, global = true, action = ArgAction::Count)]
	verbose: u8,
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if cli.num_words == 0 {
		bail!("--num-words must be at least 1");
	}
	if cli.order == 0 {
		bail!("--order must be at least 1");
	}

	let model = build_or_load(&cli)?;

	let mut request = GenerationRequest::new(cli.num_words);
	if let Some(phrase) = &cli.start {
		let forced = text::tokenize(phrase);
		if !forced.is_empty() {
			request.start = Some(forced);
		}
	}

	let mut generator = match cli.seed {
		Some(seed) => Generator::seeded(seed),
		None => Generator::from_entropy(),
	};
	let generated = generator.generate(&model, &request)?;

	fs::write(&cli.output, &generated)
		.with_context(|| format!("failed to write output file {}", cli.output.display()))?;

	println!(
		"Generated text of {} words saved to {}",
		cli.num_words,
		cli.output.display()
	);
	Ok(())
}

/// Loads the snapshot keyed by (input folder, order) when present,
/// otherwise builds the model from the corpus and saves it.
fn build_or_load(cli: &Cli) -> Result<MarkovModel> {
	let snapshot = corpus::snapshot_path(&cli.input, cli.order);

	if snapshot.exists() && !cli.rebuild {
		let model = MarkovModel::load(&snapshot)?;
		return Ok(model);
	}

	let raw = corpus::load_folder(&cli.input)?;
	let sentences = text::prepare(&raw, &HeuristicTagger);
	info!("tokenized {} sentences", sentences.len());

	let model = MarkovModel::build(&sentences, cli.order)?;
	model.save(&snapshot)?;
	Ok(model)
}

fn init_logging(verbose: u8) {
	use log::LevelFilter;

	let level = match verbose {
		0 => LevelFilter::Info,
		1 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};

	let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
	builder.filter_level(level);
	let _ = builder.try_init();
}
