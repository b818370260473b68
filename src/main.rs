// Needed to write partial lines to the console
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use knn_mnist::classify::evaluate;
use knn_mnist::error::Result;
use knn_mnist::idx::{load_images, load_labels};
use knn_mnist::render::ascii_art;

#[derive(Parser)]
#[command(about = "Nearest-neighbor digit classification over IDX image files")]
struct Cli {
    /// Reference (training) image tensor
    #[arg(long, default_value = "train-images.idx3-ubyte")]
    train_images: PathBuf,

    /// Reference (training) labels
    #[arg(long, default_value = "train-labels.idx1-ubyte")]
    train_labels: PathBuf,

    /// Query (test) image tensor
    #[arg(long, default_value = "t10k-images.idx3-ubyte")]
    test_images: PathBuf,

    /// Query (test) labels
    #[arg(long, default_value = "t10k-labels.idx1-ubyte")]
    test_labels: PathBuf,

    /// Print the query image at this index as ASCII art before classifying
    #[arg(long)]
    show: Option<usize>,
}

fn main() {
    if let Err(error) = run(Cli::parse()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    print!("Loading reference data... ");
    let _ = io::stdout().flush();
    let now = Instant::now();
    let train_images = load_images(&cli.train_images)?;
    let train_labels = load_labels(&cli.train_labels)?;
    println!(
        "Loaded {} images from {} [{}ms]",
        train_images.item_count(),
        cli.train_images.display(),
        now.elapsed().as_millis()
    );

    print!("Loading query data... ");
    let _ = io::stdout().flush();
    let now = Instant::now();
    let test_images = load_images(&cli.test_images)?;
    let test_labels = load_labels(&cli.test_labels)?;
    println!(
        "Loaded {} images from {} [{}ms]",
        test_images.item_count(),
        cli.test_images.display(),
        now.elapsed().as_millis()
    );

    // Diagnostic only - a bad index or shape should not kill the run
    if let Some(index) = cli.show {
        match ascii_art(&test_images, index) {
            Ok(art) => print!("{art}"),
            Err(error) => eprintln!("{error}"),
        }
    }

    print!(
        "Classifying {} query images against {} reference images... ",
        test_images.item_count(),
        train_images.item_count()
    );
    let _ = io::stdout().flush();
    let now = Instant::now();
    let evaluation = evaluate(&train_images, &train_labels, &test_images, &test_labels)?;
    println!("Done [{}ms]", now.elapsed().as_millis());

    for (index, label) in evaluation.predictions.iter().enumerate() {
        println!("Test Image Index: {} classified as: {}", index, label);
    }
    println!("Classification Accuracy: {}%", evaluation.accuracy());

    Ok(())
}
