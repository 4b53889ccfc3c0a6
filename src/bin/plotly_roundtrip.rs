//! Creates a small scatter chart, fetches it back by id and renders it to PNG.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use plotly_client::{ClientConfig, Figure, PlotlyClient, Trace, TypedArray, telemetry};

#[derive(Debug, Parser)]
#[command(name = "plotly_roundtrip")]
#[command(about = "Create a demo plot on plot.ly, retrieve it, and save it as an image")]
struct Cli {
    /// Plotly filename for the demo chart.
    #[arg(short, long, default_value = "new rust file")]
    name: String,

    /// Where to write the rendered image.
    #[arg(short, long, value_name = "FILE", default_value = "image.png")]
    output: PathBuf,

    /// Log plotly requests to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let _ = telemetry::init_default_tracing(if cli.verbose { "debug" } else { "warn" });

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        for cause in err.chain().skip(1) {
            eprintln!("{cause}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let figure = Figure::new(vec![
        Trace::scatter()
            .with_x(TypedArray::floats([4.54, 3.0, 34.0, 35.0, 362.0]))
            .with_y(TypedArray::integers([1, 2, 3, 4, 5])),
    ]);

    let config = ClientConfig::from_env().context("Error while loading plotly credentials.")?;
    let client = PlotlyClient::new(config).context("Error while setting up the http client.")?;

    let saved = client
        .save_chart(&cli.name, &figure)
        .context("Error while creating plot.")?;
    println!(
        "Successfully created plot!\nFilename: {}\nURL: {}",
        saved.filename, saved.url
    );

    let id = saved.url.id();
    if id.is_empty() {
        bail!("Unexpected plot URL: {}", saved.url);
    }
    let fetched = client
        .fetch_chart(id)
        .with_context(|| format!("Error while downloading plot {id}."))?;
    println!("Downloaded plot");

    client
        .render_image(&fetched, &cli.output)
        .context("Error while rendering image.")?;
    println!("Saved image to {}", cli.output.display());
    Ok(())
}
