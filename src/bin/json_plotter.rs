use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use plotly_client::{ClientConfig, Figure, PlotlyClient, telemetry};

#[derive(Debug, Parser)]
#[command(name = "json_plotter")]
#[command(about = "Plot the given json data on plot.ly")]
#[command(
    long_about = "Plot the given json data on plot.ly. The input must be a plotly figure \
                  document with a 'data' and a 'layout' element. Credentials are read from \
                  a plotly_credentials.json file or the PLOTLY_USERNAME / PLOTLY_APIKEY \
                  environment variables."
)]
struct Cli {
    /// Input json file. Defaults to STDIN.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// The filename for the plot in plotly. Include any folders. Defaults to the
    /// current unix timestamp.
    #[arg(short, long)]
    name: Option<String>,

    /// Download the plot automatically.
    #[arg(short, long)]
    download: bool,

    /// File name for the downloaded image. Defaults to the plot name in the
    /// current folder.
    #[arg(short = 'o', long = "image", value_name = "FILE")]
    image: Option<PathBuf>,

    /// Make this plot publicly visible. Free accounts limit the number of
    /// private plots.
    #[arg(
        short,
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    public: bool,

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
    let name = cli
        .name
        .unwrap_or_else(|| chrono::Utc::now().timestamp().to_string());

    let input = read_input(cli.input.as_deref())?;
    let figure = Figure::from_json_slice(&input).context(
        "Error while processing data. Should contain a 'data' and 'layout' element only.",
    )?;

    let config = ClientConfig::from_env().context("Error while loading plotly credentials.")?;
    let client = PlotlyClient::new(config).context("Error while setting up the http client.")?;
    let url = client
        .create_chart(&name, &figure, cli.public)
        .context("Error while POSTing to plot.ly.")?;
    println!("{url}");

    if cli.download {
        let image = cli.image.unwrap_or_else(|| default_image_path(&name));
        client
            .download_image(url.id(), &image)
            .context("Error while downloading image.")?;
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path)
            .with_context(|| format!("Could not open input file: {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Error while reading data.")?;
            Ok(buffer)
        }
    }
}

/// `reports/q3` becomes `q3.png` in the current folder.
fn default_image_path(name: &str) -> PathBuf {
    let base = Path::new(name)
        .file_name()
        .map_or_else(|| name.to_owned(), |base| base.to_string_lossy().into_owned());
    PathBuf::from(format!("{base}.png"))
}
