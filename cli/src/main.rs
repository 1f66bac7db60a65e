use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use protocol::{Algorithm, ParsedResult, Point, SolverRequest, parse_pair, parse_response};
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("no path found between {start} and {end}")]
    NoPath { start: Point, end: Point },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mapview-cli", about = "Query a running mapview server")]
struct Cli {
    #[arg(long, env = "MAPVIEW_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check `/healthz` and print solver slot usage.
    Ping,
    /// Request a route and summarise the solver output.
    Path(PathArgs),
}

#[derive(Args, Debug)]
struct PathArgs {
    /// Start point as `x,y`.
    #[arg(value_parser = parse_point_arg, allow_hyphen_values = true)]
    start: Point,

    /// End point as `x,y`.
    #[arg(value_parser = parse_point_arg, allow_hyphen_values = true)]
    end: Point,

    #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
    algorithm: AlgorithmArg,

    /// Print the solver output verbatim instead of a summary.
    #[arg(long, default_value_t = false)]
    raw: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum AlgorithmArg {
    Astar,
    Dijkstra,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Astar => Self::AStar,
            AlgorithmArg::Dijkstra => Self::Dijkstra,
        }
    }
}

fn parse_point_arg(raw: &str) -> Result<Point, String> {
    parse_pair(raw).ok_or_else(|| format!("expected `x,y`, got {raw:?}"))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()?;
    let base_url = cli.base_url.trim_end_matches('/');

    match cli.command {
        Command::Ping => run_ping(&client, base_url).await,
        Command::Path(args) => run_path(&client, base_url, args).await,
    }
}

async fn run_ping(client: &reqwest::Client, base_url: &str) -> Result<(), CliError> {
    let response = client.get(format!("{base_url}/healthz")).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: body });
    }
    let value = serde_json::from_str::<Value>(&body)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

async fn run_path(client: &reqwest::Client, base_url: &str, args: PathArgs) -> Result<(), CliError> {
    let request = SolverRequest::new(args.start, args.end, args.algorithm.into());
    let response = client.get(path_url(base_url, &request)).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: body.trim().to_owned() });
    }

    if args.raw {
        print!("{body}");
        return Ok(());
    }

    let parsed = parse_response(&body);
    if !parsed.has_path() {
        return Err(CliError::NoPath { start: request.start, end: request.end });
    }
    println!("{}", summarize(&request, &parsed));
    Ok(())
}

fn path_url(base_url: &str, request: &SolverRequest) -> String {
    format!("{base_url}/path?{}", request.query_string())
}

fn summarize(request: &SolverRequest, parsed: &ParsedResult) -> String {
    let points = parsed.path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    format!(
        "{} {} -> {}\nvisited: {}\npath: {} points, {:.1} px\n{points}",
        request.algorithm,
        request.start,
        request.end,
        parsed.visited.len(),
        parsed.path.len(),
        path_length(&parsed.path),
    )
}

fn path_length(path: &[Point]) -> f64 {
    path.windows(2)
        .map(|pair| {
            let dx = f64::from(pair[1].x) - f64::from(pair[0].x);
            let dy = f64::from(pair[1].y) - f64::from(pair[0].y);
            dx.hypot(dy)
        })
        .sum()
}
