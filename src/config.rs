//! Server configuration parsed from environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SOLVER_MAX_CONCURRENT: usize = 4;
pub const DEFAULT_SOLVER_QUEUE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SOLVER_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STATIC_DIR: &str = "public";

/// How the bridge launches the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Solver executable. Relative paths are resolved against `workdir`.
    pub executable: PathBuf,
    /// Working directory for the child; the solver finds its grid data here.
    pub workdir: PathBuf,
    /// Wall-clock limit for one solver run.
    pub run_timeout: Duration,
    /// Maximum concurrently running solver processes.
    pub max_concurrent: usize,
    /// How long a request may wait for a free solver slot.
    pub queue_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Server root: the solver's working directory. Never served.
    pub root: PathBuf,
    /// Only directory exposed over HTTP: page, wasm bundle, map image, overlay CSV.
    pub static_dir: PathBuf,
    pub solver: SolverConfig,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MAPVIEW_ROOT`: default the crate directory
    /// - `MAPVIEW_STATIC_DIR`: default `public` under the root
    /// - `SOLVER_PATH`: default `pathfinder.exe` on Windows, `./pathfinder` elsewhere
    /// - `SOLVER_MAX_CONCURRENT`: default 4, never below 1
    /// - `SOLVER_QUEUE_TIMEOUT_SECS`: default 10
    /// - `SOLVER_TIMEOUT_SECS`: default 30
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let root = lookup("MAPVIEW_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        let static_dir = lookup("MAPVIEW_STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let executable = lookup("SOLVER_PATH").map_or_else(default_solver_path, PathBuf::from);

        let solver = SolverConfig {
            executable: resolve_against(&root, executable),
            workdir: root.clone(),
            run_timeout: Duration::from_secs(parse_or(&lookup, "SOLVER_TIMEOUT_SECS", DEFAULT_SOLVER_TIMEOUT_SECS)),
            max_concurrent: parse_or(&lookup, "SOLVER_MAX_CONCURRENT", DEFAULT_SOLVER_MAX_CONCURRENT).max(1),
            queue_timeout: Duration::from_secs(parse_or(
                &lookup,
                "SOLVER_QUEUE_TIMEOUT_SECS",
                DEFAULT_SOLVER_QUEUE_TIMEOUT_SECS,
            )),
        };

        Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            static_dir: resolve_against(&root, static_dir),
            root,
            solver,
        }
    }
}

/// Platform-specific solver executable name.
#[must_use]
pub fn default_solver_path() -> PathBuf {
    if cfg!(windows) { PathBuf::from("pathfinder.exe") } else { PathBuf::from("./pathfinder") }
}

fn resolve_against(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() { path } else { root.join(path) }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
