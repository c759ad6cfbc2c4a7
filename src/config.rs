//! Limits, defaults and command-line configuration
//!
//! The constants mirror the bounds the visualizer enforces on user input.
//! [`Config`] is parsed by hand from the process arguments; unknown or
//! malformed flags produce a [`ConfigError`].

use crate::algorithms::Algorithm;
use crate::errors::ConfigError;
use crate::input;
use std::path::PathBuf;
use std::time::Duration;

/// Largest value an array element may hold; larger input is clamped
pub const MAX_ARRAY_VALUE: u32 = 400;

pub const DEFAULT_ARRAY_SIZE: usize = 15;

/// Longest array a run accepts; custom input beyond it is truncated
pub const MAX_ARRAY_SIZE: usize = 50;

pub const DEFAULT_TARGET: u32 = 250;

/// Playback interval bounds in milliseconds
pub const DEFAULT_SPEED_MS: u64 = 100;
pub const MIN_SPEED_MS: u64 = 10;
pub const MAX_SPEED_MS: u64 = 2000;

/// Playback interval used for BST step sequences
pub const BST_SPEED_MS: u64 = 500;

/// Accepted range for BST operation values
pub const MIN_BST_VALUE: u32 = 1;
pub const MAX_BST_VALUE: u32 = 999;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "ALGOTTY_LOG";

/// Array shown before the user enters one
pub const DEMO_ARRAY: [u32; DEFAULT_ARRAY_SIZE] = [
    250, 42, 318, 97, 10, 163, 389, 205, 71, 144, 360, 18, 276, 123, 331,
];

/// Values seeded into the tree on startup
pub const DEMO_TREE: [u32; 6] = [15, 6, 23, 4, 7, 71];

/// Runtime configuration assembled from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub array: Vec<u32>,
    pub target: u32,
    pub speed: Duration,
    /// Print the step sequence as JSON instead of starting the TUI
    pub dump: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::BubbleSort,
            array: DEMO_ARRAY.to_vec(),
            target: DEFAULT_TARGET,
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            dump: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Parse arguments, excluding the program name
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--algorithm" | "-a" => {
                    let value = Self::value_for(&flag, args.next())?;
                    config.algorithm = value
                        .parse()
                        .map_err(|_| ConfigError::UnknownAlgorithm(value))?;
                }
                "--array" => {
                    let value = Self::value_for(&flag, args.next())?;
                    config.array = input::parse_custom_array(&value)?;
                }
                "--target" | "-t" => {
                    let value = Self::value_for(&flag, args.next())?;
                    config.target = input::parse_target(&value)?;
                }
                "--speed" | "-s" => {
                    let value = Self::value_for(&flag, args.next())?;
                    let ms: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                        flag: flag.clone(),
                        value: value.clone(),
                    })?;
                    config.speed = clamp_speed(Duration::from_millis(ms));
                }
                "--log" => {
                    let value = Self::value_for(&flag, args.next())?;
                    config.log_file = Some(PathBuf::from(value));
                }
                "--dump" => config.dump = true,
                "--help" | "-h" => return Err(ConfigError::HelpRequested),
                _ => return Err(ConfigError::UnknownFlag(flag)),
            }
        }

        Ok(config)
    }

    fn value_for(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
        value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
    }

    /// Log destination, falling back to a file in the temp directory
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("algotty.log"))
    }
}

/// Clamp a playback interval into the supported range
pub fn clamp_speed(speed: Duration) -> Duration {
    speed.clamp(
        Duration::from_millis(MIN_SPEED_MS),
        Duration::from_millis(MAX_SPEED_MS),
    )
}

pub const USAGE: &str = "\
Usage: algotty [options]

Options:
  -a, --algorithm ID   bubblesort | selectionsort | mergesort | quicksort |
                       shellsort | linearsearch | binarysearch |
                       bstinsert | bstsearch
      --array LIST     comma-separated positive integers, e.g. \"50,100,20\"
  -t, --target N       search target (1-400)
  -s, --speed MS       playback interval in milliseconds (10-2000)
      --dump           print the step sequence as JSON and exit
      --log FILE       write logs to FILE
  -h, --help           show this message";
