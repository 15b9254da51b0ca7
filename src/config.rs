//! Command-line configuration.

use anyhow::{anyhow, bail, Context, Result};

use crate::supply::Generator;

/// Seed used when none is given, so plain runs are reproducible.
pub const DEFAULT_SEED: u64 = 123;

pub const USAGE: &str = "\
Usage: tetris-stack [OPTIONS]

Options:
  --seed <N>    Seed the piece generator with N (default: 123)
  --random      Seed the piece generator from the operating system
  --color       Always color piece labels
  --no-color    Never color piece labels
  -h, --help    Print this help
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Fixed(u64),
    Entropy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Seed,
    /// `None` means: color only when stdout is a terminal.
    pub color: Option<bool>,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: Seed::Fixed(DEFAULT_SEED),
            color: None,
            help: false,
        }
    }
}

impl Config {
    /// Parse the arguments after the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--seed" => {
                    let value = args.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                    let value = value.as_ref();
                    let seed = value
                        .parse()
                        .with_context(|| format!("invalid seed: {value:?}"))?;
                    config.seed = Seed::Fixed(seed);
                }
                "--random" => config.seed = Seed::Entropy,
                "--color" => config.color = Some(true),
                "--no-color" => config.color = Some(false),
                "-h" | "--help" => config.help = true,
                other => bail!("unknown argument: {other:?}\n\n{USAGE}"),
            }
        }

        Ok(config)
    }

    pub fn generator(&self) -> Generator {
        match self.seed {
            Seed::Fixed(seed) => Generator::new(seed),
            Seed::Entropy => Generator::from_entropy(),
        }
    }
}
