use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use privlab_core::{
    LabConfig,
    anonymity::{AnonymizationReport, GeneralizationPolicy, Record, enforce_minimum_k},
    pseudonym::{MaskStyle, Pseudonymizer, Salt, mask},
    toy::{SimulationReport, ToyCipher},
};
use sampling::{Source, source::SEED_BYTES};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

mod dataset;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "k-anonymity, toy homomorphic encryption and pseudonymization playground", long_about = None)]
struct Args {
    /// JSON file with engine settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generalize age and postal code, widening once if k is too small
    Anonymize {
        /// JSON array of {age, postal_code, category}; demo table if absent
        #[arg(short, long)]
        records: Option<PathBuf>,

        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        age_width: i64,

        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        prefix: i64,

        #[arg(short = 'k', long, default_value_t = 3)]
        target_k: usize,

        /// Reject a prefix longer than some postal code
        #[arg(long)]
        strict: bool,
    },

    /// Encrypt two values, add the ciphertexts and decrypt the sum
    Cipher {
        #[arg(long, allow_negative_numbers = true)]
        key: i64,

        #[arg(short = 'a', long = "plaintext-a", allow_negative_numbers = true)]
        a: i64,

        #[arg(short = 'b', long = "plaintext-b", allow_negative_numbers = true)]
        b: i64,

        /// 64 hex characters; a fresh seed is drawn when absent
        #[arg(long)]
        seed: Option<String>,
    },

    /// Print salted pseudonyms and prefix masks
    Pseudonymize {
        /// Hex salt; a fresh one is drawn when absent
        #[arg(long)]
        salt: Option<String>,

        /// Hex characters kept from the digest
        #[arg(long)]
        len: Option<usize>,

        /// Characters left visible by the mask
        #[arg(long, default_value_t = 2)]
        keep: usize,

        #[arg(required = true)]
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let cfg: LabConfig = load_config(args.config.as_deref())?;

    match args.command {
        Command::Anonymize {
            records,
            age_width,
            prefix,
            target_k,
            strict,
        } => {
            let records: Vec<Record> = match records {
                Some(path) => load_records(&path)?,
                None => dataset::demo_records(),
            };
            let mut escalation = cfg.escalation.clone();
            escalation.strict_postal_length |= strict;

            let policy: GeneralizationPolicy = GeneralizationPolicy::new(age_width, prefix)?;
            let report: AnonymizationReport = enforce_minimum_k(&records, &policy, target_k, &escalation)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::anonymization(&report));
            }
        }

        Command::Cipher { key, a, b, seed } => {
            let seed: [u8; SEED_BYTES] = match seed {
                Some(s) => parse_seed(&s)?,
                None => sampling::new_seed(),
            };
            let seed_hex: String = hex::encode(seed);
            info!(seed = %seed_hex, "toy cipher source");

            let toy: ToyCipher = ToyCipher::new(&cfg.cipher)?;
            let report: SimulationReport = toy.simulate(key, a, b, &mut Source::new(seed))?;

            if args.json {
                #[derive(Serialize)]
                struct Output<'a> {
                    seed: &'a str,
                    #[serde(flatten)]
                    report: &'a SimulationReport,
                }
                let out = Output {
                    seed: &seed_hex,
                    report: &report,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render::simulation(&report, &seed_hex));
            }
        }

        Command::Pseudonymize {
            salt,
            len,
            keep,
            values,
        } => {
            let salt: Salt = match salt {
                Some(s) => Salt::from_hex(&s)?,
                None => Salt::generate(cfg.pseudonym.salt_len, &mut Source::from_entropy())?,
            };
            let pseudonymizer: Pseudonymizer =
                Pseudonymizer::new(salt, len.unwrap_or(cfg.pseudonym.digest_hex_len))?;

            #[derive(Serialize)]
            struct Row {
                value: String,
                pseudonym: String,
                masked: String,
            }
            let rows: Vec<Row> = values
                .into_iter()
                .map(|value| Row {
                    pseudonym: pseudonymizer.pseudonymize(&value),
                    masked: mask(&value, MaskStyle::PreservePrefix(keep, '*')),
                    value,
                })
                .collect();

            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "salt": pseudonymizer.salt().to_hex(),
                        "rows": rows,
                    }))?
                );
            } else {
                println!("salt {}", pseudonymizer.salt().to_hex());
                rows.iter()
                    .for_each(|r| println!("{:<24} {:<24} {}", r.value, r.masked, r.pseudonym));
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<LabConfig> {
    let Some(path) = path else {
        return Ok(LabConfig::default());
    };
    let text: String =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text: String =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read records {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse records {}", path.display()))
}

fn parse_seed(s: &str) -> Result<[u8; SEED_BYTES]> {
    let bytes: Vec<u8> = hex::decode(s.trim()).context("Seed is not valid hex")?;
    <[u8; SEED_BYTES]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow!("Seed must be {} bytes, got {}", SEED_BYTES, bytes.len()))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use privlab_core::anonymity::Record;

    use super::{Args, parse_seed};

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn seeds() {
        let hex64: String = "ab".repeat(32);
        assert_eq!(parse_seed(&hex64).unwrap(), [0xab; 32]);
        assert!(parse_seed("abcd").is_err());
        assert!(parse_seed("zz").is_err());
    }

    #[test]
    fn records_file_format() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[{"age": 23, "postal_code": "13011", "category": "flu"}]"#).unwrap();
        assert_eq!(records, vec![Record::new(23, "13011", "flu")]);
    }

    #[test]
    fn negative_numbers_reach_validation() {
        use clap::Parser;
        let args: Args = Args::try_parse_from(["privlab", "anonymize", "--age-width", "-3"]).unwrap();
        assert!(matches!(args.command, super::Command::Anonymize { age_width: -3, .. }));
    }
}
