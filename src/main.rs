use clap::Parser;
use error_stack::{Result, ResultExt};
use error_stack_derive::ErrorStack;

use resolution_registry::prelude::*;

#[derive(Debug, ErrorStack, PartialEq, Eq)]
#[error_message("Error occured in main fn")]
pub struct MainError;

#[derive(Parser)]
#[command(name = "resolution-registry")]
#[command(about = "Print the canonical dimensions of named resolution tiers")]
#[command(version)]
struct Cli {
    /// Tiers to print (HD, FHD, QHD, UHD); prints every tier when omitted
    tiers: Vec<String>,
}

fn main() -> Result<(), MainError> {
    // RUST_LOG controls the level, e.g. RUST_LOG=resolution_registry=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    for tier in parse_tiers(&cli.tiers)? {
        println!("{}", tier_line(tier));
    }
    Ok(())
}

fn parse_tiers(tags: &[String]) -> Result<Vec<ResolutionType>, MainError> {
    //! No tags means every tier.
    if tags.is_empty() {
        return Ok(ResolutionType::ALL.to_vec());
    }
    tags.iter()
        .map(|tag| {
            tag.parse::<ResolutionType>()
                .change_context(MainError)
                .attach_printable_lazy(|| "Failed to parse tier argument")
        })
        .collect()
}

fn tier_line(tier: ResolutionType) -> String {
    let resolution = RESOLUTION_MAP[tier];
    let (w, h) = resolution.aspect_ratio();
    format!("{tier}\t{resolution}\t{w}:{h}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|tag| tag.to_string()).collect()
    }

    #[test]
    fn no_arguments_prints_every_tier() {
        assert_eq!(parse_tiers(&[]).ok(), Some(ResolutionType::ALL.to_vec()));
    }

    #[test]
    fn parses_tags_in_order() {
        assert_eq!(
            parse_tiers(&tags(&["UHD", "HD"])).ok(),
            Some(vec![ResolutionType::UHD, ResolutionType::HD])
        );
    }

    #[test]
    fn formats_tier_line() {
        assert_eq!(tier_line(ResolutionType::FHD), "FHD\t1920x1080\t16:9");
        let lines: Vec<_> = parse_tiers(&tags(&["FHD"]))
            .unwrap()
            .into_iter()
            .map(tier_line)
            .collect();
        assert_eq!(lines, ["FHD\t1920x1080\t16:9"]);
    }

    #[test]
    fn unknown_tag_fails_with_tier_error() {
        let report = parse_tiers(&tags(&["FHD", "hd"])).unwrap_err();
        assert_eq!(report.current_context(), &MainError);
        assert!(report.contains::<UnknownResolutionTier>());
    }
}
