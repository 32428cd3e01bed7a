//! # Quote Subcommand
//!
//! Prices one cart against a rate pack and prints the `QuoteResult` as
//! pretty JSON. The cart comes either from a JSON `QuoteInput` file or from
//! inline flags.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use shiprate_core::{ItemDim, Method, QuoteInput, QuoteResult};
use shiprate_engine::QuoteEngine;

use crate::PackSource;

/// Arguments for the `shiprate quote` subcommand.
#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub source: PackSource,

    /// JSON file holding a `QuoteInput`.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["postal", "method", "items", "subtotal", "producer"]
    )]
    pub input: Option<PathBuf>,

    /// Destination postal code.
    #[arg(long)]
    pub postal: Option<String>,

    /// Delivery method: HOME, PICKUP, LOCKER, COURIER or COURIER_COD.
    #[arg(long)]
    pub method: Option<Method>,

    /// Order line, e.g. `qty=2,weight=1.5,length=50,width=40,height=30`.
    #[arg(long = "item", value_name = "SPEC", value_parser = parse_item)]
    pub items: Vec<ItemDim>,

    /// Pre-tax order subtotal.
    #[arg(long)]
    pub subtotal: Option<f64>,

    /// Producer id, echoed into the input only.
    #[arg(long)]
    pub producer: Option<String>,
}

/// Parse an `--item` spec of comma-separated `key=value` pairs.
///
/// Keys are `qty` (default 1), `weight`, `length`, `width` and `height`.
pub fn parse_item(spec: &str) -> Result<ItemDim, String> {
    let mut item = ItemDim {
        qty: 1,
        ..ItemDim::default()
    };
    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got {part:?}"))?;
        let key = key.trim();
        let value = value.trim();
        if key == "qty" {
            item.qty = value
                .parse()
                .map_err(|_| format!("qty must be a whole number, got {value:?}"))?;
            continue;
        }
        let number: f64 = value
            .parse()
            .map_err(|_| format!("{key} must be a number, got {value:?}"))?;
        match key {
            "weight" => item.weight_kg = Some(number),
            "length" => item.length_cm = Some(number),
            "width" => item.width_cm = Some(number),
            "height" => item.height_cm = Some(number),
            other => return Err(format!("unknown item field {other:?}")),
        }
    }
    Ok(item)
}

/// Assemble the `QuoteInput` from a file or the inline flags, and check it.
pub fn build_input(args: &QuoteArgs) -> Result<QuoteInput> {
    let input = match &args.input {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read quote input {}", path.display()))?;
            serde_json::from_str::<QuoteInput>(&content)
                .with_context(|| format!("failed to parse quote input {}", path.display()))?
        }
        None => {
            let Some(postal) = &args.postal else {
                bail!("--postal is required without --input");
            };
            let Some(method) = args.method else {
                bail!("--method is required without --input");
            };
            let input = args.items.iter().cloned().fold(
                QuoteInput::new(postal.clone(), method, args.subtotal.unwrap_or(0.0)),
                QuoteInput::with_item,
            );
            match &args.producer {
                Some(producer) => input.with_producer(producer.clone()),
                None => input,
            }
        }
    };
    input.validate().context("invalid quote input")?;
    Ok(input)
}

/// Load the pack and price the requested cart.
pub fn build_quote(args: &QuoteArgs) -> Result<QuoteResult> {
    let input = build_input(args)?;
    let pack = args.source.load().context("failed to load rate pack")?;
    for warning in &pack.warnings {
        tracing::debug!(%warning, "pricing with pack warning");
    }
    Ok(QuoteEngine::new(pack.policy).quote(&pack.config, &input))
}

/// Execute the quote subcommand.
pub fn run_quote(args: &QuoteArgs) -> Result<u8> {
    let result = build_quote(args)?;
    let json = serde_json::to_string_pretty(&result).context("failed to serialize quote")?;
    println!("{json}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        args: QuoteArgs,
    }

    #[test]
    fn item_spec_parses_every_field() {
        let item = parse_item("qty=2, weight=1.5,length=50,width=40,height=30").unwrap();
        assert_eq!(item, ItemDim::weighing(2, 1.5).with_dimensions(50.0, 40.0, 30.0));
    }

    #[test]
    fn item_quantity_defaults_to_one() {
        assert_eq!(parse_item("weight=2").unwrap(), ItemDim::weighing(1, 2.0));
    }

    #[test]
    fn item_spec_errors() {
        assert!(parse_item("weight").unwrap_err().contains("key=value"));
        assert!(parse_item("qty=-1").unwrap_err().contains("whole number"));
        assert!(parse_item("weight=heavy").unwrap_err().contains("weight"));
        assert!(parse_item("colour=3").unwrap_err().contains("colour"));
    }

    #[test]
    fn inline_flags_build_input() {
        let h = Harness::try_parse_from([
            "t", "--pack", "p.yaml", "--postal", "10671", "--method", "courier-cod",
            "--item", "qty=1,weight=2", "--item", "weight=0.5", "--subtotal", "20",
            "--producer", "p-7",
        ])
        .unwrap();

        let input = build_input(&h.args).unwrap();
        assert_eq!(input.method, Method::CourierCod);
        assert_eq!(input.items.len(), 2);
        assert_eq!(input.subtotal, 20.0);
        assert_eq!(input.producer_id.as_deref(), Some("p-7"));
    }

    #[test]
    fn input_file_conflicts_with_inline_flags() {
        let parsed = Harness::try_parse_from([
            "t", "--pack", "p.yaml", "--input", "q.json", "--postal", "10671",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_method_is_a_usage_error() {
        let parsed = Harness::try_parse_from(["t", "--pack", "p.yaml", "--method", "DRONE"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_postal_or_items_rejected() {
        let h = Harness::try_parse_from(["t", "--pack", "p.yaml", "--method", "HOME"]).unwrap();
        assert!(build_input(&h.args).unwrap_err().to_string().contains("--postal"));

        let h = Harness::try_parse_from([
            "t", "--pack", "p.yaml", "--postal", "1", "--method", "HOME",
        ])
        .unwrap();
        let err = build_input(&h.args).unwrap_err();
        assert!(format!("{err:#}").contains("no items"));
    }
}
