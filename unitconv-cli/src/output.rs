//! Text and JSON rendering of results, unit listings and errors

use serde::Serialize;
use unitconv_core::{ConversionError, ConversionPath, ErrorReport, UnitInfo};
use unitconv_plugin::Engine;

use crate::CliError;

/// One converted value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub input: f64,
    pub output: f64,
}

/// Everything printed for a successful run
#[derive(Debug, Serialize)]
pub struct ConversionReport<'a> {
    pub from: &'a UnitInfo,
    pub to: &'a UnitInfo,
    pub path: Vec<&'a str>,
    pub results: Vec<Conversion>,
}

impl ConversionReport<'_> {
    /// `<input> <from-symbol> = <output> <to-symbol>`, one line per value
    pub fn text_lines(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|c| format!("{} = {}", self.from.format_value(c.input), self.to.format_value(c.output)))
            .collect()
    }

    pub fn path_line(&self) -> String {
        if self.path.is_empty() {
            "path: (identity)".to_string()
        } else {
            format!("path: {}", self.path.join(" -> "))
        }
    }
}

pub fn build_report<'a>(
    engine: &Engine,
    from: &'a UnitInfo,
    to: &'a UnitInfo,
    path: &'a ConversionPath,
    inputs: &[f64],
) -> ConversionReport<'a> {
    let results = inputs
        .iter()
        .map(|&input| Conversion { input, output: engine.apply(path, input) })
        .collect();
    ConversionReport { from, to, path: path.edge_names(), results }
}

/// A unit as shown by `--list`
#[derive(Debug, Serialize)]
pub struct UnitListing<'a> {
    pub name: &'a str,
    pub symbol: &'a str,
    pub category: &'a str,
    pub aliases: Vec<&'a str>,
}

pub fn unit_listing(engine: &Engine) -> Vec<UnitListing<'_>> {
    engine
        .units()
        .map(|(unit, info)| UnitListing {
            name: &info.name,
            symbol: &info.symbol,
            category: &info.category,
            aliases: engine.aliases(unit),
        })
        .collect()
}

pub fn listing_lines(listing: &[UnitListing<'_>]) -> Vec<String> {
    listing
        .iter()
        .map(|u| {
            let mut line = format!("{:<12} {:<4} {}", u.name, u.symbol, u.category);
            if !u.aliases.is_empty() {
                line.push_str(&format!("  (also: {})", u.aliases.join(", ")));
            }
            line
        })
        .collect()
}

/// Error message with unit ids replaced by names
pub fn describe_error(engine: &Engine, err: &CliError) -> String {
    match err {
        CliError::Conversion(ConversionError::NoConversionPath { from, to }) => {
            format!("can't convert {} to {}", engine.unit_name(*from), engine.unit_name(*to))
        }
        other => other.to_string(),
    }
}

/// Lines written to stderr for a failed run
pub fn error_lines(engine: &Engine, err: &CliError) -> Vec<String> {
    let mut lines = vec![format!("error: {}", describe_error(engine, err))];

    if let CliError::Conversion(ConversionError::UnknownUnit { name }) = err {
        let similar = engine.similar_names(name);
        if !similar.is_empty() {
            let shown: Vec<&str> = similar.into_iter().take(5).collect();
            lines.push(format!("did you mean: {}", shown.join(", ")));
        }
        lines.push(format!("available units are: {}", engine.names().join(", ")));
    }

    lines
}

/// JSON body for a failed run
pub fn error_json(engine: &Engine, err: &CliError) -> serde_json::Value {
    let report = match err {
        CliError::Conversion(e) => ErrorReport {
            message: describe_error(engine, err),
            ..e.to_report()
        },
        CliError::Io(e) => ErrorReport {
            code: "IO_ERROR".to_string(),
            message: e.to_string(),
            suggestion: None,
        },
    };

    let mut body = serde_json::json!({ "error": report });
    if matches!(err, CliError::Conversion(ConversionError::UnknownUnit { .. })) {
        body["available"] = serde_json::json!(engine.names());
    }
    body
}
