mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::Value;
use tracing::info;

use claimmap::{
    DocumentFormat, MappingUI, OutputDestination, OutputOptions, UiOptions, load_attributes,
    load_mappings, parse_document_str,
};

#[derive(Debug, Parser)]
#[command(
    name = "claimmap",
    version,
    about = "Edit identity-verification claim mappings in the terminal"
)]
struct Cli {
    /// Local attribute catalogue: file path, inline payload, or "-" for stdin
    #[arg(short = 'a', long = "attributes", value_name = "SPEC")]
    attributes: String,

    /// Existing mappings: file path, inline payload, or "-" for stdin
    #[arg(short = 'm', long = "mappings", value_name = "SPEC")]
    mappings: Option<String>,

    /// Open the mapping with this external attribute for editing
    #[arg(short = 'e', long = "edit", value_name = "EXTERNAL")]
    edit: Option<String>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations ("-" writes to stdout). Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Output format; inferred from the first output file when omitted
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<String>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Quit immediately even with unsubmitted changes
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Hide the list of existing mappings beside the form
    #[arg(long = "hide-list")]
    hide_list: bool,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init_logging(cli.log_file.as_deref(), cli.verbose)?;

    if cli.attributes == "-" && cli.mappings.as_deref() == Some("-") {
        return Err(eyre!(
            "cannot read attributes and mappings from stdin simultaneously"
        ));
    }

    let attributes = load_value(&cli.attributes, "attributes")
        .and_then(|doc| load_attributes(&doc).map_err(Report::msg))?;
    let mappings = match cli.mappings.as_deref() {
        Some(spec) => load_value(spec, "mappings")
            .and_then(|doc| load_mappings(&doc).map_err(Report::msg))?,
        None => Vec::new(),
    };
    info!(
        attributes = attributes.len(),
        mappings = mappings.len(),
        "inputs loaded"
    );

    let output = build_output_options(&cli)?;

    let options = UiOptions::default()
        .with_confirm_exit(!cli.no_confirm_exit)
        .with_mapping_list(!cli.hide_list);
    let mut ui = MappingUI::new(attributes, mappings)
        .with_options(options)
        .with_output(output);
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }
    if let Some(external) = cli.edit.as_ref() {
        ui = ui.with_edit(external.clone());
    }

    let _ = ui.run().map_err(Report::msg)?;
    Ok(())
}

fn load_value(spec: &str, label: &str) -> Result<Value> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        return parse_contents(&buffer, DocumentFormat::Json, label);
    }

    let path = Path::new(spec);
    let format = DocumentFormat::from_path(path).unwrap_or(DocumentFormat::Json);
    match fs::read_to_string(path) {
        Ok(contents) => parse_contents(&contents, format, label),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            parse_contents(spec, DocumentFormat::Json, &format!("inline {label}"))
        }
        Err(err) => {
            Err(err).wrap_err_with(|| format!("failed to load {label} from {}", path.display()))
        }
    }
}

/// Try the hinted format first, then every other compiled-in format.
fn parse_contents(contents: &str, format: DocumentFormat, label: &str) -> Result<Value> {
    match parse_document_str(contents, format) {
        Ok(value) => Ok(value),
        Err(primary) => available_formats()
            .into_iter()
            .filter(|candidate| *candidate != format)
            .find_map(|candidate| parse_document_str(contents, candidate).ok())
            .ok_or_else(|| eyre!("failed to parse {label}: {primary}")),
    }
}

fn available_formats() -> Vec<DocumentFormat> {
    let mut formats = vec![DocumentFormat::Json];
    #[cfg(feature = "yaml")]
    formats.push(DocumentFormat::Yaml);
    #[cfg(feature = "toml")]
    formats.push(DocumentFormat::Toml);
    formats
}

fn build_output_options(cli: &Cli) -> Result<OutputOptions> {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
            continue;
        }
        let path = PathBuf::from(raw);
        if path.exists() && !cli.force {
            return Err(eyre!(
                "output file {} already exists; pass --force to overwrite",
                path.display()
            ));
        }
        destinations.push(OutputDestination::File(path));
    }
    if destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }

    let format = match cli.format.as_deref() {
        Some(name) => DocumentFormat::from_extension(name)
            .ok_or_else(|| eyre!("unsupported output format '{name}'"))?,
        None => destinations
            .iter()
            .find_map(|dest| match dest {
                OutputDestination::File(path) => DocumentFormat::from_path(path),
                OutputDestination::Stdout => None,
            })
            .unwrap_or(DocumentFormat::Json),
    };

    Ok(OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["claimmap", "--attributes", "[]"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn inline_payloads_are_parsed() {
        let value = load_value(r#"[{"id":"a1"}]"#, "attributes").unwrap();
        assert_eq!(load_attributes(&value).unwrap()[0].id, "a1");
    }

    #[test]
    fn output_defaults_to_stdout_json() {
        let options = build_output_options(&cli(&[])).unwrap();
        assert_eq!(options.destinations, vec![OutputDestination::Stdout]);
        assert_eq!(options.format, DocumentFormat::Json);
        assert!(options.pretty);
    }

    #[test]
    fn explicit_format_must_be_known() {
        assert!(build_output_options(&cli(&["--format", "xml"])).is_err());
    }

    #[test]
    fn existing_output_requires_force() {
        let path = std::env::temp_dir().join(format!("claimmap-cli-{}.json", std::process::id()));
        fs::write(&path, "[]").unwrap();
        let target = path.to_string_lossy().to_string();
        assert!(build_output_options(&cli(&["-o", target.as_str()])).is_err());
        let options = build_output_options(&cli(&["-o", target.as_str(), "--force"])).unwrap();
        assert_eq!(options.destinations, vec![OutputDestination::File(path.clone())]);
        let _ = fs::remove_file(path);
    }
}
