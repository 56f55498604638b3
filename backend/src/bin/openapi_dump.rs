//! Print the OpenAPI document for the user service.

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use user_service::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// `openapi-dump` command arguments.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the user service OpenAPI document", version)]
struct CliArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn render(format: Format) -> Result<String> {
    let doc = ApiDoc::openapi();
    let rendered = match format {
        Format::Json => doc.to_pretty_json()?,
        Format::Yaml => doc.to_yaml()?,
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    println!("{}", render(args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Format::Json, "\"operationId\": \"updateUser\"")]
    #[case(Format::Yaml, "operationId: updateUser")]
    fn output_lists_user_operations(#[case] format: Format, #[case] needle: &str) {
        let rendered = render(format).expect("document renders");
        assert!(rendered.contains(needle), "missing {needle} in output");
    }

    #[rstest]
    fn format_defaults_to_json() {
        let args = CliArgs::try_parse_from(["openapi-dump"]).expect("no flags needed");
        assert!(matches!(args.format, Format::Json));
    }
}
