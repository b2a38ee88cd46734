//! Rendering of batch and self-test results
//!
//! Everything here writes to an `impl Write` so the binary prints to stdout and the tests
//! render into a buffer. Labels come from the configuration; the defaults are the
//! `valida`/`invalida` pair.

use serde::Serialize;
use std::io::{self, Write};
use wff_config::{OutputFormat, WffConfig};
use wff_parser::wff::formats::to_treeviz_str;
use wff_parser::wff::loader::{Batch, BatchEntry};
use wff_parser::wff::token::format_trace;
use wff_parser::{check, tokens, validate, Token};

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    line: usize,
    expression: Option<&'a str>,
    valid: bool,
    tokens: Vec<Token>,
}

pub struct Reporter<'a> {
    config: &'a WffConfig,
    debug: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(config: &'a WffConfig, debug: bool) -> Self {
        Reporter { config, debug }
    }

    /// Writes one result per declared entry, in the configured format.
    pub fn write_batch<W: Write>(&self, out: &mut W, path: &str, batch: &Batch) -> io::Result<()> {
        let format = self.config.output.format;
        if format == OutputFormat::Json {
            return self.write_json(out, batch);
        }

        if self.debug {
            writeln!(out, "File: {}", path)?;
            writeln!(out, "Declared expressions: {}", batch.declared)?;
            writeln!(out, "Lines in file: {}", batch.line_count)?;
        }
        for entry in &batch.entries {
            self.write_entry(out, entry, format)?;
        }
        Ok(())
    }

    /// Runs each expression and prints its token trace and result.
    pub fn write_self_test<W: Write>(&self, out: &mut W, expressions: &[&str]) -> io::Result<()> {
        for expression in expressions {
            writeln!(out, "\nTesting expression: '{}'", expression)?;
            writeln!(out, "Tokens: {}", format_trace(&tokens(expression)))?;
            writeln!(out, "Result: {}", self.config.output.label(validate(expression)))?;
        }
        Ok(())
    }

    fn write_entry<W: Write>(&self, out: &mut W, entry: &BatchEntry, format: OutputFormat) -> io::Result<()> {
        let formula = entry.expression().and_then(check);
        if self.debug {
            self.write_debug_header(out, entry, format)?;
        }

        match format {
            OutputFormat::Tokens => {
                let trace = entry.expression().map(|e| format_trace(&tokens(e))).unwrap_or_default();
                writeln!(out, "{}", trace)?;
            }
            OutputFormat::Tree => {
                if let Some(formula) = &formula {
                    write!(out, "{}", to_treeviz_str(formula))?;
                }
            }
            OutputFormat::Plain | OutputFormat::Json => {}
        }

        writeln!(out, "{}", self.config.output.label(formula.is_some()))
    }

    fn write_debug_header<W: Write>(&self, out: &mut W, entry: &BatchEntry, format: OutputFormat) -> io::Result<()> {
        match entry {
            BatchEntry::Present { index, expression } => {
                writeln!(out, "\n--- Expression {}: '{}' ---", index, expression)?;
                // tokens format prints the trace anyway
                if self.config.debug.show_tokens && format != OutputFormat::Tokens {
                    writeln!(out, "Tokens: {}", format_trace(&tokens(expression)))?;
                }
                Ok(())
            }
            BatchEntry::Missing { index } => {
                writeln!(out, "\n--- Expression {}: [not found in file] ---", index)
            }
        }
    }

    fn write_json<W: Write>(&self, out: &mut W, batch: &Batch) -> io::Result<()> {
        let entries: Vec<JsonEntry> = batch
            .entries
            .iter()
            .map(|entry| JsonEntry {
                line: entry.index(),
                expression: entry.expression(),
                valid: entry.is_valid(),
                tokens: entry.expression().map(tokens).unwrap_or_default(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wff_parser::wff::loader::ExpressionLoader;

    fn config_with(format: OutputFormat) -> WffConfig {
        let mut config = wff_config::load_defaults().expect("defaults to load");
        config.output.format = format;
        config
    }

    fn render(config: &WffConfig, debug: bool, source: &str) -> String {
        let batch = ExpressionLoader::from_string(source).batch().expect("batch to parse");
        let mut out = Vec::new();
        Reporter::new(config, debug)
            .write_batch(&mut out, "batch.txt", &batch)
            .expect("render to buffer");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn test_plain_output() {
        let config = config_with(OutputFormat::Plain);
        let output = render(&config, false, "3\n(\\neg p0)\np\n");
        assert_eq!(output, "valida\ninvalida\ninvalida\n");
    }

    #[test]
    fn test_custom_labels() {
        let mut config = config_with(OutputFormat::Plain);
        config.output.valid_label = "yes".to_string();
        config.output.invalid_label = "no".to_string();
        assert_eq!(render(&config, false, "2\ntrue\nfalse true\n"), "yes\nno\n");
    }

    #[test]
    fn test_debug_output() {
        let config = config_with(OutputFormat::Plain);
        let output = render(&config, true, "2\n(\\neg p0)\n");
        assert!(output.starts_with("File: batch.txt\nDeclared expressions: 2\nLines in file: 2\n"));
        assert!(output.contains("--- Expression 1: '(\\neg p0)' ---"));
        assert!(output.contains(
            "Tokens: OPEN_PAREN('(') UNARY_OPERATOR('\\neg') PROPOSITION('p0') CLOSE_PAREN(')')\nvalida\n"
        ));
        assert!(output.contains("--- Expression 2: [not found in file] ---\ninvalida\n"));
    }

    #[test]
    fn test_debug_output_without_tokens() {
        let mut config = config_with(OutputFormat::Plain);
        config.debug.show_tokens = false;
        let output = render(&config, true, "1\np0\n");
        assert!(!output.contains("Tokens:"));
        assert!(output.ends_with("--- Expression 1: 'p0' ---\nvalida\n"));
    }

    #[test]
    fn test_tokens_output() {
        let config = config_with(OutputFormat::Tokens);
        let output = render(&config, false, "2\np0\n&\n");
        assert_eq!(output, "PROPOSITION('p0')\nvalida\nERROR('&')\ninvalida\n");
    }

    #[test]
    fn test_tree_output() {
        let config = config_with(OutputFormat::Tree);
        let output = render(&config, false, "2\n(\\neg p0)\n(\\neg)\n");
        assert_eq!(output, "¬ neg\n  ◦ p0\nvalida\ninvalida\n");
    }

    #[test]
    fn test_json_output() {
        let config = config_with(OutputFormat::Json);
        let output = render(&config, true, "2\ntrue\n");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value[0]["line"], 1);
        assert_eq!(value[0]["expression"], "true");
        assert_eq!(value[0]["valid"], true);
        assert_eq!(value[0]["tokens"][0]["kind"], "CONSTANT");
        assert_eq!(value[1]["expression"], serde_json::Value::Null);
        assert_eq!(value[1]["valid"], false);
    }

    #[test]
    fn test_self_test_output() {
        let config = config_with(OutputFormat::Plain);
        let mut out = Vec::new();
        Reporter::new(&config, false)
            .write_self_test(&mut out, &["p0", "p"])
            .expect("render to buffer");
        let output = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(
            output,
            "\nTesting expression: 'p0'\nTokens: PROPOSITION('p0')\nResult: valida\n\
             \nTesting expression: 'p'\nTokens: ERROR('p')\nResult: invalida\n"
        );
    }
}
