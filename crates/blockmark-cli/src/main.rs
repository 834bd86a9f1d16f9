//! blockmark - convert JSON content records to Markdown or HTML

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use blockmark::{parse_records, Converter, Options, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "blockmark")]
#[command(version, about = "Convert JSON content records to Markdown or HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    blockmark -s page.json -d page.md      Write Markdown
    blockmark -s page.json -d page.html    Write HTML with heading ids")]
struct Cli {
    /// Source JSON file: an array of {"type", "content"} records
    #[arg(short, long, value_name = "JSON")]
    source: PathBuf,

    /// Output file; its extension (md or html) selects the format.
    /// Created if missing, the directory must exist.
    #[arg(short, long, value_name = "OUTPUT")]
    destination: PathBuf,

    /// Leave { } [ ] ( ) in text unescaped
    #[arg(long)]
    no_escape_brackets: bool,

    /// Prefix for ids given to top-level headings in HTML output
    #[arg(long, value_name = "PREFIX", default_value = "header")]
    heading_prefix: String,

    /// Log what is being converted
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            escape_brackets: !self.no_escape_brackets,
            heading_id_prefix: self.heading_prefix.clone(),
            ..Default::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    check_source(&cli.source)?;
    let format = output_format(&cli.destination)?;
    check_destination(&cli.destination)?;

    let json = fs::read_to_string(&cli.source)
        .with_context(|| format!("cannot read '{}'", cli.source.display()))?;
    let records = parse_records(&json)
        .with_context(|| format!("cannot parse '{}'", cli.source.display()))?;
    log::info!("read {} records from {}", records.len(), cli.source.display());

    let converter = Converter::with_options(cli.options());
    let output = converter
        .convert(&records, format)
        .with_context(|| format!("cannot convert '{}'", cli.source.display()))?;

    fs::write(&cli.destination, output)
        .with_context(|| format!("cannot write '{}'", cli.destination.display()))?;
    log::info!("wrote {:?} to {}", format, cli.destination.display());

    Ok(())
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
}

fn check_source(path: &Path) -> Result<()> {
    if !path.is_file() {
        bail!("file '{}' does not exist", path.display());
    }
    let ext = extension(path);
    if ext != "json" {
        bail!("unexpected extension of source file: '{ext}', supported: json");
    }
    Ok(())
}

fn output_format(path: &Path) -> Result<OutputFormat> {
    let ext = extension(path);
    OutputFormat::from_extension(ext).with_context(|| {
        format!(
            "unexpected extension: '{ext}', required one of: {}",
            OutputFormat::EXTENSIONS.join(", ")
        )
    })
}

/// The destination must be creatable; an existing file is left untouched here.
fn check_destination(path: &Path) -> Result<()> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("cannot open '{}' for writing", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(source: PathBuf, destination: PathBuf) -> Cli {
        Cli {
            source,
            destination,
            no_escape_brackets: false,
            heading_prefix: "header".to_string(),
            verbose: false,
        }
    }

    fn write_source(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("input.json");
        fs::write(&path, json).unwrap();
        path
    }

    const INPUT: &str = r#"[
        {"type": "Title", "content": "Hi"},
        {"type": "Text", "content": "[a](b)"}
    ]"#;

    #[test]
    fn test_markdown_output() {
        let dir = TempDir::new().unwrap();
        let source = write_source(&dir, INPUT);
        let destination = dir.path().join("out.md");

        run(&cli(source, destination.clone())).unwrap();

        let written = fs::read_to_string(destination).unwrap();
        assert_eq!(written, "# Hi\n\n&#91;a&#93;&#40;b&#41;\n\n");
    }

    #[test]
    fn test_html_output() {
        let dir = TempDir::new().unwrap();
        let source = write_source(&dir, INPUT);
        let destination = dir.path().join("out.html");

        run(&cli(source, destination.clone())).unwrap();

        let written = fs::read_to_string(destination).unwrap();
        assert!(written.starts_with("<h1 id=\"header0\">Hi</h1>"));
    }

    #[test]
    fn test_options_from_flags() {
        let dir = TempDir::new().unwrap();
        let source = write_source(&dir, INPUT);
        let destination = dir.path().join("out.md");
        let mut args = cli(source, destination.clone());
        args.no_escape_brackets = true;

        run(&args).unwrap();

        let written = fs::read_to_string(destination).unwrap();
        assert_eq!(written, "# Hi\n\n[a](b)\n\n");
    }

    #[test]
    fn test_missing_source() {
        let dir = TempDir::new().unwrap();
        let err = run(&cli(dir.path().join("nope.json"), dir.path().join("out.md"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_source_extension() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("input.txt");
        fs::write(&source, INPUT).unwrap();
        let err = run(&cli(source, dir.path().join("out.md"))).unwrap_err();
        assert!(err.to_string().contains("supported: json"));
    }

    #[test]
    fn test_destination_extension() {
        let dir = TempDir::new().unwrap();
        let source = write_source(&dir, INPUT);
        let err = run(&cli(source, dir.path().join("out.txt"))).unwrap_err();
        assert!(err.to_string().contains("required one of: md, html"));
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_destination_directory_missing() {
        let dir = TempDir::new().unwrap();
        let source = write_source(&dir, INPUT);
        let err = run(&cli(source, dir.path().join("missing").join("out.md"))).unwrap_err();
        assert!(err.to_string().contains("cannot open"));
    }

    #[test]
    fn test_invalid_record_leaves_destination_empty() {
        let dir = TempDir::new().unwrap();
        let source = write_source(&dir, r#"[{"type": "Title", "content": "ok"}, {"type": "Nope", "content": "x"}]"#);
        let destination = dir.path().join("out.md");

        let err = run(&cli(source, destination.clone())).unwrap_err();

        assert!(format!("{err:#}").contains("unknown content type `Nope`"));
        assert_eq!(fs::read_to_string(destination).unwrap(), "");
    }
}
