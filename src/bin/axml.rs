//! axml CLI — Event-Script (JSON) → XML.

#[cfg(feature = "fast-alloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use axml::{events_to_xml_writer, parse_event_script, TranslatorOptions};
use clap::{Args, Parser, Subcommand};
use std::io::{IsTerminal, Read, Write};
use std::process;

#[derive(Parser)]
#[command(name = "axml", about = "Binary XML event stream -> XML text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render an event script (JSON) to XML
    Render(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Input event script (- for stdin)
    #[arg(short, long)]
    input: String,

    /// Output file (optional; without -o auto-derived, -o - = stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Reject unbalanced or mismatched end tags
    #[arg(long)]
    strict: bool,

    /// Resolve end tag namespaces to their prefix instead of the raw URI
    #[arg(long)]
    resolve_end_tag_prefix: bool,
}

impl RenderArgs {
    fn to_options(&self) -> TranslatorOptions {
        TranslatorOptions::default()
            .with_strict(self.strict)
            .with_resolve_end_tag_prefix(self.resolve_end_tag_prefix)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Fehler: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Render(args) => run_render(args),
    }
}

fn run_render(args: RenderArgs) -> Result<(), String> {
    let input = read_input(&args.input)?;
    let events = parse_event_script(&input).map_err(|e| e.to_string())?;
    let output_path = resolve_output_path(args.output.as_deref(), &args.input, "xml")?;
    let opts = args.to_options();

    write_to_output(&output_path, |writer| {
        events_to_xml_writer(&events, opts, writer).map_err(|e| e.to_string())
    })
}

fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        if std::io::stdin().is_terminal() {
            eprintln!("Lese von stdin (Ctrl+D zum Beenden)...");
        }
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Lesefehler (stdin): {e}"))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("Lesefehler '{}': {e}", path))
    }
}

fn resolve_output_path(explicit: Option<&str>, input: &str, ext: &str) -> Result<String, String> {
    if let Some(path) = explicit {
        return Ok(path.to_string());
    }
    if input == "-" {
        return Ok("-".to_string());
    }
    let path = std::path::Path::new(input);
    let stem = path.file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| "ungueltiger Eingabepfad".to_string())?;
    let parent = path.parent().unwrap_or_else(|| std::path::Path::new(""));
    Ok(parent.join(format!("{stem}.{ext}")).to_string_lossy().to_string())
}

/// Erstellt einen BufWriter fuer stdout oder eine Datei.
fn create_buf_writer(path: &str) -> Result<std::io::BufWriter<Box<dyn Write>>, String> {
    if path == "-" {
        Ok(std::io::BufWriter::new(Box::new(std::io::stdout())))
    } else {
        let file = std::fs::File::create(path)
            .map_err(|e| format!("Schreibfehler: {e}"))?;
        Ok(std::io::BufWriter::new(Box::new(file)))
    }
}

/// Schreibt Output entweder nach stdout ("-") oder atomar in eine Datei (tmp+rename).
///
/// Bei Datei-Output wird erst in eine .tmp-Datei geschrieben und bei Erfolg umbenannt.
fn write_to_output(
    output_path: &str,
    write_fn: impl FnOnce(std::io::BufWriter<Box<dyn Write>>) -> Result<(), String>,
) -> Result<(), String> {
    if output_path == "-" {
        return write_fn(create_buf_writer("-")?);
    }

    let tmp_path = format!("{output_path}.tmp");
    let writer = create_buf_writer(&tmp_path)?;
    if let Err(e) = write_fn(writer) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }
    std::fs::rename(&tmp_path, output_path)
        .map_err(|e| format!("Rename-Fehler: {e}"))
}
