use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use myddl::sql::keywords::Keywords;
use myddl::Statement;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Rust debug dump of the syntax tree
    Debug,
    /// Pretty-printed JSON
    Json,
    /// Re-emitted SQL
    Sql,
}

#[derive(Parser)]
#[command(name = "myddl", about = "MySQL DDL parser for CREATE TABLE and ALTER TABLE")]
struct Cli {
    /// Statements to parse (starts an interactive REPL if none and no --file)
    statements: Vec<String>,

    /// Read a script of statements from a file ("-" reads stdin)
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "debug")]
    format: Format,

    /// File of extra keywords added to the MySQL table
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Log parser activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "myddl=debug" } else { "myddl=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(stmt: &Statement, format: Format) -> Result<String, serde_json::Error> {
    Ok(match format {
        Format::Debug => format!("{:#?}", stmt),
        Format::Json => serde_json::to_string_pretty(stmt)?,
        Format::Sql => format!("{};", stmt),
    })
}

/// Parse and print every statement of `sql`. Returns false if any failed.
fn run_script(parser: &myddl::Parser<'_>, sql: &str, format: Format) -> bool {
    let mut ok = true;
    for (text, result) in parser.parse_script(sql) {
        let rendered = result.map_err(|e| e.to_string()).and_then(|stmt| {
            render(&stmt, format).map_err(|e| format!("JSON encoding failed: {}", e))
        });
        match rendered {
            Ok(out) => println!("{}", out),
            Err(e) => {
                tracing::warn!(statement = %text, "statement rejected");
                eprintln!("ERROR: {}", e);
                ok = false;
            }
        }
    }
    ok
}

fn run_repl(parser: &myddl::Parser<'_>, format: Format) {
    let mut rl = rustyline::DefaultEditor::new().unwrap_or_else(|e| {
        eprintln!("ERROR: Failed to initialize line editor: {}", e);
        process::exit(1);
    });

    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() {
            "myddl> "
        } else {
            "    -> "
        };

        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if buffer.is_empty() && (trimmed == "quit" || trimmed == "exit") {
                    break;
                }

                if !buffer.is_empty() {
                    buffer.push('\n');
                }
                buffer.push_str(&line);

                if !trimmed.ends_with(';') {
                    continue;
                }

                let sql = std::mem::take(&mut buffer);
                let _ = rl.add_history_entry(sql.trim());
                run_script(parser, &sql, format);
            }
            Err(ReadlineError::Interrupted) => {
                buffer.clear();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                break;
            }
        }
    }
}

fn read_file(path: &PathBuf) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded = cli.keywords.as_ref().map(|path| {
        Keywords::load(path).unwrap_or_else(|e| {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        })
    });
    let keywords = match &loaded {
        Some(keywords) => keywords,
        None => Keywords::mysql(),
    };
    let parser = myddl::Parser::with_keywords(keywords);

    let mut scripts = cli.statements.clone();
    if let Some(path) = &cli.file {
        match read_file(path) {
            Ok(text) => scripts.push(text),
            Err(e) => {
                eprintln!("ERROR: cannot read {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    if scripts.is_empty() {
        run_repl(&parser, cli.format);
        return;
    }

    let mut ok = true;
    for sql in &scripts {
        ok &= run_script(&parser, sql, cli.format);
    }
    if !ok {
        process::exit(1);
    }
}
