use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use tfidf_summary::{
    document::read_document,
    error::{Error, Result},
    pagination::{Page, ROWS_PER_PAGE},
    report::{render_json, render_navigation, render_text},
    session::Session,
    DocumentFrequency, Options, TfIdf,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Plain-text document to summarise
    file: PathBuf,

    /// Page to show (1-indexed)
    #[arg(long, default_value = "1")]
    page: usize,

    /// Rows per page
    #[arg(long, default_value_t = ROWS_PER_PAGE)]
    rows_per_page: usize,

    /// Print the page as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Count a sentence toward document frequency only when the word is one of its tokens
    #[arg(long, default_value = "false")]
    token_membership: bool,

    /// Page through the table interactively
    #[arg(short, long, default_value = "false")]
    interactive: bool,

    /// Log kernel details to stderr
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let document_frequency = if args.token_membership {
        DocumentFrequency::Token
    } else {
        DocumentFrequency::Substring
    };

    let kernel = TfIdf::with_options(Options {
        document_frequency,
        ..Options::default()
    })?;

    let mut session = Session::new(args.rows_per_page);
    upload(&kernel, &mut session, &args.file)?;

    if args.interactive {
        return pager(&kernel, &mut session, args.page);
    }

    let page = session.view(args.page);
    if page.rows.is_empty() && !session.is_empty() {
        return Err(Error::PageOutOfRange {
            page: args.page,
            total_pages: session.total_pages(),
        });
    }

    print_page(&page, args.json)
}

fn upload(kernel: &TfIdf, session: &mut Session, path: &Path) -> Result<()> {
    let document = read_document(path)?;

    let start = std::time::Instant::now();
    let table = kernel.compute(&document);
    info!(
        path = %path.display(),
        rows = table.len(),
        elapsed = ?start.elapsed(),
        "Computed tf-idf table"
    );

    session.upload(table);

    Ok(())
}

fn print_page(page: &Page<'_>, json: bool) -> Result<()> {
    let rendered = if json {
        render_json(page)?
    } else {
        render_text(page)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())?;
    stdout.flush()?;

    Ok(())
}

fn pager(kernel: &TfIdf, session: &mut Session, mut current_page: usize) -> Result<()> {
    let mut buffer = String::new();
    let mut stdin = io::stdin().lock();

    show_page(&session.view(current_page))?;
    println!("Commands: n, p, <page>, load <path>, reset, exit");

    loop {
        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }

        let command = buffer.trim();
        match command {
            "exit" | "quit" => break,
            "n" | "next" => {
                if !session.view(current_page).has_next() {
                    println!("Already on the last page");
                    continue;
                }
                current_page += 1;
            }
            "p" | "prev" => {
                if !session.view(current_page).has_previous() {
                    println!("Already on the first page");
                    continue;
                }
                current_page -= 1;
            }
            "reset" => {
                session.reset();
                current_page = 1;
            }
            "" => continue,
            _ => {
                if let Some(path) = command.strip_prefix("load ") {
                    match upload(kernel, session, Path::new(path.trim())) {
                        Ok(()) => current_page = 1,
                        Err(e) => {
                            warn!("Failed to load {path}: {e}");
                            println!("Could not load '{}': {e}", path.trim());
                            continue;
                        }
                    }
                } else if let Ok(page) = command.parse() {
                    current_page = page;
                } else {
                    println!("Unknown command '{command}'");
                    continue;
                }
            }
        }

        show_page(&session.view(current_page))?;
    }

    Ok(())
}

fn show_page(page: &Page<'_>) -> Result<()> {
    print_page(page, false)?;

    let navigation = render_navigation(page);
    if !navigation.is_empty() {
        println!("{navigation}");
    }

    Ok(())
}
