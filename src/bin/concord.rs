//! Command-line interface for concord
//!
//! Reads a local data directory (translation CSVs, Strong's dictionaries,
//! commentaries) and answers study queries against it.
//!
//! Usage:
//!   concord read `<book>` `<chapter>` [-t `<translation>`]   - Print one chapter
//!   concord search `<term>` [-t `<translation>`]           - Full-text search
//!   concord dict `<query>` [--language greek|hebrew]     - Search the lexicon
//!   concord lookup `<id>` [--strategy scan|indexed]      - Resolve a concordance
//!   concord commentary `<book>` `<chapter>` [--author]     - Chapter commentaries

use std::path::Path;
use std::process;

use clap::{Arg, ArgMatches, Command};
use serde::Serialize;

use concord::bootstrap::{bootstrap, Catalog, StudyData};
use concord::commentary::{decode_chapter, decode_verse};
use concord::concordance::LookupStrategy;
use concord::lexicon::Language;
use concord::{books, Citation};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("concord")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A study tool for Bible texts: reading, search, lexicon and concordance")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .default_value("data")
                .help("Directory holding translation CSVs, dictionaries and commentaries"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .default_value("text")
                .help("Output format: 'text', 'json' or 'yaml'"),
        )
        .subcommand(
            Command::new("read")
                .about("Print one chapter of a translation")
                .arg(Arg::new("book").help("Book abbreviation, e.g. 'jo'").required(true).index(1))
                .arg(Arg::new("chapter").help("Chapter number").required(true).index(2))
                .arg(
                    Arg::new("translation")
                        .long("translation")
                        .short('t')
                        .help("Translation id (defaults to the plain translation)"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Full-text search within a translation")
                .arg(Arg::new("term").help("Term to search for").required(true).index(1))
                .arg(
                    Arg::new("translation")
                        .long("translation")
                        .short('t')
                        .help("Translation id (defaults to the plain translation)"),
                ),
        )
        .subcommand(
            Command::new("dict")
                .about("Search a Strong's lexicon")
                .arg(Arg::new("query").help("Query term; empty lists everything").required(true).index(1))
                .arg(
                    Arg::new("language")
                        .long("language")
                        .short('l')
                        .default_value("greek")
                        .help("Lexicon to search: 'greek' or 'hebrew'"),
                ),
        )
        .subcommand(
            Command::new("lookup")
                .about("Resolve the full concordance of a lexicon identifier")
                .arg(Arg::new("id").help("Identifier, e.g. 'G26' or 'H430'").required(true).index(1))
                .arg(
                    Arg::new("strategy")
                        .long("strategy")
                        .default_value("indexed")
                        .help("Lookup strategy: 'indexed' or 'scan'"),
                ),
        )
        .subcommand(
            Command::new("commentary")
                .about("Print the commentaries touching one chapter")
                .arg(Arg::new("book").help("Book abbreviation, e.g. 'gn'").required(true).index(1))
                .arg(Arg::new("chapter").help("Chapter number").required(true).index(2))
                .arg(Arg::new("author").long("author").help("Restrict to one author")),
        )
        .get_matches();

    let data_dir = matches
        .get_one::<String>("data-dir")
        .map(String::as_str)
        .unwrap_or("data");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    let data = bootstrap(Path::new(data_dir), Catalog::with_defaults())
        .await
        .unwrap_or_else(|e| {
            eprintln!("Critical error while loading data: {}", e);
            process::exit(1);
        });

    match matches.subcommand() {
        Some(("read", sub)) => handle_read(&data, sub, format),
        Some(("search", sub)) => handle_search(&data, sub, format),
        Some(("dict", sub)) => handle_dict(&data, sub, format),
        Some(("lookup", sub)) => handle_lookup(&data, sub, format),
        Some(("commentary", sub)) => handle_commentary(&data, sub, format),
        _ => unreachable!(),
    }
}

/// Resolve a book argument or exit.
fn require_book(abbrev: &str) -> &'static books::BookInfo {
    books::find_by_abbrev(abbrev).unwrap_or_else(|| {
        eprintln!("Unknown book abbreviation '{}'", abbrev);
        process::exit(1);
    })
}

/// Parse a chapter argument or exit.
fn require_chapter(value: &str) -> u32 {
    value.trim().parse().unwrap_or_else(|_| {
        eprintln!("Invalid chapter number '{}'", value);
        process::exit(1);
    })
}

fn translation_arg<'a>(data: &'a StudyData, sub: &'a ArgMatches) -> &'a str {
    sub.get_one::<String>("translation")
        .map(String::as_str)
        .unwrap_or(&data.catalog.plain_id)
}

fn handle_read(data: &StudyData, sub: &ArgMatches, format: &str) {
    let book = require_book(sub.get_one::<String>("book").unwrap());
    let chapter = require_chapter(sub.get_one::<String>("chapter").unwrap());
    let translation = translation_arg(data, sub);

    let verses = data.store.chapter(translation, book.abbrev, chapter);
    if format != "text" {
        print_serialized(&verses, format);
        return;
    }
    if verses.is_empty() {
        println!("No text for {} {} in '{}'.", book.name_local, chapter, translation);
        return;
    }
    println!("{} {}\n", book.name_local, chapter);
    for verse in verses {
        println!("{:>3}  {}", verse.verse, verse.text);
    }
}

fn handle_search(data: &StudyData, sub: &ArgMatches, format: &str) {
    let term = sub.get_one::<String>("term").unwrap();
    let translation = translation_arg(data, sub);

    let hits = data.store.search(translation, term);
    if format != "text" {
        print_serialized(&hits, format);
        return;
    }
    println!("{} result(s) for '{}' in '{}'.\n", hits.len(), term, translation);
    for verse in hits {
        let name = books::find_by_abbrev(&verse.book_abbrev)
            .map(|b| b.name_local)
            .unwrap_or(verse.book_abbrev.as_str());
        println!("{} {}:{}", name, verse.chapter, verse.verse);
        println!("    {}", verse.text);
    }
}

fn handle_dict(data: &StudyData, sub: &ArgMatches, format: &str) {
    let query = sub.get_one::<String>("query").unwrap();
    let language = match sub.get_one::<String>("language").unwrap().as_str() {
        "greek" => Language::Greek,
        "hebrew" => Language::Hebrew,
        other => {
            eprintln!("Unknown language '{}', expected 'greek' or 'hebrew'", other);
            process::exit(1);
        }
    };

    let hits = data.lexicon(language).search(query);
    if format != "text" {
        print_serialized(&hits, format);
        return;
    }
    println!("{} result(s).\n", hits.len());
    for entry in hits {
        println!("{} ({}) - {}", entry.lemma, entry.transliteration, entry.id);
        if !entry.gloss.is_empty() {
            println!("    {}", entry.gloss);
        }
    }
}

fn handle_lookup(data: &StudyData, sub: &ArgMatches, format: &str) {
    let id = sub.get_one::<String>("id").unwrap();
    let strategy = match sub.get_one::<String>("strategy").unwrap().as_str() {
        "indexed" => LookupStrategy::Inverted,
        "scan" => LookupStrategy::FullScan,
        other => {
            eprintln!("Unknown strategy '{}', expected 'indexed' or 'scan'", other);
            process::exit(1);
        }
    };

    let citations = data.resolver(strategy).resolve(id);
    if format != "text" {
        print_serialized(&citations, format);
        return;
    }

    if let Some(language) = Language::of_identifier(id) {
        if let Some(entry) = data.lexicon(language).get(id) {
            println!("{} ({}) - {}", entry.lemma, entry.transliteration, entry.id);
            if !entry.gloss.is_empty() {
                println!("{}\n", entry.gloss);
            }
        }
    }
    println!("Concordance ({})\n", citations.len());
    print_citations(&citations, &data.catalog.marked_id, &data.catalog.plain_id);
}

fn print_citations(citations: &[Citation], marked_id: &str, plain_id: &str) {
    for citation in citations {
        println!("{}", citation.reference);
        println!("    {}: {}", marked_id, citation.marked_text);
        println!("    {}: {}", plain_id, citation.plain_text);
    }
}

fn handle_commentary(data: &StudyData, sub: &ArgMatches, format: &str) {
    let book = require_book(sub.get_one::<String>("book").unwrap());
    let chapter = require_chapter(sub.get_one::<String>("chapter").unwrap());
    let book_key = book.canonical_key();

    let entries = match sub.get_one::<String>("author") {
        Some(author) => data.commentaries.for_chapter_by(&book_key, chapter, author),
        None => data.commentaries.for_chapter(&book_key, chapter),
    };
    if format != "text" {
        print_serialized(&entries, format);
        return;
    }
    println!(
        "{} commentar{} on {} {}.\n",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        book.name_local,
        chapter
    );
    for entry in entries {
        println!(
            "{} ({}:{} - {}:{})",
            entry.author_name,
            decode_chapter(entry.range_start),
            decode_verse(entry.range_start),
            decode_chapter(entry.range_end),
            decode_verse(entry.range_end),
        );
        println!("    {}\n", entry.text);
    }
}

/// Serialize any query result to the requested machine format.
fn print_serialized<T: Serialize>(value: &T, format: &str) {
    let rendered = match format {
        "json" => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        "yaml" => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        other => Err(format!("unknown format '{}'", other)),
    };
    match rendered {
        Ok(output) => println!("{}", output),
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    }
}
