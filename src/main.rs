//! Anagrams CLI
//!
//! Loads a dictionary file, classifies its words and reports anagram statistics.

use anagrams::{AnagramClassifier, Dictionary, Group, PrepareOptions, SignatureKind};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

const HELP_TEXT: &str = include_str!("text/help.txt");

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SignatureArg {
    /// Sorted letters (faster for short words)
    Sorted,
    /// Per-letter counts (linear in word length)
    Counted,
}

impl From<SignatureArg> for SignatureKind {
    fn from(arg: SignatureArg) -> Self {
        match arg {
            SignatureArg::Sorted => SignatureKind::Sorted,
            SignatureArg::Counted => SignatureKind::Counted,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "anagrams")]
#[command(about = "Group the words of a dictionary into anagram classes", long_about = None)]
#[command(version)]
struct Cli {
    /// Dictionary file, one word per line
    dictionary: PathBuf,

    /// Keep lines containing characters other than letters
    #[arg(long)]
    keep_symbols: bool,

    /// Keep the original capitalisation of each line
    #[arg(long)]
    keep_case: bool,

    /// Signature used to compare words
    #[arg(long, value_enum, default_value = "sorted")]
    signature: SignatureArg,

    /// Look up the anagram group of a word (repeatable)
    #[arg(short, long)]
    find: Vec<String>,

    /// Print every anagram group
    #[arg(long)]
    list: bool,

    /// Open an interactive prompt after classification
    #[arg(short, long)]
    interactive: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("anagrams=warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn format_group(group: &Group<'_>) -> String {
    format!("{} ({} words)", group.words.join(", "), group.len())
}

fn print_group(label: &str, group: Option<Group<'_>>) {
    match group {
        Some(group) => println!("{:<20} {}", label, format_group(&group)),
        None => println!("{:<20} -", label),
    }
}

fn print_find(classifier: &AnagramClassifier, word: &str) {
    match classifier.find(word) {
        Some(group) => println!("{}: {}", word, format_group(&group)),
        None => println!("{}: no anagrams", word),
    }
}

fn print_stats(classifier: &AnagramClassifier) {
    let stats = classifier.stats();
    println!("{:<20} {}", "Words:", stats.word_count);
    println!("{:<20} {}", "Anagram words:", stats.anagram_word_count);
    println!("{:<20} {:.2}%", "Anagram ratio:", stats.anagram_ratio());
    println!("{:<20} {}", "Anagram groups:", stats.group_count);
    print_group("Longest group:", classifier.longest_group());
    print_group("Largest group:", classifier.largest_group());
}

fn print_groups(classifier: &AnagramClassifier, limit: Option<usize>) {
    let groups = classifier.groups();
    let shown = limit.unwrap_or(groups.len()).min(groups.len());
    for (i, group) in groups.iter().take(shown).enumerate() {
        println!("{:>6}  {}", i + 1, format_group(group));
    }
    if shown < groups.len() {
        println!("... {} more", groups.len() - shown);
    }
}

fn run_interactive(classifier: &AnagramClassifier) -> Result<()> {
    println!();
    println!("Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", HELP_TEXT);
            }
            "quit" | "exit" | "q" => {
                break;
            }
            "find" | "f" => {
                if parts.len() < 2 {
                    println!("Usage: find <word>");
                    continue;
                }
                for word in &parts[1..] {
                    print_find(classifier, word);
                }
            }
            "stats" | "s" => {
                print_stats(classifier);
            }
            "longest" | "l" => {
                print_group("Longest group:", classifier.longest_group());
            }
            "largest" | "b" => {
                print_group("Largest group:", classifier.largest_group());
            }
            "groups" | "g" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);
                print_groups(classifier, Some(n));
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let options = PrepareOptions {
        filter_non_alpha: !cli.keep_symbols,
        filter_case: !cli.keep_case,
    };
    let kind = SignatureKind::from(cli.signature);

    let start = Instant::now();
    let dictionary = Dictionary::open(&cli.dictionary, &options)
        .with_context(|| format!("failed to load dictionary {}", cli.dictionary.display()))?;
    info!(lines = dictionary.line_count(), words = dictionary.len(), "dictionary loaded");

    let mut classifier = AnagramClassifier::with_capacity(kind, dictionary.len());
    classifier.feed_all(dictionary.words());
    let elapsed = start.elapsed();

    println!("{:<20} {}", "Dictionary lines:", dictionary.line_count());
    print_stats(&classifier);
    println!("{:<20} {}", "Signature:", kind);
    println!("{:<20} {:.2?}", "Time elapsed:", elapsed);

    if !cli.find.is_empty() {
        println!();
        for word in &cli.find {
            print_find(&classifier, word);
        }
    }

    if cli.list {
        println!();
        print_groups(&classifier, None);
    }

    if cli.interactive {
        run_interactive(&classifier)?;
    }

    Ok(())
}
