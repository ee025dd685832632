use silabel::{
    AnalysisConfig, Alphabet, ClusterSplitter, CorpusTokenizer, GraphemeClass, analyze,
    load_spec_lines, load_words, save_documents, save_word_tokens,
};
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    words: PathBuf,
    consonant_spec: PathBuf,
    vowel_spec: PathBuf,
    out: PathBuf,
    tokens_out: Option<PathBuf>,
    parallel: bool,
}

fn run(cli: &CliConfig) -> silabel::Result<()> {
    let words = load_words(&cli.words)?;
    let consonant_spec = load_spec_lines(&cli.consonant_spec)?;
    let vowel_spec = load_spec_lines(&cli.vowel_spec)?;

    let config = AnalysisConfig { parallel: cli.parallel, ..AnalysisConfig::default() };
    let alphabet = config.alphabet.clone();
    let parser = move |word: &str| naive_syllables(word, &alphabet);

    let result = analyze(&words, &parser, &consonant_spec, &vowel_spec, &config)?;

    if let Some(tokens_out) = &cli.tokens_out {
        // The tokenized corpus is recomputed cheaply inside analyze; dump
        // it separately only when asked.
        let tokenizer = CorpusTokenizer::new(&config.alphabet);
        let (corpus, _) = tokenizer.tokenize(&words, &parser);
        save_word_tokens(tokens_out, &corpus)?;
    }

    save_documents(&cli.out, &result.documents)?;
    log::info!("wrote {} feature documents to {}", result.documents.len(), cli.out.display());
    Ok(())
}

/// Built-in stand-in for the external morphological parser.
///
/// Cuts a word before every consonant that both follows a vowel-bearing
/// chunk and immediately precedes a vowel. This is only a CLI convenience;
/// library users supply their own parser.
fn naive_syllables(word: &str, alphabet: &Alphabet) -> Vec<String> {
    let units = match ClusterSplitter::new(alphabet).split(word) {
        Ok(units) => units,
        Err(_) => return Vec::new(),
    };

    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut current_has_vowel = false;
    for (i, (unit, class)) in units.iter().enumerate() {
        let next_is_vowel =
            matches!(units.get(i + 1), Some((_, GraphemeClass::Vowel)));
        if *class == GraphemeClass::Consonant && current_has_vowel && next_is_vowel {
            syllables.push(std::mem::take(&mut current));
            current_has_vowel = false;
        }
        current.push_str(unit);
        if *class == GraphemeClass::Vowel {
            current_has_vowel = true;
        }
    }
    if !current.is_empty() {
        syllables.push(current);
    }
    syllables
}

fn parse_args() -> Result<CliConfig, String> {
    let mut words: Option<PathBuf> = None;
    let mut consonant_spec: Option<PathBuf> = None;
    let mut vowel_spec: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;
    let mut tokens_out: Option<PathBuf> = None;
    let mut parallel = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("silabel {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--parallel" => parallel = true,
            "--words" => words = Some(expect_value(&mut args, "--words")?),
            "--consonant-spec" => {
                consonant_spec = Some(expect_value(&mut args, "--consonant-spec")?)
            }
            "--vowel-spec" => vowel_spec = Some(expect_value(&mut args, "--vowel-spec")?),
            "--out" => out = Some(expect_value(&mut args, "--out")?),
            "--tokens-out" => tokens_out = Some(expect_value(&mut args, "--tokens-out")?),
            _ if arg.starts_with("--words=") => {
                words = Some(PathBuf::from(arg.trim_start_matches("--words=")));
            }
            _ if arg.starts_with("--consonant-spec=") => {
                consonant_spec = Some(PathBuf::from(arg.trim_start_matches("--consonant-spec=")));
            }
            _ if arg.starts_with("--vowel-spec=") => {
                vowel_spec = Some(PathBuf::from(arg.trim_start_matches("--vowel-spec=")));
            }
            _ if arg.starts_with("--out=") => {
                out = Some(PathBuf::from(arg.trim_start_matches("--out=")));
            }
            _ if arg.starts_with("--tokens-out=") => {
                tokens_out = Some(PathBuf::from(arg.trim_start_matches("--tokens-out=")));
            }
            _ => return Err(format!("error: unexpected argument '{arg}' (see --help)")),
        }
    }

    Ok(CliConfig {
        words: words.ok_or("error: --words is required")?,
        consonant_spec: consonant_spec.ok_or("error: --consonant-spec is required")?,
        vowel_spec: vowel_spec.ok_or("error: --vowel-spec is required")?,
        out: out.ok_or("error: --out is required")?,
        tokens_out,
        parallel,
    })
}

fn expect_value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<PathBuf, String> {
    args.next().map(PathBuf::from).ok_or_else(|| format!("error: {flag} expects a value"))
}

fn print_help() {
    println!(
        "silabel - syllable-structure statistics over a word corpus

USAGE:
    silabel --words <path> --consonant-spec <path> --vowel-spec <path> --out <path>

OPTIONS:
    --words <path>            JSON array of corpus words
    --consonant-spec <path>   consonant feature-specification table
    --vowel-spec <path>       vowel feature-specification table
    --out <path>              output file for the feature documents (replaced atomically)
    --tokens-out <path>       also write the tokenized corpus as JSON
    --parallel                tokenize words in parallel
    -h, --help                print this help
    -V, --version             print the version

Logging is controlled through RUST_LOG (env_logger)."
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use silabel::DEFAULT_ALPHABET;

    #[test]
    fn naive_syllables_cut_before_intervocalic_consonants() {
        assert_eq!(naive_syllables("bantu", &DEFAULT_ALPHABET), vec!["ban", "tu"]);
        assert_eq!(naive_syllables("makan", &DEFAULT_ALPHABET), vec!["ma", "kan"]);
        assert_eq!(naive_syllables("trak", &DEFAULT_ALPHABET), vec!["trak"]);
        assert_eq!(naive_syllables("a", &DEFAULT_ALPHABET), vec!["a"]);
    }

    #[test]
    fn naive_syllables_keep_digraphs_whole() {
        assert_eq!(naive_syllables("ngarai", &DEFAULT_ALPHABET), vec!["nga", "rai"]);
    }

    #[test]
    fn unsplittable_words_produce_no_syllables() {
        assert_eq!(naive_syllables("b4d", &DEFAULT_ALPHABET), Vec::<String>::new());
    }
}
