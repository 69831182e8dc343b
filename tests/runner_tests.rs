use brutekit::config::RunConfig;
use brutekit::errors::AppError;
use brutekit::metrics::Metrics;
use brutekit::runner::{build_affixes, build_engine, build_paddings, generate_all, run};
use prometheus::Registry;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn config(words: &str, output: PathBuf) -> RunConfig {
    RunConfig {
        words: words.into(),
        append_numbering: 0,
        numbering_limit: 50,
        years: String::new(),
        append_padding: String::new(),
        common_paddings_before: false,
        common_paddings_after: false,
        custom_paddings_only: false,
        output,
        quiet: true,
    }
}

#[test]
fn custom_paddings_follow_defaults() {
    let mut cfg = config("acme", PathBuf::from("unused"));
    cfg.append_padding = " zz , ,yy".into();
    let pads = build_paddings(&cfg).unwrap();
    assert_eq!(pads.len(), 152);
    assert_eq!(&pads.values()[150..], ["zz", "yy"]);
}

#[test]
fn custom_only_skips_defaults() {
    let mut cfg = config("acme", PathBuf::from("unused"));
    cfg.append_padding = "zz".into();
    cfg.custom_paddings_only = true;
    let pads = build_paddings(&cfg).unwrap();
    assert_eq!(pads.values(), ["zz"]);
}

#[test]
fn affixes_from_config() {
    let mut cfg = config("acme", PathBuf::from("unused"));
    cfg.append_numbering = 1;
    cfg.numbering_limit = 3;
    cfg.years = "2023-2024".into();
    let affixes = build_affixes(&cfg).unwrap();
    assert_eq!(affixes.numbers, ["1", "2", "3"]);
    assert_eq!(affixes.years, ["2023", "2024"]);
}

#[test]
fn invalid_years_abort_build() {
    let mut cfg = config("acme", PathBuf::from("unused"));
    cfg.years = "19xx".into();
    assert!(matches!(build_engine(&cfg), Err(AppError::Affix(_))));
}

#[test]
fn words_accumulate_in_order() {
    let mut cfg = config("ab,zz", PathBuf::from("unused"));
    cfg.custom_paddings_only = true;
    cfg.append_padding = "!".into();
    let engine = build_engine(&cfg).unwrap();
    let metrics = Metrics::new(&Registry::new()).unwrap();

    let all = generate_all(&engine, &cfg.seed_words(), &metrics);
    let ab = engine.generate("ab");
    let zz = engine.generate("zz");
    assert_eq!(all.len(), ab.len() + zz.len());
    assert_eq!(&all[..ab.len()], ab.as_slice());
    assert_eq!(&all[ab.len()..], zz.as_slice());
    assert_eq!(metrics.words_processed.get(), 2);
    assert_eq!(metrics.mutations_generated.get() as usize, all.len());
}

#[test]
fn run_writes_output_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.txt");
    let cfg = config("Cat", path.clone());
    let metrics = Metrics::new(&Registry::new()).unwrap();

    let summary = run(&cfg, &metrics).unwrap();
    assert_eq!(summary.words, 1);
    assert_eq!(summary.output, path);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), summary.mutations);
    // 3 case forms + 9 leet variants, each padded both ways with 150 defaults
    assert_eq!(summary.mutations, 12 + 2 * 12 * 150);
    assert_eq!(&lines[..3], ["Cat", "CAT", "cat"]);
    assert!(lines.contains(&"C@t2025"));
    assert!(lines.contains(&"qwertyC4+"));
}

#[test]
fn run_reports_unwritable_output() {
    let dir = tempdir().unwrap();
    let cfg = config("acme", dir.path().join("missing").join("out.txt"));
    let metrics = Metrics::new(&Registry::new()).unwrap();
    assert!(matches!(run(&cfg, &metrics), Err(AppError::Output(_))));
}
