use std::fs;

use newsplit::config::Config;
use newsplit::pipelines::{CleanCorpora, CoverageReport, Pipeline};

/// Clean a small corpus, then build the report from the pipeline output.
#[test]
fn report_from_cleaned_tables() {
    let root = tempfile::tempdir().unwrap();
    let raw_dir = root.path().join("raw");
    let clean_root = root.path().join("clean");
    let report_path = root.path().join("reports/coverage.md");

    let dir = raw_dir.join("eng_news_2018");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("eng_news_2018_10K-sentences.txt"),
        "1\tThe first long enough sentence of the evening news broadcast.\n\
         2\tThe second long enough sentence of the evening news broadcast.\n",
    )
    .unwrap();
    fs::write(
        dir.join("eng_news_2018_10K-sources.txt"),
        "10\thttps://news.example.com/a\t2018-06-01\n",
    )
    .unwrap();
    fs::write(
        dir.join("eng_news_2018_10K-inv_so.txt"),
        "10\t1\n11\t2\n",
    )
    .unwrap();

    let config_path = root.path().join("newsplit.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[paths]
clean_root = "{}"

[[languages]]
code = "eng"
name = "English"
raw_dir = "{}"
corpora = ["eng_news_2018"]
"#,
            clean_root.display(),
            raw_dir.display()
        ),
    )
    .unwrap();

    let config = Config::from_path(&config_path).unwrap();
    CleanCorpora::new(config).run().unwrap();

    CoverageReport::new(clean_root.clone(), report_path.clone())
        .run()
        .unwrap();

    let md = fs::read_to_string(&report_path).unwrap();
    // both sentences are pre-chatgpt 2018; one has no source match, so no date
    assert!(md.contains("| English | 2018 | Pre-ChatGPT | 2 |"));
    assert!(md.contains("**Overall total sentences:** 2"));
    assert!(md.contains("| English | 50.00 |"));
}

/// Without the combined file, the report unions the per-corpus tables.
#[test]
fn report_without_combined_file() {
    let root = tempfile::tempdir().unwrap();
    let clean_root = root.path().join("clean");
    fs::create_dir_all(&clean_root).unwrap();
    let report_path = root.path().join("coverage.md");

    fs::write(
        clean_root.join("eng_news_2018.tsv"),
        "language\tyear\tperiod\tdate\tsentence\n\
         English\t2018\tPre-ChatGPT\t2018-01-01\tone sentence\n",
    )
    .unwrap();
    fs::write(
        clean_root.join("deu_news_2023.tsv"),
        "language\tyear\tperiod\tdate\tsentence\n\
         German\t2023\tPost-ChatGPT\t2023-01-01\tein satz\n",
    )
    .unwrap();

    CoverageReport::new(clean_root, report_path.clone())
        .run()
        .unwrap();

    let md = fs::read_to_string(&report_path).unwrap();
    assert!(md.contains("| English | 2018 | Pre-ChatGPT | 1 |"));
    assert!(md.contains("| German | 2023 | Post-ChatGPT | 1 |"));
    assert!(md.contains("**Overall total sentences:** 2"));
}
