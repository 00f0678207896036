//! End-to-end integration test for Tweetsift.
//! Runs the workflow an analysis notebook would: load rows, preprocess,
//! inspect classes, render clouds and count syntactic features.

use tweetsift::prelude::*;

fn raw_dataset() -> TweetDataset {
    TweetDataset::from_json(
        r#"[
            {"tweets": "Check http://a.co #sarcasm", "class": "sarcasm"},
            {"tweets": "I love this!", "class": "regular"},
            {"tweets": "Love waiting in traffic on a Monday 🙃 #not", "class": "irony"},
            {"tweets": "Love waiting in traffic on a Monday 🙃 #not", "class": "sarcasm"},
            {"tweets": "He runs like the wind #figurative", "class": "figurative"},
            {"tweets": "@delta thanks for losing my bag, so helpful", "class": "sarcasm"},
            {"tweets": "<p>Sunny day at the beach &amp; friends</p>", "class": "regular"},
            {"tweets": "How ironic... www.example.com/news", "class": "irony"},
            {"tweets": 404, "class": "regular"}
        ]"#,
    )
    .unwrap()
}

/// Test 1: The documented two-row example
#[test]
fn test_end_to_end_example() {
    let dataset = TweetDataset::from_json(
        r#"[{"tweets": "Check http://a.co #sarcasm", "class": "sarcasm"},
            {"tweets": "I love this!", "class": "regular"}]"#,
    )
    .unwrap();

    let cleaned = preprocess(&dataset).unwrap();
    let json: serde_json::Value = serde_json::from_str(&cleaned.to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {"tweets": "check", "class": 1},
            {"tweets": "i love this !", "class": 0}
        ])
    );
}

/// Test 2: Label handling across the whole dataset
#[test]
fn test_labels_after_pipeline() {
    let raw = raw_dataset();
    let cleaned = preprocess(&raw).unwrap();

    // 9 rows - 1 figurative - 1 duplicate text
    assert_eq!(cleaned.len(), 7);
    assert_eq!(cleaned.codes(), vec![1, 0, 1, 1, 0, 1, 0]);

    let counts = cleaned.class_counts();
    assert_eq!(counts[&ClassCode::Regular], 3);
    assert_eq!(counts[&ClassCode::SarcasmIrony], 4);

    // Input untouched
    assert_eq!(raw.len(), 9);
    assert_eq!(raw.records()[4].label, "figurative");
}

/// Test 3: Noise is gone from every cleaned text
#[test]
fn test_cleaned_text_properties() {
    let cleaned = preprocess(&raw_dataset()).unwrap();

    for text in cleaned.texts() {
        assert!(!text.contains("http") && !text.contains("www."), "url in {text:?}");
        assert!(!text.contains('#'), "hashtag in {text:?}");
        assert!(!text.contains('@'), "mention in {text:?}");
        assert!(!text.contains('<'), "html in {text:?}");
        assert!(!text.contains("sarc") && !text.contains("iron"), "marker in {text:?}");
        assert_eq!(text, text.to_lowercase());
        assert_eq!(normalize_tweet(text), text, "not idempotent: {text:?}");
    }

    let texts = cleaned.texts();
    assert_eq!(texts[2], "love waiting in traffic on a monday");
    assert_eq!(texts[3], "thanks for losing my bag , so helpful");
    assert_eq!(texts[4], "sunny day at the beach friends");
    assert_eq!(texts[5], "how ...");
    assert_eq!(texts[6], "404");
}

/// Test 4: Configuration drives the pipeline
#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tweetsift.toml");

    let mut config = TweetsiftConfig::default();
    config.pipeline.excluded_labels = vec!["figurative".to_string(), "irony".to_string()];
    config.pipeline.collapsed_labels = vec!["sarcasm".to_string()];
    config.wordcloud.width = 400;
    config.wordcloud.height = 200;
    config.save(&path).unwrap();

    let loaded = TweetsiftConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let cleaned = PreprocessingPipeline::with_config(loaded.pipeline)
        .run(&raw_dataset())
        .unwrap();
    // The irony copy of the Monday tweet is gone, so its sarcasm twin survives dedup.
    assert_eq!(cleaned.class_counts()[&ClassCode::SarcasmIrony], 3);
    assert_eq!(cleaned.class_counts()[&ClassCode::Regular], 3);

    let cloud = WordCloud::with_config(loaded.wordcloud)
        .unwrap()
        .generate_for_class(&cleaned, &ClassCode::Regular)
        .unwrap();
    assert_eq!(cloud.image().dimensions(), (400, 200));
}

/// Test 5: Word clouds per class
#[test]
fn test_wordcloud_per_class() {
    let cleaned = preprocess(&raw_dataset()).unwrap();

    let regular = plot_wordcloud(&cleaned, &ClassCode::Regular).unwrap();
    let sarcastic = plot_wordcloud(&cleaned, &ClassCode::SarcasmIrony).unwrap();

    assert_eq!(regular.image().dimensions(), (800, 400));
    assert!(regular.words().iter().any(|w| w.word == "beach"));
    assert!(!regular.words().iter().any(|w| w.word == "traffic"));
    assert!(sarcastic.words().iter().any(|w| w.word == "traffic"));
}

/// Test 6: Syntactic features on raw and cleaned text
#[test]
fn test_syntactic_features() {
    let counts = count_syntactic_features("The cat runs quickly");
    assert_eq!(counts.as_map()["Stopwords"], 1);
    assert_eq!(counts.as_map()["Nouns"], 1);
    assert_eq!(counts.as_map()["Verbs"], 1);
    assert_eq!(counts.as_map()["Adverbs"], 1);
    assert_eq!(counts.as_map()["Adjectives"], 0);
    assert_eq!(counts.as_map()["Pronouns"], 0);

    let cleaned = preprocess(&raw_dataset()).unwrap();
    let counter = SyntacticCounter::new();
    for record in &cleaned {
        let features = counter.count(&record.text);
        let tokens = WordTokenizer::new().tokenize(&record.text).len();
        assert!(features.total() <= tokens);
    }
}

/// Test 7: Unknown labels abort the run
#[test]
fn test_unknown_label_aborts() {
    let dataset: TweetDataset = vec![
        Record::new("fine", "regular"),
        Record::new("hmm", "satire"),
    ]
    .into_iter()
    .collect();

    match preprocess(&dataset) {
        Err(Error::UnknownLabel { label }) => assert_eq!(label, "satire"),
        other => panic!("expected unknown label, got {other:?}"),
    }
}
