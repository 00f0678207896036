//! Sarcasm Preprocessing Example
//!
//! Cleans a small labeled tweet sample, prints the encoded rows, counts
//! syntactic features and writes one word cloud per class.
//!
//! Set `RUST_LOG=debug` to see the pipeline stages.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tweetsift::prelude::*;

const SAMPLE: &str = r#"[
    {"tweets": "Oh great, another Monday. Just what I needed #sarcasm", "class": "sarcasm"},
    {"tweets": "Had a lovely walk in the park with @anna today", "class": "regular"},
    {"tweets": "A fire station burned down. How ironic! http://t.co/abc", "class": "irony"},
    {"tweets": "Her smile was a sunrise", "class": "figurative"},
    {"tweets": "I just LOVE being stuck in traffic 😍 #not", "class": "sarcasm"},
    {"tweets": "I just LOVE being stuck in traffic 😍 #not", "class": "irony"},
    {"tweets": "<b>New</b> blog post on Rust &amp; NLP www.example.com", "class": "regular"},
    {"tweets": "Coffee and a good book, perfect Sunday", "class": "regular"}
]"#;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tweetsift_data=info,tweetsift_viz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Tweetsift - Sarcasm Preprocessing Example ===\n");
    println!("Version: {}", tweetsift::version());
    println!("Features: {}\n", tweetsift::features());

    // 1. Load the raw rows
    println!("1. Loading raw dataset...");
    let raw = TweetDataset::from_json(SAMPLE)?;
    println!("   {} records", raw.len());
    for (label, count) in raw.label_counts() {
        println!("   {label:<12} {count}");
    }
    println!();

    // 2. Run the pipeline
    println!("2. Preprocessing...");
    let cleaned = preprocess(&raw)?;
    for record in &cleaned {
        println!("   [{}] {}", record.class, record.text);
    }
    println!();

    // 3. Syntactic features
    println!("3. Syntactic features...");
    let counter = SyntacticCounter::new();
    for record in &cleaned {
        let features = counter.count(&record.text);
        let summary: Vec<String> = features
            .as_map()
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(key, count)| format!("{key}={count}"))
            .collect();
        println!("   {:<45} {}", record.text, summary.join(" "));
    }
    println!();

    // 4. Word clouds
    println!("4. Rendering word clouds...");
    let out_dir = std::env::temp_dir();
    for class in ClassCode::ALL {
        let cloud = plot_wordcloud(&cleaned, &class)?;
        let path = out_dir.join(format!("tweetsift_{}.png", class.label()));
        cloud.save(&path)?;
        let words: Vec<&str> = cloud.words().iter().take(5).map(|w| w.word.as_str()).collect();
        println!("   {} -> {} (top: {})", class.label(), path.display(), words.join(", "));
    }

    println!("\n=== Done ===");
    Ok(())
}
