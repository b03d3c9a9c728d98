#![no_main]

use libfuzzer_sys::fuzz_target;
use namesake_core::harvest::{harvest_file, HarvestOptions};
use namesake_core::language::Language;
use namesake_core::similarity::similarity_score;
use namesake_core::subsequence::longest_common_subsequence;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let input = String::from_utf8_lossy(data);
    let mut parts = input.splitn(2, '\n');
    let a: String = parts.next().unwrap_or("").chars().take(200).collect();
    let b: String = parts.next().unwrap_or("").chars().take(200).collect();

    let score = similarity_score(&a, &b);
    assert!((0.0..=1.0).contains(&score));
    assert_eq!(score, similarity_score(&b, &a));

    let evidence = longest_common_subsequence(&a, &b);
    assert!(evidence.chars().count() <= a.chars().count().min(b.chars().count()));

    // The scanner must terminate without panicking on arbitrary bytes
    let content = &data[..data.len().min(65536)];
    let options = HarvestOptions::default();
    for language in [Language::Rust, Language::Python, Language::CCpp] {
        let _ = harvest_file(Path::new("fuzz.src"), content, language, &options, None);
    }
});
