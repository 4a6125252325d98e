use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io;
use std::time::Instant;

use kmodes::{KModes, Strategy};
use memmap2::Mmap;

fn read_words(paths: &[String]) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for path in paths {
        println!("Start reading {}", path);
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            continue;
        }
        let mmap = unsafe { Mmap::map(&file)? };
        let before = words.len();
        words.extend(
            String::from_utf8_lossy(&mmap)
                .split_whitespace()
                .map(str::to_lowercase),
        );
        println!("Finished reading {} ({} words)", path, words.len() - before);
    }
    Ok(words)
}

fn main() -> io::Result<()> {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: word_files <file>...");
        std::process::exit(1);
    }

    let words = read_words(&paths)?;
    let mut exact: HashMap<&str, u64> = HashMap::new();
    for word in &words {
        *exact.entry(word.as_str()).or_insert(0) += 1;
    }
    println!("number of words: {}", words.len());
    println!("number of distinct words: {}", exact.len());

    let k = 20;
    let mut results = Vec::new();
    for strategy in [Strategy::Linear, Strategy::Heap] {
        let mut modes = KModes::new(k, strategy);
        let start = Instant::now();
        for word in &words {
            modes.add(word.as_str());
        }
        let duration = start.elapsed().as_secs_f64();
        println!(
            "{:?}: {} seconds, {} ns per word",
            strategy,
            duration,
            duration * 1e9 / words.len().max(1) as f64
        );
        results.push(modes);
    }

    assert_eq!(results[0].snapshot(), results[1].snapshot());
    for node in results[1].list() {
        println!("{:>8} {}", node.count, node.item);
        assert_eq!(exact[node.item], node.count);
    }

    Ok(())
}
