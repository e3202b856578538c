//! Debug script to walk a search and the download chain of its first hit
//!
//! Run with: cargo run --example debug_chain -p fzmovies-core -- "inception"

use fzmovies_core::{FzmoviesScraper, url::resolve_href};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "inception".to_string());
    let scraper = FzmoviesScraper::new()?;

    println!("Searching for '{}'...\n", query);
    let results = scraper.search(&query).await?;

    if results.is_empty() {
        println!("No results found!");
        return Ok(());
    }

    for (i, movie) in results.iter().enumerate() {
        println!("{}. {}", i + 1, movie.title);
        println!("   Year: {}", movie.year_or_unknown());
        println!("   Quality: {}", movie.quality_or_unknown());
        println!("   Link: {}", movie.link);
        println!();
    }

    let Some(first) = resolve_href(scraper.base_url(), &results[0].link) else {
        println!("First result has no usable link");
        return Ok(());
    };

    println!("Resolving {}...\n", first);
    match scraper.resolve(&first).await {
        Ok(resolved) => {
            println!("File page:  {}", resolved.file_page);
            println!("Final page: {}", resolved.final_page);
            for link in &resolved.links {
                println!("  {}", link);
            }
        }
        Err(e) => println!("Chain stopped: {}", e),
    }

    Ok(())
}
