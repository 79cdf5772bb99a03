use legalscan_core::classify::MatchPolicy;
use legalscan_core::error::LegalScanError;
use legalscan_core::model::Category;
use legalscan_core::patterns::{category_patterns, domain_definitions};

pub fn list() -> Result<(), LegalScanError> {
    println!("Category patterns (all case-insensitive, matched line by line):\n");

    for category in Category::ALL {
        let policy = match MatchPolicy::for_category(category) {
            MatchPolicy::EachPattern => "each matching pattern adds one element per line",
            MatchPolicy::FirstPatternWins => "first matching pattern only, one element per line",
        };
        println!(
            "  {} {:<10} score 0-{}  ({})",
            category.glyph(),
            category,
            category.ceiling(),
            policy
        );
        for (i, p) in category_patterns(category).iter().enumerate() {
            println!("      {}. {:<55} {}", i + 1, p.source, p.description);
        }
        println!();
    }

    println!("Complexity buckets: simple <= 3, moderate 4-8, complex 9-15, very_complex > 15");
    Ok(())
}

pub fn domains() -> Result<(), LegalScanError> {
    println!("Domain definitions, in priority order (ties go to the earlier domain):\n");

    for (i, def) in domain_definitions().iter().enumerate() {
        println!(
            "  {}. {:<15} [{} {}]",
            i + 1,
            def.domain,
            def.symbol.glyph(),
            def.symbol
        );
        println!("       keywords: {}", def.keywords.join(", "));
        for re in &def.patterns {
            println!("       pattern:  {}", re.as_str());
        }
        println!();
    }

    println!("Score = keyword occurrences + pattern matches over the whole document.");
    Ok(())
}
