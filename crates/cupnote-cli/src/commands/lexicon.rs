use cupnote_core::error::CupnoteError;
use cupnote_core::lexicon::schema::Lexicon;
use std::path::Path;

pub fn list(file: Option<&Path>) -> Result<(), CupnoteError> {
    let lexicon = super::lexicon_from(file)?;

    println!("{} (version {})\n", lexicon.name, lexicon.version);
    if let Some(ref desc) = lexicon.description {
        println!("{}\n", desc);
    }

    println!("Processing methods (first match wins):\n");
    let max_name = lexicon
        .processing
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(10);
    for category in &lexicon.processing {
        println!(
            "  {:<width$}  {}",
            category.name,
            category.aliases.join(", "),
            width = max_name
        );
    }
    println!();

    print_counts(&lexicon);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), CupnoteError> {
    let lexicon = cupnote_core::lexicon::load_lexicon(file)?;

    println!("Lexicon '{}' (v{}) is valid.", lexicon.name, lexicon.version);
    print_counts(&lexicon);

    let mut warnings = Vec::new();
    for (i, cafe) in lexicon.known_cafes.iter().enumerate() {
        if let Some(longer) = lexicon.known_cafes[i + 1..]
            .iter()
            .find(|later| later.contains(cafe.as_str()) && *later != cafe)
        {
            warnings.push(format!(
                "known cafe '{}' is listed before '{}' and will shadow it",
                cafe, longer
            ));
        }
    }
    if lexicon.flavor_keywords.is_empty() {
        warnings.push("no flavor keywords, only labeled flavor lines will be read".into());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn print_counts(lexicon: &Lexicon) {
    println!("  Processing methods: {}", lexicon.processing.len());
    println!("  Flavor keywords:    {}", lexicon.flavor_keywords.len());
    println!("  Known cafes:        {}", lexicon.known_cafes.len());
    println!("  Excluded words:     {}", lexicon.cafe_excluded_words.len());
    println!("  Specific beans:     {}", lexicon.specific_beans.len());
    println!("  Origins:            {}", lexicon.origins.len());
    println!("  Bean keywords:      {}", lexicon.bean_keywords.len());
}
