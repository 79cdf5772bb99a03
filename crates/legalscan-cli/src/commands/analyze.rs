use legalscan_core::config;
use legalscan_core::error::LegalScanError;
use legalscan_core::loader::DocumentLoader;
use legalscan_core::DocumentAnalysis;
use std::path::PathBuf;

use crate::output;

const DEMO_TEXT: &str = "\
SERVICES AGREEMENT

ARTICLE I - Definitions
1. Services means the legal services described in Schedule A.

ARTICLE II - Obligations
The Attorney shall provide competent representation in accordance with § 12 of the Code.
The Client must pay all invoices within 30 days of receipt.
Any filing with the court shall follow the agreed procedure.

ARTICLE III - Disputes
If a party is in breach, then the other party may terminate this agreement.
Where the court finds the Client liable, damages of $25,000 shall be paid.
A motion for an injunction may be granted without prejudice to other remedies.
";

pub fn run(
    input_file: PathBuf,
    config_file: Option<PathBuf>,
    output_format: Option<String>,
    out_file: Option<PathBuf>,
    show_elements: bool,
) -> Result<(), LegalScanError> {
    let config = config::load_or_default(config_file.as_deref())?;
    let document = DocumentLoader::new(&config).load(&input_file)?;
    let analysis = legalscan_core::analyze_document(&document);

    match out_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&analysis)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Analyzed {} ({} element(s), domain {}), written to {}",
                analysis.source_id,
                analysis.report.total_elements,
                analysis.legal_domain,
                path.display()
            );
            Ok(())
        }
        None => {
            let format = output_format.unwrap_or(config.output_format);
            print(&analysis, &format, show_elements)
        }
    }
}

pub fn run_text(text: &str, output_format: &str, show_elements: bool) -> Result<(), LegalScanError> {
    let analysis = legalscan_core::analyze_text("<text>", text);
    print(&analysis, output_format, show_elements)
}

pub fn demo(show_elements: bool) -> Result<(), LegalScanError> {
    println!("Analyzing sample legal text:\n");
    for line in DEMO_TEXT.lines() {
        println!("  | {line}");
    }
    println!();
    let analysis = legalscan_core::analyze_text("demo", DEMO_TEXT);
    print(&analysis, "table", show_elements)
}

fn print(
    analysis: &DocumentAnalysis,
    output_format: &str,
    show_elements: bool,
) -> Result<(), LegalScanError> {
    match output_format {
        "json" => output::json::print(analysis)?,
        _ => output::table::print_analysis(analysis, show_elements),
    }
    Ok(())
}
