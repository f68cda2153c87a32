use fidsum_core::error::GenerateError;
use fidsum_core::format;
use fidsum_core::model::generation_request::GenerationRequest;
use fidsum_core::model::generator::ParagraphGenerator;
use fidsum_core::model::phrase_bank::PhraseBank;

fn main() -> Result<(), GenerateError> {
    // A small inline phrase bank; real applications supply their own
    // content (or load a .txt file through fidsum_core::io)
    let bank = PhraseBank::new(
        [
            "The placeholder hums quietly while the layout settles.",
            "Nobody reads the second sentence of a draft.",
            "Columns align themselves around text that means nothing.",
            "A good filler phrase never draws attention to itself.",
            "Somewhere a designer nods at the line length.",
            "The paragraph continues because the page demands it.",
            "Words stand in for other words that do not exist yet.",
            "Every mockup deserves better nonsense than this.",
            "The reader skims, the grid holds, the text pretends.",
            "Print it in Georgia italic and call it a day.",
        ]
        .map(str::to_owned)
        .to_vec(),
    );

    // Generate 3 paragraphs with the default 100-word soft cap
    let request = GenerationRequest::new(&bank, 3)?;
    let paragraphs = ParagraphGenerator::new().generate(&request);

    println!("{}", format::to_plain_text(&paragraphs));
    println!();

    // The HTML rendering is what a web front-end puts on the clipboard
    println!("{}", format::to_html(&paragraphs));
    println!();

    // A smaller soft cap closes paragraphs sooner
    let short = ParagraphGenerator::with_soft_cap(20).generate(&request);
    println!("{}", format::to_plain_text(&short));

    // Requests are validated up front, before any drawing happens
    match GenerationRequest::new(&bank, 0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Zero paragraphs rejected: {e}"),
    }

    let empty = PhraseBank::new(Vec::new());
    match GenerationRequest::new(&empty, 1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Empty bank rejected: {e}"),
    }

    let single = PhraseBank::new(vec!["Only one phrase.".to_owned()]);
    match GenerationRequest::new(&single, 1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Single-phrase bank rejected: {e}"),
    }

    Ok(())
}
