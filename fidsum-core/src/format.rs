use crate::model::paragraph::Paragraph;

/// Renders paragraphs as concatenated `<p>…</p>` blocks.
///
/// This is the form the original application placed on the clipboard.
pub fn to_html(paragraphs: &[Paragraph]) -> String {
	let mut formatted = String::new();
	for paragraph in paragraphs {
		formatted.push_str("<p>");
		formatted.push_str(paragraph.text());
		formatted.push_str("</p>");
	}
	formatted
}

/// Renders paragraphs as plain text separated by blank lines.
pub fn to_plain_text(paragraphs: &[Paragraph]) -> String {
	paragraphs
		.iter()
		.map(Paragraph::text)
		.collect::<Vec<_>>()
		.join("\n\n")
}
