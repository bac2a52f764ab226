use crate::models::GenerationResult;
use printpdf::*;
use std::io::BufWriter;

const PAGE_TOP: f32 = 275.0;
const PAGE_BOTTOM: f32 = 20.0;
const LINE_STEP: f32 = 6.0;

/// Text-only script sheet for a generated concept. Builtin fonts only cover
/// Latin-1, so emoji are dropped and bullets become dashes.
pub fn generate_script_pdf(prompt: &str, result: &GenerationResult) -> anyhow::Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Video Script: {}", truncate(&printable(prompt), 48)),
        Mm(210.0),
        Mm(297.0),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(|e| anyhow::anyhow!("font error: {e:?}"))?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(|e| anyhow::anyhow!("font error: {e:?}"))?;

    let mut current = doc.get_page(page).get_layer(layer);
    current.use_text("Video Script & Assets", 20.0, Mm(15.0), Mm(PAGE_TOP), &bold);
    let mut y = PAGE_TOP - 12.0;

    let mut lines: Vec<String> = vec![format!("Concept: {}", truncate(&printable(prompt), 120)), String::new()];
    lines.extend(result.description.lines().map(|l| truncate(&printable(l), 110)));
    lines.push(String::new());
    if !result.applied_trends.is_empty() {
        lines.push(format!("Applied trends: {}", printable(&result.applied_trends.join(", "))));
    }
    if let Some(score) = result.estimated_viral_score {
        lines.push(format!("Viral score: {score}%"));
    }
    if let Some(platforms) = &result.suggested_platforms {
        lines.push(format!("Platforms: {}", platforms.join(", ")));
    }

    for line in lines {
        if y < PAGE_BOTTOM {
            let (next_page, next_layer) = doc.add_page(Mm(210.0), Mm(297.0), "Continued");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_TOP;
        }
        if !line.is_empty() {
            current.use_text(line, 10.0, Mm(15.0), Mm(y), &font);
        }
        y -= LINE_STEP;
    }

    let mut buf: Vec<u8> = Vec::new();
    {
        let mut writer = BufWriter::new(&mut buf);
        doc.save(&mut writer).map_err(|e| anyhow::anyhow!("pdf save error: {e:?}"))?;
    }
    Ok(buf)
}

fn printable(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '•' => Some('-'),
            c if (c as u32) < 0x100 => Some(c),
            _ => None,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max { s.to_string() } else { format!("{}...", s.chars().take(max).collect::<String>()) }
}
