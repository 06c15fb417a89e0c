// PDF export of the full task list

use crate::models::Task;
use eyre::{Context, Result, eyre};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

pub const EXPORT_FILE_NAME: &str = "todolist_tasks.pdf";
const DOC_TITLE: &str = "ToDoList Tasks";

// A4 portrait, measured from the top-left like the on-screen list
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 20.0;
const START_Y_MM: f32 = 20.0;
const TITLE_SIZE_PT: f32 = 20.0;
const TITLE_STEP_MM: f32 = 20.0;
const BODY_SIZE_PT: f32 = 12.0;
const LINE_STEP_MM: f32 = 10.0;
const BLOCK_GAP_MM: f32 = 15.0;

/// One line of text placed on the page. `y_mm` grows downward from the
/// top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size_pt: f32,
    pub y_mm: f32,
}

/// Every line of the exported document, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub lines: Vec<TextLine>,
}

/// Lay out the document: a title line, then a four-line block per task
/// in store order. Filters never apply here.
///
/// The document is a single page; a long list runs past the bottom edge.
pub fn layout(tasks: &[Task]) -> DocumentLayout {
    let mut lines = Vec::with_capacity(1 + tasks.len() * 4);
    let mut y = START_Y_MM;

    lines.push(TextLine {
        text: DOC_TITLE.to_string(),
        size_pt: TITLE_SIZE_PT,
        y_mm: y,
    });
    y += TITLE_STEP_MM;

    for task in tasks {
        for text in [
            format!("Task: {}", task.text),
            format!("Category: {}", task.category),
            format!("Priority: {}", task.priority.label()),
        ] {
            lines.push(TextLine {
                text,
                size_pt: BODY_SIZE_PT,
                y_mm: y,
            });
            y += LINE_STEP_MM;
        }

        let status = if task.completed { "Completed" } else { "Pending" };
        lines.push(TextLine {
            text: format!("Status: {status}"),
            size_pt: BODY_SIZE_PT,
            y_mm: y,
        });
        y += BLOCK_GAP_MM;
    }

    DocumentLayout { lines }
}

/// Paint a layout into a PDF file at `path`.
pub fn write_pdf(document: &DocumentLayout, path: &Path) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(DOC_TITLE, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| eyre!("Failed to prepare PDF font: {err}"))?;
    let layer = doc.get_page(page).get_layer(layer);

    for line in &document.lines {
        // PDF y runs from the bottom edge, the layout's from the top
        layer.use_text(
            line.text.as_str(),
            line.size_pt,
            Mm(MARGIN_LEFT_MM),
            Mm(PAGE_HEIGHT_MM - line.y_mm),
            &font,
        );
    }

    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|err| eyre!("Failed to write PDF: {err}"))?;

    Ok(())
}

/// Export every task to `todolist_tasks.pdf` in the given directory.
/// Returns the path of the written file.
pub fn export_tasks(tasks: &[Task], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let document = layout(tasks);
    write_pdf(&document, &path)?;

    info!(path = %path.display(), tasks = tasks.len(), "exported tasks");
    Ok(path)
}
