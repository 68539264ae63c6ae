use crate::render::error::{RenderError, Result};
use pdf_writer::{Chunk, Content, Finish, Name, Pdf, Rect, Ref};
use std::collections::HashMap;
use std::path::Path;
use svg2pdf::usvg;

/// Per-page XObject resource name; resources are page-scoped, so every page
/// can reuse the same name.
const SVG_NAME: Name<'static> = Name(b"S0");

/// A multi-page PDF under assembly.
///
/// Pages are collected as rendered SVG strings and serialized in insertion
/// order by [`PdfDocument::write_to_file`]. The whole document is built in
/// memory and written with a single filesystem call, so a failed render
/// never leaves an open half-written output handle behind.
pub struct PdfDocument {
    width: u32,
    height: u32,
    pages: Vec<String>,
}

struct PageObjects {
    page_id: Ref,
    content_id: Ref,
    svg_id: Ref,
    chunk: Chunk,
}

impl PdfDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
        }
    }

    /// Appends a finished page. Page order is insertion order.
    pub fn push_page(&mut self, svg: String) {
        self.pages.push(svg);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serializes the document: catalog, page tree, and one page per
    /// collected SVG, each converted to a PDF XObject scaled to fill its
    /// media box.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();

        let mut pages = Vec::with_capacity(self.pages.len());
        for svg in &self.pages {
            let tree = usvg::Tree::from_str(svg, &options)
                .map_err(|e| RenderError::Svg(e.to_string()))?;
            let (chunk, svg_ref) =
                svg2pdf::to_chunk(&tree, svg2pdf::ConversionOptions::default())
                    .map_err(|e| RenderError::Pdf(e.to_string()))?;

            // Rehome the converted chunk's refs into this document's space.
            let mut ref_map = HashMap::new();
            let chunk =
                chunk.renumber(|old| *ref_map.entry(old).or_insert_with(|| alloc.bump()));
            let svg_id = *ref_map.get(&svg_ref).ok_or_else(|| {
                RenderError::Pdf("converted SVG chunk lost its root reference".to_string())
            })?;

            pages.push(PageObjects {
                page_id: alloc.bump(),
                content_id: alloc.bump(),
                svg_id,
                chunk,
            });
        }

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(pages.iter().map(|p| p.page_id))
            .count(pages.len() as i32);

        let (w, h) = (self.width as f32, self.height as f32);
        for p in &pages {
            let mut page = pdf.page(p.page_id);
            page.media_box(Rect::new(0.0, 0.0, w, h));
            page.parent(page_tree_id);
            page.contents(p.content_id);
            page.resources().x_objects().pair(SVG_NAME, p.svg_id);
            page.finish();

            // The XObject is normalized to a unit square; scale it to the page.
            let mut content = Content::new();
            content.transform([w, 0.0, 0.0, h, 0.0, 0.0]);
            content.x_object(SVG_NAME);
            pdf.stream(p.content_id, &content.finish());
        }
        for p in &pages {
            pdf.extend(&p.chunk);
        }

        Ok(pdf.finish())
    }

    /// Writes the serialized document to `path` in one shot.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
