use ammonia::clean_text;

use super::content::{ContentStore, base_id};
use crate::config::{DEFAULT_PDF_NAME, NOT_FOUND_MARKUP, SEARCH_PREVIEW_LEN};
use crate::models::{Language, SearchHit, Surface, Tab};

/// Resolves content ids into the editor surface.
///
/// Holds the current [`Surface`] and the markup of the most recently rendered
/// content, which [`ContentRenderer::search`] scans. Nothing else persists.
pub struct ContentRenderer {
    store: Box<dyn ContentStore + Send + Sync>,
    surface: Surface,
    /// Bumped on every mount, lets deferred tasks detect stale surfaces
    generation: u64,
    last_rendered: Option<String>,
}

impl ContentRenderer {
    pub fn new(store: Box<dyn ContentStore + Send + Sync>) -> Self {
        Self {
            store,
            surface: Surface::Welcome,
            generation: 0,
            last_rendered: None,
        }
    }

    /// Load content and mount it, replacing the whole surface.
    ///
    /// PDFs bypass the store: a viewer payload is built from the active tab's
    /// url and label. Unknown ids mount the fixed not-found payload.
    pub fn load_content(
        &mut self,
        content_id: &str,
        language: Language,
        active_tab: Option<&Tab>,
    ) -> &Surface {
        let surface = if language.is_pdf() {
            let file_name = active_tab
                .map(|t| t.label.clone())
                .unwrap_or_else(|| DEFAULT_PDF_NAME.to_string());
            let url = active_tab
                .and_then(|t| t.url.clone())
                .unwrap_or_else(|| format!("/{}", file_name));
            let markup = pdf_viewer_markup(&file_name, &url);
            Surface::Pdf {
                file_name,
                url,
                markup,
            }
        } else {
            match self.store.get(base_id(content_id)) {
                Some(markup) => Surface::Document {
                    content_id: content_id.to_string(),
                    language,
                    markup: markup.to_string(),
                },
                None => Surface::NotFound {
                    content_id: content_id.to_string(),
                    markup: NOT_FOUND_MARKUP.to_string(),
                },
            }
        };

        self.mount(surface)
    }

    /// Mount the empty state shown when no tab is open.
    pub fn show_welcome(&mut self) -> &Surface {
        self.mount(Surface::Welcome)
    }

    fn mount(&mut self, surface: Surface) -> &Surface {
        if let Some(markup) = surface.markup() {
            self.last_rendered = Some(markup.to_string());
        }
        self.generation = self.generation.wrapping_add(1);
        self.surface = surface;
        &self.surface
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Find lines of the last rendered markup containing `query`.
    ///
    /// Case-insensitive substring match, one hit per line, 1-indexed.
    /// Returns nothing if no content has been rendered yet.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let Some(content) = self.last_rendered.as_deref() else {
            return Vec::new();
        };
        let needle = query.to_lowercase();

        content
            .split('\n')
            .enumerate()
            .filter(|(_, line)| line.to_lowercase().contains(&needle))
            .map(|(index, line)| {
                let text = line.trim().to_string();
                let preview = text.chars().take(SEARCH_PREVIEW_LEN).collect();
                SearchHit {
                    line: index + 1,
                    text,
                    preview,
                }
            })
            .collect()
    }

    /// Line count of the last rendered markup.
    pub fn line_count(&self) -> usize {
        self.last_rendered
            .as_deref()
            .map(|c| c.split('\n').count())
            .unwrap_or(0)
    }
}

/// Viewer payload for a PDF document.
fn pdf_viewer_markup(file_name: &str, url: &str) -> String {
    let name = clean_text(file_name);
    let url = clean_text(url);
    format!(
        r#"<div class="content-section pdf-viewer">
    <div class="pdf-toolbar">
        <div class="pdf-title">{name}</div>
        <div class="pdf-actions">
            <a class="pdf-button" href="{url}" download>Download</a>
            <a class="pdf-button" href="{url}" target="_blank" rel="noopener">Open in new tab</a>
        </div>
    </div>
    <div class="pdf-frame-wrap">
        <object data="{url}#view=FitH" type="application/pdf" class="pdf-frame">
            <iframe src="{url}#view=FitH" class="pdf-frame"></iframe>
        </object>
    </div>
</div>"#
    )
}
