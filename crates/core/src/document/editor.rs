//! Page editor: fetches a page's content, runs it through the processor
//! with a rewrite policy, and writes the result back.
//!
//! Only the page's own direct instruction stream is rewritten. Form
//! XObjects, tiling patterns and annotations are never descended into,
//! and the page's resource dictionary is passed through unmodified: the
//! rewrite injects inline numeric color operators only, so no new named
//! resources are ever needed.

use crate::error::{Result, RewriteError};
use crate::interp::processor::ContentProcessor;
use crate::rewrite::RewritePolicy;
use lopdf::Document;

/// Edits the immediate content streams of a document's pages.
pub struct PageEditor<'a> {
    document: &'a mut Document,
}

impl<'a> PageEditor<'a> {
    /// Wrap a document for in-session read + rewrite.
    ///
    /// Fails before any page is touched when the document cannot be
    /// rewritten as loaded; an encrypted document's streams cannot be
    /// edited and written back.
    pub fn new(document: &'a mut Document) -> Result<Self> {
        if document.is_encrypted() {
            return Err(RewriteError::StampingMode);
        }
        Ok(Self { document })
    }

    /// Rewrite one page's content stream in place.
    ///
    /// `page_number` is 1-indexed. The whole rewritten page is buffered
    /// before it replaces the stored content, so a failure leaves the
    /// page as it was.
    pub fn edit_page(&mut self, page_number: u32, policy: &mut RewritePolicy) -> Result<()> {
        let page_id = self
            .document
            .get_pages()
            .get(&page_number)
            .copied()
            .ok_or(RewriteError::PageNotFound(page_number))?;
        let content = self.document.get_page_content(page_id)?;

        policy.begin_page();
        let mut processor = ContentProcessor::new();
        let rewritten = processor.process(&content, policy)?;

        self.document.change_page_content(page_id, rewritten)?;
        Ok(())
    }

    /// Rewrite every page in increasing page-number order, aborting on the
    /// first failure.
    pub fn edit_document(&mut self, policy: &mut RewritePolicy) -> Result<()> {
        let page_numbers: Vec<u32> = self.document.get_pages().keys().copied().collect();
        for page_number in page_numbers {
            self.edit_page(page_number, policy)?;
        }
        Ok(())
    }
}
