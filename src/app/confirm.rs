// SPDX-License-Identifier: MPL-2.0
//! Where confirmed selections go.
//!
//! The page selector only reports which pages were selected when Done is
//! pressed. A [`ConfirmHandler`] decides what happens next. Any
//! `Fn(&[PageId])` closure is a handler, so embedding applications can pass a
//! callback to [`run_with_handler`](super::run_with_handler).

use crate::ui::page_selector::PageId;
use std::io::Write;

pub trait ConfirmHandler: Send + Sync {
    fn confirm(&self, pages: &[PageId]);
}

impl<F> ConfirmHandler for F
where
    F: Fn(&[PageId]) + Send + Sync,
{
    fn confirm(&self, pages: &[PageId]) {
        self(pages);
    }
}

/// Identifiers of the given pages, in the order given.
#[must_use]
pub fn page_ids(pages: &[PageId]) -> Vec<&'static str> {
    pages.iter().map(|page| page.as_str()).collect()
}

/// Default handler: logs the selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConfirmation;

impl ConfirmHandler for LogConfirmation {
    fn confirm(&self, pages: &[PageId]) {
        tracing::info!("Selected pages: {:?}", page_ids(pages));
    }
}

/// Writes one page identifier per line to stdout, for use from scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintConfirmation;

impl PrintConfirmation {
    fn write_to(writer: &mut impl Write, pages: &[PageId]) -> std::io::Result<()> {
        for id in page_ids(pages) {
            writeln!(writer, "{id}")?;
        }
        writer.flush()
    }
}

impl ConfirmHandler for PrintConfirmation {
    fn confirm(&self, pages: &[PageId]) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        if let Err(err) = Self::write_to(&mut lock, pages) {
            tracing::warn!(%err, "failed to print selection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn page_ids_preserve_order() {
        assert_eq!(
            page_ids(&[PageId::Page1, PageId::Page3]),
            vec!["page1", "page3"]
        );
        assert!(page_ids(&[]).is_empty());
    }

    #[test]
    fn print_confirmation_writes_one_id_per_line() {
        let mut out = Vec::new();
        PrintConfirmation::write_to(&mut out, &[PageId::Page2, PageId::Page4])
            .expect("writing to a Vec cannot fail");
        assert_eq!(String::from_utf8(out).unwrap(), "page2\npage4\n");
    }

    #[test]
    fn closures_are_handlers() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        let handler = move |pages: &[PageId]| sink.lock().unwrap().extend_from_slice(pages);

        handler.confirm(&[PageId::Page1]);

        assert_eq!(*received.lock().unwrap(), vec![PageId::Page1]);
    }
}
