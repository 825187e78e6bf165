// SPDX-License-Identifier: MPL-2.0
//! Canonical selection state: the "All pages" flag and the four pages.
//!
//! The aggregate flag is never edited on its own. It is recomputed from the
//! pages after every page mutation, so `all_selected` always equals the
//! logical AND of every page.

use std::fmt;

/// One of the four selectable pages, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    Page1,
    Page2,
    Page3,
    Page4,
}

impl PageId {
    /// Every page, in declaration order.
    pub const ALL: [PageId; 4] = [PageId::Page1, PageId::Page2, PageId::Page3, PageId::Page4];

    /// Stable identifier reported on confirmation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Page1 => "page1",
            PageId::Page2 => "page2",
            PageId::Page3 => "page3",
            PageId::Page4 => "page4",
        }
    }

    /// Text shown next to the page's checkbox.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PageId::Page1 => "Page 1",
            PageId::Page2 => "Page 2",
            PageId::Page3 => "Page 3",
            PageId::Page4 => "Page 4",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PageId::Page1 => 0,
            PageId::Page2 => 1,
            PageId::Page3 => 2,
            PageId::Page4 => 3,
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether every page is selected.
#[must_use]
pub fn recompute(pages: &[bool; 4]) -> bool {
    pages.iter().all(|&selected| selected)
}

/// Snapshot of which pages are selected.
///
/// Starts with nothing selected. Mutations go through [`Selection::set_all`]
/// and [`Selection::set_one`] only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    all_selected: bool,
    pages: [bool; 4],
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects or clears every page at once.
    pub fn set_all(&mut self, checked: bool) {
        self.all_selected = checked;
        self.pages = [checked; 4];
    }

    /// Selects or clears a single page, leaving the others untouched.
    pub fn set_one(&mut self, page: PageId, checked: bool) {
        self.pages[page.index()] = checked;
        self.all_selected = recompute(&self.pages);
    }

    #[must_use]
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    #[must_use]
    pub fn is_selected(&self, page: PageId) -> bool {
        self.pages[page.index()]
    }

    /// Selected pages in declaration order.
    #[must_use]
    pub fn selected(&self) -> Vec<PageId> {
        PageId::ALL
            .into_iter()
            .filter(|&page| self.is_selected(page))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(selection: &Selection) {
        let expected = PageId::ALL.iter().all(|&page| selection.is_selected(page));
        assert_eq!(selection.all_selected(), expected);
    }

    #[test]
    fn new_selection_is_empty() {
        let selection = Selection::new();
        assert!(!selection.all_selected());
        for page in PageId::ALL {
            assert!(!selection.is_selected(page));
        }
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn set_all_true_selects_everything() {
        let mut selection = Selection::new();
        selection.set_all(true);

        assert!(selection.all_selected());
        assert_eq!(selection.selected(), PageId::ALL.to_vec());
    }

    #[test]
    fn set_all_false_clears_everything() {
        let mut selection = Selection::new();
        selection.set_one(PageId::Page2, true);
        selection.set_all(false);

        assert!(!selection.all_selected());
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn set_one_leaves_other_pages_untouched() {
        let mut selection = Selection::new();
        selection.set_one(PageId::Page3, true);

        assert!(selection.is_selected(PageId::Page3));
        assert!(!selection.is_selected(PageId::Page1));
        assert!(!selection.is_selected(PageId::Page2));
        assert!(!selection.is_selected(PageId::Page4));
        assert!(!selection.all_selected());
    }

    #[test]
    fn selecting_every_page_in_any_order_sets_all() {
        let orders = [
            [PageId::Page4, PageId::Page2, PageId::Page1, PageId::Page3],
            [PageId::Page1, PageId::Page2, PageId::Page3, PageId::Page4],
            [PageId::Page3, PageId::Page1, PageId::Page4, PageId::Page2],
        ];

        for order in orders {
            let mut selection = Selection::new();
            for (step, page) in order.into_iter().enumerate() {
                selection.set_one(page, true);
                assert_eq!(selection.all_selected(), step == order.len() - 1);
            }

            for page in PageId::ALL {
                let mut cleared = selection;
                cleared.set_one(page, false);
                assert!(!cleared.all_selected());
            }
        }
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        All(bool),
        One(PageId, bool),
    }

    fn every_op() -> Vec<Op> {
        let mut ops = vec![Op::All(true), Op::All(false)];
        for page in PageId::ALL {
            ops.push(Op::One(page, true));
            ops.push(Op::One(page, false));
        }
        ops
    }

    fn apply(selection: &mut Selection, op: Op) {
        match op {
            Op::All(checked) => selection.set_all(checked),
            Op::One(page, checked) => selection.set_one(page, checked),
        }
    }

    #[test]
    fn invariant_holds_for_every_sequence_up_to_four_steps() {
        let ops = every_op();
        let mut sequences: Vec<Vec<Op>> = vec![Vec::new()];
        let mut checked = 0usize;

        for _ in 0..4 {
            let mut next = Vec::with_capacity(sequences.len() * ops.len());
            for sequence in &sequences {
                for &op in &ops {
                    let mut extended = sequence.clone();
                    extended.push(op);

                    let mut selection = Selection::new();
                    for &step in &extended {
                        apply(&mut selection, step);
                        assert_consistent(&selection);
                    }
                    checked += 1;
                    next.push(extended);
                }
            }
            sequences = next;
        }

        // 10 + 10^2 + 10^3 + 10^4
        assert_eq!(checked, 11_110);
    }

    #[test]
    fn selected_keeps_declaration_order() {
        let mut selection = Selection::new();
        selection.set_one(PageId::Page3, true);
        selection.set_one(PageId::Page1, true);

        assert_eq!(selection.selected(), vec![PageId::Page1, PageId::Page3]);
    }

    #[test]
    fn recompute_is_logical_and() {
        assert!(recompute(&[true; 4]));
        assert!(!recompute(&[true, true, false, true]));
        assert!(!recompute(&[false; 4]));
    }

    #[test]
    fn page_identifiers_and_labels() {
        let ids: Vec<_> = PageId::ALL.iter().map(|page| page.as_str()).collect();
        assert_eq!(ids, ["page1", "page2", "page3", "page4"]);
        assert_eq!(PageId::Page4.label(), "Page 4");
        assert_eq!(PageId::Page2.to_string(), "page2");
    }
}
