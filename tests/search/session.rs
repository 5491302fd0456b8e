//! Session transitions over the bundled catalog.

use crate::common::{builtin_session, builtin_store, form_numbers};
use formsift::{SearchConfig, SearchSession, SearchStats, SelectionState};

#[test]
fn test_paging_through_catalog() {
    let mut session = builtin_session();

    let page = session.next_page();
    assert_eq!(page.page, 2);
    assert_eq!(page.range(), Some((6, 10)));
    assert_eq!(
        form_numbers(page.items),
        vec![
            "1099-NEC",
            "Schedule SE (Form 1040)",
            "1065",
            "1120-S",
            "Schedule 8812 (Form 1040)"
        ]
    );

    // Past the end stays on the last page
    assert_eq!(session.next_page().page, 2);
    assert_eq!(session.go_to_page(99).page, 2);
    assert_eq!(session.go_to_page(-1).page, 1);
    assert_eq!(session.prev_page().page, 1);
}

#[test]
fn test_custom_page_size() {
    let config = SearchConfig::default().with_page_size(3).unwrap();
    let mut session = SearchSession::new(builtin_store(), config).unwrap();

    assert_eq!(session.visible_page().total_pages, 4);
    let last = session.go_to_page(4);
    assert_eq!(form_numbers(last.items), vec!["Schedule 8812 (Form 1040)"]);
    assert_eq!(last.range(), Some((10, 10)));
}

#[test]
fn test_no_results_page() {
    let mut session = builtin_session();
    session.set_query("xyzzy");

    let page = session.visible_page();
    assert!(page.items.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.range(), None);
    assert_eq!(session.stats(), SearchStats::new(0, 10));
}

#[test]
fn test_clearing_query_restores_catalog() {
    let mut session = builtin_session();
    session.set_query("payroll");
    assert_eq!(session.stats().found, 2);
    assert_eq!(session.stats().match_rate, 20);

    session.clear_query();
    assert_eq!(session.state().len(), 10);
    assert_eq!(session.stats().match_rate, 100);
}

#[test]
fn test_select_from_results_then_dismiss() {
    let mut session = builtin_session();
    session.set_query("child tax credit");

    let record = session.select_visible_row(0).unwrap();
    assert_eq!(record.form_number, "Schedule 8812 (Form 1040)");
    assert_eq!(
        session.download_url(),
        Some("https://www.irs.gov/pub/irs-pdf/f1040s8.pdf")
    );

    session.dismiss();
    assert_eq!(session.selection(), &SelectionState::Closed);
    assert_eq!(session.download_url(), None);
}

#[test]
fn test_selection_survives_searching_and_paging() {
    let mut session = builtin_session();
    session.select("941");
    session.set_query("partnership");
    session.next_page();
    session.clear_query();
    assert_eq!(session.selected().unwrap().form_number, "941");
}

#[test]
fn test_selection_replaces_previous() {
    let mut session = builtin_session();
    session.select("W-2");
    session.select("W-4");
    assert_eq!(session.selected().unwrap().form_number, "W-4");
}

#[test]
fn test_unknown_form_leaves_selection_alone() {
    let mut session = builtin_session();
    assert!(session.select("W-9").is_none());
    assert!(!session.selection().is_open());

    session.select("1065");
    assert!(session.select("").is_none());
    assert_eq!(session.selected().unwrap().form_number, "1065");
}
