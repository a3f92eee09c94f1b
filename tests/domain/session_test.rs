use chatgenius::domain::{ChatMode, ContentKind, DocumentContent, Session};

fn loaded_session() -> Session {
    let mut session = Session::new(ChatMode::NoAi, 10);
    session.set_document(DocumentContent::new(
        "--- Page 1 ---\nHello.\n\n".to_string(),
        1,
    ));
    session.set_web_text("Scraped line".to_string());
    session
}

#[test]
fn given_new_session_when_queried_then_no_content_is_loaded() {
    let session = Session::new(ChatMode::NoAi, 10);

    assert!(!session.has_document());
    assert!(!session.has_web());
    assert_eq!(session.document_text(), "");
    assert_eq!(session.web_text(), "");
}

#[test]
fn given_loaded_session_when_clearing_pdf_then_web_survives() {
    let mut session = loaded_session();

    session.clear(ContentKind::Pdf);

    assert!(!session.has_document());
    assert!(session.has_web());
}

#[test]
fn given_loaded_session_when_clearing_web_then_document_survives() {
    let mut session = loaded_session();

    session.clear(ContentKind::Web);

    assert!(session.has_document());
    assert!(!session.has_web());
}

#[test]
fn given_loaded_session_when_clearing_all_then_nothing_survives() {
    let mut session = loaded_session();

    session.clear(ContentKind::All);

    assert!(!session.has_document());
    assert!(!session.has_web());
}

#[test]
fn given_new_upload_when_set_document_then_replaces_wholesale() {
    let mut session = loaded_session();

    session.set_document(DocumentContent::new("--- Page 1 ---\n".to_string(), 3));

    let doc = session.document().unwrap();
    assert_eq!(doc.num_pages, 3);
    assert_eq!(doc.text, "--- Page 1 ---\n");
}

#[test]
fn given_loaded_session_when_snapshotting_then_status_reflects_state() {
    let session = loaded_session();

    let status = session.status(true);

    assert_eq!(status.mode, ChatMode::NoAi);
    assert!(status.pdf_loaded);
    assert!(status.web_loaded);
    assert_eq!(status.web_length, "Scraped line".chars().count());
    assert_eq!(status.history_count, 0);
    assert!(status.ai_enabled);
    assert_eq!(status.max_history, 10);
    assert!(status.features.contains(&"pdf_analysis"));
}

#[test]
fn given_unknown_kind_string_when_parsing_then_returns_none() {
    assert_eq!(ContentKind::from_str("audio"), None);
    assert_eq!(ContentKind::from_str("pdf"), Some(ContentKind::Pdf));
    assert_eq!(ContentKind::from_str("web"), Some(ContentKind::Web));
    assert_eq!(ContentKind::from_str("all"), Some(ContentKind::All));
}
