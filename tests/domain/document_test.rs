use ollama_relay::domain::{ContentType, Document};

#[test]
fn given_pdf_filename_in_any_case_when_classifying_then_returns_pdf() {
    assert_eq!(ContentType::from_filename("report.pdf"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_filename("REPORT.PDF"), Some(ContentType::Pdf));
}

#[test]
fn given_other_filenames_when_classifying_then_not_pdf() {
    assert_eq!(ContentType::from_filename("notes.txt"), Some(ContentType::Text));
    assert_eq!(ContentType::from_filename("photo.png"), None);
    assert_eq!(ContentType::from_filename("pdf"), None);
}

#[test]
fn given_document_when_created_then_keeps_metadata() {
    let document = Document::new("a.pdf".to_string(), ContentType::Pdf, 42);

    assert_eq!(document.filename, "a.pdf");
    assert_eq!(document.content_type.as_mime(), "application/pdf");
    assert_eq!(document.size_bytes, 42);
}
