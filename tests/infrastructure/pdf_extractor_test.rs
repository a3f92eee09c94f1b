use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use chatgenius::application::ports::{PdfExtractError, PdfExtractor};
use chatgenius::infrastructure::pdf::LopdfExtractor;

/// Builds a minimal in-memory PDF with one text line per page.
fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 48.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

#[tokio::test]
async fn given_two_page_pdf_when_extracting_then_each_page_gets_marker_and_text() {
    let data = build_pdf(&["Alpha page text", "Beta page text"]);
    let extractor = LopdfExtractor::new();

    let content = extractor.extract(&data).await.unwrap();

    assert_eq!(content.num_pages, 2);
    let marker_one = content.text.find("--- Page 1 ---").unwrap();
    let marker_two = content.text.find("--- Page 2 ---").unwrap();
    let alpha = content.text.find("Alpha").unwrap();
    let beta = content.text.find("Beta").unwrap();
    assert!(marker_one < alpha);
    assert!(alpha < marker_two);
    assert!(marker_two < beta);
}

#[tokio::test]
async fn given_single_page_pdf_when_extracting_then_char_count_matches_text() {
    let data = build_pdf(&["Only page"]);
    let extractor = LopdfExtractor::new();

    let content = extractor.extract(&data).await.unwrap();

    assert_eq!(content.num_pages, 1);
    assert!(content.text.starts_with("--- Page 1 ---\n"));
    assert_eq!(content.char_count(), content.text.chars().count());
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_then_parse_failure_is_returned() {
    let extractor = LopdfExtractor::new();

    let error = extractor.extract(b"this is not a pdf at all").await.unwrap_err();

    assert!(matches!(error, PdfExtractError::ParseFailed(_)));
}
