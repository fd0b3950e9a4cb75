use lopdf::content::{Content, Operation};
use lopdf::{Document as LopdfDocument, Object};

/// Resource name the renderer gives the ZapfDingbats font.
const DINGBATS: &[u8] = b"F5";

/// Decoded content-stream operations of every page, in order.
pub fn page_operations(doc: &LopdfDocument) -> Vec<Operation> {
    let mut operations = Vec::new();
    for (_page_num, page_id) in doc.get_pages() {
        let content = doc.get_page_content(page_id).expect("page content");
        operations.extend(Content::decode(&content).expect("decodable content").operations);
    }
    operations
}

/// `(font resource, string)` for every `Tj`.
fn shown_strings(doc: &LopdfDocument) -> Vec<(Vec<u8>, String)> {
    let mut font = Vec::new();
    let mut shown = Vec::new();
    for op in page_operations(doc) {
        match (op.operator.as_str(), op.operands.first()) {
            ("Tf", Some(Object::Name(name))) => font = name.clone(),
            ("Tj", Some(Object::String(bytes, _))) => {
                shown.push((font.clone(), String::from_utf8_lossy(bytes).into_owned()))
            }
            _ => {}
        }
    }
    shown
}

/// Text painted with the Helvetica faces, check marks excluded.
pub fn shown_text(doc: &LopdfDocument) -> Vec<String> {
    shown_strings(doc)
        .into_iter()
        .filter(|(font, _)| font != DINGBATS)
        .map(|(_, text)| text)
        .collect()
}

pub fn check_mark_count(doc: &LopdfDocument) -> usize {
    shown_strings(doc).iter().filter(|(font, _)| font == DINGBATS).count()
}

pub fn operator_count(doc: &LopdfDocument, operator: &str) -> usize {
    page_operations(doc)
        .iter()
        .filter(|op| op.operator == operator)
        .count()
}
