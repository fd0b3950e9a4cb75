mod common;

use common::fixtures::{report_card_template, student_record};
use common::{GeneratedPdf, TestResult, init_logger, offline_renderer};
use reportcard::{PageFormat, PipelineError, RenderData, ReportCardBuilder, Template};
use serde_json::json;
use std::sync::Arc;

fn media_box(pdf: &GeneratedPdf) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let page_id = *pdf.doc.get_pages().values().next().ok_or("no pages")?;
    let page = pdf.doc.get_object(page_id)?.as_dict()?;
    let values = page
        .get(b"MediaBox")?
        .as_array()?
        .iter()
        .map(|v| v.as_float())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(values)
}

#[tokio::test]
async fn render_json_produces_a_reloadable_pdf() -> TestResult {
    init_logger();
    let renderer = offline_renderer();
    let bytes = renderer
        .render_json(&report_card_template().to_string(), &student_record().to_string())
        .await?;

    assert!(bytes.starts_with(b"%PDF-"));
    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_eq!(pdf.page_count(), 1);
    assert!(pdf.contains_text("Ada Lovelace"));
    Ok(())
}

#[tokio::test]
async fn page_format_sets_the_media_box() -> TestResult {
    let renderer = ReportCardBuilder::new()
        .with_http(false)
        .with_page_format(PageFormat::Letter)
        .build()?;
    let bytes = renderer.render_json(r#"{"elements": []}"#, "{}").await?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_eq!(media_box(&pdf)?, vec![0.0, 0.0, 612.0, 792.0]);
    Ok(())
}

#[tokio::test]
async fn malformed_inputs_fail_the_call() {
    let renderer = offline_renderer();

    let result = renderer.render_json("{ not json", "{}").await;
    assert!(matches!(result, Err(PipelineError::Template(_))));

    let result = renderer.render_json(r#"{"elements": 5}"#, "{}").await;
    assert!(matches!(result, Err(PipelineError::Template(_))));

    let result = renderer.render_json(r#"{"title": "no elements"}"#, "{}").await;
    assert!(matches!(result, Err(PipelineError::Template(_))));

    let result = renderer.render_json(r#"{"elements": []}"#, "[1, 2]").await;
    assert!(matches!(result, Err(PipelineError::Json(_))));
}

#[tokio::test]
async fn null_lists_in_the_record_still_render() -> TestResult {
    let renderer = offline_renderer();
    let mut record = student_record();
    record["results"] = json!(null);
    record["gradingScale"] = json!(null);
    record["school"]["motto"] = json!(2024);

    let bytes = renderer
        .render_json(&report_card_template().to_string(), &record.to_string())
        .await?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_eq!(pdf.page_count(), 1);
    assert!(pdf.contains_text("Ada Lovelace"));
    Ok(())
}

#[tokio::test]
async fn render_many_keeps_input_order() -> TestResult {
    init_logger();
    let renderer = offline_renderer();
    let template = Template::from_value(&json!({ "elements": [
        { "type": "dynamic", "x": 40, "y": 40, "width": 300, "height": 20, "metadata": { "field": "student_name" } },
        { "type": "dynamic", "x": 40, "y": 70, "width": 300, "height": 20, "metadata": { "field": "position_in_class" } }
    ]}))?;
    let names = ["Ada Lovelace", "Charles Babbage", "Mary Somerville"];
    let records = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            RenderData::from_value(json!({
                "student": { "user": { "name": name } },
                "summary": { "position": i + 1, "studentsInClass": 3 }
            }))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let outputs = renderer.render_many(&template, &records).await;
    assert_eq!(outputs.len(), 3);
    for (i, (output, name)) in outputs.into_iter().zip(names).enumerate() {
        let pdf = GeneratedPdf::from_bytes(output?)?;
        assert_eq!(pdf.texts(), vec![name.to_string(), format!("{} of 3", i + 1)]);
    }
    Ok(())
}

#[tokio::test]
async fn renderer_clones_share_configuration() -> TestResult {
    let renderer = ReportCardBuilder::new()
        .with_image_source(Arc::new(reportcard::InMemoryResourceProvider::new()))
        .with_reference_width(1000.0)
        .build()?;
    let clone = renderer.clone();
    assert_eq!(clone.config().reference_width, 1000.0);

    let template = Template::from_value(&report_card_template())?;
    let data = RenderData::from_value(student_record())?;
    let (a, b) = tokio::join!(
        renderer.render_to_bytes(&template, &data),
        clone.render_to_bytes(&template, &data)
    );
    assert_eq!(
        GeneratedPdf::from_bytes(a?)?.texts(),
        GeneratedPdf::from_bytes(b?)?.texts()
    );
    Ok(())
}
