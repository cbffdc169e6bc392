use anyhow::Result;
use blogger_html::utils::error::ErrorCategory;
use blogger_html::{convert, ConvertSettings, DisplayZone};
use std::path::Path;
use tempfile::TempDir;

const EXAMPLE_EXPORT: &str = r#"[
    {"metadata":{"published":{"timestamp":"2023-01-02T10:00:00Z"}},"content":"Hello","labels":["x"]},
    {"metadata":{"published":{"timestamp":"2023-01-01T09:00:00Z"}},"content":"World"}
]"#;

fn settings_in(dir: &Path, zone: DisplayZone) -> ConvertSettings {
    ConvertSettings::new(dir.join("blogger.json"), dir.join("blogger.html"), zone)
}

fn utc() -> DisplayZone {
    DisplayZone::Named(chrono_tz::UTC)
}

/// Values of every `attr="..."` occurrence, in document order.
fn attribute_values<'a>(html: &'a str, attr: &str) -> Vec<&'a str> {
    let needle = format!("{}=\"", attr);
    html.match_indices(&needle)
        .map(|(start, _)| {
            let rest = &html[start + needle.len()..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect()
}

#[test]
fn test_end_to_end_example() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("blogger.json"), EXAMPLE_EXPORT)?;

    let summary = convert(settings_in(temp_dir.path(), utc()))?;
    assert_eq!(summary.post_count, 2);
    assert_eq!(summary.invalid_timestamps, 0);
    assert_eq!(
        summary.output_path.as_deref(),
        Some(temp_dir.path().join("blogger.html").as_path())
    );

    let html = std::fs::read_to_string(temp_dir.path().join("blogger.html"))?;

    let world = html.find("World").unwrap();
    let hello = html.find("Hello").unwrap();
    assert!(world < hello, "World (2023-01-01) must precede Hello (2023-01-02)");

    assert!(html.contains(">2023-01-01 09:00:00</a>"));
    assert!(html.contains(">2023-01-02 10:00:00</a>"));

    let ids = attribute_values(&html, "id");
    assert_eq!(ids, vec!["2023-01-01T09:00:00Z", "2023-01-02T10:00:00Z"]);

    let fragments: Vec<&str> = attribute_values(&html, "href")
        .into_iter()
        .filter_map(|href| href.strip_prefix('#'))
        .collect();
    assert_eq!(fragments, ids);

    assert!(html.contains("          x\n"));
    assert_eq!(html.matches("</body>").count(), 1);
    assert_eq!(html.matches("</html>").count(), 1);
    Ok(())
}

#[test]
fn test_local_zone_formats_every_post() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("blogger.json"), EXAMPLE_EXPORT)?;

    convert(settings_in(temp_dir.path(), DisplayZone::Local))?;
    let html = std::fs::read_to_string(temp_dir.path().join("blogger.html"))?;

    for raw in ["2023-01-01T09:00:00Z", "2023-01-02T10:00:00Z"] {
        let expected = blogger_html::core::timestamp::format_timestamp(raw, &DisplayZone::Local)
            .unwrap();
        assert!(html.contains(&format!(">{}</a>", expected)));
    }
    Ok(())
}

#[test]
fn test_stable_order_for_equal_timestamps() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("blogger.json"),
        r#"[
            {"metadata":{"published":{"timestamp":"2023-05-01T00:00:00Z"}},"content":"later"},
            {"metadata":{"published":{"timestamp":"2023-04-01T00:00:00Z"}},"content":"twin-one"},
            {"metadata":{"published":{"timestamp":"2023-04-01T02:00:00+02:00"}},"content":"twin-two"}
        ]"#,
    )?;

    convert(settings_in(temp_dir.path(), utc()))?;
    let html = std::fs::read_to_string(temp_dir.path().join("blogger.html"))?;

    let one = html.find("twin-one").unwrap();
    let two = html.find("twin-two").unwrap();
    let later = html.find("later").unwrap();
    assert!(one < two && two < later);
    Ok(())
}

#[test]
fn test_content_and_labels_rendering() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("blogger.json"),
        r#"[
            {"metadata":{"published":{"timestamp":"2023-01-01T00:00:00Z"}},"content":"<b>x</b>","labels":["a","b"]},
            {"metadata":{"published":{"timestamp":"2023-01-02T00:00:00Z"}},"content":"plain"}
        ]"#,
    )?;

    convert(settings_in(temp_dir.path(), utc()))?;
    let html = std::fs::read_to_string(temp_dir.path().join("blogger.html"))?;

    assert!(html.contains("<b>x</b>"));
    assert!(!html.contains("&lt;b&gt;"));
    assert!(html.contains("          a, b\n"));
    assert!(!html.contains("undefined"));
    Ok(())
}

#[test]
fn test_empty_export_produces_shell() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("blogger.json"), "[]")?;

    let summary = convert(settings_in(temp_dir.path(), utc()))?;
    assert_eq!(summary.post_count, 0);

    let html = std::fs::read_to_string(temp_dir.path().join("blogger.html"))?;
    assert!(html.contains("<html>"));
    assert!(html.contains("<body class=\"p-3\">"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(!html.contains("class=\"post\""));
    Ok(())
}

#[test]
fn test_missing_content_fails_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("blogger.json"),
        r#"[{"metadata":{"published":{"timestamp":"2023-01-01T00:00:00Z"}},"labels":["a"]}]"#,
    )?;

    let err = convert(settings_in(temp_dir.path(), utc())).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Parse);
    assert!(err.to_string().contains("content"));
    assert!(!temp_dir.path().join("blogger.html").exists());
    Ok(())
}

#[test]
fn test_failed_run_leaves_existing_output_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("blogger.json"), "not json")?;
    std::fs::write(temp_dir.path().join("blogger.html"), "previous page")?;

    assert!(convert(settings_in(temp_dir.path(), utc())).is_err());
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("blogger.html"))?,
        "previous page"
    );
    Ok(())
}

#[test]
fn test_missing_input_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let err = convert(settings_in(temp_dir.path(), utc())).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Io);
    assert!(err.is_not_found());
    assert!(!temp_dir.path().join("blogger.html").exists());
    Ok(())
}

#[test]
fn test_invalid_timestamp_does_not_abort() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("blogger.json"),
        r#"[
            {"metadata":{"published":{"timestamp":"not-a-date"}},"content":"odd"},
            {"metadata":{"published":{"timestamp":"2023-01-01T00:00:00Z"}},"content":"fine"}
        ]"#,
    )?;

    let summary = convert(settings_in(temp_dir.path(), utc()))?;
    assert_eq!(summary.invalid_timestamps, 1);

    let html = std::fs::read_to_string(temp_dir.path().join("blogger.html"))?;
    assert!(html.find("fine").unwrap() < html.find("odd").unwrap());
    assert!(html.contains("<a id=\"not-a-date\"></a>"));
    assert!(html.contains(">Invalid timestamp</a>"));
    Ok(())
}
