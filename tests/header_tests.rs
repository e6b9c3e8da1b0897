use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use licheader::definition::{HeaderDefinition, LineEnding};
use licheader::header::{Encoding, Header, Properties, TemplateLocation};
use licheader::styles::HeaderStyle;
use licheader::HeaderError;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn year_2008() -> Properties {
  let mut props = HashMap::new();
  props.insert("year".to_string(), "2008".to_string());
  props
}

fn two_line_header() -> Result<Header> {
  Ok(Header::from_text("inline", "Copyright 2008\nApache License", None)?)
}

#[test]
fn test_load_fixture_header() -> Result<()> {
  let location = fixture("test-header1.txt");
  let header = Header::load(location.as_path(), Some(&year_2008()))?;

  assert_eq!(header.line_count(), 13);
  assert!(header.as_one_line_str().contains("2008"));
  assert_eq!(header.location(), &TemplateLocation::Path(location));
  Ok(())
}

#[test]
fn test_asp_rendering_matches_expected_file() -> Result<()> {
  let header = Header::load(fixture("test-header1.txt"), Some(&year_2008()))?;
  let expected = fs::read_to_string(fixture("test-header2.txt"))?;

  let unix = !expected.contains("\r\n");
  let rendered = header.build_for_definition(&HeaderStyle::Asp.definition(), LineEnding::from_unix(unix));
  assert_eq!(rendered, expected);
  Ok(())
}

#[test]
fn test_missing_file_error_carries_location_and_cause() -> Result<()> {
  let dir = tempdir()?;
  let missing = dir.path().join("missing-header.txt");

  let err = Header::load(missing.as_path(), None).expect_err("missing file");
  let message = err.to_string();
  assert!(message.starts_with("Cannot read header document "));
  assert!(message.contains("missing-header.txt"));
  assert!(message.contains(". Cause: "));

  match err {
    HeaderError::Read { location, message: cause, source } => {
      assert!(message.ends_with(&format!(". Cause: {}", source)));
      assert_eq!(cause, source.to_string());
      assert_eq!(location, TemplateLocation::Path(missing));
      assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
    HeaderError::InvalidLocation => anyhow::bail!("expected a read error"),
  }
  Ok(())
}

#[test]
fn test_invalid_utf8_is_a_read_error() -> Result<()> {
  let dir = tempdir()?;
  let path = dir.path().join("latin1.txt");
  fs::write(&path, b"Copyright \xa9 2008 Caf\xe9")?;

  assert!(matches!(
    Header::load(path.as_path(), None),
    Err(HeaderError::Read { .. })
  ));

  let header = Header::load_with_encoding(path.as_path(), None, Encoding::Latin1)?;
  assert_eq!(header.as_str(), "Copyright \u{a9} 2008 Caf\u{e9}");
  Ok(())
}

#[test]
fn test_lines_match_split_of_content() -> Result<()> {
  for text in ["a\nb", "a\r\nb\r\n", "one line", "x\n\ny\n\n", "\ttabbed  \n  spaced"] {
    let header = Header::from_text("inline", text, None)?;
    let stripped = header.as_str().replace('\r', "");
    let mut expected: Vec<&str> = stripped.split('\n').collect();
    while expected.len() > 1 && expected.last() == Some(&"") {
      expected.pop();
    }
    assert_eq!(header.lines(), expected.as_slice(), "lines of {text:?}");
  }
  Ok(())
}

#[test]
fn test_signature_is_whitespace_free_compression() -> Result<()> {
  let header = Header::from_text("inline", " Copyright\t2008 \r\n  Me \n", None)?;
  let signature = header.as_one_line_str();

  assert!(!signature.contains([' ', '\t', '\r', '\n']));
  let compressed: String = header
    .as_str()
    .chars()
    .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
    .collect();
  assert_eq!(signature, compressed);
  Ok(())
}

#[test]
fn test_rendering_is_deterministic() -> Result<()> {
  let header = two_line_header()?;
  let definition = HeaderStyle::XmlStyle.definition();
  assert_eq!(
    header.build_for_definition(&definition, LineEnding::Windows),
    header.build_for_definition(&definition, LineEnding::Windows)
  );
  Ok(())
}

#[test]
fn test_empty_definition_round_trips_content() -> Result<()> {
  let header = Header::from_text("inline", "first  \r\n\r\nsecond\t\r\n", None)?;
  let rendered = header.build_for_definition(&HeaderDefinition::default(), LineEnding::Unix);
  assert_eq!(rendered, "first\n\nsecond\n");
  Ok(())
}

#[test]
fn test_line_ending_selection() -> Result<()> {
  let header = two_line_header()?;
  for style in HeaderStyle::ALL {
    let definition = style.definition();

    let windows = header.build_for_definition(&definition, LineEnding::Windows);
    let bytes = windows.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
      if *b == b'\n' {
        assert!(i > 0 && bytes[i - 1] == b'\r', "bare newline in {} output", style.name());
      }
    }

    let unix = header.build_for_definition(&definition, LineEnding::Unix);
    assert!(!unix.contains('\r'), "carriage return in {} output", style.name());
  }
  Ok(())
}

#[test]
fn test_block_and_line_scenarios() -> Result<()> {
  let header = two_line_header()?;

  let block = HeaderDefinition::new("/*", " * ", " */");
  assert_eq!(
    header.build_for_definition(&block, LineEnding::from_unix(true)),
    "/*\n * Copyright 2008\n * Apache License\n */\n"
  );

  let line = HeaderDefinition::new("", "// ", "");
  assert_eq!(
    header.build_for_definition(&line, LineEnding::from_unix(false)),
    "// Copyright 2008\r\n// Apache License\r\n"
  );
  Ok(())
}

#[test]
fn test_script_style_eol_end_line() -> Result<()> {
  let header = two_line_header()?;
  assert_eq!(
    header.build_for_definition(&HeaderStyle::ScriptStyle.definition(), LineEnding::Unix),
    "#\n# Copyright 2008\n# Apache License\n#\n\n"
  );
  Ok(())
}

#[test]
fn test_detects_rendered_header_in_every_style() -> Result<()> {
  let header = Header::load(fixture("test-header1.txt"), Some(&year_2008()))?;
  for style in HeaderStyle::ALL {
    let definition = style.definition();
    let rendered = header.build_for_definition(&definition, LineEnding::Windows);
    let file = format!("{rendered}\nbody of the file\n");
    assert!(header.is_present_in(&file, &definition), "{} header not detected", style.name());
  }
  Ok(())
}

#[test]
fn test_header_is_shareable_across_threads() -> Result<()> {
  let header = std::sync::Arc::new(two_line_header()?);
  let handles: Vec<_> = [LineEnding::Unix, LineEnding::Windows]
    .into_iter()
    .map(|line_ending| {
      let header = std::sync::Arc::clone(&header);
      std::thread::spawn(move || header.build_for_definition(&HeaderStyle::SlashstarStyle.definition(), line_ending))
    })
    .collect();

  for handle in handles {
    let rendered = handle.join().map_err(|_| anyhow::anyhow!("render thread panicked"))?;
    assert!(rendered.starts_with("/*"));
  }
  Ok(())
}

#[test]
fn test_detects_rendering_when_marker_is_split_by_spaces() -> Result<()> {
  let header = Header::from_text("inline", "Section - - end", None)?;
  let definition = HeaderStyle::DoubledashesStyle.definition();
  let rendered = header.build_for_definition(&definition, LineEnding::Unix);

  assert!(header.is_present_in(&rendered, &definition));
  assert!(!header.is_present_in("-- Section end\n", &HeaderStyle::SlashstarStyle.definition()));
  Ok(())
}

#[test]
fn test_blank_header_is_never_present() -> Result<()> {
  let definition = HeaderStyle::SlashstarStyle.definition();

  let blank = Header::from_text("inline", "   ", None)?;
  assert!(!blank.is_present_in("fn main() {}\n", &definition));

  let only_markers = Header::from_text("inline", "/* */", None)?;
  assert!(!only_markers.is_present_in("/* */\nfn main() {}\n", &definition));
  Ok(())
}
