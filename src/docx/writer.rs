use std::io::{Cursor, Seek, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::WORDML_NAMESPACE;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/><Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#;

const APP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>zhvi</Application></Properties>"#;

fn core_xml() -> String {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:creator>zhvi</dc:creator><dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified></cp:coreProperties>"#
    )
}

fn write_text_run<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    let mut t = BytesStart::new("w:t");
    t.push_attribute(("xml:space", "preserve"));
    writer.write_event(Event::Start(t)).context("write w:t")?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .context("write text")?;
    writer.write_event(Event::End(BytesEnd::new("w:t"))).context("close w:t")?;
    Ok(())
}

// Line breaks become <w:br/>, tabs <w:tab/>, all inside a single run
fn write_paragraph<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("w:p")))
        .context("write w:p")?;

    if !text.is_empty() {
        writer
            .write_event(Event::Start(BytesStart::new("w:r")))
            .context("write w:r")?;

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for (line_index, line) in normalized.split('\n').enumerate() {
            if line_index > 0 {
                writer
                    .write_event(Event::Empty(BytesStart::new("w:br")))
                    .context("write w:br")?;
            }
            for (piece_index, piece) in line.split('\t').enumerate() {
                if piece_index > 0 {
                    writer
                        .write_event(Event::Empty(BytesStart::new("w:tab")))
                        .context("write w:tab")?;
                }
                if !piece.is_empty() {
                    write_text_run(writer, piece)?;
                }
            }
        }

        writer
            .write_event(Event::End(BytesEnd::new("w:r")))
            .context("close w:r")?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("w:p")))
        .context("close w:p")?;
    Ok(())
}

/// Serialize paragraphs into a `word/document.xml` part
pub fn document_xml(paragraphs: &[String]) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .context("write decl")?;

    let mut document = BytesStart::new("w:document");
    document.push_attribute(("xmlns:w", WORDML_NAMESPACE));
    writer.write_event(Event::Start(document)).context("write w:document")?;
    writer
        .write_event(Event::Start(BytesStart::new("w:body")))
        .context("write w:body")?;

    for paragraph in paragraphs {
        write_paragraph(&mut writer, paragraph)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("w:body")))
        .context("close w:body")?;
    writer
        .write_event(Event::End(BytesEnd::new("w:document")))
        .context("close w:document")?;

    Ok(writer.into_inner().into_inner())
}

/// Write a complete `.docx` package holding the given paragraphs
pub fn write_docx<W: Write + Seek>(paragraphs: &[String], out: W) -> Result<W> {
    let document = document_xml(paragraphs)?;
    let core = core_xml();
    let parts: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
        ("_rels/.rels", ROOT_RELS_XML.as_bytes()),
        ("docProps/core.xml", core.as_bytes()),
        ("docProps/app.xml", APP_XML.as_bytes()),
        ("word/document.xml", &document),
    ];

    let mut zout = ZipWriter::new(out);
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, data) in parts {
        zout.start_file(name, opts)
            .with_context(|| format!("start zip file: {}", name))?;
        zout.write_all(data)
            .with_context(|| format!("write zip file: {}", name))?;
    }
    zout.finish().context("finish zip")
}
