//! Shared helpers for integration tests
//!
//! Builds minimal `.xlsx` workbooks on disk: one sheet, inline strings, no
//! styles. That is enough for calamine to read the cells back.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Header row of the listing workbook
pub const LISTING_HEADER: [&str; 8] = ["NO", "NAMA RUMAH", "HARGA", "LB", "LT", "KT", "KM", "GRS"];

#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Num(f64),
    Empty,
}

pub use Cell::{Empty, Num, Text};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

fn column_letters(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn sheet_xml(rows: &[Vec<Cell<'_>>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    for (r, row) in rows.iter().enumerate() {
        xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_letters(c), r + 1);
            match cell {
                Cell::Text(text) => xml.push_str(&format!(
                    r#"<c r="{reference}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                    escape(text)
                )),
                Cell::Num(n) => xml.push_str(&format!(r#"<c r="{reference}"><v>{n}</v></c>"#)),
                Cell::Empty => {},
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Write a single-sheet workbook at `path`
pub fn write_xlsx(path: &Path, rows: &[Vec<Cell<'_>>]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Stored);

    let sheet = sheet_xml(rows);
    let parts: [(&str, &str); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", &sheet),
    ];

    for (name, body) in parts {
        zip.start_file(name, options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

/// Listing row in sheet order: NO, name, price, LB, LT, KT, KM, GRS
pub fn listing<'a>(no: f64, name: &'a str, price: Cell<'a>, rest: [Cell<'a>; 5]) -> Vec<Cell<'a>> {
    let mut row = vec![Num(no), Text(name), price];
    row.extend(rest);
    row
}

pub fn header() -> Vec<Cell<'static>> {
    LISTING_HEADER.iter().map(|h| Text(*h)).collect()
}

/// A small workbook covering every rejection path
///
/// Cleans to two records: "Rumah Asri" and "Rumah Mewah".
pub fn sample_rows() -> Vec<Vec<Cell<'static>>> {
    vec![
        header(),
        listing(1.0, "Rumah Asri", Text("Rp 100,000"), [Num(50.0), Num(60.0), Num(2.0), Num(1.0), Num(0.0)]),
        listing(2.0, "Rumah Asri", Text("Rp100.000"), [Num(50.0), Num(60.0), Num(2.0), Num(1.0), Num(0.0)]),
        listing(3.0, "Rumah Mewah", Num(2_500_000_000.0), [Num(120.5), Num(150.0), Num(4.0), Num(3.0), Num(2.0)]),
        listing(4.0, "Rumah Kosong", Text("N/A"), [Num(40.0), Num(60.0), Num(2.0), Num(1.0), Num(0.0)]),
        listing(5.0, "Rumah Nol", Num(350_000_000.0), [Num(0.0), Num(60.0), Num(2.0), Num(1.0), Num(0.0)]),
        listing(6.0, "Tanpa Garasi", Num(400_000_000.0), [Num(36.0), Num(72.0), Num(2.0), Num(1.0), Empty]),
        listing(7.0, "Villa", Num(900_000_000.0), [Num(80.0), Num(100.0), Text("tiga"), Num(2.0), Num(1.0)]),
    ]
}

/// Expected CSV for [`sample_rows`]
pub const SAMPLE_CSV: &str = "name,price,building_area,land_area,bedrooms,bathrooms,garage\n\
Rumah Asri,100000,50,60,2,1,0\n\
Rumah Mewah,2500000000,120.5,150,4,3,2\n";
