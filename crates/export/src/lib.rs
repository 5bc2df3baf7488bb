//! Export helpers for text and JSON calculation reports.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// Echoed input value in a report.
#[derive(Debug, Clone, Serialize)]
pub struct InputValue {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Computed value in a report; integer for vertical rates, real for distances.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Integer(i64),
    Real(f64),
}

/// Result of a single calculation, ready to be written out.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub kind: &'static str,
    pub inputs: Vec<InputValue>,
    pub value: ReportValue,
    pub unit: &'static str,
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Write the report as pretty-printed JSON followed by a newline.
pub fn write_json(writer: &mut dyn Write, report: &CalculationReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}

/// Write the report as aligned `name : value unit` lines.
pub fn write_text(writer: &mut dyn Write, report: &CalculationReport) -> io::Result<()> {
    writeln!(writer, "=== {} ===", report.kind)?;
    for input in &report.inputs {
        writeln!(writer, "{:<16}: {} {}", input.name, input.value, input.unit)?;
    }
    match report.value {
        ReportValue::Integer(v) => writeln!(writer, "{:<16}: {} {}", "result", v, report.unit),
        ReportValue::Real(v) => writeln!(writer, "{:<16}: {} {}", "result", v, report.unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalculationReport {
        CalculationReport {
            kind: "three_to_one",
            inputs: vec![
                InputValue {
                    name: "currentAltitude",
                    value: 10000.0,
                    unit: "ft",
                },
                InputValue {
                    name: "targetAltitude",
                    value: 2000.0,
                    unit: "ft",
                },
            ],
            value: ReportValue::Real(24.0),
            unit: "NM",
        }
    }

    #[test]
    fn json_report_keeps_numeric_value() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["kind"], "three_to_one");
        assert_eq!(parsed["value"].as_f64(), Some(24.0));
        assert_eq!(parsed["inputs"][1]["name"], "targetAltitude");
    }

    #[test]
    fn text_report_ends_with_result_line() {
        let mut buf = Vec::new();
        write_text(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("=== three_to_one ==="));
        assert!(text.trim_end().ends_with("result          : 24 NM"));
    }
}
