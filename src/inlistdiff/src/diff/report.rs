// inlistdiff/src/diff/report.rs

use crate::config::OutputFormat;
use crate::constants::{DEFAULT_LABEL, LABEL_WIDTH, VALUE_WIDTH};
use crate::diff::differ::{Finding, NamelistDiff};
use colored::{Color, Colorize};
use inlistrs::InlistValue;
use serde::Serialize;
use std::io::{self, Write};

/// A piece of a comparison report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum ReportBlock {
    /// Free text separating parts of the report (binary runs)
    Banner { lines: Vec<String> },
    Namelist(NamelistDiff),
}

/// Everything a comparison found, in the order it is printed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub blocks: Vec<ReportBlock>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_namelist(&mut self, diff: NamelistDiff) {
        self.blocks.push(ReportBlock::Namelist(diff));
    }

    pub fn push_banner<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks.push(ReportBlock::Banner {
            lines: lines.into_iter().map(Into::into).collect(),
        });
    }

    pub fn namelists(&self) -> impl Iterator<Item = &NamelistDiff> {
        self.blocks.iter().filter_map(|block| match block {
            ReportBlock::Namelist(diff) => Some(diff),
            ReportBlock::Banner { .. } => None,
        })
    }

    pub fn has_differences(&self) -> bool {
        self.namelists().any(NamelistDiff::has_differences)
    }

    pub fn write<W: Write>(&self, writer: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.write_text(writer),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)
            }
        }
    }

    /// Colored, line oriented rendering
    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for block in &self.blocks {
            match block {
                ReportBlock::Banner { lines } => {
                    for line in lines {
                        writeln!(writer, "{}", line)?;
                    }
                }
                ReportBlock::Namelist(diff) => write_namelist(writer, diff)?,
            }
        }
        Ok(())
    }
}

fn write_namelist<W: Write>(writer: &mut W, diff: &NamelistDiff) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", diff.kind.header())?;
    for finding in &diff.findings {
        write_finding(writer, finding)?;
    }
    writeln!(writer, "/ !end {} namelist", diff.kind)
}

fn write_finding<W: Write>(writer: &mut W, finding: &Finding) -> io::Result<()> {
    match finding {
        Finding::Mismatch {
            key,
            left_label,
            left,
            right_label,
            right,
        }
        | Finding::Match {
            key,
            left_label,
            left,
            right_label,
            right,
        } => {
            let color = if finding.is_difference() {
                Color::Red
            } else {
                Color::Green
            };
            colored_line(writer, option_line(left_label, key, left), color)?;
            colored_line(writer, option_line(right_label, key, right), color)?;
            writeln!(writer)
        }
        Finding::DiffersFromDefault {
            key,
            label,
            value,
            missing_label,
            default,
        } => {
            colored_line(writer, option_line(label, key, value), Color::Red)?;
            colored_line(
                writer,
                format!("{:<width$}\tmissing", missing_label, width = LABEL_WIDTH),
                Color::Red,
            )?;
            colored_line(writer, option_line(DEFAULT_LABEL, key, default), Color::Red)?;
            writeln!(writer)
        }
        Finding::MatchesDefault {
            key,
            label,
            value,
            default,
        } => {
            colored_line(writer, option_line(label, key, value), Color::Green)?;
            colored_line(writer, option_line(DEFAULT_LABEL, key, default), Color::Green)?;
            writeln!(writer)
        }
        Finding::NotInDefaults { key, .. } => {
            colored_line(writer, format!("{} not in defaults", key), Color::Yellow)
        }
    }
}

fn option_line(label: &str, key: &str, value: &InlistValue) -> String {
    format!(
        "{:<lw$}\t{}={:<vw$}",
        label,
        key,
        value.to_string(),
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH
    )
}

fn colored_line<W: Write>(writer: &mut W, line: String, color: Color) -> io::Result<()> {
    writeln!(writer, "{}", line.color(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inlistrs::NamelistKind;

    fn render(report: &Report) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn mismatch_report() -> Report {
        let mut report = Report::new();
        report.push_namelist(NamelistDiff {
            kind: NamelistKind::Controls,
            findings: vec![Finding::Mismatch {
                key: "mixing_length_alpha".to_string(),
                left_label: "1: inlist_a".to_string(),
                left: InlistValue::Real(2.0),
                right_label: "2: inlist_b".to_string(),
                right: InlistValue::Real(1.8),
            }],
        });
        report
    }

    #[test]
    fn test_text_mismatch_layout() {
        let text = render(&mismatch_report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "&controls");
        assert_eq!(
            lines[2].trim_end(),
            format!("{:<30}\tmixing_length_alpha=2.0", "1: inlist_a")
        );
        assert_eq!(
            lines[3].trim_end(),
            format!("{:<30}\tmixing_length_alpha=1.8", "2: inlist_b")
        );
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "/ !end controls namelist");
    }

    #[test]
    fn test_text_missing_and_default() {
        let mut report = Report::new();
        report.push_namelist(NamelistDiff {
            kind: NamelistKind::StarJob,
            findings: vec![
                Finding::DiffersFromDefault {
                    key: "initial_mass".to_string(),
                    label: "1: a".to_string(),
                    value: InlistValue::Real(20.0),
                    missing_label: "2: b".to_string(),
                    default: InlistValue::Real(1.0),
                },
                Finding::NotInDefaults {
                    key: "bogus".to_string(),
                    label: "1: a".to_string(),
                },
            ],
        });

        let text = render(&report);

        assert!(text.contains("initial_mass=20.0"));
        assert!(text.contains(&format!("{:<30}\tmissing", "2: b")));
        assert!(text.contains(&format!("{:<30}\tinitial_mass=1.0", "default")));
        assert!(text.contains("bogus not in defaults"));
        assert!(text.contains("/ !end star_job namelist"));
    }

    #[test]
    fn test_banner_printed_verbatim() {
        let mut report = Report::new();
        report.push_banner(["*************************", "* Compare primary stars *"]);

        assert_eq!(
            render(&report),
            "*************************\n* Compare primary stars *\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        mismatch_report()
            .write(&mut out, OutputFormat::Json)
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let block = &json["blocks"][0];
        assert_eq!(block["block"], "namelist");
        assert_eq!(block["kind"], "controls");
        assert_eq!(block["findings"][0]["type"], "mismatch");
        assert_eq!(block["findings"][0]["left"], 2.0);
        assert_eq!(block["findings"][0]["right"], 1.8);
    }

    #[test]
    fn test_has_differences() {
        assert!(mismatch_report().has_differences());
        assert!(!Report::new().has_differences());
    }
}
