//! Issue report rendering: human-readable text lines or the full analysis
//! as JSON.

use std::io::Write;

use owo_colors::{OwoColorize, Style};
use serde_json::json;

use weft_graph::{Analysis, ExportKind, Issue};

use crate::error::Result;

/// Missing modules, bad imports, and duplicate exports are errors; unused
/// modules and exports are warnings.
fn is_error(issue: &Issue) -> bool {
    matches!(
        issue,
        Issue::MissingModule { .. } | Issue::BadImport { .. } | Issue::DuplicateExport { .. }
    )
}

pub fn render_text(out: &mut impl Write, analysis: &Analysis, color: bool) -> Result<()> {
    let error_style = if color {
        Style::new().red().bold()
    } else {
        Style::new()
    };
    let warning_style = if color {
        Style::new().yellow().bold()
    } else {
        Style::new()
    };
    let location_style = if color { Style::new().cyan() } else { Style::new() };

    let mut errors = 0usize;
    let mut warnings = 0usize;

    for issue in &analysis.issues {
        let severity = if is_error(issue) {
            errors += 1;
            "error".style(error_style)
        } else {
            warnings += 1;
            "warning".style(warning_style)
        };

        writeln!(
            out,
            "{} {} {}",
            severity,
            location(issue).style(location_style),
            describe(issue),
        )?;
    }

    if analysis.issues.is_empty() {
        writeln!(
            out,
            "no issues found across {} modules",
            analysis.modules.len(),
        )?;
    } else {
        writeln!(
            out,
            "{} problems ({} errors, {} warnings)",
            errors + warnings,
            errors,
            warnings,
        )?;
    }

    Ok(())
}

pub fn render_json(out: &mut impl Write, analysis: &Analysis, include_modules: bool) -> Result<()> {
    if include_modules {
        serde_json::to_writer_pretty(&mut *out, analysis)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &json!({ "issues": analysis.issues }))?;
    }
    writeln!(out)?;
    Ok(())
}

/// `module:line` for issues anchored to a declaration, the bare module path
/// otherwise.
fn location(issue: &Issue) -> String {
    match issue {
        Issue::MissingModule { line, .. }
        | Issue::BadImport { line, .. }
        | Issue::DuplicateExport { line, .. }
        | Issue::UnusedExport { line, .. } => format!("{}:{}", issue.subject(), line),
        Issue::UnusedModule { module } => module.clone(),
    }
}

fn describe(issue: &Issue) -> String {
    match issue {
        Issue::MissingModule {
            exporting_module, ..
        } => {
            if exporting_module.raw == exporting_module.resolved {
                format!("cannot find module '{}'", exporting_module.raw)
            } else {
                format!(
                    "cannot find module '{}' (resolved as '{}')",
                    exporting_module.raw, exporting_module.resolved,
                )
            }
        }
        Issue::BadImport {
            exporting_module,
            export_kind,
            export_name,
            ..
        } => match (export_kind, export_name) {
            (ExportKind::Named, Some(name)) => format!(
                "module '{}' does not export '{}'",
                exporting_module.raw, name,
            ),
            _ => format!("module '{}' has no default export", exporting_module.raw),
        },
        Issue::DuplicateExport { export_name, .. } => {
            format!("duplicate export '{export_name}'")
        }
        Issue::UnusedModule { .. } => "module is never imported".to_string(),
        Issue::UnusedExport {
            export_kind,
            export_name,
            ..
        } => match (export_kind, export_name) {
            (ExportKind::Named, Some(name)) => format!("export '{name}' is never imported"),
            _ => "default export is never imported".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use weft_graph::{Analysis, ExportKind, Issue, ModuleRef};

    use super::{render_json, render_text};

    fn sample_analysis() -> Analysis {
        Analysis {
            modules: Vec::new(),
            issues: vec![
                Issue::MissingModule {
                    importing_module: "index".into(),
                    exporting_module: ModuleRef::new("some-weird-path", "non-existent"),
                    line: 2,
                },
                Issue::UnusedExport {
                    exporting_module: "lib".into(),
                    export_kind: ExportKind::Named,
                    export_name: Some("dormant".into()),
                    line: 3,
                },
            ],
        }
    }

    #[test]
    fn text_output_shows_raw_and_resolved_specifiers() {
        let mut out = Vec::new();
        render_text(&mut out, &sample_analysis(), false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("error index:2 cannot find module 'some-weird-path' (resolved as 'non-existent')"));
        assert!(text.contains("warning lib:3 export 'dormant' is never imported"));
        assert!(text.contains("2 problems (1 errors, 1 warnings)"));
    }

    #[test]
    fn json_output_defaults_to_issues_only() {
        let mut out = Vec::new();
        render_json(&mut out, &sample_analysis(), false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert!(value.get("modules").is_none());
        assert_eq!(value["issues"][0]["type"], "missingModule");
        assert_eq!(value["issues"][0]["exportingModule"]["raw"], "some-weird-path");
    }
}
