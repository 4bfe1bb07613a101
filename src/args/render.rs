//! Plain-text rendering of the view state for the terminal.

use std::fmt::Write;

use curio::state::{LoadPhase, PackageNode, ViewData, ViewState, WslsRecord};

/// Push `label: value` when `value` is present and non-empty.
fn field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        let _ = writeln!(out, "{label:<12} {v}");
    }
}

/// What: Render a view state as human-readable text.
///
/// Inputs:
/// - `st`: State to render.
///
/// Output:
/// - Multi-line text; only the fields of the live record kind are shown.
pub fn render_state(st: &ViewState) -> String {
    let mut out = String::new();
    let phase = match st.phase() {
        LoadPhase::Idle => "idle",
        LoadPhase::Working => "working",
        LoadPhase::Failed => "failed",
        LoadPhase::Ready => "ready",
    };
    field(&mut out, "pid", Some(&st.subject_id));
    field(&mut out, "status", Some(phase));
    field(&mut out, "type", Some(st.view_type().as_str()));
    if st.failed {
        return out;
    }
    match &st.view {
        ViewData::None => {}
        ViewData::Iiif(v) => {
            field(&mut out, "manifest", Some(&v.manifest_url));
            field(&mut out, "rights", Some(&v.rights_url));
            let _ = writeln!(out, "{:<12} {}", "start page", v.start_page);
            let _ = writeln!(
                out,
                "{:<12} {} ({})",
                "pages",
                v.page_identifiers.len(),
                v.page_identifiers.join(", ")
            );
        }
        ViewData::Wsls(raw) => match WslsRecord::from_value(raw) {
            Some(rec) => {
                field(&mut out, "title", Some(&rec.title));
                field(&mut out, "wsls id", Some(&rec.wsls_id));
                field(&mut out, "description", Some(&rec.description));
                field(&mut out, "video", rec.video_url.as_deref());
                field(&mut out, "poster", rec.poster_url.as_deref());
                field(&mut out, "pdf", rec.pdf_url.as_deref());
                field(&mut out, "transcript", rec.transcript_url.as_deref());
                field(&mut out, "duration", rec.duration.as_deref());
            }
            None => {
                let _ = writeln!(out, "{raw}");
            }
        },
        ViewData::Archivematica(records) => {
            let _ = writeln!(out, "{:<12} {}", "records", records.len());
            for raw in records {
                let Some(root) = PackageNode::from_value(raw) else {
                    let _ = writeln!(out, "  {raw}");
                    continue;
                };
                for (depth, node) in root.walk() {
                    let indent = "  ".repeat(depth + 1);
                    let _ = write!(out, "{indent}{}", node.data.name);
                    if !node.data.format.is_empty() && node.data.kind != "folder" {
                        let _ = write!(out, " [{}]", node.data.format);
                    }
                    out.push('\n');
                }
            }
        }
    }
    if !st.advisory.is_empty() {
        let note = if st.advisory_dismissed { " (dismissed)" } else { "" };
        let _ = writeln!(out, "{:<12} {}{note}", "advisory", st.advisory);
    }
    out
}
