//! Core value types used by the view state.

use serde_json::Value;

/// Discriminant of the record kind currently held by the view state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    /// Nothing loaded yet.
    #[default]
    None,
    /// Image-based item described by a IIIF manifest.
    Iiif,
    /// Legacy WSLS news film record.
    Wsls,
    /// Archivematica package listing.
    Archivematica,
}

impl ViewType {
    /// What: Map an envelope `type` string to a known view type.
    ///
    /// Inputs:
    /// - `raw`: Value of the envelope `type` field.
    ///
    /// Output:
    /// - `Some(ViewType)` for the three record kinds; `None` for anything else.
    ///
    /// Details:
    /// - Matching is exact; the service always emits lowercase tags.
    #[must_use]
    pub fn from_envelope_tag(raw: &str) -> Option<Self> {
        match raw {
            "iiif" => Some(Self::Iiif),
            "wsls" => Some(Self::Wsls),
            "archivematica" => Some(Self::Archivematica),
            _ => None,
        }
    }

    /// Lowercase tag as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Iiif => "iiif",
            Self::Wsls => "wsls",
            Self::Archivematica => "archivematica",
        }
    }
}

/// Image viewer inputs derived from a `iiif` envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IiifView {
    /// URL of the IIIF manifest to open.
    pub manifest_url: String,
    /// Rights statement URL shown next to the viewer.
    pub rights_url: String,
    /// Page PIDs in manifest order.
    pub page_identifiers: Vec<String>,
    /// Page the viewer opens at.
    pub start_page: i64,
}

/// Result payload of the most recent successful load.
///
/// Exactly one variant is live at a time, so consumers cannot read fields of
/// a record kind that is not loaded.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ViewData {
    /// Nothing loaded yet.
    #[default]
    None,
    /// IIIF image item.
    Iiif(IiifView),
    /// Opaque WSLS record, passed through unchanged.
    Wsls(Value),
    /// Archivematica records, always a flat sequence.
    Archivematica(Vec<Value>),
}

impl ViewData {
    /// Discriminant of this payload.
    #[must_use]
    pub const fn view_type(&self) -> ViewType {
        match self {
            Self::None => ViewType::None,
            Self::Iiif(_) => ViewType::Iiif,
            Self::Wsls(_) => ViewType::Wsls,
            Self::Archivematica(_) => ViewType::Archivematica,
        }
    }
}

/// Lifecycle phase of the store, derived from the state flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// No load has been issued yet.
    Idle,
    /// A load is in flight.
    Working,
    /// The most recent load failed.
    Failed,
    /// The most recent load succeeded and `view` is populated.
    Ready,
}

/// Typed view over a WSLS record.
///
/// Every field is optional on the wire; missing ones fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WslsRecord {
    /// Whether a video clip is available.
    pub has_video: bool,
    /// Whether an anchor script (PDF and transcript) is available.
    pub has_script: bool,
    /// WSLS identifier used to build asset URLs.
    pub wsls_id: String,
    /// Record title.
    pub title: String,
    /// Record description.
    pub description: String,
    /// Video file URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Poster image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    /// Anchor script PDF URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    /// Anchor script thumbnail URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    /// Plain-text transcript URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_url: Option<String>,
    /// Clip duration as reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl WslsRecord {
    /// What: Read a WSLS record out of an opaque JSON payload.
    ///
    /// Inputs:
    /// - `v`: Legacy record data as stored in the view state.
    ///
    /// Output:
    /// - Parsed record; `None` when `v` is not a JSON object.
    ///
    /// Details:
    /// - Fields with the wrong JSON type are treated as missing.
    #[must_use]
    pub fn from_value(v: &Value) -> Option<Self> {
        if !v.is_object() {
            return None;
        }
        let opt = |key: &str| v.get(key).and_then(Value::as_str).map(ToOwned::to_owned);
        Some(Self {
            has_video: v.get("has_video").and_then(Value::as_bool).unwrap_or(false),
            has_script: v.get("has_script").and_then(Value::as_bool).unwrap_or(false),
            wsls_id: crate::util::s(v, "wsls_id"),
            title: crate::util::s(v, "title"),
            description: crate::util::s(v, "description"),
            video_url: opt("video_url"),
            poster_url: opt("poster_url"),
            pdf_url: opt("pdf_url"),
            thumb_url: opt("thumb_url"),
            transcript_url: opt("transcript_url"),
            duration: opt("duration"),
        })
    }
}

/// Display columns of one archivematica tree-table node.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PackageColumns {
    /// File or folder name.
    pub name: String,
    /// `folder`, `file` or `image`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable format, e.g. "Portable Document Format".
    pub format: String,
    /// Icon class suggested by the service.
    pub icon: String,
    /// Download URL for files.
    pub url: String,
}

/// One node of an archivematica package tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PackageNode {
    /// Unique key, `<depth>-<id or name>`.
    pub key: String,
    /// Display columns.
    pub data: PackageColumns,
    /// Nested entries.
    pub children: Vec<Self>,
}

impl PackageNode {
    /// What: Parse one package record from an opaque JSON payload.
    ///
    /// Inputs:
    /// - `v`: One element of the view state's package records.
    ///
    /// Output:
    /// - Parsed node tree; `None` when `v` is not a JSON object.
    ///
    /// Details:
    /// - Missing columns and children default to empty.
    #[must_use]
    pub fn from_value(v: &Value) -> Option<Self> {
        if !v.is_object() {
            return None;
        }
        serde_json::from_value(v.clone()).ok()
    }

    /// What: Visit this node and all descendants depth-first.
    ///
    /// Inputs:
    /// - None (walks `self`).
    ///
    /// Output:
    /// - `(depth, node)` pairs in pre-order; the root has depth 0.
    #[must_use]
    pub fn walk(&self) -> Vec<(usize, &Self)> {
        let mut out = Vec::new();
        let mut stack: Vec<(usize, &Self)> = vec![(0, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            for child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }

    /// Number of non-folder nodes in this tree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.walk()
            .into_iter()
            .filter(|(_, n)| n.data.kind != "folder")
            .count()
    }
}
