//! The `ViewState` container read by the UI and written by the store.

use serde_json::Value;

use crate::state::types::{IiifView, LoadPhase, ViewData, ViewType};

/// Client view state for the single active subject record.
///
/// Only the store's actions mutate this; consumers receive clones or watch it
/// through [`crate::store::ViewStateStore::subscribe`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ViewState {
    /// A fetch sequence is in flight.
    pub working: bool,
    /// The most recent fetch sequence ended in error.
    pub failed: bool,
    /// Identifier of the record currently loaded or loading.
    pub subject_id: String,
    /// Result payload of the last successful load.
    pub view: ViewData,
    /// Content-advisory text from the IIIF manifest; empty when none.
    pub advisory: String,
    /// The viewer acknowledged the advisory for the current load.
    pub advisory_dismissed: bool,
}

impl ViewState {
    /// What: Reset transient flags at the start of a load.
    ///
    /// Inputs:
    /// - `pid`: Identifier of the record about to be fetched.
    ///
    /// Output:
    /// - None (mutates `self`).
    ///
    /// Details:
    /// - Clears `failed` before raising `working`.
    /// - Clears the advisory so a previous record's warning never leaks.
    /// - Leaves `view` untouched; it is replaced only on success.
    pub fn begin_load(&mut self, pid: &str) {
        self.failed = false;
        self.working = true;
        self.advisory.clear();
        self.advisory_dismissed = false;
        self.subject_id = pid.to_string();
    }

    /// Mark the current load as failed and idle.
    pub fn fail_load(&mut self) {
        self.failed = true;
        self.working = false;
    }

    /// What: Install a successful load result.
    ///
    /// Inputs:
    /// - `view`: Normalized payload for the loaded record.
    /// - `advisory`: Advisory text found in the manifest, if any.
    ///
    /// Output:
    /// - None (mutates `self`).
    ///
    /// Details:
    /// - Replaces the whole payload so IIIF page lists are rebuilt, never appended.
    pub fn finish_load(&mut self, view: ViewData, advisory: Option<String>) {
        self.view = view;
        if let Some(text) = advisory {
            self.advisory = text;
        }
        self.working = false;
    }

    /// Record that the viewer acknowledged the advisory.
    pub const fn dismiss_advisory(&mut self) {
        self.advisory_dismissed = true;
    }

    /// Discriminant of the current payload.
    #[must_use]
    pub const fn view_type(&self) -> ViewType {
        self.view.view_type()
    }

    /// What: Derive the lifecycle phase from the flags and payload.
    ///
    /// Inputs:
    /// - None.
    ///
    /// Output:
    /// - `Working` while in flight, `Failed` after a failed load, `Ready` once a
    ///   payload is present, `Idle` otherwise.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        if self.working {
            LoadPhase::Working
        } else if self.failed {
            LoadPhase::Failed
        } else if matches!(self.view, ViewData::None) {
            LoadPhase::Idle
        } else {
            LoadPhase::Ready
        }
    }

    /// True when an advisory is present and has not been dismissed.
    #[must_use]
    pub fn advisory_pending(&self) -> bool {
        !self.advisory.is_empty() && !self.advisory_dismissed
    }

    /// IIIF payload when the current view is an image item.
    #[must_use]
    pub const fn iiif(&self) -> Option<&IiifView> {
        match &self.view {
            ViewData::Iiif(v) => Some(v),
            _ => None,
        }
    }

    /// Manifest URL of the current IIIF item.
    #[must_use]
    pub fn iiif_manifest_url(&self) -> Option<&str> {
        self.iiif().map(|v| v.manifest_url.as_str())
    }

    /// Rights statement URL of the current IIIF item.
    #[must_use]
    pub fn rights_url(&self) -> Option<&str> {
        self.iiif().map(|v| v.rights_url.as_str())
    }

    /// Page PIDs of the current IIIF item; empty for other record kinds.
    #[must_use]
    pub fn page_identifiers(&self) -> &[String] {
        match &self.view {
            ViewData::Iiif(v) => v.page_identifiers.as_slice(),
            _ => &[],
        }
    }

    /// Start page of the current IIIF item.
    #[must_use]
    pub fn start_page(&self) -> Option<i64> {
        self.iiif().map(|v| v.start_page)
    }

    /// Opaque WSLS record when the current view is a legacy record.
    #[must_use]
    pub const fn legacy_record_data(&self) -> Option<&Value> {
        match &self.view {
            ViewData::Wsls(v) => Some(v),
            _ => None,
        }
    }

    /// Archivematica records; empty for other record kinds.
    #[must_use]
    pub fn package_records(&self) -> &[Value] {
        match &self.view {
            ViewData::Archivematica(v) => v.as_slice(),
            _ => &[],
        }
    }
}
