use serde::Serialize;

/// A rendered report ready to hand to a download mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    /// Suggested file name, e.g. `practice-log-week10-2024.xls`
    pub filename: String,
    /// MIME hint for the platform, e.g. `application/vnd.ms-excel`
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ReportDocument {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Body as text. The renderer only ever produces UTF-8.
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}
