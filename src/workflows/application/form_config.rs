use serde::{Deserialize, Serialize};

/// One page of the merged EHC/EXA form as served by the form-configuration service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedFormPage {
    pub page_number: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<MergedFormQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedFormQuestion {
    pub question_id: String,
    #[serde(default)]
    pub text: Option<String>,
    /// Names the case field this question feeds. Blank or missing means "not mapped".
    #[serde(default)]
    pub data_mapping: Option<String>,
}

impl MergedFormQuestion {
    pub fn new(question_id: impl Into<String>, data_mapping: Option<&str>) -> Self {
        Self {
            question_id: question_id.into(),
            text: None,
            data_mapping: data_mapping.map(str::to_string),
        }
    }

    /// The trimmed mapping label, if it is non-empty.
    pub fn mapping_label(&self) -> Option<&str> {
        self.data_mapping
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}
