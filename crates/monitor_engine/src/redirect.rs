use serde::Deserialize;

/// Request parameters captured once at startup and replayed to the
/// results-finalization endpoint on completion or backend failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultParameters {
    pub username: String,
    pub year: String,
    pub sort_by: String,
    pub release_scope: String,
    #[serde(default)]
    pub decade: Option<String>,
    #[serde(default)]
    pub release_year: Option<String>,
    pub min_plays: u32,
    pub min_tracks: u32,
}

impl ResultParameters {
    /// Ordered field list for the synthesized form POST.
    ///
    /// `decade` and `release_year` appear only when present and non-blank;
    /// the results page treats an absent field and an unused filter the
    /// same way.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("username", self.username.clone()),
            ("year", self.year.clone()),
            ("sort_by", self.sort_by.clone()),
            ("release_scope", self.release_scope.clone()),
        ];
        if let Some(decade) = non_blank(&self.decade) {
            fields.push(("decade", decade.to_owned()));
        }
        if let Some(release_year) = non_blank(&self.release_year) {
            fields.push(("release_year", release_year.to_owned()));
        }
        fields.push(("min_plays", self.min_plays.to_string()));
        fields.push(("min_tracks", self.min_tracks.to_string()));
        fields
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}
