//! Form parsing for the create/edit pages
//!
//! Bodies are decoded as raw `(key, value)` pairs so multi-select fields like
//! `genres` can repeat. For single-valued keys the last occurrence wins, which
//! lets a hidden `false` input precede a checkbox.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::error::{AppError, Result};

/// Formats accepted for `start_time` besides RFC 3339. Naive values are UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl FormFields {
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Last submitted value for `key`, trimmed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `Some(None)` when the field was submitted blank, so edits can clear it.
    fn optional_text(&self, key: &str) -> Option<Option<String>> {
        self.get(key)
            .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
    }

    fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    fn flag(&self, key: &str) -> Result<Option<bool>> {
        self.get(key).map(parse_flag).transpose()
    }

    fn genres(&self) -> Option<Vec<String>> {
        if self.contains("genres") {
            Some(normalize_genres(self.get_all("genres")))
        } else {
            None
        }
    }
}

/// Splits every submitted value on commas, trims, drops blanks and keeps the
/// first occurrence of each genre.
pub fn normalize_genres<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for genre in values.into_iter().flat_map(|v| v.split(',')) {
        let genre = genre.trim();
        if !genre.is_empty() && !genres.iter().any(|g| g == genre) {
            genres.push(genre.to_string());
        }
    }
    genres
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "y" | "yes" | "on" | "true" | "1" => Ok(true),
        "n" | "no" | "off" | "false" | "0" | "" => Ok(false),
        other => Err(AppError::Validation(format!(
            "'{}' is not a valid yes/no value",
            other
        ))),
    }
}

pub fn parse_start_time(value: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc).fixed_offset());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| AppError::Validation(format!("'{}' is not a valid start time", value)))
}

fn parse_id(fields: &FormFields, key: &str) -> Result<i32> {
    let raw = fields
        .get(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{} is required", key)))?;
    raw.parse()
        .map_err(|_| AppError::Validation(format!("{} must be a number", key)))
}

/// Columns every venue and artist must have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    pub name: String,
    pub city: String,
    pub state: String,
}

fn required_fields(
    name: &Option<String>,
    city: &Option<String>,
    state: &Option<String>,
) -> Result<RequiredFields> {
    let require = |value: &Option<String>, key: &str| {
        value
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::Validation(format!("{} is required", key)))
    };

    Ok(RequiredFields {
        name: require(name, "name")?,
        city: require(city, "city")?,
        state: require(state, "state")?,
    })
}

fn reject_blank(value: &Option<String>, key: &str) -> Result<()> {
    match value {
        Some(v) if v.is_empty() => Err(AppError::Validation(format!("{} cannot be blank", key))),
        _ => Ok(()),
    }
}

/// Submitted venue fields. `None` means the field was not part of the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<Option<String>>,
}

impl VenueForm {
    pub fn parse(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: fields.optional_text("address"),
            phone: fields.optional_text("phone"),
            website: fields.optional_text("website"),
            image_link: fields.optional_text("image_link"),
            facebook_link: fields.optional_text("facebook_link"),
            genres: fields.genres(),
            seeking_talent: fields.flag("seeking_talent")?,
            seeking_description: fields.optional_text("seeking_description"),
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Checks a form meant to create a venue.
    pub fn required(&self) -> Result<RequiredFields> {
        required_fields(&self.name, &self.city, &self.state)
    }

    /// Checks a form meant to edit a venue: required columns may be omitted
    /// but not blanked.
    pub fn validate_edit(&self) -> Result<()> {
        reject_blank(&self.name, "name")?;
        reject_blank(&self.city, "city")?;
        reject_blank(&self.state, "state")
    }
}

/// Submitted artist fields. `None` means the field was not part of the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<Option<String>>,
}

impl ArtistForm {
    pub fn parse(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.optional_text("phone"),
            website: fields.optional_text("website"),
            image_link: fields.optional_text("image_link"),
            facebook_link: fields.optional_text("facebook_link"),
            genres: fields.genres(),
            seeking_venue: fields.flag("seeking_venue")?,
            seeking_description: fields.optional_text("seeking_description"),
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn required(&self) -> Result<RequiredFields> {
        required_fields(&self.name, &self.city, &self.state)
    }

    pub fn validate_edit(&self) -> Result<()> {
        reject_blank(&self.name, "name")?;
        reject_blank(&self.city, "city")?;
        reject_blank(&self.state, "state")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowForm {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<FixedOffset>,
}

impl ShowForm {
    /// A missing or blank `start_time` falls back to `now`.
    pub fn parse(fields: &FormFields, now: DateTime<Utc>) -> Result<Self> {
        let start_time = match fields.get("start_time").filter(|v| !v.is_empty()) {
            Some(raw) => parse_start_time(raw)?,
            None => now.fixed_offset(),
        };

        Ok(Self {
            artist_id: parse_id(fields, "artist_id")?,
            venue_id: parse_id(fields, "venue_id")?,
            start_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_normalize_genres_keeps_order_and_dedupes() {
        assert_eq!(
            normalize_genres(["Rock", "Jazz", "Rock"]),
            vec!["Rock".to_string(), "Jazz".to_string()]
        );
        assert_eq!(
            normalize_genres(["Rock,Jazz", " Blues ", ""]),
            vec!["Rock".to_string(), "Jazz".to_string(), "Blues".to_string()]
        );
        assert!(normalize_genres(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_last_value_wins_for_checkbox() {
        let form = VenueForm::parse(&fields(&[
            ("name", "The Fillmore"),
            ("seeking_talent", "false"),
            ("seeking_talent", "y"),
        ]))
        .unwrap();
        assert_eq!(form.seeking_talent, Some(true));

        let form = VenueForm::parse(&fields(&[("seeking_talent", "false")])).unwrap();
        assert_eq!(form.seeking_talent, Some(false));
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let result = ArtistForm::parse(&fields(&[("seeking_venue", "maybe")]));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unsubmitted_fields_are_none() {
        let form = VenueForm::parse(&fields(&[("phone", "555-1234"), ("website", "")])).unwrap();
        assert_eq!(form.name, None);
        assert_eq!(form.genres, None);
        assert_eq!(form.phone, Some(Some("555-1234".to_string())));
        assert_eq!(form.website, Some(None));
        assert_eq!(form.address, None);
    }

    #[test]
    fn test_required_fields() {
        let form = VenueForm::parse(&fields(&[
            ("name", " The Fillmore "),
            ("city", "SF"),
            ("state", "CA"),
        ]))
        .unwrap();
        let required = form.required().unwrap();
        assert_eq!(required.name, "The Fillmore");

        let form = VenueForm::parse(&fields(&[("name", "  "), ("city", "SF"), ("state", "CA")]))
            .unwrap();
        assert!(matches!(form.required(), Err(AppError::Validation(_))));

        let form = ArtistForm::parse(&fields(&[("name", "Guns N Petals")])).unwrap();
        assert!(form.required().is_err());
    }

    #[test]
    fn test_validate_edit_rejects_blanked_name() {
        let form = ArtistForm::parse(&fields(&[("name", "")])).unwrap();
        assert!(form.validate_edit().is_err());

        let form = ArtistForm::parse(&fields(&[("phone", "")])).unwrap();
        assert!(form.validate_edit().is_ok());
    }

    #[test]
    fn test_parse_start_time_formats() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();

        for raw in [
            "2035-04-01T20:00:00Z",
            "2035-04-01T22:00:00+02:00",
            "2035-04-01T20:00",
            "2035-04-01 20:00:00",
            "2035-04-01 20:00",
        ] {
            let parsed = parse_start_time(raw).unwrap();
            assert_eq!(parsed.with_timezone(&Utc), expected, "format {}", raw);
        }

        assert!(parse_start_time("next tuesday").is_err());
    }

    #[test]
    fn test_show_form_defaults_start_time_to_now() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let form = ShowForm::parse(&fields(&[("artist_id", "4"), ("venue_id", "1")]), now).unwrap();
        assert_eq!(form.artist_id, 4);
        assert_eq!(form.venue_id, 1);
        assert_eq!(form.start_time, now.fixed_offset());
    }

    #[test]
    fn test_show_form_rejects_bad_ids() {
        let now = Utc::now();
        let result = ShowForm::parse(&fields(&[("artist_id", "abc"), ("venue_id", "1")]), now);
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = ShowForm::parse(&fields(&[("venue_id", "1")]), now);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
