use maud::{html, Markup};

use super::components::{notification, Notice};
use super::layout::base_layout;
use crate::db::entities::{artist, venue};

pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";

/// Current values used to prefill the venue form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFormValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueFormValues {
    pub fn from_model(venue: venue::Model, genres: Vec<String>) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            website: venue.website,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            genres,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}

/// Current values used to prefill the artist form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistFormValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistFormValues {
    pub fn from_model(artist: artist::Model, genres: Vec<String>) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            genres,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        }
    }
}

fn text_field(label: &str, name: &str, value: Option<&str>, required: bool) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            input type="text" id=(name) name=(name) value=[value] required[required] class=(INPUT_CLASS);
        }
    }
}

fn state_select(selected: &str) -> Markup {
    html! {
        div {
            label for="state" class="block text-sm font-medium text-gray-700 mb-2" { "State" }
            select id="state" name="state" required class=(INPUT_CLASS) {
                @for state in STATE_CHOICES {
                    option value=(state) selected[*state == selected] { (state) }
                }
                // Keep values that predate the list selectable
                @if !selected.is_empty() && !STATE_CHOICES.contains(&selected) {
                    option value=(selected) selected { (selected) }
                }
            }
        }
    }
}

/// The hidden empty `genres` value lets a form with nothing selected clear
/// the list instead of leaving it untouched.
fn genre_select(selected: &[String]) -> Markup {
    let extra: Vec<&String> = selected
        .iter()
        .filter(|g| !GENRE_CHOICES.contains(&g.as_str()))
        .collect();

    html! {
        div {
            label for="genres" class="block text-sm font-medium text-gray-700 mb-2" { "Genres" }
            input type="hidden" name="genres" value="";
            select id="genres" name="genres" multiple size="8" class=(INPUT_CLASS) {
                @for genre in GENRE_CHOICES {
                    option value=(genre) selected[selected.iter().any(|g| g == genre)] { (genre) }
                }
                @for genre in extra {
                    option value=(genre) selected { (genre) }
                }
            }
            p class="mt-1 text-xs text-gray-500" { "Ctrl+Click to select multiple" }
        }
    }
}

/// Hidden `false` first so an unchecked box still submits a value.
fn checkbox(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        div class="flex items-center gap-2" {
            input type="hidden" name=(name) value="false";
            input type="checkbox" id=(name) name=(name) value="y" checked[checked];
            label for=(name) class="text-sm font-medium text-gray-700" { (label) }
        }
    }
}

fn form_shell(title: &str, action: &str, notice: Option<&Notice>, fields: Markup) -> Markup {
    base_layout(
        title,
        html! {
            div id="notification-area" class="mb-4" {
                @if let Some(notice) = notice {
                    (notification(notice))
                }
            }

            div class="max-w-2xl mx-auto bg-white rounded-lg shadow-sm p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { (title) }

                form method="post" action=(action) {
                    div class="space-y-4" {
                        (fields)

                        button
                            type="submit"
                            class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                            (title)
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_form_page(
    title: &str,
    action: &str,
    values: &VenueFormValues,
    notice: Option<&Notice>,
) -> Markup {
    form_shell(
        title,
        action,
        notice,
        html! {
            (text_field("Name", "name", Some(&values.name), true))
            (text_field("City", "city", Some(&values.city), true))
            (state_select(&values.state))
            (text_field("Address", "address", values.address.as_deref(), false))
            (text_field("Phone", "phone", values.phone.as_deref(), false))
            (genre_select(&values.genres))
            (text_field("Website", "website", values.website.as_deref(), false))
            (text_field("Image Link", "image_link", values.image_link.as_deref(), false))
            (text_field("Facebook Link", "facebook_link", values.facebook_link.as_deref(), false))
            (checkbox("Seeking Talent", "seeking_talent", values.seeking_talent))
            (text_field("Seeking Description", "seeking_description", values.seeking_description.as_deref(), false))
        },
    )
}

pub fn artist_form_page(
    title: &str,
    action: &str,
    values: &ArtistFormValues,
    notice: Option<&Notice>,
) -> Markup {
    form_shell(
        title,
        action,
        notice,
        html! {
            (text_field("Name", "name", Some(&values.name), true))
            (text_field("City", "city", Some(&values.city), true))
            (state_select(&values.state))
            (text_field("Phone", "phone", values.phone.as_deref(), false))
            (genre_select(&values.genres))
            (text_field("Website", "website", values.website.as_deref(), false))
            (text_field("Image Link", "image_link", values.image_link.as_deref(), false))
            (text_field("Facebook Link", "facebook_link", values.facebook_link.as_deref(), false))
            (checkbox("Seeking Venue", "seeking_venue", values.seeking_venue))
            (text_field("Seeking Description", "seeking_description", values.seeking_description.as_deref(), false))
        },
    )
}

pub fn show_form_page() -> Markup {
    form_shell(
        "List a new show",
        "/shows/create",
        None,
        html! {
            (text_field("Artist ID", "artist_id", None, true))
            (text_field("Venue ID", "venue_id", None, true))
            div {
                label for="start_time" class="block text-sm font-medium text-gray-700 mb-2" { "Start Time" }
                input type="datetime-local" id="start_time" name="start_time" class=(INPUT_CLASS);
                p class="mt-1 text-xs text-gray-500" { "Times are in UTC. Leave empty to start now." }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_form_prefills_genres() {
        let values = VenueFormValues {
            name: "The Fillmore".to_string(),
            genres: vec!["Jazz".to_string(), "Gypsy Swing".to_string()],
            ..Default::default()
        };
        let markup = venue_form_page("Edit venue", "/venues/1/edit", &values, None).into_string();

        assert!(markup.contains(r#"value="The Fillmore""#));
        assert!(markup.contains(r#"<option value="Jazz" selected>"#));
        assert!(markup.contains(r#"<option value="Blues">"#));
        assert!(markup.contains(r#"<option value="Gypsy Swing" selected>"#));
    }

    #[test]
    fn test_genre_select_submits_empty_value_first() {
        let markup = genre_select(&[]).into_string();
        let hidden = markup.find(r#"<input type="hidden" name="genres" value="">"#).unwrap();
        let select = markup.find("<select").unwrap();
        assert!(hidden < select);
    }

    #[test]
    fn test_checkbox_submits_false_first() {
        let markup = checkbox("Seeking Venue", "seeking_venue", false).into_string();
        let hidden = markup.find(r#"type="hidden""#).unwrap();
        let boxed = markup.find(r#"type="checkbox""#).unwrap();
        assert!(hidden < boxed);
        assert!(!markup.contains("checked"));
    }
}
