use maud::{html, Markup};
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::services::catalog::{ArtistShow, ShowRow, Summary, VenueShow};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot message shown at the top of the page after a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub fn notification(notice: &Notice) -> Markup {
    let (bg_color, text_color, icon) = match notice.kind {
        NoticeKind::Success => ("bg-green-50", "text-green-800", "✓"),
        NoticeKind::Error => ("bg-red-50", "text-red-800", "✗"),
    };

    html! {
        div id="notification" class={(format!("p-4 rounded-md {} {}", bg_color, text_color))} {
            div class="flex items-center" {
                span class="font-bold mr-2" { (icon) }
                span { (notice.message) }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Medium,
    Full,
}

/// Renders a start time in UTC, e.g. `Sun 04, 01, 2035 8:00PM` (medium) or
/// `Sunday April, 1, 2035 at 8:00PM` (full).
pub fn format_datetime(value: &DateTimeWithTimeZone, style: DateStyle) -> String {
    let utc = value.naive_utc();
    match style {
        DateStyle::Medium => utc.format("%a %m, %d, %Y %-I:%M%p").to_string(),
        DateStyle::Full => utc.format("%A %B, %-d, %Y at %-I:%M%p").to_string(),
    }
}

pub fn genre_tags(genres: &[String]) -> Markup {
    html! {
        @if !genres.is_empty() {
            div class="flex flex-wrap gap-2 genres" {
                @for genre in genres {
                    span class="px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded genre" {
                        (genre)
                    }
                }
            }
        }
    }
}

pub fn seeking_banner(seeking: bool, description: Option<&str>, label: &str) -> Markup {
    html! {
        @if seeking {
            div class="mt-4 p-4 bg-green-50 rounded-md seeking" {
                p class="font-semibold text-green-800" { (label) }
                @if let Some(text) = description {
                    p class="text-green-700 mt-1" { (text) }
                }
            }
        } @else {
            p class="mt-4 text-gray-500 not-seeking" { "Not currently " (label.to_lowercase()) }
        }
    }
}

pub fn contact_details(
    address: Option<&str>,
    city: &str,
    state: &str,
    phone: Option<&str>,
    website: Option<&str>,
    facebook_link: Option<&str>,
) -> Markup {
    html! {
        dl class="space-y-2 text-gray-700" {
            @if let Some(address) = address {
                div { dt class="sr-only" { "Address" } dd { (address) } }
            }
            div { dt class="sr-only" { "Location" } dd { (city) ", " (state) } }
            @if let Some(phone) = phone {
                div { dt class="sr-only" { "Phone" } dd { (phone) } }
            }
            @if let Some(website) = website {
                div {
                    dt class="sr-only" { "Website" }
                    dd { a href=(website) class="text-primary hover:underline" target="_blank" { (website) } }
                }
            }
            @if let Some(facebook) = facebook_link {
                div {
                    dt class="sr-only" { "Facebook" }
                    dd { a href=(facebook) class="text-primary hover:underline" target="_blank" { (facebook) } }
                }
            }
        }
    }
}

/// List of venues or artists linking to their detail pages.
pub fn summary_list(base_url: &str, items: &[Summary]) -> Markup {
    html! {
        ul class="divide-y divide-gray-200 bg-white rounded-lg shadow-sm" {
            @for item in items {
                li class="px-4 py-3 flex justify-between items-center summary" {
                    a href={(format!("{}/{}", base_url, item.id))} class="font-medium text-gray-900 hover:text-primary" {
                        (item.name)
                    }
                    span class="text-xs text-gray-500" {
                        (item.num_upcoming_shows) " upcoming shows"
                    }
                }
            }
        }
    }
}

pub fn search_bar(action: &str, placeholder: &str, term: &str) -> Markup {
    html! {
        form method="post" action=(action) class="flex gap-2 mb-6" {
            input
                type="search"
                name="search_term"
                value=(term)
                placeholder=(placeholder)
                class="flex-grow px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
            button type="submit" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                "Search"
            }
        }
    }
}

fn show_card(
    href: String,
    title: &str,
    image_link: Option<&str>,
    start_time: &DateTimeWithTimeZone,
) -> Markup {
    html! {
        a href=(href) class="show-card block bg-white rounded-lg shadow-md overflow-hidden" {
            img
                src=(image_link.unwrap_or(PLACEHOLDER_IMAGE))
                alt=(title)
                class="w-full h-40 object-cover"
                loading="lazy";
            div class="p-4" {
                h5 class="font-semibold text-gray-900 truncate" { (title) }
                p class="text-sm text-gray-600" {
                    (format_datetime(start_time, DateStyle::Full))
                }
            }
        }
    }
}

pub fn venue_show_card(show: &VenueShow) -> Markup {
    show_card(
        format!("/artists/{}", show.artist_id),
        &show.artist_name,
        show.artist_image_link.as_deref(),
        &show.start_time,
    )
}

pub fn artist_show_card(show: &ArtistShow) -> Markup {
    show_card(
        format!("/venues/{}", show.venue_id),
        &show.venue_name,
        show.venue_image_link.as_deref(),
        &show.start_time,
    )
}

pub fn show_row_card(show: &ShowRow) -> Markup {
    html! {
        div class="show-card bg-white rounded-lg shadow-md overflow-hidden" {
            img
                src=(show.artist_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                alt=(show.artist_name)
                class="w-full h-40 object-cover"
                loading="lazy";
            div class="p-4" {
                p class="text-sm text-gray-600" {
                    (format_datetime(&show.start_time, DateStyle::Medium))
                }
                h5 class="font-semibold text-gray-900" {
                    a href={(format!("/artists/{}", show.artist_id))} class="hover:text-primary" {
                        (show.artist_name)
                    }
                }
                p class="text-sm text-gray-600" {
                    "playing at "
                    a href={(format!("/venues/{}", show.venue_id))} class="hover:text-primary" {
                        (show.venue_name)
                    }
                }
            }
        }
    }
}
