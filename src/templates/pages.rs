use axum::http::StatusCode;
use maud::{html, Markup};

use super::components::{
    artist_show_card, contact_details, genre_tags, notification, search_bar, seeking_banner,
    show_row_card, summary_list, venue_show_card, Notice,
};
use super::layout::base_layout;
use crate::services::catalog::{
    Area, ArtistDetail, ArtistListItem, SearchResults, ShowRow, VenueDetail,
};

pub fn home_page(notice: Option<&Notice>) -> Markup {
    base_layout(
        "Home",
        html! {
            div id="notification-area" class="mb-4" {
                @if let Some(notice) = notice {
                    (notification(notice))
                }
            }

            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "Showbook" }
                p class="text-gray-600 mb-8" { "Book venues, find artists, list shows." }

                div class="flex justify-center flex-wrap gap-4" {
                    a href="/venues/create" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                        "Post a venue"
                    }
                    a href="/artists/create" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                        "Post an artist"
                    }
                    a href="/shows/create" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                        "Post a show"
                    }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[Area]) -> Markup {
    base_layout(
        "Venues",
        html! {
            div class="max-w-4xl mx-auto" {
                (search_bar("/venues/search", "Find a venue", ""))

                @if areas.is_empty() {
                    div class="text-center py-12" {
                        p class="text-gray-600 text-lg" { "No venues listed yet." }
                    }
                }

                @for area in areas {
                    section class="mb-8 area" {
                        h3 class="text-xl font-semibold text-gray-900 mb-2" {
                            (area.city) ", " (area.state)
                        }
                        (summary_list("/venues", &area.venues))
                    }
                }
            }
        },
    )
}

pub fn artists_page(artists: &[ArtistListItem]) -> Markup {
    base_layout(
        "Artists",
        html! {
            div class="max-w-4xl mx-auto" {
                (search_bar("/artists/search", "Find an artist", ""))

                @if artists.is_empty() {
                    div class="text-center py-12" {
                        p class="text-gray-600 text-lg" { "No artists listed yet." }
                    }
                } @else {
                    ul class="divide-y divide-gray-200 bg-white rounded-lg shadow-sm" {
                        @for artist in artists {
                            li class="px-4 py-3" {
                                a href={(format!("/artists/{}", artist.id))} class="font-medium text-gray-900 hover:text-primary" {
                                    (artist.name)
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Venues,
    Artists,
}

impl SearchKind {
    fn base_url(self) -> &'static str {
        match self {
            Self::Venues => "/venues",
            Self::Artists => "/artists",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Venues => "venues",
            Self::Artists => "artists",
        }
    }
}

pub fn search_page(kind: SearchKind, term: &str, results: &SearchResults) -> Markup {
    let base_url = kind.base_url();

    base_layout(
        "Search",
        html! {
            div class="max-w-4xl mx-auto" {
                (search_bar(&format!("{}/search", base_url), "Search again", term))

                h3 class="text-xl font-semibold text-gray-900 mb-4" {
                    "Number of search results for \"" (term) "\": "
                    span id="result-count" { (results.count) }
                }

                @if results.data.is_empty() {
                    p class="text-gray-600" { "No " (kind.label()) " matched your search." }
                } @else {
                    (summary_list(base_url, &results.data))
                }
            }
        },
    )
}

pub fn venue_detail_page(venue: &VenueDetail) -> Markup {
    base_layout(
        &venue.name,
        html! {
            div class="max-w-5xl mx-auto" {
                div class="flex flex-col md:flex-row gap-8 mb-8" {
                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                        p class="text-sm text-gray-500 mb-4" { "ID: " (venue.id) }

                        (genre_tags(&venue.genres))

                        div class="mt-4" {
                            (contact_details(
                                venue.address.as_deref(),
                                &venue.city,
                                &venue.state,
                                venue.phone.as_deref(),
                                venue.website.as_deref(),
                                venue.facebook_link.as_deref(),
                            ))
                        }

                        (seeking_banner(venue.seeking_talent, venue.seeking_description.as_deref(), "Seeking Talent"))

                        div class="mt-6 flex gap-3" {
                            a href={(format!("/venues/{}/edit", venue.id))}
                              class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                                "Edit"
                            }
                            button
                                class="px-4 py-2 bg-red-500 hover:bg-red-600 text-white font-semibold rounded-md"
                                hx-delete={(format!("/venues/{}", venue.id))}
                                hx-confirm="Delete this venue and all of its shows?"
                                hx-swap="none" {
                                "Delete"
                            }
                        }
                    }

                    @if let Some(image) = &venue.image_link {
                        img src=(image) alt="Venue Image" class="w-full md:w-80 rounded-lg shadow-md object-cover";
                    }
                }

                section class="mb-8" {
                    h2 class="text-2xl font-semibold mb-4" {
                        span id="upcoming-count" { (venue.upcoming_shows_count) }
                        " Upcoming Shows"
                    }
                    div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                        @for show in &venue.upcoming_shows {
                            (venue_show_card(show))
                        }
                    }
                }

                section {
                    h2 class="text-2xl font-semibold mb-4" {
                        span id="past-count" { (venue.past_shows_count) }
                        " Past Shows"
                    }
                    div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                        @for show in &venue.past_shows {
                            (venue_show_card(show))
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_detail_page(artist: &ArtistDetail) -> Markup {
    base_layout(
        &artist.name,
        html! {
            div class="max-w-5xl mx-auto" {
                div class="flex flex-col md:flex-row gap-8 mb-8" {
                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                        p class="text-sm text-gray-500 mb-4" { "ID: " (artist.id) }

                        (genre_tags(&artist.genres))

                        div class="mt-4" {
                            (contact_details(
                                None,
                                &artist.city,
                                &artist.state,
                                artist.phone.as_deref(),
                                artist.website.as_deref(),
                                artist.facebook_link.as_deref(),
                            ))
                        }

                        (seeking_banner(artist.seeking_venue, artist.seeking_description.as_deref(), "Seeking Performance Venues"))

                        div class="mt-6" {
                            a href={(format!("/artists/{}/edit", artist.id))}
                              class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                                "Edit"
                            }
                        }
                    }

                    @if let Some(image) = &artist.image_link {
                        img src=(image) alt="Artist Image" class="w-full md:w-80 rounded-lg shadow-md object-cover";
                    }
                }

                section class="mb-8" {
                    h2 class="text-2xl font-semibold mb-4" {
                        span id="upcoming-count" { (artist.upcoming_shows_count) }
                        " Upcoming Shows"
                    }
                    div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                        @for show in &artist.upcoming_shows {
                            (artist_show_card(show))
                        }
                    }
                }

                section {
                    h2 class="text-2xl font-semibold mb-4" {
                        span id="past-count" { (artist.past_shows_count) }
                        " Past Shows"
                    }
                    div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                        @for show in &artist.past_shows {
                            (artist_show_card(show))
                        }
                    }
                }
            }
        },
    )
}

pub fn shows_page(shows: &[ShowRow]) -> Markup {
    base_layout(
        "Shows",
        html! {
            div class="max-w-6xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { "Shows" }

                @if shows.is_empty() {
                    div class="text-center py-12" {
                        p class="text-gray-600 text-lg" { "No shows listed yet." }
                    }
                } @else {
                    div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-4 gap-6" {
                        @for show in shows {
                            (show_row_card(show))
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let heading = status.canonical_reason().unwrap_or("Error");

    base_layout(
        heading,
        html! {
            div class="text-center py-16" {
                h1 class="text-6xl font-bold text-gray-300 mb-4" { (status.as_u16()) }
                h2 class="text-2xl font-semibold text-gray-900 mb-2" { (heading) }
                p class="text-gray-600 mb-8" { (message) }
                a href="/" class="text-primary hover:underline" { "Back to the home page" }
            }
        },
    )
}
