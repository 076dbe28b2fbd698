use maud::{html, Markup, DOCTYPE};

/// Top-level sections: (path, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("/venues", "Venues"),
    ("/artists", "Artists"),
    ("/shows", "Shows"),
];

/// Wraps page content in the document shell, nav bar and footer.
pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="h-full" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Showbook" }

                // Compiled TailwindCSS, with a plain fallback under /static
                link rel="stylesheet" href="/static/css/output.css";

                // HTMX drives the delete button on venue pages
                script src="https://unpkg.com/htmx.org@1.9.10" {}

                // Card hover lift for show listings
                style {
                    r#"
                    .show-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 10px 20px rgba(0,0,0,0.1);
                    }
                    "#
                }
            }
            body class="h-full bg-gray-50" {
                div class="min-h-full flex flex-col" {
                    // Navigation
                    (nav_bar())

                    // Page body
                    main class="container mx-auto px-4 py-8 flex-grow" {
                        (content)
                    }

                    // Footer
                    (footer())
                }
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav class="bg-white shadow-sm" {
            div class="container mx-auto px-4" {
                div class="flex justify-between items-center h-16" {
                    // Brand
                    a href="/" class="flex items-center space-x-3" {
                        span class="text-2xl" { "🎤" }
                        span class="text-xl font-bold text-gray-900" { "Showbook" }
                    }

                    // Sections, then the shortcut for booking a show
                    div class="flex items-center space-x-4" {
                        @for (href, label) in NAV_LINKS {
                            a href=(href) class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                                (label)
                            }
                        }
                        a href="/shows/create" class="px-3 py-2 bg-primary hover:bg-green-600 text-white text-sm font-semibold rounded-md" {
                            "Book a show"
                        }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="bg-white border-t border-gray-200 mt-12" {
            div class="container mx-auto px-4 py-6 flex justify-between text-gray-600 text-sm" {
                span { "Showbook - Venue and artist booking" }
                // Machine-readable views of the same listings
                a href="/api/shows" class="hover:text-primary" { "JSON API" }
            }
        }
    }
}
