//! Home, pricing and not-found pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use namenest_core::catalog::{
    CHARACTERISTICS, GENDERS, LENGTHS, LETTERS, MEANINGS, ORIGINS, SYLLABLES,
};
use namenest_core::seo::{Category, ListingPage, PageMeta};

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// A link in a home page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

/// A group of catalog links on the home page.
#[derive(Debug, Clone)]
pub struct NavSection {
    pub title: &'static str,
    pub links: Vec<NavLink>,
}

fn links(categories: impl Iterator<Item = Category>) -> Vec<NavLink> {
    categories
        .map(|category| {
            let page = ListingPage::new(category, None);
            NavLink {
                label: page.entry().label.to_owned(),
                path: page.path(),
            }
        })
        .collect()
}

/// Every catalog, in the order the home page shows them.
#[must_use]
pub fn nav_sections() -> Vec<NavSection> {
    vec![
        NavSection {
            title: "By gender",
            links: links(GENDERS.iter().map(Category::Gender)),
        },
        NavSection {
            title: "By origin",
            links: links(ORIGINS.iter().map(Category::Origin)),
        },
        NavSection {
            title: "By first letter",
            links: links(LETTERS.iter().map(Category::Letter)),
        },
        NavSection {
            title: "By syllables",
            links: links(SYLLABLES.iter().map(Category::Syllables)),
        },
        NavSection {
            title: "By length",
            links: links(LENGTHS.iter().map(Category::Length)),
        },
        NavSection {
            title: "By personality",
            links: links(CHARACTERISTICS.iter().map(Category::Characteristic)),
        },
        NavSection {
            title: "By meaning",
            links: links(MEANINGS.iter().map(Category::Meaning)),
        },
    ]
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub meta: PageMeta,
    pub canonical_url: String,
    pub sections: Vec<NavSection>,
}

#[derive(Template, WebTemplate)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub meta: PageMeta,
    pub canonical_url: String,
    pub user: Option<CurrentUser>,
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub meta: PageMeta,
    pub canonical_url: String,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let meta = PageMeta::simple(
        "Find the Perfect Baby Name",
        "Discover baby names by gender, origin, first letter, syllables, length, personality and meaning, with AI-assisted suggestions for premium members.",
        "/",
    );
    HomeTemplate {
        canonical_url: meta.canonical_url(&state.config().base_url),
        meta,
        sections: nav_sections(),
    }
}

/// Display the pricing page with the signup (or upgrade) form.
#[instrument(skip(state, user))]
pub async fn pricing(State(state): State<AppState>, OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    let meta = PageMeta::simple(
        "Pricing",
        "NameNest Premium: unlimited AI name suggestions and a shortlist you can share.",
        "/pricing",
    );
    PricingTemplate {
        canonical_url: meta.canonical_url(&state.config().base_url),
        meta,
        user,
    }
}

/// A 404 page.
#[must_use]
pub fn not_found_page(base_url: &str) -> Response {
    let meta = PageMeta::simple(
        "Page Not Found",
        "We couldn't find the page you were looking for.",
        "/",
    );
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            canonical_url: meta.canonical_url(base_url),
            meta,
        },
    )
        .into_response()
}

/// Router fallback.
pub async fn fallback(State(state): State<AppState>) -> Response {
    not_found_page(&state.config().base_url)
}
