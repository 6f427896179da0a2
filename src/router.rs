use crate::config::Config;
use crate::domain::search::{distinct_locations, distinct_property_types, search};
use crate::domain::{Listing, PageState, LISTINGS};
use crate::errors::ServerError;
use crate::responses::{
    html_response, json_response, static_file_response, text_response, ResultResp,
};
use crate::templates;
use astra::Request;
use serde::Serialize;
use time::OffsetDateTime;

pub fn handle(req: Request, config: &Config) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();

    match (method, path) {
        ("GET", "/") => {
            let state = PageState::from_query(query);
            let year = OffsetDateTime::now_utc().year();
            html_response(templates::pages::home_page(&state, year))
        }

        // htmx swap target for the search form; always shows results.
        ("GET", "/listings/results") => {
            let state = PageState::from_query(query).search();
            html_response(templates::results_panel(&state))
        }

        ("GET", "/api/listings") => {
            let state = PageState::from_query(query);
            json_response(&ListingsPayload::for_state(&state))
        }

        ("GET", "/healthz") => text_response("ok"),

        ("GET", p) if p.starts_with("/static/") => {
            static_file_response(&config.static_dir, &p["/static/".len()..])
        }

        (_, "/" | "/listings/results" | "/api/listings" | "/healthz") => {
            Err(ServerError::MethodNotAllowed)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Body of `GET /api/listings`.
#[derive(Debug, Serialize)]
pub struct ListingsPayload {
    pub count: usize,
    pub listings: Vec<&'static Listing>,
    pub locations: Vec<&'static str>,
    pub property_types: Vec<&'static str>,
}

impl ListingsPayload {
    pub fn for_state(state: &PageState) -> Self {
        let listings = search(LISTINGS, &state.criteria);
        Self {
            count: listings.len(),
            listings,
            locations: distinct_locations(LISTINGS),
            property_types: distinct_property_types(LISTINGS),
        }
    }
}
