// src/domain/page_state.rs

use crate::domain::carousel::Carousel;
use crate::domain::content::{GALLERY, WHY_CHOOSE_US};
use crate::domain::search::{SearchCriteria, SortKey};
use std::collections::HashMap;
use url::form_urlencoded;

/// Everything the page remembers between clicks. It lives in the query
/// string, so each request owns its copy and every control links to the
/// next state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub criteria: SearchCriteria,
    /// Results panel is open.
    pub searched: bool,
    pub why_index: usize,
    /// Gallery image shown in the lightbox.
    pub expanded_image: Option<usize>,
}

/// Decode a raw query string into key/value pairs. Later keys win.
pub fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    form_urlencoded::parse(query.unwrap_or("").as_bytes())
        .into_owned()
        .collect()
}

impl PageState {
    pub fn from_query(query: Option<&str>) -> Self {
        Self::from_params(&parse_query(query))
    }

    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let index = |key: &str| {
            params
                .get(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
        };

        let searched = matches!(
            params.get("searched").map(|v| v.trim()),
            Some("1") | Some("true")
        );
        let why_index = Carousel::new(index("why").unwrap_or(0), WHY_CHOOSE_US.len()).index();
        let expanded_image = index("image").filter(|&i| i < GALLERY.len());

        Self {
            criteria: SearchCriteria::from_params(params),
            searched,
            why_index,
            expanded_image,
        }
    }

    pub fn carousel(&self) -> Carousel {
        Carousel::new(self.why_index, WHY_CHOOSE_US.len())
    }

    pub fn search(&self) -> Self {
        Self {
            searched: true,
            ..self.clone()
        }
    }

    pub fn clear(&self) -> Self {
        let mut next = self.clone();
        next.criteria.clear();
        next.searched = false;
        next
    }

    pub fn close_results(&self) -> Self {
        Self {
            searched: false,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        let mut next = self.clone();
        next.criteria.sort = sort;
        next
    }

    pub fn why_next(&self) -> Self {
        Self {
            why_index: self.carousel().next().index(),
            ..self.clone()
        }
    }

    pub fn why_prev(&self) -> Self {
        Self {
            why_index: self.carousel().prev().index(),
            ..self.clone()
        }
    }

    pub fn why_go_to(&self, index: usize) -> Self {
        Self {
            why_index: self.carousel().go_to(index).index(),
            ..self.clone()
        }
    }

    /// Indices past the end of the gallery leave the state unchanged.
    pub fn expand_image(&self, index: usize) -> Self {
        if index >= GALLERY.len() {
            return self.clone();
        }
        Self {
            expanded_image: Some(index),
            ..self.clone()
        }
    }

    pub fn collapse_image(&self) -> Self {
        Self {
            expanded_image: None,
            ..self.clone()
        }
    }

    /// Query pairs for this state, default values left out.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.criteria.to_params();
        if self.searched {
            pairs.push(("searched", "1".to_string()));
        }
        if self.why_index != 0 {
            pairs.push(("why", self.why_index.to_string()));
        }
        if let Some(i) = self.expanded_image {
            pairs.push(("image", i.to_string()));
        }
        pairs
    }

    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }

    /// Link to this state, scrolled to `fragment`.
    pub fn href(&self, fragment: &str) -> String {
        let query = self.to_query();
        if query.is_empty() {
            format!("/#{fragment}")
        } else {
            format!("/?{query}#{fragment}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_default_state() {
        assert_eq!(PageState::from_query(None), PageState::default());
        assert_eq!(PageState::from_query(Some("")), PageState::default());
        assert_eq!(PageState::default().href("listings"), "/#listings");
    }

    #[test]
    fn percent_and_plus_encoding_is_decoded() {
        let state = PageState::from_query(Some(
            "location=Mount+Charleston%20Estates&type=Single+Family+Home&searched=1",
        ));
        assert_eq!(
            state.criteria.location.as_deref(),
            Some("Mount Charleston Estates")
        );
        assert_eq!(
            state.criteria.property_type.as_deref(),
            Some("Single Family Home")
        );
        assert!(state.searched);
    }

    #[test]
    fn query_round_trips() {
        let state = PageState::from_query(Some(
            "location=Artesia+at+Hafen+Ranch&bedrooms=3&max_price=400000&sort=bedrooms&searched=1&why=2&image=4",
        ));
        let again = PageState::from_query(Some(&state.to_query()));
        assert_eq!(again, state);
    }

    #[test]
    fn clear_resets_filters_and_hides_results() {
        let state = PageState::from_query(Some("bedrooms=4&searched=1&why=1"));
        let cleared = state.clear();

        assert!(cleared.criteria.is_unconstrained());
        assert!(!cleared.searched);
        // Unrelated state survives.
        assert_eq!(cleared.why_index, 1);
    }

    #[test]
    fn clear_keeps_chosen_sort() {
        let cleared = PageState::from_query(Some("sort=price-high&bedrooms=3&searched=1")).clear();
        assert_eq!(cleared.criteria.sort, SortKey::PriceDescending);
        assert!(cleared.criteria.is_unconstrained());
        assert!(!cleared.searched);
    }

    #[test]
    fn close_keeps_criteria() {
        let state = PageState::from_query(Some("bedrooms=4&searched=1"));
        let closed = state.close_results();
        assert!(!closed.searched);
        assert_eq!(closed.criteria.min_bedrooms, Some(4));
        assert!(closed.search().searched);
    }

    #[test]
    fn carousel_transitions_wrap() {
        let state = PageState::default();
        assert_eq!(state.why_prev().why_index, WHY_CHOOSE_US.len() - 1);
        assert_eq!(state.why_next().why_index, 1);
        assert_eq!(state.why_go_to(99).why_index, WHY_CHOOSE_US.len() - 1);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let state = PageState::from_query(Some("why=42&image=99"));
        assert_eq!(state.why_index, WHY_CHOOSE_US.len() - 1);
        assert_eq!(state.expanded_image, None);

        assert_eq!(state.expand_image(GALLERY.len()), state);
        assert_eq!(state.expand_image(0).expanded_image, Some(0));
        assert_eq!(state.expand_image(0).collapse_image(), state);
    }

    #[test]
    fn sort_change_keeps_filters() {
        let state = PageState::from_query(Some("type=Townhome&searched=1"));
        let sorted = state.with_sort(SortKey::PriceDescending);
        assert_eq!(sorted.criteria.sort, SortKey::PriceDescending);
        assert_eq!(sorted.criteria.property_type.as_deref(), Some("Townhome"));
        assert!(sorted.href("listings").contains("sort=price-high"));
    }
}
