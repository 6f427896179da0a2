// src/domain/search.rs

use crate::domain::listing::Listing;
use std::collections::HashMap;

/// Ordering applied to search results after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    PriceAscending,
    PriceDescending,
    BedroomsDescending,
    /// Shown as "Newest". Listings carry no date, so collection order is kept.
    Unordered,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::BedroomsDescending,
        SortKey::Unordered,
    ];

    /// Value used in query strings and `<option value=..>`.
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::BedroomsDescending => "bedrooms",
            SortKey::Unordered => "newest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::PriceAscending => "Price: Low to High",
            SortKey::PriceDescending => "Price: High to Low",
            SortKey::BedroomsDescending => "Most Bedrooms",
            SortKey::Unordered => "Newest",
        }
    }

    /// Unknown values fall back to the default ordering.
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "price-high" => SortKey::PriceDescending,
            "bedrooms" => SortKey::BedroomsDescending,
            "newest" => SortKey::Unordered,
            _ => SortKey::PriceAscending,
        }
    }
}

/// The user-editable filter constraints. `None` / empty means unconstrained.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCriteria {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub min_bedrooms: Option<i64>,
    pub min_bathrooms: Option<f64>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort: SortKey,
}

impl SearchCriteria {
    /// Builds criteria from raw form values. Missing, blank or unparsable
    /// inputs leave the criterion unset; nothing here is an error.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");

        Self {
            location: parse_text(get("location")),
            property_type: parse_text(get("type")),
            min_bedrooms: parse_whole(get("bedrooms")),
            min_bathrooms: parse_whole(get("baths")).map(|n| n as f64),
            min_price: parse_whole(get("min_price")),
            max_price: parse_whole(get("max_price")),
            sort: SortKey::from_param(get("sort")),
        }
    }

    /// Inverse of [`SearchCriteria::from_params`]. Unset fields and the
    /// default sort are left out.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(v) = &self.location {
            out.push(("location", v.clone()));
        }
        if let Some(v) = &self.property_type {
            out.push(("type", v.clone()));
        }
        if let Some(v) = self.min_bedrooms {
            out.push(("bedrooms", v.to_string()));
        }
        if let Some(v) = self.min_bathrooms {
            out.push(("baths", v.to_string()));
        }
        if let Some(v) = self.min_price {
            out.push(("min_price", v.to_string()));
        }
        if let Some(v) = self.max_price {
            out.push(("max_price", v.to_string()));
        }
        if self.sort != SortKey::default() {
            out.push(("sort", self.sort.as_param().to_string()));
        }
        out
    }

    /// True when no filter field is set. Sort is not a filter.
    pub fn is_unconstrained(&self) -> bool {
        self.location.is_none()
            && self.property_type.is_none()
            && self.min_bedrooms.is_none()
            && self.min_bathrooms.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Drops every filter. The chosen sort stays, it is not a constraint.
    pub fn clear(&mut self) {
        *self = Self {
            sort: self.sort,
            ..Self::default()
        };
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let location_ok = self
            .location
            .as_deref()
            .map_or(true, |l| listing.location == l);
        let type_ok = self
            .property_type
            .as_deref()
            .map_or(true, |t| listing.property_type == t);
        let bedrooms_ok = self
            .min_bedrooms
            .map_or(true, |n| i64::from(listing.bedrooms) >= n);
        let bathrooms_ok = self.min_bathrooms.map_or(true, |n| listing.bathrooms >= n);
        let min_price_ok = self.min_price.map_or(true, |p| listing.price >= p);
        let max_price_ok = self.max_price.map_or(true, |p| listing.price <= p);

        location_ok && type_ok && bedrooms_ok && bathrooms_ok && min_price_ok && max_price_ok
    }
}

/// Listings satisfying every set criterion, in collection order.
pub fn filter<'a>(listings: &'a [Listing], criteria: &SearchCriteria) -> Vec<&'a Listing> {
    listings.iter().filter(|l| criteria.matches(l)).collect()
}

/// Stable sort: equal keys keep their relative order.
pub fn sort(listings: &mut [&Listing], key: SortKey) {
    match key {
        SortKey::PriceAscending => listings.sort_by_key(|l| l.price),
        SortKey::PriceDescending => listings.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::BedroomsDescending => listings.sort_by(|a, b| b.bedrooms.cmp(&a.bedrooms)),
        SortKey::Unordered => {}
    }
}

/// Filter, then order by `criteria.sort`.
pub fn search<'a>(listings: &'a [Listing], criteria: &SearchCriteria) -> Vec<&'a Listing> {
    let mut found = filter(listings, criteria);
    sort(&mut found, criteria.sort);
    found
}

pub fn distinct_locations(listings: &[Listing]) -> Vec<&str> {
    distinct(listings.iter().map(|l| l.location))
}

pub fn distinct_property_types(listings: &[Listing]) -> Vec<&str> {
    distinct(listings.iter().map(|l| l.property_type))
}

// First-appearance order, duplicates dropped.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

fn parse_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

// Numeric inputs accept decimals and truncate them ("3.7" -> 3).
fn parse_whole(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    parse_decimal(raw).map(|f| f.trunc() as i64)
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}
