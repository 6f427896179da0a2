use serde::Serialize;

/// A property offered on the site. The collection is compiled in and never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub location: &'static str,
    pub property_type: &'static str,
    pub bedrooms: u32,
    pub bathrooms: f64, // half-baths allowed
    pub price: i64,     // whole dollars
}

pub static LISTINGS: &[Listing] = &[
    Listing {
        location: "Calvada Valley",
        property_type: "Single Family Home",
        bedrooms: 3,
        bathrooms: 2.0,
        price: 325_000,
    },
    Listing {
        location: "Desert Greens",
        property_type: "Manufactured Home",
        bedrooms: 2,
        bathrooms: 2.0,
        price: 185_000,
    },
    Listing {
        location: "Mount Charleston Estates",
        property_type: "Single Family Home",
        bedrooms: 4,
        bathrooms: 3.0,
        price: 425_000,
    },
    Listing {
        location: "Pahrump Valley",
        property_type: "Ranch Style Home",
        bedrooms: 3,
        bathrooms: 2.0,
        price: 295_000,
    },
    Listing {
        location: "Winery Estates",
        property_type: "Single Family Home",
        bedrooms: 5,
        bathrooms: 4.0,
        price: 550_000,
    },
    Listing {
        location: "Artesia at Hafen Ranch",
        property_type: "Single Family Home",
        bedrooms: 3,
        bathrooms: 2.5,
        price: 375_000,
    },
    Listing {
        location: "Comstock Park",
        property_type: "Townhome",
        bedrooms: 2,
        bathrooms: 2.0,
        price: 210_000,
    },
];

impl Listing {
    /// `$325,000`
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }

    /// `2` or `2.5`
    pub fn bathrooms_display(&self) -> String {
        if self.bathrooms.fract() == 0.0 {
            format!("{}", self.bathrooms as i64)
        } else {
            format!("{}", self.bathrooms)
        }
    }

    pub fn bedrooms_label(&self) -> &'static str {
        if self.bedrooms == 1 {
            "Bedroom"
        } else {
            "Bedrooms"
        }
    }

    pub fn bathrooms_label(&self) -> &'static str {
        if self.bathrooms == 1.0 {
            "Bathroom"
        } else {
            "Bathrooms"
        }
    }
}

/// Whole dollars with thousands separators.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    if price < 0 {
        out.push('-');
    }
    out.push('$');

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
