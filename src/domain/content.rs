// src/domain/content.rs
//
// Fixed copy and asset paths rendered on the page.

pub struct Agent {
    pub name: &'static str,
    pub brokerage: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub quote: &'static str,
    pub logo: &'static str,
    pub portrait: &'static str,
    pub hero_image: &'static str,
}

pub static AGENT: Agent = Agent {
    name: "Marci Metzger",
    brokerage: "The Ridge Realty Group",
    headline: "Pahrump Realtor",
    tagline: "Your Local Expert in Pahrump Real Estate",
    bio: "Marci was a REALTOR, then licensed Broker, in Washington State. Now, she is enjoying \
          the sunshine, and helping clients in Southern Nevada. Having helped buyers and sellers \
          in many markets since 1995, she is a wealth of knowledge.",
    quote: "I love that small-town feeling our community offers. Whether you're working, \
            retired, fast-paced or ready to relax — there's a place for you here.",
    logo: "/static/images/logo.webp",
    portrait: "/static/images/profile.png",
    hero_image: "/static/images/hero_banner.webp",
};

/// Image + heading + blurb, used by the carousel and the services list.
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static WHY_CHOOSE_US: &[Feature] = &[
    Feature {
        title: "Top Residential Sales in the Last 5 Years",
        description: "We proudly assisted nearly 90 clients in 2021 alone, closing over $28.5 \
                      million in sales. Our track record reflects our commitment to results and \
                      client satisfaction year after year.",
        image: "/static/images/marketing1.webp",
    },
    Feature {
        title: "Don't Just List It… Get It SOLD",
        description: "We go far beyond simply listing your property. From strategic marketing \
                      to maximum visibility, we put your home in front of the right buyers — \
                      fast. Our goal: top dollar, fewer days on market.",
        image: "/static/images/marketing2.webp",
    },
    Feature {
        title: "Guide for Buyers",
        description: "Buying a home can be overwhelming — but not with us by your side. We offer \
                      in-depth market insights, curated upgrade recommendations, trusted \
                      contractor connections, and everything else you need to make confident, \
                      informed decisions.",
        image: "/static/images/marketing3.webp",
    },
];

pub static SERVICES: &[Feature] = &[
    Feature {
        title: "Real Estate Done Right",
        description: "Nervous about your property adventure? Don't be. Whether you're getting \
                      ready to buy or sell your residence, looking at investment properties, or \
                      just curious about the markets, our team ensures you get the best \
                      experience possible!",
        image: "/static/images/services1.webp",
    },
    Feature {
        title: "Commercial & Residential",
        description: "Large or small, condo or mansion, we can find it and get at the price \
                      that's right. Fixer-uppers? Luxury? We can help with all of it! We live, \
                      work, and play in this community. Happy to help you find where to put you \
                      hard-earned dollars.",
        image: "/static/images/services2.webp",
    },
    Feature {
        title: "Rely on Expertise",
        description: "If you have questions about affordability, credit, and loan options, trust \
                      us to connect you with the right people to get the answers you need in a \
                      timely fashion. We make sure you feel confident and educated every step of \
                      the way.",
        image: "/static/images/services3.webp",
    },
];

pub static GALLERY: &[&str] = &[
    "/static/images/gallery1.webp",
    "/static/images/gallery2.webp",
    "/static/images/gallery3.webp",
    "/static/images/gallery4.webp",
    "/static/images/gallery5.webp",
    "/static/images/gallery6.webp",
    "/static/images/gallery7.webp",
];

pub struct Emblem {
    pub name: &'static str,
    pub image: &'static str,
}

pub static EMBLEMS: &[Emblem] = &[
    Emblem {
        name: "the ridge realty group",
        image: "/static/images/ridge.webp",
    },
    Emblem {
        name: "equal housing opportunity",
        image: "/static/images/equalhousing.webp",
    },
    Emblem {
        name: "realtor",
        image: "/static/images/realtor.webp",
    },
    Emblem {
        name: "pahrump valley",
        image: "/static/images/pahrump.webp",
    },
];

pub struct Contact {
    pub address: &'static str,
    pub address_short: [&'static str; 2],
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub whatsapp_href: &'static str,
    pub hours_days: &'static str,
    pub hours_time: &'static str,
    pub hours_note: &'static str,
}

pub static CONTACT: Contact = Contact {
    address: "3190 HW-160, Suite F, Pahrump, Nevada 89048, United States",
    address_short: ["3190 HW-160, Suite F", "Pahrump, NV 89048"],
    phone_display: "(206) 919-6886",
    phone_href: "tel:+12069196886",
    whatsapp_href: "https://wa.me/12069196886",
    hours_days: "Open Daily",
    hours_time: "8:00 am – 7:00 pm",
    hours_note: "Appointments outside office hours available upon request. Just call!",
};

pub struct MapEmbed {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
    pub embed_url: &'static str,
}

impl MapEmbed {
    /// Plain maps link for clients that block the iframe.
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.lat, self.lng
        )
    }
}

pub static OFFICE_MAP: MapEmbed = MapEmbed {
    lat: 36.18438785301625,
    lng: -115.95498499953099,
    zoom: 15,
    embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d6440.545683881431!2d-115.96205900780912!3d36.18424575374449!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x80c6398c31855555%3A0xca2c250302350734!2s3190%20NV-160%20Suite%20F%2C%20Pahrump%2C%20NV%2089048%2C%20USA!5e0!3m2!1sen!2sph!4v1761061661700!5m2!1sen!2sph",
};

/// Section anchors shown in the top navigation, in order.
pub static NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#profile", "About Us"),
    ("#listings", "Listings"),
    ("#contact", "Contact Us"),
];

pub static FOOTER_QUICK_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#listings", "Listings"),
    ("#services", "Services"),
    ("#contact", "Contact"),
];

pub static FOOTER_SERVICES: &[&str] = &[
    "Residential Sales",
    "Property Management",
    "Market Analysis",
];
