//! Static storefront copy

pub const BRAND: &str = "SilicaGel Pro";
pub const TAGLINE: &str = "Industrial Desiccants";

pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub struct Application {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct QualityStandard {
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline figure; `target` drives the counter tween in the products section
pub struct Stat {
    pub target: f64,
    pub decimals: usize,
    pub suffix: &'static str,
    pub label: &'static str,
}

/// What a contact channel copies to the clipboard, if anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Phone,
    Email,
    Address,
}

pub struct ContactChannel {
    pub kind: ChannelKind,
    pub label: &'static str,
    pub lines: &'static [&'static str],
    pub note: Option<&'static str>,
}

pub struct Hours {
    pub days: &'static str,
    pub time: &'static str,
}

pub mod hero {
    pub const BADGE: &str = "Trusted by 500+ Industrial Companies";
    pub const HEADLINE: &str = "Premium Silica Gel Solutions";
    pub const SUBHEADING: &str = "Reliable moisture control and desiccant products for manufacturing, \
        packaging, and industrial processes. Engineered for performance, trusted for results.";
    pub const FEATURES: [&str; 4] = [
        "ISO-certified manufacturing processes",
        "Custom particle sizes and specifications",
        "Technical support and expert consultation",
        "Fast delivery and reliable supply chain",
    ];
    pub const QUOTE_CTA: &str = "Get Industrial Quote";
    pub const PRODUCTS_CTA: &str = "Product Specifications";
    /// Static figures shown under the hero copy
    pub const STATS: [(&str, &str); 4] = [
        ("20+", "Years Experience"),
        ("500+", "Industrial Clients"),
        ("99.9%", "Purity Standard"),
        ("24/7", "Technical Support"),
    ];
}

pub const PRODUCTS_HEADING: &str = "Premium Silica Gel Products";
pub const PRODUCTS_INTRO: &str = "Industry-leading desiccant solutions engineered for optimal \
    moisture control across diverse industrial applications.";

pub const PRODUCTS: [Product; 4] = [
    Product {
        name: "Indicating Silica Gel",
        description: "Color-changing crystals that visually indicate moisture saturation levels.",
        features: [
            "Visual moisture indication",
            "Reusable after regeneration",
            "FDA approved grades",
        ],
    },
    Product {
        name: "Non-Indicating Silica Gel",
        description: "High-capacity moisture absorption without color change indicators.",
        features: [
            "Maximum absorption capacity",
            "Cost-effective solution",
            "Various mesh sizes",
        ],
    },
    Product {
        name: "Specialty Grades",
        description: "Custom formulations for specific industrial requirements.",
        features: [
            "Custom particle sizes",
            "Industry-specific formulas",
            "Enhanced performance",
        ],
    },
    Product {
        name: "Bulk Industrial",
        description: "Large-volume packaging for manufacturing and industrial operations.",
        features: [
            "Bulk packaging options",
            "Consistent quality",
            "Competitive pricing",
        ],
    },
];

pub const STATS: [Stat; 4] = [
    Stat {
        target: 99.9,
        decimals: 1,
        suffix: "%",
        label: "Purity Level",
    },
    Stat {
        target: 500.0,
        decimals: 0,
        suffix: "+",
        label: "Industrial Clients",
    },
    Stat {
        target: 20.0,
        decimals: 0,
        suffix: "+",
        label: "Years Experience",
    },
    Stat {
        target: 24.0,
        decimals: 0,
        suffix: "/7",
        label: "Technical Support",
    },
];

pub const APPLICATIONS_HEADING: &str = "Industry Applications";
pub const APPLICATIONS_INTRO: &str =
    "Trusted moisture control solutions across multiple industries and applications.";

const APPLICATION_BLURB: &str = "Reliable moisture protection for critical applications.";

pub const APPLICATIONS: [Application; 6] = [
    Application {
        name: "Electronics Manufacturing",
        description: APPLICATION_BLURB,
    },
    Application {
        name: "Pharmaceutical Packaging",
        description: APPLICATION_BLURB,
    },
    Application {
        name: "Food & Beverage",
        description: APPLICATION_BLURB,
    },
    Application {
        name: "Automotive Components",
        description: APPLICATION_BLURB,
    },
    Application {
        name: "Textile Industry",
        description: APPLICATION_BLURB,
    },
    Application {
        name: "Industrial Equipment",
        description: APPLICATION_BLURB,
    },
];

pub const QUALITY_HEADING: &str = "Quality & Reliability";
pub const QUALITY_INTRO: &str = "Rigorous testing protocols and quality assurance processes \
    ensure consistent performance.";

pub const QUALITY: [QualityStandard; 3] = [
    QualityStandard {
        title: "ISO Certified",
        description: "Manufacturing processes meet international quality standards",
    },
    QualityStandard {
        title: "Rigorous Testing",
        description: "Comprehensive quality control at every production stage",
    },
    QualityStandard {
        title: "Technical Support",
        description: "Expert guidance and custom solution development",
    },
];

pub const ABOUT_HEADING: &str = "About SilicaGel Pro";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "With over two decades of experience in desiccant technology, we specialize in \
     manufacturing and distributing premium silica gel solutions for industrial applications.",
    "Our commitment to quality, technical expertise, and customer service has made us \
     a trusted partner for companies across diverse industries.",
];
pub const ABOUT_STRENGTHS: [&str; 4] = [
    "Advanced manufacturing facilities",
    "Dedicated technical support team",
    "Custom solution development",
    "Reliable global supply chain",
];

pub const CONTACT_HEADING: &str = "Get In Touch";
pub const CONTACT_INTRO: &str = "Ready to discuss your moisture control needs? Contact our \
    technical team for expert guidance and custom solutions.";

pub const SALES_PHONE: &str = "+1 (555) 123-4567";
pub const SALES_EMAIL: &str = "info@silicagelpro.com";
pub const WEBSITE: &str = "www.silicagelpro.com";

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        kind: ChannelKind::Phone,
        label: "Phone",
        lines: &[SALES_PHONE],
        note: Some("Mon-Fri 8AM-6PM EST"),
    },
    ContactChannel {
        kind: ChannelKind::Email,
        label: "Email",
        lines: &[SALES_EMAIL],
        note: Some("Response within 24 hours"),
    },
    ContactChannel {
        kind: ChannelKind::Address,
        label: "Address",
        lines: &["123 Industrial Blvd", "Manufacturing City, MC 12345"],
        note: None,
    },
];

pub const BUSINESS_HOURS: [Hours; 3] = [
    Hours {
        days: "Monday - Friday",
        time: "8:00 AM - 6:00 PM EST",
    },
    Hours {
        days: "Saturday",
        time: "9:00 AM - 2:00 PM EST",
    },
    Hours {
        days: "Sunday",
        time: "Closed",
    },
];

pub const EMERGENCY_HEADING: &str = "Emergency Technical Support";
pub const EMERGENCY_TEXT: &str = "For urgent technical issues affecting production, our \
    emergency support team is available 24/7.";

pub const ADDRESS_LINE: &str = "123 Industrial Blvd, Manufacturing City, MC 12345";

pub mod footer {
    pub const CTA_HEADING: &str = "Ready to Find Your Perfect Silica Gel Solution?";
    pub const CTA_TEXT: &str =
        "Get expert guidance and custom solutions for your industrial moisture control needs.";
    pub const QUOTE_CTA: &str = "Request Quote";
    pub const PRODUCTS_CTA: &str = "Browse Products";
    pub const BLURB: &str = "Leading manufacturer and distributor of premium silica gel \
        solutions for industrial applications. Committed to quality, reliability, and \
        customer satisfaction.";
    /// Labels for the section keys 1-5, in navigation order
    pub const QUICK_LINKS: [&str; 5] = [
        "Products",
        "Applications",
        "Quality Standards",
        "About Us",
        "Contact",
    ];
    pub const PRODUCT_LINKS: [&str; 5] = [
        "Indicating Silica Gel",
        "Non-Indicating Silica Gel",
        "Specialty Grades",
        "Bulk Industrial",
        "Custom Solutions",
    ];
    pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Quality Standards"];
}

/// Copyright line for the given year
pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}
