//! # Static Catalogs
//!
//! The fixed prompt-template and phone-brand tables. Both are `&'static`
//! constant tables chosen at build time; there is no mutation API.

/// A prompt skeleton selected by content type. The template text is combined
/// with the free-text form fields to produce the final request prompt.
pub struct PromptTemplate {
    /// Display name shown in the content-type selector.
    pub label: &'static str,
    /// Stable identifier.
    pub value: &'static str,
    /// Fixed leading text of the prompt.
    pub template: &'static str,
}

/// A phone brand card: identifier, display name, logo URL, and the ordered
/// list of models offered in the picker.
pub struct PhoneBrand {
    pub id: &'static str,
    pub name: &'static str,
    /// External logo image URL. Cosmetic only; shown as a dimmed detail line
    /// since terminals don't render images.
    pub logo_url: &'static str,
    pub models: &'static [&'static str],
}

pub const PROMPT_TEMPLATES: &[PromptTemplate] = &[
    PromptTemplate {
        label: "Product Launch Announcement",
        value: "launch",
        template: "Create an exciting product launch announcement for a new smartphone.",
    },
    PromptTemplate {
        label: "Social Media Campaign",
        value: "social",
        template: "Write an engaging social media campaign post for a smartphone.",
    },
    PromptTemplate {
        label: "Feature Highlight",
        value: "feature",
        template: "Generate compelling content highlighting the key features of a smartphone.",
    },
    PromptTemplate {
        label: "Comparison Ad",
        value: "comparison",
        template: "Create a persuasive comparison advertisement for a smartphone against competitors.",
    },
    PromptTemplate {
        label: "Tech Review",
        value: "review",
        template: "Write a detailed technical review of a smartphone for tech enthusiasts.",
    },
];

pub const PHONE_BRANDS: &[PhoneBrand] = &[
    PhoneBrand {
        id: "apple",
        name: "Apple",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/f/fa/Apple_logo_black.svg",
        models: &["iPhone 15 Pro", "iPhone 15", "iPhone 14 Pro", "iPhone 14"],
    },
    PhoneBrand {
        id: "samsung",
        name: "Samsung",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/2/24/Samsung_Logo.svg",
        models: &["Galaxy S24 Ultra", "Galaxy S24+", "Galaxy S24", "Galaxy Z Fold 5"],
    },
    PhoneBrand {
        id: "google",
        name: "Google",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/2/2f/Google_2015_logo.svg",
        models: &["Pixel 8 Pro", "Pixel 8", "Pixel 7a", "Pixel Fold"],
    },
    PhoneBrand {
        id: "xiaomi",
        name: "Xiaomi",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/a/ae/Xiaomi_logo_%282021-%29.svg",
        models: &["Xiaomi 14 Pro", "Xiaomi 14", "Xiaomi 13T Pro", "Xiaomi 13T"],
    },
    PhoneBrand {
        id: "oneplus",
        name: "OnePlus",
        logo_url: "https://upload.wikimedia.org/wikipedia/commons/1/17/OnePlus_logo_2015.svg",
        models: &["OnePlus 12", "OnePlus 11", "OnePlus Open", "OnePlus Nord N30"],
    },
];

/// Looks up a template by its stable identifier.
pub fn template_by_value(value: &str) -> Option<&'static PromptTemplate> {
    PROMPT_TEMPLATES.iter().find(|t| t.value == value)
}

/// Looks up a brand by its stable identifier.
pub fn brand_by_id(id: &str) -> Option<&'static PhoneBrand> {
    PHONE_BRANDS.iter().find(|b| b.id == id)
}
