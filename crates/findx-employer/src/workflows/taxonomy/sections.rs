use super::domain::SectionKey;

/// Which taxonomy categories make up each question section, in display order.
///
/// Every consumer of section membership reads this table; a taxonomy key may
/// appear in at most one row.
pub const SECTION_LAYOUT: &[(SectionKey, &[&str])] = &[
    (
        SectionKey::Business,
        &[
            "accounting",
            "administration",
            "advertising",
            "banking",
            "call_centre",
            "consulting",
            "human_resources",
            "insurance",
            "retail",
            "sales",
        ],
    ),
    (
        SectionKey::Technology,
        &[
            "information_technology",
            "software_development",
            "data_analytics",
            "cyber_security",
            "telecommunications",
            "engineering",
        ],
    ),
    (
        SectionKey::Professional,
        &[
            "legal",
            "government",
            "education",
            "science",
            "real_estate",
            "community_services",
        ],
    ),
    (
        SectionKey::Creative,
        &["design", "architecture", "media", "arts", "fashion"],
    ),
    (
        SectionKey::Industry,
        &[
            "construction",
            "manufacturing",
            "mining",
            "agriculture",
            "trades",
            "transport_logistics",
            "hospitality",
            "tourism",
            "automotive",
            "energy",
            "cleaning",
            "security",
        ],
    ),
    (
        SectionKey::Health,
        &[
            "healthcare",
            "nursing",
            "aged_care",
            "mental_health",
            "pharmacy",
            "fitness",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_follows_section_order() {
        let keys: Vec<SectionKey> = SECTION_LAYOUT.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, SectionKey::ordered().to_vec());
    }
}
