use crate::{
    result::{Error, Result},
    types::{Topic, TopicTerms},
};

/// Id of the topic whose terms are given by the caller
pub const CUSTOM_TOPIC_ID: &str = "custom";

/// Every topic that can be requested.
///
/// Read-only process-wide data, the order is the one presented to users.
pub static TOPICS: &[Topic] = &[
    Topic::fixed(
        "motivation",
        "Gym & Motivation",
        &[
            "gym motivation",
            "running athlete",
            "boxing training",
            "weightlifting",
        ],
    ),
    Topic::fixed(
        "luxury",
        "Luxury Lifestyle",
        &["luxury car", "yacht ocean", "private jet", "luxury mansion"],
    ),
    Topic::fixed(
        "nature",
        "Nature & Calm",
        &[
            "forest aurora",
            "beach waves",
            "mountain aesthetic",
            "rainy window",
        ],
    ),
    Topic::fixed(
        "city",
        "City Nights",
        &[
            "city night",
            "neon streets",
            "traffic timelapse",
            "skyline aerial",
        ],
    ),
    Topic::fixed(
        "abstract",
        "Abstract Loops",
        &[
            "abstract particles",
            "liquid colors",
            "dark smoke",
            "gradient background",
        ],
    ),
    Topic::fixed(
        "satisfying",
        "Oddly Satisfying",
        &["kinetic sand", "slime satisfying", "soap cutting", "paint mixing"],
    ),
    Topic::custom(CUSTOM_TOPIC_ID, "Custom Search"),
];

/// List every topic of the catalog
pub fn list_topics() -> &'static [Topic] {
    TOPICS
}

/// Find the topic with the given id
pub fn find_topic(topic_id: &str) -> Result<&'static Topic> {
    TOPICS
        .iter()
        .find(|topic| topic.id == topic_id)
        .ok_or_else(|| Error::UnknownTopic(topic_id.to_owned()))
}

/// Resolve a topic id to where its search terms come from.
///
/// The custom topic resolves to [`TopicTerms::Custom`] and carries no term.
pub fn resolve_topic(topic_id: &str) -> Result<TopicTerms> {
    find_topic(topic_id).map(|topic| topic.terms)
}

/// Build the list of terms to search for a topic.
///
/// For the custom topic, the caller query is the only term and must not be blank.
/// The query is ignored for the other topics.
pub fn search_terms(topic_id: &str, custom_query: Option<&str>) -> Result<Vec<String>> {
    match resolve_topic(topic_id)? {
        TopicTerms::Fixed(terms) => Ok(terms.iter().map(|&t| t.to_owned()).collect()),
        TopicTerms::Custom => match custom_query.map(str::trim) {
            Some(query) if !query.is_empty() => Ok(vec![query.to_owned()]),
            _ => Err(Error::MissingCustomQuery),
        },
    }
}
