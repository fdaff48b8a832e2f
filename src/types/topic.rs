/// Where the search terms of a topic come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicTerms {
    /// Hard-coded terms, searched in this order
    Fixed(&'static [&'static str]),
    /// Terms are given by the caller at call time
    Custom,
}

/// A category of background footage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    /// Display name, not used to search
    pub label: &'static str,
    pub terms: TopicTerms,
}

impl Topic {
    pub const fn fixed(
        id: &'static str,
        label: &'static str,
        terms: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            label,
            terms: TopicTerms::Fixed(terms),
        }
    }

    pub const fn custom(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            terms: TopicTerms::Custom,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.terms, TopicTerms::Custom)
    }
}
