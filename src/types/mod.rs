mod candidate;
mod orientation;
mod topic;

pub use candidate::{FileVariant, VideoCandidate, PREFERRED_FORMAT};
pub use orientation::Orientation;
pub use topic::{Topic, TopicTerms};
