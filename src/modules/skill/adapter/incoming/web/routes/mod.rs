mod replace_skills;

pub use replace_skills::*;
