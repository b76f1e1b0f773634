pub mod replace_skills;
