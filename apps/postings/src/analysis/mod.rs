// Aggregate views over postings: skills demand, per-state title dominance,
// compensation filtering. Plotting and map rendering stay outside this
// crate; these functions produce the plain data those consumers render.

pub mod filters;
pub mod skills;
pub mod states;

pub use filters::filter_by_salary_range;
pub use skills::{
    skill_cooccurrence, skill_match, top_skills, SkillCount, DEFAULT_SKILL_CATALOGUE,
};
pub use states::{dominant_title_by_state, StateDominantTitle};
