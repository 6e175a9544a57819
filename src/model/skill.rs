#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkillRecord {
    pub name: String,
    pub category: String,
}
