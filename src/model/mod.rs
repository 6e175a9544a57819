pub use self::project::{ProjectId, ProjectRecord};
pub use self::skill::SkillRecord;
pub use self::timeline::TimelineEntry;

mod project;
mod skill;
mod timeline;
