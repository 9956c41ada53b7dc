use skillmatch_shared::AVAILABLE_SKILLS;

/// 用户选择的技能集合
///
/// 保持选择顺序；toggle 语义：再次选择即取消。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSelection {
    skills: Vec<String>,
}

impl SkillSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, skill: &str) {
        if let Some(pos) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill.to_string());
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn into_vec(self) -> Vec<String> {
        self.skills
    }
}

/// 从已有列表构建，重复项只保留第一次出现
impl<T: AsRef<str>> FromIterator<T> for SkillSelection {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut selection = Self::new();
        for skill in iter {
            if !selection.contains(skill.as_ref()) {
                selection.skills.push(skill.as_ref().to_string());
            }
        }
        selection
    }
}

/// 可选技能目录
pub fn catalog() -> &'static [&'static str] {
    &AVAILABLE_SKILLS
}
