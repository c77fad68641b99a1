//! Record types
//!
//! Field names follow the JSON the future backend will serve, so a networked
//! API can deserialize straight into these.

use serde::{Deserialize, Serialize};

use crate::consts::AVATAR_PLACEHOLDER_URL;

/// Logged-in user summary shown in the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub xp: u32,
    pub max_xp: u32,
    pub guild: String,
    /// Free-text personality tag, e.g. "INFP | P65 / A45 / E30 / I55"
    pub profile: String,
}

impl User {
    /// Level as the percentage of xp towards max xp, rounded down
    pub fn level(&self) -> u32 {
        if self.max_xp == 0 {
            return 0;
        }
        (u64::from(self.xp) * 100 / u64::from(self.max_xp)) as u32
    }
}

/// One facet of the psychoprofile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychoCard {
    pub id: String,
    pub title: String,
    pub insight: String,
    /// May contain line breaks
    pub description: String,
    pub sources: String,
}

impl PsychoCard {
    /// Description split at line breaks, for rendering with `<br>` between
    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        self.description.split('\n')
    }

    pub fn sources_label(&self) -> String {
        format!("Источники: {}", self.sources)
    }
}

/// Full profile shown in the profile modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub avatar_url: String,
    pub full_name: String,
    pub role: String,
    #[serde(rename = "personality_16")]
    pub personality_type: String,
    #[serde(rename = "personality_desc")]
    pub personality_description: String,
    #[serde(rename = "psychoprofile")]
    pub cards: Vec<PsychoCard>,
}

impl Profile {
    /// Whether the user replaced the placeholder avatar
    pub fn has_custom_avatar(&self) -> bool {
        self.avatar_url != AVATAR_PLACEHOLDER_URL
    }

    /// Badge text, e.g. "INTJ — Архитектор"
    pub fn personality_badge(&self) -> String {
        match personality_label(&self.personality_type) {
            Some(label) => format!("{} — {}", self.personality_type, label),
            None => self.personality_type.clone(),
        }
    }
}

/// Display name of a four-letter personality type
pub fn personality_label(code: &str) -> Option<&'static str> {
    let label = match code.to_ascii_uppercase().as_str() {
        "INTJ" => "Архитектор",
        "INTP" => "Учёный",
        "ENTJ" => "Командир",
        "ENTP" => "Полемист",
        "INFJ" => "Активист",
        "INFP" => "Посредник",
        "ENFJ" => "Тренер",
        "ENFP" => "Борец",
        "ISTJ" => "Логист",
        "ISFJ" => "Защитник",
        "ESTJ" => "Менеджер",
        "ESFJ" => "Консул",
        "ISTP" => "Виртуоз",
        "ISFP" => "Артист",
        "ESTP" => "Делец",
        "ESFP" => "Развлекатель",
        _ => return None,
    };
    Some(label)
}

/// A sub-group users can join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub participants: u32,
    pub description: String,
    pub leaders: u32,
}

impl System {
    /// Name without the "Система «…»" wrapper, e.g. "Гифы"
    pub fn short_name(&self) -> &str {
        self.name
            .split_once('«')
            .and_then(|(_, rest)| rest.split_once('»'))
            .map_or(self.name.as_str(), |(inner, _)| inner)
    }

    pub fn participants_label(&self) -> String {
        format!(
            "{} {}",
            self.participants,
            russian_plural(self.participants, "участник", "участника", "участников")
        )
    }

    pub fn leaders_label(&self) -> String {
        format!(
            "{} {}",
            self.leaders,
            russian_plural(self.leaders, "лидер", "лидера", "лидеров")
        )
    }
}

/// Initiative lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InitiativeStatus {
    Draft,
    #[default]
    Active,
    Completed,
}

impl InitiativeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InitiativeStatus::Draft => "draft",
            InitiativeStatus::Active => "active",
            InitiativeStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InitiativeStatus::Draft => "Черновик",
            InitiativeStatus::Active => "Активна",
            InitiativeStatus::Completed => "Завершена",
        }
    }
}

/// A proposal with progress and an xp reward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub id: u32,
    pub title: String,
    pub creator: String,
    pub description: String,
    /// Percent complete (0-100)
    pub progress: u8,
    pub xp_reward: u32,
    pub status: InitiativeStatus,
}

impl Initiative {
    /// Progress bar width, clamped to 100%
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress.min(100))
    }
}

/// Pick the Russian plural form for `n` (one / few / many)
fn russian_plural<'a>(n: u32, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let (n10, n100) = (n % 10, n % 100);
    if n10 == 1 && n100 != 11 {
        one
    } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
        few
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn user(xp: u32, max_xp: u32) -> User {
        User {
            name: "Test".into(),
            xp,
            max_xp,
            guild: String::new(),
            profile: String::new(),
        }
    }

    #[test]
    fn test_level_is_floored_percentage() {
        assert_eq!(user(870, 1000).level(), 87);
        assert_eq!(user(999, 1000).level(), 99);
        assert_eq!(user(0, 1000).level(), 0);
        assert_eq!(user(5, 0).level(), 0);
    }

    proptest! {
        #[test]
        fn level_is_exact_floor(xp in 0u32..100_000, max_xp in 1u32..100_000) {
            let level = u64::from(user(xp, max_xp).level());
            let scaled = u64::from(xp) * 100;
            prop_assert!(level * u64::from(max_xp) <= scaled);
            prop_assert!(scaled < (level + 1) * u64::from(max_xp));
        }
    }

    #[test]
    fn test_user_json_shape() {
        let json = serde_json::to_value(user(870, 1000)).unwrap();
        assert_eq!(json["maxXp"], 1000);
        assert!(json.get("level").is_none());
    }

    #[test]
    fn test_system_short_name() {
        let mut system = System {
            id: "giphy".into(),
            name: "Система «Гифы»".into(),
            icon: String::new(),
            participants: 8,
            description: String::new(),
            leaders: 1,
        };
        assert_eq!(system.short_name(), "Гифы");
        system.name = "Гифы".into();
        assert_eq!(system.short_name(), "Гифы");
    }

    #[test]
    fn test_plural_forms() {
        assert_eq!(russian_plural(1, "a", "b", "c"), "a");
        assert_eq!(russian_plural(21, "a", "b", "c"), "a");
        assert_eq!(russian_plural(3, "a", "b", "c"), "b");
        assert_eq!(russian_plural(5, "a", "b", "c"), "c");
        assert_eq!(russian_plural(11, "a", "b", "c"), "c");
        assert_eq!(russian_plural(13, "a", "b", "c"), "c");
    }

    #[test]
    fn test_personality_badge() {
        let mut profile = Profile {
            avatar_url: AVATAR_PLACEHOLDER_URL.into(),
            full_name: String::new(),
            role: String::new(),
            personality_type: "INTJ".into(),
            personality_description: String::new(),
            cards: Vec::new(),
        };
        assert_eq!(profile.personality_badge(), "INTJ — Архитектор");
        assert!(!profile.has_custom_avatar());

        profile.personality_type = "XXXX".into();
        assert_eq!(profile.personality_badge(), "XXXX");
    }

    #[test]
    fn test_description_lines() {
        let card = PsychoCard {
            id: "risks".into(),
            title: String::new(),
            insight: String::new(),
            description: "one\ntwo".into(),
            sources: "HDS".into(),
        };
        assert_eq!(card.description_lines().collect::<Vec<_>>(), ["one", "two"]);
        assert_eq!(card.sources_label(), "Источники: HDS");
    }

    #[test]
    fn test_initiative_status_json() {
        let status: InitiativeStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, InitiativeStatus::Active);
        assert_eq!(status.as_str(), "active");
    }
}
