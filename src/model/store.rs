//! In-memory mock repository
//!
//! Seeded with the demo payload. The avatar-save flow is the only writer.

use std::cell::RefCell;
use std::rc::Rc;

use super::types::{Initiative, InitiativeStatus, Profile, PsychoCard, System, User};
use crate::consts::AVATAR_PLACEHOLDER_URL;

/// Store handle shared by the API facade and the controllers
pub type SharedStore = Rc<RefCell<MockStore>>;

/// All data the mini app knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockStore {
    pub user: User,
    pub profile: Profile,
    pub systems: Vec<System>,
    pub initiatives: Vec<Initiative>,
}

impl MockStore {
    /// Demo data for the current user
    pub fn seeded() -> Self {
        Self {
            user: User {
                name: "Алиса P.".into(),
                xp: 870,
                max_xp: 1000,
                guild: "Орден броадкаста".into(),
                profile: "INFP | P65 / A45 / E30 / I55".into(),
            },
            profile: Profile {
                avatar_url: AVATAR_PLACEHOLDER_URL.into(),
                full_name: "Алиса Петрова".into(),
                role: "R&D Lead".into(),
                personality_type: "INTJ".into(),
                personality_description: "Творческий стратег, у которого на всё есть план.".into(),
                cards: seeded_cards(),
            },
            systems: vec![
                system(
                    "giphy",
                    "Система «Гифы»",
                    "📣",
                    8,
                    "Осваивают питательную среду, превращают её в выручку.",
                    1,
                ),
                system(
                    "mycelium",
                    "Система «Мицелий»",
                    "🏛️",
                    5,
                    "Сшивают гифы и гасят конфликты между системами.",
                    1,
                ),
                system(
                    "dna-codes",
                    "Система «Коды ДНК»",
                    "🎬",
                    6,
                    "Отвечают на вопросы «кто мы», задают границы игры.",
                    1,
                ),
                system(
                    "ravens",
                    "Система «Вороны»",
                    "🕵️‍♂️",
                    7,
                    "Сканируют все системы, ищут уязвимости",
                    2,
                ),
            ],
            initiatives: vec![Initiative {
                id: 1,
                title: "Обновление системы ретроспектив".into(),
                creator: "Алиса P.".into(),
                description:
                    "Создание более эффективного формата ретроспектив с интеграцией AI-ассистента"
                        .into(),
                progress: 65,
                xp_reward: 100,
                status: InitiativeStatus::Active,
            }],
        }
    }

    /// Wrap into the shared handle
    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    pub fn system(&self, id: &str) -> Option<&System> {
        self.systems.iter().find(|s| s.id == id)
    }

    /// Display name for a system id (falls back to the id itself)
    pub fn system_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.system(id).map(System::short_name).unwrap_or(id)
    }

    /// Replace the avatar for the rest of the session
    pub fn set_avatar_url(&mut self, url: String) {
        log::info!("Avatar updated ({} bytes)", url.len());
        self.profile.avatar_url = url;
    }
}

fn system(id: &str, name: &str, icon: &str, participants: u32, description: &str, leaders: u32) -> System {
    System {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
        participants,
        description: description.into(),
        leaders,
    }
}

fn card(id: &str, title: &str, insight: &str, description: &str, sources: &str) -> PsychoCard {
    PsychoCard {
        id: id.into(),
        title: title.into(),
        insight: insight.into(),
        description: description.into(),
        sources: sources.into(),
    }
}

fn seeded_cards() -> Vec<PsychoCard> {
    vec![
        card(
            "cognitive_style",
            "Когнитивный стиль",
            "Визионер-аналитик",
            "Быстро строит ментальные модели, опирается на факты, любит «почему?»",
            "HEXACO Openness 4.5, SVS Self-Direction 6.25, Science 5.0",
        ),
        card(
            "motivation",
            "Мотивация",
            "Достижения + смысл",
            "Нужен измеримый результат + общественная польза",
            "SVS, MVPI",
        ),
        card(
            "social_profile",
            "Социальный профиль",
            "Интроверт-дипломат",
            "Низкая потребность в смол-токе, но макс. эмпатия/гибкость",
            "HPI, PANAS",
        ),
        card(
            "leadership",
            "Лидерство",
            "Стратег-инициатор",
            "Высокий драйв, берёт ответственность, влияет на курс",
            "HPI, PAEI",
        ),
        card(
            "resilience",
            "Устойчивость",
            "Внешне спокойно, критику чувствует точечно",
            "Высокая самоэффективность. Adjustment 3.0, CD-RISC 84/100, GSE 36",
            "HDS, CD-RISC, GSE",
        ),
        card(
            "risks",
            "Риски",
            "Завышенные стандарты",
            "• Завышенные стандарты (Moving Toward 3.7)\n• «Тихий саботаж», если не согласен (Moving Away 3.0)\n• Возможен перфекционизм → задержка решений",
            "HDS",
        ),
        card(
            "values",
            "Ценности",
            "Инновации внутри каркаса",
            "Любит чёткие процессы, ясные риски — «инновации внутри каркаса»",
            "Tradition 5.0, Security 5.0 (MVPI)",
        ),
        card(
            "individual_energy",
            "Индивидуальная энергия",
            "Promotion-фокус",
            "Promotion-фокус 23 > Prevention 9 — тянется к возможностям, а не к избеганию угроз",
            "RFQ",
        ),
        card(
            "team_role_paei",
            "PAEI роль в команде",
            "E / P / A (умеренно) / I (слабо)",
            "Генерирует новое, завершает сам; нужен I-партнёр с people-фокусом",
            "PAEI",
        ),
    ]
}
