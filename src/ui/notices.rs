//! Blocking notices for features that are not built yet
//!
//! Navigation, joining a system and creating an initiative are placeholders
//! until the real backend exists. Each returns the text to show.

/// A page that is not built yet
pub fn route_notice(route: &str) -> String {
    format!("Страница \"{}\" в разработке", route)
}

/// Join request acknowledgement
pub fn join_notice(system_name: &str) -> String {
    format!(
        "Заявка на вступление в систему \"{}\" отправлена!\n\n\
         В реальной версии здесь будет:\n\
         - Проверка требований\n\
         - Отправка уведомления лидеру\n\
         - Добавление в очередь",
        system_name
    )
}

/// Initiative creation placeholder
pub fn create_initiative_notice() -> &'static str {
    "Создание инициативы в разработке!\n\n\
     В реальной версии здесь будет:\n\
     - Форма создания инициативы\n\
     - Выбор участников\n\
     - Настройка целей и метрик"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_notice() {
        assert_eq!(route_notice("profile"), "Страница \"profile\" в разработке");
    }

    #[test]
    fn test_join_notice_names_system() {
        let text = join_notice("Вороны");
        assert!(text.starts_with("Заявка на вступление в систему \"Вороны\" отправлена!"));
        assert!(text.contains("\n- Добавление в очередь"));
    }

    #[test]
    fn test_initiative_notice_lines() {
        assert_eq!(create_initiative_notice().lines().count(), 6);
    }
}
