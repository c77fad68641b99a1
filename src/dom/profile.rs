//! Profile modal content and avatar badges

use web_sys::{Element, HtmlElement, HtmlImageElement};

use super::{by_id, document, query, set_style, set_text};
use crate::error::UiError;
use crate::model::{Profile, PsychoCard};
use crate::ui::controller::AvatarTarget;

const PROFILE_AVATAR_ID: &str = "profileAvatar";
const HEADER_BADGE_SELECTOR: &str = ".avatar-placeholder";
const SIDEBAR_BADGE_SELECTOR: &str = ".profile-avatar";

/// Fill the profile modal from the store
pub fn render_profile(profile: &Profile) -> Result<(), UiError> {
    by_id::<HtmlImageElement>(PROFILE_AVATAR_ID)?.set_src(&profile.avatar_url);
    set_text("profileFullName", &profile.full_name)?;
    set_text("profileRole", &profile.role)?;
    set_text("personalityType", &profile.personality_badge())?;
    set_text("personalityDesc", &profile.personality_description)?;

    if profile.has_custom_avatar() {
        if let Some(sidebar) = query::<HtmlElement>(SIDEBAR_BADGE_SELECTOR)? {
            set_background_image(&sidebar, &profile.avatar_url)?;
        }
    }

    render_cards(&profile.cards)
}

fn render_cards(cards: &[PsychoCard]) -> Result<(), UiError> {
    let document = document()?;
    let grid = by_id::<Element>("psychoprofileGrid")?;
    grid.set_inner_html("");

    for card in cards {
        let element = document.create_element("div")?;
        element.set_class_name("psycho-card");
        element.set_attribute("data-card-id", &card.id)?;

        let title = document.create_element("div")?;
        title.set_class_name("psycho-card-title");
        title.set_text_content(Some(&card.title));

        let insight = document.create_element("div")?;
        insight.set_class_name("psycho-card-insight");
        insight.set_text_content(Some(&card.insight));

        let description = document.create_element("div")?;
        description.set_class_name("psycho-card-description");
        for (i, line) in card.description_lines().enumerate() {
            if i > 0 {
                description.append_with_node_1(&document.create_element("br")?)?;
            }
            description.append_with_str_1(line)?;
        }

        let sources = document.create_element("div")?;
        sources.set_class_name("psycho-card-sources");
        sources.set_text_content(Some(&card.sources_label()));

        element.append_with_node_4(&title, &insight, &description, &sources)?;
        grid.append_child(&element)?;
    }
    Ok(())
}

fn set_background_image(element: &HtmlElement, url: &str) -> Result<(), UiError> {
    set_style(element, "background-image", &format!("url(\"{}\")", url))?;
    set_style(element, "background-size", "cover")?;
    set_style(element, "background-position", "center")
}

/// Show a new avatar in one place. Badges absent from the page are skipped.
pub fn set_avatar(target: AvatarTarget, url: &str) -> Result<(), UiError> {
    let selector = match target {
        AvatarTarget::ProfileDetail => {
            by_id::<HtmlImageElement>(PROFILE_AVATAR_ID)?.set_src(url);
            return Ok(());
        }
        AvatarTarget::HeaderBadge => HEADER_BADGE_SELECTOR,
        AvatarTarget::SidebarBadge => SIDEBAR_BADGE_SELECTOR,
    };
    match query::<HtmlElement>(selector)? {
        Some(badge) => set_background_image(&badge, url),
        None => {
            log::debug!("No {} on this page", selector);
            Ok(())
        }
    }
}
