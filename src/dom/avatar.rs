//! Avatar upload form elements

use web_sys::{File, HtmlButtonElement, HtmlElement, HtmlImageElement, HtmlInputElement};

use super::{by_id, set_style};
use crate::error::UiError;
use crate::ui::avatar::{AvatarError, encode_data_url};

pub const FILE_INPUT_ID: &str = "avatarFileInput";
const PREVIEW_ID: &str = "avatarPreview";
const PLACEHOLDER_ID: &str = "uploadPlaceholder";
const SAVE_BUTTON_ID: &str = "saveAvatarBtn";

/// Empty input, placeholder shown, save disabled
pub fn reset_form() -> Result<(), UiError> {
    by_id::<HtmlInputElement>(FILE_INPUT_ID)?.set_value("");
    set_style(&by_id::<HtmlElement>(PREVIEW_ID)?, "display", "none")?;
    set_style(&by_id::<HtmlElement>(PLACEHOLDER_ID)?, "display", "block")?;
    by_id::<HtmlButtonElement>(SAVE_BUTTON_ID)?.set_disabled(true);
    Ok(())
}

/// Preview shown, save enabled
pub fn show_preview(data_url: &str) -> Result<(), UiError> {
    let preview = by_id::<HtmlImageElement>(PREVIEW_ID)?;
    preview.set_src(data_url);
    set_style(&preview, "display", "block")?;
    set_style(&by_id::<HtmlElement>(PLACEHOLDER_ID)?, "display", "none")?;
    by_id::<HtmlButtonElement>(SAVE_BUTTON_ID)?.set_disabled(false);
    Ok(())
}

/// Save button label and state while an upload runs
pub fn set_saving(saving: bool) -> Result<(), UiError> {
    let button = by_id::<HtmlButtonElement>(SAVE_BUTTON_ID)?;
    button.set_text_content(Some(if saving { "Сохранение..." } else { "Сохранить" }));
    button.set_disabled(saving);
    Ok(())
}

/// First file of the picker, if any
pub fn selected_file() -> Result<Option<File>, UiError> {
    Ok(by_id::<HtmlInputElement>(FILE_INPUT_ID)?
        .files()
        .and_then(|files| files.get(0)))
}

/// Read a file into a base64 data URI
pub async fn read_data_url(file: File) -> Result<String, AvatarError> {
    let mime = file.type_();
    let file = gloo_file::File::from(file);
    let bytes = gloo_file::futures::read_as_bytes(&file)
        .await
        .map_err(|e| AvatarError::Unreadable(format!("{:?}", e)))?;
    Ok(encode_data_url(&mime, &bytes))
}
