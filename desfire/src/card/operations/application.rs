// desfire/src/card/operations/application.rs

//! Application selection and creation.

use log::debug;

use crate::card::Desfire;
use crate::card::operations::expect_done;
use crate::protocol::Command;
use crate::types::{Aid, ApplicationSettings};
use crate::Result;

/// Select an application; `Aid::MASTER` returns to the PICC level.
pub fn select_application(card: &mut Desfire, aid: Aid) -> Result<()> {
    debug!("select application {}", aid.to_hex());
    let resp = card.execute(Command::SelectApplication { aid })?;
    expect_done("SelectApplication", resp)
}

/// Create `aid` with explicit key and application settings.
pub fn create_application(
    card: &mut Desfire,
    aid: Aid,
    settings: ApplicationSettings,
) -> Result<()> {
    debug!(
        "create application {} (key settings {:02X}, app settings {:02X})",
        aid.to_hex(),
        settings.key_settings,
        settings.app_settings
    );
    let resp = card.execute(Command::CreateApplication { aid, settings })?;
    expect_done("CreateApplication", resp)
}

/// Named preset of [`create_application`]: AES keys, five of them.
pub fn create_application_default_aes(card: &mut Desfire, aid: Aid) -> Result<()> {
    create_application(card, aid, ApplicationSettings::DEFAULT_AES)
}
