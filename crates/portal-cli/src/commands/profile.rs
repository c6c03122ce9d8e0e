use anyhow::Context;
use serde::Serialize;

use portal_core::entities::UserProfile;
use portal_db::updates::profile::ProfileUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::commands::shared::parse::clearable;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProfileResponse {
    #[serde(flatten)]
    profile: UserProfile,
    email: String,
}

impl ProfileResponse {
    fn new(profile: UserProfile, ctx: &AppContext) -> Self {
        let email = profile.email(&ctx.config.general.mail_domain);
        Self { profile, email }
    }
}

/// Handle `portal profile`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show { username } => {
            let profile = ctx
                .service
                .get_user(username)
                .await
                .with_context(|| format!("no profile for '{username}'"))?;
            output(&ProfileResponse::new(profile, ctx), flags.format)
        }
        ProfileCommands::Update {
            username,
            name,
            avatar,
            department,
            designation,
            phone,
            bio,
        } => {
            let mut builder = ProfileUpdateBuilder::new();
            if let Some(value) = clearable(name.as_ref()) {
                builder = builder.full_name(value);
            }
            if let Some(value) = clearable(avatar.as_ref()) {
                builder = builder.avatar_url(value);
            }
            if let Some(value) = clearable(department.as_ref()) {
                builder = builder.department(value);
            }
            if let Some(value) = clearable(designation.as_ref()) {
                builder = builder.designation(value);
            }
            if let Some(value) = clearable(phone.as_ref()) {
                builder = builder.phone(value);
            }
            if let Some(value) = clearable(bio.as_ref()) {
                builder = builder.bio(value);
            }

            let profile = ctx
                .service
                .update_profile(username, &builder.build())
                .await
                .with_context(|| format!("failed to update profile '{username}'"))?;
            output(&ProfileResponse::new(profile, ctx), flags.format)
        }
    }
}
