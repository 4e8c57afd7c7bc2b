//! Demo Data
//!
//! Creates `demo@example.com` / `demo123` with a few sample notes. Runs at
//! startup when `SEED_DEMO_DATA=true`; notes are only added while the demo
//! account has none.

use std::sync::Arc;

use auth::application::{RegisterInput, RegisterUseCase};
use auth::models::Email;
use auth::{AuthConfig, UserRepository};
use kernel::id::UserId;
use notes::NoteRepository;
use notes::application::{CreateNoteUseCase, NoteStatsUseCase};
use notes::domain::{ItemDraft, NoteDraft};

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "demo123";
const DEMO_NAME: &str = "Demo User";

pub async fn seed_demo_data<U, N>(
    users: Arc<U>,
    notes: Arc<N>,
    config: Arc<AuthConfig>,
) -> anyhow::Result<()>
where
    U: UserRepository,
    N: NoteRepository,
{
    let user_id = demo_user(users, config).await?;

    let stats = NoteStatsUseCase::new(notes.clone()).execute(&user_id).await?;
    if stats.total_notes > 0 {
        tracing::debug!(notes = stats.total_notes, "Demo notes already present");
        return Ok(());
    }

    let create = CreateNoteUseCase::new(notes);
    for draft in demo_notes() {
        create.execute(&user_id, draft).await?;
    }

    tracing::info!("Demo notes created");
    Ok(())
}

async fn demo_user<U>(users: Arc<U>, config: Arc<AuthConfig>) -> anyhow::Result<UserId>
where
    U: UserRepository,
{
    if let Some(user) = users.find_by_email(&Email::from_db(DEMO_EMAIL)).await? {
        return Ok(user.user_id);
    }

    let output = RegisterUseCase::new(users, config)
        .execute(RegisterInput {
            name: DEMO_NAME.to_string(),
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        })
        .await?;

    tracing::info!(email = DEMO_EMAIL, "Demo user created");
    Ok(output.user.user_id)
}

fn note(title: &str, note_type: &str, items: Vec<ItemDraft>) -> NoteDraft {
    NoteDraft {
        title: Some(title.to_string()),
        note_type: Some(note_type.to_string()),
        items: Some(items),
    }
}

fn demo_notes() -> Vec<NoteDraft> {
    vec![
        note(
            "My First Bullet Note",
            "bullet",
            vec![
                ItemDraft::new("This is a bullet point"),
                ItemDraft::new("Another important point"),
                ItemDraft::new("Remember to check this later"),
            ],
        ),
        note(
            "Daily Tasks",
            "checklist",
            vec![
                ItemDraft::new("Wake up early").completed(true),
                ItemDraft::new("Exercise for 30 minutes").completed(true),
                ItemDraft::new("Read a book").completed(false),
                ItemDraft::new("Work on project").completed(false),
            ],
        ),
        note(
            "Shopping List",
            "checklist",
            vec![
                ItemDraft::new("Buy groceries").completed(false),
                ItemDraft::new("Get milk").completed(false),
                ItemDraft::new("Pick up dry cleaning").completed(true),
            ],
        ),
    ]
}
