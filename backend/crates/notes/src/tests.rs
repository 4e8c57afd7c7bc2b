//! Note scenarios against the in-memory stores

use std::sync::Arc;
use std::time::Duration;

use auth::application::{RegisterInput, RegisterUseCase};
use auth::{AuthConfig, InMemoryUserRepository};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use kernel::id::{NoteId, UserId};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::application::{
    CreateNoteUseCase, DeleteNoteUseCase, GetNoteUseCase, ListNotesUseCase, NoteStatsUseCase,
    ToggleArchiveUseCase, UpdateNoteUseCase,
};
use crate::domain::entities::{Note, NoteStats};
use crate::domain::repository::{NoteFilter, NoteRepository};
use crate::domain::validation::{NoteDraft, NotePatch, validate_patch};
use crate::domain::value_objects::{ItemDraft, NoteType};
use crate::error::NoteError;
use crate::{InMemoryNoteRepository, notes_router_generic};

fn draft(title: &str, note_type: &str, items: Vec<ItemDraft>) -> NoteDraft {
    NoteDraft {
        title: Some(title.to_string()),
        note_type: Some(note_type.to_string()),
        items: Some(items),
    }
}

async fn create(repo: &Arc<InMemoryNoteRepository>, owner: &UserId, d: NoteDraft) -> Note {
    CreateNoteUseCase::new(repo.clone())
        .execute(owner, d)
        .await
        .unwrap()
}

fn items_of(note: &Note) -> Vec<(&str, bool)> {
    note.items.iter().map(|i| (i.text(), i.completed())).collect()
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_groceries_scenario() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();

    let note = create(
        &repo,
        &owner,
        draft(
            "Groceries",
            "checklist",
            vec![ItemDraft::new("Milk"), ItemDraft::new("Eggs").completed(true)],
        ),
    )
    .await;
    assert_eq!(items_of(&note), vec![("Milk", false), ("Eggs", true)]);
    assert!(!note.is_archived);
    assert_eq!(note.owner_id, owner);

    let toggle = ToggleArchiveUseCase::new(repo.clone());
    assert!(toggle.execute(&owner, &note.note_id).await.unwrap().is_archived);
    assert!(!toggle.execute(&owner, &note.note_id).await.unwrap().is_archived);

    DeleteNoteUseCase::new(repo.clone())
        .execute(&owner, &note.note_id)
        .await
        .unwrap();

    let result = GetNoteUseCase::new(repo.clone())
        .execute(&owner, &note.note_id)
        .await;
    assert!(matches!(result, Err(NoteError::NotFound)));
}

#[tokio::test]
async fn test_invalid_create_persists_nothing() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let use_case = CreateNoteUseCase::new(repo.clone());
    let owner = UserId::new();

    let cases = vec![
        draft("", "bullet", vec![ItemDraft::new("a")]),
        draft("t", "note", vec![ItemDraft::new("a")]),
        draft("t", "bullet", vec![]),
        draft("t", "bullet", vec![ItemDraft::new("x".repeat(1001))]),
        NoteDraft::default(),
    ];

    for d in cases {
        let result = use_case.execute(&owner, d).await;
        assert!(matches!(result, Err(NoteError::Validation(ref e)) if !e.is_empty()));
    }

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_bullet_items_never_completed() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();

    let note = create(
        &repo,
        &owner,
        draft(
            "Ideas",
            "bullet",
            vec![ItemDraft::new("a").completed(true), ItemDraft::new("b")],
        ),
    )
    .await;
    assert!(note.items.iter().all(|i| !i.completed()));

    let updated = UpdateNoteUseCase::new(repo.clone())
        .execute(
            &owner,
            &note.note_id,
            NotePatch {
                items: Some(vec![ItemDraft::new("c").completed(true)]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(items_of(&updated), vec![("c", false)]);
}

// ============================================================================
// Ownership
// ============================================================================

#[tokio::test]
async fn test_other_owner_sees_not_found() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let stranger = UserId::new();

    let note = create(&repo, &owner, draft("Mine", "bullet", vec![ItemDraft::new("a")])).await;
    let id = note.note_id;

    let get = GetNoteUseCase::new(repo.clone()).execute(&stranger, &id).await;
    assert!(matches!(get, Err(NoteError::NotFound)));

    let update = UpdateNoteUseCase::new(repo.clone())
        .execute(
            &stranger,
            &id,
            NotePatch {
                title: Some("Theirs".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(update, Err(NoteError::NotFound)));

    let toggle = ToggleArchiveUseCase::new(repo.clone()).execute(&stranger, &id).await;
    assert!(matches!(toggle, Err(NoteError::NotFound)));

    let delete = DeleteNoteUseCase::new(repo.clone()).execute(&stranger, &id).await;
    assert!(matches!(delete, Err(NoteError::NotFound)));

    // Untouched for the owner
    let stored = GetNoteUseCase::new(repo.clone()).execute(&owner, &id).await.unwrap();
    assert_eq!(stored.title.as_str(), "Mine");
    assert!(!stored.is_archived);

    let listed = ListNotesUseCase::new(repo.clone())
        .execute(&stranger, NoteFilter::default())
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_missing_note_not_found() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let missing = NoteId::new();

    let delete = DeleteNoteUseCase::new(repo.clone()).execute(&owner, &missing).await;
    assert!(matches!(delete, Err(NoteError::NotFound)));

    let toggle = ToggleArchiveUseCase::new(repo.clone()).execute(&owner, &missing).await;
    assert!(matches!(toggle, Err(NoteError::NotFound)));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_type_change_rejected() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let note = create(&repo, &owner, draft("t", "bullet", vec![ItemDraft::new("a")])).await;

    let result = UpdateNoteUseCase::new(repo.clone())
        .execute(
            &owner,
            &note.note_id,
            NotePatch {
                note_type: Some("checklist".to_string()),
                title: Some("changed".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(NoteError::Validation(ref e)) if e[0].message == "type is immutable"));

    let stored = GetNoteUseCase::new(repo.clone())
        .execute(&owner, &note.note_id)
        .await
        .unwrap();
    assert_eq!(stored.note_type(), NoteType::Bullet);
    assert_eq!(stored.title.as_str(), "t");
}

#[tokio::test]
async fn test_update_replaces_items_and_refreshes_timestamp() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let note = create(
        &repo,
        &owner,
        draft("Tasks", "checklist", vec![ItemDraft::new("a"), ItemDraft::new("b")]),
    )
    .await;

    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = UpdateNoteUseCase::new(repo.clone())
        .execute(
            &owner,
            &note.note_id,
            NotePatch {
                items: Some(vec![ItemDraft::new(" c ").completed(true)]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(items_of(&updated), vec![("c", true)]);
    assert_eq!(updated.title.as_str(), "Tasks");
    assert!(updated.updated_at > note.updated_at);
    assert_eq!(updated.created_at, note.created_at);
}

#[tokio::test]
async fn test_empty_update_is_noop() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let note = create(&repo, &owner, draft("t", "bullet", vec![ItemDraft::new("a")])).await;

    let same = UpdateNoteUseCase::new(repo.clone())
        .execute(&owner, &note.note_id, NotePatch::default())
        .await
        .unwrap();
    assert_eq!(same.updated_at, note.updated_at);
}

#[tokio::test]
async fn test_sequential_updates_last_write_wins() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let note = create(&repo, &owner, draft("v0", "bullet", vec![ItemDraft::new("a")])).await;
    let use_case = UpdateNoteUseCase::new(repo.clone());

    let first = use_case
        .execute(
            &owner,
            &note.note_id,
            NotePatch {
                title: Some("v1".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = use_case
        .execute(
            &owner,
            &note.note_id,
            NotePatch {
                title: Some("v2".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stored = repo.find_by_id(&owner, &note.note_id).await.unwrap().unwrap();
    assert_eq!(stored.title.as_str(), "v2");
    assert_eq!(stored.updated_at, second.updated_at);
    assert!(stored.updated_at > first.updated_at);
}

#[tokio::test]
async fn test_concurrent_updates_never_mix() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let note = create(&repo, &owner, draft("v0", "checklist", vec![ItemDraft::new("a")])).await;

    let patch = |title: &str, item: &str| NotePatch {
        title: Some(title.to_string()),
        items: Some(vec![ItemDraft::new(item)]),
        note_type: None,
    };

    let left = UpdateNoteUseCase::new(repo.clone());
    let right = UpdateNoteUseCase::new(repo.clone());
    let (a, b) = tokio::join!(
        left.execute(&owner, &note.note_id, patch("A", "a-item")),
        right.execute(&owner, &note.note_id, patch("B", "b-item")),
    );
    a.unwrap();
    b.unwrap();

    let stored = repo.find_by_id(&owner, &note.note_id).await.unwrap().unwrap();
    let state = (stored.title.as_str(), items_of(&stored));
    assert!(
        state == ("A", vec![("a-item", false)]) || state == ("B", vec![("b-item", false)]),
        "mixed document: {:?}",
        state
    );
}

#[tokio::test]
async fn test_update_keeps_concurrent_archive() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let note = create(&repo, &owner, draft("v0", "bullet", vec![ItemDraft::new("a")])).await;

    let mut stale = repo.find_by_id(&owner, &note.note_id).await.unwrap().unwrap();
    assert!(!stale.is_archived);

    repo.toggle_archive(&owner, &note.note_id, chrono::Utc::now())
        .await
        .unwrap()
        .unwrap();

    let patch = validate_patch(
        NotePatch {
            title: Some("v1".to_string()),
            ..Default::default()
        },
        stale.note_type(),
    )
    .unwrap();
    assert!(stale.apply(patch));

    let written = repo.update(&stale).await.unwrap().unwrap();
    assert!(written.is_archived);
    assert_eq!(written.title.as_str(), "v1");

    let stored = repo.find_by_id(&owner, &note.note_id).await.unwrap().unwrap();
    assert!(stored.is_archived);
    assert_eq!(stored.title.as_str(), "v1");
}

#[tokio::test]
async fn test_update_of_archived_note_stays_archived() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let note = create(&repo, &owner, draft("v0", "bullet", vec![ItemDraft::new("a")])).await;

    ToggleArchiveUseCase::new(repo.clone())
        .execute(&owner, &note.note_id)
        .await
        .unwrap();

    let updated = UpdateNoteUseCase::new(repo.clone())
        .execute(
            &owner,
            &note.note_id,
            NotePatch {
                title: Some("v1".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.is_archived);
}

// ============================================================================
// List & Stats
// ============================================================================

#[tokio::test]
async fn test_list_filters_and_sorts() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();

    let older = create(&repo, &owner, draft("older", "bullet", vec![ItemDraft::new("a")])).await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let newer = create(&repo, &owner, draft("newer", "checklist", vec![ItemDraft::new("a")])).await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let archived = create(&repo, &owner, draft("gone", "bullet", vec![ItemDraft::new("a")])).await;
    ToggleArchiveUseCase::new(repo.clone())
        .execute(&owner, &archived.note_id)
        .await
        .unwrap();

    let list = ListNotesUseCase::new(repo.clone());

    let active = list.execute(&owner, NoteFilter::default()).await.unwrap();
    let titles: Vec<&str> = active.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["newer", "older"]);

    let bullets = list
        .execute(&owner, NoteFilter::from_query(Some("bullet"), None))
        .await
        .unwrap();
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].note_id, older.note_id);

    let only_archived = list
        .execute(&owner, NoteFilter::from_query(None, Some("true")))
        .await
        .unwrap();
    assert_eq!(only_archived.len(), 1);
    assert_eq!(only_archived[0].note_id, archived.note_id);

    // Unknown type is ignored
    let all_active = list
        .execute(&owner, NoteFilter::from_query(Some("poem"), Some("yes")))
        .await
        .unwrap();
    assert_eq!(all_active.len(), 2);

    // Touching the older note moves it to the front
    tokio::time::sleep(Duration::from_millis(5)).await;
    UpdateNoteUseCase::new(repo.clone())
        .execute(
            &owner,
            &older.note_id,
            NotePatch {
                title: Some("older, edited".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let active = list.execute(&owner, NoteFilter::default()).await.unwrap();
    assert_eq!(active[0].note_id, older.note_id);
    assert_eq!(active[1].note_id, newer.note_id);
}

#[tokio::test]
async fn test_stats() {
    let repo = Arc::new(InMemoryNoteRepository::new());
    let owner = UserId::new();
    let stats = NoteStatsUseCase::new(repo.clone());

    assert_eq!(stats.execute(&owner).await.unwrap(), NoteStats::default());

    create(&repo, &owner, draft("a", "bullet", vec![ItemDraft::new("x")])).await;
    let c = create(&repo, &owner, draft("b", "checklist", vec![ItemDraft::new("x")])).await;
    create(&repo, &owner, draft("c", "checklist", vec![ItemDraft::new("x")])).await;
    create(&repo, &UserId::new(), draft("other", "bullet", vec![ItemDraft::new("x")])).await;
    ToggleArchiveUseCase::new(repo.clone())
        .execute(&owner, &c.note_id)
        .await
        .unwrap();

    let s = stats.execute(&owner).await.unwrap();
    assert_eq!(s.total_notes, 3);
    assert_eq!(s.bullet_notes, 1);
    assert_eq!(s.checklist_notes, 2);
    assert_eq!(s.archived_notes, 1);
    assert_eq!(s.bullet_notes + s.checklist_notes, s.total_notes);
}

// ============================================================================
// HTTP
// ============================================================================

struct TestApp {
    router: Router,
    users: Arc<InMemoryUserRepository>,
    config: Arc<AuthConfig>,
}

impl TestApp {
    fn new() -> Self {
        let users = InMemoryUserRepository::new();
        let config = Arc::new(AuthConfig::with_secret([5u8; 32]));
        let router = notes_router_generic(InMemoryNoteRepository::new(), users.clone(), config.clone());

        Self {
            router,
            users: Arc::new(users),
            config,
        }
    }

    async fn token_for(&self, email: &str) -> String {
        RegisterUseCase::new(self.users.clone(), self.config.clone())
            .execute(RegisterInput {
                name: "Tester".to_string(),
                email: email.to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap()
            .token
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

#[tokio::test]
async fn test_http_groceries_flow() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;
    let token = Some(token.as_str());

    let (status, body) = app
        .send(
            "POST",
            "/",
            token,
            Some(json!({
                "title": "Groceries",
                "type": "checklist",
                "items": [{"text": "Milk"}, {"text": "Eggs", "completed": true}]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Note created successfully");
    assert_eq!(body["data"]["items"][0]["completed"], false);
    assert_eq!(body["data"]["items"][1]["completed"], true);
    assert_eq!(body["data"]["isArchived"], false);
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    let (status, body) = app.send("PATCH", &format!("/{id}/archive"), token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Note archived successfully");
    assert_eq!(body["data"]["isArchived"], true);

    let (_, body) = app.send("PATCH", &format!("/{id}/archive"), token, None).await;
    assert_eq!(body["message"], "Note unarchived successfully");
    assert_eq!(body["data"]["isArchived"], false);

    let (status, body) = app.send("GET", "/", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["_id"], id.as_str());

    let (status, body) = app.send("GET", "/stats", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalNotes"], 1);
    assert_eq!(body["data"]["checklistNotes"], 1);

    let (status, body) = app.send("DELETE", &format!("/{id}"), token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Note deleted successfully");

    let (status, body) = app.send("GET", &format!("/{id}"), token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Note not found");
}

#[tokio::test]
async fn test_http_requires_token() {
    let app = TestApp::new();

    for (method, uri) in [
        ("GET", "/"),
        ("GET", "/stats"),
        ("GET", "/00000000-0000-4000-8000-000000000000"),
        ("DELETE", "/00000000-0000-4000-8000-000000000000"),
        ("PATCH", "/00000000-0000-4000-8000-000000000000/archive"),
    ] {
        let (status, body) = app.send(method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["message"], "Access token required");
    }

    let (status, body) = app.send("GET", "/", Some("not.valid"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_http_malformed_id() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;

    let (status, body) = app.send("GET", "/64f1c2a9e4b0", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid note ID");
}

#[tokio::test]
async fn test_http_validation_errors() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;

    let (status, body) = app
        .send(
            "POST",
            "/",
            Some(&token),
            Some(json!({"title": "", "type": "poem", "items": [{"text": " "}]})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "type", "items[0].text"]);

    let (_, body) = app.send("GET", "/stats", Some(&token), None).await;
    assert_eq!(body["data"]["totalNotes"], 0);
}

#[tokio::test]
async fn test_http_notes_are_private() {
    let app = TestApp::new();
    let alice = app.token_for("alice@x.com").await;
    let bob = app.token_for("bob@x.com").await;

    let (_, body) = app
        .send(
            "POST",
            "/",
            Some(&alice),
            Some(json!({"title": "Secret", "type": "bullet", "items": [{"text": "x"}]})),
        )
        .await;
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    let (status, _) = app.send("GET", &format!("/{id}"), Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send("PUT", &format!("/{id}"), Some(&bob), Some(json!({"title": "Mine now"})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.send("GET", "/", Some(&bob), None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_http_update() {
    let app = TestApp::new();
    let token = app.token_for("a@x.com").await;

    let (_, body) = app
        .send(
            "POST",
            "/",
            Some(&token),
            Some(json!({"title": "Ideas", "type": "bullet", "items": [{"text": "x"}]})),
        )
        .await;
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(
            "PUT",
            &format!("/{id}"),
            Some(&token),
            Some(json!({"type": "checklist"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["message"], "type is immutable");

    let (status, body) = app
        .send(
            "PUT",
            &format!("/{id}"),
            Some(&token),
            Some(json!({"title": " Better ideas ", "items": [{"text": "y", "completed": true}]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Note updated successfully");
    assert_eq!(body["data"]["title"], "Better ideas");
    assert_eq!(body["data"]["type"], "bullet");
    assert_eq!(body["data"]["items"][0]["completed"], false);
}
