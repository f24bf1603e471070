//! Conversational assistant endpoint. Conversation continuity comes from the
//! store: prior turns are reloaded per request and passed to the LLM
//! explicitly rather than relying on provider-side memory.

pub mod handlers;

use crate::errors::AppError;
use crate::llm::prompts::APS_SYSTEM_MESSAGE;
use crate::llm::{ChatClient, ChatTurn};
use crate::models::chat::{ChatMessage, COLLECTION};
use crate::store::{decode, encode, DocumentStore, Filter, Sort};

/// Most recent turns supplied as context per call.
const HISTORY_LIMIT: i64 = 20;

/// Loads the session's prior turns, oldest first.
pub async fn load_history(
    store: &dyn DocumentStore,
    session_id: &str,
) -> Result<Vec<ChatTurn>, AppError> {
    let docs = store
        .find(
            COLLECTION,
            Filter::new().eq("session_id", session_id),
            None,
            Some(Sort::asc("timestamp")),
            Some(HISTORY_LIMIT),
        )
        .await?;

    let turns = docs
        .into_iter()
        .map(decode::<ChatMessage>)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|m| ChatTurn {
            role: m.role,
            content: m.content,
        })
        .collect();
    Ok(turns)
}

/// One chat round-trip: persist the user message, call the LLM with the
/// session's history, persist the reply. The credential check runs first so a
/// missing key causes no writes at all.
pub async fn chat(
    store: &dyn DocumentStore,
    llm: &dyn ChatClient,
    message: &str,
    session_id: &str,
) -> Result<String, AppError> {
    llm.ensure_configured()?;

    let history = load_history(store, session_id).await?;

    let user_msg = ChatMessage::new(session_id, "user", message);
    store.insert_one(COLLECTION, encode(&user_msg)?).await?;

    let response = llm
        .complete(APS_SYSTEM_MESSAGE, message, session_id, &history)
        .await?;

    let assistant_msg = ChatMessage::new(session_id, "assistant", &response);
    store.insert_one(COLLECTION, encode(&assistant_msg)?).await?;

    Ok(response)
}
