mod helpers;

use helpers::{assistant_over, empty_store, fast_config, sqlite_store};
use momento::assistant::templates::{self, no_match_reply};
use momento::assistant::{Assistant, Persona};
use momento::entry::{Category, Entry};
use momento::events::AssistantEvent;

#[tokio::test]
async fn hello_on_empty_store_gets_no_match_reply() {
    let assistant = assistant_over(empty_store().into_shared());
    let before = assistant.transcript().len();

    let reply = assistant.submit("hello").wait().await.unwrap();

    let transcript = assistant.transcript();
    assert_eq!(transcript.len(), before + 2);
    assert!(transcript[before].is_user);
    assert_eq!(transcript[before].content, "hello");
    assert!(!transcript[before + 1].is_user);
    assert_eq!(transcript[before + 1].content, no_match_reply(Persona::Mentor));
    assert_eq!(reply.related_entry_ids, None);
    assert!(!assistant.is_processing());
}

#[tokio::test]
async fn matching_entry_is_quoted_in_reply() {
    let mut store = empty_store();
    let id = store.add(Entry::new("Practice makes perfect"));
    let assistant = Assistant::new(store.into_shared(), &fast_config(Persona::Friend));

    let reply = assistant.submit("I need more practice today").wait().await.unwrap();

    assert_eq!(reply.related_entry_ids, Some(vec![id]));
    assert_eq!(
        reply.content,
        templates::reply(Persona::Friend, Some(&Entry::new("Practice makes perfect")))
    );
}

#[tokio::test]
async fn nonsense_against_samples_matches_nothing() {
    let assistant = assistant_over(sqlite_store().into_shared());
    let reply = assistant.submit("xyzzy").wait().await.unwrap();
    assert!(reply.related_entry_ids.is_none());
    assert_eq!(reply.content, no_match_reply(Persona::Mentor));
}

#[tokio::test]
async fn match_snapshot_is_taken_at_submit_time() {
    let store = empty_store().into_shared();
    let assistant = assistant_over(store.clone());

    let pending = assistant.submit("garden");
    store.lock().unwrap().add(Entry::new("A garden needs patience"));

    let reply = pending.wait().await.unwrap();
    assert!(reply.related_entry_ids.is_none());
}

#[tokio::test]
async fn reply_uses_persona_active_when_delay_ends() {
    let assistant = assistant_over(empty_store().into_shared());

    let pending = assistant.submit("anything");
    assistant.change_persona(Persona::Philosopher);
    let reply = pending.wait().await.unwrap();

    assert_eq!(reply.content, no_match_reply(Persona::Philosopher));
}

#[test]
fn persona_switch_leaves_history_untouched() {
    let assistant = assistant_over(empty_store().into_shared());
    let before = assistant.transcript();

    assistant.change_persona(Persona::Friend);

    let after = assistant.transcript();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap().content, templates::persona_switched(Persona::Friend));
    assert_eq!(assistant.current_persona(), Persona::Friend);
}

#[test]
fn analyze_empty_collection() {
    let assistant = assistant_over(empty_store().into_shared());
    assert_eq!(assistant.analyze(), templates::NO_ENTRIES);
}

#[test]
fn analyze_three_growth_entries() {
    let mut store = empty_store();
    for content in ["a", "b", "c"] {
        store.add(Entry::new(content).with_category(Category::Growth));
    }
    let assistant = assistant_over(store.into_shared());

    let text = assistant.analyze();
    assert!(text.contains("3개의 지혜"));
    assert!(text.contains(&format!("'{}'(3개)", Category::Growth.label())));
}

#[test]
fn analyze_reads_current_collection() {
    let store = empty_store().into_shared();
    let assistant = assistant_over(store.clone());
    assert_eq!(assistant.analyze(), templates::NO_ENTRIES);

    store
        .lock()
        .unwrap()
        .add(Entry::new("joy").with_category(Category::Happiness));
    assert!(assistant.analyze().contains(Category::Happiness.label()));
}

#[tokio::test]
async fn related_entries_skip_deleted_ones() {
    let store = empty_store().into_shared();
    let (keep, gone) = {
        let mut s = store.lock().unwrap();
        (s.add(Entry::new("river stones")), s.add(Entry::new("river bend")))
    };
    let assistant = assistant_over(store.clone());

    let reply = assistant.submit("river").wait().await.unwrap();
    assert_eq!(reply.related_ids(), &[keep, gone]);

    store.lock().unwrap().delete(gone);
    let related: Vec<_> = assistant
        .related_entries(&reply)
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(related, vec![keep]);
}

#[tokio::test]
async fn subscribers_see_the_whole_exchange() {
    let assistant = assistant_over(empty_store().into_shared());
    let mut rx = assistant.subscribe();

    assistant.change_persona(Persona::Counselor);
    assistant.submit("hi").wait().await.unwrap();
    assistant.clear_transcript();

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    assert_eq!(events[0], AssistantEvent::PersonaChanged(Persona::Counselor));
    assert!(events.contains(&AssistantEvent::ProcessingChanged(true)));
    assert!(events.contains(&AssistantEvent::ProcessingChanged(false)));
    assert_eq!(events.last(), Some(&AssistantEvent::TranscriptCleared));
    assert!(assistant.transcript().is_empty());
}
