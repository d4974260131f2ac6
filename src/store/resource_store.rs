use std::collections::HashSet;

use chrono::Utc;

use super::ids::{IdGenerator, IdStrategy};
use super::record::{DisplayOrder, Record, ValidationLimits};
use crate::error::StoreError;

/// Settings shared by every store the dashboard builds.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Provenance stamped on records created through this store.
    pub author: String,
    pub id_strategy: IdStrategy,
    pub limits: ValidationLimits,
}

impl StoreOptions {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            id_strategy: IdStrategy::default(),
            limits: ValidationLimits::default(),
        }
    }
}

/// Ordered in-memory collection of one record type.
///
/// Every mutation goes through `create`, `update` or `remove`; a failed call
/// leaves the collection exactly as it was.
#[derive(Debug, Clone)]
pub struct ListResourceStore<R: Record> {
    records: Vec<R>,
    ids: IdGenerator,
    /// Every id this store has ever held, including removed ones.
    issued: HashSet<String>,
    author: String,
    limits: ValidationLimits,
}

impl<R: Record> ListResourceStore<R> {
    pub fn new(options: StoreOptions) -> Self {
        Self {
            records: Vec::new(),
            ids: IdGenerator::new(options.id_strategy),
            issued: HashSet::new(),
            author: options.author,
            limits: options.limits,
        }
    }

    /// Builds a store over injected initial data, kept in the given order.
    ///
    /// Every record must already satisfy the rules `create` enforces.
    pub fn with_records(records: Vec<R>, options: StoreOptions) -> Result<Self, StoreError> {
        let mut store = Self::new(options);
        for record in &records {
            if let Err(errors) = record.validate_record(&store.limits) {
                return Err(StoreError::InvalidSeed {
                    kind: R::KIND,
                    id: record.id().to_string(),
                    errors,
                });
            }
            if !store.issued.insert(record.id().to_string()) {
                return Err(StoreError::DuplicateId {
                    kind: R::KIND,
                    id: record.id().to_string(),
                });
            }
        }
        store.ids.skip_past(records.iter().map(|record| record.id()));
        store.records = records;
        log::debug!("{} store seeded with {} records", R::KIND, store.records.len());
        Ok(store)
    }

    /// Validates `draft`, stamps a fresh id and the current time, and inserts
    /// the record where the display order puts new records.
    pub fn create(&mut self, draft: R::Draft) -> Result<R, StoreError> {
        let draft = R::validate_draft(draft, &self.limits)?;
        let id = self.fresh_id();
        let record = R::from_draft(id, Utc::now(), &self.author, draft);

        match R::ORDER {
            DisplayOrder::NewestFirst => self.records.insert(0, record.clone()),
            DisplayOrder::OldestFirst => self.records.push(record.clone()),
        }

        log::info!("Created {} {}", R::KIND, record.id());
        Ok(record)
    }

    /// Merges the supplied fields of `patch` into the record with `id`.
    pub fn update(&mut self, id: &str, patch: R::Patch) -> Result<R, StoreError> {
        let Some(index) = self.position(id) else {
            log::debug!("Update of unknown {} {id} ignored", R::KIND);
            return Err(self.not_found(id));
        };
        let patch = R::validate_patch(patch, &self.limits)?;

        let record = &mut self.records[index];
        record.apply_patch(patch);
        log::info!("Updated {} {id}", R::KIND);
        Ok(record.clone())
    }

    /// Drops the record with `id`. There is no undo.
    pub fn remove(&mut self, id: &str) -> Result<R, StoreError> {
        let Some(index) = self.position(id) else {
            log::debug!("Removal of unknown {} {id} ignored", R::KIND);
            return Err(self.not_found(id));
        };

        let removed = self.records.remove(index);
        log::info!("Removed {} {id}", R::KIND);
        Ok(removed)
    }

    /// The collection in display order.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Terminates: once the counter is exhausted the generator mints UUIDs.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    fn not_found(&self, id: &str) -> StoreError {
        StoreError::NotFound {
            kind: R::KIND,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{
        Announcement, AnnouncementDraft, AnnouncementPatch, ChatMessage, MessageDraft,
    };
    use chrono::Duration;

    fn announcements() -> ListResourceStore<Announcement> {
        ListResourceStore::new(StoreOptions::new("Current User"))
    }

    fn messages() -> ListResourceStore<ChatMessage> {
        ListResourceStore::new(StoreOptions::new("You"))
    }

    fn draft(title: &str, content: &str) -> AnnouncementDraft {
        AnnouncementDraft {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    fn message(content: &str) -> MessageDraft {
        MessageDraft {
            content: content.to_string(),
        }
    }

    fn seeded_announcement(id: &str) -> Announcement {
        Announcement {
            id: id.to_string(),
            title: format!("Seed {id}"),
            content: "Seeded body".to_string(),
            timestamp: Utc::now() - Duration::hours(1),
            author: "Admin".to_string(),
        }
    }

    #[test]
    fn create_adds_exactly_one_trimmed_record() {
        let mut store = announcements();
        let created = store
            .create(draft("  Shift change  ", "\tNight shift starts at 22:00 \n"))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(created.title, "Shift change");
        assert_eq!(created.content, "Night shift starts at 22:00");
        assert_eq!(created.author, "Current User");
    }

    #[test]
    fn create_rejects_blank_fields_without_mutating() {
        let mut store = announcements();
        store.create(draft("Kept", "Kept body")).unwrap();
        let before = store.list().to_vec();

        let err = store.create(draft("   ", "")).unwrap_err();
        let StoreError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("content"), Some("Content is required"));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn announcements_prepend_and_messages_append() {
        let mut feed = announcements();
        let a = feed.create(draft("A", "first")).unwrap();
        let b = feed.create(draft("B", "second")).unwrap();
        let order: Vec<_> = feed.list().iter().map(|r| r.id.clone()).collect();
        assert_eq!(order, vec![b.id, a.id]);

        let mut chat = messages();
        let a = chat.create(message("first")).unwrap();
        let b = chat.create(message("second")).unwrap();
        let order: Vec<_> = chat.list().iter().map(|r| r.id.clone()).collect();
        assert_eq!(order, vec![a.id, b.id]);
    }

    #[test]
    fn update_changes_only_supplied_fields() {
        let mut store = announcements();
        let created = store.create(draft("Title", "Body")).unwrap();

        let updated = store
            .update(
                &created.id,
                AnnouncementPatch {
                    title: None,
                    content: Some(" x ".to_string()),
                },
            )
            .unwrap();

        assert_eq!(updated.content, "x");
        assert_eq!(updated.title, "Title");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.timestamp, created.timestamp);
        assert_eq!(updated.author, created.author);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&created.id), Some(&updated));
    }

    #[test]
    fn update_with_blank_field_is_rejected() {
        let mut store = announcements();
        let created = store.create(draft("Title", "Body")).unwrap();

        let err = store
            .update(
                &created.id,
                AnnouncementPatch {
                    title: Some("  ".to_string()),
                    content: None,
                },
            )
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(ref e) if e.contains("title")));
        assert_eq!(store.get(&created.id), Some(&created));
    }

    #[test]
    fn unknown_id_leaves_collection_identical() {
        let mut store = announcements();
        store.create(draft("Title", "Body")).unwrap();
        let before = store.list().to_vec();

        let err = store
            .update("missing", AnnouncementPatch::default())
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                kind: "announcement",
                id: "missing".to_string()
            }
        );
        assert!(store.remove("missing").is_err());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn remove_drops_exactly_one_record() {
        let mut store = messages();
        let a = store.create(message("one")).unwrap();
        store.create(message("two")).unwrap();

        let removed = store.remove(&a.id).unwrap();
        assert_eq!(removed, a);
        assert_eq!(store.len(), 1);
        assert!(store.get(&a.id).is_none());
    }

    #[test]
    fn removed_ids_are_never_reissued() {
        let mut store = messages();
        let a = store.create(message("one")).unwrap();
        store.remove(&a.id).unwrap();
        let b = store.create(message("two")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn seeded_store_keeps_order_and_skips_seed_ids() {
        let seed = vec![seeded_announcement("1"), seeded_announcement("2")];
        let mut store =
            ListResourceStore::with_records(seed, StoreOptions::new("Current User")).unwrap();

        let ids: Vec<_> = store.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let created = store.create(draft("New", "Body")).unwrap();
        assert_eq!(created.id, "3");
        assert_eq!(store.list()[0].id, "3");
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let seed = vec![seeded_announcement("1"), seeded_announcement("1")];
        let err = ListResourceStore::with_records(seed, StoreOptions::new("Admin")).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateId {
                kind: "announcement",
                id: "1".to_string()
            }
        );
    }

    #[test]
    fn blank_or_untrimmed_seed_records_are_rejected() {
        let mut blank = seeded_announcement("1");
        blank.title = "   ".to_string();
        blank.content = String::new();
        let err = ListResourceStore::with_records(vec![blank], StoreOptions::new("Admin"))
            .unwrap_err();
        let StoreError::InvalidSeed { kind, id, errors } = err else {
            panic!("expected invalid seed error");
        };
        assert_eq!((kind, id.as_str()), ("announcement", "1"));
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("content"), Some("Content is required"));

        let mut padded = seeded_announcement("2");
        padded.title = " Padded ".to_string();
        let err = ListResourceStore::with_records(vec![padded], StoreOptions::new("Admin"))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidSeed { ref errors, .. } if errors.contains("title")
        ));
    }

    #[test]
    fn blank_seed_message_is_rejected() {
        let seed = vec![ChatMessage {
            id: "1".to_string(),
            sender: "Ahmad".to_string(),
            content: " \t ".to_string(),
            timestamp: Utc::now(),
            is_current_user: false,
        }];
        let err = ListResourceStore::with_records(seed, StoreOptions::new("You")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidSeed { kind: "message", .. }));
    }

    #[test]
    fn max_numeric_seed_id_still_allows_create() {
        let mut seed = seeded_announcement("1");
        seed.id = u64::MAX.to_string();
        let mut store =
            ListResourceStore::with_records(vec![seed], StoreOptions::new("Current User"))
                .unwrap();

        let a = store.create(draft("After max", "Body")).unwrap();
        let b = store.create(draft("Again", "Body")).unwrap();
        assert_ne!(a.id, u64::MAX.to_string());
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn time_ordered_strategy_mints_unique_ids() {
        let mut options = StoreOptions::new("You");
        options.id_strategy = IdStrategy::TimeOrdered;
        let mut store: ListResourceStore<ChatMessage> = ListResourceStore::new(options);

        let a = store.create(message("one")).unwrap();
        let b = store.create(message("two")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn create_then_get_round_trips() {
        let mut store = messages();
        let created = store.create(message("  hello team  ")).unwrap();
        let found = store.get(&created.id).unwrap();
        assert_eq!(found, &created);
        assert_eq!(found.content, "hello team");
        assert!(found.is_current_user);
        assert_eq!(found.sender, "You");
    }
}
