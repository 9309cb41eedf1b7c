/// Storage service - in-memory home of the four content collections
///
/// `Storage` is the contract handlers depend on. `MemStorage` keeps each
/// collection as an insertion-ordered table plus an id index, behind its own
/// `RwLock`. Records are only ever appended; nothing is updated or removed.
use crate::error::Result;
use crate::models::{
    BlogPost, ContactSubmission, MediaItem, NewBlogPost, NewContactSubmission, NewMediaItem,
    NewTimelineMilestone, TimelineMilestone,
};
use crate::services::clock::{Clock, SystemClock};
use crate::services::seed;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Blog posts, newest `publishedAt` first
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>>;
    /// `None` for unknown or malformed ids
    async fn get_blog_post(&self, id: &str) -> Result<Option<BlogPost>>;
    async fn create_blog_post(&self, post: NewBlogPost) -> Result<BlogPost>;

    /// Milestones by ascending `order`
    async fn list_milestones(&self) -> Result<Vec<TimelineMilestone>>;
    async fn create_milestone(&self, milestone: NewTimelineMilestone)
        -> Result<TimelineMilestone>;

    /// Media items in insertion order
    async fn list_media_items(&self) -> Result<Vec<MediaItem>>;
    async fn create_media_item(&self, item: NewMediaItem) -> Result<MediaItem>;

    /// Stamps `submittedAt` with the current time
    async fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission>;
    /// Submissions, newest first
    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>>;
}

/// Insertion-ordered records with O(1) lookup by id
struct Table<T> {
    records: Vec<T>,
    index: HashMap<Uuid, usize>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.index.contains_key(&id) {
                return id;
            }
        }
    }

    /// Assign a fresh id and append the record built from it.
    fn insert_with(&mut self, build: impl FnOnce(Uuid) -> T) -> T {
        let id = self.fresh_id();
        let record = build(id);
        self.index.insert(id, self.records.len());
        self.records.push(record.clone());
        record
    }

    fn get(&self, id: &Uuid) -> Option<&T> {
        self.index.get(id).and_then(|&pos| self.records.get(pos))
    }

    fn to_vec(&self) -> Vec<T> {
        self.records.clone()
    }
}

/// Record counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionCounts {
    pub blog_posts: usize,
    pub milestones: usize,
    pub media_items: usize,
    pub contact_submissions: usize,
}

pub struct MemStorage {
    blog_posts: RwLock<Table<BlogPost>>,
    milestones: RwLock<Table<TimelineMilestone>>,
    media_items: RwLock<Table<MediaItem>>,
    contact_submissions: RwLock<Table<ContactSubmission>>,
    clock: Arc<dyn Clock>,
}

impl MemStorage {
    /// Empty store seeded with the demonstration content.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let mut storage = Self::unseeded(clock);
        storage.seed();
        storage
    }

    /// Empty store without demonstration content.
    pub fn unseeded(clock: Arc<dyn Clock>) -> Self {
        Self {
            blog_posts: RwLock::new(Table::new()),
            milestones: RwLock::new(Table::new()),
            media_items: RwLock::new(Table::new()),
            contact_submissions: RwLock::new(Table::new()),
            clock,
        }
    }

    // Runs before the store is shared, so the tables are reached through
    // `get_mut` without locking.
    fn seed(&mut self) {
        let milestones = self.milestones.get_mut();
        for milestone in seed::demo_milestones() {
            milestones.insert_with(|id| TimelineMilestone::from_new(id, milestone));
        }

        let posts = self.blog_posts.get_mut();
        for post in seed::demo_blog_posts() {
            posts.insert_with(|id| BlogPost::from_new(id, post));
        }

        let media = self.media_items.get_mut();
        for item in seed::demo_media_items() {
            media.insert_with(|id| MediaItem::from_new(id, item));
        }

        tracing::info!(
            blog_posts = posts.len(),
            milestones = milestones.len(),
            media_items = media.len(),
            "storage seeded with demo content"
        );
    }

    pub async fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            blog_posts: self.blog_posts.read().await.len(),
            milestones: self.milestones.read().await.len(),
            media_items: self.media_items.read().await.len(),
            contact_submissions: self.contact_submissions.read().await.len(),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

/// Sort key for `publishedAt`: RFC 3339, or a bare date at midnight UTC.
/// Unparseable values yield `None` and sort after every dated post.
pub fn publication_key(published_at: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(published_at) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(published_at, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[async_trait]
impl Storage for MemStorage {
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>> {
        let mut posts = self.blog_posts.read().await.to_vec();
        // stable: equal timestamps keep insertion order
        posts.sort_by_cached_key(|post| Reverse(publication_key(&post.published_at)));
        Ok(posts)
    }

    async fn get_blog_post(&self, id: &str) -> Result<Option<BlogPost>> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.blog_posts.read().await.get(&id).cloned())
    }

    async fn create_blog_post(&self, post: NewBlogPost) -> Result<BlogPost> {
        let mut posts = self.blog_posts.write().await;
        Ok(posts.insert_with(|id| BlogPost::from_new(id, post)))
    }

    async fn list_milestones(&self) -> Result<Vec<TimelineMilestone>> {
        let mut milestones = self.milestones.read().await.to_vec();
        milestones.sort_by_key(|milestone| milestone.order);
        Ok(milestones)
    }

    async fn create_milestone(
        &self,
        milestone: NewTimelineMilestone,
    ) -> Result<TimelineMilestone> {
        let mut milestones = self.milestones.write().await;
        Ok(milestones.insert_with(|id| TimelineMilestone::from_new(id, milestone)))
    }

    async fn list_media_items(&self) -> Result<Vec<MediaItem>> {
        Ok(self.media_items.read().await.to_vec())
    }

    async fn create_media_item(&self, item: NewMediaItem) -> Result<MediaItem> {
        let mut media = self.media_items.write().await;
        Ok(media.insert_with(|id| MediaItem::from_new(id, item)))
    }

    async fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission> {
        let mut submissions = self.contact_submissions.write().await;
        let submitted_at = self.clock.now();
        Ok(submissions.insert_with(|id| ContactSubmission::from_new(id, submitted_at, submission)))
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        let guard = self.contact_submissions.read().await;
        // newest insertion first, so equal timestamps still list newest first
        let mut submissions: Vec<ContactSubmission> = guard.records.iter().rev().cloned().collect();
        drop(guard);
        submissions.sort_by_key(|submission| Reverse(submission.submitted_at));
        Ok(submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Clock that advances by a fixed step on every call
    struct SteppingClock {
        next: Mutex<DateTime<Utc>>,
        step: Duration,
    }

    impl SteppingClock {
        fn new(step: Duration) -> Self {
            Self {
                next: Mutex::new(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()),
                step,
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let mut next = self.next.lock().unwrap();
            let now = *next;
            *next = now + self.step;
            now
        }
    }

    fn new_post(title: &str, published_at: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            tempo: "Moderato".into(),
            tempo_value: 100,
            image_url: None,
            read_time: 3,
            published_at: published_at.into(),
        }
    }

    fn new_milestone(company: &str, order: i32) -> NewTimelineMilestone {
        NewTimelineMilestone {
            company: company.into(),
            role: "Engineer".into(),
            start_date: "2020".into(),
            end_date: None,
            impact: String::new(),
            insight: String::new(),
            logo_url: None,
            order,
        }
    }

    fn contact(name: &str) -> NewContactSubmission {
        NewContactSubmission {
            name: name.into(),
            email: format!("{name}@example.com"),
            message: "hello".into(),
        }
    }

    #[tokio::test]
    async fn seeds_demo_content_once() {
        let storage = MemStorage::default();
        assert_eq!(
            storage.counts().await,
            CollectionCounts {
                blog_posts: 2,
                milestones: 4,
                media_items: 2,
                contact_submissions: 0,
            }
        );

        let posts = storage.list_blog_posts().await.unwrap();
        assert_eq!(posts[0].title, "The Rhythm of Rapid Iteration");
        assert_eq!(posts[1].title, "On Daydreaming as Strategic Practice");

        let milestones = storage.list_milestones().await.unwrap();
        let companies: Vec<&str> = milestones.iter().map(|m| m.company.as_str()).collect();
        assert_eq!(
            companies,
            vec![
                "Yelo",
                "Stealth Founders Fund",
                "Yale Law School",
                "University of Notre Dame"
            ]
        );
    }

    #[tokio::test]
    async fn created_post_is_returned_by_get() {
        let storage = MemStorage::unseeded(Arc::new(SystemClock));
        let post = storage
            .create_blog_post(new_post("Allegro", "2025-03-01T10:00:00Z"))
            .await
            .unwrap();

        let fetched = storage.get_blog_post(&post.id.to_string()).await.unwrap();
        assert_eq!(fetched, Some(post.clone()));
        assert_eq!(post.title, "Allegro");
        assert_eq!(post.published_at, "2025-03-01T10:00:00Z");
    }

    #[tokio::test]
    async fn unknown_and_malformed_ids_are_not_found() {
        let storage = MemStorage::default();
        assert_eq!(storage.get_blog_post("does-not-exist").await.unwrap(), None);
        let unused = Uuid::new_v4().to_string();
        assert_eq!(storage.get_blog_post(&unused).await.unwrap(), None);
    }

    #[tokio::test]
    async fn blog_posts_sort_newest_first_and_stable_on_ties() {
        let storage = MemStorage::unseeded(Arc::new(SystemClock));
        for (title, at) in [
            ("old", "2023-01-01T00:00:00Z"),
            ("tie-a", "2024-06-01T00:00:00.000Z"),
            ("undated", "someday"),
            ("newest", "2025-01-01"),
            ("tie-b", "2024-06-01T02:00:00+02:00"),
        ] {
            storage.create_blog_post(new_post(title, at)).await.unwrap();
        }

        let titles: Vec<String> = storage
            .list_blog_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["newest", "tie-a", "tie-b", "old", "undated"]);
    }

    #[tokio::test]
    async fn milestones_sort_by_order_then_insertion() {
        let storage = MemStorage::unseeded(Arc::new(SystemClock));
        for (company, order) in [("c", 2), ("a", 0), ("b1", 1), ("b2", 1), ("neg", -1)] {
            storage
                .create_milestone(new_milestone(company, order))
                .await
                .unwrap();
        }

        let companies: Vec<String> = storage
            .list_milestones()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.company)
            .collect();
        assert_eq!(companies, vec!["neg", "a", "b1", "b2", "c"]);
    }

    #[tokio::test]
    async fn media_items_keep_insertion_order() {
        let storage = MemStorage::default();
        let added = storage
            .create_media_item(NewMediaItem {
                title: "Sketchbook".into(),
                description: None,
                media_type: crate::models::MediaType::Image,
                url: "https://example.com/sketch.png".into(),
                musical_key: None,
                mood: None,
                thumbnail_url: None,
                aspect_ratio: Some(crate::models::AspectRatio::Portrait),
            })
            .await
            .unwrap();

        let items = storage.list_media_items().await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Curiosity in C Major");
        assert_eq!(items[2], added);
    }

    #[tokio::test]
    async fn contact_submissions_are_stamped_and_listed_newest_first() {
        let clock = Arc::new(SteppingClock::new(Duration::seconds(1)));
        let storage = MemStorage::unseeded(clock);

        let first = storage.create_contact_submission(contact("ada")).await.unwrap();
        let second = storage.create_contact_submission(contact("grace")).await.unwrap();
        assert!(second.submitted_at > first.submitted_at);

        let listed = storage.list_contact_submissions().await.unwrap();
        assert_eq!(listed, vec![second, first]);
    }

    #[tokio::test]
    async fn contact_submissions_with_equal_timestamps_list_latest_insert_first() {
        let clock = Arc::new(SteppingClock::new(Duration::zero()));
        let storage = MemStorage::unseeded(clock);

        for name in ["a", "b", "c"] {
            storage.create_contact_submission(contact(name)).await.unwrap();
        }

        let names: Vec<String> = storage
            .list_contact_submissions()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_unique_ids() {
        let storage = Arc::new(MemStorage::unseeded(Arc::new(SystemClock)));

        let mut handles = Vec::new();
        for i in 0..64 {
            let storage = storage.clone();
            handles.push(tokio::spawn(async move {
                storage
                    .create_contact_submission(contact(&format!("user{i}")))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }
        assert_eq!(ids.len(), 64);
        assert_eq!(storage.counts().await.contact_submissions, 64);
    }

    #[test]
    fn publication_key_accepts_rfc3339_and_bare_dates() {
        assert_eq!(
            publication_key("2024-10-15"),
            publication_key("2024-10-15T00:00:00.000Z")
        );
        assert!(publication_key("2024-10-15T01:00:00+01:00").is_some());
        assert_eq!(publication_key("last tuesday"), None);
    }
}
