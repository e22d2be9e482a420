//! Search page data composer.
//!
//! `compose_search` turns the raw query-string values into a [`SearchView`],
//! querying only the entity kinds the type filter selects. An empty query
//! yields [`SearchView::Prompt`] without touching the store.

use crate::models::{ArtistListItem, PostListItem, SongListItem};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Entity-type filter (`type` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    All,
    Artists,
    Songs,
    Posts,
}

impl SearchType {
    /// Unrecognised values behave as `all`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("artists") => SearchType::Artists,
            Some("songs") => SearchType::Songs,
            Some("posts") => SearchType::Posts,
            _ => SearchType::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::All => "all",
            SearchType::Artists => "artists",
            SearchType::Songs => "songs",
            SearchType::Posts => "posts",
        }
    }

    pub fn includes_artists(self) -> bool {
        matches!(self, SearchType::All | SearchType::Artists)
    }

    pub fn includes_songs(self) -> bool {
        matches!(self, SearchType::All | SearchType::Songs)
    }

    pub fn includes_posts(self) -> bool {
        matches!(self, SearchType::All | SearchType::Posts)
    }
}

/// Result ordering (`sort` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Popular,
    Alphabetical,
}

impl SortKey {
    /// Unrecognised values behave as `newest`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("oldest") => SortKey::Oldest,
            Some("popular") => SortKey::Popular,
            Some("alphabetical") => SortKey::Alphabetical,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Popular => "popular",
            SortKey::Alphabetical => "alphabetical",
        }
    }
}

/// Raw query string of the search page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub kind: SearchType,
    pub sort: SortKey,
}

impl SearchParams {
    pub fn new(query: &str, kind: SearchType, sort: SortKey) -> Self {
        Self {
            query: query.trim().to_string(),
            kind,
            sort,
        }
    }
}

impl From<&SearchQuery> for SearchParams {
    fn from(raw: &SearchQuery) -> Self {
        Self::new(
            raw.q.as_deref().unwrap_or_default(),
            SearchType::parse(raw.kind.as_deref()),
            SortKey::parse(raw.sort.as_deref()),
        )
    }
}

/// View model of the search page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SearchView {
    /// No query yet: show the prompt.
    Prompt { kind: SearchType, sort: SortKey },
    Results {
        query: String,
        kind: SearchType,
        sort: SortKey,
        artists: Vec<ArtistListItem>,
        songs: Vec<SongListItem>,
        posts: Vec<PostListItem>,
        total: usize,
    },
}

/// Case-insensitive substring search over the catalog, one method per kind.
/// Each call returns at most `limit` rows in `sort` order.
pub trait CatalogSearch {
    fn search_artists(
        &self,
        query: &str,
        sort: SortKey,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<ArtistListItem>>> + Send;

    fn search_songs(
        &self,
        query: &str,
        sort: SortKey,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<SongListItem>>> + Send;

    fn search_posts(
        &self,
        query: &str,
        sort: SortKey,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<PostListItem>>> + Send;
}

/// Build the search view. Selected kinds are queried concurrently.
pub async fn compose_search<S>(store: &S, params: &SearchParams, limit: i64) -> Result<SearchView>
where
    S: CatalogSearch + Sync,
{
    if params.query.is_empty() {
        return Ok(SearchView::Prompt {
            kind: params.kind,
            sort: params.sort,
        });
    }

    let query = params.query.as_str();
    let artists = async {
        if params.kind.includes_artists() {
            store.search_artists(query, params.sort, limit).await
        } else {
            Ok(Vec::new())
        }
    };
    let songs = async {
        if params.kind.includes_songs() {
            store.search_songs(query, params.sort, limit).await
        } else {
            Ok(Vec::new())
        }
    };
    let posts = async {
        if params.kind.includes_posts() {
            store.search_posts(query, params.sort, limit).await
        } else {
            Ok(Vec::new())
        }
    };

    let (artists, songs, posts) = futures::try_join!(artists, songs, posts)?;
    let total = artists.len() + songs.len() + posts.len();

    Ok(SearchView::Results {
        query: params.query.clone(),
        kind: params.kind,
        sort: params.sort,
        artists,
        songs,
        posts,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Artist, Song};
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that counts calls and returns one row per kind.
    #[derive(Default)]
    struct CountingStore {
        calls: AtomicUsize,
        artist_calls: AtomicUsize,
        song_calls: AtomicUsize,
        post_calls: AtomicUsize,
    }

    fn sample_artist() -> ArtistListItem {
        ArtistListItem {
            artist: Artist {
                id: 1,
                name: "IU".to_string(),
                slug: "iu".to_string(),
                bio: None,
                image: None,
                website: None,
                instagram: None,
                youtube: None,
                spotify: None,
                soundcloud: None,
                is_active: true,
                created_at: Utc::now(),
            },
            song_count: 1,
            post_count: 0,
        }
    }

    fn sample_song() -> SongListItem {
        SongListItem {
            song: Song {
                id: 1,
                title: "Through the Night".to_string(),
                slug: "through-the-night".to_string(),
                description: None,
                youtube_url: None,
                duration: None,
                release_date: None,
                artist_id: 1,
                is_active: true,
                created_at: Utc::now(),
            },
            artist_name: "IU".to_string(),
            artist_slug: "iu".to_string(),
            like_count: 0,
        }
    }

    impl CatalogSearch for CountingStore {
        async fn search_artists(
            &self,
            _query: &str,
            _sort: SortKey,
            _limit: i64,
        ) -> Result<Vec<ArtistListItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.artist_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![sample_artist()])
        }

        async fn search_songs(
            &self,
            _query: &str,
            _sort: SortKey,
            _limit: i64,
        ) -> Result<Vec<SongListItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.song_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![sample_song()])
        }

        async fn search_posts(
            &self,
            _query: &str,
            _sort: SortKey,
            _limit: i64,
        ) -> Result<Vec<PostListItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.post_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_search_type_parse() {
        assert_eq!(SearchType::parse(Some("songs")), SearchType::Songs);
        assert_eq!(SearchType::parse(Some("artists")), SearchType::Artists);
        assert_eq!(SearchType::parse(Some("posts")), SearchType::Posts);
        assert_eq!(SearchType::parse(Some("all")), SearchType::All);
        assert_eq!(SearchType::parse(Some("videos")), SearchType::All);
        assert_eq!(SearchType::parse(None), SearchType::All);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse(Some("popular")), SortKey::Popular);
        assert_eq!(SortKey::parse(Some("alphabetical")), SortKey::Alphabetical);
        assert_eq!(SortKey::parse(Some("oldest")), SortKey::Oldest);
        assert_eq!(SortKey::parse(Some("random")), SortKey::Newest);
        assert_eq!(SortKey::parse(None), SortKey::Newest);
    }

    #[test]
    fn test_params_from_query_trims() {
        let params = SearchParams::from(&SearchQuery {
            q: Some("  iu ".to_string()),
            kind: Some("songs".to_string()),
            sort: None,
        });
        assert_eq!(params.query, "iu");
        assert_eq!(params.kind, SearchType::Songs);
        assert_eq!(params.sort, SortKey::Newest);
    }

    // ==================== Composer Tests ====================

    #[tokio::test]
    async fn test_empty_query_is_prompt_without_queries() {
        let store = CountingStore::default();
        for raw in ["", "   "] {
            let params = SearchParams::new(raw, SearchType::All, SortKey::Newest);
            let view = compose_search(&store, &params, 20).await.unwrap();
            assert!(matches!(view, SearchView::Prompt { .. }));
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_queries_every_kind() {
        let store = CountingStore::default();
        let params = SearchParams::new("iu", SearchType::All, SortKey::Newest);

        match compose_search(&store, &params, 20).await.unwrap() {
            SearchView::Results {
                artists,
                songs,
                posts,
                total,
                ..
            } => {
                assert_eq!(artists.len(), 1);
                assert_eq!(songs.len(), 1);
                assert!(posts.is_empty());
                assert_eq!(total, 2);
            }
            other => panic!("Expected results, got {:?}", other),
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_songs_filter_queries_only_songs() {
        let store = CountingStore::default();
        let params = SearchParams::new("iu", SearchType::Songs, SortKey::Popular);

        match compose_search(&store, &params, 20).await.unwrap() {
            SearchView::Results {
                artists,
                songs,
                posts,
                total,
                sort,
                ..
            } => {
                assert!(artists.is_empty());
                assert!(posts.is_empty());
                assert_eq!(songs.len(), 1);
                assert_eq!(total, 1);
                assert_eq!(sort, SortKey::Popular);
            }
            other => panic!("Expected results, got {:?}", other),
        }
        assert_eq!(store.song_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.artist_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.post_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_view_serializes_state_tag() {
        let view = SearchView::Prompt {
            kind: SearchType::Posts,
            sort: SortKey::Alphabetical,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "prompt");
        assert_eq!(json["kind"], "posts");
        assert_eq!(json["sort"], "alphabetical");
    }
}
