//! Message dictionary tables.
//!
//! Keys are an enumerated set so a typo is a compile error rather than a
//! silent fallback. Each locale has one flat table; completeness across
//! tables is checked at startup by the `validator` module.

use crate::i18n::Locale;

/// Every translatable UI string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    NavHome,
    NavArtists,
    NavMusic,
    NavCommunity,
    NavSearch,
    NavAdmin,
    NavSignin,
    NavSignup,
    NavSignout,
    NavLanguage,

    HomeTitle,
    HomeSubtitle,
    HomeFeaturedArtists,
    HomeLatestMusic,
    HomeExploreButton,
    HomeViewAllArtists,

    ArtistsTitle,
    ArtistsSubtitle,
    ArtistsFeatured,
    ArtistsAll,
    ArtistsGenre,
    ArtistsLocation,
    ArtistsEmpty,
    ArtistsSongsCount,

    ArtistMusic,
    ArtistNoSongs,
    ArtistLatestPosts,
    ArtistLinks,

    MusicTitle,
    MusicSubtitle,
    MusicLatest,
    MusicPopular,
    MusicAlbums,
    MusicSingles,
    MusicEmpty,
    MusicDuration,
    MusicPlay,

    CommunityTitle,
    CommunitySubtitle,
    CommunityLatestPosts,
    CommunityCreatePost,
    CommunityDiscussions,
    CommunityEmpty,

    PostLikes,
    PostComments,
    PostDraft,
    PostNoComments,

    SearchTitle,
    SearchPlaceholder,
    SearchPrompt,
    SearchResults,
    SearchResultsFor,
    SearchNoResults,
    SearchAll,
    SearchSongs,
    SearchPosts,
    SearchSortBy,
    SearchNewest,
    SearchOldest,
    SearchPopular,
    SearchAlphabetical,

    AdminTitle,
    AdminSubtitle,
    AdminTotalArtists,
    AdminTotalSongs,
    AdminTotalPosts,
    AdminTotalUsers,
    AdminRecentPosts,
    AdminRecentComments,
    AdminNoPosts,
    AdminNoComments,

    ErrorNotFoundTitle,
    ErrorNotFoundBody,
    ErrorUnauthorized,

    CommonLoading,
    CommonError,
    CommonSave,
    CommonCancel,
    CommonDelete,
    CommonEdit,
    CommonView,
    CommonBack,
    CommonNext,
    CommonPrevious,
    CommonReadMore,
    CommonBy,
}

impl MessageKey {
    pub const ALL: [MessageKey; 86] = [
        MessageKey::NavHome,
        MessageKey::NavArtists,
        MessageKey::NavMusic,
        MessageKey::NavCommunity,
        MessageKey::NavSearch,
        MessageKey::NavAdmin,
        MessageKey::NavSignin,
        MessageKey::NavSignup,
        MessageKey::NavSignout,
        MessageKey::NavLanguage,
        MessageKey::HomeTitle,
        MessageKey::HomeSubtitle,
        MessageKey::HomeFeaturedArtists,
        MessageKey::HomeLatestMusic,
        MessageKey::HomeExploreButton,
        MessageKey::HomeViewAllArtists,
        MessageKey::ArtistsTitle,
        MessageKey::ArtistsSubtitle,
        MessageKey::ArtistsFeatured,
        MessageKey::ArtistsAll,
        MessageKey::ArtistsGenre,
        MessageKey::ArtistsLocation,
        MessageKey::ArtistsEmpty,
        MessageKey::ArtistsSongsCount,
        MessageKey::ArtistMusic,
        MessageKey::ArtistNoSongs,
        MessageKey::ArtistLatestPosts,
        MessageKey::ArtistLinks,
        MessageKey::MusicTitle,
        MessageKey::MusicSubtitle,
        MessageKey::MusicLatest,
        MessageKey::MusicPopular,
        MessageKey::MusicAlbums,
        MessageKey::MusicSingles,
        MessageKey::MusicEmpty,
        MessageKey::MusicDuration,
        MessageKey::MusicPlay,
        MessageKey::CommunityTitle,
        MessageKey::CommunitySubtitle,
        MessageKey::CommunityLatestPosts,
        MessageKey::CommunityCreatePost,
        MessageKey::CommunityDiscussions,
        MessageKey::CommunityEmpty,
        MessageKey::PostLikes,
        MessageKey::PostComments,
        MessageKey::PostDraft,
        MessageKey::PostNoComments,
        MessageKey::SearchTitle,
        MessageKey::SearchPlaceholder,
        MessageKey::SearchPrompt,
        MessageKey::SearchResults,
        MessageKey::SearchResultsFor,
        MessageKey::SearchNoResults,
        MessageKey::SearchAll,
        MessageKey::SearchSongs,
        MessageKey::SearchPosts,
        MessageKey::SearchSortBy,
        MessageKey::SearchNewest,
        MessageKey::SearchOldest,
        MessageKey::SearchPopular,
        MessageKey::SearchAlphabetical,
        MessageKey::AdminTitle,
        MessageKey::AdminSubtitle,
        MessageKey::AdminTotalArtists,
        MessageKey::AdminTotalSongs,
        MessageKey::AdminTotalPosts,
        MessageKey::AdminTotalUsers,
        MessageKey::AdminRecentPosts,
        MessageKey::AdminRecentComments,
        MessageKey::AdminNoPosts,
        MessageKey::AdminNoComments,
        MessageKey::ErrorNotFoundTitle,
        MessageKey::ErrorNotFoundBody,
        MessageKey::ErrorUnauthorized,
        MessageKey::CommonLoading,
        MessageKey::CommonError,
        MessageKey::CommonSave,
        MessageKey::CommonCancel,
        MessageKey::CommonDelete,
        MessageKey::CommonEdit,
        MessageKey::CommonView,
        MessageKey::CommonBack,
        MessageKey::CommonNext,
        MessageKey::CommonPrevious,
        MessageKey::CommonReadMore,
        MessageKey::CommonBy,
    ];

    /// Dotted key as used in templates and by `Messages::resolve`.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::NavHome => "nav.home",
            MessageKey::NavArtists => "nav.artists",
            MessageKey::NavMusic => "nav.music",
            MessageKey::NavCommunity => "nav.community",
            MessageKey::NavSearch => "nav.search",
            MessageKey::NavAdmin => "nav.admin",
            MessageKey::NavSignin => "nav.signin",
            MessageKey::NavSignup => "nav.signup",
            MessageKey::NavSignout => "nav.signout",
            MessageKey::NavLanguage => "nav.language",
            MessageKey::HomeTitle => "home.title",
            MessageKey::HomeSubtitle => "home.subtitle",
            MessageKey::HomeFeaturedArtists => "home.featured_artists",
            MessageKey::HomeLatestMusic => "home.latest_music",
            MessageKey::HomeExploreButton => "home.explore_button",
            MessageKey::HomeViewAllArtists => "home.view_all_artists",
            MessageKey::ArtistsTitle => "artists.title",
            MessageKey::ArtistsSubtitle => "artists.subtitle",
            MessageKey::ArtistsFeatured => "artists.featured",
            MessageKey::ArtistsAll => "artists.all",
            MessageKey::ArtistsGenre => "artists.genre",
            MessageKey::ArtistsLocation => "artists.location",
            MessageKey::ArtistsEmpty => "artists.empty",
            MessageKey::ArtistsSongsCount => "artists.songs_count",
            MessageKey::ArtistMusic => "artist.music",
            MessageKey::ArtistNoSongs => "artist.no_songs",
            MessageKey::ArtistLatestPosts => "artist.latest_posts",
            MessageKey::ArtistLinks => "artist.links",
            MessageKey::MusicTitle => "music.title",
            MessageKey::MusicSubtitle => "music.subtitle",
            MessageKey::MusicLatest => "music.latest",
            MessageKey::MusicPopular => "music.popular",
            MessageKey::MusicAlbums => "music.albums",
            MessageKey::MusicSingles => "music.singles",
            MessageKey::MusicEmpty => "music.empty",
            MessageKey::MusicDuration => "music.duration",
            MessageKey::MusicPlay => "music.play",
            MessageKey::CommunityTitle => "community.title",
            MessageKey::CommunitySubtitle => "community.subtitle",
            MessageKey::CommunityLatestPosts => "community.latest_posts",
            MessageKey::CommunityCreatePost => "community.create_post",
            MessageKey::CommunityDiscussions => "community.discussions",
            MessageKey::CommunityEmpty => "community.empty",
            MessageKey::PostLikes => "post.likes",
            MessageKey::PostComments => "post.comments",
            MessageKey::PostDraft => "post.draft",
            MessageKey::PostNoComments => "post.no_comments",
            MessageKey::SearchTitle => "search.title",
            MessageKey::SearchPlaceholder => "search.placeholder",
            MessageKey::SearchPrompt => "search.prompt",
            MessageKey::SearchResults => "search.results",
            MessageKey::SearchResultsFor => "search.results_for",
            MessageKey::SearchNoResults => "search.no_results",
            MessageKey::SearchAll => "search.all",
            MessageKey::SearchSongs => "search.songs",
            MessageKey::SearchPosts => "search.posts",
            MessageKey::SearchSortBy => "search.sort_by",
            MessageKey::SearchNewest => "search.newest",
            MessageKey::SearchOldest => "search.oldest",
            MessageKey::SearchPopular => "search.popular",
            MessageKey::SearchAlphabetical => "search.alphabetical",
            MessageKey::AdminTitle => "admin.title",
            MessageKey::AdminSubtitle => "admin.subtitle",
            MessageKey::AdminTotalArtists => "admin.total_artists",
            MessageKey::AdminTotalSongs => "admin.total_songs",
            MessageKey::AdminTotalPosts => "admin.total_posts",
            MessageKey::AdminTotalUsers => "admin.total_users",
            MessageKey::AdminRecentPosts => "admin.recent_posts",
            MessageKey::AdminRecentComments => "admin.recent_comments",
            MessageKey::AdminNoPosts => "admin.no_posts",
            MessageKey::AdminNoComments => "admin.no_comments",
            MessageKey::ErrorNotFoundTitle => "error.not_found_title",
            MessageKey::ErrorNotFoundBody => "error.not_found_body",
            MessageKey::ErrorUnauthorized => "error.unauthorized",
            MessageKey::CommonLoading => "common.loading",
            MessageKey::CommonError => "common.error",
            MessageKey::CommonSave => "common.save",
            MessageKey::CommonCancel => "common.cancel",
            MessageKey::CommonDelete => "common.delete",
            MessageKey::CommonEdit => "common.edit",
            MessageKey::CommonView => "common.view",
            MessageKey::CommonBack => "common.back",
            MessageKey::CommonNext => "common.next",
            MessageKey::CommonPrevious => "common.previous",
            MessageKey::CommonReadMore => "common.read_more",
            MessageKey::CommonBy => "common.by",
        }
    }

    pub fn from_key(key: &str) -> Option<MessageKey> {
        MessageKey::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

/// A locale's table: key paired with its string.
pub type MessageTable = &'static [(MessageKey, &'static str)];

/// Where lookups and validation find a locale's table. `table_for` in
/// production; tests substitute partial tables.
pub type TableSource = fn(Locale) -> Option<MessageTable>;

/// Table for a locale, or `None` if the locale has no table yet.
pub fn table_for(locale: Locale) -> Option<MessageTable> {
    match locale.code() {
        "en" => Some(ENGLISH_MESSAGES),
        "ko" => Some(KOREAN_MESSAGES),
        "es" => Some(SPANISH_MESSAGES),
        _ => None,
    }
}

// ==================== English Messages ====================

/// English messages (default locale, fallback for every other table)
pub const ENGLISH_MESSAGES: MessageTable = &[
    (MessageKey::NavHome, "Home"),
    (MessageKey::NavArtists, "Artists"),
    (MessageKey::NavMusic, "Music"),
    (MessageKey::NavCommunity, "Community"),
    (MessageKey::NavSearch, "Search"),
    (MessageKey::NavAdmin, "Admin"),
    (MessageKey::NavSignin, "Sign In"),
    (MessageKey::NavSignup, "Sign Up"),
    (MessageKey::NavSignout, "Sign Out"),
    (MessageKey::NavLanguage, "Language"),

    (MessageKey::HomeTitle, "Discover Korean Indie Artists"),
    (MessageKey::HomeSubtitle, "Explore the vibrant world of Korean independent music"),
    (MessageKey::HomeFeaturedArtists, "Featured Artists"),
    (MessageKey::HomeLatestMusic, "Latest Music"),
    (MessageKey::HomeExploreButton, "Explore Now"),
    (MessageKey::HomeViewAllArtists, "View All Artists"),

    (MessageKey::ArtistsTitle, "Artists"),
    (
        MessageKey::ArtistsSubtitle,
        "Discover talented independent artists from Korea and explore their unique musical styles.",
    ),
    (MessageKey::ArtistsFeatured, "Featured Artists"),
    (MessageKey::ArtistsAll, "All Artists"),
    (MessageKey::ArtistsGenre, "Genre"),
    (MessageKey::ArtistsLocation, "Location"),
    (MessageKey::ArtistsEmpty, "No artists found."),
    (MessageKey::ArtistsSongsCount, "Songs"),

    (MessageKey::ArtistMusic, "Music"),
    (MessageKey::ArtistNoSongs, "No songs yet."),
    (MessageKey::ArtistLatestPosts, "Latest Posts"),
    (MessageKey::ArtistLinks, "Links"),

    (MessageKey::MusicTitle, "Music"),
    (
        MessageKey::MusicSubtitle,
        "Discover the latest tracks from talented Korean independent artists.",
    ),
    (MessageKey::MusicLatest, "Latest Releases"),
    (MessageKey::MusicPopular, "Popular Tracks"),
    (MessageKey::MusicAlbums, "Albums"),
    (MessageKey::MusicSingles, "Singles"),
    (MessageKey::MusicEmpty, "No music found."),
    (MessageKey::MusicDuration, "Duration"),
    (MessageKey::MusicPlay, "Play on YouTube"),

    (MessageKey::CommunityTitle, "Community"),
    (
        MessageKey::CommunitySubtitle,
        "Discover stories, insights, and updates about Korean indie artists and music.",
    ),
    (MessageKey::CommunityLatestPosts, "Latest Posts"),
    (MessageKey::CommunityCreatePost, "Create Post"),
    (MessageKey::CommunityDiscussions, "Discussions"),
    (MessageKey::CommunityEmpty, "No posts found."),

    (MessageKey::PostLikes, "likes"),
    (MessageKey::PostComments, "comments"),
    (MessageKey::PostDraft, "Draft"),
    (MessageKey::PostNoComments, "No comments yet."),

    (MessageKey::SearchTitle, "Search"),
    (MessageKey::SearchPlaceholder, "Search artists, music, posts..."),
    (
        MessageKey::SearchPrompt,
        "Search for artists, songs, or blog posts to discover Korean indie music.",
    ),
    (MessageKey::SearchResults, "Search Results"),
    (MessageKey::SearchResultsFor, "results for"),
    (MessageKey::SearchNoResults, "No results found"),
    (MessageKey::SearchAll, "All"),
    (MessageKey::SearchSongs, "Songs"),
    (MessageKey::SearchPosts, "Blog Posts"),
    (MessageKey::SearchSortBy, "Sort by"),
    (MessageKey::SearchNewest, "Newest"),
    (MessageKey::SearchOldest, "Oldest"),
    (MessageKey::SearchPopular, "Popular"),
    (MessageKey::SearchAlphabetical, "Alphabetical"),

    (MessageKey::AdminTitle, "Admin Dashboard"),
    (MessageKey::AdminSubtitle, "Manage your Korean indie artist platform"),
    (MessageKey::AdminTotalArtists, "Total Artists"),
    (MessageKey::AdminTotalSongs, "Total Songs"),
    (MessageKey::AdminTotalPosts, "Total Posts"),
    (MessageKey::AdminTotalUsers, "Total Users"),
    (MessageKey::AdminRecentPosts, "Recent Posts"),
    (MessageKey::AdminRecentComments, "Recent Comments"),
    (MessageKey::AdminNoPosts, "No posts yet."),
    (MessageKey::AdminNoComments, "No comments yet."),

    (MessageKey::ErrorNotFoundTitle, "Page Not Found"),
    (MessageKey::ErrorNotFoundBody, "The page you are looking for does not exist."),
    (MessageKey::ErrorUnauthorized, "You must be signed in as an administrator to view this page."),

    (MessageKey::CommonLoading, "Loading..."),
    (MessageKey::CommonError, "An error occurred"),
    (MessageKey::CommonSave, "Save"),
    (MessageKey::CommonCancel, "Cancel"),
    (MessageKey::CommonDelete, "Delete"),
    (MessageKey::CommonEdit, "Edit"),
    (MessageKey::CommonView, "View"),
    (MessageKey::CommonBack, "Back"),
    (MessageKey::CommonNext, "Next"),
    (MessageKey::CommonPrevious, "Previous"),
    (MessageKey::CommonReadMore, "Read More"),
    (MessageKey::CommonBy, "by"),
];

// ==================== Korean Messages ====================

pub const KOREAN_MESSAGES: MessageTable = &[
    (MessageKey::NavHome, "홈"),
    (MessageKey::NavArtists, "아티스트"),
    (MessageKey::NavMusic, "음악"),
    (MessageKey::NavCommunity, "커뮤니티"),
    (MessageKey::NavSearch, "검색"),
    (MessageKey::NavAdmin, "관리자"),
    (MessageKey::NavSignin, "로그인"),
    (MessageKey::NavSignup, "회원가입"),
    (MessageKey::NavSignout, "로그아웃"),
    (MessageKey::NavLanguage, "언어"),

    (MessageKey::HomeTitle, "한국 인디 아티스트를 만나보세요"),
    (MessageKey::HomeSubtitle, "한국 독립 음악의 생생한 세계를 탐험해보세요"),
    (MessageKey::HomeFeaturedArtists, "추천 아티스트"),
    (MessageKey::HomeLatestMusic, "최신 음악"),
    (MessageKey::HomeExploreButton, "지금 탐험하기"),
    (MessageKey::HomeViewAllArtists, "모든 아티스트 보기"),

    (MessageKey::ArtistsTitle, "아티스트"),
    (MessageKey::ArtistsSubtitle, "한국의 재능 있는 독립 아티스트들과 그들만의 음악 스타일을 만나보세요."),
    (MessageKey::ArtistsFeatured, "추천 아티스트"),
    (MessageKey::ArtistsAll, "모든 아티스트"),
    (MessageKey::ArtistsGenre, "장르"),
    (MessageKey::ArtistsLocation, "지역"),
    (MessageKey::ArtistsEmpty, "아티스트가 없습니다."),
    (MessageKey::ArtistsSongsCount, "곡"),

    (MessageKey::ArtistMusic, "음악"),
    (MessageKey::ArtistNoSongs, "아직 곡이 없습니다."),
    (MessageKey::ArtistLatestPosts, "최신 게시물"),
    (MessageKey::ArtistLinks, "링크"),

    (MessageKey::MusicTitle, "음악"),
    (MessageKey::MusicSubtitle, "재능 있는 한국 독립 아티스트들의 최신 곡을 만나보세요."),
    (MessageKey::MusicLatest, "최신 발매"),
    (MessageKey::MusicPopular, "인기 트랙"),
    (MessageKey::MusicAlbums, "앨범"),
    (MessageKey::MusicSingles, "싱글"),
    (MessageKey::MusicEmpty, "음악이 없습니다."),
    (MessageKey::MusicDuration, "재생 시간"),
    (MessageKey::MusicPlay, "YouTube에서 재생"),

    (MessageKey::CommunityTitle, "커뮤니티"),
    (MessageKey::CommunitySubtitle, "한국 인디 아티스트와 음악에 관한 이야기와 소식을 만나보세요."),
    (MessageKey::CommunityLatestPosts, "최신 게시물"),
    (MessageKey::CommunityCreatePost, "게시물 작성"),
    (MessageKey::CommunityDiscussions, "토론"),
    (MessageKey::CommunityEmpty, "게시물이 없습니다."),

    (MessageKey::PostLikes, "좋아요"),
    (MessageKey::PostComments, "댓글"),
    (MessageKey::PostDraft, "초안"),
    (MessageKey::PostNoComments, "아직 댓글이 없습니다."),

    (MessageKey::SearchTitle, "검색"),
    (MessageKey::SearchPlaceholder, "아티스트, 음악, 게시물 검색..."),
    (MessageKey::SearchPrompt, "아티스트, 곡, 블로그 게시물을 검색해 한국 인디 음악을 발견하세요."),
    (MessageKey::SearchResults, "검색 결과"),
    (MessageKey::SearchResultsFor, "개의 검색 결과:"),
    (MessageKey::SearchNoResults, "검색 결과가 없습니다"),
    (MessageKey::SearchAll, "전체"),
    (MessageKey::SearchSongs, "곡"),
    (MessageKey::SearchPosts, "블로그 게시물"),
    (MessageKey::SearchSortBy, "정렬"),
    (MessageKey::SearchNewest, "최신순"),
    (MessageKey::SearchOldest, "오래된순"),
    (MessageKey::SearchPopular, "인기순"),
    (MessageKey::SearchAlphabetical, "가나다순"),

    (MessageKey::AdminTitle, "관리자 대시보드"),
    (MessageKey::AdminSubtitle, "한국 인디 아티스트 플랫폼을 관리하세요"),
    (MessageKey::AdminTotalArtists, "전체 아티스트"),
    (MessageKey::AdminTotalSongs, "전체 곡"),
    (MessageKey::AdminTotalPosts, "전체 게시물"),
    (MessageKey::AdminTotalUsers, "전체 사용자"),
    (MessageKey::AdminRecentPosts, "최근 게시물"),
    (MessageKey::AdminRecentComments, "최근 댓글"),
    (MessageKey::AdminNoPosts, "아직 게시물이 없습니다."),
    (MessageKey::AdminNoComments, "아직 댓글이 없습니다."),

    (MessageKey::ErrorNotFoundTitle, "페이지를 찾을 수 없습니다"),
    (MessageKey::ErrorNotFoundBody, "요청하신 페이지가 존재하지 않습니다."),
    (MessageKey::ErrorUnauthorized, "이 페이지를 보려면 관리자로 로그인해야 합니다."),

    (MessageKey::CommonLoading, "로딩 중..."),
    (MessageKey::CommonError, "오류가 발생했습니다"),
    (MessageKey::CommonSave, "저장"),
    (MessageKey::CommonCancel, "취소"),
    (MessageKey::CommonDelete, "삭제"),
    (MessageKey::CommonEdit, "편집"),
    (MessageKey::CommonView, "보기"),
    (MessageKey::CommonBack, "뒤로"),
    (MessageKey::CommonNext, "다음"),
    (MessageKey::CommonPrevious, "이전"),
    (MessageKey::CommonReadMore, "더 보기"),
    (MessageKey::CommonBy, "작성자"),
];

// ==================== Spanish Messages ====================

pub const SPANISH_MESSAGES: MessageTable = &[
    (MessageKey::NavHome, "Inicio"),
    (MessageKey::NavArtists, "Artistas"),
    (MessageKey::NavMusic, "Música"),
    (MessageKey::NavCommunity, "Comunidad"),
    (MessageKey::NavSearch, "Buscar"),
    (MessageKey::NavAdmin, "Admin"),
    (MessageKey::NavSignin, "Iniciar Sesión"),
    (MessageKey::NavSignup, "Registrarse"),
    (MessageKey::NavSignout, "Cerrar Sesión"),
    (MessageKey::NavLanguage, "Idioma"),

    (MessageKey::HomeTitle, "Descubre Artistas Indie Coreanos"),
    (MessageKey::HomeSubtitle, "Explora el vibrante mundo de la música independiente coreana"),
    (MessageKey::HomeFeaturedArtists, "Artistas Destacados"),
    (MessageKey::HomeLatestMusic, "Música Más Reciente"),
    (MessageKey::HomeExploreButton, "Explorar Ahora"),
    (MessageKey::HomeViewAllArtists, "Ver Todos los Artistas"),

    (MessageKey::ArtistsTitle, "Artistas"),
    (
        MessageKey::ArtistsSubtitle,
        "Descubre artistas independientes de Corea y explora sus estilos musicales únicos.",
    ),
    (MessageKey::ArtistsFeatured, "Artistas Destacados"),
    (MessageKey::ArtistsAll, "Todos los Artistas"),
    (MessageKey::ArtistsGenre, "Género"),
    (MessageKey::ArtistsLocation, "Ubicación"),
    (MessageKey::ArtistsEmpty, "No se encontraron artistas."),
    (MessageKey::ArtistsSongsCount, "Canciones"),

    (MessageKey::ArtistMusic, "Música"),
    (MessageKey::ArtistNoSongs, "Aún no hay canciones."),
    (MessageKey::ArtistLatestPosts, "Últimas Publicaciones"),
    (MessageKey::ArtistLinks, "Enlaces"),

    (MessageKey::MusicTitle, "Música"),
    (
        MessageKey::MusicSubtitle,
        "Descubre las últimas pistas de talentosos artistas independientes coreanos.",
    ),
    (MessageKey::MusicLatest, "Últimos Lanzamientos"),
    (MessageKey::MusicPopular, "Pistas Populares"),
    (MessageKey::MusicAlbums, "Álbumes"),
    (MessageKey::MusicSingles, "Sencillos"),
    (MessageKey::MusicEmpty, "No se encontró música."),
    (MessageKey::MusicDuration, "Duración"),
    (MessageKey::MusicPlay, "Reproducir en YouTube"),

    (MessageKey::CommunityTitle, "Comunidad"),
    (
        MessageKey::CommunitySubtitle,
        "Descubre historias y novedades sobre artistas y música indie coreana.",
    ),
    (MessageKey::CommunityLatestPosts, "Últimas Publicaciones"),
    (MessageKey::CommunityCreatePost, "Crear Publicación"),
    (MessageKey::CommunityDiscussions, "Discusiones"),
    (MessageKey::CommunityEmpty, "No se encontraron publicaciones."),

    (MessageKey::PostLikes, "me gusta"),
    (MessageKey::PostComments, "comentarios"),
    (MessageKey::PostDraft, "Borrador"),
    (MessageKey::PostNoComments, "Aún no hay comentarios."),

    (MessageKey::SearchTitle, "Buscar"),
    (MessageKey::SearchPlaceholder, "Buscar artistas, música, publicaciones..."),
    (
        MessageKey::SearchPrompt,
        "Busca artistas, canciones o publicaciones para descubrir música indie coreana.",
    ),
    (MessageKey::SearchResults, "Resultados de Búsqueda"),
    (MessageKey::SearchResultsFor, "resultados para"),
    (MessageKey::SearchNoResults, "No se encontraron resultados"),
    (MessageKey::SearchAll, "Todo"),
    (MessageKey::SearchSongs, "Canciones"),
    (MessageKey::SearchPosts, "Publicaciones"),
    (MessageKey::SearchSortBy, "Ordenar por"),
    (MessageKey::SearchNewest, "Más recientes"),
    (MessageKey::SearchOldest, "Más antiguos"),
    (MessageKey::SearchPopular, "Populares"),
    (MessageKey::SearchAlphabetical, "Alfabético"),

    (MessageKey::AdminTitle, "Panel de Administración"),
    (MessageKey::AdminSubtitle, "Administra tu plataforma de artistas indie coreanos"),
    (MessageKey::AdminTotalArtists, "Total de Artistas"),
    (MessageKey::AdminTotalSongs, "Total de Canciones"),
    (MessageKey::AdminTotalPosts, "Total de Publicaciones"),
    (MessageKey::AdminTotalUsers, "Total de Usuarios"),
    (MessageKey::AdminRecentPosts, "Publicaciones Recientes"),
    (MessageKey::AdminRecentComments, "Comentarios Recientes"),
    (MessageKey::AdminNoPosts, "Aún no hay publicaciones."),
    (MessageKey::AdminNoComments, "Aún no hay comentarios."),

    (MessageKey::ErrorNotFoundTitle, "Página No Encontrada"),
    (MessageKey::ErrorNotFoundBody, "La página que buscas no existe."),
    (
        MessageKey::ErrorUnauthorized,
        "Debes iniciar sesión como administrador para ver esta página.",
    ),

    (MessageKey::CommonLoading, "Cargando..."),
    (MessageKey::CommonError, "Ocurrió un error"),
    (MessageKey::CommonSave, "Guardar"),
    (MessageKey::CommonCancel, "Cancelar"),
    (MessageKey::CommonDelete, "Eliminar"),
    (MessageKey::CommonEdit, "Editar"),
    (MessageKey::CommonView, "Ver"),
    (MessageKey::CommonBack, "Atrás"),
    (MessageKey::CommonNext, "Siguiente"),
    (MessageKey::CommonPrevious, "Anterior"),
    (MessageKey::CommonReadMore, "Leer Más"),
    (MessageKey::CommonBy, "por"),
];
